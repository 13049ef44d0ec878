//! Automation readiness quiz.
//!
//! Scoring lives in `util::readiness`; this component tracks the selected
//! option per question and shows the bucketed result once all four are
//! answered.

use leptos::prelude::*;

use crate::util::readiness::{self, MAX_SCORE, QUESTIONS};

/// Four-question readiness quiz with a scored result card.
#[component]
pub fn ReadinessQuiz() -> impl IntoView {
    let answers = RwSignal::new([None::<usize>; 4]);

    let complete = move || answers.get().iter().all(Option::is_some);
    let selected = move || {
        let picked = answers.get();
        [
            picked[0].unwrap_or(0),
            picked[1].unwrap_or(0),
            picked[2].unwrap_or(0),
            picked[3].unwrap_or(0),
        ]
    };

    let reset = move |_| answers.set([None; 4]);

    view! {
        <section class="readiness-quiz">
            <h2 class="readiness-quiz__title">"How Ready Are You to Automate?"</h2>

            <div class="readiness-quiz__questions">
                {QUESTIONS
                    .iter()
                    .enumerate()
                    .map(|(qi, question)| {
                        view! {
                            <fieldset class="readiness-quiz__question">
                                <legend class="readiness-quiz__prompt">{question.prompt}</legend>
                                {question
                                    .options
                                    .iter()
                                    .enumerate()
                                    .map(|(oi, option)| {
                                        let label = option.label;
                                        view! {
                                            <button
                                                class="readiness-quiz__option"
                                                class=("readiness-quiz__option--selected", move || {
                                                    answers.get()[qi] == Some(oi)
                                                })
                                                on:click=move |_| {
                                                    answers.update(|a| a[qi] = Some(oi));
                                                }
                                            >
                                                {label}
                                            </button>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </fieldset>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <Show when=complete>
                {move || {
                    let score = readiness::score(&selected());
                    let level = readiness::level_for(score);
                    view! {
                        <div class="readiness-quiz__result">
                            <span class="readiness-quiz__score">
                                {format!("{score} / {MAX_SCORE}")}
                            </span>
                            <span class="readiness-quiz__level">
                                {format!("Readiness: {}", level.label())}
                            </span>
                            <p class="readiness-quiz__summary">{level.summary()}</p>
                            <p class="readiness-quiz__plan">
                                {format!("Suggested plan: {}", level.recommended_plan())}
                            </p>
                            <button class="btn" on:click=reset>
                                "Retake Quiz"
                            </button>
                        </div>
                    }
                }}
            </Show>
        </section>
    }
}
