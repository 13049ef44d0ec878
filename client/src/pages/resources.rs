//! Resources page: learning paths, featured guide, readiness quiz.

use leptos::prelude::*;

use crate::components::learning_paths::LearningPaths;
use crate::components::readiness_quiz::ReadinessQuiz;
use crate::util::markdown::render_markdown_html;

const FEATURED_GUIDE: &str = "\
# Your First Automated Workflow

Most teams start automation in the wrong place: the most painful process \
instead of the most *predictable* one.

## Pick a boring process

Look for work that is:

- High volume
- Low judgement
- Already documented

## Measure before you automate

Write down the hours per week the process takes today. The ROI calculator \
on the pricing page turns that number into an annual cost and a payback \
period.

## Ship, then expand

One reliable workflow beats five half-finished ones. Expand only after the \
first has run cleanly for two weeks.";

/// Resources page.
#[component]
pub fn ResourcesPage() -> impl IntoView {
    let guide_html = render_markdown_html(FEATURED_GUIDE);

    view! {
        <div class="resources-page">
            <LearningPaths/>

            <section class="resources-page__guide">
                <h2 class="resources-page__guide-title">"Featured Guide"</h2>
                <article class="resources-page__guide-body" inner_html=guide_html></article>
            </section>

            <ReadinessQuiz/>
        </div>
    }
}
