//! Learning path cards for the resources page.

use leptos::prelude::*;

struct LearningPath {
    title: &'static str,
    level: &'static str,
    duration: &'static str,
    module_count: u8,
    summary: &'static str,
}

const PATHS: [LearningPath; 3] = [
    LearningPath {
        title: "Automation Foundations",
        level: "Beginner",
        duration: "2 hours",
        module_count: 6,
        summary: "Map a manual process, pick a first workflow, and ship it.",
    },
    LearningPath {
        title: "Connecting Your Stack",
        level: "Intermediate",
        duration: "4 hours",
        module_count: 9,
        summary: "CRM, billing, and support tools talking to each other reliably.",
    },
    LearningPath {
        title: "Scaling Automation Across Teams",
        level: "Advanced",
        duration: "6 hours",
        module_count: 12,
        summary: "Governance, rollout ownership, and measuring efficiency gains.",
    },
];

/// Static grid of learning path cards.
#[component]
pub fn LearningPaths() -> impl IntoView {
    view! {
        <section class="learning-paths">
            <h2 class="learning-paths__title">"Learning Paths"</h2>
            <div class="learning-paths__grid">
                {PATHS
                    .iter()
                    .map(|path| {
                        view! {
                            <article class="learning-paths__card">
                                <span class="learning-paths__level">{path.level}</span>
                                <h3 class="learning-paths__name">{path.title}</h3>
                                <p class="learning-paths__summary">{path.summary}</p>
                                <span class="learning-paths__meta">
                                    {format!("{} modules \u{00b7} {}", path.module_count, path.duration)}
                                </span>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
