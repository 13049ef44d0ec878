//! Community forum topic listing with category filter tabs.
//!
//! Topics are illustrative hard-coded content; in a real deployment they
//! would come from an external community service. The filter is plain
//! local state.

use leptos::prelude::*;

#[cfg(test)]
#[path = "forum_board_test.rs"]
mod forum_board_test;

/// One forum topic row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ForumTopic {
    pub title: &'static str,
    pub author: &'static str,
    pub category: &'static str,
    pub replies: u32,
    pub views: u32,
    pub last_activity: &'static str,
}

/// Categories shown as filter tabs, in display order.
pub const CATEGORIES: [&str; 4] = ["General", "Integrations", "Builder", "Showcase"];

/// The seeded topic list.
pub const TOPICS: [ForumTopic; 6] = [
    ForumTopic {
        title: "How do you structure approval workflows across departments?",
        author: "jenna.m",
        category: "General",
        replies: 18,
        views: 412,
        last_activity: "2h ago",
    },
    ForumTopic {
        title: "Salesforce sync keeps skipping custom fields",
        author: "ops_tom",
        category: "Integrations",
        replies: 7,
        views: 198,
        last_activity: "5h ago",
    },
    ForumTopic {
        title: "Share your grid layouts for long-form landing pages",
        author: "casey",
        category: "Builder",
        replies: 24,
        views: 731,
        last_activity: "1d ago",
    },
    ForumTopic {
        title: "We automated our entire onboarding flow — walkthrough inside",
        author: "miguel.s",
        category: "Showcase",
        replies: 41,
        views: 1_204,
        last_activity: "1d ago",
    },
    ForumTopic {
        title: "Webhook retries: what cadence do you use?",
        author: "devon",
        category: "Integrations",
        replies: 12,
        views: 356,
        last_activity: "2d ago",
    },
    ForumTopic {
        title: "Monthly community call notes (July)",
        author: "team",
        category: "General",
        replies: 3,
        views: 540,
        last_activity: "3d ago",
    },
];

/// Filter topics by category. `None` returns every topic in order.
#[must_use]
pub fn filter_topics(topics: &[ForumTopic], category: Option<&str>) -> Vec<ForumTopic> {
    topics
        .iter()
        .filter(|t| category.is_none_or(|c| t.category == c))
        .copied()
        .collect()
}

/// Forum topic listing with category tabs.
#[component]
pub fn ForumBoard() -> impl IntoView {
    let active_category = RwSignal::new(None::<&'static str>);

    let visible = move || filter_topics(&TOPICS, active_category.get());

    view! {
        <section class="forum-board">
            <h2 class="forum-board__title">"Community Forum"</h2>

            <nav class="forum-board__tabs">
                <button
                    class="forum-board__tab"
                    class=("forum-board__tab--active", move || active_category.get().is_none())
                    on:click=move |_| active_category.set(None)
                >
                    "All"
                </button>
                {CATEGORIES
                    .iter()
                    .map(|category| {
                        let category = *category;
                        view! {
                            <button
                                class="forum-board__tab"
                                class=("forum-board__tab--active", move || {
                                    active_category.get() == Some(category)
                                })
                                on:click=move |_| active_category.set(Some(category))
                            >
                                {category}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>

            <ul class="forum-board__topics">
                {move || {
                    visible()
                        .into_iter()
                        .map(|topic| {
                            view! {
                                <li class="forum-board__topic">
                                    <span class="forum-board__topic-title">{topic.title}</span>
                                    <span class="forum-board__topic-meta">
                                        {format!(
                                            "{} \u{00b7} {} \u{00b7} {} replies \u{00b7} {} views \u{00b7} {}",
                                            topic.author,
                                            topic.category,
                                            topic.replies,
                                            topic.views,
                                            topic.last_activity,
                                        )}
                                    </span>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </section>
    }
}
