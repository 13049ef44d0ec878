//! Community page: forum listing, contributors, newsletter.

use leptos::prelude::*;

use crate::components::forum_board::ForumBoard;
use crate::components::newsletter_signup::NewsletterSignup;

const CONTRIBUTORS: [(&str, &str); 4] = [
    ("jenna.m", "214 posts"),
    ("miguel.s", "187 posts"),
    ("casey", "150 posts"),
    ("devon", "98 posts"),
];

/// Community page.
#[component]
pub fn CommunityPage() -> impl IntoView {
    view! {
        <div class="community-page">
            <ForumBoard/>

            <section class="community-page__contributors">
                <h2 class="community-page__contributors-title">"Top Contributors"</h2>
                <ul class="community-page__contributor-list">
                    {CONTRIBUTORS
                        .iter()
                        .map(|(name, posts)| {
                            view! {
                                <li class="community-page__contributor">
                                    <span class="community-page__contributor-name">{*name}</span>
                                    <span class="community-page__contributor-posts">{*posts}</span>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </section>

            <NewsletterSignup/>
        </div>
    }
}
