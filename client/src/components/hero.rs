//! Home page hero section.

use leptos::prelude::*;

/// Top-of-page hero with headline and CTA pair.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <h1 class="hero__title">"Automate Your Business DNA"</h1>
            <p class="hero__subtitle">
                "WorkflowGene Cloud connects the tools you already use and turns \
                 repetitive manual work into reliable automated workflows."
            </p>
            <div class="hero__actions">
                <a class="btn btn--primary" href="/pricing">
                    "Start Free Trial"
                </a>
                <a class="btn" href="/resources">
                    "See How It Works"
                </a>
            </div>
        </section>
    }
}
