//! Newsletter signup with a timed confirmation state.
//!
//! Subscribing flips local state to a confirmation message; a fixed-delay
//! timer resets the form afterwards. This is deliberately not a real
//! request/response cycle.

use leptos::prelude::*;

/// Milliseconds the confirmation message stays visible.
#[cfg(feature = "hydrate")]
const CONFIRMATION_MS: u64 = 4_000;

/// Email capture form for the site footer sections.
#[component]
pub fn NewsletterSignup() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let subscribed = RwSignal::new(false);

    let subscribe = move |_| {
        if email.get().trim().is_empty() || subscribed.get() {
            return;
        }
        subscribed.set(true);
        email.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(CONFIRMATION_MS))
                    .await;
                subscribed.set(false);
            });
        }
    };

    view! {
        <div class="newsletter">
            <h3 class="newsletter__title">"Automation tips, monthly"</h3>
            <Show
                when=move || !subscribed.get()
                fallback=|| {
                    view! {
                        <p class="newsletter__confirmation">
                            "Thanks! You're on the list."
                        </p>
                    }
                }
            >
                <div class="newsletter__form">
                    <input
                        class="newsletter__input"
                        type="email"
                        placeholder="you@company.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                subscribe(());
                            }
                        }
                    />
                    <button class="btn btn--primary" on:click=move |_| subscribe(())>
                        "Subscribe"
                    </button>
                </div>
            </Show>
        </div>
    }
}
