//! Pricing page: tiers, ROI calculator, FAQ.

use leptos::prelude::*;

use crate::components::pricing_table::PricingTable;
use crate::components::roi_calculator::RoiCalculator;

const FAQS: [(&str, &str); 3] = [
    (
        "Can I change plans later?",
        "Yes. Upgrades apply immediately; downgrades take effect at the next billing cycle.",
    ),
    (
        "Is there a free trial?",
        "Every paid plan starts with a 14-day trial. No credit card required.",
    ),
    (
        "What counts as an active workflow?",
        "A workflow that has run at least once in the current billing period.",
    ),
];

/// Pricing page.
#[component]
pub fn PricingPage() -> impl IntoView {
    view! {
        <div class="pricing-page">
            <PricingTable/>
            <RoiCalculator/>

            <section class="pricing-page__faq">
                <h2 class="pricing-page__faq-title">"Frequently Asked Questions"</h2>
                {FAQS
                    .iter()
                    .map(|(question, answer)| {
                        view! {
                            <details class="pricing-page__faq-item">
                                <summary class="pricing-page__faq-question">{*question}</summary>
                                <p class="pricing-page__faq-answer">{*answer}</p>
                            </details>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>
        </div>
    }
}
