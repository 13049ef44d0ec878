//! Pricing tiers with a monthly/annual billing toggle.

use leptos::prelude::*;

#[cfg(test)]
#[path = "pricing_table_test.rs"]
mod pricing_table_test;

/// Discount applied to the monthly rate when billed annually.
pub const ANNUAL_DISCOUNT: f64 = 0.20;

/// Billing period selected by the toggle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BillingPeriod {
    #[default]
    Monthly,
    Annual,
}

/// One pricing tier. `monthly_price: None` renders as "Custom".
#[derive(Clone, Copy, Debug)]
pub struct PricingTier {
    pub name: &'static str,
    pub monthly_price: Option<f64>,
    pub blurb: &'static str,
    pub features: &'static [&'static str],
    pub highlighted: bool,
}

/// The three published tiers.
pub const TIERS: [PricingTier; 3] = [
    PricingTier {
        name: "Starter",
        monthly_price: Some(29.0),
        blurb: "For small teams automating their first workflows.",
        features: &["5 active workflows", "2 connected apps", "Email support"],
        highlighted: false,
    },
    PricingTier {
        name: "Professional",
        monthly_price: Some(99.0),
        blurb: "For growing teams connecting their whole stack.",
        features: &[
            "Unlimited workflows",
            "All integrations",
            "Workflow analytics",
            "Priority support",
        ],
        highlighted: true,
    },
    PricingTier {
        name: "Enterprise",
        monthly_price: None,
        blurb: "For organizations with compliance and scale needs.",
        features: &[
            "Dedicated environment",
            "SSO and audit logs",
            "Custom integrations",
            "Named account manager",
        ],
        highlighted: false,
    },
];

/// Display price for a tier under the given billing period, e.g. `$99/mo`
/// or `$79/mo billed annually`. Tiers without a listed price render as
/// `Custom`.
#[must_use]
pub fn price_label(tier: &PricingTier, period: BillingPeriod) -> String {
    match (tier.monthly_price, period) {
        (None, _) => "Custom".to_owned(),
        (Some(monthly), BillingPeriod::Monthly) => format!("${monthly:.0}/mo"),
        (Some(monthly), BillingPeriod::Annual) => {
            let discounted = monthly * (1.0 - ANNUAL_DISCOUNT);
            format!("${discounted:.0}/mo billed annually")
        }
    }
}

/// Pricing table section with the billing toggle.
#[component]
pub fn PricingTable() -> impl IntoView {
    let period = RwSignal::new(BillingPeriod::default());

    view! {
        <section class="pricing-table">
            <h2 class="pricing-table__title">"Simple, Predictable Pricing"</h2>

            <div class="pricing-table__toggle">
                <button
                    class="pricing-table__period"
                    class=("pricing-table__period--active", move || {
                        period.get() == BillingPeriod::Monthly
                    })
                    on:click=move |_| period.set(BillingPeriod::Monthly)
                >
                    "Monthly"
                </button>
                <button
                    class="pricing-table__period"
                    class=("pricing-table__period--active", move || {
                        period.get() == BillingPeriod::Annual
                    })
                    on:click=move |_| period.set(BillingPeriod::Annual)
                >
                    "Annual (save 20%)"
                </button>
            </div>

            <div class="pricing-table__tiers">
                {TIERS
                    .iter()
                    .map(|tier| {
                        let tier = *tier;
                        view! {
                            <div
                                class="pricing-table__tier"
                                class=("pricing-table__tier--highlighted", tier.highlighted)
                            >
                                <h3 class="pricing-table__name">{tier.name}</h3>
                                <p class="pricing-table__blurb">{tier.blurb}</p>
                                <span class="pricing-table__price">
                                    {move || price_label(&tier, period.get())}
                                </span>
                                <ul class="pricing-table__features">
                                    {tier
                                        .features
                                        .iter()
                                        .map(|feature| view! { <li>{*feature}</li> })
                                        .collect::<Vec<_>>()}
                                </ul>
                                <a class="btn btn--primary" href="/pricing">
                                    {if tier.monthly_price.is_some() {
                                        "Start Free Trial"
                                    } else {
                                        "Contact Sales"
                                    }}
                                </a>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
