//! Interactive ROI calculator for the pricing page.
//!
//! All math lives in `util::roi`; this component holds the four form
//! fields as local state and recomputes the projection on every keystroke.
//! Non-numeric input silently reads as zero.

use leptos::prelude::*;

use crate::util::roi::{self, RoiInputs};

/// ROI calculator card: four inputs and a derived projection summary.
#[component]
pub fn RoiCalculator() -> impl IntoView {
    let costs = RwSignal::new("0".to_owned());
    let hours = RwSignal::new("40".to_owned());
    let rate = RwSignal::new("50".to_owned());
    let efficiency = RwSignal::new("70".to_owned());

    let projection = move || {
        roi::project(&RoiInputs {
            current_software_costs: roi::parse_field(&costs.get()),
            hours_per_week: roi::parse_field(&hours.get()),
            hourly_rate: roi::parse_field(&rate.get()),
            efficiency_gain_pct: roi::parse_field(&efficiency.get()),
        })
    };

    view! {
        <section class="roi-calculator">
            <h2 class="roi-calculator__title">"Calculate Your ROI"</h2>
            <p class="roi-calculator__intro">
                "Estimate what manual work costs you today and what automation gives back."
            </p>

            <div class="roi-calculator__form">
                <RoiField label="Current monthly software costs ($)" value=costs/>
                <RoiField label="Hours spent on manual work per week" value=hours/>
                <RoiField label="Average hourly rate ($)" value=rate/>
                <RoiField label="Expected efficiency gain (%)" value=efficiency/>
            </div>

            <div class="roi-calculator__results">
                <RoiStat label="Monthly cost of manual work" value=Signal::derive(move || roi::format_currency(projection().monthly_cost))/>
                <RoiStat label="Annual cost" value=Signal::derive(move || roi::format_currency(projection().annual_cost))/>
                <RoiStat label="Potential annual savings" value=Signal::derive(move || roi::format_currency(projection().potential_savings))/>
                <RoiStat label="Net savings in year one" value=Signal::derive(move || roi::format_currency(projection().net_savings))/>
                <RoiStat label="Payback period" value=Signal::derive(move || roi::format_months(projection().payback_months))/>
            </div>

            <p class="roi-calculator__note">
                {format!(
                    "Assumes a one-time implementation cost of {}.",
                    roi::format_currency(roi::IMPLEMENTATION_COST)
                )}
            </p>
        </section>
    }
}

/// Single labeled numeric input bound to a string signal.
#[component]
fn RoiField(label: &'static str, value: RwSignal<String>) -> impl IntoView {
    view! {
        <label class="roi-calculator__label">
            {label}
            <input
                class="roi-calculator__input"
                type="number"
                min="0"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

/// Single derived stat in the results panel.
#[component]
fn RoiStat(label: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div class="roi-calculator__stat">
            <span class="roi-calculator__stat-label">{label}</span>
            <span class="roi-calculator__stat-value">{value}</span>
        </div>
    }
}
