//! ROI projection math for the pricing-page calculator.
//!
//! All functions are pure; the calculator component recomputes the full
//! projection on every keystroke.

#[cfg(test)]
#[path = "roi_test.rs"]
mod roi_test;

/// Average weeks per month used to annualize weekly labor hours.
pub const WEEKS_PER_MONTH: f64 = 4.33;

/// Assumed one-time implementation cost the payback period is measured
/// against.
pub const IMPLEMENTATION_COST: f64 = 5_000.0;

/// Form inputs to the projection, already parsed to numbers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RoiInputs {
    /// Current monthly software spend, in dollars.
    pub current_software_costs: f64,
    /// Weekly hours spent on manual processes.
    pub hours_per_week: f64,
    /// Loaded hourly rate for that work, in dollars.
    pub hourly_rate: f64,
    /// Expected efficiency gain from automation, as a percentage (0-100).
    pub efficiency_gain_pct: f64,
}

/// Projection derived from [`RoiInputs`] by [`project`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoiProjection {
    pub monthly_cost: f64,
    pub annual_cost: f64,
    pub potential_savings: f64,
    pub net_savings: f64,
    /// Months until savings offset [`IMPLEMENTATION_COST`]. Infinite when
    /// projected savings are zero.
    pub payback_months: f64,
}

/// Parse a form field into a non-negative number. Anything that does not
/// parse cleanly (empty input, letters, negative or non-finite values)
/// defaults to `0.0`.
#[must_use]
pub fn parse_field(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .unwrap_or(0.0)
}

/// Compute the full ROI projection.
#[must_use]
pub fn project(inputs: &RoiInputs) -> RoiProjection {
    let monthly_cost = inputs.current_software_costs
        + inputs.hours_per_week * inputs.hourly_rate * WEEKS_PER_MONTH;
    let annual_cost = monthly_cost * 12.0;
    let potential_savings = annual_cost * (inputs.efficiency_gain_pct / 100.0);
    let net_savings = potential_savings - IMPLEMENTATION_COST;
    let payback_months = if potential_savings > 0.0 {
        IMPLEMENTATION_COST / (potential_savings / 12.0)
    } else {
        f64::INFINITY
    };

    RoiProjection {
        monthly_cost,
        annual_cost,
        potential_savings,
        net_savings,
        payback_months,
    }
}

/// Format a dollar amount with thousands separators, e.g. `$103,920`.
/// Negative amounts render as `-$1,234`.
#[must_use]
pub fn format_currency(value: f64) -> String {
    let rounded = value.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Format a payback period, e.g. `0.8 months`. Non-finite values render as
/// a dash.
#[must_use]
pub fn format_months(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.1} months")
    } else {
        "\u{2014}".to_owned()
    }
}
