use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 0.01
}

#[test]
fn parse_field_defaults_non_numeric_to_zero() {
    assert_eq!(parse_field(""), 0.0);
    assert_eq!(parse_field("abc"), 0.0);
    assert_eq!(parse_field("12x"), 0.0);
    assert_eq!(parse_field("-40"), 0.0);
    assert_eq!(parse_field("NaN"), 0.0);
    assert_eq!(parse_field("inf"), 0.0);
}

#[test]
fn parse_field_accepts_plain_and_decimal_numbers() {
    assert_eq!(parse_field("40"), 40.0);
    assert_eq!(parse_field(" 12.5 "), 12.5);
    assert_eq!(parse_field("0"), 0.0);
}

#[test]
fn projection_matches_reference_scenario() {
    // costs=0, hours=40, rate=50, efficiency=70%
    let out = project(&RoiInputs {
        current_software_costs: 0.0,
        hours_per_week: 40.0,
        hourly_rate: 50.0,
        efficiency_gain_pct: 70.0,
    });

    assert!(close(out.monthly_cost, 8_660.0));
    assert!(close(out.annual_cost, 103_920.0));
    assert!(close(out.potential_savings, 72_744.0));
    assert!(close(out.net_savings, 67_744.0));
    // 5000 / (72744 / 12) ~= 0.825 months
    assert!((out.payback_months - 0.825).abs() < 0.001);
}

#[test]
fn current_costs_fold_into_monthly_cost() {
    let out = project(&RoiInputs {
        current_software_costs: 1_000.0,
        hours_per_week: 10.0,
        hourly_rate: 20.0,
        efficiency_gain_pct: 50.0,
    });
    assert!(close(out.monthly_cost, 1_000.0 + 10.0 * 20.0 * WEEKS_PER_MONTH));
    assert!(close(out.annual_cost, out.monthly_cost * 12.0));
}

#[test]
fn zero_savings_yields_infinite_payback() {
    let out = project(&RoiInputs::default());
    assert_eq!(out.potential_savings, 0.0);
    assert!(close(out.net_savings, -IMPLEMENTATION_COST));
    assert!(out.payback_months.is_infinite());
}

#[test]
fn format_currency_groups_thousands() {
    assert_eq!(format_currency(0.0), "$0");
    assert_eq!(format_currency(950.0), "$950");
    assert_eq!(format_currency(8_660.4), "$8,660");
    assert_eq!(format_currency(103_920.0), "$103,920");
    assert_eq!(format_currency(1_234_567.0), "$1,234,567");
    assert_eq!(format_currency(-4_050.0), "-$4,050");
}

#[test]
fn format_months_renders_dash_for_infinite() {
    assert_eq!(format_months(0.82), "0.8 months");
    assert_eq!(format_months(14.0), "14.0 months");
    assert_eq!(format_months(f64::INFINITY), "\u{2014}");
}
