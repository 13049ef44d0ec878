use super::*;

#[test]
fn monthly_price_label_uses_listed_rate() {
    let tier = &TIERS[0];
    assert_eq!(price_label(tier, BillingPeriod::Monthly), "$29/mo");
}

#[test]
fn annual_price_label_applies_discount() {
    let tier = &TIERS[1];
    assert_eq!(
        price_label(tier, BillingPeriod::Annual),
        "$79/mo billed annually"
    );
}

#[test]
fn unlisted_price_renders_custom_for_both_periods() {
    let tier = &TIERS[2];
    assert_eq!(price_label(tier, BillingPeriod::Monthly), "Custom");
    assert_eq!(price_label(tier, BillingPeriod::Annual), "Custom");
}

#[test]
fn exactly_one_tier_is_highlighted() {
    assert_eq!(TIERS.iter().filter(|t| t.highlighted).count(), 1);
}

#[test]
fn billing_period_defaults_to_monthly() {
    assert_eq!(BillingPeriod::default(), BillingPeriod::Monthly);
}
