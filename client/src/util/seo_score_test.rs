use super::*;

fn seo_with(title: &str, description: &str, keywords: &str, og_image: &str) -> SeoData {
    SeoData {
        title: title.to_owned(),
        description: description.to_owned(),
        keywords: keywords.to_owned(),
        og_image: og_image.to_owned(),
        ..SeoData::default()
    }
}

#[test]
fn title_of_45_chars_is_in_range() {
    let title = "a".repeat(45);
    assert_eq!(title.chars().count(), 45);
    assert!(title_in_range(&title));
}

#[test]
fn title_of_10_chars_is_out_of_range() {
    assert!(!title_in_range(&"a".repeat(10)));
}

#[test]
fn title_range_boundaries_are_inclusive() {
    assert!(title_in_range(&"a".repeat(30)));
    assert!(title_in_range(&"a".repeat(60)));
    assert!(!title_in_range(&"a".repeat(29)));
    assert!(!title_in_range(&"a".repeat(61)));
}

#[test]
fn description_of_140_chars_is_in_range() {
    assert!(description_in_range(&"d".repeat(140)));
}

#[test]
fn description_range_boundaries_are_inclusive() {
    assert!(description_in_range(&"d".repeat(120)));
    assert!(description_in_range(&"d".repeat(160)));
    assert!(!description_in_range(&"d".repeat(119)));
    assert!(!description_in_range(&"d".repeat(161)));
}

#[test]
fn lengths_count_characters_not_bytes() {
    // 45 multibyte characters should still read as in range.
    let title = "\u{e9}".repeat(45);
    assert!(title.len() > 45);
    assert!(title_in_range(&title));
}

#[test]
fn keyword_presence_ignores_empty_segments() {
    assert!(has_keywords("automation, workflow"));
    assert!(has_keywords("automation"));
    assert!(!has_keywords(""));
    assert!(!has_keywords(" , ,"));
}

#[test]
fn social_image_presence_trims_whitespace() {
    assert!(has_social_image("/img/og.png"));
    assert!(!has_social_image(""));
    assert!(!has_social_image("   "));
}

#[test]
fn evaluate_awards_25_points_per_passing_check() {
    let all_good = seo_with(
        &"t".repeat(45),
        &"d".repeat(140),
        "automation, workflow",
        "/img/og.png",
    );
    assert_eq!(evaluate(&all_good).score, 100);

    let none = seo_with("short", "short", "", "");
    assert_eq!(evaluate(&none).score, 0);

    let half = seo_with(&"t".repeat(45), "short", "", "/img/og.png");
    assert_eq!(evaluate(&half).score, 50);
}

#[test]
fn evaluate_reports_per_check_status() {
    let seo = seo_with(&"t".repeat(45), "short", "automation", "");
    let result = evaluate(&seo);
    let statuses: Vec<CheckStatus> = result.checks.iter().map(|c| c.status).collect();
    assert_eq!(
        statuses,
        vec![
            CheckStatus::Good,
            CheckStatus::NeedsWork,
            CheckStatus::Good,
            CheckStatus::NeedsWork,
        ]
    );
}

#[test]
fn rating_labels_bucket_scores() {
    assert_eq!(rating_label(100), "Excellent");
    assert_eq!(rating_label(75), "Good");
    assert_eq!(rating_label(50), "Fair");
    assert_eq!(rating_label(25), "Needs work");
    assert_eq!(rating_label(0), "Needs work");
}
