//! Heuristic SEO scoring for the metadata editor.
//!
//! Four checks (title length, description length, keyword presence, social
//! sharing image), each worth 25 points. The editor shows the total
//! alongside per-check status so out-of-range fields are visible at a
//! glance.

use std::ops::RangeInclusive;

use content::SeoData;

#[cfg(test)]
#[path = "seo_score_test.rs"]
mod seo_score_test;

/// Recommended title length, in characters.
pub const TITLE_LENGTH_RANGE: RangeInclusive<usize> = 30..=60;

/// Recommended meta description length, in characters.
pub const DESCRIPTION_LENGTH_RANGE: RangeInclusive<usize> = 120..=160;

/// Points awarded per passing check.
pub const POINTS_PER_CHECK: u8 = 25;

/// Outcome of a single heuristic check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckStatus {
    Good,
    NeedsWork,
}

/// A named check with its outcome and the hint shown when it fails.
#[derive(Clone, Copy, Debug)]
pub struct SeoCheck {
    pub name: &'static str,
    pub status: CheckStatus,
    pub hint: &'static str,
}

/// Aggregate score for a page's SEO fields.
#[derive(Clone, Debug)]
pub struct SeoScore {
    /// 0-100, [`POINTS_PER_CHECK`] per passing check.
    pub score: u8,
    pub checks: [SeoCheck; 4],
}

/// Whether a title length falls in the recommended range.
#[must_use]
pub fn title_in_range(title: &str) -> bool {
    TITLE_LENGTH_RANGE.contains(&title.chars().count())
}

/// Whether a description length falls in the recommended range.
#[must_use]
pub fn description_in_range(description: &str) -> bool {
    DESCRIPTION_LENGTH_RANGE.contains(&description.chars().count())
}

/// Whether the comma-separated keyword list contains at least one keyword.
#[must_use]
pub fn has_keywords(keywords: &str) -> bool {
    keywords.split(',').any(|k| !k.trim().is_empty())
}

/// Whether a social sharing image is set.
#[must_use]
pub fn has_social_image(og_image: &str) -> bool {
    !og_image.trim().is_empty()
}

/// Run all checks against the given fields.
#[must_use]
pub fn evaluate(seo: &SeoData) -> SeoScore {
    let results = [
        (
            "Title length",
            title_in_range(&seo.title),
            "Aim for 30-60 characters.",
        ),
        (
            "Description length",
            description_in_range(&seo.description),
            "Aim for 120-160 characters.",
        ),
        (
            "Keywords",
            has_keywords(&seo.keywords),
            "Add a comma-separated keyword list.",
        ),
        (
            "Social image",
            has_social_image(&seo.og_image),
            "Set an Open Graph image for link previews.",
        ),
    ];

    let checks = results.map(|(name, passed, hint)| SeoCheck {
        name,
        status: if passed { CheckStatus::Good } else { CheckStatus::NeedsWork },
        hint,
    });

    let score = checks
        .iter()
        .filter(|c| c.status == CheckStatus::Good)
        .count() as u8
        * POINTS_PER_CHECK;

    SeoScore { score, checks }
}

/// Qualitative label for a score, shown next to the number.
#[must_use]
pub fn rating_label(score: u8) -> &'static str {
    if score >= 100 {
        "Excellent"
    } else if score >= 75 {
        "Good"
    } else if score >= 50 {
        "Fair"
    } else {
        "Needs work"
    }
}
