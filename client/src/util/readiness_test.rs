use super::*;

#[test]
fn questions_carry_ascending_point_tiers() {
    for question in &QUESTIONS {
        let points: Vec<u8> = question.options.iter().map(|o| o.points).collect();
        assert_eq!(points, vec![1, 2, 3, 4], "question: {}", question.prompt);
    }
}

#[test]
fn all_lowest_answers_score_minimum_and_very_low() {
    let score = score(&[0, 0, 0, 0]);
    assert_eq!(score, MIN_SCORE);
    assert_eq!(level_for(score), ReadinessLevel::VeryLow);
}

#[test]
fn all_highest_answers_score_maximum_and_high() {
    let score = score(&[3, 3, 3, 3]);
    assert_eq!(score, MAX_SCORE);
    assert_eq!(level_for(score), ReadinessLevel::High);
}

#[test]
fn level_thresholds_bucket_at_fixed_boundaries() {
    assert_eq!(level_for(4), ReadinessLevel::VeryLow);
    assert_eq!(level_for(5), ReadinessLevel::VeryLow);
    assert_eq!(level_for(6), ReadinessLevel::Low);
    assert_eq!(level_for(9), ReadinessLevel::Low);
    assert_eq!(level_for(10), ReadinessLevel::Medium);
    assert_eq!(level_for(13), ReadinessLevel::Medium);
    assert_eq!(level_for(14), ReadinessLevel::High);
    assert_eq!(level_for(16), ReadinessLevel::High);
}

#[test]
fn out_of_range_answer_counts_as_lowest_tier() {
    assert_eq!(score(&[9, 3, 3, 3]), 1 + 4 + 4 + 4);
}

#[test]
fn mixed_answers_sum_selected_tiers() {
    // tiers: 2 + 3 + 1 + 4
    assert_eq!(score(&[1, 2, 0, 3]), 10);
    assert_eq!(level_for(10), ReadinessLevel::Medium);
}

#[test]
fn levels_map_to_recommended_plans() {
    assert_eq!(ReadinessLevel::VeryLow.recommended_plan(), "Starter");
    assert_eq!(ReadinessLevel::Low.recommended_plan(), "Starter");
    assert_eq!(ReadinessLevel::Medium.recommended_plan(), "Professional");
    assert_eq!(ReadinessLevel::High.recommended_plan(), "Enterprise");
}

#[test]
fn level_labels_are_distinct() {
    let labels = [
        ReadinessLevel::VeryLow.label(),
        ReadinessLevel::Low.label(),
        ReadinessLevel::Medium.label(),
        ReadinessLevel::High.label(),
    ];
    for (i, a) in labels.iter().enumerate() {
        for (j, b) in labels.iter().enumerate() {
            if i != j {
                assert_ne!(a, b);
            }
        }
    }
}
