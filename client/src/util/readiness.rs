//! Automation readiness quiz scoring.
//!
//! Four fixed questions, four options each. Every option carries a 1-4
//! point tier; the summed score (4-16) buckets into a qualitative
//! readiness level at fixed thresholds.

#[cfg(test)]
#[path = "readiness_test.rs"]
mod readiness_test;

/// Lowest possible quiz score (all answers in the bottom tier).
pub const MIN_SCORE: u8 = 4;
/// Highest possible quiz score (all answers in the top tier).
pub const MAX_SCORE: u8 = 16;

/// One selectable answer with its point tier.
#[derive(Clone, Copy, Debug)]
pub struct QuizOption {
    pub label: &'static str,
    pub points: u8,
}

/// One quiz question with its four options, ordered lowest tier first.
#[derive(Clone, Copy, Debug)]
pub struct QuizQuestion {
    pub prompt: &'static str,
    pub options: [QuizOption; 4],
}

/// The four automation-maturity questions shown by the quiz.
pub const QUESTIONS: [QuizQuestion; 4] = [
    QuizQuestion {
        prompt: "How are your core business processes documented today?",
        options: [
            QuizOption { label: "They live in people's heads", points: 1 },
            QuizOption { label: "Scattered notes and spreadsheets", points: 2 },
            QuizOption { label: "Written procedures for most processes", points: 3 },
            QuizOption { label: "Versioned, regularly reviewed playbooks", points: 4 },
        ],
    },
    QuizQuestion {
        prompt: "How much of your weekly work is repetitive manual data entry?",
        options: [
            QuizOption { label: "Most of it — we copy data between tools daily", points: 1 },
            QuizOption { label: "A significant chunk of most days", points: 2 },
            QuizOption { label: "A few hours a week", points: 3 },
            QuizOption { label: "Almost none — routine transfers are automated", points: 4 },
        ],
    },
    QuizQuestion {
        prompt: "How do your business tools talk to each other?",
        options: [
            QuizOption { label: "They don't — everything is exported by hand", points: 1 },
            QuizOption { label: "A couple of native integrations", points: 2 },
            QuizOption { label: "Key systems are connected via integrations", points: 3 },
            QuizOption { label: "A connected stack with shared data flows", points: 4 },
        ],
    },
    QuizQuestion {
        prompt: "Who would own an automation rollout on your team?",
        options: [
            QuizOption { label: "Nobody has time for it right now", points: 1 },
            QuizOption { label: "Someone could pick it up part-time", points: 2 },
            QuizOption { label: "A named owner with leadership backing", points: 3 },
            QuizOption { label: "A dedicated team with a roadmap", points: 4 },
        ],
    },
];

/// Qualitative readiness buckets, lowest to highest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadinessLevel {
    VeryLow,
    Low,
    Medium,
    High,
}

impl ReadinessLevel {
    /// Short display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::VeryLow => "Very Low",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// One-sentence summary shown under the score.
    #[must_use]
    pub fn summary(self) -> &'static str {
        match self {
            Self::VeryLow => {
                "Start by documenting your highest-volume processes before automating anything."
            }
            Self::Low => {
                "You have a foundation to build on; begin with one well-understood workflow."
            }
            Self::Medium => {
                "Your team is ready for meaningful automation across several workflows."
            }
            Self::High => {
                "You are positioned to automate aggressively and measure gains from day one."
            }
        }
    }

    /// Plan suggested for this bucket in the results card.
    #[must_use]
    pub fn recommended_plan(self) -> &'static str {
        match self {
            Self::VeryLow | Self::Low => "Starter",
            Self::Medium => "Professional",
            Self::High => "Enterprise",
        }
    }
}

/// Sum the point tiers for the selected option index of each question.
/// Out-of-range indexes count as the lowest tier.
#[must_use]
pub fn score(selected: &[usize; 4]) -> u8 {
    QUESTIONS
        .iter()
        .zip(selected)
        .map(|(q, &idx)| q.options.get(idx).map_or(1, |opt| opt.points))
        .sum()
}

/// Bucket a score into a readiness level at the fixed thresholds.
#[must_use]
pub fn level_for(score: u8) -> ReadinessLevel {
    if score >= 14 {
        ReadinessLevel::High
    } else if score >= 10 {
        ReadinessLevel::Medium
    } else if score >= 6 {
        ReadinessLevel::Low
    } else {
        ReadinessLevel::VeryLow
    }
}
