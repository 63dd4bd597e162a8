//! Keyword-priority intent classification for chat messages.

use serde::{Deserialize, Serialize};

use crate::rules::{first_match, KeywordRule};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    CareerGuidance,
    ResumeAdvice,
    InterviewPrep,
    SkillDevelopment,
    General,
}

/// Evaluated in order; "job interview" is career guidance, not interview prep.
const INTENT_RULES: &[KeywordRule<Intent>] = &[
    KeywordRule {
        any_of: &["career path", "career", "job", "profession"],
        all_of: &[],
        result: Intent::CareerGuidance,
    },
    KeywordRule {
        any_of: &["resume", "cv", "application"],
        all_of: &[],
        result: Intent::ResumeAdvice,
    },
    KeywordRule {
        any_of: &["interview", "preparation", "prepare"],
        all_of: &[],
        result: Intent::InterviewPrep,
    },
    KeywordRule {
        any_of: &["skill", "learn", "education"],
        all_of: &[],
        result: Intent::SkillDevelopment,
    },
];

pub fn classify(message: &str) -> Intent {
    first_match(INTENT_RULES, message)
        .copied()
        .unwrap_or(Intent::General)
}
