//! Career-path ranking from declared skills and free-text interests.
//!
//! Score per path:
//! - +2 per required skill that overlaps a user skill by substring (either direction)
//! - +1 per required skill where a user skill is a close spelling of one of its words
//! - +1 if an interest word is a word of the path name
//! - +1 if an interest word is a word of the path description
//!
//! User skills are tried in order per required skill; the first one that
//! overlaps or fuzzily matches decides the points for that skill.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::advisor::Advisor;
use crate::knowledge::CareerPath;

const MAX_SUGGESTIONS: usize = 4;
const FUZZY_CUTOFF: f64 = 0.8;

/// Shorthand → canonical skill name. Checked against the whole skill first,
/// then against its individual words in table order.
const SKILL_ALIASES: &[(&str, &str)] = &[
    ("ml", "Machine Learning"),
    ("ai", "Machine Learning"),
    ("ds", "Data Science"),
    ("js", "JavaScript"),
    ("py", "Python"),
    ("sql", "SQL"),
    ("reactjs", "React"),
    ("react.js", "React"),
    ("node", "Node.js"),
    ("nodejs", "Node.js"),
];

const NEXT_STEPS: &[&str] = &[
    "Compare the top suggested career paths and choose one to explore in depth.",
    "Tailor your resume to emphasize relevant skills and projects for the chosen path.",
    "Build 1-2 focused projects demonstrating the required technical skills.",
    "Use mock interviews and study system design (for engineering roles) or statistics (for data roles).",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerSuggestion {
    pub career: String,
    pub score: u32,
    pub description: String,
    pub key_skills: Vec<String>,
    pub education_fields: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerPlan {
    pub suggestions: Vec<CareerSuggestion>,
    pub next_steps: Vec<String>,
}

/// Expands common shorthand. Blank input yields `None`; anything unrecognised
/// passes through trimmed.
pub fn normalize_skill(skill: &str) -> Option<String> {
    let trimmed = skill.trim();
    if trimmed.is_empty() {
        return None;
    }
    let lower = trimmed.to_lowercase();

    if let Some((_, canonical)) = SKILL_ALIASES.iter().find(|(alias, _)| *alias == lower) {
        return Some(canonical.to_string());
    }

    let tokens: Vec<&str> = lower.split_whitespace().collect();
    if let Some((_, canonical)) = SKILL_ALIASES
        .iter()
        .find(|(alias, _)| tokens.contains(alias))
    {
        return Some(canonical.to_string());
    }

    Some(trimmed.to_string())
}

fn words(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split(|c: char| c.is_whitespace() || c == ',' || c == ';')
        .map(|w| w.trim_matches(|c: char| matches!(c, '.' | ':' | '!' | '?' | '(' | ')' | '"')))
        .filter(|w| !w.is_empty())
        .map(String::from)
        .collect()
}

fn is_close(a: &str, b: &str) -> bool {
    strsim::normalized_levenshtein(a, b) >= FUZZY_CUTOFF
}

/// Points one required skill earns from the user's (lowercased) skills.
fn required_skill_points(required: &str, user_skills: &[String]) -> u32 {
    let required_lower = required.to_lowercase();
    let required_words: Vec<&str> = required_lower.split_whitespace().collect();

    for user in user_skills {
        if user.contains(&required_lower) || required_lower.contains(user.as_str()) {
            return 2;
        }
        if required_words.iter().any(|w| is_close(user, w)) {
            return 1;
        }
    }
    0
}

fn score_path(path: &CareerPath, user_skills: &[String], interest_words: &HashSet<String>) -> u32 {
    let mut score: u32 = path
        .required_skills
        .iter()
        .map(|req| required_skill_points(req, user_skills))
        .sum();

    if !words(&path.name).is_disjoint(interest_words) {
        score += 1;
    }
    if !words(&path.description).is_disjoint(interest_words) {
        score += 1;
    }
    score
}

impl Advisor {
    /// Ranks catalog career paths for the given skills and interests.
    ///
    /// Returns at most four suggestions, highest score first; equal scores
    /// keep catalog order.
    pub fn generate_career_path(&self, skills: &[String], interests: &str) -> CareerPlan {
        let user_skills: Vec<String> = skills
            .iter()
            .filter_map(|s| normalize_skill(s))
            .map(|s| s.to_lowercase())
            .collect();
        let interest_words = words(interests);

        let mut scored: Vec<(&CareerPath, u32)> = self
            .knowledge()
            .career_paths
            .iter()
            .map(|p| (p, score_path(p, &user_skills, &interest_words)))
            .collect();
        // Stable: ties keep catalog order.
        scored.sort_by(|a, b| b.1.cmp(&a.1));

        debug!(
            skills = user_skills.len(),
            top = scored.first().map(|(p, _)| p.name.as_str()).unwrap_or(""),
            "career paths ranked"
        );

        CareerPlan {
            suggestions: scored
                .into_iter()
                .take(MAX_SUGGESTIONS)
                .map(|(path, score)| CareerSuggestion {
                    career: path.name.clone(),
                    score,
                    description: path.description.clone(),
                    key_skills: path.required_skills.clone(),
                    education_fields: path.education_fields.clone(),
                })
                .collect(),
            next_steps: NEXT_STEPS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
