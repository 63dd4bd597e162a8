//! Pattern-based resume field extraction. Total over any input string.
//!
//! Contact fields are searched across the whole text; list fields come from
//! their own section (see `sections`). Missing sections degrade to empty lists.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::models::resume::ResumeRecord;
use crate::resume::sections::{EDUCATION, EXPERIENCE, SKILLS};

pub const MAX_SKILLS: usize = 10;
pub const MAX_EDUCATION: usize = 5;
pub const MAX_EXPERIENCE: usize = 5;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("email pattern is valid")
});

// Optional +1, optional parentheses, and `-`, `.` or whitespace between groups.
static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+1)?[-.\s]?\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}")
        .expect("phone pattern is valid")
});

static SKILL_DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,•\n]").expect("skill delimiter pattern is valid"));

// Degree abbreviation with optional periods, then everything up to a comma or newline.
static DEGREE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:B\.?A\.?|B\.?S\.?|M\.?A\.?|M\.?S\.?|M\.?B\.?A\.?|Ph\.?D\.?)[^,\n]*")
        .expect("degree pattern is valid")
});

static JOB_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("job break pattern is valid"));

/// Extracts a `ResumeRecord` from raw document text. Never fails.
pub fn extract(raw_text: &str) -> ResumeRecord {
    let text = raw_text.replace("\r\n", "\n");

    let record = ResumeRecord {
        email: extract_email(&text),
        phone: extract_phone(&text),
        skills: extract_skills(&text),
        education: extract_education(&text),
        experience: extract_experience(&text),
    };

    debug!(
        has_email = record.email.is_some(),
        has_phone = record.phone.is_some(),
        skills = record.skills.len(),
        education = record.education.len(),
        experience = record.experience.len(),
        "resume fields extracted"
    );

    record
}

fn extract_email(text: &str) -> Option<String> {
    EMAIL.find(text).map(|m| m.as_str().to_string())
}

fn extract_phone(text: &str) -> Option<String> {
    PHONE
        .find(text)
        .map(|m| m.as_str().trim().trim_start_matches(['-', '.']).to_string())
}

fn extract_skills(text: &str) -> Vec<String> {
    let Some(body) = SKILLS.capture(text) else {
        return Vec::new();
    };
    SKILL_DELIMITER
        .split(body)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .take(MAX_SKILLS)
        .map(String::from)
        .collect()
}

fn extract_education(text: &str) -> Vec<String> {
    let Some(body) = EDUCATION.capture(text) else {
        return Vec::new();
    };
    DEGREE
        .find_iter(body)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .take(MAX_EDUCATION)
        .map(String::from)
        .collect()
}

fn extract_experience(text: &str) -> Vec<String> {
    let Some(body) = EXPERIENCE.capture(text) else {
        return Vec::new();
    };
    JOB_BREAK
        .split(body)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .take(MAX_EXPERIENCE)
        .map(String::from)
        .collect()
}
