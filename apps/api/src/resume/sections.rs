//! Heading-based section segmentation.
//!
//! A section starts at the first case-insensitive occurrence of one of its
//! headings and runs lazily up to the first stop condition: a blank line, one
//! of the rule's stop headings, or the end of the text. Matching is
//! forward-only; the first plausible heading wins.

use std::sync::LazyLock;

use regex::Regex;

pub struct SectionRule {
    pub name: &'static str,
    pattern: Regex,
}

impl SectionRule {
    fn new(name: &'static str, headings: &[&str], stop_headings: &[&str]) -> Self {
        let source = format!(
            r"(?is)(?:{})[\s:]*(.*?)(?:\n[ \t]*\n|{}|\z)",
            alternation(headings),
            alternation(stop_headings)
        );
        // Built from fixed heading tables, never from input.
        let pattern = Regex::new(&source).expect("section heading pattern is valid");
        Self { name, pattern }
    }

    /// Returns the body of the first matching section, trimmed. `None` when no
    /// heading is present or the body is empty.
    pub fn capture<'t>(&self, text: &'t str) -> Option<&'t str> {
        let body = self.pattern.captures(text)?.get(1)?.as_str().trim();
        if body.is_empty() {
            tracing::debug!(section = self.name, "section heading found with empty body");
            None
        } else {
            Some(body)
        }
    }
}

fn alternation(words: &[&str]) -> String {
    words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|")
}

pub static SKILLS: LazyLock<SectionRule> = LazyLock::new(|| {
    SectionRule::new(
        "skills",
        &["skills", "competencies", "technical skills"],
        &["education", "experience"],
    )
});

pub static EDUCATION: LazyLock<SectionRule> = LazyLock::new(|| {
    SectionRule::new(
        "education",
        &["education", "academic"],
        &["experience", "skills"],
    )
});

pub static EXPERIENCE: LazyLock<SectionRule> = LazyLock::new(|| {
    SectionRule::new(
        "experience",
        &["experience", "work history", "employment"],
        &["education", "skills"],
    )
});
