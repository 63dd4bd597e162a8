//! Rule-based resume improvement suggestions.

use serde::{Deserialize, Serialize};

use crate::knowledge::KnowledgeBase;
use crate::models::resume::ResumeRecord;

/// Resumes longer than this are flagged as likely exceeding two pages.
const CONDENSE_THRESHOLD_CHARS: usize = 2000;
const MAX_KEYWORD_SUGGESTIONS: usize = 4;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestions {
    pub formatting: Vec<String>,
    pub content: Vec<String>,
    pub keywords: Vec<String>,
}

/// Produces formatting, content and keyword advice for an extracted resume.
pub fn suggest(record: &ResumeRecord, raw_text: &str, knowledge: &KnowledgeBase) -> Suggestions {
    let mut formatting = vec![
        "Use a clean, consistent font (Arial, Calibri, or Times New Roman) in 10-12pt size"
            .to_string(),
        "Keep margins between 0.5 and 1 inch on all sides".to_string(),
        "Use bullet points for easy readability and scanning".to_string(),
    ];
    let mut content = Vec::new();

    let text_lower = raw_text.to_lowercase();
    if !text_lower.contains("summary") && !text_lower.contains("objective") {
        content.push(
            "Add a professional summary or objective statement at the top of your resume for immediate impact."
                .to_string(),
        );
    }

    if record.skills.is_empty() {
        content.push(
            "Create a dedicated 'Skills' section highlighting your technical and professional abilities."
                .to_string(),
        );
    } else {
        content.push(format!(
            "Great! You have {} skills listed. Consider organizing them by category.",
            record.skills.len()
        ));
    }

    if record.experience.is_empty() {
        content.push(
            "Add a 'Work Experience' section with job titles, companies, dates, and key achievements."
                .to_string(),
        );
    } else {
        content.push(
            "Use action verbs like 'developed', 'managed', 'led', 'improved' to describe your accomplishments."
                .to_string(),
        );
    }

    if record.education.is_empty() {
        content.push(
            "Add an 'Education' section with your degrees, universities, and graduation dates."
                .to_string(),
        );
    } else {
        content.push(format!(
            "You have {} educational qualification(s) listed. Well done!",
            record.education.len()
        ));
    }

    let keywords = keyword_gaps(record, knowledge);

    if raw_text.chars().count() > CONDENSE_THRESHOLD_CHARS {
        formatting.push(
            "Consider condensing your resume - aim for 1-2 pages maximum to keep it concise."
                .to_string(),
        );
    }
    if !raw_text.contains('@') {
        formatting.push(
            "Make sure email address is clearly visible near the top of the page.".to_string(),
        );
    }
    formatting.push(
        "Proofread carefully for spelling and grammar errors - these can hurt your chances!"
            .to_string(),
    );

    Suggestions {
        formatting,
        content,
        keywords,
    }
}

/// In-demand skills not mentioned anywhere in the extracted skill list.
fn keyword_gaps(record: &ResumeRecord, knowledge: &KnowledgeBase) -> Vec<String> {
    let listed = record.skills.join(" ").to_lowercase();
    let missing: Vec<String> = knowledge
        .in_demand_skills
        .iter()
        .filter(|skill| !listed.contains(&skill.to_lowercase()))
        .take(MAX_KEYWORD_SUGGESTIONS)
        .map(|skill| {
            format!("'{skill}' - Consider adding if you have experience with it (in-demand skill)")
        })
        .collect();

    if missing.is_empty() {
        vec![
            "Your skills section looks comprehensive! Make sure they match the job description."
                .to_string(),
        ]
    } else {
        missing
    }
}
