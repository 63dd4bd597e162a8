use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Structured fields pulled out of raw resume text.
///
/// Every field defaults to absent/empty; extraction never fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub education: Vec<String>,
    #[serde(default)]
    pub experience: Vec<String>,
}

/// A user's most recently uploaded resume as persisted by the record store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredResume {
    pub filename: String,
    pub uploaded_at: DateTime<Utc>,
    pub extracted_data: ResumeRecord,
    #[serde(default)]
    pub provided_qualifications: Vec<String>,
    #[serde(default)]
    pub provided_skills: Vec<String>,
}

impl StoredResume {
    /// Extracted skills followed by user-declared ones.
    pub fn all_skills(&self) -> impl Iterator<Item = &str> {
        self.extracted_data
            .skills
            .iter()
            .chain(self.provided_skills.iter())
            .map(String::as_str)
    }
}
