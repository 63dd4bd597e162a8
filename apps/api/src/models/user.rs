use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub salt: String,
    pub created_at: DateTime<Utc>,
    /// Filename of the last uploaded resume, if any.
    pub resume: Option<String>,
}

/// The client-facing view of a user. Never carries credentials.
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub resume: Option<String>,
}

impl From<&UserRecord> for UserProfile {
    fn from(user: &UserRecord) -> Self {
        Self {
            email: user.email.clone(),
            name: user.name.clone(),
            created_at: user.created_at,
            resume: user.resume.clone(),
        }
    }
}
