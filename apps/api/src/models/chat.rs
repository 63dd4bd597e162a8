use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One persisted line of a user's chat history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    /// Filename of the resume in context when the message was sent.
    pub resume_context: Option<String>,
}

impl ChatMessage {
    pub fn new(role: ChatRole, content: impl Into<String>, resume_context: Option<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Utc::now(),
            resume_context,
        }
    }
}
