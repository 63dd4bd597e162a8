//! Routes a chat message to the reply template for its intent.
//!
//! Stateless apart from the caller-owned `ConversationContext`, which keeps
//! the most recent resume seen in one user's conversation.

use std::sync::{Arc, LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::advisor::{Advisor, KnownSkills};
use crate::chat::intent::{classify, Intent};
use crate::chat::responses;
use crate::models::resume::StoredResume;

// Separator between a role and an employer: "... developer at Amazon".
static ROLE_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s+(?:in|at|for)\s+").expect("role separator pattern is valid")
});

static COMPANY_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9 &.\-]+$").expect("company name pattern is valid")
});

/// Per-conversation memory. One per user; never shared between users.
#[derive(Debug, Clone, Default)]
pub struct ConversationContext {
    pub last_resume: Option<StoredResume>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub role: String,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl ChatReply {
    fn assistant(content: String) -> Self {
        Self {
            role: "assistant".to_string(),
            content,
            kind: "text".to_string(),
        }
    }
}

/// A "`<role> at <company>`" request found in a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleQuery {
    pub role: String,
    pub company: String,
}

/// Splits on the last "in/at/for" separator: the company follows it, the role
/// sits between it and the separator before it (or the message start).
pub fn parse_role_query(message: &str) -> Option<RoleQuery> {
    let message = message.trim();
    let separators: Vec<_> = ROLE_SEPARATOR.find_iter(message).collect();
    let last = separators.last()?;
    let role_start = separators
        .len()
        .checked_sub(2)
        .map(|i| separators[i].end())
        .unwrap_or(0);

    let role = message[role_start..last.start()].trim();
    let role = ["a ", "an ", "the "]
        .iter()
        .find_map(|article| {
            role.get(..article.len())
                .filter(|prefix| prefix.eq_ignore_ascii_case(article))
                .map(|_| role[article.len()..].trim_start())
        })
        .unwrap_or(role);

    let company = message[last.end()..]
        .trim()
        .trim_end_matches(|c: char| matches!(c, '?' | '!' | '.' | ','))
        .trim();

    if role.is_empty() || company.is_empty() || !COMPANY_NAME.is_match(company) {
        return None;
    }

    Some(RoleQuery {
        role: role.to_string(),
        company: company.to_string(),
    })
}

pub struct Dispatcher {
    advisor: Arc<Advisor>,
}

impl Dispatcher {
    pub fn new(advisor: Arc<Advisor>) -> Self {
        Self { advisor }
    }

    /// Produces a reply for `message`.
    ///
    /// `resume` is the resume supplied with this message, if any; it also
    /// becomes the context's last-seen resume.
    pub fn respond(
        &self,
        message: &str,
        context: &mut ConversationContext,
        resume: Option<&StoredResume>,
    ) -> ChatReply {
        if let Some(resume) = resume {
            context.last_resume = Some(resume.clone());
        }

        let knowledge = self.advisor.knowledge();
        let intent = classify(message);
        debug!(?intent, "chat intent classified");

        let content = match intent {
            Intent::CareerGuidance => responses::career_guidance(knowledge),
            Intent::ResumeAdvice => {
                responses::resume_advice(knowledge, resume.map(|r| &r.extracted_data))
            }
            Intent::InterviewPrep => responses::interview_prep(knowledge),
            Intent::SkillDevelopment => self.skill_development(message, context),
            Intent::General => responses::general(),
        };

        ChatReply::assistant(content)
    }

    fn skill_development(&self, message: &str, context: &ConversationContext) -> String {
        let Some(query) = parse_role_query(message) else {
            return responses::skill_development(self.advisor.knowledge());
        };

        let known = context
            .last_resume
            .as_ref()
            .map(|r| KnownSkills::new(r.all_skills()))
            .unwrap_or_default();

        let result = self
            .advisor
            .match_job_requirements(&query.role, &query.company, &known);
        responses::targeted_skill_guidance(&query.role, &result)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::knowledge::KnowledgeBase;
    use crate::models::resume::ResumeRecord;

    fn dispatcher() -> Dispatcher {
        Dispatcher::new(Arc::new(Advisor::new(Arc::new(KnowledgeBase::builtin()))))
    }

    fn stored_resume(skills: &[&str], provided: &[&str]) -> StoredResume {
        StoredResume {
            filename: "cv.pdf".to_string(),
            uploaded_at: Utc::now(),
            extracted_data: ResumeRecord {
                skills: skills.iter().map(|s| s.to_string()).collect(),
                ..Default::default()
            },
            provided_qualifications: vec![],
            provided_skills: provided.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_parse_role_query() {
        assert_eq!(
            parse_role_query("skills for full stack developer at Amazon?"),
            Some(RoleQuery {
                role: "full stack developer".to_string(),
                company: "Amazon".to_string(),
            })
        );
        assert_eq!(
            parse_role_query("skills for a data analyst at JP Morgan"),
            Some(RoleQuery {
                role: "data analyst".to_string(),
                company: "JP Morgan".to_string(),
            })
        );
        assert_eq!(
            parse_role_query("The Data Engineer in Acme & Co."),
            Some(RoleQuery {
                role: "Data Engineer".to_string(),
                company: "Acme & Co".to_string(),
            })
        );
        assert_eq!(parse_role_query("I want to learn Rust"), None);
        assert_eq!(parse_role_query("learn design at uni (online)"), None);
        assert_eq!(parse_role_query("skills for"), None);
    }

    #[test]
    fn test_reply_shape() {
        let mut ctx = ConversationContext::default();
        let reply = dispatcher().respond("hi", &mut ctx, None);
        assert_eq!(reply.role, "assistant");
        assert_eq!(reply.kind, "text");
        assert!(reply.content.starts_with("That's a great question"));
    }

    #[test]
    fn test_resume_context_is_retained() {
        let d = dispatcher();
        let mut ctx = ConversationContext::default();
        let resume = stored_resume(&["Rust"], &[]);

        let reply = d.respond("review my resume", &mut ctx, Some(&resume));
        assert!(reply.content.contains("personalized suggestions"));
        assert_eq!(ctx.last_resume.as_ref().map(|r| r.filename.as_str()), Some("cv.pdf"));

        // A later message without a resume keeps the earlier one for skill
        // guidance, but resume advice only uses the resume sent with it.
        let reply = d.respond("and my cv?", &mut ctx, None);
        assert!(ctx.last_resume.is_some());
        assert!(reply.content.contains("essential resume tips"));
        assert!(!reply.content.contains("Current skills: Rust"));
    }

    #[test]
    fn test_targeted_skill_guidance_uses_last_resume() {
        let d = dispatcher();
        let mut ctx = ConversationContext::default();
        let resume = stored_resume(&["Programming", "Problem Solving"], &["data structures"]);
        d.respond("hello", &mut ctx, Some(&resume));

        let reply = d.respond("which skills for a software engineer at Google", &mut ctx, None);
        assert!(reply
            .content
            .starts_with("Targeted guidance for software engineer at Google:"));
        assert!(reply.content.contains(
            "• Missing Skills: System Design, Distributed Systems, Algorithms, Large-scale Systems"
        ));
    }

    #[test]
    fn test_generic_skill_paths_without_role() {
        let mut ctx = ConversationContext::default();
        let reply = dispatcher().respond("what should I learn next", &mut ctx, None);
        assert!(reply.content.contains("**Programming Learning Path:**"));
        assert!(reply.content.contains("**Data Science Learning Path:**"));
    }

    #[test]
    fn test_intent_priority_routes_to_interview() {
        let mut ctx = ConversationContext::default();
        let reply = dispatcher().respond("help me prepare for an interview", &mut ctx, None);
        assert!(reply.content.starts_with("Preparing for an interview?"));
    }

    #[test]
    fn test_separate_contexts_do_not_share_resume() {
        let d = dispatcher();
        let mut alice = ConversationContext::default();
        let mut bob = ConversationContext::default();
        d.respond("hello", &mut alice, Some(&stored_resume(&["Rust"], &[])));
        d.respond("hello", &mut bob, None);
        assert!(alice.last_resume.is_some());
        assert!(bob.last_resume.is_none());
    }
}
