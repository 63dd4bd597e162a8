//! Career advisor: job-requirement gap analysis and career-path ranking over
//! the static knowledge base. Pure and synchronous; safe to share across
//! requests behind an `Arc`.

pub mod career_match;
pub mod handlers;
pub mod job_match;
pub mod roles;

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::knowledge::{CareerPath, KnowledgeBase};

pub use career_match::CareerPlan;
pub use job_match::JobRequirementResult;

pub struct Advisor {
    knowledge: Arc<KnowledgeBase>,
}

impl Advisor {
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self { knowledge }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Maps a free-text job title onto a catalog career path.
    ///
    /// Keyword rules first, then a substring match in either direction
    /// against catalog names. A blank title is a substring of every name and
    /// lands on the first catalog entry. `None` means the title is
    /// unclassifiable.
    pub fn classify_title(&self, job_title: &str) -> Option<&CareerPath> {
        let title_lower = job_title.trim().to_lowercase();

        let by_keyword = roles::classify_title_keywords(&title_lower)
            .and_then(|name| self.knowledge.career_path(name));

        let path = by_keyword.or_else(|| {
            self.knowledge.career_paths.iter().find(|p| {
                let name = p.name.to_lowercase();
                name.contains(&title_lower) || title_lower.contains(&name)
            })
        });

        debug!(
            job_title,
            career = path.map(|p| p.name.as_str()).unwrap_or("<unmatched>"),
            "job title classified"
        );
        path
    }
}

/// Case-insensitive set of skills a user already has.
#[derive(Debug, Clone, Default)]
pub struct KnownSkills(HashSet<String>);

impl KnownSkills {
    pub fn new<'a>(skills: impl IntoIterator<Item = &'a str>) -> Self {
        Self(
            skills
                .into_iter()
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect(),
        )
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.0.contains(&skill.trim().to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn advisor() -> Advisor {
        Advisor::new(Arc::new(KnowledgeBase::builtin()))
    }

    #[test]
    fn test_classify_by_keyword() {
        let a = advisor();
        assert_eq!(a.classify_title("Senior Backend Engineer").unwrap().name, "Software Engineer");
    }

    #[test]
    fn test_classify_by_catalog_name() {
        let a = advisor();
        // Only the catalog substring rule can match a bare "manager".
        assert_eq!(a.classify_title("manager").unwrap().name, "Product Manager");
    }

    #[test]
    fn test_unclassifiable_title() {
        let a = advisor();
        assert!(a.classify_title("Pastry Chef").is_none());
    }

    #[test]
    fn test_blank_title_takes_first_catalog_entry() {
        let a = advisor();
        assert_eq!(a.classify_title("").unwrap().name, "Software Engineer");
        assert_eq!(a.classify_title("   ").unwrap().name, "Software Engineer");
    }

    #[test]
    fn test_known_skills_case_insensitive() {
        let known = KnownSkills::new(["  Python ", "sql", ""]);
        assert!(known.contains("PYTHON"));
        assert!(known.contains("SQL"));
        assert!(!known.contains("Rust"));
        assert!(!KnownSkills::default().contains("python"));
    }
}
