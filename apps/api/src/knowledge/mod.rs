//! Static career knowledge base.
//!
//! Built once in `main` and shared read-only through `AppState` as
//! `Arc<KnowledgeBase>`. Nothing mutates it after construction.

mod catalog;
pub mod handlers;

use serde::{Deserialize, Serialize};

/// A career path the advisor can classify into and score against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerPath {
    pub name: String,
    pub required_skills: Vec<String>,
    pub education_fields: Vec<String>,
    pub description: String,
}

/// Three ordered learning tiers for one skill area.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillTaxonomy {
    pub area: String,
    pub beginner: Vec<String>,
    pub intermediate: Vec<String>,
    pub advanced: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeTips {
    pub formatting: Vec<String>,
    pub content: Vec<String>,
    pub structure: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeBase {
    pub career_paths: Vec<CareerPath>,
    pub skill_taxonomies: Vec<SkillTaxonomy>,
    pub resume_tips: ResumeTips,
    pub interview_tips: Vec<String>,
    pub in_demand_skills: Vec<String>,
}

impl KnowledgeBase {
    /// The built-in catalog shipped with the service.
    pub fn builtin() -> Self {
        catalog::builtin()
    }

    pub fn career_path(&self, name: &str) -> Option<&CareerPath> {
        self.career_paths.iter().find(|p| p.name == name)
    }
}
