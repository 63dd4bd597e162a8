//! Gap analysis between a target job and the skills a user already has.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::advisor::roles::{classify_employer, FALLBACK_SKILLS};
use crate::advisor::{Advisor, KnownSkills};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRequirementResult {
    pub job_title: String,
    pub company: String,
    pub required_skills: Vec<String>,
    /// Required skills the user lacks, then employer-specific ones. No duplicates.
    pub missing_skills: Vec<String>,
    pub advice: Vec<String>,
}

impl Advisor {
    pub fn match_job_requirements(
        &self,
        job_title: &str,
        company: &str,
        known: &KnownSkills,
    ) -> JobRequirementResult {
        let required_skills: Vec<String> = match self.classify_title(job_title) {
            Some(path) => path.required_skills.clone(),
            None => FALLBACK_SKILLS.iter().map(|s| s.to_string()).collect(),
        };

        let mut missing_skills: Vec<String> = required_skills
            .iter()
            .filter(|s| !known.contains(s))
            .cloned()
            .collect();

        let mut advice = Vec::new();
        if missing_skills.is_empty() {
            advice.push(format!(
                "Your current skills look well-aligned for {job_title}! Focus on demonstrating them with projects and achievements."
            ));
        } else {
            advice.push(format!(
                "To be competitive for {job_title}, consider learning: {}.",
                missing_skills.join(", ")
            ));
            advice.extend(missing_skills.iter().filter_map(|s| self.learning_path_hint(s)));
        }

        let company_name = company.trim();
        if !company_name.is_empty() {
            advice.push(format!(
                "For roles at {company_name}, research their tech stack and tailor your resume to include relevant technologies and keywords used by the company."
            ));

            if let Some(group) = classify_employer(company_name) {
                debug!(company = company_name, group = group.label, "employer group matched");
                advice.push(format!(
                    "Company-specific skills to focus on: {}.",
                    group.skills.join(", ")
                ));
                for skill in group.skills {
                    if !known.contains(skill) && !missing_skills.iter().any(|m| m == skill) {
                        missing_skills.push(skill.to_string());
                    }
                }
            }
        }

        advice.push(
            "Highlight measurable achievements and use concise bullet points on your resume."
                .to_string(),
        );

        JobRequirementResult {
            job_title: job_title.to_string(),
            company: company.to_string(),
            required_skills,
            missing_skills,
            advice,
        }
    }

    /// Beginner/intermediate steps from the first taxonomy that mentions `skill`
    /// in its beginner tier or its own name.
    fn learning_path_hint(&self, skill: &str) -> Option<String> {
        let needle = skill.to_lowercase();
        let taxonomy = self.knowledge().skill_taxonomies.iter().find(|t| {
            t.beginner.join(" ").to_lowercase().contains(&needle)
                || t.area.to_lowercase().contains(&needle)
        })?;

        let first_three = |tier: &[String]| {
            tier.iter()
                .take(3)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        };

        Some(format!(
            "Learning path for {skill}: Beginner -> {}; Intermediate -> {}.",
            first_three(&taxonomy.beginner),
            first_three(&taxonomy.intermediate)
        ))
    }
}
