use std::collections::HashSet;

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::warn;

use crate::advisor::{CareerPlan, JobRequirementResult, KnownSkills};
use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct JobRequirementsRequest {
    pub job_title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Deserialize)]
pub struct CareerPathRequest {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub interests: String,
}

/// Request skills followed by the stored resume's extracted and declared
/// skills, first occurrence kept (case-insensitive).
async fn skills_with_resume(
    state: &AppState,
    email: &str,
    requested: Vec<String>,
) -> Result<Vec<String>, AppError> {
    let resume = state.store.get_resume(email).await?;
    let stored: Vec<String> = resume
        .as_ref()
        .map(|r| r.all_skills().map(String::from).collect())
        .unwrap_or_default();

    let mut seen = HashSet::new();
    Ok(requested
        .into_iter()
        .chain(stored)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty() && seen.insert(s.to_lowercase()))
        .collect())
}

/// POST /api/v1/advice/job-requirements
pub async fn handle_job_requirements(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<JobRequirementsRequest>,
) -> Result<Json<JobRequirementResult>, AppError> {
    let job_title = req.job_title.trim();
    if job_title.is_empty() {
        warn!("Job requirements requested without a title by {}", auth.email);
        return Err(AppError::Validation("Job title is required".into()));
    }

    let skills = skills_with_resume(&state, &auth.email, req.skills).await?;
    let known = KnownSkills::new(skills.iter().map(String::as_str));
    let result = state
        .advisor
        .match_job_requirements(job_title, req.company.trim(), &known);
    Ok(Json(result))
}

/// POST /api/v1/advice/career-path
pub async fn handle_career_path(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CareerPathRequest>,
) -> Result<Json<CareerPlan>, AppError> {
    let skills = skills_with_resume(&state, &auth.email, req.skills).await?;
    Ok(Json(state.advisor.generate_career_path(&skills, &req.interests)))
}
