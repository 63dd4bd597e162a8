//! Public, unauthenticated catalog listings.

use axum::{extract::State, Json};

use crate::knowledge::{CareerPath, ResumeTips, SkillTaxonomy};
use crate::state::AppState;

/// GET /api/v1/catalog/careers
pub async fn handle_list_careers(State(state): State<AppState>) -> Json<Vec<CareerPath>> {
    Json(state.knowledge.career_paths.clone())
}

/// GET /api/v1/catalog/resume-tips
pub async fn handle_resume_tips(State(state): State<AppState>) -> Json<ResumeTips> {
    Json(state.knowledge.resume_tips.clone())
}

/// GET /api/v1/catalog/interview-tips
pub async fn handle_interview_tips(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.knowledge.interview_tips.clone())
}

/// GET /api/v1/catalog/skills
pub async fn handle_skill_paths(State(state): State<AppState>) -> Json<Vec<SkillTaxonomy>> {
    Json(state.knowledge.skill_taxonomies.clone())
}
