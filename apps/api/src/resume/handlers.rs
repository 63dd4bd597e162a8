use std::path::Path;

use anyhow::Context;
use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::resume::{ResumeRecord, StoredResume};
use crate::resume::{documents, extract, suggest, Suggestions};
use crate::state::AppState;

#[derive(Serialize)]
pub struct UploadResponse {
    pub filename: String,
    pub extracted_data: ResumeRecord,
    pub suggestions: Suggestions,
}

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub extracted_data: ResumeRecord,
    pub suggestions: Suggestions,
}

/// Comma-separated form field → trimmed, non-empty entries.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge("Upload exceeds the maximum allowed size".into())
    } else {
        AppError::Validation(err.body_text())
    }
}

/// POST /api/v1/resumes
pub async fn handle_upload(
    State(state): State<AppState>,
    auth: AuthUser,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut provided_skills = Vec::new();
    let mut provided_qualifications = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => {
                // Keep only the final path component of client-supplied names.
                let filename = field
                    .file_name()
                    .and_then(|n| Path::new(n).file_name())
                    .and_then(|n| n.to_str())
                    .unwrap_or_default()
                    .to_string();
                let data = field.bytes().await.map_err(multipart_error)?;
                file = Some((filename, data.to_vec()));
            }
            "skills" => {
                provided_skills = split_list(&field.text().await.map_err(multipart_error)?);
            }
            "qualifications" => {
                provided_qualifications =
                    split_list(&field.text().await.map_err(multipart_error)?);
            }
            _ => {}
        }
    }

    let (filename, data) =
        file.ok_or_else(|| AppError::Validation("No resume file provided".into()))?;
    if filename.is_empty() {
        return Err(AppError::Validation("No file selected".into()));
    }
    if data.len() > state.config.max_upload_bytes {
        warn!("Rejected {filename}: {} bytes", data.len());
        return Err(AppError::PayloadTooLarge(format!(
            "Resume must be at most {} bytes",
            state.config.max_upload_bytes
        )));
    }
    if documents::allowed_extension(&filename).is_none() {
        warn!("Rejected {filename}: unsupported type");
        return Err(AppError::Validation(
            "Invalid file type. Please upload PDF, DOCX, DOC, or TXT".into(),
        ));
    }

    let text = {
        let filename = filename.clone();
        tokio::task::spawn_blocking(move || documents::extract_text(&filename, &data))
            .await
            .context("document extraction task failed")??
    };

    let extracted_data = extract(&text);
    let suggestions = suggest(&extracted_data, &text, &state.knowledge);

    state
        .store
        .save_resume(
            &auth.email,
            StoredResume {
                filename: filename.clone(),
                uploaded_at: Utc::now(),
                extracted_data: extracted_data.clone(),
                provided_qualifications,
                provided_skills,
            },
        )
        .await?;

    info!(
        "Stored resume {filename} for {} ({} skills, {} jobs)",
        auth.email,
        extracted_data.skills.len(),
        extracted_data.experience.len()
    );

    Ok(Json(UploadResponse {
        filename,
        extracted_data,
        suggestions,
    }))
}

/// GET /api/v1/resumes/current
pub async fn handle_current_resume(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<StoredResume>, AppError> {
    state
        .store
        .get_resume(&auth.email)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No resume uploaded yet".into()))
}

/// POST /api/v1/resumes/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Json<AnalyzeResponse> {
    let extracted_data = extract(&req.text);
    let suggestions = suggest(&extracted_data, &req.text, &state.knowledge);
    Json(AnalyzeResponse {
        extracted_data,
        suggestions,
    })
}
