use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::auth::{hash_password, new_salt, normalize_email, verify_password, AuthUser};
use crate::errors::AppError;
use crate::models::user::{UserProfile, UserRecord};
use crate::state::AppState;

const MIN_PASSWORD_LEN: usize = 8;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub name: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct SessionResponse {
    pub token: String,
    pub user: UserProfile,
}

fn validate_registration(req: &RegisterRequest) -> Result<(), AppError> {
    let email = req.email.trim();
    let valid_email = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
    if !valid_email {
        return Err(AppError::Validation("A valid email address is required".into()));
    }
    if req.name.trim().is_empty() {
        return Err(AppError::Validation("Name is required".into()));
    }
    if req.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

/// POST /api/v1/auth/register
pub async fn handle_register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<SessionResponse>), AppError> {
    validate_registration(&req)?;

    let email = normalize_email(&req.email);
    let salt = new_salt();
    let user = UserRecord {
        email: email.clone(),
        name: req.name.trim().to_string(),
        password_hash: hash_password(&req.password, &salt, &state.config.password_pepper),
        salt,
        created_at: Utc::now(),
        resume: None,
    };
    let profile = UserProfile::from(&user);

    if !state.store.create_user(user).await? {
        warn!("Registration rejected: {email} already exists");
        return Err(AppError::Conflict("Email already registered".into()));
    }

    info!("Registered user {email}");
    let token = state.sessions.issue(&email).await;
    Ok((
        StatusCode::CREATED,
        Json(SessionResponse {
            token,
            user: profile,
        }),
    ))
}

/// POST /api/v1/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let email = normalize_email(&req.email);
    let user = state
        .store
        .get_user(&email)
        .await?
        .ok_or(AppError::Unauthorized)?;

    if !verify_password(
        &req.password,
        &user.salt,
        &state.config.password_pepper,
        &user.password_hash,
    ) {
        warn!("Failed login for {email}");
        return Err(AppError::Unauthorized);
    }

    let token = state.sessions.issue(&email).await;
    Ok(Json(SessionResponse {
        token,
        user: UserProfile::from(&user),
    }))
}

/// POST /api/v1/auth/logout
pub async fn handle_logout(State(state): State<AppState>, auth: AuthUser) -> StatusCode {
    state.sessions.revoke(&auth.token).await;
    state.conversations.forget(&auth.email).await;
    StatusCode::NO_CONTENT
}
