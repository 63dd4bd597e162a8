//! Password digests, bearer sessions, and the `AuthUser` extractor.

pub mod handlers;

use std::collections::HashMap;

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use sha2::{Digest, Sha256};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub fn new_salt() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Hex SHA-256 of salt, server pepper, then password.
pub fn hash_password(password: &str, salt: &str, pepper: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(pepper.as_bytes());
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Checks `password` against a stored digest. The comparison touches every
/// byte regardless of where the first difference is.
pub fn verify_password(password: &str, salt: &str, pepper: &str, expected: &str) -> bool {
    let digest = hash_password(password, salt, pepper);
    let (a, b) = (digest.as_bytes(), expected.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// Live bearer tokens → user email. Tokens do not survive a restart.
#[derive(Default)]
pub struct SessionRegistry {
    tokens: RwLock<HashMap<String, String>>,
}

impl SessionRegistry {
    pub async fn issue(&self, email: &str) -> String {
        let token = Uuid::new_v4().to_string();
        self.tokens
            .write()
            .await
            .insert(token.clone(), email.to_string());
        token
    }

    pub async fn resolve(&self, token: &str) -> Option<String> {
        self.tokens.read().await.get(token).cloned()
    }

    pub async fn revoke(&self, token: &str) -> bool {
        self.tokens.write().await.remove(token).is_some()
    }
}

/// The authenticated caller, resolved from `Authorization: Bearer <token>`.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub email: String,
    pub token: String,
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    let value = parts.headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or(AppError::Unauthorized)?;
        let email = state
            .sessions
            .resolve(token)
            .await
            .ok_or(AppError::Unauthorized)?;
        Ok(AuthUser {
            email,
            token: token.to_string(),
        })
    }
}
