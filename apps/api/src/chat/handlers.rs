use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use tracing::warn;

use crate::auth::AuthUser;
use crate::chat::ChatReply;
use crate::errors::AppError;
use crate::models::chat::{ChatMessage, ChatRole};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SendMessageRequest {
    pub message: String,
}

#[derive(Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<usize>,
}

/// POST /api/v1/chat
pub async fn handle_send_message(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<SendMessageRequest>,
) -> Result<Json<ChatReply>, AppError> {
    let message = req.message.trim();
    if message.is_empty() {
        warn!("Empty chat message from {}", auth.email);
        return Err(AppError::Validation("Message cannot be empty".into()));
    }

    let resume = state.store.get_resume(&auth.email).await?;
    let resume_name = resume.as_ref().map(|r| r.filename.clone());

    let reply = state
        .conversations
        .with_context(&auth.email, |ctx| {
            state.dispatcher.respond(message, ctx, resume.as_ref())
        })
        .await;

    state
        .store
        .append_chat_message(
            &auth.email,
            ChatMessage::new(ChatRole::User, message, resume_name.clone()),
        )
        .await?;
    state
        .store
        .append_chat_message(
            &auth.email,
            ChatMessage::new(ChatRole::Assistant, reply.content.clone(), resume_name),
        )
        .await?;

    Ok(Json(reply))
}

/// GET /api/v1/chat/history
pub async fn handle_chat_history(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<HistoryQuery>,
) -> Result<Json<Vec<ChatMessage>>, AppError> {
    let limit = params.limit.unwrap_or(state.config.chat_history_limit);
    let history = state.store.chat_history(&auth.email, limit).await?;
    Ok(Json(history))
}
