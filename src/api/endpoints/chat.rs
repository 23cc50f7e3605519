//! Chat endpoint.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::assistant::ChatTurn;
use crate::models::ChatRole;

#[derive(Deserialize)]
pub struct ChatSendRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

/// History turns arrive as plain strings; unknown roles read as the
/// patient speaking.
#[derive(Deserialize)]
pub struct HistoryEntry {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Serialize)]
pub struct ChatSendResponse {
    pub reply: String,
}

/// `POST /api/chat` — send a message, get the assistant's reply.
///
/// The assistant is stateless; clients resend the history they want
/// considered. A model failure still answers 200 with the offline reply.
pub async fn send(
    State(ctx): State<ApiContext>,
    Json(req): Json<ChatSendRequest>,
) -> Result<Json<ChatSendResponse>, ApiError> {
    if req.message.trim().is_empty() {
        return Err(ApiError::BadRequest("Message cannot be empty".into()));
    }
    if req.message.len() > 2000 {
        return Err(ApiError::BadRequest(
            "Message too long (max 2000 chars)".into(),
        ));
    }

    let history: Vec<ChatTurn> = req
        .history
        .iter()
        .map(|entry| ChatTurn {
            role: ChatRole::from_str(&entry.role).unwrap_or(ChatRole::User),
            content: entry.content.clone(),
        })
        .collect();

    let chat = ctx.chat.clone();
    let message = req.message.clone();
    let reply = tokio::task::spawn_blocking(move || chat.reply(&message, &history))
        .await
        .map_err(|e| ApiError::Internal(format!("chat task failed: {e}")))?;

    Ok(Json(ChatSendResponse { reply }))
}
