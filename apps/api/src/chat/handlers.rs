//! Axum route handlers for the chat widget and the resume content.

use std::time::Duration;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::chat::{ChatError, APOLOGY_REPLY, DEMO_MODE_REPLY};
use crate::errors::AppError;
use crate::models::resume::ResumeSnapshot;
use crate::state::AppState;

/// Pause before the demo-mode reply so the widget's typing indicator shows.
const DEMO_REPLY_DELAY: Duration = Duration::from_millis(800);

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplySource {
    Model,
    Demo,
    Fallback,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
    pub source: ReplySource,
}

/// POST /api/v1/chat
///
/// Answers a visitor question. Missing credentials and upstream failures become
/// canned replies; the visitor never sees raw error text.
pub async fn handle_chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(request) = payload?;
    let response = match state.chat.ask(&request.message).await {
        Ok(reply) => ChatResponse {
            reply,
            source: ReplySource::Model,
        },
        Err(ChatError::EmptyQuestion) => {
            return Err(AppError::Validation("message cannot be empty".to_string()));
        }
        Err(ChatError::Unavailable) => {
            tokio::time::sleep(DEMO_REPLY_DELAY).await;
            ChatResponse {
                reply: DEMO_MODE_REPLY.to_string(),
                source: ReplySource::Demo,
            }
        }
        Err(ChatError::Service(_)) => ChatResponse {
            reply: APOLOGY_REPLY.to_string(),
            source: ReplySource::Fallback,
        },
    };

    Ok(Json(response))
}

/// GET /api/v1/resume
///
/// Returns the resume content the site renders and the assistant is grounded on.
pub async fn handle_get_resume(State(state): State<AppState>) -> Json<ResumeSnapshot> {
    Json(state.chat.resume().clone())
}
