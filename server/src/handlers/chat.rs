// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

//! Chat handler
//!
//! Hands a validated student message to the agent and wraps its reply.

use std::sync::Arc;

use anyhow::Context;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use tbbot::Message;

use crate::AppState;
use crate::HandlerError;
use crate::errors::{ClientError, ServerError};
use crate::messages::{ChatRequest, ChatResponse};

/// HTTP handler for `POST /chat`
pub async fn chat_http(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, HandlerError> {
    let Json(request) = payload.map_err(ClientError::from)?;
    request.validate()?;

    let message_length = request.message.len();
    let inbound = Message::new(request.message);
    let reply = state
        .agent
        .handle(&inbound)
        .with_context(|| {
            format!("Error processing message in chat endpoint (message_length={message_length})")
        })
        .map_err(ServerError::from)?;

    Ok(Json(ChatResponse {
        response: reply.content,
    }))
}
