//! HTTP surface: `POST /api/chat` plus a health probe.
//!
//! The endpoint is stateless; the client sends the whole history and gets
//! it back extended by the new user and assistant turns.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use engine::Conversation;

use crate::responder::ChatResponder;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub history: Conversation,
}

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub response: String,
    pub history: Conversation,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Build the application router.
pub fn router(responder: Arc<ChatResponder>) -> Router {
    Router::new()
        .route("/api/chat", post(chat))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .with_state(responder)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

/// One chat turn. An empty message is the only client error; everything
/// else always yields a reply.
async fn chat(
    State(responder): State<Arc<ChatResponder>>,
    Json(request): Json<ChatRequest>,
) -> Response {
    let message = request.message.trim();
    if message.is_empty() {
        let body = ErrorBody {
            error: "El mensaje no puede estar vacío".to_string(),
        };
        return (StatusCode::BAD_REQUEST, Json(body)).into_response();
    }

    let mut history = request.history;
    history.push_user(message);

    let response = responder.respond(message, &history).await;
    history.push_assistant(response.clone());

    Json(ChatReply { response, history }).into_response()
}
