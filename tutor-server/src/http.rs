//! HTTP surface: `POST /api/chat` and `GET /ping`, with permissive CORS.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use memory_core::VectorStore;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info, warn};

use crate::chat::{ChatRequest, ChatService};
use crate::error::ChatError;

/// Body returned for every failure other than a rejected request.
pub const OPAQUE_ERROR: &str = "Failed to process the request";

/// Application state shared with all routes.
#[derive(Clone)]
pub struct AppState {
    pub chat: Arc<ChatService>,
    pub store: Arc<dyn VectorStore>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        match self {
            ChatError::InvalidRequest(message) => {
                warn!(error = %message, "Rejected chat request");
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            other => {
                error!(error = %other, "Error in chat request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": OPAQUE_ERROR })),
                )
                    .into_response()
            }
        }
    }
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/chat", post(chat))
        .route("/ping", get(ping))
        .layer(cors)
        .with_state(state)
}

/// Binds `addr` and serves until the process is stopped.
pub async fn serve(addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "step: HTTP server listening");
    axum::serve(listener, router(state))
        .await
        .map_err(|e| anyhow::anyhow!("HTTP server failed: {}", e))
}

async fn chat(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ChatError> {
    let Json(request) = body.map_err(|e| ChatError::InvalidRequest(e.body_text()))?;
    let response = state.chat.handle(request).await?;
    Ok(Json(ChatResponse { response }))
}

/// Probes the vector store with a one-record listing.
async fn ping(State(state): State<AppState>) -> Response {
    match state.store.scroll(1, None).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({ "message": "Vector store connection successful" })),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Vector store ping failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}
