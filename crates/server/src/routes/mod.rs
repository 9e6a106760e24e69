//! API route handlers
//!
//! - `health`: liveness, readiness, and query counters
//! - `chat`: question answering

pub mod chat;
pub mod health;

use crate::error::ServerError;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// Service name, version, and available endpoints (GET /).
pub async fn api_info() -> impl IntoResponse {
    Json(json!({
        "name": "FAQBot Server",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "/api/chat/",
            "/health",
            "/ready",
            "/metrics"
        ]
    }))
}

/// 404 Not Found handler
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
