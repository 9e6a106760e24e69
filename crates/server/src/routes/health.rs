use crate::state::ServerState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use std::sync::Arc;

/// Health check endpoint (liveness)
/// Returns 200 if server is running
pub async fn health_check(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "faq-server",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime_seconds": state.started_at.elapsed().as_secs(),
    }))
}

/// Readiness check endpoint
///
/// Always 200 once the engine is built. A degraded engine (no FAQs loaded)
/// still answers, with the unavailable message, so it is reported rather
/// than failed.
pub async fn readiness_check(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    let degraded = state.engine.is_degraded();

    Json(json!({
        "status": if degraded { "degraded" } else { "ready" },
        "service": "faq-server",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime_seconds": state.started_at.elapsed().as_secs(),
        "faq_count": state.engine.len(),
        "vocabulary_size": state.engine.vocabulary().len(),
        "degraded": degraded,
    }))
}

/// Query counters by resolution layer
pub async fn metrics(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    Json(json!({
        "uptime_seconds": state.started_at.elapsed().as_secs(),
        "queries": state.stats.snapshot(),
    }))
}
