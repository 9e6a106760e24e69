use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::{Extension, Json};
use faqbot::MatchLayer;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Bracketed numeric citations such as `[1]` or `[2, 3]`.
static CITATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[[0-9, ]+\]").expect("citation pattern is valid"));

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default, alias = "message")]
    pub question: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ChatResponse {
    pub answer: String,
    pub matched_question: Option<String>,
    pub score: f64,
}

/// Remove citation markers from an answer and trim the result.
pub fn strip_citations(answer: &str) -> String {
    CITATION.replace_all(answer, "").trim().to_string()
}

/// Answer one question (POST /api/chat/).
///
/// The resolving [`MatchLayer`] rides along as a response extension for the
/// access log.
pub async fn chat(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> ServerResult<(Extension<MatchLayer>, Json<ChatResponse>)> {
    let Json(request) = payload?;
    if request.question.is_empty() {
        return Err(ServerError::BadRequest("No question provided".to_string()));
    }

    tracing::info!(question = %request.question, "chat request");

    let engine = Arc::clone(&state.engine);
    let (result, layer) =
        tokio::task::spawn_blocking(move || engine.query_with_layer(&request.question)).await?;

    Ok((
        Extension(layer),
        Json(ChatResponse {
            answer: strip_citations(&result.answer),
            matched_question: result.matched_question,
            score: result.score,
        }),
    ))
}
