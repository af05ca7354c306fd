//! LLM Proxy Endpoint
//!
//! - `POST /ollama/` - Generate a JSON answer for a prompt
//!
//! Upstream rejections keep their status; the body is wrapped in `HttpError`.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::{Deserialize, Serialize};

use crate::{AppState, HttpError};

#[derive(Debug, Serialize, Deserialize)]
pub struct OllamaRequest {
    pub prompt: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OllamaResponse {
    /// Model output as indented JSON text
    pub response: String,
}

/// Forward a prompt to the inference endpoint
///
/// When the upstream answers with a non-success status, that status is
/// returned and the upstream body is wrapped as the `message` of the
/// standard error body: `{"message": <body>, "code": "UPSTREAM_REJECTED"}`.
///
/// ```bash
/// curl -X POST http://localhost:8000/ollama/ \
///   -H "Content-Type: application/json" \
///   -d '{"prompt": "List three primary colors"}'
/// ```
async fn query_ollama(
    State(state): State<AppState>,
    Json(request): Json<OllamaRequest>,
) -> Result<Json<OllamaResponse>, HttpError> {
    let response = state.llm.generate(&request.prompt).await?;
    Ok(Json(OllamaResponse { response }))
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/ollama", post(query_ollama))
        .route("/ollama/", post(query_ollama))
        .with_state(state)
}
