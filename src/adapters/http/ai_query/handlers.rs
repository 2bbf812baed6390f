//! HTTP handlers for the AI query endpoint.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use axum::extract::{Json, State};
use futures::FutureExt;

use crate::adapters::http::extract::ApiJson;
use crate::application::EmployeeAiService;

use super::dto::{AiQueryRequest, AiQueryResponse};

/// Answer used when the AI service itself fails instead of returning text.
pub const FALLBACK_ANSWER: &str =
    "Sorry, I encountered an error processing your question. Please try again.";

/// Shared state for the AI query handler.
#[derive(Clone)]
pub struct AiQueryAppState {
    pub ai_service: Arc<EmployeeAiService>,
}

impl AiQueryAppState {
    pub fn new(ai_service: Arc<EmployeeAiService>) -> Self {
        Self { ai_service }
    }
}

/// POST /api/ai/query - Ask a question about the directory
///
/// Always answers 200. A panic inside the service is caught here and
/// replaced by [`FALLBACK_ANSWER`].
pub async fn query_employees(
    State(state): State<AiQueryAppState>,
    ApiJson(request): ApiJson<AiQueryRequest>,
) -> Json<AiQueryResponse> {
    tracing::debug!(question_len = request.question.len(), "AI query received");

    let answer = AssertUnwindSafe(state.ai_service.query_employees(&request.question))
        .catch_unwind()
        .await
        .unwrap_or_else(|_| {
            tracing::error!("AI query service panicked");
            FALLBACK_ANSWER.to_string()
        });

    Json(AiQueryResponse {
        question: request.question,
        answer,
    })
}
