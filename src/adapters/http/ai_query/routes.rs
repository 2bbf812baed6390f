//! Axum router configuration for the AI query endpoint.

use axum::{routing::post, Router};

use super::handlers::{query_employees, AiQueryAppState};

/// Create the AI query router.
///
/// # Routes
/// - `POST /query` - Ask a question about the directory
pub fn ai_query_routes() -> Router<AiQueryAppState> {
    Router::new().route("/query", post(query_employees))
}

/// Create the AI query router with its state applied, ready to nest at `/api/ai`.
pub fn ai_query_router(state: AiQueryAppState) -> Router {
    ai_query_routes().with_state(state)
}
