//! HTTP adapter for the AI query endpoint.
//!
//! - `POST /api/ai/query` - Answer a natural-language question about employees

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{AiQueryRequest, AiQueryResponse};
pub use handlers::{AiQueryAppState, FALLBACK_ANSWER};
pub use routes::{ai_query_router, ai_query_routes};
