//! DTOs for the AI query endpoint.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/ai/query`. A missing question is treated as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AiQueryRequest {
    #[serde(default)]
    pub question: String,
}

/// Response of `POST /api/ai/query`: the question echoed with its answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiQueryResponse {
    pub question: String,
    pub answer: String,
}
