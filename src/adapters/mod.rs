//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - AI provider implementations (OpenAI, mock)
//! - `http` - Axum REST API
//! - `storage` - Employee store implementations (in-memory)

pub mod ai;
pub mod http;
pub mod storage;
