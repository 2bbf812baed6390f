//! HTTP adapters - REST API implementations.
//!
//! Each resource has its own module with handlers, DTOs and routes.
//! [`api_router`] combines them with the shared middleware stack.

pub mod ai_query;
pub mod employee;
pub mod error;
pub mod extract;
pub mod router;

// Re-export key types for convenience
pub use ai_query::{ai_query_router, AiQueryAppState};
pub use employee::{employee_router, EmployeeAppState};
pub use error::{ApiError, ErrorResponse};
pub use extract::ApiJson;
pub use router::api_router;
