//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `EmployeeRepository` - Storage of employee records and id allocation
//! - `AIProvider` - External chat-completion service

mod ai_provider;
mod employee_repository;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, TokenUsage,
};
pub use employee_repository::EmployeeRepository;
