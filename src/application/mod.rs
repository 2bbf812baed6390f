//! Application layer - services that orchestrate domain rules and ports.
//!
//! `EmployeeService` owns the CRUD rules (existence checks and id policy).
//! `EmployeeAiService` builds the prompt from the directory and relays the
//! provider's answer.

pub mod services;

pub use services::{EmployeeAiService, EmployeeService};
