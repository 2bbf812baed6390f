//! Application services for the employee directory.

mod employee_ai_service;
mod employee_service;

pub use employee_ai_service::{
    build_employee_context, error_answer, EmployeeAiService, MAX_TOKENS, MODEL,
    NOT_CONFIGURED_ANSWER, SYSTEM_PROMPT, TEMPERATURE,
};
pub use employee_service::EmployeeService;
