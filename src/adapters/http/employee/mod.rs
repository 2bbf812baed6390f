//! HTTP adapter for employee endpoints.
//!
//! Exposes the employee directory via REST API:
//! - `GET /api/employees` - List employees
//! - `GET /api/employees/:id` - Get an employee
//! - `POST /api/employees` - Create an employee
//! - `PUT /api/employees/:id` - Replace an employee
//! - `DELETE /api/employees/:id` - Delete an employee

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::EmployeeRequest;
pub use handlers::EmployeeAppState;
pub use routes::{employee_router, employee_routes};
