//! Axum router configuration for employee endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    create_employee, delete_employee, get_employee, list_employees, update_employee,
    EmployeeAppState,
};

/// Create the employee API router.
///
/// # Routes
/// - `GET /` - List employees
/// - `POST /` - Create an employee
/// - `GET /:id` - Get an employee
/// - `PUT /:id` - Replace an employee
/// - `DELETE /:id` - Delete an employee
pub fn employee_routes() -> Router<EmployeeAppState> {
    Router::new()
        .route("/", get(list_employees).post(create_employee))
        .route(
            "/:id",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
}

/// Create the employee router with its state applied, ready to nest at
/// `/api/employees`.
pub fn employee_router(state: EmployeeAppState) -> Router {
    employee_routes().with_state(state)
}
