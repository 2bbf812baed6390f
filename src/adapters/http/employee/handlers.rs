//! HTTP handlers for employee endpoints.
//!
//! These handlers connect Axum routes to `EmployeeService`.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::EmployeeService;
use crate::domain::employee::EmployeeError;
use crate::domain::foundation::EmployeeId;

use super::dto::EmployeeRequest;
use crate::adapters::http::error::ApiError;
use crate::adapters::http::extract::ApiJson;

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for employee handlers.
#[derive(Clone)]
pub struct EmployeeAppState {
    pub employee_service: Arc<EmployeeService>,
}

impl EmployeeAppState {
    pub fn new(employee_service: Arc<EmployeeService>) -> Self {
        Self { employee_service }
    }
}

/// Parses the `{id}` path segment.
fn parse_id(segment: &str) -> Result<EmployeeId, ApiError> {
    segment
        .parse::<EmployeeId>()
        .map_err(|_| ApiError::InvalidPath(segment.to_string()))
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/employees - List every employee
pub async fn list_employees(
    State(state): State<EmployeeAppState>,
) -> Result<impl IntoResponse, ApiError> {
    let employees = state.employee_service.get_all_employees().await?;
    Ok(Json(employees))
}

/// GET /api/employees/:id - Get a single employee
pub async fn get_employee(
    State(state): State<EmployeeAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let employee = state.employee_service.get_employee_by_id(id).await?;
    Ok(Json(employee))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST/PUT/DELETE endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/employees - Create an employee
pub async fn create_employee(
    State(state): State<EmployeeAppState>,
    ApiJson(request): ApiJson<EmployeeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let employee = request.into_employee().map_err(EmployeeError::from)?;
    let created = state.employee_service.create_employee(employee).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/employees/:id - Replace an employee
///
/// The body is validated before the id is looked up.
pub async fn update_employee(
    State(state): State<EmployeeAppState>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<EmployeeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let employee = request.into_employee().map_err(EmployeeError::from)?;
    let updated = state.employee_service.update_employee(id, employee).await?;
    Ok(Json(updated))
}

/// DELETE /api/employees/:id - Delete an employee
pub async fn delete_employee(
    State(state): State<EmployeeAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    state.employee_service.delete_employee(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_integers() {
        assert_eq!(parse_id("42").unwrap(), EmployeeId::new(42));
    }

    #[test]
    fn parse_id_rejects_text() {
        assert!(matches!(parse_id("abc"), Err(ApiError::InvalidPath(s)) if s == "abc"));
    }
}
