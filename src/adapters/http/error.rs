//! HTTP error mapping.
//!
//! Every failure that reaches the HTTP boundary is turned into a status code
//! and JSON body here, and only here.
//!
//! | Error | Status | Body |
//! |-------|--------|------|
//! | `EmployeeError::NotFound` | 404 | `{"error": "Employee not found with id: {id}"}` |
//! | `EmployeeError::Validation` | 400 | field name -> message map |
//! | `MalformedBody` | 400 | `{"error": "Malformed request body: {detail}"}` |
//! | `InvalidPath` | 400 | `{"error": "Invalid employee id: {segment}"}` |
//! | `EmployeeError::Infrastructure`, `Unexpected` | 500 | `{"error": "An unexpected error occurred: {message}"}` |

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::employee::EmployeeError;

/// Single-message error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    /// Body used for every 500 response.
    pub fn unexpected(message: impl std::fmt::Display) -> Self {
        Self::new(format!("An unexpected error occurred: {}", message))
    }
}

/// API error type that converts domain and request errors to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    Employee(EmployeeError),
    /// The body was not valid JSON or had fields of the wrong type.
    MalformedBody(String),
    /// The `{id}` path segment was not an integer.
    InvalidPath(String),
    Unexpected(String),
}

impl From<EmployeeError> for ApiError {
    fn from(err: EmployeeError) -> Self {
        ApiError::Employee(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Employee(EmployeeError::NotFound(id)) => {
                let message = EmployeeError::NotFound(id).message();
                tracing::warn!(employee_id = %id, "employee not found");
                (StatusCode::NOT_FOUND, Json(ErrorResponse::new(message))).into_response()
            }
            ApiError::Employee(EmployeeError::Validation(errors)) => {
                tracing::warn!(errors = %errors, "employee validation failed");
                (StatusCode::BAD_REQUEST, Json(errors)).into_response()
            }
            ApiError::Employee(EmployeeError::Infrastructure(message))
            | ApiError::Unexpected(message) => {
                tracing::error!(error = %message, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::unexpected(message)),
                )
                    .into_response()
            }
            ApiError::MalformedBody(detail) => {
                tracing::warn!(detail = %detail, "malformed request body");
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::new(format!("Malformed request body: {}", detail))),
                )
                    .into_response()
            }
            ApiError::InvalidPath(segment) => {
                tracing::warn!(segment = %segment, "invalid employee id");
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::new(format!("Invalid employee id: {}", segment))),
                )
                    .into_response()
            }
        }
    }
}
