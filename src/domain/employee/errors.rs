//! Employee-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | NotFound | 404 |
//! | Validation | 400 |
//! | Infrastructure | 500 |

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::foundation::{DomainError, EmployeeId, ErrorCode};

/// Field name to message map produced by request validation.
///
/// Serializes as a flat JSON object, e.g. `{"name": "Name is required"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error for `field`. The first message recorded for a field wins.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    /// Records `message` for `field` when `value` is empty or whitespace only.
    pub fn require_non_blank(&mut self, field: &str, value: &str, message: &str) {
        if value.trim().is_empty() {
            self.insert(field, message);
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `Ok(())` when no errors were recorded.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// Employee-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeError {
    /// No employee is stored under this id.
    NotFound(EmployeeId),

    /// One or more fields failed validation.
    Validation(FieldErrors),

    /// The underlying store failed.
    Infrastructure(String),
}

impl EmployeeError {
    pub fn not_found(id: EmployeeId) -> Self {
        EmployeeError::NotFound(id)
    }

    pub fn validation(errors: FieldErrors) -> Self {
        EmployeeError::Validation(errors)
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        EmployeeError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            EmployeeError::NotFound(_) => ErrorCode::EmployeeNotFound,
            EmployeeError::Validation(_) => ErrorCode::ValidationFailed,
            EmployeeError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }

    /// Returns a user-facing error message.
    pub fn message(&self) -> String {
        match self {
            EmployeeError::NotFound(id) => format!("Employee not found with id: {}", id),
            EmployeeError::Validation(errors) => format!("Validation failed: {}", errors),
            EmployeeError::Infrastructure(msg) => msg.clone(),
        }
    }
}

impl fmt::Display for EmployeeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for EmployeeError {}

impl From<DomainError> for EmployeeError {
    fn from(err: DomainError) -> Self {
        EmployeeError::Infrastructure(err.to_string())
    }
}

impl From<FieldErrors> for EmployeeError {
    fn from(errors: FieldErrors) -> Self {
        EmployeeError::Validation(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_contains_literal_id() {
        let err = EmployeeError::not_found(EmployeeId::new(123));
        assert_eq!(err.to_string(), "Employee not found with id: 123");
        assert_eq!(err.code(), ErrorCode::EmployeeNotFound);
    }

    #[test]
    fn field_errors_keep_first_message_per_field() {
        let mut errors = FieldErrors::new();
        errors.insert("title", "Title is required");
        errors.insert("title", "something else");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("title"), Some("Title is required"));
    }

    #[test]
    fn require_non_blank_flags_whitespace() {
        let mut errors = FieldErrors::new();
        errors.require_non_blank("name", "   ", "Name is required");
        errors.require_non_blank("division", "Java", "Division is required");
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert!(errors.get("division").is_none());
    }

    #[test]
    fn into_result_is_ok_when_empty() {
        assert!(FieldErrors::new().into_result().is_ok());

        let mut errors = FieldErrors::new();
        errors.insert("name", "Name is required");
        assert!(errors.into_result().is_err());
    }

    #[test]
    fn field_errors_serialize_as_flat_map() {
        let mut errors = FieldErrors::new();
        errors.insert("position", "Position is required");
        errors.insert("name", "Name is required");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Name is required", "position": "Position is required"})
        );
    }

    #[test]
    fn domain_error_converts_to_infrastructure() {
        let err: EmployeeError = DomainError::storage("disk on fire").into();
        assert!(matches!(err, EmployeeError::Infrastructure(_)));
        assert_eq!(err.code(), ErrorCode::StorageError);
        assert!(err.message().contains("disk on fire"));
    }
}
