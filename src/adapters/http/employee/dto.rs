//! Request DTOs for employee endpoints.
//!
//! Responses serialize [`Employee`] directly.

use serde::Deserialize;

use crate::domain::employee::{
    required_text_errors, Employee, FieldErrors, Title, TITLE_INVALID, TITLE_REQUIRED,
};

/// Body of `POST /api/employees` and `PUT /api/employees/{id}`.
///
/// Every field is optional at the JSON level so that missing fields surface
/// as field errors rather than a malformed-body rejection. Any `id` in the
/// payload is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub division: Option<String>,
}

impl EmployeeRequest {
    /// Validates the payload and builds an unsaved employee.
    ///
    /// All field errors are collected before returning.
    pub fn into_employee(self) -> Result<Employee, FieldErrors> {
        let name = self.name.unwrap_or_default();
        let position = self.position.unwrap_or_default();
        let division = self.division.unwrap_or_default();

        let mut errors = required_text_errors(&name, &position, &division);

        let title = match self.title.as_deref() {
            None => Err(TITLE_REQUIRED),
            Some(raw) => raw.parse::<Title>().map_err(|_| TITLE_INVALID),
        };

        match title {
            Ok(title) => {
                errors.into_result()?;
                Ok(Employee::new(name, position, title, division))
            }
            Err(message) => {
                errors.insert("title", message);
                Err(errors)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::employee::{DIVISION_REQUIRED, NAME_REQUIRED, POSITION_REQUIRED};

    fn parse(json: &str) -> EmployeeRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn valid_request_builds_unsaved_employee() {
        let request = parse(
            r#"{"id": 5, "name": "Emil", "position": "Developer", "title": "LEAD", "division": "Java"}"#,
        );

        let employee = request.into_employee().unwrap();

        assert_eq!(employee.id, None);
        assert_eq!(employee.name, "Emil");
        assert_eq!(employee.title, Title::Lead);
    }

    #[test]
    fn blank_name_is_reported() {
        let request = parse(
            r#"{"name": "", "position": "Developer", "title": "SENIOR", "division": "Java"}"#,
        );

        let errors = request.into_employee().unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("name"), Some(NAME_REQUIRED));
    }

    #[test]
    fn empty_body_reports_every_field() {
        let errors = parse("{}").into_employee().unwrap_err();

        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get("name"), Some(NAME_REQUIRED));
        assert_eq!(errors.get("position"), Some(POSITION_REQUIRED));
        assert_eq!(errors.get("title"), Some(TITLE_REQUIRED));
        assert_eq!(errors.get("division"), Some(DIVISION_REQUIRED));
    }

    #[test]
    fn null_title_is_required_error() {
        let request = parse(
            r#"{"name": "Emil", "position": "Developer", "title": null, "division": "Java"}"#,
        );

        let errors = request.into_employee().unwrap_err();

        assert_eq!(errors.get("title"), Some(TITLE_REQUIRED));
    }

    #[test]
    fn unknown_title_is_invalid_error() {
        let request = parse(
            r#"{"name": "Emil", "position": "Developer", "title": "lead", "division": "   "}"#,
        );

        let errors = request.into_employee().unwrap_err();

        assert_eq!(errors.get("title"), Some(TITLE_INVALID));
        assert_eq!(errors.get("division"), Some(DIVISION_REQUIRED));
    }
}
