//! Employee record.

use serde::{Deserialize, Serialize};

use super::errors::FieldErrors;
use super::title::Title;
use crate::domain::foundation::EmployeeId;

pub const NAME_REQUIRED: &str = "Name is required";
pub const POSITION_REQUIRED: &str = "Position is required";
pub const TITLE_REQUIRED: &str = "Title is required";
pub const DIVISION_REQUIRED: &str = "Division is required";
pub const TITLE_INVALID: &str = "Title must be one of: JUNIOR, MIDDLE, SENIOR, LEAD";

/// A single entry in the employee directory.
///
/// `id` is `None` until the store assigns one on first save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: Option<EmployeeId>,
    pub name: String,
    pub position: String,
    pub title: Title,
    pub division: String,
}

impl Employee {
    /// Creates an unsaved employee.
    pub fn new(
        name: impl Into<String>,
        position: impl Into<String>,
        title: Title,
        division: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            position: position.into(),
            title,
            division: division.into(),
        }
    }

    pub fn with_id(mut self, id: EmployeeId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn without_id(mut self) -> Self {
        self.id = None;
        self
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Checks the non-blank rules for the free-text fields.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        required_text_errors(&self.name, &self.position, &self.division).into_result()
    }
}

/// Collects blank-field errors for the free-text employee fields.
pub fn required_text_errors(name: &str, position: &str, division: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.require_non_blank("name", name, NAME_REQUIRED);
    errors.require_non_blank("position", position, POSITION_REQUIRED);
    errors.require_non_blank("division", division, DIVISION_REQUIRED);
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn developer() -> Employee {
        Employee::new("Emil", "Developer", Title::Lead, "Java")
    }

    #[test]
    fn new_employee_has_no_id() {
        let employee = developer();
        assert!(employee.id.is_none());
        assert!(!employee.is_persisted());
    }

    #[test]
    fn with_id_and_without_id_toggle_identity() {
        let employee = developer().with_id(EmployeeId::new(5));
        assert_eq!(employee.id, Some(EmployeeId::new(5)));
        assert!(employee.without_id().id.is_none());
    }

    #[test]
    fn valid_employee_passes_validation() {
        assert!(developer().validate().is_ok());
    }

    #[test]
    fn blank_fields_are_all_reported() {
        let employee = Employee::new(" ", "", Title::Junior, "\t");
        let errors = employee.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get("name"), Some(NAME_REQUIRED));
        assert_eq!(errors.get("position"), Some(POSITION_REQUIRED));
        assert_eq!(errors.get("division"), Some(DIVISION_REQUIRED));
    }

    #[test]
    fn serializes_absent_id_as_null() {
        let json = serde_json::to_value(developer()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": null,
                "name": "Emil",
                "position": "Developer",
                "title": "LEAD",
                "division": "Java"
            })
        );
    }
}
