//! Employee module - the directory's core record and its rules.

mod aggregate;
mod errors;
mod title;

pub use aggregate::{
    required_text_errors, Employee, DIVISION_REQUIRED, NAME_REQUIRED, POSITION_REQUIRED,
    TITLE_INVALID, TITLE_REQUIRED,
};
pub use errors::{EmployeeError, FieldErrors};
pub use title::Title;
