//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (identifiers, errors)
//! - `employee` - Employee record, seniority titles and validation rules

pub mod employee;
pub mod foundation;
