//! Storage Adapters
//!
//! Implementations of the EmployeeRepository port.
//!
//! ## Available Adapters
//!
//! - **InMemoryEmployeeRepository** - Process-local map with an atomic id counter
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::InMemoryEmployeeRepository;
//!
//! // Server: starts with the ten sample employees
//! let repository = InMemoryEmployeeRepository::seeded();
//!
//! // Tests: empty directory
//! let repository = InMemoryEmployeeRepository::new();
//! ```

mod in_memory_employee_repository;

pub use in_memory_employee_repository::{sample_employees, InMemoryEmployeeRepository};
