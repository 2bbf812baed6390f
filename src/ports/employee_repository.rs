//! Employee repository port.
//!
//! Defines the contract for storing and retrieving employee records.
//!
//! # Design
//!
//! - **Store-assigned ids**: `save` allocates an id for records that have none
//! - **Monotonic allocation**: ids are never reused, even after deletion
//! - **Concurrent-safe**: every method may be called from any number of tasks
//!   without external locking

use async_trait::async_trait;

use crate::domain::employee::Employee;
use crate::domain::foundation::{DomainError, EmployeeId};

/// Repository port for employee persistence.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Snapshot of every stored employee, each exactly once.
    async fn find_all(&self) -> Result<Vec<Employee>, DomainError>;

    /// Find an employee by id. Returns `None` if not found.
    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, DomainError>;

    /// Store an employee, allocating the next id when `employee.id` is `None`.
    ///
    /// A record with an id overwrites whatever is stored under that id.
    /// Returns the stored record including its id.
    async fn save(&self, employee: Employee) -> Result<Employee, DomainError>;

    /// Remove an employee. Returns `true` if a record existed and was removed.
    async fn delete_by_id(&self, id: EmployeeId) -> Result<bool, DomainError>;

    /// Check whether an employee is stored under `id`.
    async fn exists_by_id(&self, id: EmployeeId) -> Result<bool, DomainError>;
}
