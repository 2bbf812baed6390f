//! In-Memory Employee Repository Adapter
//!
//! Keeps employee records in a process-local map. Contents are lost on
//! restart.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::employee::{Employee, Title};
use crate::domain::foundation::{DomainError, EmployeeId};
use crate::ports::EmployeeRepository;

/// Sample directory loaded by [`InMemoryEmployeeRepository::seeded`].
pub fn sample_employees() -> Vec<Employee> {
    vec![
        Employee::new("Emil", "Developer", Title::Lead, "Java"),
        Employee::new("Pavel", "Developer", Title::Senior, "Java"),
        Employee::new("Sergey", "QA", Title::Middle, "QA"),
        Employee::new("Anna", "Developer", Title::Junior, "Python"),
        Employee::new("Maria", "BA", Title::Middle, "BA"),
        Employee::new("Dmitry", "Developer", Title::Senior, "JS"),
        Employee::new("Olga", "QA", Title::Senior, "QA"),
        Employee::new("Igor", "Developer", Title::Middle, "Java"),
        Employee::new("Svetlana", "BA", Title::Senior, "BA"),
        Employee::new("Alexey", "Developer", Title::Junior, "Python"),
    ]
}

/// In-memory storage for employee records.
///
/// Ids come from an atomic counter that starts at 1 and only moves forward.
/// Records are keyed by id, so `find_all` returns them in allocation order.
#[derive(Debug, Clone)]
pub struct InMemoryEmployeeRepository {
    employees: Arc<RwLock<BTreeMap<EmployeeId, Employee>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryEmployeeRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::with_employees(Vec::new())
    }

    /// Create a repository holding the ten sample employees (ids 1-10)
    pub fn seeded() -> Self {
        Self::with_employees(sample_employees())
    }

    /// Create a repository pre-populated with `employees`.
    ///
    /// Records without an id are assigned one in iteration order.
    pub fn with_employees(employees: impl IntoIterator<Item = Employee>) -> Self {
        let next_id = AtomicI64::new(1);
        let mut map = BTreeMap::new();
        for employee in employees {
            let id = employee
                .id
                .unwrap_or_else(|| EmployeeId::new(next_id.fetch_add(1, Ordering::SeqCst)));
            map.insert(id, employee.with_id(id));
        }
        // Explicit ids must never be handed out again.
        if let Some(max) = map.keys().next_back() {
            next_id.fetch_max(max.value().saturating_add(1), Ordering::SeqCst);
        }

        Self {
            employees: Arc::new(RwLock::new(map)),
            next_id: Arc::new(next_id),
        }
    }

    /// Get the number of stored employees
    pub async fn len(&self) -> usize {
        self.employees.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.employees.read().await.is_empty()
    }

    /// `i64::MAX` is never handed out; reaching it means the id space is spent.
    fn allocate_id(&self) -> Result<EmployeeId, DomainError> {
        self.next_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |next| {
                (next < i64::MAX).then(|| next + 1)
            })
            .map(EmployeeId::new)
            .map_err(|_| DomainError::storage("employee id space exhausted"))
    }
}

impl Default for InMemoryEmployeeRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>, DomainError> {
        let employees = self.employees.read().await;
        Ok(employees.values().cloned().collect())
    }

    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, DomainError> {
        let employees = self.employees.read().await;
        Ok(employees.get(&id).cloned())
    }

    async fn save(&self, employee: Employee) -> Result<Employee, DomainError> {
        let id = match employee.id {
            Some(id) => id,
            None => self.allocate_id()?,
        };
        let employee = employee.with_id(id);

        let mut employees = self.employees.write().await;
        employees.insert(id, employee.clone());
        Ok(employee)
    }

    async fn delete_by_id(&self, id: EmployeeId) -> Result<bool, DomainError> {
        let mut employees = self.employees.write().await;
        Ok(employees.remove(&id).is_some())
    }

    async fn exists_by_id(&self, id: EmployeeId) -> Result<bool, DomainError> {
        let employees = self.employees.read().await;
        Ok(employees.contains_key(&id))
    }
}
