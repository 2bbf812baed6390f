//! EmployeeService - Domain rules on top of the employee store.

use std::sync::Arc;

use crate::domain::employee::{Employee, EmployeeError};
use crate::domain::foundation::EmployeeId;
use crate::ports::EmployeeRepository;

/// Service enforcing existence checks and id assignment for employees.
pub struct EmployeeService {
    repository: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    pub fn new(repository: Arc<dyn EmployeeRepository>) -> Self {
        Self { repository }
    }

    /// Returns every stored employee in ascending id order.
    pub async fn get_all_employees(&self) -> Result<Vec<Employee>, EmployeeError> {
        Ok(self.repository.find_all().await?)
    }

    pub async fn get_employee_by_id(&self, id: EmployeeId) -> Result<Employee, EmployeeError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| EmployeeError::not_found(id))
    }

    /// Stores a new employee. Any client-supplied id is discarded.
    pub async fn create_employee(&self, employee: Employee) -> Result<Employee, EmployeeError> {
        employee.validate()?;
        let saved = self.repository.save(employee.without_id()).await?;
        tracing::info!(employee_id = ?saved.id, "employee created");
        Ok(saved)
    }

    /// Replaces the employee stored under `id`. The payload id is overridden by `id`.
    pub async fn update_employee(
        &self,
        id: EmployeeId,
        employee: Employee,
    ) -> Result<Employee, EmployeeError> {
        employee.validate()?;
        if !self.repository.exists_by_id(id).await? {
            return Err(EmployeeError::not_found(id));
        }

        let saved = self.repository.save(employee.with_id(id)).await?;
        tracing::info!(employee_id = %id, "employee updated");
        Ok(saved)
    }

    pub async fn delete_employee(&self, id: EmployeeId) -> Result<(), EmployeeError> {
        if !self.repository.exists_by_id(id).await? {
            return Err(EmployeeError::not_found(id));
        }

        self.repository.delete_by_id(id).await?;
        tracing::info!(employee_id = %id, "employee deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryEmployeeRepository;
    use crate::domain::employee::Title;
    use crate::domain::foundation::{DomainError, ErrorCode};
    use async_trait::async_trait;

    fn service() -> EmployeeService {
        EmployeeService::new(Arc::new(InMemoryEmployeeRepository::seeded()))
    }

    fn tester() -> Employee {
        Employee::new("Nina", "QA", Title::Junior, "QA")
    }

    struct FailingRepository;

    #[async_trait]
    impl EmployeeRepository for FailingRepository {
        async fn find_all(&self) -> Result<Vec<Employee>, DomainError> {
            Err(DomainError::storage("store offline"))
        }

        async fn find_by_id(&self, _id: EmployeeId) -> Result<Option<Employee>, DomainError> {
            Err(DomainError::storage("store offline"))
        }

        async fn save(&self, _employee: Employee) -> Result<Employee, DomainError> {
            Err(DomainError::storage("store offline"))
        }

        async fn delete_by_id(&self, _id: EmployeeId) -> Result<bool, DomainError> {
            Err(DomainError::storage("store offline"))
        }

        async fn exists_by_id(&self, _id: EmployeeId) -> Result<bool, DomainError> {
            Err(DomainError::storage("store offline"))
        }
    }

    #[tokio::test]
    async fn get_all_returns_seed_in_id_order() {
        let all = service().get_all_employees().await.unwrap();

        assert_eq!(all.len(), 10);
        let ids: Vec<i64> = all.iter().map(|e| e.id.unwrap().value()).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn get_by_id_returns_employee() {
        let employee = service()
            .get_employee_by_id(EmployeeId::new(1))
            .await
            .unwrap();

        assert_eq!(employee.name, "Emil");
        assert_eq!(employee.title, Title::Lead);
    }

    #[tokio::test]
    async fn get_by_id_fails_with_not_found() {
        let result = service().get_employee_by_id(EmployeeId::new(999)).await;

        assert_eq!(result, Err(EmployeeError::NotFound(EmployeeId::new(999))));
    }

    #[tokio::test]
    async fn create_ignores_client_supplied_id() {
        let service = service();

        let created = service
            .create_employee(tester().with_id(EmployeeId::new(1)))
            .await
            .unwrap();

        assert_eq!(created.id, Some(EmployeeId::new(11)));
        let emil = service.get_employee_by_id(EmployeeId::new(1)).await.unwrap();
        assert_eq!(emil.name, "Emil");
    }

    #[tokio::test]
    async fn update_uses_path_id_over_payload_id() {
        let service = service();

        let updated = service
            .update_employee(EmployeeId::new(2), tester().with_id(EmployeeId::new(7)))
            .await
            .unwrap();

        assert_eq!(updated.id, Some(EmployeeId::new(2)));
        assert_eq!(
            service
                .get_employee_by_id(EmployeeId::new(2))
                .await
                .unwrap()
                .name,
            "Nina"
        );
        assert_eq!(
            service
                .get_employee_by_id(EmployeeId::new(7))
                .await
                .unwrap()
                .name,
            "Olga"
        );
    }

    #[tokio::test]
    async fn update_unknown_id_fails_without_creating() {
        let service = service();

        let result = service
            .update_employee(EmployeeId::new(42), tester())
            .await;

        assert_eq!(result, Err(EmployeeError::NotFound(EmployeeId::new(42))));
        assert_eq!(service.get_all_employees().await.unwrap().len(), 10);
    }

    #[tokio::test]
    async fn create_rejects_blank_fields() {
        let service = service();

        let result = service
            .create_employee(Employee::new(" ", "QA", Title::Junior, "QA"))
            .await;

        assert!(matches!(result, Err(EmployeeError::Validation(errors)) if errors.get("name").is_some()));
        assert_eq!(service.get_all_employees().await.unwrap().len(), 10);
    }

    #[tokio::test]
    async fn update_validates_before_existence_check() {
        let result = service()
            .update_employee(EmployeeId::new(999), Employee::new("Nina", "", Title::Junior, "QA"))
            .await;

        assert!(matches!(result, Err(EmployeeError::Validation(_))));
    }

    #[tokio::test]
    async fn delete_removes_employee() {
        let service = service();

        service.delete_employee(EmployeeId::new(3)).await.unwrap();

        let result = service.get_employee_by_id(EmployeeId::new(3)).await;
        assert!(matches!(result, Err(EmployeeError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_twice_fails_second_time() {
        let service = service();

        service.delete_employee(EmployeeId::new(3)).await.unwrap();
        let second = service.delete_employee(EmployeeId::new(3)).await;

        assert_eq!(second, Err(EmployeeError::NotFound(EmployeeId::new(3))));
    }

    #[tokio::test]
    async fn store_failure_becomes_infrastructure_error() {
        let service = EmployeeService::new(Arc::new(FailingRepository));

        let err = service.get_all_employees().await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::StorageError);
        assert!(err.message().contains("store offline"));
    }
}
