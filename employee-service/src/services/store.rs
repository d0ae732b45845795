use crate::models::{Employee, EmployeeFields, EmployeeId};
use async_trait::async_trait;
use service_core::error::AppError;
use std::sync::Mutex;

/// Persistence boundary for employees.
///
/// Each method is a single round trip to the backing store.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Every stored employee, in store order.
    async fn list(&self) -> Result<Vec<Employee>, AppError>;

    /// Stores a new employee under a freshly generated id and returns it.
    async fn insert(&self, fields: EmployeeFields) -> Result<Employee, AppError>;

    /// Overwrites all mutable fields and returns the stored result, or `None`
    /// when no employee has this id.
    async fn update(
        &self,
        id: &EmployeeId,
        fields: EmployeeFields,
    ) -> Result<Option<Employee>, AppError>;

    /// Removes the employee; returns whether anything was deleted.
    async fn delete(&self, id: &EmployeeId) -> Result<bool, AppError>;

    async fn health_check(&self) -> Result<(), AppError>;
}

/// Process-local store used by tests and local runs without MongoDB.
pub struct InMemoryEmployeeStore {
    employees: Mutex<Vec<Employee>>,
    failure: Option<String>,
}

impl Default for InMemoryEmployeeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryEmployeeStore {
    pub fn new() -> Self {
        Self {
            employees: Mutex::new(Vec::new()),
            failure: None,
        }
    }

    /// A store whose every call fails with a database error carrying `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            employees: Mutex::new(Vec::new()),
            failure: Some(message.into()),
        }
    }

    pub fn len(&self) -> usize {
        self.employees.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check(&self) -> Result<(), AppError> {
        match &self.failure {
            Some(message) => Err(AppError::DatabaseError(anyhow::anyhow!(message.clone()))),
            None => Ok(()),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<Employee>>, AppError> {
        self.employees
            .lock()
            .map_err(|e| AppError::InternalError(anyhow::anyhow!("Employee store mutex poisoned: {}", e)))
    }
}

#[async_trait]
impl EmployeeStore for InMemoryEmployeeStore {
    async fn list(&self) -> Result<Vec<Employee>, AppError> {
        self.check()?;
        Ok(self.lock()?.clone())
    }

    async fn insert(&self, fields: EmployeeFields) -> Result<Employee, AppError> {
        self.check()?;
        let employee = Employee::new(EmployeeId::generate(), fields);
        self.lock()?.push(employee.clone());
        Ok(employee)
    }

    async fn update(
        &self,
        id: &EmployeeId,
        fields: EmployeeFields,
    ) -> Result<Option<Employee>, AppError> {
        self.check()?;
        let mut employees = self.lock()?;
        let updated = employees.iter_mut().find(|e| e.id == *id).map(|employee| {
            *employee = Employee::new(*id, fields);
            employee.clone()
        });
        Ok(updated)
    }

    async fn delete(&self, id: &EmployeeId) -> Result<bool, AppError> {
        self.check()?;
        let mut employees = self.lock()?;
        let before = employees.len();
        employees.retain(|e| e.id != *id);
        Ok(employees.len() < before)
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.check()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, salary: f64, age: f64) -> EmployeeFields {
        EmployeeFields {
            name: name.to_string(),
            salary,
            age,
        }
    }

    #[tokio::test]
    async fn insert_assigns_distinct_ids() {
        let store = InMemoryEmployeeStore::new();
        let a = store.insert(fields("Ada", 1000.0, 30.0)).await.unwrap();
        let b = store.insert(fields("Grace", 2000.0, 40.0)).await.unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(store.list().await.unwrap(), vec![a, b]);
    }

    #[tokio::test]
    async fn update_overwrites_every_field() {
        let store = InMemoryEmployeeStore::new();
        let created = store.insert(fields("Ada", 1000.0, 30.0)).await.unwrap();

        let updated = store
            .update(&created.id, EmployeeFields::default())
            .await
            .unwrap()
            .expect("employee should exist");

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "");
        assert_eq!(updated.salary, 0.0);
        assert_eq!(updated.age, 0.0);
    }

    #[tokio::test]
    async fn update_of_unknown_id_returns_none() {
        let store = InMemoryEmployeeStore::new();
        let result = store
            .update(&EmployeeId::generate(), fields("X", 1.0, 2.0))
            .await
            .unwrap();
        assert!(result.is_none());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn delete_reports_whether_a_document_matched() {
        let store = InMemoryEmployeeStore::new();
        let created = store.insert(fields("Ada", 1000.0, 30.0)).await.unwrap();

        assert!(store.delete(&created.id).await.unwrap());
        assert!(!store.delete(&created.id).await.unwrap());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn failing_store_surfaces_database_errors() {
        let store = InMemoryEmployeeStore::failing("connection refused");
        let err = store.list().await.unwrap_err();
        assert!(matches!(err, AppError::DatabaseError(_)));
        assert_eq!(err.to_string(), "Database error: connection refused");
    }
}
