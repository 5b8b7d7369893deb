//! Employee directory service.
//!
//! Owns the employee lifecycle: email uniqueness on create and update,
//! exact-match and substring queries, counts, and the statistics endpoints
//! (computed by [`crate::service::statistics`] over a fresh snapshot).

use innkeep_types::employee::{Employee, EmployeeId, EmployeeRecord, status};
use innkeep_types::error::{EmployeeError, RepositoryError};
use innkeep_types::statistics::{DepartmentStatistics, EmployeeStatistics};

use crate::repository::employee::EmployeeRepository;
use crate::service::statistics;

/// Service orchestrating the employee lifecycle.
///
/// Generic over the repository trait to maintain clean architecture --
/// innkeep-core never depends on innkeep-infra.
pub struct EmployeeService<E: EmployeeRepository> {
    repo: E,
}

fn storage(e: RepositoryError) -> EmployeeError {
    EmployeeError::StorageError(e.to_string())
}

impl<E: EmployeeRepository> EmployeeService<E> {
    pub fn new(repo: E) -> Self {
        Self { repo }
    }

    /// Create a new employee.
    ///
    /// Rejects the record with `DuplicateEmail` when the email (compared
    /// case-sensitively) already belongs to someone. The store's unique
    /// constraint closes the gap between the check and the insert.
    pub async fn create_employee(&self, record: EmployeeRecord) -> Result<Employee, EmployeeError> {
        record.validate().map_err(EmployeeError::InvalidRecord)?;

        if self.repo.exists_by_email(&record.email).await.map_err(storage)? {
            tracing::warn!(email = %record.email, "employee email already exists");
            return Err(EmployeeError::DuplicateEmail(record.email));
        }

        let employee = self.repo.create(&record).await.map_err(|e| match e {
            RepositoryError::Conflict(_) => EmployeeError::DuplicateEmail(record.email.clone()),
            other => storage(other),
        })?;

        tracing::info!(employee_id = %employee.id, "created employee");
        Ok(employee)
    }

    pub async fn list_employees(&self) -> Result<Vec<Employee>, EmployeeError> {
        let employees = self.repo.list_all().await.map_err(storage)?;
        tracing::debug!(count = employees.len(), "listed employees");
        Ok(employees)
    }

    /// Look up an employee by id. Absence is not an error here.
    pub async fn get_employee(&self, id: EmployeeId) -> Result<Option<Employee>, EmployeeError> {
        self.repo.get_by_id(id).await.map_err(storage)
    }

    pub async fn get_employee_by_email(&self, email: &str) -> Result<Option<Employee>, EmployeeError> {
        self.repo.get_by_email(email).await.map_err(storage)
    }

    pub async fn list_by_department(&self, department: &str) -> Result<Vec<Employee>, EmployeeError> {
        let employees = self.repo.list_by_department(department).await.map_err(storage)?;
        tracing::debug!(department, count = employees.len(), "listed employees by department");
        Ok(employees)
    }

    pub async fn list_by_status(&self, status: &str) -> Result<Vec<Employee>, EmployeeError> {
        let employees = self.repo.list_by_status(status).await.map_err(storage)?;
        tracing::debug!(status, count = employees.len(), "listed employees by status");
        Ok(employees)
    }

    pub async fn list_by_position(&self, position: &str) -> Result<Vec<Employee>, EmployeeError> {
        let employees = self.repo.list_by_position(position).await.map_err(storage)?;
        tracing::debug!(position, count = employees.len(), "listed employees by position");
        Ok(employees)
    }

    /// Employees whose first or last name contains `term` (case-sensitive).
    /// The empty term matches everyone.
    pub async fn search_by_name(&self, term: &str) -> Result<Vec<Employee>, EmployeeError> {
        let employees = self.repo.search_by_name(term).await.map_err(storage)?;
        tracing::debug!(term, count = employees.len(), "searched employees by name");
        Ok(employees)
    }

    /// Replace every field of an employee except its id.
    ///
    /// The uniqueness check only runs when the email actually changes, so
    /// resubmitting an employee's own email never conflicts.
    pub async fn update_employee(
        &self,
        id: EmployeeId,
        record: EmployeeRecord,
    ) -> Result<Employee, EmployeeError> {
        record.validate().map_err(EmployeeError::InvalidRecord)?;

        let mut employee = self.require(id).await?;

        if employee.email != record.email
            && self.repo.exists_by_email(&record.email).await.map_err(storage)?
        {
            tracing::warn!(employee_id = %id, email = %record.email, "employee email already exists");
            return Err(EmployeeError::DuplicateEmail(record.email));
        }

        employee.apply(record);
        let updated = self.save(employee).await?;
        tracing::info!(employee_id = %id, "updated employee");
        Ok(updated)
    }

    /// Overwrite only the status field. The value is not validated.
    pub async fn update_status(&self, id: EmployeeId, status: &str) -> Result<Employee, EmployeeError> {
        let mut employee = self.require(id).await?;
        employee.status = status.to_string();

        let updated = self.save(employee).await?;
        tracing::info!(employee_id = %id, status, "updated employee status");
        Ok(updated)
    }

    /// Delete an employee. Fails with `NotFound` when the id does not exist.
    pub async fn delete_employee(&self, id: EmployeeId) -> Result<(), EmployeeError> {
        if !self.repo.exists_by_id(id).await.map_err(storage)? {
            tracing::warn!(employee_id = %id, "employee not found");
            return Err(EmployeeError::NotFound(id));
        }

        self.repo.delete(id).await.map_err(|e| match e {
            RepositoryError::NotFound => EmployeeError::NotFound(id),
            other => storage(other),
        })?;

        tracing::info!(employee_id = %id, "deleted employee");
        Ok(())
    }

    pub async fn count_employees(&self) -> Result<u64, EmployeeError> {
        self.repo.count().await.map_err(storage)
    }

    /// Number of employees whose status is ACTIVE, ignoring case.
    pub async fn count_active(&self) -> Result<u64, EmployeeError> {
        self.repo
            .count_by_status_ignore_case(status::ACTIVE)
            .await
            .map_err(storage)
    }

    /// Staff-wide statistics over the current employee set.
    pub async fn employee_statistics(&self) -> Result<EmployeeStatistics, EmployeeError> {
        let employees = self.repo.list_all().await.map_err(storage)?;
        let stats = statistics::employee_statistics(&employees);
        tracing::debug!(total = stats.total_employees, "computed employee statistics");
        Ok(stats)
    }

    /// Per-department statistics over the current employee set.
    pub async fn department_statistics(&self) -> Result<Vec<DepartmentStatistics>, EmployeeError> {
        let employees = self.repo.list_all().await.map_err(storage)?;
        let stats = statistics::department_statistics(&employees);
        tracing::debug!(departments = stats.len(), "computed department statistics");
        Ok(stats)
    }

    async fn require(&self, id: EmployeeId) -> Result<Employee, EmployeeError> {
        self.repo
            .get_by_id(id)
            .await
            .map_err(storage)?
            .ok_or_else(|| {
                tracing::warn!(employee_id = %id, "employee not found");
                EmployeeError::NotFound(id)
            })
    }

    async fn save(&self, employee: Employee) -> Result<Employee, EmployeeError> {
        let id = employee.id;
        let email = employee.email.clone();
        self.repo.update(&employee).await.map_err(|e| match e {
            RepositoryError::NotFound => EmployeeError::NotFound(id),
            RepositoryError::Conflict(_) => EmployeeError::DuplicateEmail(email),
            other => storage(other),
        })
    }
}
