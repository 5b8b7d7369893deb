//! Employee repository trait definition.

use innkeep_types::employee::{Employee, EmployeeId, EmployeeRecord};
use innkeep_types::error::RepositoryError;

/// Repository trait for employee persistence.
///
/// Implementations live in innkeep-infra (e.g., SqliteEmployeeRepository).
/// Every string filter is an exact, case-sensitive comparison unless the
/// method name says otherwise.
///
/// Uses native async fn in traits (Rust 2024 edition, no async_trait macro).
pub trait EmployeeRepository: Send + Sync {
    /// Insert a new employee. The store assigns the id.
    ///
    /// Returns `Conflict` if the email is already taken.
    fn create(
        &self,
        record: &EmployeeRecord,
    ) -> impl std::future::Future<Output = Result<Employee, RepositoryError>> + Send;

    fn get_by_id(
        &self,
        id: EmployeeId,
    ) -> impl std::future::Future<Output = Result<Option<Employee>, RepositoryError>> + Send;

    fn get_by_email(
        &self,
        email: &str,
    ) -> impl std::future::Future<Output = Result<Option<Employee>, RepositoryError>> + Send;

    /// Every employee, ordered by id.
    fn list_all(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Employee>, RepositoryError>> + Send;

    fn list_by_department(
        &self,
        department: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Employee>, RepositoryError>> + Send;

    fn list_by_status(
        &self,
        status: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Employee>, RepositoryError>> + Send;

    fn list_by_position(
        &self,
        position: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Employee>, RepositoryError>> + Send;

    /// Employees whose first name OR last name contains `term`
    /// (case-sensitive substring).
    fn search_by_name(
        &self,
        term: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Employee>, RepositoryError>> + Send;

    fn exists_by_email(
        &self,
        email: &str,
    ) -> impl std::future::Future<Output = Result<bool, RepositoryError>> + Send;

    fn exists_by_id(
        &self,
        id: EmployeeId,
    ) -> impl std::future::Future<Output = Result<bool, RepositoryError>> + Send;

    /// Replace every field of an existing employee. Returns the stored row.
    ///
    /// `NotFound` if the id does not exist, `Conflict` if the email is taken
    /// by another employee.
    fn update(
        &self,
        employee: &Employee,
    ) -> impl std::future::Future<Output = Result<Employee, RepositoryError>> + Send;

    /// Permanently delete an employee. `NotFound` if the id does not exist.
    fn delete(
        &self,
        id: EmployeeId,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    fn count(&self) -> impl std::future::Future<Output = Result<u64, RepositoryError>> + Send;

    /// Count employees whose status equals `status`, ignoring case.
    fn count_by_status_ignore_case(
        &self,
        status: &str,
    ) -> impl std::future::Future<Output = Result<u64, RepositoryError>> + Send;
}
