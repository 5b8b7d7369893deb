//! SQLite employee repository implementation.
//!
//! Implements `EmployeeRepository` from `innkeep-core` using sqlx with split
//! read/write pools. Text comparisons use SQLite's default BINARY collation
//! (case-sensitive) except `count_by_status_ignore_case`, which uses NOCASE.

use chrono::NaiveDate;
use innkeep_core::repository::employee::EmployeeRepository;
use innkeep_types::employee::{Employee, EmployeeId, EmployeeRecord};
use innkeep_types::error::RepositoryError;
use sqlx::Row;

use super::pool::DatabasePool;
use super::{is_unique_violation, query_error};

/// SQLite-backed implementation of `EmployeeRepository`.
pub struct SqliteEmployeeRepository {
    pool: DatabasePool,
}

impl SqliteEmployeeRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    async fn fetch_where(&self, clause: &str, value: &str) -> Result<Vec<Employee>, RepositoryError> {
        let sql = format!("SELECT * FROM employees WHERE {clause} ORDER BY id");
        let rows = sqlx::query(&sql)
            .bind(value)
            .fetch_all(&self.pool.reader)
            .await
            .map_err(query_error)?;

        rows.iter().map(map_row).collect()
    }
}

/// Internal row type for mapping SQLite rows to domain Employee.
struct EmployeeRow {
    id: i64,
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    position: String,
    department: String,
    salary: f64,
    hire_date: String,
    status: String,
    address: String,
}

impl EmployeeRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            email: row.try_get("email")?,
            phone: row.try_get("phone")?,
            position: row.try_get("position")?,
            department: row.try_get("department")?,
            salary: row.try_get("salary")?,
            hire_date: row.try_get("hire_date")?,
            status: row.try_get("status")?,
            address: row.try_get("address")?,
        })
    }

    fn into_employee(self) -> Result<Employee, RepositoryError> {
        Ok(Employee {
            id: EmployeeId(self.id),
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            position: self.position,
            department: self.department,
            salary: self.salary,
            hire_date: parse_date(&self.hire_date)?,
            status: self.status,
            address: self.address,
        })
    }
}

fn map_row(row: &sqlx::sqlite::SqliteRow) -> Result<Employee, RepositoryError> {
    EmployeeRow::from_row(row)
        .map_err(|e| RepositoryError::Query(e.to_string()))?
        .into_employee()
}

pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, RepositoryError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| RepositoryError::Query(format!("invalid date '{s}': {e}")))
}

pub(crate) fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

impl EmployeeRepository for SqliteEmployeeRepository {
    async fn create(&self, record: &EmployeeRecord) -> Result<Employee, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO employees (first_name, last_name, email, phone, position, department, salary, hire_date, status, address)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&record.first_name)
        .bind(&record.last_name)
        .bind(&record.email)
        .bind(&record.phone)
        .bind(&record.position)
        .bind(&record.department)
        .bind(record.salary)
        .bind(format_date(&record.hire_date))
        .bind(&record.status)
        .bind(&record.address)
        .execute(&self.pool.writer)
        .await;

        match result {
            Ok(done) => Ok(Employee::from_record(
                EmployeeId(done.last_insert_rowid()),
                record.clone(),
            )),
            Err(e) if is_unique_violation(&e) => Err(RepositoryError::Conflict(format!(
                "email '{}' already exists",
                record.email
            ))),
            Err(e) => Err(query_error(e)),
        }
    }

    async fn get_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM employees WHERE id = ?")
            .bind(id.0)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(query_error)?;

        row.as_ref().map(map_row).transpose()
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<Employee>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM employees WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(query_error)?;

        row.as_ref().map(map_row).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Employee>, RepositoryError> {
        let rows = sqlx::query("SELECT * FROM employees ORDER BY id")
            .fetch_all(&self.pool.reader)
            .await
            .map_err(query_error)?;

        rows.iter().map(map_row).collect()
    }

    async fn list_by_department(&self, department: &str) -> Result<Vec<Employee>, RepositoryError> {
        self.fetch_where("department = ?", department).await
    }

    async fn list_by_status(&self, status: &str) -> Result<Vec<Employee>, RepositoryError> {
        self.fetch_where("status = ?", status).await
    }

    async fn list_by_position(&self, position: &str) -> Result<Vec<Employee>, RepositoryError> {
        self.fetch_where("position = ?", position).await
    }

    async fn search_by_name(&self, term: &str) -> Result<Vec<Employee>, RepositoryError> {
        // instr() is case-sensitive, unlike LIKE.
        let rows = sqlx::query(
            "SELECT * FROM employees WHERE instr(first_name, ?) > 0 OR instr(last_name, ?) > 0 ORDER BY id",
        )
        .bind(term)
        .bind(term)
        .fetch_all(&self.pool.reader)
        .await
        .map_err(query_error)?;

        rows.iter().map(map_row).collect()
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, RepositoryError> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM employees WHERE email = ?) AS found")
            .bind(email)
            .fetch_one(&self.pool.reader)
            .await
            .map_err(query_error)?;
        let found: bool = row.try_get("found").map_err(query_error)?;
        Ok(found)
    }

    async fn exists_by_id(&self, id: EmployeeId) -> Result<bool, RepositoryError> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM employees WHERE id = ?) AS found")
            .bind(id.0)
            .fetch_one(&self.pool.reader)
            .await
            .map_err(query_error)?;
        let found: bool = row.try_get("found").map_err(query_error)?;
        Ok(found)
    }

    async fn update(&self, employee: &Employee) -> Result<Employee, RepositoryError> {
        let result = sqlx::query(
            "UPDATE employees SET first_name = ?, last_name = ?, email = ?, phone = ?, position = ?, department = ?, salary = ?, hire_date = ?, status = ?, address = ?
             WHERE id = ?",
        )
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .bind(&employee.phone)
        .bind(&employee.position)
        .bind(&employee.department)
        .bind(employee.salary)
        .bind(format_date(&employee.hire_date))
        .bind(&employee.status)
        .bind(&employee.address)
        .bind(employee.id.0)
        .execute(&self.pool.writer)
        .await;

        match result {
            Ok(done) if done.rows_affected() == 0 => Err(RepositoryError::NotFound),
            Ok(_) => Ok(employee.clone()),
            Err(e) if is_unique_violation(&e) => Err(RepositoryError::Conflict(format!(
                "email '{}' already exists",
                employee.email
            ))),
            Err(e) => Err(query_error(e)),
        }
    }

    async fn delete(&self, id: EmployeeId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id.0)
            .execute(&self.pool.writer)
            .await
            .map_err(query_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM employees")
            .fetch_one(&self.pool.reader)
            .await
            .map_err(query_error)?;
        Ok(count as u64)
    }

    async fn count_by_status_ignore_case(&self, status: &str) -> Result<u64, RepositoryError> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM employees WHERE status = ? COLLATE NOCASE")
                .bind(status)
                .fetch_one(&self.pool.reader)
                .await
                .map_err(query_error)?;
        Ok(count as u64)
    }
}
