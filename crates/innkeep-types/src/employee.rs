use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Store-assigned identifier of an employee. Immutable once assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub i64);

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EmployeeId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Departments the hotel organizes staff into.
///
/// These are the values the front office uses, but the department field is
/// free text: unknown values are stored and grouped like any other.
pub mod department {
    pub const FRONT_DESK: &str = "FRONT_DESK";
    pub const HOUSEKEEPING: &str = "HOUSEKEEPING";
    pub const KITCHEN: &str = "KITCHEN";
    pub const RESTAURANT: &str = "RESTAURANT";
    pub const MAINTENANCE: &str = "MAINTENANCE";
    pub const MANAGEMENT: &str = "MANAGEMENT";
    pub const SECURITY: &str = "SECURITY";

    pub const ALL: [&str; 7] = [
        FRONT_DESK,
        HOUSEKEEPING,
        KITCHEN,
        RESTAURANT,
        MAINTENANCE,
        MANAGEMENT,
        SECURITY,
    ];
}

/// Employment statuses recognized by the statistics.
///
/// Like departments, the status field accepts any string.
pub mod status {
    pub const ACTIVE: &str = "ACTIVE";
    pub const INACTIVE: &str = "INACTIVE";
    pub const ON_LEAVE: &str = "ON_LEAVE";

    /// Case-insensitive status classification used by counts and statistics.
    ///
    /// Exact-match filters compare case-sensitively; only classification
    /// ignores case.
    pub fn matches(status: &str, expected: &str) -> bool {
        status.eq_ignore_ascii_case(expected)
    }
}

/// Transfer representation of an employee without its id.
///
/// Input of create and full-replace update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub first_name: String,
    pub last_name: String,
    /// Unique across all employees (case-sensitive).
    pub email: String,
    pub phone: String,
    /// Free-text job title ("Head Chef", "Receptionist").
    pub position: String,
    pub department: String,
    pub salary: f64,
    pub hire_date: NaiveDate,
    pub status: String,
    pub address: String,
}

impl EmployeeRecord {
    /// Check the field-level constraints of a record.
    ///
    /// Email must be non-blank and salary a finite, non-negative amount.
    /// Department and status are deliberately not checked.
    pub fn validate(&self) -> Result<(), String> {
        if self.email.trim().is_empty() {
            return Err("email cannot be empty".to_string());
        }
        if !self.salary.is_finite() || self.salary < 0.0 {
            return Err(format!(
                "salary must be a non-negative amount, got {}",
                self.salary
            ));
        }
        Ok(())
    }
}

/// A stored employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub department: String,
    pub salary: f64,
    pub hire_date: NaiveDate,
    pub status: String,
    pub address: String,
}

impl Employee {
    /// Attach a store-assigned id to a record.
    pub fn from_record(id: EmployeeId, record: EmployeeRecord) -> Self {
        Self {
            id,
            first_name: record.first_name,
            last_name: record.last_name,
            email: record.email,
            phone: record.phone,
            position: record.position,
            department: record.department,
            salary: record.salary,
            hire_date: record.hire_date,
            status: record.status,
            address: record.address,
        }
    }

    /// Replace every field except the id.
    pub fn apply(&mut self, record: EmployeeRecord) {
        let id = self.id;
        *self = Self::from_record(id, record);
    }

    /// The record view of this employee (everything except the id).
    pub fn to_record(&self) -> EmployeeRecord {
        EmployeeRecord {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            position: self.position.clone(),
            department: self.department.clone(),
            salary: self.salary,
            hire_date: self.hire_date,
            status: self.status.clone(),
            address: self.address.clone(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether the status is ACTIVE, ignoring case.
    pub fn is_active(&self) -> bool {
        status::matches(&self.status, status::ACTIVE)
    }
}
