//! Derived, never-persisted employee summaries.

use serde::{Deserialize, Serialize};

/// Staff-wide summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeStatistics {
    pub total_employees: u64,
    pub active_employees: u64,
    pub inactive_employees: u64,
    pub on_leave_employees: u64,
    /// Mean salary, 0 when there are no employees.
    pub average_salary: f64,
    pub total_salary_expense: f64,
}

/// Summary of one department group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentStatistics {
    pub department: String,
    pub employee_count: u64,
    pub average_salary: f64,
    pub total_salary: f64,
    pub active_count: u64,
}
