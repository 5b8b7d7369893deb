//! Employee statistics.
//!
//! Both summaries are pure functions over a full snapshot of the employee set.
//! Nothing is cached or maintained incrementally: callers load the snapshot
//! and recompute on every request.

use std::collections::BTreeMap;

use innkeep_types::employee::{Employee, status};
use innkeep_types::statistics::{DepartmentStatistics, EmployeeStatistics};

/// Compute the staff-wide summary.
///
/// Status counts use case-insensitive matching, so employees with an
/// unrecognized status are counted in the total only.
pub fn employee_statistics(employees: &[Employee]) -> EmployeeStatistics {
    let count_status =
        |expected: &str| employees.iter().filter(|e| status::matches(&e.status, expected)).count() as u64;

    let total_salary_expense: f64 = employees.iter().map(|e| e.salary).sum();

    EmployeeStatistics {
        total_employees: employees.len() as u64,
        active_employees: count_status(status::ACTIVE),
        inactive_employees: count_status(status::INACTIVE),
        on_leave_employees: count_status(status::ON_LEAVE),
        average_salary: mean(total_salary_expense, employees.len()),
        total_salary_expense,
    }
}

/// Compute one summary per distinct department value.
///
/// Grouping is by exact string equality, so `"KITCHEN"` and `"kitchen"` are
/// separate groups. Every employee lands in exactly one group. Groups are
/// returned ordered by department name.
pub fn department_statistics(employees: &[Employee]) -> Vec<DepartmentStatistics> {
    let mut groups: BTreeMap<&str, Vec<&Employee>> = BTreeMap::new();
    for employee in employees {
        groups
            .entry(employee.department.as_str())
            .or_default()
            .push(employee);
    }

    groups
        .into_iter()
        .map(|(department, members)| {
            let total_salary: f64 = members.iter().map(|e| e.salary).sum();
            DepartmentStatistics {
                department: department.to_string(),
                employee_count: members.len() as u64,
                average_salary: mean(total_salary, members.len()),
                total_salary,
                active_count: members.iter().filter(|e| e.is_active()).count() as u64,
            }
        })
        .collect()
}

fn mean(sum: f64, count: usize) -> f64 {
    if count == 0 { 0.0 } else { sum / count as f64 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::testing::employee;
    use innkeep_types::employee::{EmployeeId, department};

    fn staff() -> Vec<Employee> {
        vec![
            employee(1, "John", "Smith", department::FRONT_DESK, 55000.0, "ACTIVE"),
            employee(2, "Lisa", "Martinez", department::HOUSEKEEPING, 31000.0, "ON_LEAVE"),
            employee(3, "James", "Anderson", department::KITCHEN, 65000.0, "active"),
            employee(4, "Robert", "Lee", department::KITCHEN, 38000.0, "INACTIVE"),
            employee(5, "Kevin", "White", department::SECURITY, 40000.0, "PROBATION"),
        ]
    }

    #[test]
    fn test_employee_statistics_empty() {
        let stats = employee_statistics(&[]);
        assert_eq!(stats.total_employees, 0);
        assert_eq!(stats.active_employees, 0);
        assert_eq!(stats.average_salary, 0.0);
        assert_eq!(stats.total_salary_expense, 0.0);
    }

    #[test]
    fn test_employee_statistics_counts_ignore_case() {
        let stats = employee_statistics(&staff());
        assert_eq!(stats.total_employees, 5);
        assert_eq!(stats.active_employees, 2);
        assert_eq!(stats.inactive_employees, 1);
        assert_eq!(stats.on_leave_employees, 1);
        // PROBATION is counted in the total only.
        assert!(
            stats.active_employees + stats.inactive_employees + stats.on_leave_employees
                < stats.total_employees
        );
    }

    #[test]
    fn test_employee_statistics_salary_totals() {
        let stats = employee_statistics(&staff());
        assert_eq!(stats.total_salary_expense, 229000.0);
        assert_eq!(stats.average_salary, 45800.0);
    }

    #[test]
    fn test_department_statistics_front_desk_scenario() {
        let employees = vec![
            employee(1, "Ann", "A", department::FRONT_DESK, 1000.0, "ACTIVE"),
            employee(2, "Bob", "B", department::FRONT_DESK, 3000.0, "ON_LEAVE"),
        ];
        let stats = department_statistics(&employees);
        assert_eq!(stats.len(), 1);
        let front_desk = &stats[0];
        assert_eq!(front_desk.department, "FRONT_DESK");
        assert_eq!(front_desk.employee_count, 2);
        assert_eq!(front_desk.average_salary, 2000.0);
        assert_eq!(front_desk.total_salary, 4000.0);
        assert_eq!(front_desk.active_count, 1);
    }

    #[test]
    fn test_department_statistics_partition_set() {
        let employees = staff();
        let stats = department_statistics(&employees);

        let covered: u64 = stats.iter().map(|d| d.employee_count).sum();
        assert_eq!(covered, employees.len() as u64);

        for e in &employees {
            let groups = stats.iter().filter(|d| d.department == e.department).count();
            assert_eq!(groups, 1, "{} should be in exactly one group", e.full_name());
        }
    }

    #[test]
    fn test_department_grouping_is_case_sensitive() {
        let mut employees = staff();
        employees.push(employee(6, "Maria", "Garcia", "kitchen", 52000.0, "ACTIVE"));

        let stats = department_statistics(&employees);
        let kitchen = stats.iter().find(|d| d.department == "KITCHEN").unwrap();
        let lower = stats.iter().find(|d| d.department == "kitchen").unwrap();
        assert_eq!(kitchen.employee_count, 2);
        assert_eq!(kitchen.active_count, 1);
        assert_eq!(lower.employee_count, 1);
    }

    #[test]
    fn test_department_statistics_ordered_by_name() {
        let stats = department_statistics(&staff());
        let names: Vec<&str> = stats.iter().map(|d| d.department.as_str()).collect();
        assert_eq!(names, vec!["FRONT_DESK", "HOUSEKEEPING", "KITCHEN", "SECURITY"]);
    }

    #[test]
    fn test_blank_department_forms_own_group() {
        let mut employees = staff();
        let mut unassigned = employees[0].clone();
        unassigned.id = EmployeeId(9);
        unassigned.department = String::new();
        employees.push(unassigned);

        let stats = department_statistics(&employees);
        assert!(stats.iter().any(|d| d.department.is_empty() && d.employee_count == 1));
    }
}
