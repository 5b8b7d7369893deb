//! Sample staff roster.
//!
//! Loaded by `innkeep seed`, or on `serve` when `seed_sample_data` is set.
//! Seeding only happens into an empty directory.

use chrono::NaiveDate;
use innkeep_core::repository::employee::EmployeeRepository;
use innkeep_core::service::employee::EmployeeService;
use innkeep_types::employee::{EmployeeRecord, department, status};
use innkeep_types::error::EmployeeError;

type RosterEntry = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    f64,
    (i32, u32, u32),
    &'static str,
    &'static str,
);

// first, last, phone, position, department, salary, hire date, status, address
const ROSTER: [RosterEntry; 20] = [
    ("John", "Smith", "1234567890", "Front Desk Manager", department::FRONT_DESK, 55000.0, (2022, 1, 15), status::ACTIVE, "123 Main St, City"),
    ("Sarah", "Johnson", "1234567891", "Receptionist", department::FRONT_DESK, 35000.0, (2023, 3, 20), status::ACTIVE, "456 Oak Ave, City"),
    ("Michael", "Brown", "1234567892", "Receptionist", department::FRONT_DESK, 34000.0, (2023, 6, 10), status::ACTIVE, "789 Pine St, City"),
    ("Emily", "Davis", "1234567893", "Housekeeping Manager", department::HOUSEKEEPING, 48000.0, (2021, 5, 1), status::ACTIVE, "321 Elm St, City"),
    ("David", "Wilson", "1234567894", "Housekeeper", department::HOUSEKEEPING, 32000.0, (2023, 2, 14), status::ACTIVE, "654 Maple Dr, City"),
    ("Lisa", "Martinez", "1234567895", "Housekeeper", department::HOUSEKEEPING, 31000.0, (2023, 7, 22), status::ON_LEAVE, "987 Cedar Ln, City"),
    ("James", "Anderson", "1234567896", "Head Chef", department::KITCHEN, 65000.0, (2020, 9, 1), status::ACTIVE, "147 Birch Rd, City"),
    ("Maria", "Garcia", "1234567897", "Sous Chef", department::KITCHEN, 52000.0, (2021, 11, 15), status::ACTIVE, "258 Spruce Ave, City"),
    ("Robert", "Lee", "1234567898", "Line Cook", department::KITCHEN, 38000.0, (2022, 4, 10), status::ACTIVE, "369 Willow St, City"),
    ("Jennifer", "Taylor", "1234567899", "Pastry Chef", department::KITCHEN, 45000.0, (2022, 8, 5), status::ACTIVE, "741 Ash Blvd, City"),
    ("William", "Thomas", "1234567800", "Restaurant Manager", department::RESTAURANT, 58000.0, (2021, 3, 1), status::ACTIVE, "852 Cherry Ln, City"),
    ("Jessica", "White", "1234567801", "Waiter", department::RESTAURANT, 30000.0, (2023, 1, 20), status::ACTIVE, "963 Poplar Dr, City"),
    ("Christopher", "Harris", "1234567802", "Waiter", department::RESTAURANT, 29000.0, (2023, 5, 15), status::ACTIVE, "159 Hickory St, City"),
    ("Daniel", "Clark", "1234567803", "Maintenance Manager", department::MAINTENANCE, 52000.0, (2020, 7, 1), status::ACTIVE, "357 Walnut Ave, City"),
    ("Amanda", "Lewis", "1234567804", "Maintenance Technician", department::MAINTENANCE, 40000.0, (2022, 10, 20), status::ACTIVE, "486 Beech Rd, City"),
    ("Thomas", "Walker", "1234567805", "General Manager", department::MANAGEMENT, 85000.0, (2019, 1, 1), status::ACTIVE, "579 Sycamore Blvd, City"),
    ("Patricia", "Hall", "1234567806", "HR Manager", department::MANAGEMENT, 62000.0, (2020, 3, 15), status::ACTIVE, "681 Magnolia Dr, City"),
    ("Richard", "Allen", "1234567807", "Finance Manager", department::MANAGEMENT, 68000.0, (2020, 6, 1), status::ACTIVE, "792 Dogwood St, City"),
    ("Linda", "Young", "1234567808", "Security Manager", department::SECURITY, 50000.0, (2021, 2, 1), status::ACTIVE, "804 Redwood Ave, City"),
    ("Joseph", "King", "1234567809", "Security Guard", department::SECURITY, 36000.0, (2022, 12, 10), status::ACTIVE, "915 Fir Ln, City"),
];

/// The sample roster as employee records.
pub fn sample_roster() -> Vec<EmployeeRecord> {
    ROSTER
        .iter()
        .filter_map(|&(first, last, phone, position, dept, salary, (y, m, d), state, address)| {
            let hire_date = NaiveDate::from_ymd_opt(y, m, d)?;
            Some(EmployeeRecord {
                first_name: first.to_string(),
                last_name: last.to_string(),
                email: format!("{}.{}@hotel.com", first.to_lowercase(), last.to_lowercase()),
                phone: phone.to_string(),
                position: position.to_string(),
                department: dept.to_string(),
                salary,
                hire_date,
                status: state.to_string(),
                address: address.to_string(),
            })
        })
        .collect()
}

/// Insert the sample roster unless the directory already holds employees.
///
/// Returns how many employees were added (zero when skipped).
pub async fn seed_sample_data<E: EmployeeRepository>(
    service: &EmployeeService<E>,
) -> Result<usize, EmployeeError> {
    if service.count_employees().await? > 0 {
        tracing::info!("employee directory already has data, skipping sample roster");
        return Ok(0);
    }

    let roster = sample_roster();
    let total = roster.len();
    for record in roster {
        service.create_employee(record).await?;
    }

    tracing::info!(count = total, "loaded sample staff roster");
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::employee::SqliteEmployeeRepository;
    use crate::sqlite::pool::test_pool;

    #[test]
    fn test_sample_roster_is_valid() {
        let roster = sample_roster();
        assert_eq!(roster.len(), 20);
        assert!(roster.iter().all(|r| r.validate().is_ok()));

        let on_leave: Vec<&str> = roster
            .iter()
            .filter(|r| r.status == status::ON_LEAVE)
            .map(|r| r.first_name.as_str())
            .collect();
        assert_eq!(on_leave, vec!["Lisa"]);
        assert_eq!(roster[0].email, "john.smith@hotel.com");
    }

    #[tokio::test]
    async fn test_seed_into_empty_directory() {
        let svc = EmployeeService::new(SqliteEmployeeRepository::new(test_pool().await));

        let added = seed_sample_data(&svc).await.unwrap();
        assert_eq!(added, 20);
        assert_eq!(svc.count_employees().await.unwrap(), 20);
        assert_eq!(svc.count_active().await.unwrap(), 19);

        let kitchen = svc.list_by_department(department::KITCHEN).await.unwrap();
        assert_eq!(kitchen.len(), 4);
    }

    #[tokio::test]
    async fn test_seed_skips_populated_directory() {
        let svc = EmployeeService::new(SqliteEmployeeRepository::new(test_pool().await));
        seed_sample_data(&svc).await.unwrap();

        let added = seed_sample_data(&svc).await.unwrap();
        assert_eq!(added, 0);
        assert_eq!(svc.count_employees().await.unwrap(), 20);
    }
}
