//! In-memory repositories and fixtures shared by the service tests.

use std::sync::Mutex;

use chrono::NaiveDate;
use innkeep_types::employee::{Employee, EmployeeId, EmployeeRecord, status};
use innkeep_types::error::RepositoryError;
use innkeep_types::guest::{CreateGuestRequest, Guest, GuestId};
use innkeep_types::reservation::{NewReservation, Reservation, ReservationId};

use crate::repository::employee::EmployeeRepository;
use crate::repository::guest::GuestRepository;
use crate::repository::reservation::ReservationRepository;

pub fn record(first: &str, last: &str, department: &str, salary: f64, status: &str) -> EmployeeRecord {
    EmployeeRecord {
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{}.{}@hotel.com", first.to_lowercase(), last.to_lowercase()),
        phone: "1234567890".to_string(),
        position: "Receptionist".to_string(),
        department: department.to_string(),
        salary,
        hire_date: NaiveDate::from_ymd_opt(2023, 3, 20).unwrap(),
        status: status.to_string(),
        address: "456 Oak Ave, City".to_string(),
    }
}

pub fn employee(
    id: i64,
    first: &str,
    last: &str,
    department: &str,
    salary: f64,
    status: &str,
) -> Employee {
    Employee::from_record(EmployeeId(id), record(first, last, department, salary, status))
}

/// Vec-backed employee store with the same conflict rules as the SQLite one.
#[derive(Default)]
pub struct MockEmployeeRepository {
    rows: Mutex<Vec<Employee>>,
    next_id: Mutex<i64>,
    /// Successful writes, to assert that rejected requests never reach the store.
    pub writes: Mutex<usize>,
}

impl MockEmployeeRepository {
    pub fn snapshot(&self) -> Vec<Employee> {
        self.rows.lock().unwrap().clone()
    }

    fn filter(&self, pred: impl Fn(&Employee) -> bool) -> Vec<Employee> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .filter(|e| pred(e))
            .cloned()
            .collect()
    }
}

impl EmployeeRepository for MockEmployeeRepository {
    async fn create(&self, record: &EmployeeRecord) -> Result<Employee, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|e| e.email == record.email) {
            return Err(RepositoryError::Conflict(format!(
                "email '{}' already exists",
                record.email
            )));
        }
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let employee = Employee::from_record(EmployeeId(*next_id), record.clone());
        rows.push(employee.clone());
        *self.writes.lock().unwrap() += 1;
        Ok(employee)
    }

    async fn get_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, RepositoryError> {
        Ok(self.filter(|e| e.id == id).into_iter().next())
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<Employee>, RepositoryError> {
        Ok(self.filter(|e| e.email == email).into_iter().next())
    }

    async fn list_all(&self) -> Result<Vec<Employee>, RepositoryError> {
        Ok(self.snapshot())
    }

    async fn list_by_department(&self, department: &str) -> Result<Vec<Employee>, RepositoryError> {
        Ok(self.filter(|e| e.department == department))
    }

    async fn list_by_status(&self, status: &str) -> Result<Vec<Employee>, RepositoryError> {
        Ok(self.filter(|e| e.status == status))
    }

    async fn list_by_position(&self, position: &str) -> Result<Vec<Employee>, RepositoryError> {
        Ok(self.filter(|e| e.position == position))
    }

    async fn search_by_name(&self, term: &str) -> Result<Vec<Employee>, RepositoryError> {
        Ok(self.filter(|e| e.first_name.contains(term) || e.last_name.contains(term)))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, RepositoryError> {
        Ok(!self.filter(|e| e.email == email).is_empty())
    }

    async fn exists_by_id(&self, id: EmployeeId) -> Result<bool, RepositoryError> {
        Ok(!self.filter(|e| e.id == id).is_empty())
    }

    async fn update(&self, employee: &Employee) -> Result<Employee, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        if rows
            .iter()
            .any(|e| e.id != employee.id && e.email == employee.email)
        {
            return Err(RepositoryError::Conflict(format!(
                "email '{}' already exists",
                employee.email
            )));
        }
        let slot = rows
            .iter_mut()
            .find(|e| e.id == employee.id)
            .ok_or(RepositoryError::NotFound)?;
        *slot = employee.clone();
        *self.writes.lock().unwrap() += 1;
        Ok(employee.clone())
    }

    async fn delete(&self, id: EmployeeId) -> Result<(), RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|e| e.id != id);
        if rows.len() == before {
            return Err(RepositoryError::NotFound);
        }
        *self.writes.lock().unwrap() += 1;
        Ok(())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(self.rows.lock().unwrap().len() as u64)
    }

    async fn count_by_status_ignore_case(&self, wanted: &str) -> Result<u64, RepositoryError> {
        Ok(self.filter(|e| status::matches(&e.status, wanted)).len() as u64)
    }
}

#[derive(Default)]
pub struct MockGuestRepository {
    rows: Mutex<Vec<Guest>>,
}

impl MockGuestRepository {
    pub fn with_guest(self, id: i64, first: &str, last: &str) -> Self {
        self.rows.lock().unwrap().push(Guest {
            id: GuestId(id),
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: String::new(),
            phone: String::new(),
        });
        self
    }
}

impl GuestRepository for MockGuestRepository {
    async fn create(&self, request: &CreateGuestRequest) -> Result<Guest, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.iter().map(|g| g.id.0).max().unwrap_or(0) + 1;
        let guest = Guest {
            id: GuestId(id),
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            email: request.email.clone(),
            phone: request.phone.clone(),
        };
        rows.push(guest.clone());
        Ok(guest)
    }

    async fn get_by_id(&self, id: GuestId) -> Result<Option<Guest>, RepositoryError> {
        Ok(self.rows.lock().unwrap().iter().find(|g| g.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Guest>, RepositoryError> {
        Ok(self.rows.lock().unwrap().clone())
    }
}

#[derive(Default)]
pub struct MockReservationRepository {
    rows: Mutex<Vec<Reservation>>,
}

impl ReservationRepository for MockReservationRepository {
    async fn create(&self, reservation: &NewReservation) -> Result<Reservation, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.iter().map(|r| r.id.0).max().unwrap_or(0) + 1;
        let stored = reservation.clone().into_reservation(ReservationId(id));
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn list_all(&self) -> Result<Vec<Reservation>, RepositoryError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn list_by_guest(&self, guest_id: GuestId) -> Result<Vec<Reservation>, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.guest_id == guest_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: ReservationId) -> Result<bool, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| r.id != id);
        Ok(rows.len() != before)
    }
}
