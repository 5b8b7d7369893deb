//! SQLite reservation repository implementation.
//!
//! Check-in/out dates are stored as `YYYY-MM-DD` text and `created_at` as
//! RFC 3339. The guest link is enforced by a foreign key; a violation is
//! reported as `RepositoryError::Conflict`.

use chrono::{DateTime, Utc};
use innkeep_core::repository::reservation::ReservationRepository;
use innkeep_types::error::RepositoryError;
use innkeep_types::guest::GuestId;
use innkeep_types::reservation::{NewReservation, Reservation, ReservationId};
use sqlx::Row;

use super::employee::{format_date, parse_date};
use super::pool::DatabasePool;
use super::{is_foreign_key_violation, query_error};

pub struct SqliteReservationRepository {
    pool: DatabasePool,
}

impl SqliteReservationRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

struct ReservationRow {
    id: i64,
    guest_id: i64,
    room_id: String,
    check_in_date: String,
    check_out_date: String,
    status: String,
    created_at: String,
}

impl ReservationRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            guest_id: row.try_get("guest_id")?,
            room_id: row.try_get("room_id")?,
            check_in_date: row.try_get("check_in_date")?,
            check_out_date: row.try_get("check_out_date")?,
            status: row.try_get("status")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_reservation(self) -> Result<Reservation, RepositoryError> {
        Ok(Reservation {
            id: ReservationId(self.id),
            guest_id: GuestId(self.guest_id),
            room_id: self.room_id,
            check_in_date: parse_date(&self.check_in_date)?,
            check_out_date: parse_date(&self.check_out_date)?,
            status: self.status,
            created_at: parse_datetime(&self.created_at)?,
        })
    }
}

fn map_row(row: &sqlx::sqlite::SqliteRow) -> Result<Reservation, RepositoryError> {
    ReservationRow::from_row(row)
        .map_err(|e| RepositoryError::Query(e.to_string()))?
        .into_reservation()
}

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

impl ReservationRepository for SqliteReservationRepository {
    async fn create(&self, reservation: &NewReservation) -> Result<Reservation, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO reservations (guest_id, room_id, check_in_date, check_out_date, status, created_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(reservation.guest_id.0)
        .bind(&reservation.room_id)
        .bind(format_date(&reservation.check_in_date))
        .bind(format_date(&reservation.check_out_date))
        .bind(&reservation.status)
        .bind(reservation.created_at.to_rfc3339())
        .execute(&self.pool.writer)
        .await;

        match result {
            Ok(done) => Ok(reservation
                .clone()
                .into_reservation(ReservationId(done.last_insert_rowid()))),
            Err(e) if is_foreign_key_violation(&e) => Err(RepositoryError::Conflict(format!(
                "guest {} does not exist",
                reservation.guest_id
            ))),
            Err(e) => Err(query_error(e)),
        }
    }

    async fn list_all(&self) -> Result<Vec<Reservation>, RepositoryError> {
        let rows = sqlx::query("SELECT * FROM reservations ORDER BY id")
            .fetch_all(&self.pool.reader)
            .await
            .map_err(query_error)?;

        rows.iter().map(map_row).collect()
    }

    async fn list_by_guest(&self, guest_id: GuestId) -> Result<Vec<Reservation>, RepositoryError> {
        let rows = sqlx::query("SELECT * FROM reservations WHERE guest_id = ? ORDER BY id")
            .bind(guest_id.0)
            .fetch_all(&self.pool.reader)
            .await
            .map_err(query_error)?;

        rows.iter().map(map_row).collect()
    }

    async fn delete(&self, id: ReservationId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM reservations WHERE id = ?")
            .bind(id.0)
            .execute(&self.pool.writer)
            .await
            .map_err(query_error)?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::guest::SqliteGuestRepository;
    use crate::sqlite::pool::test_pool;
    use chrono::NaiveDate;
    use innkeep_core::repository::guest::GuestRepository;
    use innkeep_types::guest::CreateGuestRequest;

    async fn setup() -> (SqliteReservationRepository, GuestId) {
        let pool = test_pool().await;
        let guests = SqliteGuestRepository::new(pool.clone());
        let guest = guests
            .create(&CreateGuestRequest {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                email: String::new(),
                phone: String::new(),
            })
            .await
            .unwrap();
        (SqliteReservationRepository::new(pool), guest.id)
    }

    fn new_reservation(guest_id: GuestId, room: &str) -> NewReservation {
        NewReservation {
            guest_id,
            room_id: room.to_string(),
            check_in_date: NaiveDate::from_ymd_opt(2026, 12, 24).unwrap(),
            check_out_date: NaiveDate::from_ymd_opt(2026, 12, 27).unwrap(),
            status: "CONFIRMED".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let (repo, guest_id) = setup().await;
        let input = new_reservation(guest_id, "101");

        let created = repo.create(&input).await.unwrap();
        assert!(created.id.0 > 0);

        let all = repo.list_all().await.unwrap();
        assert_eq!(all, vec![created.clone()]);
        assert_eq!(all[0].created_at, input.created_at);
    }

    #[tokio::test]
    async fn test_create_unknown_guest_is_conflict() {
        let (repo, _) = setup().await;
        let err = repo
            .create(&new_reservation(GuestId(404), "101"))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::Conflict(_)));
        assert!(repo.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_by_guest() {
        let (repo, guest_id) = setup().await;
        repo.create(&new_reservation(guest_id, "101")).await.unwrap();
        repo.create(&new_reservation(guest_id, "101")).await.unwrap();

        assert_eq!(repo.list_by_guest(guest_id).await.unwrap().len(), 2);
        assert!(repo.list_by_guest(GuestId(99)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_reports_existence() {
        let (repo, guest_id) = setup().await;
        let created = repo.create(&new_reservation(guest_id, "101")).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert!(!repo.delete(created.id).await.unwrap());
    }
}
