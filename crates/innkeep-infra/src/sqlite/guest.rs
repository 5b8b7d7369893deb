//! SQLite guest repository implementation.

use innkeep_core::repository::guest::GuestRepository;
use innkeep_types::error::RepositoryError;
use innkeep_types::guest::{CreateGuestRequest, Guest, GuestId};
use sqlx::Row;

use super::pool::DatabasePool;
use super::query_error;

pub struct SqliteGuestRepository {
    pool: DatabasePool,
}

impl SqliteGuestRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

fn map_row(row: &sqlx::sqlite::SqliteRow) -> Result<Guest, sqlx::Error> {
    Ok(Guest {
        id: GuestId(row.try_get("id")?),
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        email: row.try_get("email")?,
        phone: row.try_get("phone")?,
    })
}

impl GuestRepository for SqliteGuestRepository {
    async fn create(&self, request: &CreateGuestRequest) -> Result<Guest, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO guests (first_name, last_name, email, phone) VALUES (?, ?, ?, ?)",
        )
        .bind(&request.first_name)
        .bind(&request.last_name)
        .bind(&request.email)
        .bind(&request.phone)
        .execute(&self.pool.writer)
        .await
        .map_err(query_error)?;

        Ok(Guest {
            id: GuestId(result.last_insert_rowid()),
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            email: request.email.clone(),
            phone: request.phone.clone(),
        })
    }

    async fn get_by_id(&self, id: GuestId) -> Result<Option<Guest>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM guests WHERE id = ?")
            .bind(id.0)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(query_error)?;

        row.as_ref()
            .map(map_row)
            .transpose()
            .map_err(query_error)
    }

    async fn list(&self) -> Result<Vec<Guest>, RepositoryError> {
        let rows = sqlx::query("SELECT * FROM guests ORDER BY id")
            .fetch_all(&self.pool.reader)
            .await
            .map_err(query_error)?;

        rows.iter()
            .map(map_row)
            .collect::<Result<_, _>>()
            .map_err(query_error)
    }
}
