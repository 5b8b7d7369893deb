use thiserror::Error;

use crate::employee::EmployeeId;
use crate::guest::GuestId;

/// Errors related to employee operations.
#[derive(Debug, Error)]
pub enum EmployeeError {
    #[error("employee not found with id: {0}")]
    NotFound(EmployeeId),

    #[error("employee with email '{0}' already exists")]
    DuplicateEmail(String),

    #[error("invalid employee record: {0}")]
    InvalidRecord(String),

    #[error("storage error: {0}")]
    StorageError(String),
}

/// Errors related to reservation operations.
#[derive(Debug, Error)]
pub enum ReservationError {
    /// The referenced guest does not exist; nothing was stored.
    #[error("guest not found with id: {0}")]
    GuestNotFound(GuestId),

    #[error("storage error: {0}")]
    StorageError(String),
}

/// Errors related to guest lookups and registration.
#[derive(Debug, Error)]
pub enum GuestError {
    #[error("guest not found with id: {0}")]
    NotFound(GuestId),

    #[error("invalid guest: {0}")]
    InvalidGuest(String),

    #[error("storage error: {0}")]
    StorageError(String),
}

/// Errors from repository operations (used by trait definitions in innkeep-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,

    #[error("conflict: {0}")]
    Conflict(String),
}
