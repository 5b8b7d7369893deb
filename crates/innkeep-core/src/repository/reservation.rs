//! Reservation repository trait definition.

use innkeep_types::error::RepositoryError;
use innkeep_types::guest::GuestId;
use innkeep_types::reservation::{NewReservation, Reservation, ReservationId};

/// Repository trait for reservation persistence.
///
/// Reservations are append-only apart from deletion: there is no update.
pub trait ReservationRepository: Send + Sync {
    /// Insert a resolved reservation. The store assigns the id.
    fn create(
        &self,
        reservation: &NewReservation,
    ) -> impl std::future::Future<Output = Result<Reservation, RepositoryError>> + Send;

    /// Every reservation, ordered by id.
    fn list_all(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Reservation>, RepositoryError>> + Send;

    /// Reservations linked to the given guest, ordered by id.
    fn list_by_guest(
        &self,
        guest_id: GuestId,
    ) -> impl std::future::Future<Output = Result<Vec<Reservation>, RepositoryError>> + Send;

    /// Delete by id. Returns `true` if a row existed.
    fn delete(
        &self,
        id: ReservationId,
    ) -> impl std::future::Future<Output = Result<bool, RepositoryError>> + Send;
}
