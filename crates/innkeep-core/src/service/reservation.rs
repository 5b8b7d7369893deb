//! Reservation ledger service.
//!
//! Every reservation is tied to a guest that must exist when the reservation
//! is booked. The guest is resolved once, at creation; later reads never
//! re-resolve it.

use innkeep_types::error::{RepositoryError, ReservationError};
use innkeep_types::guest::GuestId;
use innkeep_types::reservation::{
    CreateReservationRequest, NewReservation, Reservation, ReservationId,
};

use crate::repository::guest::GuestRepository;
use crate::repository::reservation::ReservationRepository;

fn storage(e: RepositoryError) -> ReservationError {
    ReservationError::StorageError(e.to_string())
}

pub struct ReservationService<R: ReservationRepository, G: GuestRepository> {
    reservation_repo: R,
    guest_repo: G,
}

impl<R: ReservationRepository, G: GuestRepository> ReservationService<R, G> {
    pub fn new(reservation_repo: R, guest_repo: G) -> Self {
        Self {
            reservation_repo,
            guest_repo,
        }
    }

    /// Book a reservation for an existing guest.
    ///
    /// The creation timestamp is stamped here. Dates are stored as given:
    /// check-out may precede check-in and rooms may be double-booked.
    pub async fn create_reservation(
        &self,
        request: CreateReservationRequest,
    ) -> Result<Reservation, ReservationError> {
        let guest = self
            .guest_repo
            .get_by_id(request.guest_id)
            .await
            .map_err(storage)?
            .ok_or_else(|| {
                tracing::warn!(guest_id = %request.guest_id, "guest not found");
                ReservationError::GuestNotFound(request.guest_id)
            })?;

        let new = NewReservation {
            guest_id: guest.id,
            room_id: request.room_id,
            check_in_date: request.check_in_date,
            check_out_date: request.check_out_date,
            status: request.status,
            created_at: chrono::Utc::now(),
        };

        let reservation = self.reservation_repo.create(&new).await.map_err(|e| match e {
            // The guest vanished between the lookup and the insert.
            RepositoryError::Conflict(_) => ReservationError::GuestNotFound(guest.id),
            other => storage(other),
        })?;

        tracing::info!(
            reservation_id = %reservation.id,
            guest_id = %reservation.guest_id,
            room_id = %reservation.room_id,
            "created reservation"
        );
        Ok(reservation)
    }

    pub async fn list_reservations(&self) -> Result<Vec<Reservation>, ReservationError> {
        self.reservation_repo.list_all().await.map_err(storage)
    }

    /// Reservations of one guest. An unknown guest simply has none.
    pub async fn list_by_guest(&self, guest_id: GuestId) -> Result<Vec<Reservation>, ReservationError> {
        self.reservation_repo
            .list_by_guest(guest_id)
            .await
            .map_err(storage)
    }

    /// Delete a reservation. Succeeds whether or not the id existed.
    pub async fn delete_reservation(&self, id: ReservationId) -> Result<bool, ReservationError> {
        let existed = self.reservation_repo.delete(id).await.map_err(storage)?;
        tracing::info!(reservation_id = %id, existed, "deleted reservation");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::testing::{MockGuestRepository, MockReservationRepository};
    use chrono::NaiveDate;

    fn service() -> ReservationService<MockReservationRepository, MockGuestRepository> {
        ReservationService::new(
            MockReservationRepository::default(),
            MockGuestRepository::default()
                .with_guest(1, "Ada", "Lovelace")
                .with_guest(2, "Alan", "Turing"),
        )
    }

    fn request(guest: i64, room: &str) -> CreateReservationRequest {
        CreateReservationRequest {
            guest_id: GuestId(guest),
            room_id: room.to_string(),
            check_in_date: NaiveDate::from_ymd_opt(2026, 11, 1).unwrap(),
            check_out_date: NaiveDate::from_ymd_opt(2026, 11, 3).unwrap(),
            status: "CONFIRMED".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_stamps_time_and_assigns_id() {
        let svc = service();
        let before = chrono::Utc::now();

        let reservation = svc.create_reservation(request(1, "101")).await.unwrap();
        assert_eq!(reservation.id, ReservationId(1));
        assert_eq!(reservation.guest_id, GuestId(1));
        assert_eq!(reservation.room_id, "101");
        assert!(reservation.created_at >= before);
        assert!(reservation.created_at <= chrono::Utc::now());
    }

    #[tokio::test]
    async fn test_create_with_unknown_guest_persists_nothing() {
        let svc = service();
        svc.create_reservation(request(1, "101")).await.unwrap();
        let before = svc.list_reservations().await.unwrap();

        let err = svc.create_reservation(request(42, "102")).await.unwrap_err();
        assert!(matches!(err, ReservationError::GuestNotFound(GuestId(42))));
        assert_eq!(svc.list_reservations().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_create_accepts_reversed_dates_and_same_room() {
        let svc = service();
        let mut reversed = request(1, "101");
        std::mem::swap(&mut reversed.check_in_date, &mut reversed.check_out_date);

        svc.create_reservation(reversed).await.unwrap();
        svc.create_reservation(request(2, "101")).await.unwrap();
        assert_eq!(svc.list_reservations().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_list_by_guest() {
        let svc = service();
        svc.create_reservation(request(1, "101")).await.unwrap();
        svc.create_reservation(request(2, "202")).await.unwrap();
        svc.create_reservation(request(1, "303")).await.unwrap();

        let ada = svc.list_by_guest(GuestId(1)).await.unwrap();
        let rooms: Vec<&str> = ada.iter().map(|r| r.room_id.as_str()).collect();
        assert_eq!(rooms, vec!["101", "303"]);

        assert!(svc.list_by_guest(GuestId(77)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_succeeds_even_when_missing() {
        let svc = service();
        let reservation = svc.create_reservation(request(1, "101")).await.unwrap();

        assert!(svc.delete_reservation(reservation.id).await.unwrap());
        assert!(svc.list_reservations().await.unwrap().is_empty());

        assert!(svc.delete_reservation(reservation.id).await.unwrap());
        assert!(svc.delete_reservation(ReservationId(999)).await.unwrap());
    }
}
