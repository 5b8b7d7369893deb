use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

use crate::guest::GuestId;

/// Store-assigned identifier of a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(pub i64);

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ReservationId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// A room reservation for an existing guest.
///
/// The guest is resolved once at creation; `guest_id` is the stored linkage.
/// Reservations are never updated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: ReservationId,
    pub guest_id: GuestId,
    pub room_id: String,
    pub check_in_date: NaiveDate,
    /// Not checked against `check_in_date`.
    pub check_out_date: NaiveDate,
    pub status: String,
    /// Stamped by the ledger at save time.
    pub created_at: DateTime<Utc>,
}

/// Request to book a reservation. The creation timestamp is never supplied
/// by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReservationRequest {
    pub guest_id: GuestId,
    pub room_id: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub status: String,
}

/// A reservation that has been resolved against its guest but not yet stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReservation {
    pub guest_id: GuestId,
    pub room_id: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl NewReservation {
    pub fn into_reservation(self, id: ReservationId) -> Reservation {
        Reservation {
            id,
            guest_id: self.guest_id,
            room_id: self.room_id,
            check_in_date: self.check_in_date,
            check_out_date: self.check_out_date,
            status: self.status,
            created_at: self.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_ignores_created_at() {
        let json = r#"{
            "guest_id": 4,
            "room_id": "204",
            "check_in_date": "2026-03-01",
            "check_out_date": "2026-03-04",
            "status": "CONFIRMED",
            "created_at": "2020-01-01T00:00:00Z"
        }"#;
        let req: CreateReservationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.guest_id, GuestId(4));
        assert_eq!(req.room_id, "204");
    }

    #[test]
    fn test_into_reservation_carries_fields() {
        let now = Utc::now();
        let new = NewReservation {
            guest_id: GuestId(1),
            room_id: "101".to_string(),
            check_in_date: NaiveDate::from_ymd_opt(2026, 1, 2).unwrap(),
            check_out_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            status: "BOOKED".to_string(),
            created_at: now,
        };
        let reservation = new.into_reservation(ReservationId(9));
        assert_eq!(reservation.id, ReservationId(9));
        assert_eq!(reservation.created_at, now);
        assert!(reservation.check_out_date < reservation.check_in_date);
    }
}
