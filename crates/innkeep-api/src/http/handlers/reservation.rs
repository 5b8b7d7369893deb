//! Reservation ledger handlers for the REST API.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use innkeep_types::guest::GuestId;
use innkeep_types::reservation::{CreateReservationRequest, Reservation, ReservationId};

use crate::http::error::AppError;
use crate::http::handlers::parse_id;
use crate::http::response::{ApiResponse, RequestContext};
use crate::state::AppState;

/// POST /api/v1/reservations - Book a reservation for an existing guest.
///
/// Responds 422 when the guest does not exist.
pub async fn create_reservation(
    State(state): State<AppState>,
    Json(body): Json<CreateReservationRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Reservation>>), AppError> {
    let ctx = RequestContext::start();

    let reservation = state.reservation_service.create_reservation(body).await?;
    let guest_link = format!("/api/v1/guests/{}", reservation.guest_id);

    let resp = ctx
        .success(reservation)
        .with_message("Reservation created successfully")
        .with_link("guest", &guest_link)
        .with_link("reservations", "/api/v1/reservations");

    Ok((StatusCode::CREATED, Json(resp)))
}

/// GET /api/v1/reservations
pub async fn list_reservations(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Reservation>>>, AppError> {
    let ctx = RequestContext::start();
    let reservations = state.reservation_service.list_reservations().await?;

    Ok(Json(ctx.success(reservations).with_link("self", "/api/v1/reservations")))
}

/// GET /api/v1/reservations/guest/{guest_id}
pub async fn list_by_guest(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<ApiResponse<Vec<Reservation>>>, AppError> {
    let ctx = RequestContext::start();
    let guest_id: GuestId = parse_id(&raw_id, "guest")?;

    let reservations = state.reservation_service.list_by_guest(guest_id).await?;
    Ok(Json(ctx.success(reservations)))
}

/// DELETE /api/v1/reservations/{id} - Succeeds whether or not the id exists.
pub async fn delete_reservation(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<ApiResponse<bool>>, AppError> {
    let ctx = RequestContext::start();
    let id: ReservationId = parse_id(&raw_id, "reservation")?;

    let deleted = state.reservation_service.delete_reservation(id).await?;

    Ok(Json(
        ctx.success(deleted)
            .with_message("Reservation deleted successfully"),
    ))
}
