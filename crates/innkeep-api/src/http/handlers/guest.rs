//! Guest registration handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use innkeep_types::guest::{CreateGuestRequest, Guest, GuestId};

use crate::http::error::AppError;
use crate::http::handlers::parse_id;
use crate::http::response::{ApiResponse, RequestContext};
use crate::state::AppState;

/// POST /api/v1/guests
pub async fn register_guest(
    State(state): State<AppState>,
    Json(body): Json<CreateGuestRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Guest>>), AppError> {
    let ctx = RequestContext::start();

    let guest = state.guest_service.register_guest(body).await?;
    let self_link = format!("/api/v1/guests/{}", guest.id);
    let reservations_link = format!("/api/v1/reservations/guest/{}", guest.id);

    let resp = ctx
        .success(guest)
        .with_message("Guest registered successfully")
        .with_link("self", &self_link)
        .with_link("reservations", &reservations_link);

    Ok((StatusCode::CREATED, Json(resp)))
}

/// GET /api/v1/guests
pub async fn list_guests(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Guest>>>, AppError> {
    let ctx = RequestContext::start();
    let guests = state.guest_service.list_guests().await?;
    Ok(Json(ctx.success(guests).with_link("self", "/api/v1/guests")))
}

/// GET /api/v1/guests/{id}
pub async fn get_guest(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<ApiResponse<Guest>>, AppError> {
    let ctx = RequestContext::start();
    let id: GuestId = parse_id(&raw_id, "guest")?;

    let guest = state.guest_service.get_guest(id).await?;
    let reservations = format!("/api/v1/reservations/guest/{id}");

    Ok(Json(ctx.success(guest).with_link("reservations", &reservations)))
}
