//! Axum router configuration with middleware.
//!
//! All routes are under `/api/v1/` except `/health`.
//! Middleware: CORS, request tracing.

use axum::Router;
use axum::routing::{delete, get, patch, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Employee directory
        .route(
            "/employees",
            post(handlers::employee::create_employee).get(handlers::employee::list_employees),
        )
        .route(
            "/employees/{id}",
            get(handlers::employee::get_employee)
                .put(handlers::employee::update_employee)
                .delete(handlers::employee::delete_employee),
        )
        .route(
            "/employees/{id}/status",
            patch(handlers::employee::update_status),
        )
        .route(
            "/employees/email/{email}",
            get(handlers::employee::get_employee_by_email),
        )
        .route(
            "/employees/department/{department}",
            get(handlers::employee::list_by_department),
        )
        .route(
            "/employees/status/{status}",
            get(handlers::employee::list_by_status),
        )
        .route(
            "/employees/position/{position}",
            get(handlers::employee::list_by_position),
        )
        .route("/employees/search", get(handlers::employee::search_employees))
        // Statistics and counts
        .route(
            "/employees/statistics",
            get(handlers::stats::employee_statistics),
        )
        .route(
            "/employees/statistics/departments",
            get(handlers::stats::department_statistics),
        )
        .route("/employees/count", get(handlers::stats::count_employees))
        .route("/employees/count/active", get(handlers::stats::count_active))
        // Reservations
        .route(
            "/reservations",
            post(handlers::reservation::create_reservation)
                .get(handlers::reservation::list_reservations),
        )
        .route(
            "/reservations/{id}",
            delete(handlers::reservation::delete_reservation),
        )
        .route(
            "/reservations/guest/{guest_id}",
            get(handlers::reservation::list_by_guest),
        )
        // Guests
        .route(
            "/guests",
            post(handlers::guest::register_guest).get(handlers::guest::list_guests),
        )
        .route("/guests/{id}", get(handlers::guest::get_guest));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
