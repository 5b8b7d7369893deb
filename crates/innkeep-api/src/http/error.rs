//! Application error type mapping to HTTP status codes and envelope format.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use innkeep_types::error::{EmployeeError, GuestError, ReservationError};

use crate::http::response::ApiResponse;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    Employee(EmployeeError),
    Reservation(ReservationError),
    Guest(GuestError),
    /// Lookup by email found nobody.
    EmployeeEmailNotFound(String),
    /// Malformed request input (bad id, missing query parameter).
    Validation(String),
}

impl From<EmployeeError> for AppError {
    fn from(e: EmployeeError) -> Self {
        AppError::Employee(e)
    }
}

impl From<ReservationError> for AppError {
    fn from(e: ReservationError) -> Self {
        AppError::Reservation(e)
    }
}

impl From<GuestError> for AppError {
    fn from(e: GuestError) -> Self {
        AppError::Guest(e)
    }
}

impl AppError {
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Employee(EmployeeError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "EMPLOYEE_NOT_FOUND")
            }
            AppError::Employee(EmployeeError::DuplicateEmail(_)) => {
                (StatusCode::CONFLICT, "DUPLICATE_EMAIL")
            }
            AppError::Employee(EmployeeError::InvalidRecord(_)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
            }
            AppError::Employee(EmployeeError::StorageError(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR")
            }
            AppError::Reservation(ReservationError::GuestNotFound(_)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_REFERENCE")
            }
            AppError::Reservation(ReservationError::StorageError(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR")
            }
            AppError::Guest(GuestError::NotFound(_)) => (StatusCode::NOT_FOUND, "GUEST_NOT_FOUND"),
            AppError::Guest(GuestError::InvalidGuest(_)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
            }
            AppError::Guest(GuestError::StorageError(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR")
            }
            AppError::EmployeeEmailNotFound(_) => (StatusCode::NOT_FOUND, "EMPLOYEE_NOT_FOUND"),
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        }
    }

    fn message(&self) -> String {
        match self {
            AppError::Employee(e) => e.to_string(),
            AppError::Reservation(e) => e.to_string(),
            AppError::Guest(e) => e.to_string(),
            AppError::EmployeeEmailNotFound(email) => {
                format!("employee not found with email: {email}")
            }
            AppError::Validation(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let message = self.message();

        if status.is_server_error() {
            tracing::error!(code, %message, "request failed");
        } else {
            tracing::warn!(code, %message, "request rejected");
        }

        let body = ApiResponse::error(code, &message, uuid::Uuid::now_v7().to_string(), 0);
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use innkeep_types::employee::EmployeeId;
    use innkeep_types::guest::GuestId;

    #[test]
    fn test_employee_error_mapping() {
        let cases = [
            (EmployeeError::NotFound(EmployeeId(1)), StatusCode::NOT_FOUND, "EMPLOYEE_NOT_FOUND"),
            (
                EmployeeError::DuplicateEmail("a@hotel.com".to_string()),
                StatusCode::CONFLICT,
                "DUPLICATE_EMAIL",
            ),
            (
                EmployeeError::InvalidRecord("email is required".to_string()),
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
            ),
            (
                EmployeeError::StorageError("disk".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
                "STORAGE_ERROR",
            ),
        ];
        for (err, status, code) in cases {
            assert_eq!(AppError::from(err).status_and_code(), (status, code));
        }
    }

    #[test]
    fn test_unknown_guest_is_unprocessable() {
        let err = AppError::from(ReservationError::GuestNotFound(GuestId(5)));
        assert_eq!(
            err.status_and_code(),
            (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_REFERENCE")
        );
    }

    #[test]
    fn test_into_response_status() {
        let resp = AppError::Validation("bad id".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = AppError::from(GuestError::NotFound(GuestId(2))).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
