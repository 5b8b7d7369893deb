//! REST API handlers.

pub mod employee;
pub mod guest;
pub mod reservation;
pub mod stats;

use std::str::FromStr;

use crate::http::error::AppError;

/// Parse a numeric path id, rejecting anything else as a validation error.
pub(crate) fn parse_id<T: FromStr>(raw: &str, what: &str) -> Result<T, AppError> {
    raw.parse()
        .map_err(|_| AppError::Validation(format!("invalid {what} id: '{raw}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use innkeep_types::employee::EmployeeId;

    #[test]
    fn test_parse_id() {
        let id: EmployeeId = parse_id("42", "employee").unwrap();
        assert_eq!(id, EmployeeId(42));

        let err = parse_id::<EmployeeId>("abc", "employee").unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "invalid employee id: 'abc'"));
    }
}
