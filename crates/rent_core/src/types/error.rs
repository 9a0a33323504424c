//! Error types for structured error handling.
//!
//! This module provides:
//! - `DateError`: Errors from date construction and parsing
//! - `RentError`: Errors from contract validation and schedule calculation

use thiserror::Error;

/// Date-related errors.
///
/// Provides structured error handling for date construction and parsing
/// with descriptive context for each failure mode.
///
/// # Variants
/// - `InvalidDate`: Invalid date components (e.g., February 30th)
/// - `ParseError`: Failed to parse date string
///
/// # Examples
/// ```
/// use rent_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    #[error("Date parse error: {0}")]
    ParseError(String),
}

/// Rent schedule errors.
///
/// Raised before any record is produced; a schedule is either complete
/// or not built at all.
///
/// # Variants
/// - `InvalidInput`: A contract field is outside its domain
/// - `InvalidConfiguration`: Contract terms cannot drive a schedule
/// - `Date`: Date construction failed while building the schedule
///
/// # Examples
/// ```
/// use rent_core::types::RentError;
///
/// let err = RentError::InvalidConfiguration("rent change frequency must be at least 1".to_string());
/// assert_eq!(
///     format!("{}", err),
///     "Invalid configuration: rent change frequency must be at least 1"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RentError {
    /// Invalid input data (e.g. day-of-month outside 1-31).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Contract terms that would make the recurrence undefined.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Underlying date error.
    #[error(transparent)]
    Date(#[from] DateError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_error_display() {
        let err = DateError::InvalidDate {
            year: 2023,
            month: 2,
            day: 29,
        };
        assert_eq!(format!("{}", err), "Invalid date: 2023-2-29");

        let err = DateError::ParseError("bad input".to_string());
        assert_eq!(format!("{}", err), "Date parse error: bad input");
    }

    #[test]
    fn test_rent_error_display() {
        let err = RentError::InvalidInput("day of month 0".to_string());
        assert_eq!(format!("{}", err), "Invalid input: day of month 0");

        let err = RentError::InvalidConfiguration("frequency 0".to_string());
        assert_eq!(format!("{}", err), "Invalid configuration: frequency 0");
    }

    #[test]
    fn test_rent_error_from_date_error() {
        let date_err = DateError::ParseError("x".to_string());
        let err: RentError = date_err.clone().into();
        assert_eq!(err, RentError::Date(date_err));
        assert_eq!(format!("{}", err), "Date parse error: x");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&DateError::ParseError(String::new()));
        assert_error(&RentError::InvalidInput(String::new()));
    }
}
