//! Contract, record, calendar, and error types.
//!
//! This module provides:
//! - `time`: `Date`, `days_in_month`, and `ProrationConvention`
//! - `contract`: Lease terms (`Contract`)
//! - `record`: Schedule rows (`MonthlyRentRecord`, `MonthlyRentRecords`)
//! - `error`: Structured error types for dates and schedule calculation
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level.

pub mod contract;
pub mod error;
pub mod record;
pub mod time;

pub use contract::Contract;
pub use error::{DateError, RentError};
pub use record::{MonthlyRentRecord, MonthlyRentRecords};
pub use time::{days_in_month, Date, ProrationConvention};
