//! # rent_core: Lease Rent Schedule Calculation
//!
//! Computes a month-by-month rent schedule for a lease. For every month
//! from the lease start through the month containing the report window's
//! end, a [`MonthlyRentRecord`] states whether the unit is vacant, the
//! rent due, and the exact due date.
//!
//! The calculation accounts for:
//! - A partial first month when the lease starts off the due day
//! - Periodic rent escalation or de-escalation every N months
//! - Months shorter than the due day (28/29/30-day months)
//!
//! ## Layout
//!
//! - `types`: `Contract`, `MonthlyRentRecord(s)`, `Date`, `ProrationConvention`, errors
//! - `schedule`: the builder and its pure helpers
//!
//! Everything is synchronous and allocation-local; a contract can be
//! scheduled from any number of threads at once.
//!
//! ## Usage Examples
//!
//! ```rust
//! use rent_core::{calculate_monthly_rent, Contract, Date};
//!
//! let contract = Contract::new(
//!     1000.0,
//!     Date::from_ymd(2024, 1, 15).unwrap(),
//!     Date::from_ymd(2024, 1, 1).unwrap(),
//!     Date::from_ymd(2025, 1, 31).unwrap(),
//!     15,
//!     12,
//!     0.05,
//! );
//!
//! let records = calculate_monthly_rent(&contract).unwrap();
//! assert_eq!(records.len(), 13);
//! assert_eq!(records[12].rent_amount(), 1050.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `Date`, `Contract`, records, and `ProrationConvention`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod schedule;
pub mod types;

pub use schedule::{calculate_monthly_rent, ScheduleBuilder};
pub use types::{
    Contract, Date, DateError, MonthlyRentRecord, MonthlyRentRecords, ProrationConvention,
    RentError,
};
