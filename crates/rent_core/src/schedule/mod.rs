//! Rent schedule calculation.
//!
//! This module provides:
//! - `builder`: Schedule Builder (`calculate_monthly_rent`, `ScheduleBuilder`)
//! - `first_month`: Partial first month (`calculate_first_month_rent`)
//! - `due_date`: Due-date clamping (`correct_rent_due_date`)
//! - `month_difference`: Whole-month distance (`calculate_month_difference`)
//! - `escalation`: Periodic rent change (`calculate_new_monthly_rent`)
//! - `rounding`: Currency rounding (`round2`)

pub mod builder;
pub mod due_date;
pub mod escalation;
pub mod first_month;
pub mod month_difference;
pub mod rounding;

pub use builder::{calculate_monthly_rent, ScheduleBuilder};
pub use due_date::correct_rent_due_date;
pub use escalation::calculate_new_monthly_rent;
pub use first_month::calculate_first_month_rent;
pub use month_difference::calculate_month_difference;
pub use rounding::round2;
