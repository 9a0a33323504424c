//! Partial first month.

use tracing::trace;

use super::due_date::correct_rent_due_date;
use super::rounding::round2;
use crate::types::{Date, MonthlyRentRecord, ProrationConvention, RentError};

/// Computes the record(s) for the month the lease starts in.
///
/// - Due day equal to the lease-start day: one record at full base rent.
/// - Due day before the lease-start day: one record dated on the
///   lease-start month's due date, charging
///   `base * (1 - (due - start) / divisor)`.
/// - Due day after the lease-start day: a prorated record dated on the
///   lease start for `base * (due - start) / divisor`, followed by a
///   full-rent record on the lease-start month's due date.
///
/// Prorated amounts are rounded to cents; full-rent records carry the
/// base rent as given. The divisor comes from `proration`.
///
/// # Errors
/// `RentError::InvalidInput` if `day_of_month_rent_due` is outside 1-31.
///
/// # Examples
///
/// ```
/// use rent_core::schedule::first_month::calculate_first_month_rent;
/// use rent_core::types::{Date, ProrationConvention};
///
/// let start = Date::from_ymd(2024, 1, 10).unwrap();
/// let records =
///     calculate_first_month_rent(25, start, 900.0, 0.0, ProrationConvention::Thirty).unwrap();
///
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].rent_amount(), 450.0);
/// assert_eq!(records[0].rent_due_date(), start);
/// assert_eq!(records[1].rent_amount(), 900.0);
/// assert_eq!(records[1].rent_due_date().to_string(), "2024-01-25");
/// ```
pub fn calculate_first_month_rent(
    day_of_month_rent_due: u32,
    lease_start_date: Date,
    base_monthly_rent: f64,
    rent_change_rate: f64,
    proration: ProrationConvention,
) -> Result<Vec<MonthlyRentRecord>, RentError> {
    let vacancy = rent_change_rate < 0.0;
    let start_day = lease_start_date.day();
    let first_due_date = correct_rent_due_date(
        lease_start_date.year(),
        lease_start_date.month_index() as i32,
        day_of_month_rent_due,
    )?;

    if day_of_month_rent_due == start_day {
        return Ok(vec![MonthlyRentRecord::new(
            vacancy,
            base_monthly_rent,
            first_due_date,
        )]);
    }

    let day_gap = day_of_month_rent_due as f64 - start_day as f64;
    let fraction = day_gap / proration.divisor(lease_start_date);
    trace!(day_gap, fraction, %proration, "prorating first month");

    if day_of_month_rent_due < start_day {
        let amount = round2(base_monthly_rent * (1.0 - fraction));
        Ok(vec![MonthlyRentRecord::new(vacancy, amount, first_due_date)])
    } else {
        let amount = round2(base_monthly_rent * fraction);
        Ok(vec![
            MonthlyRentRecord::new(vacancy, amount, lease_start_date),
            MonthlyRentRecord::new(vacancy, base_monthly_rent, first_due_date),
        ])
    }
}
