//! Due-date correction for short months.

use crate::types::{days_in_month, Date, RentError};

/// Builds the rent due date for a month, clamping the day to the
/// month's last day.
///
/// `month_index` is zero-based and may run past either end of the year:
/// 12 is January of `year + 1`, -1 is December of `year - 1`.
///
/// # Errors
/// - `RentError::InvalidInput` if `day_of_month` is outside 1-31
/// - `RentError::Date` if the normalised year is outside chrono's range
///
/// # Examples
///
/// ```
/// use rent_core::schedule::due_date::correct_rent_due_date;
///
/// // April has 30 days.
/// let due = correct_rent_due_date(2024, 3, 31).unwrap();
/// assert_eq!(due.to_string(), "2024-04-30");
///
/// // Leap-year February.
/// let due = correct_rent_due_date(2024, 1, 30).unwrap();
/// assert_eq!(due.to_string(), "2024-02-29");
///
/// // Month index 13 rolls into the next year.
/// let due = correct_rent_due_date(2024, 13, 30).unwrap();
/// assert_eq!(due.to_string(), "2025-02-28");
/// ```
pub fn correct_rent_due_date(
    year: i32,
    month_index: i32,
    day_of_month: u32,
) -> Result<Date, RentError> {
    if !(1..=31).contains(&day_of_month) {
        return Err(RentError::InvalidInput(format!(
            "day of month must be between 1 and 31, got {}",
            day_of_month
        )));
    }

    let year = year + month_index.div_euclid(12);
    let month = month_index.rem_euclid(12) as u32 + 1;

    let last_day = days_in_month(year, month)?;
    Ok(Date::from_ymd(year, month, day_of_month.min(last_day))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(date: Date) -> (i32, u32, u32) {
        (date.year(), date.month(), date.day())
    }

    #[test]
    fn test_day_within_month_unchanged() {
        let due = correct_rent_due_date(2024, 0, 15).unwrap();
        assert_eq!(ymd(due), (2024, 1, 15));
    }

    #[test]
    fn test_clamps_to_thirty_day_month() {
        for month_index in [3, 5, 8, 10] {
            let due = correct_rent_due_date(2023, month_index, 31).unwrap();
            assert_eq!(due.day(), 30, "month index {}", month_index);
        }
    }

    #[test]
    fn test_february_leap_and_non_leap() {
        assert_eq!(ymd(correct_rent_due_date(2024, 1, 30).unwrap()), (2024, 2, 29));
        assert_eq!(ymd(correct_rent_due_date(2023, 1, 30).unwrap()), (2023, 2, 28));
        assert_eq!(ymd(correct_rent_due_date(2023, 1, 29).unwrap()), (2023, 2, 28));
        assert_eq!(ymd(correct_rent_due_date(2024, 1, 29).unwrap()), (2024, 2, 29));
        assert_eq!(ymd(correct_rent_due_date(1900, 1, 31).unwrap()), (1900, 2, 28));
        assert_eq!(ymd(correct_rent_due_date(2000, 1, 31).unwrap()), (2000, 2, 29));
    }

    #[test]
    fn test_month_index_rolls_over_years() {
        assert_eq!(ymd(correct_rent_due_date(2024, 12, 5).unwrap()), (2025, 1, 5));
        assert_eq!(ymd(correct_rent_due_date(2024, 25, 31).unwrap()), (2026, 2, 28));
        assert_eq!(ymd(correct_rent_due_date(2024, -1, 31).unwrap()), (2023, 12, 31));
    }

    #[test]
    fn test_rejects_day_out_of_range() {
        assert!(matches!(
            correct_rent_due_date(2024, 0, 0),
            Err(RentError::InvalidInput(_))
        ));
        assert!(matches!(
            correct_rent_due_date(2024, 0, 32),
            Err(RentError::InvalidInput(_))
        ));
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(1000))]

            #[test]
            fn test_corrected_day_is_min_of_desired_and_month_length(
                year in 1950i32..2150i32,
                month_index in -24i32..48i32,
                day in 1u32..32u32,
            ) {
                let due = correct_rent_due_date(year, month_index, day).unwrap();
                prop_assert_eq!(due.day(), day.min(due.days_in_month()));
                prop_assert_eq!(
                    due.year() * 12 + due.month_index() as i32,
                    year * 12 + month_index
                );
            }
        }
    }
}
