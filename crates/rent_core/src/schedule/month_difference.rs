//! Whole-month distance between two dates.

use crate::types::Date;

/// Number of calendar months from `start` to `end`.
///
/// Only the year and month components take part; the day of month is
/// ignored. The result is negative whenever `end` falls in an earlier
/// month than `start`, however far apart they are.
///
/// # Examples
///
/// ```
/// use rent_core::schedule::month_difference::calculate_month_difference;
/// use rent_core::types::Date;
///
/// let start = Date::from_ymd(2024, 11, 30).unwrap();
/// let end = Date::from_ymd(2025, 2, 1).unwrap();
/// assert_eq!(calculate_month_difference(end, start), 3);
/// assert_eq!(calculate_month_difference(start, end), -3);
/// ```
#[inline]
pub fn calculate_month_difference(end: Date, start: Date) -> i32 {
    month_ordinal(end) - month_ordinal(start)
}

fn month_ordinal(date: Date) -> i32 {
    date.year() * 12 + date.month_index() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_same_month_is_zero() {
        assert_eq!(
            calculate_month_difference(date(2024, 3, 31), date(2024, 3, 1)),
            0
        );
        assert_eq!(
            calculate_month_difference(date(2024, 3, 1), date(2024, 3, 31)),
            0
        );
    }

    #[test]
    fn test_same_year() {
        assert_eq!(
            calculate_month_difference(date(2024, 3, 31), date(2024, 1, 15)),
            2
        );
    }

    #[test]
    fn test_across_year_boundary() {
        assert_eq!(
            calculate_month_difference(date(2025, 1, 15), date(2024, 12, 15)),
            1
        );
        assert_eq!(
            calculate_month_difference(date(2027, 2, 1), date(2024, 6, 1)),
            32
        );
    }

    #[test]
    fn test_end_before_start_is_negative_for_any_span() {
        assert_eq!(
            calculate_month_difference(date(2023, 12, 1), date(2024, 1, 1)),
            -1
        );
        assert_eq!(
            calculate_month_difference(date(2021, 1, 1), date(2024, 1, 1)),
            -36
        );
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn date_strategy() -> impl Strategy<Value = Date> {
            (1950i32..2150i32, 1u32..13u32, 1u32..29u32)
                .prop_map(|(y, m, d)| Date::from_ymd(y, m, d).unwrap())
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(1000))]

            #[test]
            fn test_antisymmetric(a in date_strategy(), b in date_strategy()) {
                prop_assert_eq!(
                    calculate_month_difference(a, b),
                    -calculate_month_difference(b, a)
                );
            }

            #[test]
            fn test_sign_follows_month_order(a in date_strategy(), b in date_strategy()) {
                let diff = calculate_month_difference(b, a);
                let a_month = (a.year(), a.month());
                let b_month = (b.year(), b.month());
                prop_assert_eq!(diff.signum(), match b_month.cmp(&a_month) {
                    std::cmp::Ordering::Less => -1,
                    std::cmp::Ordering::Equal => 0,
                    std::cmp::Ordering::Greater => 1,
                });
            }
        }
    }
}
