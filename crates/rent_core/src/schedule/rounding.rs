//! Currency rounding.

/// Rounds `value` to two decimal places, halves away from zero.
///
/// # Examples
///
/// ```
/// use rent_core::schedule::rounding::round2;
///
/// assert_eq!(round2(1050.0), 1050.0);
/// assert_eq!(round2(333.3333), 333.33);
/// assert_eq!(round2(0.125), 0.13);
/// ```
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2_known_values() {
        assert_eq!(round2(1000.0), 1000.0);
        assert_eq!(round2(1102.5), 1102.5);
        assert_eq!(round2(1157.625), 1157.63);
        assert_eq!(round2(-12.344), -12.34);
        assert_eq!(round2(0.0), 0.0);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(1000))]

            #[test]
            fn test_round2_is_idempotent(x in -1.0e9f64..1.0e9f64) {
                let once = round2(x);
                prop_assert_eq!(round2(once), once);
            }

            #[test]
            fn test_round2_within_half_cent(x in -1.0e9f64..1.0e9f64) {
                prop_assert!((round2(x) - x).abs() <= 0.005 + 1e-6);
            }
        }
    }
}
