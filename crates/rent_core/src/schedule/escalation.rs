//! Periodic rent escalation.

/// Applies one rent change to the previous month's rent.
///
/// Returns `previous_rent * (1 + rent_change_rate)` without rounding;
/// callers round the result.
///
/// # Examples
///
/// ```
/// use rent_core::schedule::escalation::calculate_new_monthly_rent;
///
/// let raised = calculate_new_monthly_rent(1000.0, 0.05);
/// assert!((raised - 1050.0).abs() < 1e-9);
///
/// let lowered = calculate_new_monthly_rent(1000.0, -0.1);
/// assert!((lowered - 900.0).abs() < 1e-9);
/// ```
#[inline]
pub fn calculate_new_monthly_rent(previous_rent: f64, rent_change_rate: f64) -> f64 {
    previous_rent * (1.0 + rent_change_rate)
}
