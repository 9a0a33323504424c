//! Lease contract terms.

use super::error::RentError;
use super::time::{Date, ProrationConvention};

/// Lease terms a rent schedule is computed from.
///
/// The contract is plain data; [`Contract::validate`] checks the
/// preconditions the schedule builder relies on.
///
/// # Examples
///
/// ```
/// use rent_core::types::{Contract, Date};
///
/// let contract = Contract::new(
///     1000.0,
///     Date::from_ymd(2024, 1, 15).unwrap(),
///     Date::from_ymd(2024, 1, 1).unwrap(),
///     Date::from_ymd(2024, 3, 31).unwrap(),
///     15,
///     12,
///     0.05,
/// );
/// assert!(contract.validate().is_ok());
/// assert!(!contract.is_vacant());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Contract {
    /// Monthly rent before any escalation.
    pub base_monthly_rent: f64,
    /// First day of the lease.
    pub lease_start_date: Date,
    /// First day of the requested report window.
    pub window_start_date: Date,
    /// Last day of the requested report window.
    pub window_end_date: Date,
    /// Day of the month rent falls due (1-31).
    pub day_of_month_rent_due: u32,
    /// Months between rent changes (at least 1).
    pub rent_rate_change_frequency: u32,
    /// Fractional rent change applied at each change date; negative marks the unit vacant.
    pub rent_change_rate: f64,
    /// Divisor used for the partial first month.
    #[cfg_attr(feature = "serde", serde(default))]
    pub proration: ProrationConvention,
}

impl Contract {
    /// Creates a contract with the default 30-day proration.
    pub fn new(
        base_monthly_rent: f64,
        lease_start_date: Date,
        window_start_date: Date,
        window_end_date: Date,
        day_of_month_rent_due: u32,
        rent_rate_change_frequency: u32,
        rent_change_rate: f64,
    ) -> Self {
        Self {
            base_monthly_rent,
            lease_start_date,
            window_start_date,
            window_end_date,
            day_of_month_rent_due,
            rent_rate_change_frequency,
            rent_change_rate,
            proration: ProrationConvention::default(),
        }
    }

    /// Returns the contract with a different proration convention.
    pub fn with_proration(mut self, proration: ProrationConvention) -> Self {
        self.proration = proration;
        self
    }

    /// Vacancy as recorded on every schedule row: a negative change rate.
    pub fn is_vacant(&self) -> bool {
        self.rent_change_rate < 0.0
    }

    /// Checks the preconditions for building a schedule.
    ///
    /// A window that ends before the lease starts is accepted; it yields
    /// only the first-month records.
    ///
    /// # Errors
    /// - `RentError::InvalidInput` if the due day is outside 1-31 or an
    ///   amount is not finite
    /// - `RentError::InvalidConfiguration` if the change frequency is 0
    pub fn validate(&self) -> Result<(), RentError> {
        if !(1..=31).contains(&self.day_of_month_rent_due) {
            return Err(RentError::InvalidInput(format!(
                "day of month rent due must be between 1 and 31, got {}",
                self.day_of_month_rent_due
            )));
        }
        if !self.base_monthly_rent.is_finite() {
            return Err(RentError::InvalidInput(format!(
                "base monthly rent must be finite, got {}",
                self.base_monthly_rent
            )));
        }
        if !self.rent_change_rate.is_finite() {
            return Err(RentError::InvalidInput(format!(
                "rent change rate must be finite, got {}",
                self.rent_change_rate
            )));
        }
        if self.rent_rate_change_frequency == 0 {
            return Err(RentError::InvalidConfiguration(
                "rent rate change frequency must be at least 1 month".to_string(),
            ));
        }
        Ok(())
    }
}
