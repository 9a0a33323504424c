//! Month-by-month schedule construction.

use tracing::{debug, trace, warn};

use super::due_date::correct_rent_due_date;
use super::escalation::calculate_new_monthly_rent;
use super::first_month::calculate_first_month_rent;
use super::month_difference::calculate_month_difference;
use super::rounding::round2;
use crate::types::{Contract, Date, MonthlyRentRecord, MonthlyRentRecords, RentError};

/// Builds a rent schedule from lease start through the month that
/// contains the window end.
///
/// Equivalent to `ScheduleBuilder::new(contract).build()`.
///
/// # Errors
/// - `RentError::InvalidInput` / `RentError::InvalidConfiguration` if the
///   contract fails [`Contract::validate`]
/// - `RentError::Date` if a due date falls outside chrono's range
///
/// # Examples
///
/// ```
/// use rent_core::{calculate_monthly_rent, Contract, Date};
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
///
/// let records = calculate_monthly_rent(&contract).unwrap();
/// let due: Vec<String> = records.iter().map(|r| r.rent_due_date().to_string()).collect();
/// assert_eq!(due, ["2024-01-15", "2024-02-15", "2024-03-15"]);
/// assert!(records.iter().all(|r| r.rent_amount() == 1000.0 && !r.vacancy()));
/// ```
pub fn calculate_monthly_rent(contract: &Contract) -> Result<MonthlyRentRecords, RentError> {
    ScheduleBuilder::new(contract).build()
}

/// Schedule builder for a single contract.
///
/// The first month comes from
/// [`calculate_first_month_rent`](super::first_month::calculate_first_month_rent).
/// Every later month `k` (counted from the last first-month due date)
/// carries the current rent forward; when `k` is a multiple of the
/// contract's change frequency the rent is escalated first.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleBuilder<'a> {
    contract: &'a Contract,
}

impl<'a> ScheduleBuilder<'a> {
    /// Creates a builder for `contract`.
    pub fn new(contract: &'a Contract) -> Self {
        Self { contract }
    }

    /// Validates the contract and produces the schedule.
    pub fn build(self) -> Result<MonthlyRentRecords, RentError> {
        let contract = self.contract;
        contract.validate()?;

        let seed = calculate_first_month_rent(
            contract.day_of_month_rent_due,
            contract.lease_start_date,
            contract.base_monthly_rent,
            contract.rent_change_rate,
            contract.proration,
        )?;
        debug!(
            lease_start = %contract.lease_start_date,
            window_end = %contract.window_end_date,
            seeded = seed.len(),
            "first month computed"
        );

        let Some(anchor) = seed.last().map(MonthlyRentRecord::rent_due_date) else {
            return Ok(MonthlyRentRecords::default());
        };

        let months = calculate_month_difference(contract.window_end_date, anchor);
        if contract.window_end_date < anchor {
            warn!(
                first_due = %anchor,
                window_end = %contract.window_end_date,
                "window ends before the first due date; returning first month only"
            );
        }

        let mut acc = RentAccumulator::seeded(seed, contract.base_monthly_rent, months);
        for k in 1..=months {
            let due_date = correct_rent_due_date(
                anchor.year(),
                anchor.month_index() as i32 + k,
                contract.day_of_month_rent_due,
            )?;
            let escalate = k as u32 % contract.rent_rate_change_frequency == 0;
            acc.append(due_date, escalate, contract);
        }

        debug!(months = months.max(0), records = acc.records.len(), "schedule built");
        Ok(acc.records)
    }
}

/// Growing schedule plus the rent carried into the next month.
struct RentAccumulator {
    records: MonthlyRentRecords,
    carried_rent: f64,
}

impl RentAccumulator {
    fn seeded(seed: Vec<MonthlyRentRecord>, base_monthly_rent: f64, months: i32) -> Self {
        let mut records = MonthlyRentRecords::with_capacity(seed.len() + months.max(0) as usize);
        for record in seed {
            records.push(record);
        }
        Self {
            records,
            carried_rent: base_monthly_rent,
        }
    }

    fn append(&mut self, due_date: Date, escalate: bool, contract: &Contract) {
        let amount = if escalate {
            self.carried_rent = round2(calculate_new_monthly_rent(
                self.carried_rent,
                contract.rent_change_rate,
            ));
            self.carried_rent
        } else {
            round2(self.carried_rent)
        };
        trace!(%due_date, amount, escalate, "month appended");
        self.records
            .push(MonthlyRentRecord::new(contract.is_vacant(), amount, due_date));
    }
}
