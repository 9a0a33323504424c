//! Schedule output rows.

use std::ops::Index;
use std::slice;

use super::time::Date;
use crate::schedule::rounding::round2;

/// One month of a rent schedule.
///
/// Records are created by the schedule builder and never change
/// afterwards; fields are read through accessors.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonthlyRentRecord {
    vacancy: bool,
    rent_amount: f64,
    rent_due_date: Date,
}

impl MonthlyRentRecord {
    /// Creates a record.
    pub fn new(vacancy: bool, rent_amount: f64, rent_due_date: Date) -> Self {
        Self {
            vacancy,
            rent_amount,
            rent_due_date,
        }
    }

    /// Whether the unit is marked vacant for this month.
    pub fn vacancy(&self) -> bool {
        self.vacancy
    }

    /// Rent due for this month.
    pub fn rent_amount(&self) -> f64 {
        self.rent_amount
    }

    /// Date the rent falls due.
    pub fn rent_due_date(&self) -> Date {
        self.rent_due_date
    }
}

/// Chronological sequence of [`MonthlyRentRecord`]s.
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
/// let records = calculate_monthly_rent(&contract).unwrap();
/// assert_eq!(records.len(), 3);
/// assert_eq!(records.total_due(), 3000.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MonthlyRentRecords(Vec<MonthlyRentRecord>);

impl MonthlyRentRecords {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    pub(crate) fn push(&mut self, record: MonthlyRentRecord) {
        self.0.push(record);
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no records.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First (earliest) record.
    pub fn first(&self) -> Option<&MonthlyRentRecord> {
        self.0.first()
    }

    /// Last (latest) record.
    pub fn last(&self) -> Option<&MonthlyRentRecord> {
        self.0.last()
    }

    /// Iterates over the records in chronological order.
    pub fn iter(&self) -> slice::Iter<'_, MonthlyRentRecord> {
        self.0.iter()
    }

    /// Borrows the records as a slice.
    pub fn as_slice(&self) -> &[MonthlyRentRecord] {
        &self.0
    }

    /// Records whose due date falls inside `[start, end]`.
    ///
    /// An inverted window yields no records.
    pub fn within_window(&self, start: Date, end: Date) -> MonthlyRentRecords {
        Self(
            self.0
                .iter()
                .filter(|r| r.rent_due_date >= start && r.rent_due_date <= end)
                .copied()
                .collect(),
        )
    }

    /// Sum of all rent amounts, rounded to cents.
    pub fn total_due(&self) -> f64 {
        round2(self.0.iter().map(|r| r.rent_amount).sum())
    }
}

impl Index<usize> for MonthlyRentRecords {
    type Output = MonthlyRentRecord;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a MonthlyRentRecords {
    type Item = &'a MonthlyRentRecord;
    type IntoIter = slice::Iter<'a, MonthlyRentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for MonthlyRentRecords {
    type Item = MonthlyRentRecord;
    type IntoIter = std::vec::IntoIter<MonthlyRentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
