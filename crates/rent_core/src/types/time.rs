//! Calendar types and proration conventions for rent calculations.
//!
//! This module provides:
//! - `Date`: Type-safe date wrapper around chrono::NaiveDate
//! - `days_in_month`: Month length for any year, leap years included
//! - `ProrationConvention`: Divisor used when charging a partial month
//!
//! # Examples
//!
//! ```
//! use rent_core::types::time::{Date, ProrationConvention};
//!
//! let start = Date::from_ymd(2024, 2, 10).unwrap();
//! assert_eq!(start.days_in_month(), 29);
//!
//! assert_eq!(ProrationConvention::Thirty.divisor(start), 30.0);
//! assert_eq!(ProrationConvention::ActualDays.divisor(start), 29.0);
//! ```

use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Provides ISO 8601 serialisation and the calendar queries the
/// schedule needs (zero-based month index, month length).
///
/// # Examples
///
/// ```
/// use rent_core::types::time::Date;
///
/// let date = Date::from_ymd(2024, 6, 15).unwrap();
/// assert_eq!(date.year(), 2024);
/// assert_eq!(date.month(), 6);
/// assert_eq!(date.month_index(), 5);
/// assert_eq!(date.day(), 15);
///
/// let parsed: Date = "2024-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// let end = Date::from_ymd(2024, 1, 11).unwrap();
/// assert_eq!(end - start, 10);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Arguments
    /// * `year` - Year (e.g., 2024)
    /// * `month` - Month (1-12)
    /// * `day` - Day (1-31, depending on month)
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use rent_core::types::time::Date;
    ///
    /// let leap = Date::from_ymd(2024, 2, 29).unwrap();
    /// assert!(Date::from_ymd(2023, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    ///
    /// # Examples
    ///
    /// ```
    /// use rent_core::types::time::Date;
    ///
    /// let date = Date::parse("2024-06-15").unwrap();
    /// assert_eq!(date.year(), 2024);
    ///
    /// assert!(Date::parse("not-a-date").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(e.to_string()))
    }

    /// Returns the underlying NaiveDate.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the zero-based month index (0 = January, 11 = December).
    pub fn month_index(&self) -> u32 {
        self.0.month0()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns `true` if the date's year is a Gregorian leap year.
    ///
    /// # Examples
    ///
    /// ```
    /// use rent_core::types::time::Date;
    ///
    /// assert!(Date::from_ymd(2024, 1, 1).unwrap().is_leap_year());
    /// assert!(!Date::from_ymd(1900, 1, 1).unwrap().is_leap_year());
    /// assert!(Date::from_ymd(2000, 1, 1).unwrap().is_leap_year());
    /// ```
    pub fn is_leap_year(&self) -> bool {
        let year = self.year();
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    }

    /// Returns the number of days in the date's month.
    pub fn days_in_month(&self) -> u32 {
        // Only December of chrono's last representable year fails to
        // resolve, and December always has 31 days.
        days_in_month(self.year(), self.month()).unwrap_or(31)
    }
}

/// Returns the number of days in `month` (1-12) of `year`.
///
/// Computed as the day before the first of the following month, so
/// February follows the leap-year rules without special casing.
///
/// # Errors
/// `DateError::InvalidDate` if `month` is outside 1-12 or the year is
/// outside chrono's supported range.
///
/// # Examples
///
/// ```
/// use rent_core::types::time::days_in_month;
///
/// assert_eq!(days_in_month(2024, 2).unwrap(), 29);
/// assert_eq!(days_in_month(2023, 2).unwrap(), 28);
/// assert_eq!(days_in_month(2024, 4).unwrap(), 30);
/// assert_eq!(days_in_month(2024, 12).unwrap(), 31);
/// assert!(days_in_month(2024, 13).is_err());
/// ```
pub fn days_in_month(year: i32, month: u32) -> Result<u32, DateError> {
    let invalid = DateError::InvalidDate {
        year,
        month,
        day: 1,
    };
    if !(1..=12).contains(&month) {
        return Err(invalid);
    }

    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };

    first_of_next
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .ok_or(invalid)
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    ///
    /// The result is positive if `self` is after `other`, negative otherwise.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

/// Proration convention for a partial first month.
///
/// # Variants
/// - `Thirty`: Every month counts as 30 days regardless of its length
/// - `ActualDays`: The lease-start month's real length (28-31)
///
/// `Thirty` is the default and matches how leases are usually written.
///
/// # Examples
///
/// ```
/// use rent_core::types::time::ProrationConvention;
///
/// let conv: ProrationConvention = "actual".parse().unwrap();
/// assert_eq!(conv, ProrationConvention::ActualDays);
/// assert_eq!(ProrationConvention::default().name(), "30-DAY");
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProrationConvention {
    /// Fixed 30-day month.
    #[default]
    Thirty,

    /// Actual number of days in the lease-start month.
    ActualDays,
}

impl ProrationConvention {
    /// Returns the standard convention name.
    ///
    /// # Examples
    ///
    /// ```
    /// use rent_core::types::time::ProrationConvention;
    ///
    /// assert_eq!(ProrationConvention::Thirty.name(), "30-DAY");
    /// assert_eq!(ProrationConvention::ActualDays.name(), "ACTUAL");
    /// ```
    pub fn name(&self) -> &'static str {
        match self {
            ProrationConvention::Thirty => "30-DAY",
            ProrationConvention::ActualDays => "ACTUAL",
        }
    }

    /// Returns the number of days a full month counts for when
    /// prorating a lease that starts on `lease_start`.
    pub fn divisor(&self, lease_start: Date) -> f64 {
        match self {
            ProrationConvention::Thirty => 30.0,
            ProrationConvention::ActualDays => lease_start.days_in_month() as f64,
        }
    }
}

impl FromStr for ProrationConvention {
    type Err = String;

    /// Parses proration convention from string (case-insensitive).
    ///
    /// Supports multiple aliases for each convention:
    /// - 30-DAY: "30-day", "30", "thirty", "30/360"
    /// - ACTUAL: "actual", "act", "actual-days"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace(['/', ' ', '-', '_'], "").as_str() {
            "30DAY" | "30" | "THIRTY" | "30360" => Ok(ProrationConvention::Thirty),
            "ACTUAL" | "ACT" | "ACTUALDAYS" => Ok(ProrationConvention::ActualDays),
            _ => Err(format!("Unknown proration convention: {}", s)),
        }
    }
}

impl fmt::Display for ProrationConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::ProrationConvention;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for ProrationConvention {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for ProrationConvention {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            ProrationConvention::from_str(&s).map_err(de::Error::custom)
        }
    }
}
