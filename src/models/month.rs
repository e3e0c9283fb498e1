//! Calendar month value type.
//!
//! A `CalendarMonth` is an immutable (year, month) pair. Capacity is
//! planned per month, so this is the unit the forecasting cursor walks.
//!
//! # String Form
//! Exactly `YYYY-MM`: four-digit year, two-digit zero-padded month.
//! Parsing never clamps; anything else is rejected.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ForecastError, Result};

// Day positions closer than this to a whole day are treated as that day.
const DAY_TOLERANCE: f64 = 1e-9;

/// A calendar month (year + month 1..=12).
///
/// Ordered by (year, month). All operations return new values.
///
/// # Example
///
/// ```
/// use u_forecast::models::CalendarMonth;
///
/// let m = CalendarMonth::parse("2024-11").unwrap();
/// assert_eq!(m.add_months(3).to_string(), "2025-02");
/// assert_eq!(m.add_months(3).days_in_month(), 28);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarMonth {
    year: i32,
    month: u32,
}

impl CalendarMonth {
    /// Creates a month, rejecting months outside 1..=12 and years outside 0..=9999.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(0..=9999).contains(&year) {
            return Err(ForecastError::YearOutOfRange(year));
        }
        if !(1..=12).contains(&month) {
            return Err(ForecastError::MonthOutOfRange { year, month });
        }
        Ok(Self { year, month })
    }

    /// Parses a `YYYY-MM` string.
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || ForecastError::InvalidMonthFormat(s.to_string());

        let bytes = s.as_bytes();
        if bytes.len() != 7 || bytes[4] != b'-' {
            return Err(invalid());
        }
        let digits = |range: std::ops::Range<usize>| {
            bytes[range].iter().all(|b| b.is_ascii_digit())
        };
        if !digits(0..4) || !digits(5..7) {
            return Err(invalid());
        }

        let year: i32 = s[0..4].parse().map_err(|_| invalid())?;
        let month: u32 = s[5..7].parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }
        Ok(Self { year, month })
    }

    /// Truncates a date to its month.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Year component.
    #[inline]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month component (1..=12).
    #[inline]
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Offsets by `n` months (negative moves backwards), carrying years.
    ///
    /// The result is not range-checked: shifting past 9999-12 yields a
    /// five-digit year whose string form [`CalendarMonth::parse`] rejects.
    pub fn add_months(&self, n: i32) -> Self {
        let index = self.index() + i64::from(n);
        Self {
            year: index.div_euclid(12) as i32,
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    /// The following month.
    #[inline]
    pub fn next(&self) -> Self {
        self.add_months(1)
    }

    /// Signed number of months from `self` to `other`.
    pub fn months_until(&self, other: &Self) -> i64 {
        other.index() - self.index()
    }

    /// Number of days in this month (Gregorian rules).
    pub fn days_in_month(&self) -> u32 {
        match self.month {
            2 if is_leap_year(self.year) => 29,
            2 => 28,
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    /// First day of the month.
    pub fn first_day(&self) -> NaiveDate {
        self.day(1)
    }

    /// Last day of the month.
    pub fn last_day(&self) -> NaiveDate {
        self.day(self.days_in_month())
    }

    /// Whether `date` falls within this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        Self::from_date(date) == *self
    }

    /// Maps a fractional position within the month to a calendar day.
    ///
    /// `day = clamp(ceil(fraction × days), 1, days)`, so position 0 is the
    /// first day and a fully consumed month lands on its last day. Products
    /// within rounding noise of a whole day count as that day.
    pub fn date_at_fraction(&self, fraction: f64) -> NaiveDate {
        let days = self.days_in_month();
        let raw = (fraction * f64::from(days) - DAY_TOLERANCE).ceil();
        let day = if raw.is_nan() || raw < 1.0 {
            1
        } else if raw >= f64::from(days) {
            days
        } else {
            raw as u32
        };
        self.day(day)
    }

    /// Position of a date within its month as a fraction in [0, 1).
    pub(crate) fn fraction_of(date: NaiveDate) -> f64 {
        let month = Self::from_date(date);
        f64::from(date.day() - 1) / f64::from(month.days_in_month())
    }

    fn index(&self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month) - 1
    }

    // Saturates outside chrono's representable years.
    fn day(&self, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, day).unwrap_or(if self.year < 0 {
            NaiveDate::MIN
        } else {
            NaiveDate::MAX
        })
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

impl fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for CalendarMonth {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CalendarMonth {
    type Error = ForecastError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<CalendarMonth> for String {
    fn from(month: CalendarMonth) -> Self {
        month.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(s: &str) -> CalendarMonth {
        CalendarMonth::parse(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_and_format() {
        let m = month("2025-03");
        assert_eq!(m.year(), 2025);
        assert_eq!(m.month(), 3);
        assert_eq!(m.to_string(), "2025-03");
        assert_eq!("0007-12".parse::<CalendarMonth>().unwrap().to_string(), "0007-12");
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        for bad in [
            "", "2025", "2025-1", "2025-001", "25-01", "2025/01", "2025-00", "2025-13", "+025-01",
            "2025-1a", " 2025-01", "2025-01 ",
        ] {
            assert!(
                matches!(CalendarMonth::parse(bad), Err(ForecastError::InvalidMonthFormat(_))),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn test_new_range_checks() {
        assert!(CalendarMonth::new(2025, 12).is_ok());
        assert_eq!(
            CalendarMonth::new(2025, 0),
            Err(ForecastError::MonthOutOfRange { year: 2025, month: 0 })
        );
        assert_eq!(
            CalendarMonth::new(2025, 13),
            Err(ForecastError::MonthOutOfRange { year: 2025, month: 13 })
        );
        assert_eq!(CalendarMonth::new(10_000, 1), Err(ForecastError::YearOutOfRange(10_000)));
    }

    #[test]
    fn test_add_months_carries_years() {
        let m = month("2024-11");
        assert_eq!(m.add_months(2), month("2025-01"));
        assert_eq!(m.add_months(14), month("2026-01"));
        assert_eq!(m.add_months(-11), month("2023-12"));
        assert_eq!(m.add_months(-23), month("2022-12"));
        assert_eq!(m.add_months(0), m);
        assert_eq!(month("2025-12").next(), month("2026-01"));
    }

    #[test]
    fn test_add_months_past_year_9999() {
        let m = CalendarMonth::new(9999, 12).unwrap().add_months(1);
        assert_eq!(m.year(), 10_000);
        assert_eq!(m.month(), 1);
        assert!(CalendarMonth::parse(&m.to_string()).is_err());
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(month("2025-01").days_in_month(), 31);
        assert_eq!(month("2025-02").days_in_month(), 28);
        assert_eq!(month("2024-02").days_in_month(), 29);
        assert_eq!(month("1900-02").days_in_month(), 28);
        assert_eq!(month("2000-02").days_in_month(), 29);
        assert_eq!(month("2025-04").days_in_month(), 30);
    }

    #[test]
    fn test_ordering() {
        assert!(month("2024-12") < month("2025-01"));
        assert!(month("2025-02") > month("2025-01"));
        assert_eq!(month("2025-01").months_until(&month("2026-03")), 14);
        assert_eq!(month("2026-03").months_until(&month("2025-01")), -14);
    }

    #[test]
    fn test_date_helpers() {
        let m = month("2024-02");
        assert_eq!(m.first_day(), date(2024, 2, 1));
        assert_eq!(m.last_day(), date(2024, 2, 29));
        assert!(m.contains(date(2024, 2, 15)));
        assert!(!m.contains(date(2024, 3, 1)));
        assert_eq!(CalendarMonth::from_date(date(2024, 2, 15)), m);
    }

    #[test]
    fn test_date_at_fraction() {
        let m = month("2025-01");
        assert_eq!(m.date_at_fraction(0.0), date(2025, 1, 1));
        assert_eq!(m.date_at_fraction(0.5), date(2025, 1, 16)); // ceil(15.5)
        assert_eq!(m.date_at_fraction(1.0), date(2025, 1, 31));
        assert_eq!(m.date_at_fraction(1.5), date(2025, 1, 31));
        assert_eq!(m.date_at_fraction(-0.2), date(2025, 1, 1));
    }

    #[test]
    fn test_date_at_fraction_rounding_noise() {
        let m = month("2025-04");
        let near_half = 0.5 + 1e-15;
        assert_eq!(m.date_at_fraction(near_half), date(2025, 4, 15));
        assert_eq!(m.date_at_fraction(0.5 + 1e-6), date(2025, 4, 16));
    }

    #[test]
    fn test_fraction_of() {
        assert_eq!(CalendarMonth::fraction_of(date(2025, 1, 1)), 0.0);
        assert!((CalendarMonth::fraction_of(date(2025, 4, 16)) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_serde_as_string() {
        let m = month("2025-07");
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "\"2025-07\"");
        let back: CalendarMonth = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
        assert!(serde_json::from_str::<CalendarMonth>("\"2025-7\"").is_err());
    }
}
