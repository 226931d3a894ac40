//! `YYYY-MM-DD` date strings
//!
//! Dates are kept as the literal strings found in the backing files. The
//! helpers here check their shape and compare them, and compute day counts
//! with the approximate `year*365 + month*30 + day` weighting that stored
//! booking durations have always used. It is not calendar-accurate.

use chrono::{Datelike, NaiveDate};

/// Year/month/day triple read out of a `YYYY-MM-DD` string.
///
/// Field order gives the derived ordering: year, then month, then day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ymd {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

impl Ymd {
    /// Read the three dash-separated numbers of a date string
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.split('-');
        let year = parts.next()?.trim().parse().ok()?;
        let month = parts.next()?.trim().parse().ok()?;
        let day = parts.next()?.trim().parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self { year, month, day })
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month() as i32,
            day: date.day() as i32,
        }
    }

    /// Approximate day number: `year*365 + month*30 + day`
    pub fn approx_days(self) -> i64 {
        i64::from(self.year) * 365 + i64::from(self.month) * 30 + i64::from(self.day)
    }
}

/// `true` if `s` is exactly four digits, dash, two digits, dash, two digits
pub fn has_date_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Booking date rule: right shape, year 1900..=2100, month 1..=12, and a day
/// that fits the month (February allows 29 in every year).
pub fn is_valid_date(s: &str) -> bool {
    if !has_date_shape(s) {
        return false;
    }
    let Some(Ymd { year, month, day }) = Ymd::parse(s) else {
        return false;
    };

    if !(1900..=2100).contains(&year) || !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return false;
    }
    match month {
        4 | 6 | 9 | 11 => day <= 30,
        2 => day <= 29,
        _ => true,
    }
}

/// `true` if `later` is strictly after `earlier`. Unreadable dates are never after anything.
pub fn is_date_after(later: &str, earlier: &str) -> bool {
    match (Ymd::parse(later), Ymd::parse(earlier)) {
        (Some(a), Some(b)) => a > b,
        _ => false,
    }
}

/// Approximate number of days from `start` to `end`; `0` if either is unreadable
pub fn days_between(start: &str, end: &str) -> i64 {
    match (Ymd::parse(start), Ymd::parse(end)) {
        (Some(s), Some(e)) => e.approx_days() - s.approx_days(),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_shape() {
        assert!(has_date_shape("2024-01-15"));
        assert!(!has_date_shape("2024-1-15"));
        assert!(!has_date_shape("2024/01/15"));
        assert!(!has_date_shape("2024-01-15 "));
        assert!(!has_date_shape(""));
    }

    #[test]
    fn test_valid_date_ranges() {
        assert!(is_valid_date("1900-01-01"));
        assert!(is_valid_date("2100-12-31"));
        assert!(!is_valid_date("1899-12-31"));
        assert!(!is_valid_date("2101-01-01"));
        assert!(!is_valid_date("2024-13-01"));
        assert!(!is_valid_date("2024-00-10"));
        assert!(!is_valid_date("2024-01-00"));
        assert!(!is_valid_date("2024-01-32"));
    }

    #[test]
    fn test_valid_date_month_lengths() {
        assert!(is_valid_date("2024-04-30"));
        assert!(!is_valid_date("2024-04-31"));
        assert!(!is_valid_date("2024-11-31"));
        assert!(is_valid_date("2023-02-29"));
        assert!(!is_valid_date("2024-02-30"));
    }

    #[test]
    fn test_date_after() {
        assert!(is_date_after("2024-01-15", "2024-01-10"));
        assert!(is_date_after("2025-01-01", "2024-12-31"));
        assert!(is_date_after("2024-02-01", "2024-01-31"));
        assert!(!is_date_after("2024-01-10", "2024-01-10"));
        assert!(!is_date_after("2024-01-09", "2024-01-10"));
        assert!(!is_date_after("garbage", "2024-01-10"));
    }

    #[test]
    fn test_days_between_same_month() {
        assert_eq!(days_between("2024-01-10", "2024-01-15"), 5);
    }

    #[test]
    fn test_days_between_is_approximate_across_months() {
        // 2024*365 + 2*30 + 1 - (2024*365 + 1*30 + 31)
        assert_eq!(days_between("2024-01-31", "2024-02-01"), 0);
        assert_eq!(days_between("2024-01-30", "2024-02-01"), 1);
        assert_eq!(days_between("2024-02-28", "2024-03-01"), 3);
    }

    #[test]
    fn test_from_naive() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
        assert_eq!(
            Ymd::from_naive(date),
            Ymd {
                year: 2026,
                month: 3,
                day: 9
            }
        );
    }
}
