//! `Date` type.
//!
//! Dates are naive calendar days stored as a serial number counted from
//! January 1, 1900 (serial 1).  There is no time-of-day and no timezone.
//!
//! # Serial number convention
//! * Serial 1 = January 1, 1900 (a Monday).
//! * The valid date range is 1900-01-01 to 2199-12-31.

use std::str::FromStr;

use crate::weekday::Weekday;
use cake_core::errors::{Error, Result};
use cake_core::utilities::parse_iso_date;

/// A calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

impl Date {
    /// Minimum valid date: January 1, 1900.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 2199.
    pub const MAX: Date = Date(109_573);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    pub fn from_serial(serial: i32) -> Result<Self> {
        let d = Date(serial);
        if d < Self::MIN || d > Self::MAX {
            return Err(Error::Date(format!("serial {serial} out of range")));
        }
        Ok(d)
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(1900..=2199).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [1900, 2199]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the year (1900–2199).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return `(month, day)`, the year-independent part of the date.
    pub fn month_day(&self) -> (u8, u8) {
        let (_, m, d) = ymd_from_serial(self.0);
        (m, d)
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // 1900-01-01 (serial 1) is a Monday.
        let w = ((self.0 - 1).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).expect("rem_euclid always in 1..=7")
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        Date::from_serial(self.0 + n)
            .map_err(|_| Error::Date(format!("{self} + {n} days is out of range")))
    }

    /// Move this date into `year`, keeping month and day.
    ///
    /// February 29 in a non-leap target year rolls over to March 1.
    pub fn with_year(self, year: u16) -> Result<Self> {
        let (_, m, d) = ymd_from_serial(self.0);
        if m == 2 && d == 29 && !is_leap_year(year) {
            return Date::from_ymd(year, 3, 1);
        }
        Date::from_ymd(year, m, d)
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = self.add_days(rhs).expect("date addition overflow");
    }
}

// ── Parsing & display ─────────────────────────────────────────────────────────

impl FromStr for Date {
    type Err = Error;

    /// Parse `yyyy-mm-dd`.
    fn from_str(s: &str) -> Result<Self> {
        let (y, m, d) =
            parse_iso_date(s).ok_or_else(|| Error::Date(format!("cannot parse '{s}' as yyyy-mm-dd")))?;
        Date::from_ymd(y, m, d)
    }
}

/// ISO 8601 (`yyyy-mm-dd`).
impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Convert (year, month, day) to a serial number.
fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let y = year as i32;
    let m = month as i32;
    let d = day as i32;

    // Days in whole years since 1900, plus the leap days among them
    // (1900 itself is not a leap year).
    let mut serial = (y - 1900) * 365;
    serial += (y - 1901) / 4 - (y - 1901) / 100 + (y - 1601) / 400;
    serial += MONTH_OFFSET[m as usize - 1] as i32;
    if m > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + d
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    let mut y = (serial / 365 + 1900) as u16;
    loop {
        if serial < serial_from_ymd(y, 1, 1) {
            y -= 1;
        } else if serial >= serial_from_ymd(y + 1, 1, 1) {
            y += 1;
        } else {
            break;
        }
    }
    let mut remaining = serial - serial_from_ymd(y, 1, 1) + 1;
    let mut m = 1u8;
    loop {
        let days = days_in_month(y, m) as i32;
        if remaining <= days {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (y, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_epoch() {
        assert_eq!(Date::from_serial(1).unwrap(), date(1900, 1, 1));
        assert_eq!(date(1900, 1, 1), Date::MIN);
        assert_eq!(date(2199, 12, 31), Date::MAX);
    }

    #[test]
    fn test_weekday() {
        assert_eq!(date(2024, 1, 1).weekday(), Weekday::Monday);
        assert_eq!(date(2024, 1, 6).weekday(), Weekday::Saturday);
        assert_eq!(date(2026, 1, 1).weekday(), Weekday::Thursday);
    }

    #[test]
    fn test_invalid_dates() {
        assert!(Date::from_ymd(2001, 2, 29).is_err());
        assert!(Date::from_ymd(2001, 2, 30).is_err());
        assert!(Date::from_ymd(2001, 4, 31).is_err());
        assert!(Date::from_ymd(1899, 12, 31).is_err());
        assert!(Date::from_ymd(2024, 13, 1).is_err());
    }

    #[test]
    fn test_arithmetic() {
        let d = date(2023, 1, 1);
        let d2 = d + 31;
        assert_eq!(d2, date(2023, 2, 1));
        assert_eq!(date(2024, 2, 28) + 1, date(2024, 2, 29));
        assert_eq!(date(2024, 3, 1).add_days(-1).unwrap(), date(2024, 2, 29));
        assert!(Date::MAX.add_days(1).is_err());
    }

    #[test]
    fn test_with_year() {
        assert_eq!(date(1977, 7, 21).with_year(2024).unwrap(), date(2024, 7, 21));
        assert_eq!(date(1988, 2, 29).with_year(2024).unwrap(), date(2024, 2, 29));
        assert_eq!(date(1988, 2, 29).with_year(2025).unwrap(), date(2025, 3, 1));
        assert!(date(1988, 6, 1).with_year(2300).is_err());
    }

    #[test]
    fn test_month_day() {
        assert_eq!(date(2024, 12, 25).month_day(), (12, 25));
    }

    #[test]
    fn test_parse_and_display() {
        let d: Date = "2024-07-23".parse().unwrap();
        assert_eq!(d, date(2024, 7, 23));
        assert_eq!(d.to_string(), "2024-07-23");
        assert_eq!(format!("{d:?}"), "Date(2024-07-23)");
        assert!("2024-02-30".parse::<Date>().is_err());
        assert!("23/07/2024".parse::<Date>().is_err());
    }
}
