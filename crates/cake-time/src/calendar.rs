//! `Calendar` trait.
//!
//! A calendar knows which dates are working days and can move dates onto
//! working days.

use crate::date::Date;

/// A working-day calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Company"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a working day in this calendar.
    fn is_business_day(&self, date: Date) -> bool;

    /// Return `true` if `date` is not a working day (weekend or holiday).
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Return `true` if `date` falls on Saturday or Sunday.
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }

    /// The first working day on or after `date` (the "following" rule).
    ///
    /// A working day is returned untouched.
    fn adjust(&self, mut date: Date) -> Date {
        while self.is_holiday(date) {
            date += 1;
        }
        date
    }

    /// Advance `date` by `n` working days (`n >= 0`).
    ///
    /// Each step moves at least one calendar day, so the result is strictly
    /// later than `date` whenever `n > 0`.
    fn advance_business_days(&self, mut date: Date, n: u32) -> Date {
        let mut remaining = n;
        while remaining > 0 {
            date += 1;
            if self.is_business_day(date) {
                remaining -= 1;
            }
        }
        date
    }

    /// The first working day strictly after `date`.
    fn next_business_day(&self, date: Date) -> Date {
        self.advance_business_days(date, 1)
    }
}
