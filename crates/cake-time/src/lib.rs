//! # cake-time
//!
//! Date, weekday, and working-day calendar types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// The working-day calendar trait.
pub mod calendar;

/// Concrete calendar implementations.
pub mod calendars;

/// `Date` type.
pub mod date;

/// Day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::Calendar;
pub use calendars::company::{CompanyCalendar, COMPANY_HOLIDAYS};
pub use date::Date;
pub use weekday::Weekday;
