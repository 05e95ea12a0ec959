//! Off-day and cake-eligibility resolution.
//!
//! Both stages are per-employee and share the calendar's working-day
//! predicate.  The off day may equal the birthday; the cake day never equals
//! the off day.

use cake_time::Calendar;

use crate::records::{CandidateCakeDay, EmployeeBirthday, OffDay};

/// Each employee's day off: the birthday if it is a working day, otherwise
/// the first working day after it.
pub fn resolve_off_days(birthdays: &[EmployeeBirthday], calendar: &dyn Calendar) -> Vec<OffDay> {
    birthdays
        .iter()
        .map(|b| OffDay {
            name: b.name.clone(),
            date: calendar.adjust(b.date),
        })
        .collect()
}

/// Each employee's candidate cake day: the first working day strictly after
/// the day off.
pub fn resolve_cake_days(off_days: &[OffDay], calendar: &dyn Calendar) -> Vec<CandidateCakeDay> {
    off_days
        .iter()
        .map(|o| CandidateCakeDay {
            name: o.name.clone(),
            date: calendar.next_business_day(o.date),
        })
        .collect()
}
