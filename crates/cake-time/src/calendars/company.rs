//! Company calendar: weekends plus holidays that recur on the same month
//! and day every year.

use crate::calendar::Calendar;
use crate::date::Date;
use std::collections::BTreeSet;

/// The company holidays as `(month, day)`: New Year's Day, Christmas Day and
/// Boxing Day.
pub const COMPANY_HOLIDAYS: [(u8, u8); 3] = [(1, 1), (12, 25), (12, 26)];

/// A calendar whose holidays are month-day pairs, independent of year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyCalendar {
    name: String,
    holidays: BTreeSet<(u8, u8)>,
}

impl CompanyCalendar {
    /// Create a calendar with the given name and no holidays.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            holidays: BTreeSet::new(),
        }
    }

    /// The standard company calendar with [`COMPANY_HOLIDAYS`].
    pub fn standard() -> Self {
        let mut cal = Self::new("Company");
        for (month, day) in COMPANY_HOLIDAYS {
            cal.add_holiday(month, day);
        }
        cal
    }

    /// Add a recurring holiday. Weekends are already non-working days.
    pub fn add_holiday(&mut self, month: u8, day: u8) {
        self.holidays.insert((month, day));
    }

    /// Return the number of recurring holidays.
    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }

    /// Return `true` if `date`'s month and day match a company holiday.
    pub fn is_company_holiday(&self, date: Date) -> bool {
        self.holidays.contains(&date.month_day())
    }
}

impl Default for CompanyCalendar {
    fn default() -> Self {
        Self::standard()
    }
}

impl Calendar for CompanyCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.is_company_holiday(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn empty_calendar_is_weekends_only() {
        let cal = CompanyCalendar::new("Test");
        assert_eq!(cal.name(), "Test");
        assert!(cal.is_business_day(date(2024, 1, 1)));
        assert!(!cal.is_business_day(date(2024, 1, 6)));
    }

    #[test]
    fn standard_holidays_recur_every_year() {
        let cal = CompanyCalendar::standard();
        assert_eq!(cal.holiday_count(), 3);
        for year in [1999, 2024, 2025, 2031] {
            assert!(cal.is_company_holiday(date(year, 1, 1)));
            assert!(cal.is_company_holiday(date(year, 12, 25)));
            assert!(cal.is_company_holiday(date(year, 12, 26)));
            assert!(!cal.is_company_holiday(date(year, 12, 24)));
        }
        // 2024-12-24 is a Tuesday and not a holiday
        assert!(cal.is_business_day(date(2024, 12, 24)));
        assert!(!cal.is_business_day(date(2024, 12, 25)));
    }

    #[test]
    fn duplicate_holidays_are_ignored() {
        let mut cal = CompanyCalendar::standard();
        cal.add_holiday(1, 1);
        assert_eq!(cal.holiday_count(), 3);
        assert_eq!(cal, CompanyCalendar::default());
    }
}
