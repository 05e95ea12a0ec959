//! `CakeDayPlanner`: runs the whole pipeline for one processing year.

use cake_core::errors::Result;
use cake_core::{ensure, Settings, Year};
use cake_time::{Calendar, CompanyCalendar};
use tracing::{debug, info, info_span};

use crate::grouper::group_by_day;
use crate::normalizer::{normalize_birthdays, MAX_YEAR, MIN_YEAR};
use crate::records::{CakeDay, CandidateCakeDay, DayGroup, EmployeeBirthday, OffDay};
use crate::resolver::{resolve_cake_days, resolve_off_days};
use crate::roster::Roster;
use crate::scheduler::MergeDeferScheduler;
use crate::sorter::sort_schedule;

/// Computes the cake schedule for a roster.
///
/// Each stage is exposed on its own so intermediate results can be
/// inspected; [`plan`](Self::plan) runs them all.
#[derive(Debug, Clone)]
pub struct CakeDayPlanner<C: Calendar = CompanyCalendar> {
    calendar: C,
    year: Year,
}

impl CakeDayPlanner<CompanyCalendar> {
    /// A planner for the processing year in [`Settings`], using the company
    /// calendar.
    pub fn for_current_year() -> Result<Self> {
        Self::new(CompanyCalendar::standard(), Settings::instance().processing_year())
    }
}

impl<C: Calendar> CakeDayPlanner<C> {
    /// A planner for `year` using `calendar`.
    ///
    /// # Errors
    /// Returns a precondition error if `year` is outside
    /// [`MIN_YEAR`]..=[`MAX_YEAR`].
    pub fn new(calendar: C, year: Year) -> Result<Self> {
        ensure!(
            (MIN_YEAR..=MAX_YEAR).contains(&year),
            "processing year {year} out of range [{MIN_YEAR}, {MAX_YEAR}]"
        );
        Ok(Self { calendar, year })
    }

    /// The processing year.
    pub fn year(&self) -> Year {
        self.year
    }

    /// The calendar used for weekends and holidays.
    pub fn calendar(&self) -> &C {
        &self.calendar
    }

    /// Stage 1: birthdays in the processing year.
    pub fn normalize(&self, roster: &Roster) -> Result<Vec<EmployeeBirthday>> {
        normalize_birthdays(roster, self.year)
    }

    /// Stage 2: days off.
    pub fn off_days(&self, birthdays: &[EmployeeBirthday]) -> Vec<OffDay> {
        resolve_off_days(birthdays, &self.calendar)
    }

    /// Stage 3: candidate cake days.
    pub fn cake_days(&self, off_days: &[OffDay]) -> Vec<CandidateCakeDay> {
        resolve_cake_days(off_days, &self.calendar)
    }

    /// Stage 4: candidate days grouped by date.
    pub fn group(&self, cake_days: &[CandidateCakeDay]) -> Vec<DayGroup> {
        group_by_day(cake_days)
    }

    /// Stages 5 and 6: merge, defer, and sort.
    pub fn schedule(&self, groups: &[DayGroup]) -> Vec<CakeDay> {
        let mut schedule = MergeDeferScheduler::new(&self.calendar).schedule(groups);
        sort_schedule(&mut schedule);
        schedule
    }

    /// Run the full pipeline.
    pub fn plan(&self, roster: &Roster) -> Result<Vec<CakeDay>> {
        let _span = info_span!("plan", year = self.year, calendar = self.calendar.name()).entered();

        let birthdays = self.normalize(roster)?;
        let off_days = self.off_days(&birthdays);
        let cake_days = self.cake_days(&off_days);
        let groups = self.group(&cake_days);
        debug!(
            employees = birthdays.len(),
            distinct_days = groups.len(),
            "grouped candidate cake days"
        );

        let schedule = self.schedule(&groups);
        info!(
            employees = birthdays.len(),
            cake_days = schedule.len(),
            "cake schedule ready"
        );
        Ok(schedule)
    }
}
