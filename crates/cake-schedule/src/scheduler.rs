//! The merge/defer scheduler.
//!
//! Walks the day groups in the order the grouper produced them and turns each
//! into at most one [`CakeDay`]:
//!
//! * **Merge**: if the next calendar day also has a group and is not yet
//!   cake-free, both groups celebrate together on the next day.
//! * **Defer**: otherwise, if the group's own date is cake-free, the cake
//!   moves to the next working day.
//! * **Keep**: otherwise the group is scheduled on its own date, unless a
//!   cake is already scheduled there, in which case it is **skipped**.
//!
//! Every scheduled cake makes the following calendar day cake-free.  Cake-free
//! days accumulate for the whole run; they are never cleared.
//!
//! The walk order matters: it is first-appearance order, not chronological.
//! A deferred cake only skips weekends and holidays, so it can land on a date
//! that already carries another cake.

use std::collections::{HashMap, HashSet};

use cake_time::{Calendar, Date};
use tracing::trace;

use crate::records::{CakeDay, DayGroup};

/// What the scheduler did with one day group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleDecision {
    /// The group was combined with the group on the following day.
    Merged {
        /// The group's own date.
        from: Date,
        /// The following day, where both groups celebrate.
        into: Date,
    },
    /// The group's date was cake-free; its cake moved forward.
    Deferred {
        /// The group's own date.
        from: Date,
        /// The working day the cake moved to.
        to: Date,
    },
    /// The group was scheduled on its own date.
    Kept {
        /// The group's date.
        date: Date,
    },
    /// A cake was already scheduled on the group's date; nothing was added.
    Skipped {
        /// The group's date.
        date: Date,
    },
}

/// State threaded through one scheduling run.
#[derive(Debug, Clone, Default)]
pub struct SchedulerState {
    cake_free: HashSet<Date>,
    scheduled_dates: HashSet<Date>,
    scheduled: Vec<CakeDay>,
    decisions: Vec<ScheduleDecision>,
}

impl SchedulerState {
    /// An empty state: nothing scheduled, no cake-free days.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `date` is cake-free.
    pub fn is_cake_free(&self, date: Date) -> bool {
        self.cake_free.contains(&date)
    }

    /// All cake-free days, in ascending order.
    pub fn cake_free_days(&self) -> Vec<Date> {
        let mut days: Vec<Date> = self.cake_free.iter().copied().collect();
        days.sort_unstable();
        days
    }

    /// Whether a cake has already been scheduled on `date`.
    pub fn is_scheduled(&self, date: Date) -> bool {
        self.scheduled_dates.contains(&date)
    }

    /// Cake days in the order they were scheduled.
    pub fn scheduled(&self) -> &[CakeDay] {
        &self.scheduled
    }

    /// One decision per group, in walk order.
    pub fn decisions(&self) -> &[ScheduleDecision] {
        &self.decisions
    }

    /// Consume the state, returning the scheduled cake days.
    pub fn into_schedule(self) -> Vec<CakeDay> {
        self.scheduled
    }

    fn schedule(&mut self, day: CakeDay) {
        self.cake_free.insert(day.date + 1);
        self.scheduled_dates.insert(day.date);
        self.scheduled.push(day);
    }
}

/// Applies the merge, defer, and keep rules over a list of day groups.
#[derive(Debug, Clone, Copy)]
pub struct MergeDeferScheduler<'a> {
    calendar: &'a dyn Calendar,
}

impl<'a> MergeDeferScheduler<'a> {
    /// Create a scheduler that defers cakes onto working days of `calendar`.
    pub fn new(calendar: &'a dyn Calendar) -> Self {
        Self { calendar }
    }

    /// Schedule `groups`, returning the cake days in the order they were
    /// produced (not sorted).
    pub fn schedule(&self, groups: &[DayGroup]) -> Vec<CakeDay> {
        self.run(groups).into_schedule()
    }

    /// Schedule `groups`, returning the full final state.
    pub fn run(&self, groups: &[DayGroup]) -> SchedulerState {
        let by_date: HashMap<Date, &DayGroup> = groups.iter().map(|g| (g.date, g)).collect();
        let mut state = SchedulerState::new();
        for group in groups {
            let decision = self.step(&mut state, &by_date, group);
            trace!(?decision, names = ?group.names, "cake day decision");
            state.decisions.push(decision);
        }
        state
    }

    fn step(
        &self,
        state: &mut SchedulerState,
        by_date: &HashMap<Date, &DayGroup>,
        current: &DayGroup,
    ) -> ScheduleDecision {
        let date = current.date;
        let next_day = date + 1;

        if let Some(next) = by_date.get(&next_day) {
            if !state.is_cake_free(next_day) {
                let mut names = current.names.clone();
                names.extend(next.names.iter().cloned());
                state.schedule(CakeDay {
                    date: next_day,
                    cake_count: current.cake_count + next.cake_count,
                    names,
                });
                return ScheduleDecision::Merged {
                    from: date,
                    into: next_day,
                };
            }
        }

        if state.is_cake_free(date) {
            let to = self.calendar.next_business_day(date);
            state.schedule(CakeDay {
                date: to,
                ..CakeDay::from(current)
            });
            return ScheduleDecision::Deferred { from: date, to };
        }

        if state.is_scheduled(date) {
            return ScheduleDecision::Skipped { date };
        }
        state.schedule(CakeDay::from(current));
        ScheduleDecision::Kept { date }
    }
}
