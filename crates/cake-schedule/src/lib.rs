//! # cake-schedule
//!
//! The cake-day scheduling pipeline.
//!
//! A [`Roster`] of `(name, birthday)` pairs flows through a fixed chain of
//! stages, each producing fresh values for the next:
//!
//! 1. [`normalizer`]: move every birthday into the processing year.
//! 2. [`resolver::resolve_off_days`]: the employee's day off (first working
//!    day on or after the birthday).
//! 3. [`resolver::resolve_cake_days`]: the first working day strictly after
//!    the day off.
//! 4. [`grouper`]: one [`DayGroup`] per distinct candidate date.
//! 5. [`scheduler`]: merge adjacent days, defer cakes off cake-free days.
//! 6. [`sorter`]: chronological order.
//!
//! [`CakeDayPlanner`] chains them.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Group candidate cake days by date.
pub mod grouper;

/// Birthday normalization to the processing year.
pub mod normalizer;

/// The planner that runs the whole pipeline.
pub mod planner;

/// Record types passed between stages.
pub mod records;

/// Off-day and cake-eligibility resolution.
pub mod resolver;

/// Input roster.
pub mod roster;

/// The merge/defer scheduler.
pub mod scheduler;

/// Chronological ordering of the final schedule.
pub mod sorter;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use grouper::group_by_day;
pub use normalizer::normalize_birthdays;
pub use planner::CakeDayPlanner;
pub use records::{CakeDay, CakeSize, CandidateCakeDay, DayGroup, EmployeeBirthday, OffDay};
pub use resolver::{resolve_cake_days, resolve_off_days};
pub use roster::Roster;
pub use scheduler::{MergeDeferScheduler, ScheduleDecision, SchedulerState};
pub use sorter::sort_schedule;
