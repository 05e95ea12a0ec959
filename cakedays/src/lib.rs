//! # cakedays
//!
//! Works out when each employee gets a birthday cake, around weekends,
//! company holidays, and the cake-free day that follows every cake.
//!
//! This crate is a **façade** that re-exports the workspace crates and adds
//! [`plan_roster_file`], which runs read → plan → CSV in one call.
//!
//! ```rust
//! use cakedays::schedule::{CakeDayPlanner, Roster};
//! use cakedays::time::{CompanyCalendar, Date};
//!
//! let roster: Roster = [("Steve", "1997-01-01".parse::<Date>().unwrap())]
//!     .into_iter()
//!     .collect();
//! let planner = CakeDayPlanner::new(CompanyCalendar::standard(), 2024).unwrap();
//! let schedule = planner.plan(&roster).unwrap();
//! assert_eq!(schedule[0].date.to_string(), "2024-01-03");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

/// Error type, settings, and parsers.
pub use cake_core as core;

/// Dates, weekdays, and calendars.
pub use cake_time as time;

/// The scheduling pipeline.
pub use cake_schedule as schedule;

/// Roster files, CSV output, and the console report.
pub use cake_io as io;

/// Result of [`plan_roster_file`].
#[derive(Debug, Clone)]
pub struct PlannedRun {
    /// The sorted schedule.
    pub schedule: Vec<schedule::CakeDay>,
    /// Where the CSV was written.
    pub csv_path: PathBuf,
}

/// Read `roster_path`, plan it for the processing year in
/// [`cake_core::Settings`], and write the CSV into `output_dir`, named after
/// `today`.
pub fn plan_roster_file(
    roster_path: &Path,
    output_dir: &Path,
    today: NaiveDate,
) -> cake_core::Result<PlannedRun> {
    let roster = io::read_roster(roster_path)?;
    let schedule = schedule::CakeDayPlanner::for_current_year()?.plan(&roster)?;
    let csv_path = io::write_csv(&schedule, output_dir, today)?;
    Ok(PlannedRun { schedule, csv_path })
}
