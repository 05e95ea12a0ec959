//! Miscellaneous utilities.

/// Roster and date text parsers.
pub mod data_parsers;

pub use data_parsers::{parse_iso_date, parse_roster_line, RosterLine};
