//! # cake-io
//!
//! Everything that touches the outside world: reading and validating the
//! roster file, writing the CSV schedule, and rendering the console report.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// CSV rendering and file output.
pub mod csv;

/// Roster file validation and parsing.
pub mod roster_file;

/// Console table rendering.
pub mod table;

pub use csv::{output_file_name, render_csv, write_csv, CsvRow, CSV_HEADERS};
pub use roster_file::{parse_roster, read_roster, validate_roster_path, ALLOWED_EXTENSIONS};
pub use table::{render_table, write_banner, write_report, REPORT_TITLE};
