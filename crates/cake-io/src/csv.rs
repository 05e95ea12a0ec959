//! CSV rendering and file output.
//!
//! Cake counts are collapsed to one small or one large cake per row; the
//! names column keeps everyone.

use std::path::{Path, PathBuf};

use cake_core::errors::{Error, Result};
use cake_schedule::CakeDay;
use chrono::NaiveDate;
use tracing::info;

/// Column headers, in output order.
pub const CSV_HEADERS: [&str; 4] = [
    "Date",
    "Number of Small Cakes",
    "Number of Large Cakes",
    "Names of people getting cakes",
];

/// One output row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRow {
    /// `yyyy-mm-dd`.
    pub date: String,
    /// `1` for a single person, else `0`.
    pub small_cakes: u8,
    /// `1` for two or more people, else `0`.
    pub large_cakes: u8,
    /// Names joined with `", "`.
    pub names: String,
}

impl CsvRow {
    /// The row's cells as text, in [`CSV_HEADERS`] order.
    pub fn cells(&self) -> [String; 4] {
        [
            self.date.clone(),
            self.small_cakes.to_string(),
            self.large_cakes.to_string(),
            self.names.clone(),
        ]
    }
}

impl From<&CakeDay> for CsvRow {
    fn from(day: &CakeDay) -> Self {
        let (small_cakes, large_cakes) = day.cake_columns();
        CsvRow {
            date: day.date.to_string(),
            small_cakes,
            large_cakes,
            names: day.joined_names(),
        }
    }
}

/// Quote `field` if it contains a delimiter, quote, backslash, or
/// whitespace; embedded quotes are doubled.
fn escape_field(field: &str) -> String {
    let needs_quotes = field
        .chars()
        .any(|c| matches!(c, ',' | '"' | '\\' | ' ' | '\t' | '\r' | '\n'));
    if needs_quotes {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn push_record<S: AsRef<str>>(out: &mut String, cells: &[S]) {
    let line: Vec<String> = cells.iter().map(|c| escape_field(c.as_ref())).collect();
    out.push_str(&line.join(","));
    out.push('\n');
}

/// Render the header and one row per cake day.
pub fn render_csv(schedule: &[CakeDay]) -> String {
    let mut out = String::new();
    push_record(&mut out, &CSV_HEADERS[..]);
    for day in schedule {
        push_record(&mut out, &CsvRow::from(day).cells()[..]);
    }
    out
}

/// `EmpBdyCakes-<dd-mm-yyyy>.csv` for the run date `today`.
pub fn output_file_name(today: NaiveDate) -> String {
    format!("EmpBdyCakes-{}.csv", today.format("%d-%m-%Y"))
}

/// Write the schedule to [`output_file_name`] inside `dir`, returning the
/// path written.
///
/// # Errors
/// [`Error::Io`] if the file cannot be written.
pub fn write_csv(schedule: &[CakeDay], dir: &Path, today: NaiveDate) -> Result<PathBuf> {
    let path = dir.join(output_file_name(today));
    std::fs::write(&path, render_csv(schedule)).map_err(|e| {
        Error::Io(format!(
            "Unable to generate a CSV due to the following error: {e}"
        ))
    })?;
    info!(path = %path.display(), rows = schedule.len(), "wrote cake schedule");
    Ok(path)
}
