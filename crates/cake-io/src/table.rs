//! Console table rendering.

use std::io::Write;
use std::path::Path;

use cake_schedule::CakeDay;

use crate::csv::{CsvRow, CSV_HEADERS};

fn border(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for w in widths {
        line.push_str(&"-".repeat(w + 2));
        line.push('+');
    }
    line
}

fn table_row<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (cell, w) in cells.iter().zip(widths) {
        let cell = cell.as_ref();
        let pad = w - cell.chars().count();
        line.push(' ');
        line.push_str(cell);
        line.push_str(&" ".repeat(pad + 1));
        line.push('|');
    }
    line
}

/// Render a boxed table, each column as wide as its widest cell.
pub fn render_table<S: AsRef<str>>(headers: &[&str], rows: &[Vec<S>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.as_ref().chars().count());
        }
    }

    let rule = border(&widths);
    let mut lines = vec![rule.clone(), table_row(headers, &widths), rule.clone()];
    lines.extend(rows.iter().map(|row| table_row(row, &widths)));
    lines.push(rule);

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Title line printed once the roster file has passed validation.
pub const REPORT_TITLE: &str = "----- Employee Birthday Cakes -----";

/// Print the report title followed by a blank line.
pub fn write_banner<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{REPORT_TITLE}")?;
    writeln!(out)
}

/// Print the run summary under the title: where the CSV went and the
/// schedule table.
pub fn write_report<W: Write>(
    out: &mut W,
    schedule: &[CakeDay],
    csv_path: &Path,
) -> std::io::Result<()> {
    if schedule.is_empty() {
        writeln!(out, "No data to show")?;
        return Ok(());
    }

    writeln!(
        out,
        "A CSV file with the information below has been generated and stored at: {}",
        csv_path.display()
    )?;
    writeln!(out)?;

    let rows: Vec<Vec<String>> = schedule
        .iter()
        .map(|day| CsvRow::from(day).cells().to_vec())
        .collect();
    write!(out, "{}", render_table(&CSV_HEADERS, &rows))
}
