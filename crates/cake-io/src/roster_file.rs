//! Roster file validation and parsing.
//!
//! A roster is plain text with one `Name,yyyy-mm-dd` record per line.  The
//! first bad line aborts the whole read.

use std::path::Path;

use cake_core::errors::{Error, Result};
use cake_core::utilities::parse_roster_line;
use cake_schedule::Roster;
use cake_time::Date;
use tracing::{debug, info, warn};

/// File extensions accepted for roster files.
pub const ALLOWED_EXTENSIONS: [&str; 2] = ["txt", "csv"];

/// Check that `path` is an existing file with an allowed extension.
///
/// # Errors
/// * [`Error::FileNotFound`] if the path does not exist or is not a file.
/// * [`Error::UnsupportedFileType`] if the extension is not in
///   [`ALLOWED_EXTENSIONS`].
pub fn validate_roster_path(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    if !ALLOWED_EXTENSIONS.contains(&ext) {
        return Err(Error::UnsupportedFileType {
            found: ext.to_string(),
            allowed: ALLOWED_EXTENSIONS.join(", "),
        });
    }
    Ok(())
}

/// Parse roster text.  Blank lines are ignored; a repeated name replaces the
/// earlier birthday.
///
/// Parsing is intentionally more lenient than matching each raw row: blank
/// lines, CRLF endings and surrounding whitespace are accepted.  It is
/// stricter about dates: one that passes the shape check but does not exist
/// (`2001-02-30`) is rejected instead of rolling over into the next month.
///
/// # Errors
/// [`Error::InvalidRecordFormat`] or [`Error::InvalidDate`] for the first
/// offending line.
pub fn parse_roster(text: &str) -> Result<Roster> {
    let mut roster = Roster::new();
    for line in text.lines().filter(|l| !l.trim().is_empty()) {
        let record = parse_roster_line(line)?;
        let (y, m, d) = record.ymd;
        let birthday = Date::from_ymd(y, m, d).map_err(|_| Error::InvalidDate {
            line: line.trim().to_string(),
        })?;
        if let Some(previous) = roster.insert(record.name, birthday) {
            warn!(
                name = record.name,
                %previous,
                %birthday,
                "duplicate employee name, keeping the later birthday"
            );
        }
    }
    debug!(employees = roster.len(), "parsed roster");
    Ok(roster)
}

/// Validate, read, and parse the roster file at `path`.
pub fn read_roster(path: &Path) -> Result<Roster> {
    validate_roster_path(path)?;
    let text = std::fs::read_to_string(path)?;
    let roster = parse_roster(&text)?;
    info!(path = %path.display(), employees = roster.len(), "read roster");
    Ok(roster)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn parses_indented_lines() {
        let roster = parse_roster(
            "Steve,1997-01-01
             Maria,1987-09-24
             Bernard,1973-02-06
",
        )
        .unwrap();
        let entries: Vec<_> = roster.iter().collect();
        assert_eq!(
            entries,
            vec![
                ("Steve", date(1997, 1, 1)),
                ("Maria", date(1987, 9, 24)),
                ("Bernard", date(1973, 2, 6)),
            ]
        );
    }

    #[test]
    fn blank_lines_and_crlf() {
        let roster = parse_roster("Steve,1997-01-01\r\n\r\n\nLaura,1977-07-21\r\n").unwrap();
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn first_bad_line_aborts() {
        let err = parse_roster(
            "2004-01-01,Steve
             2001-07-01,Laura",
        )
        .unwrap_err();
        assert_eq!(
            err,
            Error::InvalidRecordFormat {
                line: "2004-01-01,Steve".into()
            }
        );
    }

    #[test]
    fn impossible_date_is_invalid_date() {
        let err = parse_roster("Steve,1997-01-01\nLaura,2001-02-30\n").unwrap_err();
        assert_eq!(
            err,
            Error::InvalidDate {
                line: "Laura,2001-02-30".into()
            }
        );
    }

    #[test]
    fn duplicate_names_overwrite() {
        let roster = parse_roster("Steve,1997-01-01\nSteve,1990-06-10\n").unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.get("Steve"), Some(date(1990, 6, 10)));
    }
}
