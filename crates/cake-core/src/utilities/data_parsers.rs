//! Data parsing helpers.
//!
//! Roster files carry one employee per line in the form `Name,yyyy-mm-dd`.
//! The checks here are purely textual; whether the date exists on the
//! calendar is decided by the caller once it builds a real date.
//!
//! The parser is more lenient than a raw anchored match on the file row:
//! surrounding whitespace (including a trailing `\r\n`) is trimmed before
//! matching, and blank lines are left for the caller to skip.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::errors::{Error, Result};

/// One syntactically valid roster line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterLine<'a> {
    /// Employee name (trimmed).
    pub name: &'a str,
    /// `(year, month, day)` as written; not yet checked against the calendar.
    pub ymd: (u16, u8, u8),
}

/// `,yyyy-mm-dd` anchored at the end of the line, month `01`-`12`, day `01`-`31`.
fn record_suffix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r",(?P<year>[0-9]{4})-(?P<month>0[1-9]|1[0-2])-(?P<day>0[1-9]|[1-2][0-9]|3[0-1])$")
            .expect("record suffix pattern")
    })
}

fn iso_date() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?P<year>[0-9]{4})-(?P<month>[0-9]{2})-(?P<day>[0-9]{2})$")
            .expect("iso date pattern")
    })
}

fn ymd_from_captures(caps: &Captures<'_>) -> Option<(u16, u8, u8)> {
    Some((
        caps["year"].parse().ok()?,
        caps["month"].parse().ok()?,
        caps["day"].parse().ok()?,
    ))
}

/// Parse a date string in ISO 8601 format (`YYYY-MM-DD`).
///
/// Exactly four year digits and two digits each for month and day are
/// required.  Returns `(year, month, day)` on success.
pub fn parse_iso_date(s: &str) -> Option<(u16, u8, u8)> {
    iso_date()
        .captures(s.trim())
        .and_then(|caps| ymd_from_captures(&caps))
}

/// Parse one roster line of the form `Name,yyyy-mm-dd`.
///
/// The line is trimmed first and must then end in `,yyyy-mm-dd`.  The name
/// is everything before that suffix; the date comes from the match itself.
///
/// # Errors
/// * [`Error::InvalidRecordFormat`] if the line does not end in
///   `,yyyy-mm-dd` or the name is empty.
/// * [`Error::InvalidDate`] if the name itself contains a comma, so the
///   second field of the row is not the date.
pub fn parse_roster_line(line: &str) -> Result<RosterLine<'_>> {
    let trimmed = line.trim();
    let invalid_format = || Error::InvalidRecordFormat {
        line: trimmed.to_string(),
    };

    let caps = record_suffix()
        .captures(trimmed)
        .ok_or_else(invalid_format)?;
    let suffix_start = caps.get(0).map_or(trimmed.len(), |m| m.start());
    let prefix = &trimmed[..suffix_start];
    if prefix.contains(',') {
        return Err(Error::InvalidDate {
            line: trimmed.to_string(),
        });
    }
    let name = prefix.trim();
    if name.is_empty() {
        return Err(invalid_format());
    }
    let ymd = ymd_from_captures(&caps).ok_or_else(invalid_format)?;

    Ok(RosterLine { name, ymd })
}
