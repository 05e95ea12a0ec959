//! Birthday normalization.

use cake_core::errors::Result;
use cake_core::{ensure, Year};

use crate::records::EmployeeBirthday;
use crate::roster::Roster;

/// First processing year the pipeline accepts.
pub const MIN_YEAR: Year = 1900;

/// Last processing year the pipeline accepts; leaves room for off days and
/// cake days to roll past 31 December.
pub const MAX_YEAR: Year = 2198;

/// Move every birthday in `roster` into `year`, keeping month and day.
///
/// A 29 February birthday becomes 1 March in a non-leap `year`.  Output
/// follows roster order.
///
/// # Errors
/// Returns [`cake_core::Error::Precondition`] if `year` is outside
/// [`MIN_YEAR`]..=[`MAX_YEAR`].
pub fn normalize_birthdays(roster: &Roster, year: Year) -> Result<Vec<EmployeeBirthday>> {
    ensure!(
        (MIN_YEAR..=MAX_YEAR).contains(&year),
        "processing year {year} out of range [{MIN_YEAR}, {MAX_YEAR}]"
    );
    roster
        .iter()
        .map(|(name, birthday)| {
            Ok(EmployeeBirthday {
                name: name.to_string(),
                date: birthday.with_year(year)?,
            })
        })
        .collect()
}
