//! Input roster: employee name → raw birthday.

use cake_time::Date;
use indexmap::IndexMap;

/// Employee birthdays as read, keyed by name.
///
/// Names are unique.  Re-inserting a name replaces the birthday but keeps the
/// name's original position, so iteration order is the order in which names
/// were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    birthdays: IndexMap<String, Date>,
}

impl Roster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a birthday.  Returns the previous birthday for this
    /// name, if any.
    pub fn insert(&mut self, name: impl Into<String>, birthday: Date) -> Option<Date> {
        self.birthdays.insert(name.into(), birthday)
    }

    /// Birthday for `name`.
    pub fn get(&self, name: &str) -> Option<Date> {
        self.birthdays.get(name).copied()
    }

    /// Number of employees.
    pub fn len(&self) -> usize {
        self.birthdays.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.birthdays.is_empty()
    }

    /// Iterate over `(name, birthday)` in roster order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Date)> + '_ {
        self.birthdays.iter().map(|(n, d)| (n.as_str(), *d))
    }
}

impl<N: Into<String>> FromIterator<(N, Date)> for Roster {
    fn from_iter<I: IntoIterator<Item = (N, Date)>>(iter: I) -> Self {
        let mut roster = Roster::new();
        for (name, birthday) in iter {
            roster.insert(name, birthday);
        }
        roster
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn duplicate_name_overwrites_in_place() {
        let mut roster = Roster::new();
        assert_eq!(roster.insert("Steve", date(1997, 1, 1)), None);
        roster.insert("Laura", date(1977, 7, 21));
        assert_eq!(
            roster.insert("Steve", date(1990, 5, 5)),
            Some(date(1997, 1, 1))
        );

        assert_eq!(roster.len(), 2);
        let entries: Vec<_> = roster.iter().collect();
        assert_eq!(
            entries,
            vec![("Steve", date(1990, 5, 5)), ("Laura", date(1977, 7, 21))]
        );
    }

    #[test]
    fn collect_from_pairs() {
        let roster: Roster = [("A", date(2000, 1, 1)), ("B", date(2000, 1, 2))]
            .into_iter()
            .collect();
        assert_eq!(roster.get("B"), Some(date(2000, 1, 2)));
        assert!(roster.get("C").is_none());
        assert!(!roster.is_empty());
    }
}
