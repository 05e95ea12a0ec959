//! Record types passed between pipeline stages.
//!
//! Every stage produces new values; nothing is mutated after it has been
//! handed to the next stage.

use cake_core::CakeCount;
use cake_time::Date;

/// A birthday moved into the processing year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeBirthday {
    /// Employee name.
    pub name: String,
    /// Birthday in the processing year.
    pub date: Date,
}

/// The employee's day off: the birthday, moved forward past weekends and
/// company holidays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffDay {
    /// Employee name.
    pub name: String,
    /// A working day, on or after the birthday.
    pub date: Date,
}

/// The working day after the day off, on which the employee's cake is due.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateCakeDay {
    /// Employee name.
    pub name: String,
    /// A working day, strictly after the day off.
    pub date: Date,
}

/// All employees sharing one candidate cake date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGroup {
    /// The shared candidate date.
    pub date: Date,
    /// Number of employees; always equal to `names.len()`.
    pub cake_count: CakeCount,
    /// Names in the order the employees were first seen.
    pub names: Vec<String>,
}

/// Cake size printed on the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CakeSize {
    /// One person: one small cake.
    Small,
    /// Two or more people: one large cake to share.
    Large,
}

/// One entry of the final schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CakeDay {
    /// Delivery date.
    pub date: Date,
    /// Number of people celebrating.
    pub cake_count: CakeCount,
    /// Everyone celebrating on this date.
    pub names: Vec<String>,
}

impl CakeDay {
    /// A single large cake for two or more people, otherwise a small one.
    pub fn size(&self) -> CakeSize {
        if self.cake_count > 1 {
            CakeSize::Large
        } else {
            CakeSize::Small
        }
    }

    /// `(small_cakes, large_cakes)`; exactly one of the two is `1`.
    pub fn cake_columns(&self) -> (u8, u8) {
        match self.size() {
            CakeSize::Small => (1, 0),
            CakeSize::Large => (0, 1),
        }
    }

    /// Names joined with `", "`.
    pub fn joined_names(&self) -> String {
        self.names.join(", ")
    }
}

impl From<&DayGroup> for CakeDay {
    fn from(group: &DayGroup) -> Self {
        CakeDay {
            date: group.date,
            cake_count: group.cake_count,
            names: group.names.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cake_day(count: CakeCount, names: &[&str]) -> CakeDay {
        CakeDay {
            date: Date::from_ymd(2024, 7, 23).unwrap(),
            cake_count: count,
            names: names.iter().map(|n| n.to_string()).collect(),
        }
    }

    #[test]
    fn single_person_gets_small_cake() {
        let day = cake_day(1, &["Steve"]);
        assert_eq!(day.size(), CakeSize::Small);
        assert_eq!(day.cake_columns(), (1, 0));
        assert_eq!(day.joined_names(), "Steve");
    }

    #[test]
    fn three_way_share_is_still_one_large_cake() {
        let day = cake_day(3, &["Alice", "Bob", "Carol"]);
        assert_eq!(day.size(), CakeSize::Large);
        assert_eq!(day.cake_columns(), (0, 1));
        assert_eq!(day.joined_names(), "Alice, Bob, Carol");
    }
}
