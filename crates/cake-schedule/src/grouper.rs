//! Group candidate cake days by date.

use cake_time::Date;
use indexmap::IndexMap;

use crate::records::{CandidateCakeDay, DayGroup};

/// One [`DayGroup`] per distinct candidate date.
///
/// Groups come out in the order their date was first seen while walking
/// `cake_days`; within a group, names keep that same order.
pub fn group_by_day(cake_days: &[CandidateCakeDay]) -> Vec<DayGroup> {
    let mut groups: IndexMap<Date, DayGroup> = IndexMap::new();
    for candidate in cake_days {
        let group = groups.entry(candidate.date).or_insert_with(|| DayGroup {
            date: candidate.date,
            cake_count: 0,
            names: Vec::new(),
        });
        group.cake_count += 1;
        group.names.push(candidate.name.clone());
    }
    groups.into_values().collect()
}
