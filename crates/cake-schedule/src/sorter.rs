//! Chronological ordering of the final schedule.

use crate::records::CakeDay;

/// Sort `schedule` by date, ascending.  The sort is stable.
pub fn sort_schedule(schedule: &mut [CakeDay]) {
    schedule.sort_by_key(|day| day.date);
}
