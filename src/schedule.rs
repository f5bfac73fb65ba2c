use std::cmp::Ordering;
use crate::constants::ON_CALL;
use crate::models::ScheduleRecord;

/// Compare two start strings for the service board
///
/// `On-Call` sorts after everything else. Other values compare lexically, which
/// is only chronological for zero-padded 24-hour times.
#[must_use]
pub fn compare_start_times(a: &str, b: &str) -> Ordering {
    match (a == ON_CALL, b == ON_CALL) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.cmp(b),
    }
}

/// Sort the board by start time in place; ties keep their input order
pub fn sort_schedule(records: &mut [ScheduleRecord]) {
    records.sort_by(|a, b| compare_start_times(a.start_time(), b.start_time()));
}

/// Load-time view of the schedule page: normalized and sorted once
#[must_use]
pub fn build_board(mut records: Vec<ScheduleRecord>) -> Vec<ScheduleRecord> {
    sort_schedule(&mut records);
    records
}
