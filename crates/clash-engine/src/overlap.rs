//! The two overlap predicates: clock-time intervals and date ranges.
//!
//! The predicates deliberately disagree about endpoints and about absent
//! values, matching the behavior of the system this engine replaces:
//!
//! - **time**: strict. Intervals that merely touch (one ends at 12:00, the
//!   other starts at 12:00) do NOT overlap. A record with an absent start
//!   or end time never time-overlaps anything: a course with unknown hours
//!   cannot be reported as clashing.
//! - **date**: inclusive. Ranges that touch at an endpoint DO overlap. A
//!   record with an absent start or end date overlaps everything on the
//!   date dimension: unknown duration is conservatively "could overlap".
//!
//! Nothing suggests the asymmetry is accidental; changing either side is a
//! product decision, not a cleanup.

use catalog_core::CourseRecord;

/// Do the two records' clock-time intervals overlap?
///
/// False whenever any of the four times is absent; otherwise
/// `a.start < b.end && b.start < a.end` (strict inequalities, so adjacent
/// intervals are not overlaps). Symmetric in its arguments.
pub fn time_overlap(a: &CourseRecord, b: &CourseRecord) -> bool {
    match (a.start_time, a.end_time, b.start_time, b.end_time) {
        (Some(a_start), Some(a_end), Some(b_start), Some(b_end)) => {
            a_start < b_end && b_start < a_end
        }
        _ => false,
    }
}

/// Do the two records' active date ranges overlap?
///
/// True whenever any of the four dates is absent; otherwise
/// `!(a.end < b.start || b.end < a.start)` (inclusive ranges, so touching
/// endpoints are overlaps). Symmetric in its arguments.
pub fn date_overlap(a: &CourseRecord, b: &CourseRecord) -> bool {
    match (a.start_date, a.end_date, b.start_date, b.end_date) {
        (Some(a_start), Some(a_end), Some(b_start), Some(b_end)) => {
            !(a_end < b_start || b_end < a_start)
        }
        _ => true,
    }
}

/// Duration of the time overlap in minutes, when all four times are known.
///
/// `min(a.end, b.end) - max(a.start, b.start)`; callers that already hold
/// a true [`time_overlap`] always get `Some` of a positive value.
pub fn overlap_minutes(a: &CourseRecord, b: &CourseRecord) -> Option<i64> {
    match (a.start_time, a.end_time, b.start_time, b.end_time) {
        (Some(a_start), Some(a_end), Some(b_start), Some(b_end)) => {
            let start = a_start.max(b_start);
            let end = a_end.min(b_end);
            Some((end - start).num_minutes())
        }
        _ => None,
    }
}
