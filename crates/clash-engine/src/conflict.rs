//! Conflict enumeration: which courses clash with a selected reference.

use serde::Serialize;

use catalog_core::{Catalog, CourseId, CourseRecord};

use crate::error::{ClashError, Result};
use crate::overlap::{date_overlap, overlap_minutes, time_overlap};

/// A course found to clash with the reference course.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conflict {
    /// The clashing course.
    pub record: CourseRecord,
    /// How long the clock-time intervals overlap, in minutes.
    pub overlap_minutes: i64,
}

/// Find every course that clashes with the reference course.
///
/// A clash requires all three dimensions to agree: same day-of-week
/// (string equality on the source vocabulary), overlapping clock-time
/// intervals (strict), and overlapping active date ranges (inclusive).
/// The reference course itself is excluded by id, never by title, so
/// duplicate titles cannot leak the reference back into its own result.
///
/// The result is ordered by start time ascending; records with an absent
/// start time sort last, and ties keep their catalog order.
///
/// Pure and synchronous: one pass over the catalog, no side effects.
///
/// # Errors
///
/// [`ClashError::CourseNotFound`] when `reference_id` matches no record.
pub fn find_conflicts(catalog: &Catalog, reference_id: &CourseId) -> Result<Vec<Conflict>> {
    let reference = catalog
        .get(reference_id)
        .ok_or_else(|| ClashError::CourseNotFound(reference_id.to_string()))?;

    let mut conflicts: Vec<Conflict> = catalog
        .iter()
        .filter(|record| record.day == reference.day)
        .filter(|record| record.id != reference.id)
        .filter(|record| time_overlap(reference, record) && date_overlap(reference, record))
        .map(|record| Conflict {
            record: record.clone(),
            // A true time_overlap means all four times are present.
            overlap_minutes: overlap_minutes(reference, record).unwrap_or(0),
        })
        .collect();

    // Stable sort: equal start times keep their catalog order, and
    // `(is_none, time)` pushes absent start times to the back.
    conflicts.sort_by_key(|c| (c.record.start_time.is_none(), c.record.start_time));

    Ok(conflicts)
}
