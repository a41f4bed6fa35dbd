//! Catalog loaders for the two source-sheet layouts.
//!
//! Two genuinely different upstream sheets feed this system, and they make
//! different completeness guarantees, so the loader keeps two explicit
//! variants rather than merging them:
//!
//! - [`Layout::Fixed`]: a fixed-position sheet with branding rows above
//!   the data. It promises complete rows, so rows missing a title, start
//!   time, or end time are **dropped**. It has no id column; ids are
//!   synthesized row ordinals.
//! - [`Layout::Named`]: a header-driven sheet with named columns and a
//!   stable `ID` column. It tolerates gaps: missing or unparseable times
//!   and dates become absent fields that the overlap predicates handle
//!   downstream.
//!
//! Merging the variants would silently change which rows are dropped
//! versus tolerated, an observable behavior difference.

use std::path::Path;

use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::error::{CatalogError, Result};
use crate::normalize::{parse_date_dayfirst, parse_time, split_time_range};
use crate::record::{CourseId, CourseRecord};
use crate::table::{cell, parse_table, row_is_blank, sniff_delimiter};

/// Which sheet shape the loader should expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Fixed-position columns, data starting after `skip_rows` leading
    /// rows. Strict about row completeness.
    Fixed {
        /// Leading rows (branding plus the header itself) to skip before
        /// the data region. See [`DEFAULT_SKIP_ROWS`].
        skip_rows: usize,
    },
    /// Header row with named columns. Permissive about missing fields.
    Named,
}

/// Leading rows of the fixed-position source sheet: four branding/label
/// rows and one header row.
pub const DEFAULT_SKIP_ROWS: usize = 5;

/// Fixed-layout column positions:
/// `Day, TimeSlotLabel, Title, Room, StartTime, EndTime, StartDate, EndDate`.
/// The time-slot label is display clutter in the source sheet and is not
/// carried into records.
mod fixed_col {
    pub const DAY: usize = 0;
    pub const TITLE: usize = 2;
    pub const ROOM: usize = 3;
    pub const START_TIME: usize = 4;
    pub const END_TIME: usize = 5;
    pub const START_DATE: usize = 6;
    pub const END_DATE: usize = 7;
}

/// Load a catalog from a delimited-text export, sniffing the delimiter.
///
/// # Errors
///
/// [`CatalogError::Io`] if the file cannot be read, plus everything
/// [`catalog_from_str`] can return.
pub fn load_catalog(path: impl AsRef<Path>, layout: Layout) -> Result<Catalog> {
    load_catalog_with_delimiter(path, layout, None)
}

/// Load a catalog, forcing a specific delimiter instead of sniffing.
pub fn load_catalog_with_delimiter(
    path: impl AsRef<Path>,
    layout: Layout,
    delimiter: Option<char>,
) -> Result<Catalog> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = catalog_from_str(&text, layout, delimiter)?;
    info!(
        path = %path.display(),
        courses = catalog.len(),
        "catalog loaded"
    );
    Ok(catalog)
}

/// Build a catalog from already-read text. The parsing seam used by tests
/// and by [`load_catalog`].
///
/// # Errors
///
/// - [`CatalogError::EmptyTable`] when no data rows survive,
/// - [`CatalogError::MissingColumns`] when the named layout's header lacks
///   `ID`, `CourseTitle`, or `Day`,
/// - [`CatalogError::DuplicateId`] when the named layout repeats an id.
pub fn catalog_from_str(text: &str, layout: Layout, delimiter: Option<char>) -> Result<Catalog> {
    let delimiter = delimiter.unwrap_or_else(|| sniff_delimiter(text));
    let rows = parse_table(text, delimiter);

    let records = match layout {
        Layout::Fixed { skip_rows } => build_fixed(&rows, skip_rows),
        Layout::Named => build_named(&rows)?,
    };

    if records.is_empty() {
        return Err(CatalogError::EmptyTable);
    }
    Ok(Catalog::new(records))
}

/// Fixed-position sheet: positional columns, synthesized ids, strict rows.
fn build_fixed(rows: &[Vec<String>], skip_rows: usize) -> Vec<CourseRecord> {
    let data = rows.get(skip_rows..).unwrap_or(&[]);

    let mut records = Vec::new();
    for (offset, row) in data.iter().enumerate() {
        if row_is_blank(row) {
            continue;
        }

        let title = cell(row, fixed_col::TITLE).trim();
        let start_raw = cell(row, fixed_col::START_TIME).trim();
        let end_raw = cell(row, fixed_col::END_TIME).trim();

        // This sheet promises complete rows; incomplete ones are noise
        // (section separators, leftover formatting) and are dropped.
        if title.is_empty() || start_raw.is_empty() || end_raw.is_empty() {
            debug!(row = skip_rows + offset + 1, "dropping incomplete row");
            continue;
        }

        records.push(CourseRecord {
            id: CourseId::from_ordinal(offset + 1),
            title: title.to_string(),
            day: cell(row, fixed_col::DAY).trim().to_string(),
            start_time: parse_time(start_raw),
            end_time: parse_time(end_raw),
            start_date: parse_date_dayfirst(cell(row, fixed_col::START_DATE)),
            end_date: parse_date_dayfirst(cell(row, fixed_col::END_DATE)),
            teacher: String::new(),
            room: cell(row, fixed_col::ROOM).trim().to_string(),
        });
    }
    records
}

/// Header-driven sheet: named columns, stable ids, absent-tolerant rows.
fn build_named(rows: &[Vec<String>]) -> Result<Vec<CourseRecord>> {
    let Some((header, data)) = rows.split_first() else {
        return Err(CatalogError::EmptyTable);
    };

    let find = |name: &str| {
        header
            .iter()
            .position(|cell_text| cell_text.trim() == name)
    };

    let id_col = find("ID");
    let title_col = find("CourseTitle");
    let day_col = find("Day");

    let (Some(id_col), Some(title_col), Some(day_col)) = (id_col, title_col, day_col) else {
        let missing: Vec<&str> = [("ID", id_col), ("CourseTitle", title_col), ("Day", day_col)]
            .iter()
            .filter(|(_, col)| col.is_none())
            .map(|(name, _)| *name)
            .collect();
        return Err(CatalogError::MissingColumns(missing.join(", ")));
    };

    let start_date_col = find("StartDate");
    let end_date_col = find("EndDate");
    let teacher_col = find("Teacher");
    let room_col = find("Aula");
    let start_time_col = find("StartTime");
    let end_time_col = find("EndTime");
    // A single combined range column stands in when the separate
    // start/end columns are not both present.
    let time_range_col = find("TimeRange");

    let get = |row: &[String], col: Option<usize>| -> String {
        col.map_or(String::new(), |i| cell(row, i).trim().to_string())
    };

    let mut records: Vec<CourseRecord> = Vec::new();
    for row in data {
        if row_is_blank(row) {
            continue;
        }

        let raw_id = cell(row, id_col).trim();
        if raw_id.is_empty() {
            debug!("skipping row without an id");
            continue;
        }
        let id = CourseId::new(raw_id);
        if records.iter().any(|r| r.id == id) {
            return Err(CatalogError::DuplicateId(id.to_string()));
        }

        let (start_time, end_time) = match (start_time_col, end_time_col) {
            (Some(s), Some(e)) => (parse_time(cell(row, s)), parse_time(cell(row, e))),
            _ => match time_range_col {
                Some(tr) => split_time_range(cell(row, tr)),
                None => (None, None),
            },
        };

        records.push(CourseRecord {
            id,
            title: cell(row, title_col).trim().to_string(),
            day: cell(row, day_col).trim().to_string(),
            start_time,
            end_time,
            start_date: parse_date_dayfirst(&get(row, start_date_col)),
            end_date: parse_date_dayfirst(&get(row, end_date_col)),
            teacher: get(row, teacher_col),
            room: get(row, room_col),
        });
    }

    Ok(records)
}
