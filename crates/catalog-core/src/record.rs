//! The course record type and its canonical identifier.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Canonical course identifier.
///
/// Source sheets store ids inconsistently: the named layout may hold plain
/// integers, integer-valued floats (a spreadsheet-export artifact, e.g.
/// `12.0`), or free strings; the fixed layout has no id column at all and
/// ids are synthesized from row ordinals. Everything normalizes to one
/// trimmed decimal-string form here so id comparison never mixes
/// representations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourseId(String);

impl CourseId {
    /// Create an id from raw cell text, normalizing to canonical form.
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim();
        // Spreadsheet exports render integer ids as floats ("12.0").
        // Collapse integral floats back to their integer form.
        if trimmed.contains('.') {
            if let Ok(f) = trimmed.parse::<f64>() {
                if f.fract() == 0.0 && f.abs() < 1e15 {
                    return Self(format!("{}", f as i64));
                }
            }
        }
        Self(trimmed.to_string())
    }

    /// Synthesize an id for a layout without an id column.
    ///
    /// `ordinal` is the 1-based position of the row in the data region,
    /// counted before any rows are dropped, so ids stay stable with
    /// respect to the source sheet.
    pub fn from_ordinal(ordinal: usize) -> Self {
        Self(ordinal.to_string())
    }

    /// Return the canonical id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CourseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One scheduled course offering, fully normalized at load time.
///
/// Times and dates are optional: a value that was missing in the source or
/// failed to parse is `None`, and the overlap predicates give absent values
/// a documented meaning (absent time never clashes, absent date always
/// clashes). No raw cell text survives into this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Unique within a catalog; the key used for lookup and self-exclusion.
    pub id: CourseId,
    /// Display name. Not guaranteed unique across records.
    pub title: String,
    /// Day-of-week exactly as the source spells it (e.g. localized day
    /// names). Compared by string equality only.
    pub day: String,
    /// Start of the clock-time interval, when known.
    pub start_time: Option<NaiveTime>,
    /// End of the clock-time interval, when known.
    pub end_time: Option<NaiveTime>,
    /// First day the course runs, when known. Inclusive.
    pub start_date: Option<NaiveDate>,
    /// Last day the course runs, when known. Inclusive.
    pub end_date: Option<NaiveDate>,
    /// Free-text teacher name(s). Empty when the source has no such column.
    pub teacher: String,
    /// Free-text room/venue. Empty when the source has no such column.
    pub room: String,
}
