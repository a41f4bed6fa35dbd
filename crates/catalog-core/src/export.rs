//! On-demand serialization of conflict results.
//!
//! Pure projections of records that already came out of the overlap
//! engine: nothing here recomputes or filters. Two forms are offered, a
//! delimited table (comma for the spreadsheet-compatible file, `;` or tab
//! for plain delimited text) and pretty-printed JSON.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use crate::error::Result;
use crate::record::CourseRecord;

/// Export column order, fixed by the downstream consumers.
pub const COLUMNS: [&str; 8] = [
    "Title",
    "Id",
    "StartTime",
    "EndTime",
    "StartDate",
    "EndDate",
    "Teacher",
    "Room",
];

/// Render a time for display/export as `HH:MM`; absent values are empty.
pub fn fmt_time(time: Option<NaiveTime>) -> String {
    time.map_or(String::new(), |t| t.format("%H:%M").to_string())
}

/// Render a date for display/export as `DD/MM/YYYY`; absent values are empty.
pub fn fmt_date(date: Option<NaiveDate>) -> String {
    date.map_or(String::new(), |d| d.format("%d/%m/%Y").to_string())
}

/// One exportable row of a conflict listing, all fields pre-formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConflictRow {
    pub title: String,
    pub id: String,
    pub start_time: String,
    pub end_time: String,
    pub start_date: String,
    pub end_date: String,
    pub teacher: String,
    pub room: String,
}

impl ConflictRow {
    /// Project a record into its export form.
    pub fn from_record(record: &CourseRecord) -> Self {
        Self {
            title: record.title.clone(),
            id: record.id.to_string(),
            start_time: fmt_time(record.start_time),
            end_time: fmt_time(record.end_time),
            start_date: fmt_date(record.start_date),
            end_date: fmt_date(record.end_date),
            teacher: record.teacher.clone(),
            room: record.room.clone(),
        }
    }

    fn fields(&self) -> [&str; 8] {
        [
            &self.title,
            &self.id,
            &self.start_time,
            &self.end_time,
            &self.start_date,
            &self.end_date,
            &self.teacher,
            &self.room,
        ]
    }
}

/// Project a conflict result into export rows, preserving order.
pub fn conflict_rows<'a>(records: impl IntoIterator<Item = &'a CourseRecord>) -> Vec<ConflictRow> {
    records.into_iter().map(ConflictRow::from_record).collect()
}

/// Serialize rows as delimited text with a header line.
///
/// Fields are quoted only when they contain the delimiter, a quote, or a
/// newline; embedded quotes are doubled. Lines end with `\n`.
pub fn write_delimited(rows: &[ConflictRow], delimiter: char) -> String {
    let mut out = String::new();
    push_row(&mut out, &COLUMNS, delimiter);
    for row in rows {
        push_row(&mut out, &row.fields(), delimiter);
    }
    out
}

/// Serialize rows as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`crate::error::CatalogError::Json`] if serialization fails.
pub fn write_json(rows: &[ConflictRow]) -> Result<String> {
    Ok(serde_json::to_string_pretty(rows)?)
}

fn push_row(out: &mut String, fields: &[&str], delimiter: char) {
    let mut first = true;
    for field in fields {
        if !first {
            out.push(delimiter);
        }
        first = false;
        out.push_str(&escape_field(field, delimiter));
    }
    out.push('\n');
}

fn escape_field(field: &str, delimiter: char) -> String {
    if field.contains(delimiter) || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
