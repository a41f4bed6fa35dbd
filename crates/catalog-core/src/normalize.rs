//! Field normalization: raw cell text to typed times and dates.
//!
//! Source sheets are hand-maintained and formats drift: times appear as
//! `10:00`, `10.00`, or `10:00:00`; dates are day-first with `/`, `-`, or
//! `.` separators; combined time ranges read `10.00-12.00` or
//! `dalle 10.00 alle 12.00`. Everything funnels into `Option` values:
//! a parse failure is a warning and an absent field, never an error.

use chrono::{NaiveDate, NaiveTime};
use tracing::warn;

/// Parse a time-of-day cell.
///
/// Accepts `HH:MM`, `H:MM`, `HH:MM:SS`, and the period-as-minute-separator
/// form `HH.MM`. Blank cells are absent without a warning; non-blank cells
/// that fail every format warn and come back absent.
pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let normalized = trimmed.replace('.', ":");
    for format in ["%H:%M:%S", "%H:%M"] {
        if let Ok(t) = NaiveTime::parse_from_str(&normalized, format) {
            return Some(t);
        }
    }

    warn!(value = raw, "unparseable time, treating as absent");
    None
}

/// Parse a calendar-date cell with the day-first convention.
///
/// Accepts `DD/MM/YYYY` (also with `-` or `.` separators) and ISO
/// `YYYY-MM-DD` as an unambiguous fallback. A trailing time-of-day part
/// (another spreadsheet-export artifact, e.g. `01/02/2025 00:00:00`) is
/// ignored. Blank cells are absent without a warning.
pub fn parse_date_dayfirst(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let normalized = trimmed.replace(['-', '.'], "/");
    let Some(date_part) = normalized.split_whitespace().next() else {
        return None;
    };

    // A four-digit leading segment means year-first (ISO); otherwise day-first.
    let format = match date_part.split('/').next() {
        Some(first) if first.len() == 4 => "%Y/%m/%d",
        _ => "%d/%m/%Y",
    };

    match NaiveDate::parse_from_str(date_part, format) {
        Ok(d) => Some(d),
        Err(_) => {
            warn!(value = raw, "unparseable date, treating as absent");
            None
        }
    }
}

/// Split a combined time-range cell into start and end times.
///
/// The raw text is normalized first: the locale words `dalle`/`alle`
/// ("from"/"to") are removed, dashes become spaces, and periods become
/// colons. The first two colon-bearing tokens are then the start and end.
/// One token found means the end is absent; none means both are.
///
/// Examples of accepted input: `10.00-12.00`, `10:00 12:00`,
/// `dalle 10.00 alle 12.00`.
pub fn split_time_range(raw: &str) -> (Option<NaiveTime>, Option<NaiveTime>) {
    if raw.trim().is_empty() {
        return (None, None);
    }

    let normalized = raw
        .to_lowercase()
        .replace("dalle", " ")
        .replace("alle", " ")
        .replace('-', " ")
        .replace('.', ":");

    let mut tokens = normalized.split_whitespace().filter(|t| t.contains(':'));
    let start = tokens.next().and_then(parse_time);
    let end = tokens.next().and_then(parse_time);
    (start, end)
}
