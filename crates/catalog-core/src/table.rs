//! Minimal delimited-table reader for spreadsheet exports.
//!
//! Source catalogs arrive as delimited-text exports of the original
//! spreadsheets. This module turns raw file content into a rectangular
//! `Vec<Vec<String>>`, handling the quirks such exports actually have:
//!
//! - `;`, `,`, or tab delimiters (Italian locale exports default to `;`)
//! - double-quoted fields with doubled-quote escapes
//! - delimiters and newlines embedded inside quoted fields
//! - CRLF line endings and trailing blank lines
//!
//! Cell values are returned verbatim (minus the quoting); all trimming and
//! interpretation happens downstream in the loader.

/// Guess the delimiter from the first non-empty line.
///
/// Counts candidate delimiters outside quotes and picks the most frequent;
/// falls back to `,` when the line contains none of them.
pub fn sniff_delimiter(text: &str) -> char {
    let line = text.lines().find(|l| !l.trim().is_empty()).unwrap_or("");

    let mut counts = [(';', 0usize), (',', 0), ('\t', 0)];
    let mut in_quotes = false;
    for c in line.chars() {
        if c == '"' {
            in_quotes = !in_quotes;
            continue;
        }
        if in_quotes {
            continue;
        }
        for entry in counts.iter_mut() {
            if c == entry.0 {
                entry.1 += 1;
            }
        }
    }

    counts
        .iter()
        .max_by_key(|(_, n)| *n)
        .filter(|(_, n)| *n > 0)
        .map_or(',', |(c, _)| *c)
}

/// Split delimited text into rows of cells.
///
/// A quoted field starts at a `"` directly after a delimiter or line start
/// and runs to the matching close quote; `""` inside it is a literal quote.
/// Newlines inside quoted fields belong to the field, not the row
/// structure. Rows that contain nothing but empty cells are kept (the
/// loader decides what to do with them), except for a single trailing
/// empty row produced by a final newline.
pub fn parse_table(text: &str, delimiter: char) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    // Doubled quote: literal '"' inside a quoted field.
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
            continue;
        }

        match c {
            '"' if field.is_empty() => in_quotes = true,
            '\r' => {
                // Part of CRLF; the '\n' that follows ends the row.
                if chars.peek() != Some(&'\n') {
                    field.push('\r');
                }
            }
            '\n' => {
                row.push(std::mem::take(&mut field));
                rows.push(std::mem::take(&mut row));
            }
            _ if c == delimiter => {
                row.push(std::mem::take(&mut field));
            }
            _ => field.push(c),
        }
    }

    // Final row without a trailing newline.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    // Drop trailing rows that are entirely empty (blank lines at EOF).
    while rows
        .last()
        .is_some_and(|r| r.iter().all(|cell| cell.trim().is_empty()))
    {
        rows.pop();
    }

    rows
}

/// True when every cell of the row is blank.
pub fn row_is_blank(row: &[String]) -> bool {
    row.iter().all(|cell| cell.trim().is_empty())
}

/// Fetch a cell by index, treating short rows as padded with empty cells.
pub fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map_or("", |s| s.as_str())
}
