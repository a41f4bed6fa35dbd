//! Tests for conflict-list export serialization.

use catalog_core::export::{conflict_rows, write_delimited, write_json, ConflictRow};
use catalog_core::{CourseId, CourseRecord};
use chrono::{NaiveDate, NaiveTime};

fn record() -> CourseRecord {
    CourseRecord {
        id: CourseId::new("7"),
        title: "Storia dell'arte".to_string(),
        day: "Lunedì".to_string(),
        start_time: NaiveTime::from_hms_opt(9, 5, 0),
        end_time: NaiveTime::from_hms_opt(11, 0, 0),
        start_date: NaiveDate::from_ymd_opt(2025, 2, 1),
        end_date: NaiveDate::from_ymd_opt(2025, 6, 30),
        teacher: "Verdi".to_string(),
        room: "Aula 2".to_string(),
    }
}

#[test]
fn rows_are_formatted_for_display() {
    let record = record();
    let rows = conflict_rows([&record]);

    assert_eq!(
        rows[0],
        ConflictRow {
            title: "Storia dell'arte".to_string(),
            id: "7".to_string(),
            start_time: "09:05".to_string(),
            end_time: "11:00".to_string(),
            start_date: "01/02/2025".to_string(),
            end_date: "30/06/2025".to_string(),
            teacher: "Verdi".to_string(),
            room: "Aula 2".to_string(),
        }
    );
}

#[test]
fn absent_fields_render_empty() {
    let mut record = record();
    record.start_time = None;
    record.end_date = None;

    let rows = conflict_rows([&record]);
    assert_eq!(rows[0].start_time, "");
    assert_eq!(rows[0].end_date, "");
}

#[test]
fn csv_has_fixed_header_and_column_order() {
    let record = record();
    let rows = conflict_rows([&record]);

    let csv = write_delimited(&rows, ',');
    let mut lines = csv.lines();

    assert_eq!(
        lines.next().unwrap(),
        "Title,Id,StartTime,EndTime,StartDate,EndDate,Teacher,Room"
    );
    assert_eq!(
        lines.next().unwrap(),
        "Storia dell'arte,7,09:05,11:00,01/02/2025,30/06/2025,Verdi,Aula 2"
    );
    assert_eq!(lines.next(), None);
}

#[test]
fn fields_containing_the_delimiter_are_quoted() {
    let mut record = record();
    record.title = "Storia, arte e musica".to_string();

    let csv = write_delimited(&conflict_rows([&record]), ',');
    assert!(csv.contains("\"Storia, arte e musica\""));

    // The same title needs no quoting under a tab delimiter.
    let tsv = write_delimited(&conflict_rows([&record]), '\t');
    assert!(tsv.contains("Storia, arte e musica\t7"));
}

#[test]
fn embedded_quotes_are_doubled() {
    let mut record = record();
    record.title = "il \"Corso\"".to_string();

    let csv = write_delimited(&conflict_rows([&record]), ',');
    assert!(csv.contains("\"il \"\"Corso\"\"\""));
}

#[test]
fn empty_result_is_just_the_header() {
    let csv = write_delimited(&[], ',');
    assert_eq!(csv, "Title,Id,StartTime,EndTime,StartDate,EndDate,Teacher,Room\n");
}

#[test]
fn json_export_round_trips_through_serde() {
    let record = record();
    let json = write_json(&conflict_rows([&record])).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed[0]["title"], "Storia dell'arte");
    assert_eq!(parsed[0]["start_time"], "09:05");
    assert_eq!(parsed[0]["end_date"], "30/06/2025");
}
