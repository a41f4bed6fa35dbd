//! Integration tests for the `clash` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the list,
//! check, and export subcommands through the actual binary, over fixture
//! catalogs in both supported layouts.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the named-layout fixture.
fn named_fixture() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/corsi_named.csv")
}

/// Helper: path to the fixed-layout fixture.
fn fixed_fixture() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/orario_fixed.csv")
}

fn clash() -> Command {
    Command::cargo_bin("clash").unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// List subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn list_shows_ids_and_disambiguated_titles() {
    clash()
        .args(["-f", named_fixture(), "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 - Acquerello"))
        .stdout(predicate::str::contains("3 - Acquerello (2)"))
        .stdout(predicate::str::contains("2 - Storia dell'arte"));
}

#[test]
fn list_is_sorted_alphabetically() {
    let output = clash()
        .args(["-f", named_fixture(), "list"])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    let labels: Vec<&str> = stdout
        .lines()
        .map(|line| line.split_once(" - ").unwrap().1)
        .collect();
    let mut sorted = labels.clone();
    sorted.sort_unstable();

    assert_eq!(labels, sorted, "menu must be alphabetical by label");
}

#[test]
fn list_works_for_fixed_layout() {
    clash()
        .args(["-f", fixed_fixture(), "--layout", "fixed", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 - Acquerello"))
        .stdout(predicate::str::contains("2 - Coro"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Check subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn check_reports_the_overlapping_course() {
    clash()
        .args(["-f", named_fixture(), "check", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Course: Acquerello (1)"))
        .stdout(predicate::str::contains("Storia dell'arte (2)"))
        .stdout(predicate::str::contains("[60 min overlap]"))
        // Same day but only touching at 12:00, and the Tuesday twin.
        .stdout(predicate::str::contains("Ginnastica dolce").not());
}

#[test]
fn check_excludes_touching_intervals_but_keeps_crossing_ones() {
    clash()
        .args(["-f", named_fixture(), "check", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Storia dell'arte (2)"))
        .stdout(predicate::str::contains("Acquerello (1)").not());
}

#[test]
fn check_reports_no_overlap_when_clean() {
    clash()
        .args(["-f", named_fixture(), "check", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No overlapping courses."));
}

#[test]
fn check_unknown_id_fails_with_lookup_error() {
    clash()
        .args(["-f", named_fixture(), "check", "999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("course not found: 999"));
}

#[test]
fn check_works_for_fixed_layout() {
    clash()
        .args(["-f", fixed_fixture(), "--layout", "fixed", "check", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Coro (2)"));
}

#[test]
fn missing_catalog_file_fails() {
    clash()
        .args(["-f", "/nonexistent/corsi.csv", "check", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load catalog"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Export subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn export_csv_to_stdout() {
    clash()
        .args(["-f", named_fixture(), "export", "1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Title,Id,StartTime,EndTime,StartDate,EndDate,Teacher,Room",
        ))
        .stdout(predicate::str::contains(
            "Storia dell'arte,2,11:00,13:00,01/02/2025,15/02/2025,Verdi,Aula 2",
        ));
}

#[test]
fn export_to_file() {
    let output_path = std::env::temp_dir().join("clash-test-export-output.csv");
    let _ = std::fs::remove_file(&output_path);

    clash()
        .args([
            "-f",
            named_fixture(),
            "export",
            "1",
            "-o",
            output_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    let content = std::fs::read_to_string(&output_path).expect("output file must exist");
    assert!(content.contains("Storia dell'arte"));
    assert!(
        content.lines().count() == 2,
        "header plus exactly one conflict row"
    );

    let _ = std::fs::remove_file(&output_path);
}

#[test]
fn export_tsv_uses_tabs() {
    clash()
        .args(["-f", named_fixture(), "export", "1", "--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Title\tId\tStartTime"));
}

#[test]
fn export_json_is_parseable() {
    let output = clash()
        .args(["-f", named_fixture(), "export", "1", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed[0]["title"], "Storia dell'arte");
    assert_eq!(parsed[0]["start_time"], "11:00");
}

#[test]
fn export_unknown_id_fails() {
    clash()
        .args(["-f", named_fixture(), "export", "999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("course not found"));
}
