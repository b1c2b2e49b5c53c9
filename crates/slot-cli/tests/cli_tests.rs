//! Integration tests for the `slots` CLI binary.
//!
//! These use `assert_cmd` and `predicates` to exercise the unpack, free, and
//! check subcommands through the actual binary, including fixture loading,
//! exit codes, and error reporting.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the rules.json fixture.
fn rules_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/rules.json")
}

/// Helper: path to the bookings.json fixture.
fn bookings_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/bookings.json")
}

/// Helper: path to the bad_rules.json fixture (inverted time-of-day window).
fn bad_rules_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/bad_rules.json")
}

fn slots() -> Command {
    Command::cargo_bin("slots").unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Unpack subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn unpack_prints_day_grouped_units() {
    // 2026-03-02 is a Monday: the daily rule and the weekly rule both apply.
    let output = slots()
        .args([
            "unpack",
            "--rules",
            rules_path(),
            "--bookings",
            bookings_path(),
            "--start",
            "2026-03-02",
            "--days",
            "2",
            "--unit",
            "30",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let days: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let days = days.as_array().unwrap();
    assert_eq!(days.len(), 2);
    assert_eq!(days[0]["day"], "2026-03-02");

    // Monday: 09:00-11:00 minus the 10:00-10:30 booking gives three units,
    // plus four evening units from the weekly rule.
    assert_eq!(days[0]["units"].as_array().unwrap().len(), 7);
    // Tuesday: only the daily rule, unbooked.
    assert_eq!(days[1]["units"].as_array().unwrap().len(), 4);
}

#[test]
fn unpack_rejects_a_non_positive_unit() {
    slots()
        .args([
            "unpack",
            "--rules",
            rules_path(),
            "--bookings",
            bookings_path(),
            "--start",
            "2026-03-02",
            "--unit",
            "0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid duration"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Free subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn free_prints_unsplit_remainders() {
    let output = slots()
        .args([
            "free",
            "--rules",
            rules_path(),
            "--bookings",
            bookings_path(),
            "--start",
            "2026-03-02",
            "--days",
            "1",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let days: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let units = days[0]["units"].as_array().unwrap();
    // 09:00-10:00 and 10:30-11:00 from the daily rule, 18:00-20:00 from the
    // weekly rule -- un-split.
    assert_eq!(units.len(), 3);
    assert_eq!(units[0]["start"], "2026-03-02T09:00:00Z");
    assert_eq!(units[0]["end"], "2026-03-02T10:00:00Z");
    assert_eq!(units[1]["start"], "2026-03-02T10:30:00Z");
}

// ─────────────────────────────────────────────────────────────────────────────
// Check subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn check_accepts_a_fitting_request() {
    slots()
        .args([
            "check",
            "--rules",
            rules_path(),
            "--bookings",
            bookings_path(),
            "--rule",
            "1",
            "--start",
            "2026-03-02T10:30:00Z",
            "--duration",
            "30",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("feasible:"));
}

#[test]
fn check_rejects_a_request_overlapping_a_booking() {
    slots()
        .args([
            "check",
            "--rules",
            rules_path(),
            "--bookings",
            bookings_path(),
            "--rule",
            "1",
            "--start",
            "2026-03-02T09:45:00Z",
            "--duration",
            "30",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::starts_with("infeasible:"));
}

#[test]
fn check_rejects_an_inactive_day() {
    // Rule 2 is Mondays only; 2026-03-03 is a Tuesday.
    slots()
        .args([
            "check",
            "--rules",
            rules_path(),
            "--bookings",
            bookings_path(),
            "--rule",
            "2",
            "--start",
            "2026-03-03T18:00:00Z",
            "--duration",
            "30",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains("not active"));
}

#[test]
fn check_fails_on_an_unknown_rule_id() {
    slots()
        .args([
            "check",
            "--rules",
            rules_path(),
            "--bookings",
            bookings_path(),
            "--rule",
            "42",
            "--start",
            "2026-03-02T10:30:00Z",
            "--duration",
            "30",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no rule with id 42"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Input validation
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn malformed_rules_are_rejected_at_load_time() {
    slots()
        .args([
            "unpack",
            "--rules",
            bad_rules_path(),
            "--bookings",
            bookings_path(),
            "--start",
            "2026-03-02",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed rule 9"));
}

#[test]
fn missing_rules_file_reports_the_path() {
    slots()
        .args([
            "unpack",
            "--rules",
            "/nonexistent/rules.json",
            "--bookings",
            bookings_path(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("/nonexistent/rules.json"));
}
