//! End-to-end tests for importing NUnit report files.
//!
//! Uses the fixture reports under `tests/fixtures/nunit`.

use std::fs;
use std::path::{Path, PathBuf};

use nunit_report::{accept, aggregate, parse_file, ParseError, UnitTestResults};
use pretty_assertions::assert_eq;

/// Path of a fixture report.
fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("nunit")
        .join(name)
}

fn import(name: &str) -> UnitTestResults {
    let mut results = UnitTestResults::new();
    accept(fixture(name), &mut results)
        .unwrap_or_else(|e| panic!("Failed to import {name}: {e}"));
    results
}

#[test]
fn test_valid() {
    let results = import("valid.xml");

    assert_eq!(results.errors(), 30);
    assert_eq!(results.failures(), 20);
    assert_eq!(results.tests(), 200);
    assert_eq!(results.skipped(), 9); // 4 + 3 + 2
    assert_eq!(results.execution_time(), Some(51));
}

#[test]
fn test_valid_comma_in_double() {
    let results = import("valid_comma_in_double.xml");

    assert_eq!(results.execution_time(), Some(1051));
}

#[test]
fn test_valid_no_execution_time() {
    let results = import("valid_no_execution_time.xml");

    assert_eq!(results.failures(), 20);
    assert_eq!(results.errors(), 30);
    assert_eq!(results.tests(), 200);
    assert_eq!(results.skipped(), 9);
    assert_eq!(results.execution_time(), None);
}

#[test]
fn test_no_counters() {
    let path = fixture("no_counters.xml");
    let err = parse_file(&path).unwrap_err();

    assert_eq!(
        err.to_string(),
        format!(
            "Missing attribute \"total\" in element <test-results> in {}",
            path.display()
        )
    );
}

#[test]
fn test_invalid_total() {
    let path = fixture("invalid_total.xml");
    let err = parse_file(&path).unwrap_err();

    assert_eq!(
        err.to_string(),
        format!(
            "Expected an integer instead of \"invalid\" for the attribute \"total\" in {}",
            path.display()
        )
    );
}

#[test]
fn test_nunit3_sample() {
    let results = import("nunit3_sample.xml");

    assert_eq!(results.failures(), 2);
    assert_eq!(results.errors(), 1);
    assert_eq!(results.tests(), 18);
    assert_eq!(results.skipped(), 4); // 1 + 3
    assert_eq!(results.execution_time(), Some(154));
}

#[test]
fn test_nunit3_suites_without_run_totals() {
    assert_eq!(import("nunit3_suites.xml"), import("nunit3_sample.xml"));
}

#[test]
fn test_nunit2_clock_time_reads_suite_durations() {
    let results = import("nunit2_clock_time.xml");

    assert_eq!(results.tests(), 12);
    assert_eq!(results.errors(), 1);
    assert_eq!(results.failures(), 2);
    assert_eq!(results.skipped(), 6);
    assert_eq!(results.execution_time(), Some(312));
}

#[test]
fn test_unknown_root() {
    let path = fixture("unknown_root.xml");
    let err = parse_file(&path).unwrap_err();

    assert!(matches!(err, ParseError::UnrecognizedRoot { ref root, .. } if root == "assemblies"));
    assert!(err.to_string().ends_with(&path.display().to_string()));
}

#[test]
fn test_malformed_xml() {
    let err = parse_file(fixture("malformed.xml")).unwrap_err();
    assert!(matches!(err, ParseError::Xml { .. }));
}

#[test]
fn test_accumulates_across_files() {
    let mut results = UnitTestResults::new();
    accept(fixture("valid.xml"), &mut results).unwrap();
    accept(fixture("nunit3_sample.xml"), &mut results).unwrap();

    assert_eq!(results.tests(), 218);
    assert_eq!(results.errors(), 31);
    assert_eq!(results.failures(), 22);
    assert_eq!(results.skipped(), 13);
    assert_eq!(results.execution_time(), Some(205));
}

#[test]
fn test_merge_is_order_independent() {
    let names = [
        "valid.xml",
        "valid_no_execution_time.xml",
        "nunit3_sample.xml",
        "nunit2_clock_time.xml",
    ];

    let forward = aggregate(names.iter().map(|n| fixture(n))).unwrap();
    let backward = aggregate(names.iter().rev().map(|n| fixture(n))).unwrap();
    let independent: UnitTestResults = names.iter().map(|n| import(n)).sum();

    assert_eq!(forward, backward);
    assert_eq!(forward, independent);
}

#[test]
fn test_time_stays_absent_across_untimed_files() {
    let results = aggregate([
        fixture("valid_no_execution_time.xml"),
        fixture("valid_no_execution_time.xml"),
    ])
    .unwrap();

    assert_eq!(results.tests(), 400);
    assert_eq!(results.execution_time(), None);
}

#[test]
fn test_failed_file_leaves_accumulator_untouched() {
    let mut results = import("valid.xml");
    let before = results;

    assert!(accept(fixture("invalid_total.xml"), &mut results).is_err());
    assert_eq!(results, before);
}

#[test]
fn test_aggregate_stops_at_first_error() {
    let err = aggregate([
        fixture("valid.xml"),
        fixture("no_counters.xml"),
        fixture("invalid_total.xml"),
    ])
    .unwrap_err();

    assert!(matches!(err, ParseError::MissingAttribute { .. }));
}

#[test]
fn test_error_carries_absolute_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("TestResult.xml");
    fs::write(&path, r#"<test-results errors="0" failures="0"/>"#).unwrap();

    let err = parse_file(&path).unwrap_err();
    assert!(err.path().is_absolute());
    assert_eq!(
        err.to_string(),
        format!(
            "Missing attribute \"total\" in element <test-results> in {}",
            path.display()
        )
    );
}

#[test]
fn test_utf8_bom_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("TestResult.xml");
    fs::write(
        &path,
        "\u{feff}<?xml version=\"1.0\" encoding=\"utf-8\"?><test-run total=\"1\" failed=\"0\" duration=\"0,001\"/>",
    )
    .unwrap();

    let results = parse_file(&path).unwrap();
    assert_eq!(results.tests(), 1);
    assert_eq!(results.execution_time(), Some(1));
}
