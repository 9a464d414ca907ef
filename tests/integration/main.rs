//! Integration tests for planex CLI
//!
//! These tests drive the binary against a board snapshot, testing the full
//! cycle of: export → beautify → re-export with other formats and filters

#[path = "../common/mod.rs"]
mod common;

// Include workflow tests from the same directory
mod workflow_test;

use std::fs;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

use common::write_snapshot;

/// Helper function to create a planex command with an isolated home
fn planex(home: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("planex"));
    cmd.env("HOME", home.path()).current_dir(home.path());
    cmd
}

// =============================================================================
// MARKDOWN REPORT
// =============================================================================

#[test]
fn test_markdown_report_lists_every_assignee() {
    let temp = TempDir::new().unwrap();
    let snapshot = write_snapshot(temp.path());
    let report = temp.path().join("report.md");

    planex(&temp)
        .arg("export")
        .arg("--source")
        .arg(&snapshot)
        .arg("--output")
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::contains("7 row(s) from 5 task(s)"))
        .stdout(predicate::str::contains("1 task(s) could not be processed"));

    let content = fs::read_to_string(&report).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "| Name | Role | Task | Bucket | Attachments | Status |");
    assert_eq!(lines[1], "| ---- | ---- | ---- | ------ | ----------- | ------ |");
    assert_eq!(
        lines[2],
        "| Alice | Main Contributor | Login flow | Backlog | https://github.com/org/app/pull/42 | In Progress |"
    );
    assert_eq!(
        lines[3],
        "| Alice | Main Contributor | Release | Review | https://github.com/org/app/pull/7 | Completed |"
    );
    assert_eq!(
        lines[4],
        "| Bob |  | Login flow | Backlog | https://github.com/org/app/pull/42 | In Progress |"
    );
    assert_eq!(
        lines[5],
        "| Carol | Reviewer | Login flow | Backlog | https://github.com/org/app/pull/42 | In Progress |"
    );
    assert_eq!(
        lines[6],
        "| Error Processing |  | Broken | Backlog | Error retrieving details | Unknown |"
    );
    assert_eq!(lines[7], "| Unassigned |  | Docs | Review | No references | Not Started |");
    assert_eq!(
        lines[8],
        "| u9 (unable to resolve) | Main Contributor | Ghost | Backlog | No GitHub links | Not Started |"
    );
    assert_eq!(lines.len(), 9);
}

#[test]
fn test_markdown_report_with_linked_pull_requests() {
    let temp = TempDir::new().unwrap();
    let snapshot = write_snapshot(temp.path());
    let report = temp.path().join("report.md");

    planex(&temp)
        .args(["export", "--beautify-links", "--columns", "Name,Attachments"])
        .arg("--source")
        .arg(&snapshot)
        .arg("--output")
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::contains("Linked 2 pull request(s)"));

    let content = fs::read_to_string(&report).unwrap();
    assert!(content.contains("| Alice | [PR#42](https://github.com/org/app/pull/42) |"));
    assert!(content.contains("| Alice | [PR#7](https://github.com/org/app/pull/7) |"));
    assert!(!content.contains("| https://github.com"));
}

// =============================================================================
// CSV AND JSON REPORTS
// =============================================================================

#[test]
fn test_csv_report_with_selected_columns() {
    let temp = TempDir::new().unwrap();
    let snapshot = write_snapshot(temp.path());
    let report = temp.path().join("report.csv");

    planex(&temp)
        .args(["export", "--format", "csv", "--columns", "Name,Role,3"])
        .arg("--source")
        .arg(&snapshot)
        .arg("--output")
        .arg(&report)
        .assert()
        .success();

    let content = fs::read_to_string(&report).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Name,Role,Task",
            "Alice,Main Contributor,Login flow",
            "Alice,Main Contributor,Release",
            "Bob,,Login flow",
            "Carol,Reviewer,Login flow",
            "Error Processing,,Broken",
            "Unassigned,,Docs",
            "u9 (unable to resolve),Main Contributor,Ghost",
        ]
    );
}

#[test]
fn test_json_report_and_json_summary() {
    let temp = TempDir::new().unwrap();
    let snapshot = write_snapshot(temp.path());
    let report = temp.path().join("report.json");

    let output = planex(&temp)
        .args(["--json", "export", "--format", "json", "--columns", "Status,Name"])
        .arg("--source")
        .arg(&snapshot)
        .arg("--output")
        .arg(&report)
        .output()
        .unwrap();
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["rows_written"], 7);
    assert_eq!(summary["tasks_fetched"], 5);
    assert_eq!(summary["error_rows"], 1);
    assert_eq!(summary["format"], "json");
    assert_eq!(summary["columns"], serde_json::json!(["Status", "Name"]));

    let content = fs::read_to_string(&report).unwrap();
    let rows: Vec<serde_json::Value> = serde_json::from_str(&content).unwrap();
    assert_eq!(rows.len(), 7);
    assert_eq!(rows[0]["Name"], "Alice");
    assert_eq!(rows[0]["Status"], "In Progress");
    assert!(rows[0].get("Task").is_none());

    // Keys follow the selected column order
    let first = content.find("\"Status\"").unwrap();
    let second = content.find("\"Name\"").unwrap();
    assert!(first < second);
}

// =============================================================================
// FILTERS
// =============================================================================

#[test]
fn test_date_range_keeps_assignments_inside_the_range() {
    let temp = TempDir::new().unwrap();
    let snapshot = write_snapshot(temp.path());
    let report = temp.path().join("range.csv");

    planex(&temp)
        .args(["export", "--mode", "date-range", "--from", "2025-01-01", "--to", "2025-01-04"])
        .args(["--format", "csv", "--columns", "Name,Role,Task"])
        .arg("--source")
        .arg(&snapshot)
        .arg("--output")
        .arg(&report)
        .assert()
        .success();

    let content = fs::read_to_string(&report).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Name,Role,Task",
            "Alice,Main Contributor,Login flow",
            "Bob,,Login flow",
            "Error Processing,,Broken",
        ]
    );
}

#[test]
fn test_bucket_mode_drops_other_buckets() {
    let temp = TempDir::new().unwrap();
    let snapshot = write_snapshot(temp.path());
    let report = temp.path().join("review.csv");

    planex(&temp)
        .args(["export", "--mode", "bucket", "--bucket", "b2", "--format", "csv", "--columns", "Name,Task"])
        .arg("--source")
        .arg(&snapshot)
        .arg("--output")
        .arg(&report)
        .assert()
        .success();

    let content = fs::read_to_string(&report).unwrap();
    assert_eq!(content.lines().collect::<Vec<_>>(), vec!["Name,Task", "Alice,Release"]);
}

#[test]
fn test_status_mode_requires_a_status() {
    let temp = TempDir::new().unwrap();
    let snapshot = write_snapshot(temp.path());

    planex(&temp)
        .args(["export", "--mode", "status"])
        .arg("--source")
        .arg(&snapshot)
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires a status label"));
}
