//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use planex::core::models::{Column, Status};
use planex::core::services::{ExportFormat, PullMode, parse_columns};
use test_case::test_case;

// =============================================================================
// Status Tests
// =============================================================================

#[test_case(0, "Not Started" ; "zero is not started")]
#[test_case(1, "In Progress" ; "one is in progress")]
#[test_case(50, "In Progress" ; "half is in progress")]
#[test_case(99, "In Progress" ; "almost done is in progress")]
#[test_case(100, "Completed" ; "hundred is completed")]
fn test_status_from_percent(percent: u32, expected: &str) {
    assert_eq!(Status::from_percent(percent).label(), expected);
}

#[test_case("Not Started", Some(Status::NotStarted) ; "exact label")]
#[test_case("not_started", Some(Status::NotStarted) ; "snake case")]
#[test_case("In-Progress", Some(Status::InProgress) ; "kebab case")]
#[test_case("completed", Some(Status::Completed) ; "lower case")]
#[test_case("Completd", None ; "typo")]
#[test_case("", None ; "empty")]
#[test_case("done", None ; "done is not a label")]
#[test_case("complete", None ; "complete is not a label")]
#[test_case("notstarted", None ; "missing space")]
fn test_status_parse(input: &str, expected: Option<Status>) {
    assert_eq!(input.parse::<Status>().ok(), expected);
}

// =============================================================================
// Pull Mode Tests
// =============================================================================

#[test_case("all", PullMode::All ; "all")]
#[test_case("assigned-only", PullMode::AssignedOnly ; "assigned only")]
#[test_case("assigned_only", PullMode::AssignedOnly ; "assigned only underscore")]
#[test_case("date-range", PullMode::DateRange ; "date range")]
#[test_case("Bucket", PullMode::Bucket ; "bucket")]
#[test_case("STATUS", PullMode::Status ; "status")]
fn test_pull_mode_parse(input: &str, expected: PullMode) {
    assert_eq!(input.parse::<PullMode>().unwrap(), expected);
}

#[test_case(PullMode::All, true ; "all includes unassigned")]
#[test_case(PullMode::AssignedOnly, false ; "assigned only excludes")]
#[test_case(PullMode::DateRange, false ; "date range excludes")]
#[test_case(PullMode::Bucket, false ; "bucket excludes")]
#[test_case(PullMode::Status, false ; "status excludes")]
fn test_pull_mode_unassigned(mode: PullMode, expected: bool) {
    assert_eq!(mode.includes_unassigned(), expected);
}

// =============================================================================
// Format Tests
// =============================================================================

#[test_case("csv", ExportFormat::Csv, "csv" ; "csv")]
#[test_case("JSON", ExportFormat::Json, "json" ; "json upper")]
#[test_case("md", ExportFormat::Markdown, "md" ; "md")]
#[test_case("markdown", ExportFormat::Markdown, "md" ; "markdown")]
fn test_format_parse(input: &str, expected: ExportFormat, extension: &str) {
    let format: ExportFormat = input.parse().unwrap();
    assert_eq!(format, expected);
    assert_eq!(format.extension(), extension);
}

// =============================================================================
// Column Selection Tests
// =============================================================================

#[test_case("", &[] ; "empty means all")]
#[test_case("Name", &[Column::Name] ; "single")]
#[test_case("status,name", &[Column::Status, Column::Name] ; "reordered")]
#[test_case("1, 3 ,6", &[Column::Name, Column::Task, Column::Status] ; "positions")]
#[test_case("Bucket,,Role", &[Column::Bucket, Column::Role] ; "empty entries skipped")]
fn test_column_selection(input: &str, expected: &[Column]) {
    assert_eq!(parse_columns(input).unwrap(), expected);
}

#[test_case("Owner" ; "unknown name")]
#[test_case("Name,0" ; "zero position")]
#[test_case("7" ; "position out of range")]
#[test_case("Name,name" ; "duplicate")]
fn test_column_selection_rejected(input: &str) {
    assert!(parse_columns(input).is_err());
}
