//! Workflow tests
//!
//! Named plans from the config feeding exports, and beautifying a report
//! after the fact.

use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;

use super::common::write_snapshot;
use super::planex;

#[test]
fn test_named_plan_drives_the_default_artifact() {
    let temp = TempDir::new().unwrap();
    let snapshot = write_snapshot(temp.path());

    planex(&temp)
        .args(["plan", "add", "platform", "plan-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added plan platform: plan-1"));

    planex(&temp)
        .args(["export", "--plan", "platform", "--source"])
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains("platform-tasks.md"));

    let content = fs::read_to_string(temp.path().join("platform-tasks.md")).unwrap();
    assert!(content.starts_with("| Name | Role | Task | Bucket | Attachments | Status |"));
}

#[test]
fn test_plan_mismatch_with_snapshot_fails() {
    let temp = TempDir::new().unwrap();
    let snapshot = write_snapshot(temp.path());

    planex(&temp)
        .args(["export", "--plan", "design", "--source"])
        .arg(&snapshot)
        .assert()
        .failure()
        .stderr(predicate::str::contains("snapshot holds plan 'plan-1', not 'design'"));

    assert!(!temp.path().join("design-tasks.md").exists());
}

#[test]
fn test_config_defaults_apply_to_export() {
    let temp = TempDir::new().unwrap();
    let snapshot = write_snapshot(temp.path());

    let config_dir = temp.path().join(".planex");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        format!(
            "[export]\nformat = \"csv\"\ncolumns = \"Task,Name\"\nsource = \"{}\"\n",
            snapshot.display()
        ),
    )
    .unwrap();

    planex(&temp).arg("export").assert().success();

    let content = fs::read_to_string(temp.path().join("plan-1-tasks.csv")).unwrap();
    assert_eq!(content.lines().next(), Some("Task,Name"));
    assert!(content.contains("Login flow,Carol"));
}

#[test]
fn test_export_then_beautify_then_beautify_again() {
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
        .success();
    let plain = fs::read_to_string(&report).unwrap();
    assert!(!plain.contains("[PR#"));

    planex(&temp)
        .arg("beautify")
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::contains("Linked 2 pull request(s)"));
    let linked = fs::read_to_string(&report).unwrap();
    assert!(linked.contains("[PR#42](https://github.com/org/app/pull/42)"));
    assert!(linked.contains("[PR#7](https://github.com/org/app/pull/7)"));
    assert_eq!(linked.lines().count(), plain.lines().count());

    planex(&temp)
        .arg("beautify")
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::contains("No pull request links to update"));
    assert_eq!(fs::read_to_string(&report).unwrap(), linked);
}

#[test]
fn test_beautify_missing_file_fails() {
    let temp = TempDir::new().unwrap();

    planex(&temp)
        .args(["beautify", "missing.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot access missing.md"));
}
