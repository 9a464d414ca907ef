//! Tests for global configuration management

use std::fs;
use std::path::PathBuf;

use planex::config::{ExportDefaults, GlobalConfig};
use tempfile::TempDir;

// =============================================================================
// BASIC CONFIG TESTS
// =============================================================================

#[test]
fn test_config_default() {
    let config = GlobalConfig::default();
    assert!(config.plans.is_empty());
    assert_eq!(config.export.format, "md");
    assert!(config.export.columns.is_none());
    assert!(!config.export.beautify_links);
}

#[test]
fn test_config_path_is_global() {
    assert!(GlobalConfig::config_path().ends_with("config.toml"));
}

// =============================================================================
// PLAN TESTS
// =============================================================================

#[test]
fn test_add_plan_reports_previous_id() {
    let mut config = GlobalConfig::default();
    assert_eq!(config.add_plan("platform", "plan-1"), None);
    assert_eq!(config.add_plan("platform", "plan-2"), Some("plan-1".to_string()));
    assert_eq!(config.plans["platform"], "plan-2");
}

#[test]
fn test_remove_plan() {
    let mut config = GlobalConfig::default();
    config.add_plan("platform", "plan-1");

    assert!(config.remove_plan("platform"));
    assert!(!config.remove_plan("platform"));
    assert!(config.plans.is_empty());
}

#[test]
fn test_resolve_plan_by_name_or_id() {
    let mut config = GlobalConfig::default();
    config.add_plan("platform", "plan-1");

    assert_eq!(config.resolve_plan("platform"), "plan-1");
    assert_eq!(config.resolve_plan("xqQg5FS2LkCp935s"), "xqQg5FS2LkCp935s");
}

// =============================================================================
// PERSISTENCE TESTS
// =============================================================================

#[test]
fn test_save_and_load_round_trip() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("config.toml");

    let mut config = GlobalConfig::default();
    config.add_plan("platform", "plan-1");
    config.export = ExportDefaults {
        format: "csv".to_string(),
        columns: Some("Name,Status".to_string()),
        beautify_links: true,
        source: Some(PathBuf::from("board.json")),
    };
    config.save_to(&path).unwrap();

    assert_eq!(GlobalConfig::load_from(&path), config);
}

#[test]
fn test_load_missing_file_gives_defaults() {
    let temp = TempDir::new().unwrap();
    let config = GlobalConfig::load_from(&temp.path().join("absent.toml"));
    assert_eq!(config, GlobalConfig::default());
}

#[test]
fn test_load_invalid_file_gives_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "plans = [not toml").unwrap();

    assert_eq!(GlobalConfig::load_from(&path), GlobalConfig::default());
}

#[test]
fn test_partial_export_section_keeps_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[plans]\nplatform = \"plan-1\"\n\n[export]\nbeautify_links = true\n").unwrap();

    let config = GlobalConfig::load_from(&path);
    assert_eq!(config.resolve_plan("platform"), "plan-1");
    assert_eq!(config.export.format, "md");
    assert!(config.export.beautify_links);
}
