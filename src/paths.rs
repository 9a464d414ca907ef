//! Centralized path definitions for planex
//!
//! ## Layout
//!
//! ```text
//! ~/.planex/
//! └── config.toml               # Named plans, export defaults
//! ```
//!
//! Artifacts are written to the current directory unless an output path is
//! given.

use std::path::PathBuf;

/// Global config directory name
const GLOBAL_DIR: &str = ".planex";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Suffix of default artifact names (`<plan>-tasks.<ext>`)
const ARTIFACT_SUFFIX: &str = "-tasks";

/// Get the global planex directory.
///
/// Returns `~/.planex/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.planex/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}

/// Default artifact path for a plan label and file extension.
///
/// Characters that do not belong in a file name are replaced with `_`.
#[must_use]
pub fn default_artifact(plan_label: &str, extension: &str) -> PathBuf {
    let label: String = plan_label
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    let label = if label.is_empty() { "plan".to_string() } else { label };
    PathBuf::from(format!("{label}{ARTIFACT_SUFFIX}.{extension}"))
}
