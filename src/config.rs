//! Global configuration management
//!
//! Holds the named-plan lookup and export defaults.
//! Config is stored at `~/.planex/config.toml`.
//!
//! ```toml
//! [plans]
//! platform = "xqQg5FS2LkCp935s-FIFm2QAFkHM"
//!
//! [export]
//! format = "md"
//! columns = "Name,Role,Task,Status"
//! beautify_links = true
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::paths;

/// Global planex configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Plan name to remote plan identifier
    #[serde(default)]
    pub plans: BTreeMap<String, String>,
    /// Export defaults
    #[serde(default)]
    pub export: ExportDefaults,
}

/// Defaults applied when the command line leaves a choice open
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportDefaults {
    /// Artifact format (`csv`, `json`, `md`)
    #[serde(default = "default_format")]
    pub format: String,
    /// Column selection, comma-separated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<String>,
    /// Rewrite pull-request URLs in Markdown artifacts
    #[serde(default)]
    pub beautify_links: bool,
    /// Snapshot file to read instead of the remote service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
}

fn default_format() -> String {
    "md".to_string()
}

impl Default for ExportDefaults {
    fn default() -> Self {
        Self {
            format: default_format(),
            columns: None,
            beautify_links: false,
            source: None,
        }
    }
}

impl GlobalConfig {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from disk, or defaults if missing or unreadable
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load config from a specific file, or defaults if missing or unreadable
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(path).map(|content| toml::from_str(&content)) {
            Ok(Ok(config)) => config,
            Ok(Err(err)) => {
                warn!("Ignoring invalid config {}: {err}", path.display());
                Self::default()
            },
            Err(err) => {
                warn!("Ignoring unreadable config {}: {err}", path.display());
                Self::default()
            },
        }
    }

    /// Save config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save config to a specific file, creating its directory
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Add or replace a named plan, returns the previous identifier
    pub fn add_plan(&mut self, name: &str, plan_id: &str) -> Option<String> {
        self.plans.insert(name.to_string(), plan_id.to_string())
    }

    /// Remove a named plan, returns true if it existed
    pub fn remove_plan(&mut self, name: &str) -> bool {
        self.plans.remove(name).is_some()
    }

    /// Resolve a plan name to its identifier
    ///
    /// Unknown names are taken to be plan identifiers already.
    #[must_use]
    pub fn resolve_plan<'a>(&'a self, name_or_id: &'a str) -> &'a str {
        self.plans.get(name_or_id).map_or(name_or_id, String::as_str)
    }
}
