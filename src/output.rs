//! Output formatting for human and JSON modes
//!
//! Command summaries can be rendered either as human-readable text or
//! machine-parseable JSON. The export artifact itself is written by the
//! exporter, not here.

use colored::Colorize;
use serde::Serialize;

use crate::core::services::ExportSummary;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of an export
#[derive(Debug, Serialize)]
pub struct ExportResult {
    /// Artifact path
    pub destination: String,
    /// Artifact format
    pub format: String,
    /// Columns written
    pub columns: Vec<String>,
    /// Tasks returned by the source
    pub tasks_fetched: usize,
    /// Rows written
    pub rows_written: usize,
    /// Rows standing in for failed tasks
    pub error_rows: usize,
    /// Pull-request links rewritten
    pub links_beautified: usize,
}

/// Result of beautifying an existing file
#[derive(Debug, Serialize)]
pub struct BeautifyResult {
    /// File that was processed
    pub file: String,
    /// Distinct pull-request links rewritten
    pub links_beautified: usize,
}

/// Result of listing named plans
#[derive(Debug, Serialize)]
pub struct PlanListResult {
    /// Named plans
    pub plans: Vec<PlanInfo>,
}

/// A named plan
#[derive(Debug, Serialize)]
pub struct PlanInfo {
    /// Plan name
    pub name: String,
    /// Remote plan identifier
    pub id: String,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl From<&ExportSummary> for ExportResult {
    fn from(summary: &ExportSummary) -> Self {
        Self {
            destination: summary.destination.display().to_string(),
            format: summary.format.to_string(),
            columns: summary.columns.iter().map(ToString::to_string).collect(),
            tasks_fetched: summary.tasks_fetched,
            rows_written: summary.rows_written,
            error_rows: summary.error_rows,
            links_beautified: summary.links_beautified,
        }
    }
}

impl ExportResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!(
            "{} {} row(s) from {} task(s) to {} ({})",
            "Exported".green(),
            self.rows_written,
            self.tasks_fetched,
            self.destination,
            self.format
        );
        println!("  Columns: {}", self.columns.join(", "));
        if self.links_beautified > 0 {
            println!("  Linked {} pull request(s)", self.links_beautified);
        }
        if self.error_rows > 0 {
            println!(
                "  {} {} task(s) could not be processed (see \"Error Processing\" rows)",
                "Warning:".yellow(),
                self.error_rows
            );
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl BeautifyResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human if self.links_beautified == 0 => {
                println!("No pull request links to update in {}", self.file);
            },
            OutputMode::Human => {
                println!("Linked {} pull request(s) in {}", self.links_beautified, self.file);
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

impl PlanListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }

    fn render_human(&self) {
        if self.plans.is_empty() {
            println!("No plans configured.");
            println!("Add one with: planex plan add <name> <plan-id>");
            return;
        }

        println!("Plans:\n");
        for plan in &self.plans {
            println!("  {}  {}", plan.name.bold(), plan.id);
        }
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
