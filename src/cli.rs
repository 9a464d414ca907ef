//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::commands;
use planex::output::OutputMode;

/// planex - Export project-board tasks for reporting
#[derive(Parser, Debug)]
#[command(
    name = "planex",
    version,
    about = "Export project-board tasks for reporting",
    long_about = "Export the tasks of a plan as CSV, JSON or a Markdown table.\n\n\
                  Every assignee gets a row. The earliest-assigned user is the Main\n\
                  Contributor, the latest-assigned one the Reviewer."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print command results in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Export the tasks of a plan
    Export(ExportArgs),

    /// Turn pull request URLs in a Markdown file into links
    Beautify {
        /// Markdown file to rewrite in place
        file: PathBuf,
    },

    /// Manage named plans
    Plan {
        #[command(subcommand)]
        action: PlanAction,
    },

    /// Show version
    Version,
}

/// Arguments of `planex export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Plan name (from config) or remote plan id
    #[arg(short, long)]
    pub plan: Option<String>,

    /// Read tasks from a JSON snapshot instead of the remote service
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Pull mode: all, assigned-only, date-range, bucket, status
    #[arg(short, long, default_value = "all")]
    pub mode: String,

    /// Keep only tasks of this bucket id
    #[arg(short, long)]
    pub bucket: Option<String>,

    /// Keep only tasks with this status: "Not Started", "In Progress", "Completed"
    #[arg(short, long)]
    pub status: Option<String>,

    /// Keep only assignments made on or after this date (YYYY-MM-DD or RFC 3339)
    #[arg(long)]
    pub from: Option<String>,

    /// Keep only assignments made before this date (YYYY-MM-DD or RFC 3339)
    #[arg(long)]
    pub to: Option<String>,

    /// Columns to export, by name or 1-based position (e.g. "Name,Task,6")
    #[arg(short, long)]
    pub columns: Option<String>,

    /// Output format: csv, json, md
    #[arg(short, long)]
    pub format: Option<String>,

    /// Output file (default: <plan>-tasks.<ext>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Turn pull request URLs into links (Markdown only)
    #[arg(long)]
    pub beautify_links: bool,
}

#[derive(Subcommand, Debug)]
pub enum PlanAction {
    /// Add or replace a named plan
    Add {
        /// Plan name
        name: String,

        /// Remote plan id
        id: String,
    },

    /// List named plans
    List,

    /// Remove a named plan
    Remove {
        /// Plan name
        name: String,
    },
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Export(args)) => commands::export(args, output_mode),
        Some(Command::Beautify { file }) => commands::beautify(&file, output_mode),
        Some(Command::Plan { action }) => commands::plan_cmd(action, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": planex::VERSION
                    })
                );
            } else {
                println!("planex v{}", planex::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": planex::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("planex v{}", planex::VERSION);
                println!("\nRun 'planex --help' for usage");
                println!("Run 'planex export --source <snapshot.json>' to export a snapshot");
            }
            Ok(())
        },
    }
}
