//! Error types for the export pipeline

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a single export
#[derive(Debug, Error)]
pub enum ExportError {
    /// A column selection entry names no known column
    #[error("invalid column '{0}', expected Name, Role, Task, Bucket, Attachments, Status or 1-6")]
    InvalidColumn(String),

    /// The same column was selected twice
    #[error("column '{0}' selected more than once")]
    DuplicateColumn(String),

    /// The output format is not supported
    #[error("unsupported export format '{0}', expected csv, json or md")]
    InvalidFormat(String),

    /// Reading or writing the artifact failed
    #[error("cannot access {}: {source}", path.display())]
    Io {
        /// Artifact path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// CSV encoding failed
    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),

    /// JSON encoding failed
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors in the filter criteria, raised before any filtering happens
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CriteriaError {
    /// A date could not be parsed
    #[error("invalid date '{0}', expected YYYY-MM-DD or RFC 3339")]
    InvalidDate(String),

    /// The range start is not before its end
    #[error("date range start {start} must be before end {end}")]
    EmptyRange {
        /// Range start, as given
        start: String,
        /// Range end, as given
        end: String,
    },

    /// A pull mode was selected without the argument it needs
    #[error("pull mode '{mode}' requires {argument}")]
    MissingArgument {
        /// The pull mode
        mode: String,
        /// What is missing
        argument: &'static str,
    },

    /// The pull mode is not recognized
    #[error("invalid pull mode '{0}', expected all, assigned-only, date-range, bucket or status")]
    InvalidMode(String),
}

impl ExportError {
    /// Wrap an I/O error with the path it concerns
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
