//! Exporter - renders projected rows as CSV, JSON or a Markdown table

use std::fs;
use std::path::Path;

use log::info;

use super::projector::ProjectedRow;
use crate::core::error::ExportError;
use crate::core::models::Column;

/// Artifact format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Comma-separated values with a header record
    Csv,
    /// Array of flat objects
    Json,
    /// GitHub-flavored pipe table
    #[default]
    Markdown,
}

impl ExportFormat {
    /// File extension, without the dot
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Markdown => "md",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
            Self::Markdown => write!(f, "markdown"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "md" | "markdown" => Ok(Self::Markdown),
            _ => Err(ExportError::InvalidFormat(s.to_string())),
        }
    }
}

/// Render rows in the given format
///
/// `columns` must be the columns the rows were projected onto; it provides
/// the header even when there are no rows.
pub fn render(
    rows: &[ProjectedRow],
    columns: &[Column],
    format: ExportFormat,
) -> Result<String, ExportError> {
    match format {
        ExportFormat::Csv => render_csv(rows, columns),
        ExportFormat::Json => render_json(rows),
        ExportFormat::Markdown => Ok(render_markdown(rows, columns)),
    }
}

/// Render rows and write them to `destination`
pub fn export(
    rows: &[ProjectedRow],
    columns: &[Column],
    format: ExportFormat,
    destination: &Path,
) -> Result<(), ExportError> {
    let content = render(rows, columns, format)?;
    fs::write(destination, content).map_err(|e| ExportError::io(destination, e))?;
    info!("Wrote {} row(s) to {} as {format}", rows.len(), destination.display());
    Ok(())
}

/// CSV with a header record; values are written as-is
pub fn render_csv(rows: &[ProjectedRow], columns: &[Column]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(columns.iter().map(|c| c.header()))?;
    for row in rows {
        writer.write_record(row.values())?;
    }
    let bytes = writer.into_inner().map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Pretty-printed JSON array of objects
pub fn render_json(rows: &[ProjectedRow]) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(rows)?)
}

/// Markdown pipe table
///
/// The separator under each header has as many dashes as the header has
/// characters.
#[must_use]
pub fn render_markdown(rows: &[ProjectedRow], columns: &[Column]) -> String {
    let headers: Vec<&str> = columns.iter().map(|c| c.header()).collect();
    let separators: Vec<String> = headers.iter().map(|h| "-".repeat(h.chars().count())).collect();

    let mut out = String::new();
    out.push_str(&table_line(headers.iter().copied()));
    out.push_str(&table_line(separators.iter().map(String::as_str)));
    for row in rows {
        let cells: Vec<String> = row.values().map(escape_cell).collect();
        out.push_str(&table_line(cells.iter().map(String::as_str)));
    }
    out
}

/// Make a value safe to place in a table cell
///
/// Line breaks become a single space and pipes become `&#124;`.
#[must_use]
pub fn escape_cell(value: &str) -> String {
    value.replace("\r\n", " ").replace(['\n', '\r'], " ").replace('|', "&#124;")
}

fn table_line<'a>(cells: impl Iterator<Item = &'a str>) -> String {
    let cells: Vec<&str> = cells.collect();
    format!("| {} |\n", cells.join(" | "))
}
