//! Column projector - restricts rows to a selected, ordered set of fields

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::core::error::ExportError;
use crate::core::models::{Column, ReportRow};

/// A report row restricted to the selected columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectedRow {
    cells: Vec<(Column, String)>,
}

impl ProjectedRow {
    /// Cells in column order
    #[must_use]
    pub fn cells(&self) -> &[(Column, String)] {
        &self.cells
    }

    /// Cell values in column order
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(_, value)| value.as_str())
    }

    /// Value of one column, if selected
    #[must_use]
    pub fn get(&self, column: Column) -> Option<&str> {
        self.cells.iter().find(|(c, _)| *c == column).map(|(_, value)| value.as_str())
    }
}

impl Serialize for ProjectedRow {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (column, value) in &self.cells {
            map.serialize_entry(column.header(), value)?;
        }
        map.end()
    }
}

/// Parse a comma-separated column selection
///
/// Entries are header names (case-insensitive) or 1-based positions.
/// A blank selection means every column. Any bad entry rejects the whole
/// selection.
pub fn parse_columns(selection: &str) -> Result<Vec<Column>, ExportError> {
    let mut columns = Vec::new();
    for entry in selection.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let column: Column =
            entry.parse().map_err(|_| ExportError::InvalidColumn(entry.to_string()))?;
        if columns.contains(&column) {
            return Err(ExportError::DuplicateColumn(column.header().to_string()));
        }
        columns.push(column);
    }
    Ok(columns)
}

/// The effective column list: the selection, or every column when empty
#[must_use]
pub fn effective_columns(selection: &[Column]) -> Vec<Column> {
    if selection.is_empty() {
        Column::ALL.to_vec()
    } else {
        selection.to_vec()
    }
}

/// Project rows onto the selected columns
#[must_use]
pub fn project(rows: &[ReportRow], selection: &[Column]) -> Vec<ProjectedRow> {
    let columns = effective_columns(selection);
    rows.iter()
        .map(|row| ProjectedRow {
            cells: columns.iter().map(|&c| (c, row.value(c).to_string())).collect(),
        })
        .collect()
}
