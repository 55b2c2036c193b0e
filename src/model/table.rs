//! Table types.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A rectangular table.
///
/// Every row carries the same number of cells; the first row is logically
/// the header but is not structurally distinguished.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    /// Rows in the table
    pub rows: Vec<TableRow>,

    /// Named style reference, resolved against the template's style sheet
    pub style: Option<String>,
}

impl Table {
    /// Create a table of the given dimensions filled with empty cells.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows: (0..rows).map(|_| TableRow::empty(cols)).collect(),
            style: None,
        }
    }

    /// Set the style name and return self.
    pub fn styled(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns (based on the first row).
    pub fn column_count(&self) -> usize {
        self.rows.first().map(|r| r.cells.len()).unwrap_or(0)
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get the style name, if any.
    pub fn style_name(&self) -> Option<&str> {
        self.style.as_deref()
    }

    /// Get a cell by position.
    pub fn cell(&self, row: usize, col: usize) -> Result<&TableCell> {
        self.rows
            .get(row)
            .and_then(|r| r.cells.get(col))
            .ok_or(Error::CellOutOfRange {
                row,
                col,
                rows: self.row_count(),
                cols: self.column_count(),
            })
    }

    /// Get a mutable cell by position.
    pub fn cell_mut(&mut self, row: usize, col: usize) -> Result<&mut TableCell> {
        let rows = self.row_count();
        let cols = self.column_count();
        self.rows
            .get_mut(row)
            .and_then(|r| r.cells.get_mut(col))
            .ok_or(Error::CellOutOfRange { row, col, rows, cols })
    }

    /// Set a cell's text by position.
    pub fn set_cell(&mut self, row: usize, col: usize, text: impl Into<String>) -> Result<()> {
        self.cell_mut(row, col)?.text = text.into();
        Ok(())
    }

    /// Append a row of empty cells matching the current column count.
    pub fn add_row(&mut self) -> &mut TableRow {
        let cols = self.column_count();
        self.rows.push(TableRow::empty(cols));
        let last = self.rows.len() - 1;
        &mut self.rows[last]
    }

    /// Get plain text representation of the table.
    pub fn plain_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A table row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in the row
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Create a new row with cells.
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self { cells }
    }

    /// Create a row of `cols` empty cells.
    pub fn empty(cols: usize) -> Self {
        Self {
            cells: (0..cols).map(|_| TableCell::empty()).collect(),
        }
    }

    /// Create a row from text values.
    pub fn from_strings<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::new(values.into_iter().map(TableCell::text).collect())
    }

    /// Get plain text representation.
    pub fn plain_text(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.text.as_str())
            .collect::<Vec<_>>()
            .join("\t")
    }
}

/// A table cell holding a single text value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableCell {
    /// Cell text
    pub text: String,
}

impl TableCell {
    /// Create a cell with text content.
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Create an empty cell.
    pub fn empty() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Check if the cell is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
