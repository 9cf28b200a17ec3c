//! Raw worksheet grid and merged-cell ranges.

use crate::error::{CleansheetError, Result};
use crate::table::CellValue;

/// A rectangular group of cells sharing one displayed value.
///
/// The anchor (top-left position) holds the actual data. Coordinates are
/// zero-based and inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeRange {
    pub first_row: usize,
    pub first_col: usize,
    pub last_row: usize,
    pub last_col: usize,
}

impl MergeRange {
    /// Create a range, validating that it is not inverted.
    pub fn new(first_row: usize, first_col: usize, last_row: usize, last_col: usize) -> Result<Self> {
        if last_row < first_row || last_col < first_col {
            return Err(CleansheetError::MalformedRange(format!(
                "inverted range ({},{})..({},{})",
                first_row, first_col, last_row, last_col
            )));
        }
        Ok(Self {
            first_row,
            first_col,
            last_row,
            last_col,
        })
    }

    /// Parse an A1-style descriptor such as `"A1:C3"`.
    ///
    /// A single reference (`"B2"`) denotes a one-cell range.
    pub fn parse(descriptor: &str) -> Result<Self> {
        let malformed = || CleansheetError::MalformedRange(format!("'{}'", descriptor));

        let (start, end) = match descriptor.split_once(':') {
            Some((s, e)) => (s, e),
            None => (descriptor, descriptor),
        };
        let (first_row, first_col) = parse_cell_ref(start).ok_or_else(malformed)?;
        let (last_row, last_col) = parse_cell_ref(end).ok_or_else(malformed)?;

        Self::new(first_row, first_col, last_row, last_col)
            .map_err(|_| CleansheetError::MalformedRange(format!("inverted '{}'", descriptor)))
    }

    /// The anchor position (top-left cell).
    pub fn anchor(&self) -> (usize, usize) {
        (self.first_row, self.first_col)
    }

    /// Whether a position lies inside this range.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.first_row && row <= self.last_row && col >= self.first_col && col <= self.last_col
    }
}

/// Parse a single A1-style cell reference into zero-based (row, col).
fn parse_cell_ref(cell: &str) -> Option<(usize, usize)> {
    let cell = cell.trim();
    let split = cell.find(|c: char| c.is_ascii_digit())?;
    let (letters, digits) = cell.split_at(split);
    if letters.is_empty() || digits.is_empty() {
        return None;
    }

    let mut col: usize = 0;
    for ch in letters.chars() {
        if !ch.is_ascii_alphabetic() {
            return None;
        }
        col = col * 26 + (ch.to_ascii_uppercase() as usize - 'A' as usize + 1);
    }

    let row: usize = digits.parse().ok()?;
    if row == 0 {
        return None;
    }

    Some((row - 1, col - 1))
}

/// A 2D grid of cells with zero or more merge ranges, as read from a
/// workbook before structural normalization.
#[derive(Debug, Clone, Default)]
pub struct RawSheet {
    /// Worksheet name.
    pub name: String,
    /// Dense grid of cell values (row-major order).
    pub cells: Vec<Vec<CellValue>>,
    /// Merged-cell ranges still present in the grid.
    pub merges: Vec<MergeRange>,
}

impl RawSheet {
    /// Create a sheet from a grid with no merge ranges.
    pub fn from_grid(name: impl Into<String>, cells: Vec<Vec<CellValue>>) -> Self {
        Self {
            name: name.into(),
            cells,
            merges: Vec::new(),
        }
    }

    /// Number of rows in the grid.
    pub fn height(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns in the grid.
    pub fn width(&self) -> usize {
        self.cells.first().map(Vec::len).unwrap_or(0)
    }

    /// A specific cell value, `Empty` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> &CellValue {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&CellValue::Empty)
    }
}
