//! Row and value cleaning: dedup, empty-row removal, placeholder fill.

use serde::Serialize;

use crate::table::{CellValue, Dataset};

/// Counters reported by a cleaning pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RowCleanStats {
    /// Duplicate rows removed (first occurrence kept).
    pub duplicates_removed: usize,
    /// Rows removed because every cell was empty.
    pub empty_rows_removed: usize,
    /// `Empty` cells replaced with the placeholder.
    pub cells_filled: usize,
}

/// Removes duplicate and fully empty rows, then fills missing values.
///
/// The order of operations is fixed: dedupe, drop empty rows, fill. The
/// placeholder is the empty string rather than a missing-value marker so
/// that later date and number parsing treats it as "not parseable".
#[derive(Debug, Clone, Copy, Default)]
pub struct RowCleaner;

impl RowCleaner {
    /// Create a new cleaner.
    pub fn new() -> Self {
        Self
    }

    /// Clean a dataset, returning the result and what was done.
    pub fn clean(&self, data: &Dataset) -> (Dataset, RowCleanStats) {
        let mut stats = RowCleanStats::default();

        // Dedupe under full-row equality, keeping the first occurrence.
        let mut rows: Vec<Vec<CellValue>> = Vec::with_capacity(data.rows.len());
        for row in &data.rows {
            if rows.iter().any(|kept| kept == row) {
                stats.duplicates_removed += 1;
            } else {
                rows.push(row.clone());
            }
        }

        // Drop rows with no values at all.
        let before = rows.len();
        rows.retain(|row| row.iter().any(|cell| !cell.is_empty()));
        stats.empty_rows_removed = before - rows.len();

        // Replace remaining missing values with the placeholder.
        for row in &mut rows {
            for cell in row.iter_mut() {
                if matches!(cell, CellValue::Empty) {
                    *cell = CellValue::placeholder();
                    stats.cells_filled += 1;
                }
            }
        }

        (
            Dataset {
                columns: data.columns.clone(),
                rows,
            },
            stats,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Column;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    fn dataset(rows: Vec<Vec<CellValue>>) -> Dataset {
        Dataset::new(vec![Column::new("a"), Column::new("b")], rows)
    }

    #[test]
    fn test_duplicates_removed_first_kept() {
        let ds = dataset(vec![
            vec![text("1"), text("x")],
            vec![text("2"), text("y")],
            vec![text("1"), text("x")],
        ]);
        let (out, stats) = RowCleaner::new().clean(&ds);

        assert_eq!(out.row_count(), 2);
        assert_eq!(out.get(0, 0), Some(&text("1")));
        assert_eq!(stats.duplicates_removed, 1);
    }

    #[test]
    fn test_all_empty_row_removed() {
        let ds = dataset(vec![
            vec![CellValue::Empty, text("")],
            vec![text("keep"), CellValue::Empty],
        ]);
        let (out, stats) = RowCleaner::new().clean(&ds);

        assert_eq!(out.row_count(), 1);
        assert_eq!(stats.empty_rows_removed, 1);
        // Remaining empty cell was filled with the placeholder.
        assert_eq!(out.get(0, 1), Some(&CellValue::placeholder()));
        assert_eq!(stats.cells_filled, 1);
    }

    #[test]
    fn test_empty_dataset_yields_empty() {
        let ds = dataset(Vec::new());
        let (out, stats) = RowCleaner::new().clean(&ds);
        assert_eq!(out.row_count(), 0);
        assert_eq!(stats, RowCleanStats::default());
    }

    #[test]
    fn test_idempotent() {
        let ds = dataset(vec![
            vec![text("1"), CellValue::Empty],
            vec![text("1"), CellValue::Empty],
            vec![CellValue::Empty, CellValue::Empty],
            vec![text("2"), text("b")],
        ]);
        let cleaner = RowCleaner::new();
        let (once, _) = cleaner.clean(&ds);
        let (twice, stats) = cleaner.clean(&once);

        assert_eq!(once, twice);
        assert_eq!(stats, RowCleanStats::default());
    }

    #[test]
    fn test_not_a_date_is_not_empty() {
        let ds = dataset(vec![vec![CellValue::NotADate, CellValue::NotADate]]);
        let (out, _) = RowCleaner::new().clean(&ds);
        assert_eq!(out.row_count(), 1);
    }
}
