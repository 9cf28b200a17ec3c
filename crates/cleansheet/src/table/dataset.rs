//! Named-column, ordered-row tabular dataset.

use serde::Serialize;

use super::value::{CellValue, Domain};

/// A single named column with its inferred domain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    /// Column name, unique within a dataset.
    pub name: String,
    /// Inferred semantic domain, applied to the whole column.
    pub domain: Domain,
}

impl Column {
    /// Create a text-domain column.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            domain: Domain::Text,
        }
    }

    /// Create a column with an explicit domain.
    pub fn with_domain(name: impl Into<String>, domain: Domain) -> Self {
        Self {
            name: name.into(),
            domain,
        }
    }
}

/// An ordered sequence of named columns and an ordered sequence of rows.
///
/// Every row holds exactly one value per column. Row order reflects source
/// order and is preserved through cleaning.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Dataset {
    /// Column definitions, in source order.
    pub columns: Vec<Column>,
    /// Row data (row-major order).
    pub rows: Vec<Vec<CellValue>>,
}

impl Dataset {
    /// Create a dataset from columns and rows.
    ///
    /// Rows are padded with `Empty` or truncated to the column count so the
    /// shape invariant holds.
    pub fn new(columns: Vec<Column>, mut rows: Vec<Vec<CellValue>>) -> Self {
        let width = columns.len();
        for row in &mut rows {
            row.resize(width, CellValue::Empty);
        }
        Self { columns, rows }
    }

    /// Build a dataset from a raw grid, taking the first row as the header.
    ///
    /// Header cells are rendered as text; blank headers become `column_N`
    /// and repeated names are deduplicated with a `.N` suffix. An empty
    /// grid yields an empty dataset.
    pub fn from_grid(grid: Vec<Vec<CellValue>>) -> Self {
        let mut iter = grid.into_iter();
        let Some(header) = iter.next() else {
            return Self::default();
        };

        let names: Vec<String> = header
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let name = cell.to_display_string();
                if name.trim().is_empty() {
                    format!("column_{}", i + 1)
                } else {
                    name
                }
            })
            .collect();

        let columns = dedup_names(names)
            .into_iter()
            .map(Column::new)
            .collect::<Vec<_>>();

        Self::new(columns, iter.collect())
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows (excluding the header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// All column names, in order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Position of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// All values of one column, top to bottom.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &CellValue> {
        self.rows
            .iter()
            .map(move |row| row.get(index).unwrap_or(&CellValue::Empty))
    }

    /// A specific cell value.
    pub fn get(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.rows.get(row).and_then(|r| r.get(col))
    }
}

/// Deduplicate column names by suffixing repeats with `.1`, `.2`, ...
fn dedup_names(names: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(names.len());
    for name in names {
        if !seen.contains(&name) {
            seen.push(name);
            continue;
        }
        let mut n = 1;
        loop {
            let candidate = format!("{}.{}", name, n);
            if !seen.contains(&candidate) {
                seen.push(candidate);
                break;
            }
            n += 1;
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    #[test]
    fn test_from_grid_header_first_row() {
        let grid = vec![
            vec![text("id"), text("name")],
            vec![text("1"), text("Alice")],
            vec![text("2"), text("Bob")],
        ];
        let ds = Dataset::from_grid(grid);

        assert_eq!(ds.column_names(), vec!["id", "name"]);
        assert_eq!(ds.row_count(), 2);
        assert_eq!(ds.get(1, 1), Some(&text("Bob")));
    }

    #[test]
    fn test_from_grid_blank_and_duplicate_headers() {
        let grid = vec![
            vec![text("x"), CellValue::Empty, text("x"), text("x")],
            vec![text("a"), text("b"), text("c"), text("d")],
        ];
        let ds = Dataset::from_grid(grid);

        assert_eq!(ds.column_names(), vec!["x", "column_2", "x.1", "x.2"]);
    }

    #[test]
    fn test_from_grid_empty() {
        let ds = Dataset::from_grid(Vec::new());
        assert_eq!(ds.column_count(), 0);
        assert_eq!(ds.row_count(), 0);
    }

    #[test]
    fn test_new_pads_short_rows() {
        let ds = Dataset::new(
            vec![Column::new("a"), Column::new("b")],
            vec![vec![text("1")]],
        );
        assert_eq!(ds.get(0, 1), Some(&CellValue::Empty));
    }

    #[test]
    fn test_column_index() {
        let ds = Dataset::new(vec![Column::new("a"), Column::new("b")], Vec::new());
        assert_eq!(ds.column_index("b"), Some(1));
        assert_eq!(ds.column_index("z"), None);
    }
}
