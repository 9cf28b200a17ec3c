//! Dataset concatenation with column union.

use indexmap::map::Entry;
use indexmap::IndexMap;

use crate::error::{CleansheetError, Result};
use crate::table::{CellValue, Column, Dataset, Domain};

/// Stack datasets on top of each other.
///
/// The output column set is the union of all input column names in
/// first-seen order; rows are concatenated in input order. A cell whose
/// column is absent from its source dataset is filled with the
/// placeholder. Heterogeneous column sets are tolerated; a column keeps
/// its domain only when every contributing dataset agrees on it.
pub fn merge_datasets(datasets: &[Dataset]) -> Result<Dataset> {
    if datasets.is_empty() {
        return Err(CleansheetError::EmptyInput(
            "no datasets to merge".to_string(),
        ));
    }

    // Union of column names in first-seen order; None marks a domain
    // disagreement between sources.
    let mut domains: IndexMap<String, Option<Domain>> = IndexMap::new();
    for ds in datasets {
        for col in &ds.columns {
            match domains.entry(col.name.clone()) {
                Entry::Vacant(entry) => {
                    entry.insert(Some(col.domain));
                }
                Entry::Occupied(mut entry) => {
                    if *entry.get() != Some(col.domain) {
                        entry.insert(None);
                    }
                }
            }
        }
    }

    let columns: Vec<Column> = domains
        .iter()
        .map(|(name, domain)| Column::with_domain(name.clone(), domain.unwrap_or_default()))
        .collect();

    let mut rows = Vec::with_capacity(datasets.iter().map(Dataset::row_count).sum());
    for ds in datasets {
        let source_index: Vec<Option<usize>> = columns
            .iter()
            .map(|col| ds.column_index(&col.name))
            .collect();

        for row in &ds.rows {
            rows.push(
                source_index
                    .iter()
                    .map(|idx| {
                        idx.and_then(|i| row.get(i))
                            .cloned()
                            .unwrap_or_else(CellValue::placeholder)
                    })
                    .collect(),
            );
        }
    }

    Ok(Dataset { columns, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    #[test]
    fn test_union_of_columns_in_first_seen_order() {
        let a = Dataset::new(
            vec![Column::new("id"), Column::new("name")],
            vec![vec![text("1"), text("Alice")]],
        );
        let b = Dataset::new(
            vec![Column::new("id"), Column::new("email")],
            vec![vec![text("2"), text("bob@example.com")]],
        );

        let merged = merge_datasets(&[a, b]).unwrap();

        assert_eq!(merged.column_names(), vec!["id", "name", "email"]);
        assert_eq!(merged.row_count(), 2);
        // Rows from A have an empty email; rows from B an empty name.
        assert_eq!(merged.get(0, 2), Some(&CellValue::placeholder()));
        assert_eq!(merged.get(1, 1), Some(&CellValue::placeholder()));
        assert_eq!(merged.get(1, 2), Some(&text("bob@example.com")));
    }

    #[test]
    fn test_empty_input_fails() {
        assert!(matches!(
            merge_datasets(&[]),
            Err(CleansheetError::EmptyInput(_))
        ));
    }

    #[test]
    fn test_single_dataset_passthrough() {
        let a = Dataset::new(
            vec![Column::new("x")],
            vec![vec![text("1")], vec![text("2")]],
        );
        let merged = merge_datasets(std::slice::from_ref(&a)).unwrap();
        assert_eq!(merged, a);
    }

    #[test]
    fn test_row_order_preserved() {
        let a = Dataset::new(vec![Column::new("x")], vec![vec![text("a1")]]);
        let b = Dataset::new(vec![Column::new("x")], vec![vec![text("b1")], vec![text("b2")]]);

        let merged = merge_datasets(&[a, b]).unwrap();
        let values: Vec<_> = merged.column_values(0).cloned().collect();
        assert_eq!(values, vec![text("a1"), text("b1"), text("b2")]);
    }

    #[test]
    fn test_agreeing_domains_kept_conflicts_reset() {
        let a = Dataset::new(
            vec![
                Column::with_domain("n", Domain::Numeric),
                Column::with_domain("d", Domain::Date),
            ],
            Vec::new(),
        );
        let b = Dataset::new(
            vec![
                Column::with_domain("n", Domain::Numeric),
                Column::with_domain("d", Domain::Text),
            ],
            Vec::new(),
        );

        let merged = merge_datasets(&[a, b]).unwrap();
        assert_eq!(merged.columns[0].domain, Domain::Numeric);
        assert_eq!(merged.columns[1].domain, Domain::Text);
    }
}
