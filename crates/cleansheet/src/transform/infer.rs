//! Per-column type inference: date detection and numeric coercion.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::table::{CellValue, Dataset, Domain};

// Date patterns compiled once on first use.
static DATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap(), // ISO date
        Regex::new(r"^\d{2}/\d{2}/\d{4}$").unwrap(), // day-first slash date
        Regex::new(r"^\d{2}-\d{2}-\d{4}$").unwrap(), // day-first dash date
        Regex::new(r"^\d{2} \w{3,9} \d{4}$").unwrap(), // day, month name, year
    ]
});

/// Parse formats tried in order when a column is classified as dates.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y", "%d %B %Y", "%d %b %Y"];

/// A value that could not be coerced to a number.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("not a number: '{0}'")]
pub struct ParseNumberError(pub String);

/// Parse a textual value as a finite number.
pub fn parse_number(value: &str) -> Result<f64, ParseNumberError> {
    let trimmed = value.trim();
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(ParseNumberError(value.to_string())),
    }
}

/// Whether a trimmed textual value looks like a calendar date.
fn is_date_string(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && DATE_PATTERNS.iter().any(|p| p.is_match(trimmed))
}

/// Parse a textual value as a calendar date, trying each known format.
fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}

/// Inference configuration.
#[derive(Debug, Clone)]
pub struct InferenceConfig {
    /// Fraction of rows that must look like dates before a column is
    /// converted to the date domain.
    pub date_threshold: f64,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            date_threshold: 0.7,
        }
    }
}

/// Outcome of inference for a single column.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnInference {
    /// Column name.
    pub name: String,
    /// Domain after inference.
    pub domain: Domain,
    /// Fraction of rows matching a date pattern (when date detection ran).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_match_ratio: Option<f64>,
    /// Values converted to the new domain.
    pub values_converted: usize,
    /// Values that failed conversion and were retained or marked.
    pub values_retained: usize,
}

/// Detects date and numeric columns and recasts their values.
#[derive(Debug, Clone, Default)]
pub struct TypeInferencer {
    config: InferenceConfig,
}

impl TypeInferencer {
    /// Create an inferencer with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an inferencer with custom configuration.
    pub fn with_config(config: InferenceConfig) -> Self {
        Self { config }
    }

    /// Infer domains for every column, recasting values in a copy.
    ///
    /// Columns are processed independently; a failure to convert one
    /// column is absorbed and never aborts the others.
    pub fn infer(&self, data: &Dataset) -> (Dataset, Vec<ColumnInference>) {
        let mut out = data.clone();
        let reports = (0..out.columns.len())
            .map(|idx| self.infer_column(&mut out, idx))
            .collect();
        (out, reports)
    }

    fn infer_column(&self, data: &mut Dataset, idx: usize) -> ColumnInference {
        let name = data.columns[idx].name.clone();
        let total_rows = data.rows.len();

        // Date detection only applies to columns that are textual all the
        // way down; a column that already carries numbers, booleans or
        // dates from grid parsing skips straight to numeric coercion.
        let uniformly_textual = data
            .column_values(idx)
            .all(|cell| matches!(cell, CellValue::Text(_) | CellValue::Empty));

        let mut date_match_ratio = None;
        if uniformly_textual && total_rows > 0 {
            let matching = data
                .column_values(idx)
                .filter(|cell| cell.as_text().is_some_and(is_date_string))
                .count();
            // Empty rows stay in the denominator: a sparse column should
            // not be promoted on the strength of a few date-like values.
            let ratio = matching as f64 / total_rows as f64;
            date_match_ratio = Some(ratio);

            if ratio > self.config.date_threshold {
                match self.convert_date_column(data, idx) {
                    Some((converted, marked)) => {
                        debug!(column = %name, ratio, "column converted to dates");
                        return ColumnInference {
                            name,
                            domain: Domain::Date,
                            date_match_ratio,
                            values_converted: converted,
                            values_retained: marked,
                        };
                    }
                    None => {
                        warn!(
                            column = %name,
                            "date-like column could not be parsed, leaving as text"
                        );
                    }
                }
            }
        }

        let (converted, retained) = self.coerce_numeric_column(data, idx);

        // The numeric tag is all-or-nothing: a domain applies to the whole
        // column, so mixed text/number columns stay textual even though
        // their parseable values were converted in place.
        let mut non_empty = 0usize;
        let mut numeric = 0usize;
        for cell in data.column_values(idx) {
            if !cell.is_empty() {
                non_empty += 1;
                if matches!(cell, CellValue::Number(_)) {
                    numeric += 1;
                }
            }
        }
        if non_empty > 0 && numeric == non_empty {
            data.columns[idx].domain = Domain::Numeric;
        }

        ColumnInference {
            name,
            domain: data.columns[idx].domain,
            date_match_ratio,
            values_converted: converted,
            values_retained: retained,
        }
    }

    /// Convert every value in a column to a calendar date.
    ///
    /// Returns `(parsed, marked)` counts, or `None` when not a single
    /// value parses — the whole-column failure case, left to the caller.
    fn convert_date_column(&self, data: &mut Dataset, idx: usize) -> Option<(usize, usize)> {
        let parseable = data
            .column_values(idx)
            .filter(|cell| cell.as_text().and_then(parse_date).is_some())
            .count();
        if parseable == 0 {
            return None;
        }

        let mut marked = 0;
        for row in &mut data.rows {
            let Some(cell) = row.get_mut(idx) else {
                continue;
            };
            *cell = match cell.as_text().and_then(parse_date) {
                Some(date) => CellValue::Date(date),
                None => {
                    marked += 1;
                    CellValue::NotADate
                }
            };
        }
        data.columns[idx].domain = Domain::Date;
        Some((parseable, marked))
    }

    /// Coerce textual values to numbers in place, retaining failures.
    fn coerce_numeric_column(&self, data: &mut Dataset, idx: usize) -> (usize, usize) {
        let mut converted = 0;
        let mut retained = 0;
        for row in &mut data.rows {
            let Some(cell) = row.get_mut(idx) else {
                continue;
            };
            let Some(text) = cell.as_text() else { continue };
            if text.trim().is_empty() {
                continue;
            }
            match parse_number(text) {
                Ok(n) => {
                    *cell = CellValue::Number(n);
                    converted += 1;
                }
                Err(_) => retained += 1,
            }
        }
        (converted, retained)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Column;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    fn column_dataset(values: &[&str]) -> Dataset {
        Dataset::new(
            vec![Column::new("col")],
            values.iter().map(|v| vec![text(v)]).collect(),
        )
    }

    #[test]
    fn test_date_patterns() {
        assert!(is_date_string("2023-01-01"));
        assert!(is_date_string("15/02/2023"));
        assert!(is_date_string("15-02-2023"));
        assert!(is_date_string("15 January 2023"));
        assert!(is_date_string(" 2023-01-01 "));
        assert!(!is_date_string("2023/01/01x"));
        assert!(!is_date_string("not a date"));
        assert!(!is_date_string(""));
    }

    #[test]
    fn test_parse_number_rejects_non_finite() {
        assert_eq!(parse_number("3.5"), Ok(3.5));
        assert_eq!(parse_number(" 42 "), Ok(42.0));
        assert!(parse_number("inf").is_err());
        assert!(parse_number("NaN").is_err());
        assert!(parse_number("abc").is_err());
        assert!(parse_number("").is_err());
    }

    #[test]
    fn test_date_column_above_threshold_converted() {
        let ds = column_dataset(&["2023-01-01", "2023-02-15", "not a date", "2023-03-10"]);
        let (out, reports) = TypeInferencer::new().infer(&ds);

        assert_eq!(out.columns[0].domain, Domain::Date);
        assert_eq!(reports[0].date_match_ratio, Some(0.75));
        assert_eq!(
            out.get(0, 0),
            Some(&CellValue::Date(
                NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
            ))
        );
        assert_eq!(out.get(2, 0), Some(&CellValue::NotADate));
        assert_eq!(reports[0].values_converted, 3);
        assert_eq!(reports[0].values_retained, 1);
    }

    #[test]
    fn test_date_column_below_threshold_stays_text() {
        let ds = column_dataset(&["2023-01-01", "x", "y", "z"]);
        let (out, reports) = TypeInferencer::new().infer(&ds);

        assert_eq!(out.columns[0].domain, Domain::Text);
        assert_eq!(reports[0].date_match_ratio, Some(0.25));
        assert_eq!(out.get(0, 0), Some(&text("2023-01-01")));
    }

    #[test]
    fn test_day_first_formats_parse() {
        let ds = column_dataset(&["15/02/2023", "01/03/2023", "28/12/2023"]);
        let (out, _) = TypeInferencer::new().infer(&ds);

        assert_eq!(
            out.get(0, 0),
            Some(&CellValue::Date(
                NaiveDate::from_ymd_opt(2023, 2, 15).unwrap()
            ))
        );
    }

    #[test]
    fn test_month_name_format_parses() {
        let ds = column_dataset(&["05 January 2023", "12 Mar 2023", "31 December 2023"]);
        let (out, _) = TypeInferencer::new().infer(&ds);

        assert_eq!(out.columns[0].domain, Domain::Date);
        assert_eq!(
            out.get(1, 0),
            Some(&CellValue::Date(
                NaiveDate::from_ymd_opt(2023, 3, 12).unwrap()
            ))
        );
    }

    #[test]
    fn test_empty_rows_count_in_denominator() {
        // Three date-like values out of five rows: 60%, below threshold.
        let ds = column_dataset(&["2023-01-01", "2023-01-02", "2023-01-03", "", ""]);
        let (out, reports) = TypeInferencer::new().infer(&ds);

        assert_eq!(out.columns[0].domain, Domain::Text);
        assert_eq!(reports[0].date_match_ratio, Some(0.6));
    }

    #[test]
    fn test_placeholder_becomes_not_a_date() {
        let ds = column_dataset(&["2023-01-01", "2023-01-02", "2023-01-03", ""]);
        let (out, _) = TypeInferencer::new().infer(&ds);

        assert_eq!(out.columns[0].domain, Domain::Date);
        assert_eq!(out.get(3, 0), Some(&CellValue::NotADate));
    }

    #[test]
    fn test_matching_but_unparseable_column_left_as_text() {
        // Pattern matches, but the dates are not on the calendar.
        let ds = column_dataset(&["99/99/2023", "88/77/2023", "45/33/2023"]);
        let (out, _) = TypeInferencer::new().infer(&ds);

        assert_eq!(out.columns[0].domain, Domain::Text);
        assert_eq!(out.get(0, 0), Some(&text("99/99/2023")));
    }

    #[test]
    fn test_mixed_column_skips_date_detection() {
        let ds = Dataset::new(
            vec![Column::new("col")],
            vec![
                vec![CellValue::Number(1.0)],
                vec![text("2023-01-01")],
                vec![text("2023-01-02")],
                vec![text("2023-01-03")],
            ],
        );
        let (out, reports) = TypeInferencer::new().infer(&ds);

        assert_eq!(reports[0].date_match_ratio, None);
        assert_eq!(out.get(1, 0), Some(&text("2023-01-01")));
    }

    #[test]
    fn test_numeric_coercion_full_column() {
        let ds = column_dataset(&["1", "2.5", "-3"]);
        let (out, reports) = TypeInferencer::new().infer(&ds);

        assert_eq!(out.columns[0].domain, Domain::Numeric);
        assert_eq!(out.get(1, 0), Some(&CellValue::Number(2.5)));
        assert_eq!(reports[0].values_converted, 3);
        assert_eq!(reports[0].values_retained, 0);
    }

    #[test]
    fn test_numeric_coercion_mixed_column_tolerated() {
        let ds = column_dataset(&["1", "two", "3"]);
        let (out, reports) = TypeInferencer::new().infer(&ds);

        // Parseable values converted in place, the rest retained as text.
        assert_eq!(out.get(0, 0), Some(&CellValue::Number(1.0)));
        assert_eq!(out.get(1, 0), Some(&text("two")));
        assert_eq!(out.columns[0].domain, Domain::Text);
        assert_eq!(reports[0].values_converted, 2);
        assert_eq!(reports[0].values_retained, 1);
    }

    #[test]
    fn test_numeric_column_with_placeholders() {
        let ds = column_dataset(&["1", "", "3"]);
        let (out, _) = TypeInferencer::new().infer(&ds);

        assert_eq!(out.columns[0].domain, Domain::Numeric);
        assert_eq!(out.get(1, 0), Some(&CellValue::placeholder()));
    }

    #[test]
    fn test_custom_threshold() {
        let inferencer = TypeInferencer::with_config(InferenceConfig {
            date_threshold: 0.5,
        });
        // 60% date-like: above a 0.5 threshold, below the default 0.7.
        let ds = column_dataset(&["2023-01-01", "2023-01-02", "2023-01-03", "x", "y"]);
        let (out, _) = inferencer.infer(&ds);
        assert_eq!(out.columns[0].domain, Domain::Date);
    }

    #[test]
    fn test_empty_dataset() {
        let ds = Dataset::new(vec![Column::new("a")], Vec::new());
        let (out, reports) = TypeInferencer::new().infer(&ds);
        assert_eq!(out.columns[0].domain, Domain::Text);
        assert_eq!(reports.len(), 1);
    }
}
