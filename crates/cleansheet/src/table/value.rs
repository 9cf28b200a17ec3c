//! Cell value and column domain types.

use chrono::NaiveDate;
use serde::Serialize;

/// A single scalar cell value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum CellValue {
    /// No value at all (an unwritten spreadsheet cell).
    Empty,
    /// Textual value.
    Text(String),
    /// Numeric value. Never NaN or infinite.
    Number(f64),
    /// Boolean value.
    Bool(bool),
    /// Calendar date, no time-of-day.
    Date(NaiveDate),
    /// A value that failed calendar parsing inside a date column.
    ///
    /// Distinct from [`CellValue::placeholder`]: the cleaner does not treat
    /// it as empty, and it survives repeated cleaning unchanged.
    NotADate,
}

impl CellValue {
    /// The canonical "no value" representation used after cleaning.
    pub fn placeholder() -> Self {
        CellValue::Text(String::new())
    }

    /// True for cells that carry no value: `Empty` or the empty string.
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// The textual content, if this is a text cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Render the value the way it appears in delimited-text output.
    ///
    /// Integral numbers drop the fractional part (`3`, not `3.0`) so that
    /// text parsed into a number renders back to the same text. `Empty` and
    /// `NotADate` render as the empty string.
    pub fn to_display_string(&self) -> String {
        match self {
            CellValue::Empty | CellValue::NotADate => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => format_number(*n),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Date(d) => d.format("%Y-%m-%d").to_string(),
        }
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_display_string())
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Inferred semantic domain of a whole column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    /// Textual values (the default).
    Text,
    /// Numeric values.
    Numeric,
    /// Calendar dates.
    Date,
}

impl Default for Domain {
    fn default() -> Self {
        Domain::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_is_empty() {
        assert!(CellValue::placeholder().is_empty());
        assert!(CellValue::Empty.is_empty());
        assert!(!CellValue::Text("x".to_string()).is_empty());
        assert!(!CellValue::Number(0.0).is_empty());
        assert!(!CellValue::NotADate.is_empty());
    }

    #[test]
    fn test_display_integral_number() {
        assert_eq!(CellValue::Number(3.0).to_display_string(), "3");
        assert_eq!(CellValue::Number(-42.0).to_display_string(), "-42");
        assert_eq!(CellValue::Number(3.14).to_display_string(), "3.14");
    }

    #[test]
    fn test_display_date() {
        let d = NaiveDate::from_ymd_opt(2023, 1, 5).unwrap();
        assert_eq!(CellValue::Date(d).to_display_string(), "2023-01-05");
    }

    #[test]
    fn test_display_empty_variants() {
        assert_eq!(CellValue::Empty.to_display_string(), "");
        assert_eq!(CellValue::NotADate.to_display_string(), "");
    }
}
