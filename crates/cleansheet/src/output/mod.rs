//! Dataset serialization: delimited text and workbook grids.

mod csv;
mod workbook;

pub use csv::write_csv;
pub use workbook::write_workbook;

use crate::error::CleansheetError;

/// Serialization target for format conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConvertTarget {
    /// Delimited text (comma-separated).
    Csv,
    /// Row/column grid (XLSX workbook).
    #[default]
    Grid,
}

impl std::str::FromStr for ConvertTarget {
    type Err = CleansheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ConvertTarget::Csv),
            "grid" | "xlsx" | "excel" => Ok(ConvertTarget::Grid),
            other => Err(CleansheetError::UnsupportedConversion(other.to_string())),
        }
    }
}

impl std::fmt::Display for ConvertTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvertTarget::Csv => write!(f, "csv"),
            ConvertTarget::Grid => write!(f, "grid"),
        }
    }
}
