//! Error types for the cleansheet library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for cleansheet operations.
#[derive(Debug, Error)]
pub enum CleansheetError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Unreadable or corrupt workbook structure.
    #[error("Workbook error: {0}")]
    Xlsx(#[from] calamine::XlsxError),

    /// Error writing workbook output.
    #[error("Workbook write error: {0}")]
    XlsxWrite(#[from] rust_xlsxwriter::XlsxError),

    /// Unparseable or inverted merge range descriptor.
    #[error("Malformed merge range: {0}")]
    MalformedRange(String),

    /// Requested worksheet does not exist in the workbook.
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Empty input collection to an operation requiring at least one.
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// Input file format not supported.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Unknown format-conversion request.
    #[error("Unsupported conversion target: {0}")]
    UnsupportedConversion(String),
}

/// Result type alias for cleansheet operations.
pub type Result<T> = std::result::Result<T, CleansheetError>;
