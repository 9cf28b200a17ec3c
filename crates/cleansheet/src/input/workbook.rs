//! Workbook (XLSX) reader built on calamine.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use calamine::{Data, Reader, Xlsx};
use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::error::{CleansheetError, Result};
use crate::table::CellValue;

use super::sheet::{MergeRange, RawSheet};
use super::source::{content_hash, SourceMetadata};

/// Workbook reader configuration.
#[derive(Debug, Clone, Default)]
pub struct WorkbookConfig {
    /// Worksheet to read (None = first sheet).
    pub sheet: Option<String>,
}

/// Reads spreadsheet files into raw sheets.
#[derive(Debug, Clone, Default)]
pub struct WorkbookReader {
    config: WorkbookConfig,
}

impl WorkbookReader {
    /// Create a reader with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader with custom configuration.
    pub fn with_config(config: WorkbookConfig) -> Self {
        Self { config }
    }

    /// Read a workbook from a byte stream.
    pub fn read_bytes(&self, bytes: &[u8]) -> Result<RawSheet> {
        let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))?;
        workbook.load_merged_regions()?;

        let sheet_names = workbook.sheet_names();
        let name = match &self.config.sheet {
            Some(requested) => {
                if !sheet_names.iter().any(|n| n == requested) {
                    return Err(CleansheetError::SheetNotFound(requested.clone()));
                }
                requested.clone()
            }
            None => sheet_names
                .first()
                .cloned()
                .ok_or_else(|| CleansheetError::EmptyInput("workbook has no sheets".to_string()))?,
        };
        debug!(sheet = %name, "reading worksheet");

        let range = workbook.worksheet_range(&name)?;
        let merge_dims = workbook
            .worksheet_merge_cells(&name)
            .unwrap_or(Ok(Vec::new()))
            .unwrap_or_default();

        let mut sheet = RawSheet::from_grid(&name, Vec::new());
        let Some((row0, col0)) = range.start() else {
            return Ok(sheet);
        };

        sheet.cells = range
            .rows()
            .map(|row| row.iter().map(convert_cell).collect())
            .collect();

        // Merge coordinates are workbook-absolute; rebase them onto the grid.
        for dim in merge_dims {
            if dim.end.0 < row0 || dim.end.1 < col0 {
                debug!(?dim, "skipping merge range outside the used area");
                continue;
            }
            sheet.merges.push(MergeRange::new(
                dim.start.0.saturating_sub(row0) as usize,
                dim.start.1.saturating_sub(col0) as usize,
                (dim.end.0 - row0) as usize,
                (dim.end.1 - col0) as usize,
            )?);
        }

        Ok(sheet)
    }

    /// Read a workbook file, returning the sheet and source metadata.
    pub fn read_path(&self, path: impl AsRef<Path>) -> Result<(RawSheet, SourceMetadata)> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| CleansheetError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let sheet = self.read_bytes(&bytes)?;

        let format = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_else(|| "xlsx".to_string());
        let metadata = SourceMetadata::new(
            path.to_path_buf(),
            content_hash(&bytes),
            bytes.len() as u64,
            format,
            sheet.height().saturating_sub(1),
            sheet.width(),
        );

        Ok((sheet, metadata))
    }
}

/// Map a calamine cell into the pipeline's value model.
fn convert_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(ndt) => CellValue::Date(ndt.date()),
            None => CellValue::Empty,
        },
        Data::DateTimeIso(s) => parse_iso_date(s)
            .map(CellValue::Date)
            .unwrap_or_else(|| CellValue::Text(s.clone())),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => {
            debug!(error = ?e, "error cell read as empty");
            CellValue::Empty
        }
    }
}

fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    if let Ok(ndt) = s.parse::<NaiveDateTime>() {
        return Some(ndt.date());
    }
    s.parse::<NaiveDate>().ok()
}
