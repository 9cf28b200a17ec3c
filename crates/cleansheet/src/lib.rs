//! Cleansheet: spreadsheet normalization pipeline for tabular datasets.
//!
//! Cleansheet ingests spreadsheet files, normalizes their structure and
//! content, and re-emits them in a chosen tabular format. The pipeline runs
//! three ordered stages over one in-memory table: merged-range resolution,
//! row/value cleaning (dedupe, empty-row removal, placeholder fill), and
//! per-column type inference for dates and numbers. Independent datasets
//! can be stacked into one, and any dataset can be serialized back to
//! delimited text or a workbook grid.
//!
//! # Example
//!
//! ```no_run
//! use cleansheet::{ConvertTarget, Pipeline};
//!
//! let pipeline = Pipeline::new();
//! let bytes = std::fs::read("report.xlsx").unwrap();
//!
//! let result = pipeline.process(&bytes).unwrap();
//! println!("rows: {}", result.dataset.row_count());
//!
//! let csv = pipeline.convert(&result.dataset, ConvertTarget::Csv).unwrap();
//! std::fs::write("report.csv", csv).unwrap();
//! ```

pub mod error;
pub mod input;
pub mod output;
pub mod table;
pub mod transform;

mod pipeline;

pub use crate::pipeline::{CleanResult, CleanSummary, Pipeline, PipelineConfig};
pub use error::{CleansheetError, Result};
pub use input::{MergeRange, Parser, ParserConfig, RawSheet, SourceMetadata, WorkbookConfig, WorkbookReader};
pub use output::ConvertTarget;
pub use table::{CellValue, Column, Dataset, Domain};
pub use transform::{ColumnInference, InferenceConfig, RowCleanStats, RowCleaner, TypeInferencer};
