//! Main pipeline struct and public API.

use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::input::{Parser, ParserConfig, SourceMetadata, WorkbookConfig, WorkbookReader};
use crate::output::{self, ConvertTarget};
use crate::table::Dataset;
use crate::transform::{
    merge_datasets, resolve_merges, ColumnInference, InferenceConfig, RowCleanStats, RowCleaner,
    TypeInferencer,
};

/// Configuration for a pipeline instance.
///
/// Passed explicitly at construction; the pipeline reads no process-wide
/// state.
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    /// Workbook reader configuration.
    pub workbook: WorkbookConfig,
    /// Delimited-text parser configuration.
    pub parser: ParserConfig,
    /// Type inference configuration.
    pub inference: InferenceConfig,
}

/// Result of cleaning a dataset.
#[derive(Debug, Clone, Serialize)]
pub struct CleanResult {
    /// The cleaned, type-inferred dataset.
    pub dataset: Dataset,
    /// What the cleaning pass did.
    pub summary: CleanSummary,
}

/// Summary of a cleaning pass.
#[derive(Debug, Clone, Serialize)]
pub struct CleanSummary {
    /// Rows before cleaning.
    pub rows_in: usize,
    /// Rows after cleaning.
    pub rows_out: usize,
    /// Row-level cleaning counters.
    pub stats: RowCleanStats,
    /// Per-column inference outcomes.
    pub columns: Vec<ColumnInference>,
}

/// The spreadsheet normalization pipeline.
///
/// Each invocation operates on its own in-memory input and produces an
/// independent output; no state is shared across invocations.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    workbook: WorkbookReader,
    parser: Parser,
    cleaner: RowCleaner,
    inferencer: TypeInferencer,
}

impl Pipeline {
    /// Create a pipeline with default configuration.
    pub fn new() -> Self {
        Self::with_config(PipelineConfig::default())
    }

    /// Create a pipeline with custom configuration.
    pub fn with_config(config: PipelineConfig) -> Self {
        Self {
            workbook: WorkbookReader::with_config(config.workbook),
            parser: Parser::with_config(config.parser),
            cleaner: RowCleaner::new(),
            inferencer: TypeInferencer::with_config(config.inference),
        }
    }

    /// Normalize workbook bytes into a tabular dataset.
    ///
    /// Resolves merged ranges, then takes the grid's first row as the
    /// header.
    pub fn normalize(&self, bytes: &[u8]) -> Result<Dataset> {
        let sheet = self.workbook.read_bytes(bytes)?;
        let flat = resolve_merges(&sheet)?;
        Ok(Dataset::from_grid(flat.cells))
    }

    /// Normalize a workbook file, returning the dataset and metadata.
    pub fn normalize_path(&self, path: impl AsRef<Path>) -> Result<(Dataset, SourceMetadata)> {
        let (sheet, metadata) = self.workbook.read_path(path)?;
        let flat = resolve_merges(&sheet)?;
        Ok((Dataset::from_grid(flat.cells), metadata))
    }

    /// Parse delimited-text bytes into a tabular dataset.
    pub fn parse_delimited(&self, bytes: &[u8]) -> Result<Dataset> {
        self.parser.parse_bytes_auto(bytes)
    }

    /// Parse a delimited-text file, returning the dataset and metadata.
    pub fn parse_delimited_path(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<(Dataset, SourceMetadata)> {
        self.parser.parse_file(path)
    }

    /// Clean a dataset: row cleaning followed by type inference.
    pub fn clean(&self, dataset: &Dataset) -> CleanResult {
        let rows_in = dataset.row_count();
        let (cleaned, stats) = self.cleaner.clean(dataset);
        let (inferred, columns) = self.inferencer.infer(&cleaned);

        CleanResult {
            summary: CleanSummary {
                rows_in,
                rows_out: inferred.row_count(),
                stats,
                columns,
            },
            dataset: inferred,
        }
    }

    /// Normalize and clean workbook bytes in one pass.
    pub fn process(&self, bytes: &[u8]) -> Result<CleanResult> {
        Ok(self.clean(&self.normalize(bytes)?))
    }

    /// Normalize and clean a workbook file in one pass.
    pub fn process_path(&self, path: impl AsRef<Path>) -> Result<(CleanResult, SourceMetadata)> {
        let (dataset, metadata) = self.normalize_path(path)?;
        Ok((self.clean(&dataset), metadata))
    }

    /// Concatenate datasets by stacking rows under a column union.
    pub fn merge(&self, datasets: &[Dataset]) -> Result<Dataset> {
        merge_datasets(datasets)
    }

    /// Serialize a dataset to the requested target format.
    pub fn convert(&self, dataset: &Dataset, target: ConvertTarget) -> Result<Vec<u8>> {
        match target {
            ConvertTarget::Csv => output::write_csv(dataset),
            ConvertTarget::Grid => output::write_workbook(dataset),
        }
    }
}
