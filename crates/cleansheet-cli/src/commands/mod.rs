//! CLI subcommand implementations.

pub mod clean;
pub mod convert;
pub mod merge;

use std::error::Error;
use std::path::{Path, PathBuf};

use cleansheet::{CleansheetError, ConvertTarget, Dataset, Pipeline, SourceMetadata};

/// Load a dataset from a path, dispatching on the file extension.
pub(crate) fn load_dataset(
    pipeline: &Pipeline,
    path: &Path,
) -> Result<(Dataset, SourceMetadata), Box<dyn Error>> {
    if !path.exists() {
        return Err(format!("File not found: {}", path.display()).into());
    }

    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "xlsx" | "xlsm" => Ok(pipeline.normalize_path(path)?),
        "csv" | "tsv" | "txt" | "psv" => Ok(pipeline.parse_delimited_path(path)?),
        other => Err(CleansheetError::UnsupportedFormat(other.to_string()).into()),
    }
}

/// File extension for a conversion target.
pub(crate) fn extension_for(target: ConvertTarget) -> &'static str {
    match target {
        ConvertTarget::Csv => "csv",
        ConvertTarget::Grid => "xlsx",
    }
}

/// Default output path: `<prefix><stem>.<ext>` next to the input.
pub(crate) fn default_output(input: &Path, prefix: &str, target: ConvertTarget) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    input.with_file_name(format!("{}{}.{}", prefix, stem, extension_for(target)))
}
