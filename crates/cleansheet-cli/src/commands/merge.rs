//! Merge command - stack multiple files into one dataset.

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use cleansheet::{ConvertTarget, Pipeline};
use colored::Colorize;

use super::{extension_for, load_dataset};

pub fn run(
    files: Vec<PathBuf>,
    output: Option<PathBuf>,
    format: ConvertTarget,
) -> Result<(), Box<dyn Error>> {
    println!(
        "{} {} files",
        "Merging".cyan().bold(),
        files.len().to_string().white()
    );

    let pipeline = Pipeline::new();
    let mut datasets = Vec::with_capacity(files.len());
    for file in &files {
        let (dataset, _) = load_dataset(&pipeline, file)?;
        println!(
            "  {} ({} rows, {} columns)",
            file.display(),
            dataset.row_count(),
            dataset.column_count()
        );
        datasets.push(dataset);
    }

    let merged = pipeline.merge(&datasets)?;
    println!(
        "Merged into {} rows, {} columns",
        merged.row_count().to_string().white().bold(),
        merged.column_count().to_string().white().bold()
    );

    let output_path =
        output.unwrap_or_else(|| PathBuf::from(format!("merged.{}", extension_for(format))));
    let bytes = pipeline.convert(&merged, format)?;
    fs::write(&output_path, bytes)?;

    println!(
        "{} {}",
        "Wrote".green().bold(),
        output_path.display().to_string().white()
    );

    Ok(())
}
