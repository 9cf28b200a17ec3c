//! Convert command - re-serialize a file in another tabular format.

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use cleansheet::{ConvertTarget, Pipeline};
use colored::Colorize;

use super::{default_output, load_dataset};

pub fn run(file: PathBuf, to: String, output: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
    let target: ConvertTarget = to.parse()?;

    println!(
        "{} {} to {}",
        "Converting".cyan().bold(),
        file.display().to_string().white(),
        target.to_string().white()
    );

    let pipeline = Pipeline::new();
    let (dataset, _) = load_dataset(&pipeline, &file)?;
    let bytes = pipeline.convert(&dataset, target)?;

    let output_path = output.unwrap_or_else(|| default_output(&file, "", target));
    fs::write(&output_path, bytes)?;

    println!(
        "{} {}",
        "Wrote".green().bold(),
        output_path.display().to_string().white()
    );

    Ok(())
}
