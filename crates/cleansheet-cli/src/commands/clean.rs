//! Clean command - normalize, clean and re-export a file.

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use cleansheet::{ConvertTarget, Pipeline};
use colored::Colorize;

use super::{default_output, load_dataset};

pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    format: ConvertTarget,
    json: bool,
    verbose: bool,
) -> Result<(), Box<dyn Error>> {
    println!(
        "{} {}",
        "Cleaning".cyan().bold(),
        file.display().to_string().white()
    );

    let pipeline = Pipeline::new();
    let (dataset, source) = load_dataset(&pipeline, &file)?;
    let result = pipeline.clean(&dataset);

    if json {
        println!("{}", serde_json::to_string_pretty(&result.summary)?);
    } else {
        let stats = &result.summary.stats;
        println!(
            "Kept {} of {} rows ({} duplicates, {} empty rows removed, {} cells filled)",
            result.summary.rows_out.to_string().white().bold(),
            result.summary.rows_in,
            stats.duplicates_removed.to_string().yellow(),
            stats.empty_rows_removed.to_string().yellow(),
            stats.cells_filled.to_string().blue()
        );

        if verbose {
            println!();
            println!("{}", "Source:".yellow().bold());
            println!("  {} ({} bytes, {})", source.file, source.size_bytes, source.format);
            println!("  {}", source.hash);
            println!();
            println!("{}", "Columns:".yellow().bold());
            for col in &result.summary.columns {
                let ratio = col
                    .date_match_ratio
                    .map(|r| format!("{:>3.0}% date-like", r * 100.0))
                    .unwrap_or_else(|| "   non-textual".to_string());
                println!(
                    "  {:20} {:8} {} ({} converted, {} retained)",
                    col.name,
                    format!("{:?}", col.domain).to_lowercase(),
                    ratio,
                    col.values_converted,
                    col.values_retained
                );
            }
            println!();
        }
    }

    let output_path = output.unwrap_or_else(|| default_output(&file, "cleaned_", format));
    let bytes = pipeline.convert(&result.dataset, format)?;
    fs::write(&output_path, bytes)?;

    println!(
        "{} {}",
        "Wrote".green().bold(),
        output_path.display().to_string().white()
    );

    Ok(())
}
