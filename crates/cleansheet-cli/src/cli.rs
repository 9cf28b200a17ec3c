//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use cleansheet::ConvertTarget;
use std::path::PathBuf;

/// Cleansheet: spreadsheet normalization pipeline
#[derive(Parser)]
#[command(name = "cleansheet")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Normalize and clean a spreadsheet or delimited-text file
    Clean {
        /// Path to the input file (XLSX/CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output path (default: cleaned_<file> next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "grid")]
        format: ConvertTarget,

        /// Print the cleaning summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Stack multiple files into one dataset
    Merge {
        /// Paths to the input files
        #[arg(value_name = "FILES", required = true)]
        files: Vec<PathBuf>,

        /// Output path (default: merged.<ext>)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "grid")]
        format: ConvertTarget,
    },

    /// Convert a file to another tabular format
    Convert {
        /// Path to the input file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Target format (csv or grid)
        #[arg(long)]
        to: String,

        /// Output path (default: input with the target extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
