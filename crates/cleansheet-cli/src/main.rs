//! Cleansheet CLI - spreadsheet normalization pipeline.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Clean {
            file,
            output,
            format,
            json,
        } => commands::clean::run(file, output, format, json, cli.verbose),

        Commands::Merge {
            files,
            output,
            format,
        } => commands::merge::run(files, output, format),

        Commands::Convert { file, to, output } => commands::convert::run(file, to, output),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "cleansheet=debug"
    } else {
        "cleansheet=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_target(false)
        .init();
}
