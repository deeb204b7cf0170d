//! Word Grid - CLI
//!
//! Generates a word-search grid from a size and a list of words.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use word_grid::GridGenerator;
use word_grid_cli::{GridConfig, OutputFormat, render};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Generate {
            size,
            words,
            config,
            format,
            report,
        } => run_generate(size, words, config, format, report),
    }
}

/// Generate a grid and write it to stdout
#[instrument(skip(words), fields(word_count = words.len()))]
fn run_generate(
    size: Option<usize>,
    words: Vec<String>,
    config: Option<PathBuf>,
    format: Option<OutputFormat>,
    report: bool,
) -> Result<()> {
    let config = match config {
        Some(path) => GridConfig::from_file(path)?,
        None => GridConfig::default(),
    }
    .with_overrides(size, words, format);

    info!(grid_size = config.grid_size(), format = %config.format(), "Generating grid");
    let generation = GridGenerator::new().generate_with_report(*config.grid_size(), config.words())?;

    let output = render(&generation, *config.format(), report)?;
    if output.ends_with('\n') {
        print!("{output}");
    } else {
        println!("{output}");
    }
    Ok(())
}
