//! Command-line interface for word_grid.

use clap::{Parser, Subcommand};
use word_grid_cli::OutputFormat;

/// Word Grid - word-search puzzle generator
#[derive(Parser, Debug)]
#[command(name = "word_grid")]
#[command(about = "Generate word-search puzzle grids", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a grid and print it
    Generate {
        /// Side length of the square grid
        #[arg(short, long)]
        size: Option<usize>,

        /// Comma-separated candidate words
        #[arg(short, long, value_delimiter = ',')]
        words: Vec<String>,

        /// Path to a TOML grid config
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Also list where each word was placed or why it was skipped
        #[arg(long)]
        report: bool,
    },
}
