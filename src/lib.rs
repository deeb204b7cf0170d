//! Word grid command-line support library.
//!
//! Wraps the [`word_grid`] generator with the pieces a front end needs.
//!
//! # Architecture
//!
//! - **Config**: TOML grid settings, overridable from the command line
//! - **Render**: plain text or JSON output of a finished grid
//!
//! # Example
//!
//! ```no_run
//! use word_grid_cli::{GridConfig, OutputFormat, render};
//! use word_grid::GridGenerator;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = GridConfig::from_file("grid.toml")?;
//! let generation = GridGenerator::new().generate_with_report(*config.grid_size(), config.words())?;
//! println!("{}", render(&generation, OutputFormat::Text, false)?);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod render;

pub use config::{ConfigError, GridConfig, OutputFormat};
pub use render::{GridReport, render};
