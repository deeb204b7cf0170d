//! Grid settings loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// How a finished grid is printed.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// Space-separated letters, one row per line.
    #[default]
    Text,
    /// Rows as JSON strings.
    Json,
}

/// Settings for one grid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GridConfig {
    /// Side length of the square grid.
    #[serde(default = "default_grid_size")]
    grid_size: usize,

    /// Candidate words, placed in this order.
    #[serde(default)]
    words: Vec<String>,

    /// Output format.
    #[serde(default)]
    format: OutputFormat,
}

#[instrument]
fn default_grid_size() -> usize {
    10
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            grid_size: default_grid_size(),
            words: Vec::new(),
            format: OutputFormat::default(),
        }
    }
}

impl GridConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {e}"))
        })?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {e}")))?;

        info!(
            grid_size = config.grid_size,
            words = config.words.len(),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Applies command-line values on top of this configuration.
    ///
    /// A non-empty `words` list replaces the configured words rather than
    /// extending them.
    #[instrument(skip(self, words), fields(word_count = words.len()))]
    pub fn with_overrides(
        self,
        grid_size: Option<usize>,
        words: Vec<String>,
        format: Option<OutputFormat>,
    ) -> Self {
        let mut config = self;
        if let Some(grid_size) = grid_size {
            config = config.with_grid_size(grid_size);
        }
        if !words.is_empty() {
            config = config.with_words(words);
        }
        if let Some(format) = format {
            config = config.with_format(format);
        }
        config
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// What went wrong while loading the grid config.
    pub message: String,
    /// Line where the error was raised.
    pub line: u32,
    /// File where the error was raised.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a config error tagged with the caller's location.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
