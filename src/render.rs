//! Output rendering for finished grids.

use super::config::OutputFormat;
use serde::Serialize;
use tracing::instrument;
use word_grid::{Generation, Grid, Placement, SkippedWord};

/// JSON shape of a rendered grid.
#[derive(Debug, Clone, Serialize)]
pub struct GridReport<'a> {
    /// Side length.
    pub size: usize,
    /// Each row as a string of letters.
    pub rows: Vec<String>,
    /// Placed words, present when a report was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placements: Option<&'a [Placement]>,
    /// Skipped words, present when a report was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<&'a [SkippedWord]>,
}

impl<'a> GridReport<'a> {
    /// Builds the report for `generation`, with or without the placement details.
    pub fn new(generation: &'a Generation, with_report: bool) -> Self {
        Self {
            size: generation.grid().size(),
            rows: rows(generation.grid()),
            placements: with_report.then(|| generation.placements().as_slice()),
            skipped: with_report.then(|| generation.skipped().as_slice()),
        }
    }
}

fn rows(grid: &Grid) -> Vec<String> {
    grid.to_chars()
        .into_iter()
        .map(|row| row.into_iter().collect())
        .collect()
}

/// Renders a generated grid in the requested format.
///
/// Text output is the grid's own display form; with `with_report` a line
/// per placed or skipped word follows it.
#[instrument(skip(generation))]
pub fn render(
    generation: &Generation,
    format: OutputFormat,
    with_report: bool,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&GridReport::new(generation, with_report))
        }
        OutputFormat::Text => {
            let mut out = generation.grid().display();
            if with_report {
                for placement in generation.placements() {
                    out.push_str(&format!(
                        "placed {} at {} {}\r\n",
                        placement.word(),
                        placement.start(),
                        placement.direction()
                    ));
                }
                for skipped in generation.skipped() {
                    out.push_str(&format!(
                        "skipped {} ({})\r\n",
                        skipped.word(),
                        skipped.reason()
                    ));
                }
            }
            Ok(out)
        }
    }
}
