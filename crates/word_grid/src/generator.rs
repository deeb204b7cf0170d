//! Randomized word placement.
//!
//! Each eligible word gets a fresh shuffle of every grid coordinate, and
//! each coordinate a fresh shuffle of the six directions. The first
//! coordinate and direction that fit wins. Every pair is tried before a
//! word is given up on, so a word is only dropped when it fits nowhere.

use super::coordinate::Coordinate;
use super::direction::Direction;
use super::error::{GridError, GridErrorKind};
use super::grid::Grid;
use derive_getters::Getters;
use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Words must be longer than this to be placed.
pub const MIN_WORD_LEN: usize = 2;

/// Why a word was left out of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Two letters or fewer.
    #[display("too short")]
    TooShort,
    /// As long as the grid side or longer.
    #[display("too long")]
    TooLong,
    /// Contains something other than ASCII letters.
    #[display("not alphabetic")]
    NonAlphabetic,
    /// No coordinate and direction fit.
    #[display("no fit")]
    NoFit,
}

/// A word that made it into the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_new::new)]
pub struct Placement {
    /// The word as written, uppercased.
    word: String,
    /// Cell holding the first letter.
    start: Coordinate,
    /// Direction the word runs in.
    direction: Direction,
}

/// A word that was left out, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_new::new)]
pub struct SkippedWord {
    /// The word as given.
    word: String,
    /// Why it was skipped.
    reason: SkipReason,
}

/// A finished grid plus an account of what happened to each word.
#[derive(Debug, Clone, Getters)]
pub struct Generation {
    /// The completed grid.
    grid: Grid,
    /// Placed words, in input order.
    placements: Vec<Placement>,
    /// Skipped words, in input order.
    skipped: Vec<SkippedWord>,
}

impl Generation {
    /// Discards the report, keeping the grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }
}

/// Checks the `MIN_WORD_LEN < len < grid_size` rule, counting characters.
#[instrument]
pub fn is_eligible(word: &str, grid_size: usize) -> bool {
    length_reason(word, grid_size).is_none()
}

/// Applies the length rule, returning which side of it a word falls on.
fn length_reason(word: &str, grid_size: usize) -> Option<SkipReason> {
    let len = word.chars().count();
    if len <= MIN_WORD_LEN {
        Some(SkipReason::TooShort)
    } else if len >= grid_size {
        Some(SkipReason::TooLong)
    } else {
        None
    }
}

/// Screens a word before any search, returning why it cannot be placed.
fn screen(word: &str, grid_size: usize) -> Option<SkipReason> {
    length_reason(word, grid_size).or_else(|| {
        (!word.chars().all(|c| c.is_ascii_alphabetic())).then_some(SkipReason::NonAlphabetic)
    })
}

/// Word-search grid generator.
///
/// Holds only its random source; every call builds a fresh grid.
#[derive(Debug, Clone)]
pub struct GridGenerator<R = ThreadRng> {
    rng: R,
}

impl GridGenerator<ThreadRng> {
    /// Creates a generator backed by the thread-local RNG.
    #[instrument]
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for GridGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> GridGenerator<R> {
    /// Creates a generator drawing from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a `grid_size x grid_size` grid of uppercase letters.
    ///
    /// # Errors
    ///
    /// Returns `GridErrorKind::InvalidSize` if `grid_size` is zero.
    #[instrument(skip(self, words), fields(word_count = words.len()))]
    pub fn generate<S: AsRef<str>>(
        &mut self,
        grid_size: usize,
        words: &[S],
    ) -> Result<Grid, GridError> {
        Ok(self.generate_with_report(grid_size, words)?.into_grid())
    }

    /// Generates a grid and reports where each word went.
    ///
    /// # Errors
    ///
    /// Returns `GridErrorKind::InvalidSize` if `grid_size` is zero.
    #[instrument(skip(self, words), fields(word_count = words.len()))]
    pub fn generate_with_report<S: AsRef<str>>(
        &mut self,
        grid_size: usize,
        words: &[S],
    ) -> Result<Generation, GridError> {
        if grid_size == 0 {
            return Err(GridError::new(GridErrorKind::InvalidSize(grid_size)));
        }

        let mut grid = Grid::new(grid_size);
        let mut coordinates = Coordinate::all(grid_size);
        let mut placements = Vec::new();
        let mut skipped = Vec::new();

        for word in words {
            let word = word.as_ref();

            if let Some(reason) = screen(word, grid_size) {
                warn!(word, %reason, "Skipping word");
                skipped.push(SkippedWord::new(word.to_string(), reason));
                continue;
            }

            coordinates.shuffle(&mut self.rng);
            match self.place_word(&mut grid, word, &coordinates)? {
                Some(placement) => placements.push(placement),
                None => {
                    warn!(word, "No position fits, dropping word");
                    skipped.push(SkippedWord::new(word.to_string(), SkipReason::NoFit));
                }
            }
        }

        grid.fill_blanks(&mut self.rng);

        info!(
            placed = placements.len(),
            skipped = skipped.len(),
            "Grid generated"
        );
        Ok(Generation {
            grid,
            placements,
            skipped,
        })
    }

    /// Tries each coordinate in order with a freshly shuffled set of
    /// directions, committing the first fit.
    fn place_word(
        &mut self,
        grid: &mut Grid,
        word: &str,
        coordinates: &[Coordinate],
    ) -> Result<Option<Placement>, GridError> {
        let mut directions = Direction::ALL;

        for &start in coordinates {
            directions.shuffle(&mut self.rng);
            let Some(direction) = directions
                .iter()
                .copied()
                .find(|&d| grid.fits(word, start, d))
            else {
                continue;
            };

            grid.write_word(word, start, direction)?;
            debug!(word, %start, %direction, "Placed word");
            return Ok(Some(Placement::new(
                word.to_ascii_uppercase(),
                start,
                direction,
            )));
        }

        Ok(None)
    }
}

/// Generates a grid using the thread-local RNG.
///
/// # Errors
///
/// Returns `GridErrorKind::InvalidSize` if `grid_size` is zero.
pub fn generate<S: AsRef<str>>(grid_size: usize, words: &[S]) -> Result<Grid, GridError> {
    GridGenerator::new().generate(grid_size, words)
}
