//! Word-search grid generation.
//!
//! Places candidate words into a square grid along one of six linear
//! directions, letting words cross where their letters agree, then fills
//! every untouched cell with a random uppercase letter.
//!
//! # Example
//!
//! ```
//! use word_grid::generate;
//!
//! let grid = generate(5, &["cat"]).unwrap();
//! assert_eq!(grid.size(), 5);
//! assert!(grid.is_complete());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod coordinate;
mod direction;
mod error;
mod generator;
mod grid;

pub use coordinate::Coordinate;
pub use direction::Direction;
pub use error::{GridError, GridErrorKind};
pub use generator::{
    Generation, GridGenerator, MIN_WORD_LEN, Placement, SkipReason, SkippedWord, generate,
    is_eligible,
};
pub use grid::{ALPHABET, BLANK, Cell, Grid};
