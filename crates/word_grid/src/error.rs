//! Generator error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GridErrorKind {
    /// The requested grid size was zero.
    #[display("grid size must be positive, got {}", _0)]
    InvalidSize(usize),
    /// A cell outside the grid was addressed.
    #[display("cell ({}, {}) is outside a {}x{} grid", row, col, size, size)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Grid side length.
        size: usize,
    },
    /// Stepping from a cell would move below row or column zero.
    #[display("step {} from ({}, {}) leaves the grid", step, row, col)]
    StepOffGrid {
        /// Starting row.
        row: usize,
        /// Starting column.
        col: usize,
        /// Step index that underflowed.
        step: usize,
    },
}

/// Generator error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Grid error: {} at {}:{}", kind, file, line)]
pub struct GridError {
    /// Error kind.
    pub kind: GridErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl GridError {
    /// Creates a new grid error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: GridErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
