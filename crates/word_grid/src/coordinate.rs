//! Grid cell coordinates.

use super::direction::Direction;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A (row, column) cell position.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_new::new,
)]
#[display("({}, {})", row, col)]
pub struct Coordinate {
    /// Zero-based row index.
    pub row: usize,
    /// Zero-based column index.
    pub col: usize,
}

impl Coordinate {
    /// Enumerates every cell of a `size x size` grid in row-major order.
    #[instrument]
    pub fn all(size: usize) -> Vec<Coordinate> {
        (0..size)
            .flat_map(|row| (0..size).map(move |col| Coordinate::new(row, col)))
            .collect()
    }

    /// Coordinate reached after `n` steps in `direction`.
    ///
    /// Returns `None` if either axis would drop below zero. The upper
    /// bound is the grid's concern.
    pub fn step(self, direction: Direction, n: usize) -> Option<Coordinate> {
        let (dr, dc) = direction.delta();
        let n = isize::try_from(n).ok()?;
        let row = self.row.checked_add_signed(dr.checked_mul(n)?)?;
        let col = self.col.checked_add_signed(dc.checked_mul(n)?)?;
        Some(Coordinate::new(row, col))
    }

    /// Checks that both axes are below `size`.
    pub fn is_within(self, size: usize) -> bool {
        self.row < size && self.col < size
    }
}
