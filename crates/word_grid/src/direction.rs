//! The six directions a word can run in.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A direction a word is laid down in.
///
/// Each variant carries a constant (row, column) step that is applied
/// once per letter. Forward variants step towards higher indices,
/// backward variants towards lower ones.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Direction {
    /// Left to right along a row.
    ForwardHorizontal,
    /// Top to bottom along a column.
    ForwardVertical,
    /// Down and to the right.
    ForwardDiagonal,
    /// Right to left along a row.
    BackwardHorizontal,
    /// Bottom to top along a column.
    BackwardVertical,
    /// Up and to the left.
    BackwardDiagonal,
}

impl Direction {
    /// All six directions.
    pub const ALL: [Direction; 6] = [
        Direction::ForwardHorizontal,
        Direction::ForwardVertical,
        Direction::ForwardDiagonal,
        Direction::BackwardHorizontal,
        Direction::BackwardVertical,
        Direction::BackwardDiagonal,
    ];

    /// Per-letter (row, column) step.
    #[instrument]
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::ForwardHorizontal => (0, 1),
            Direction::ForwardVertical => (1, 0),
            Direction::ForwardDiagonal => (1, 1),
            Direction::BackwardHorizontal => (0, -1),
            Direction::BackwardVertical => (-1, 0),
            Direction::BackwardDiagonal => (-1, -1),
        }
    }

    /// Returns true for the three directions that step towards higher indices.
    pub fn is_forward(self) -> bool {
        matches!(
            self,
            Direction::ForwardHorizontal | Direction::ForwardVertical | Direction::ForwardDiagonal
        )
    }
}
