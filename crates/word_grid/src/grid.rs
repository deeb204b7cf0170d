//! The square letter grid and the per-direction fit check.

use super::coordinate::Coordinate;
use super::direction::Direction;
use super::error::{GridError, GridErrorKind};
use rand::Rng;
use tracing::{debug, instrument};

/// Filler alphabet.
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Character shown for a cell nothing has been written to yet.
pub const BLANK: char = '_';

/// A single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Nothing written yet.
    Blank,
    /// An uppercase letter.
    Letter(char),
}

impl Cell {
    /// Character used when rendering this cell.
    pub fn as_char(self) -> char {
        match self {
            Cell::Blank => BLANK,
            Cell::Letter(c) => c,
        }
    }

    /// Checks if nothing has been written to this cell.
    pub fn is_blank(self) -> bool {
        matches!(self, Cell::Blank)
    }
}

/// Square grid of cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a `size x size` grid with every cell blank.
    #[instrument]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Blank; size * size],
        }
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the cell at `coord`, or `None` outside the grid.
    pub fn get(&self, coord: Coordinate) -> Option<Cell> {
        self.index(coord).and_then(|i| self.cells.get(i)).copied()
    }

    /// Sets the cell at `coord`.
    ///
    /// # Errors
    ///
    /// Returns `GridErrorKind::OutOfBounds` if `coord` is outside the grid.
    pub fn set(&mut self, coord: Coordinate, cell: Cell) -> Result<(), GridError> {
        let size = self.size;
        let slot = self.index(coord).and_then(|i| self.cells.get_mut(i));
        let Some(slot) = slot else {
            return Err(GridError::new(GridErrorKind::OutOfBounds {
                row: coord.row,
                col: coord.col,
                size,
            }));
        };
        *slot = cell;
        Ok(())
    }

    /// Row-major index of `coord`, or `None` outside the grid.
    fn index(&self, coord: Coordinate) -> Option<usize> {
        coord
            .is_within(self.size)
            .then(|| coord.row * self.size + coord.col)
    }

    /// Number of cells still blank.
    pub fn blank_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_blank()).count()
    }

    /// Checks that no blank cell remains.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|c| !c.is_blank())
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Converts the grid into a `size x size` character matrix.
    pub fn to_chars(&self) -> Vec<Vec<char>> {
        self.rows()
            .map(|row| row.iter().map(|c| c.as_char()).collect())
            .collect()
    }

    /// Checks whether `word` can be written from `start` along `direction`.
    ///
    /// Forward steps require `start + len < size` on each moving axis and
    /// backward steps require `start >= len`, so the last and first index
    /// along the traversal axis are never reached. A non-blank cell only
    /// blocks when its letter differs from the (uppercased) word letter.
    pub fn fits(&self, word: &str, start: Coordinate, direction: Direction) -> bool {
        let len = word.chars().count();
        let (dr, dc) = direction.delta();
        if !axis_allows(start.row, dr, len, self.size) || !axis_allows(start.col, dc, len, self.size)
        {
            return false;
        }

        word.chars().enumerate().all(|(i, letter)| {
            match start.step(direction, i).and_then(|coord| self.get(coord)) {
                Some(Cell::Blank) => true,
                Some(Cell::Letter(existing)) => existing == letter.to_ascii_uppercase(),
                None => false,
            }
        })
    }

    /// Writes `word`, uppercased, from `start` along `direction`.
    ///
    /// Callers check [`Grid::fits`] first; matching letters on overlaps
    /// are rewritten unchanged.
    ///
    /// # Errors
    ///
    /// Returns `GridErrorKind::OutOfBounds` if the word runs past the far
    /// edge and `GridErrorKind::StepOffGrid` if it runs below index zero.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn write_word(
        &mut self,
        word: &str,
        start: Coordinate,
        direction: Direction,
    ) -> Result<(), GridError> {
        for (i, letter) in word.chars().enumerate() {
            let coord = start.step(direction, i).ok_or_else(|| {
                GridError::new(GridErrorKind::StepOffGrid {
                    row: start.row,
                    col: start.col,
                    step: i,
                })
            })?;
            self.set(coord, Cell::Letter(letter.to_ascii_uppercase()))?;
        }
        Ok(())
    }

    /// Reads `len` letters from `start` along `direction`.
    ///
    /// Returns `None` if the run leaves the grid or crosses a blank cell.
    pub fn read(&self, start: Coordinate, direction: Direction, len: usize) -> Option<String> {
        (0..len)
            .map(|i| match self.get(start.step(direction, i)?)? {
                Cell::Letter(c) => Some(c),
                Cell::Blank => None,
            })
            .collect()
    }

    /// Replaces every blank cell with an independently drawn random letter.
    #[instrument(skip(self, rng), fields(size = self.size))]
    pub fn fill_blanks<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut filled = 0usize;
        for cell in self.cells.iter_mut().filter(|c| c.is_blank()) {
            let letter = ALPHABET[rng.gen_range(0..ALPHABET.len())];
            *cell = Cell::Letter(char::from(letter));
            filled += 1;
        }
        debug!(filled, "Filled blank cells");
    }

    /// Formats the grid as text: each cell followed by a space, each row
    /// terminated by CRLF.
    pub fn display(&self) -> String {
        let mut result = String::with_capacity(self.size * (self.size * 2 + 2));
        for row in self.rows() {
            for cell in row {
                result.push(cell.as_char());
                result.push(' ');
            }
            result.push_str("\r\n");
        }
        result
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}

/// Bound rule for one axis moving by `delta` per letter.
fn axis_allows(start: usize, delta: isize, len: usize, size: usize) -> bool {
    match delta.signum() {
        1 => start + len < size,
        -1 => start >= len,
        _ => true,
    }
}
