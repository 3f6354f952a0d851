//! Fixed-size square grid of cells.
//!
//! ## Layout
//!
//! Cells are stored row-major in a single `Vec<Cell>` of length `size²`.
//! The size is fixed at construction; there is no resizing.
//!
//! ## Bounds
//!
//! Indexing with an out-of-range `(row, col)` is a caller bug and panics.
//! The session keeps its cursor clamped, so it never trips this. Use
//! [`Grid::try_get`] when coordinates come from an untrusted source.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::cell::Cell;
use crate::error::{PuzzleError, Result};

/// Grid coordinates as `(row, col)`.
pub type Coord = (usize, usize);

/// An `N×N` grid of cells, row-major.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

/// Unchecked serialized form of [`Grid`].
#[derive(Deserialize)]
struct RawGrid {
    size: usize,
    cells: Vec<Cell>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = PuzzleError;

    fn try_from(raw: RawGrid) -> Result<Self> {
        if raw.size == 0 || raw.size.checked_mul(raw.size) != Some(raw.cells.len()) {
            return Err(PuzzleError::InvalidGridShape {
                size: raw.size,
                cells: raw.cells.len(),
            });
        }
        Ok(Self {
            size: raw.size,
            cells: raw.cells,
        })
    }
}

impl Grid {
    /// Create an `size×size` grid of empty cells.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "Grid size must be at least 1");

        Self {
            size,
            cells: vec![Cell::EMPTY; size * size],
        }
    }

    /// Side length `N`.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Read a cell. Panics if `(row, col)` is out of range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self[(row, col)]
    }

    /// Write a cell. Panics if `(row, col)` is out of range.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self[(row, col)] = cell;
    }

    /// Checked read.
    pub fn try_get(&self, row: usize, col: usize) -> Result<Cell> {
        if self.contains((row, col)) {
            Ok(self.cells[row * self.size + col])
        } else {
            Err(PuzzleError::OutOfBounds {
                row,
                col,
                size: self.size,
            })
        }
    }

    /// Check whether a coordinate lies inside the grid.
    #[must_use]
    pub fn contains(&self, (row, col): Coord) -> bool {
        row < self.size && col < self.size
    }

    /// Iterate over `((row, col), cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| ((i / size, i % size), cell))
    }

    /// Iterate over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// Number of non-empty cells.
    #[must_use]
    pub fn painted_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    fn offset(&self, (row, col): Coord) -> usize {
        assert!(
            self.contains((row, col)),
            "cell ({}, {}) is outside a {}x{} grid",
            row,
            col,
            self.size,
            self.size
        );
        row * self.size + col
    }
}

impl Index<Coord> for Grid {
    type Output = Cell;

    fn index(&self, coord: Coord) -> &Self::Output {
        &self.cells[self.offset(coord)]
    }
}

impl IndexMut<Coord> for Grid {
    fn index_mut(&mut self, coord: Coord) -> &mut Self::Output {
        let offset = self.offset(coord);
        &mut self.cells[offset]
    }
}
