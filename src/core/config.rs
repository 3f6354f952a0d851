//! Puzzle configuration.
//!
//! Hosts configure the puzzle at startup by providing:
//! - `grid_size`: side length `N` of the square grid (default 8)
//! - `Palette`: the colors a cube can take, index 0 being "empty"
//!
//! Configuration is plain data (serde-enabled) so a host can load it from
//! whatever format it likes.

use serde::{Deserialize, Serialize};

use super::cell::ColorId;

/// Default grid side length.
pub const DEFAULT_GRID_SIZE: usize = 8;

/// Ordered list of RGB colors.
///
/// Entry 0 is the color drawn for empty cells and is never a valid cube
/// color for goal generation. Entries `1..len()` are paintable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    colors: Vec<[f32; 3]>,
}

impl Palette {
    /// Create a palette from RGB triples.
    ///
    /// Needs at least two entries: the empty color and one cube color.
    #[must_use]
    pub fn new(colors: Vec<[f32; 3]>) -> Self {
        assert!(colors.len() >= 2, "Palette needs an empty color and at least one cube color");
        assert!(colors.len() <= u8::MAX as usize + 1, "At most 256 palette colors supported");

        Self { colors }
    }

    /// Number of palette entries, `K`. Valid color ids are `0..K`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; a palette has at least two entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// RGB for a color id, if it is in range.
    #[must_use]
    pub fn rgb(&self, color: ColorId) -> Option<[f32; 3]> {
        self.colors.get(color.raw() as usize).copied()
    }

    #[must_use]
    pub fn contains(&self, color: ColorId) -> bool {
        (color.raw() as usize) < self.colors.len()
    }

    /// Paintable (non-empty) color ids.
    pub fn cube_colors(&self) -> impl Iterator<Item = ColorId> {
        (1..self.colors.len() as u16).map(|id| ColorId::new(id as u8))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(vec![
            [0.1, 0.1, 0.1],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
            [1.0, 1.0, 0.0],
        ])
    }
}

/// Complete puzzle configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PuzzleConfig {
    /// Side length of the square grid.
    pub grid_size: usize,

    /// Cube colors.
    pub palette: Palette,
}

impl PuzzleConfig {
    /// Create a configuration with the default palette.
    #[must_use]
    pub fn new(grid_size: usize) -> Self {
        assert!(grid_size > 0, "Grid size must be at least 1");

        Self {
            grid_size,
            palette: Palette::default(),
        }
    }

    /// Replace the palette.
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Grid center, where the cursor starts.
    #[must_use]
    pub fn center(&self) -> (usize, usize) {
        (self.grid_size / 2, self.grid_size / 2)
    }
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_SIZE)
    }
}
