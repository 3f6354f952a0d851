//! Cell values: a palette color plus a quarter-turn rotation.
//!
//! Cells are plain `Copy` values compared structurally. Color 0 is the
//! empty cell; every other id indexes the configured palette.

use serde::{Deserialize, Serialize};

/// Palette index. `ColorId::EMPTY` (0) marks an unpainted cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ColorId(pub u8);

impl ColorId {
    /// The empty color.
    pub const EMPTY: Self = Self(0);

    /// First non-empty palette color, the default paint color.
    pub const FIRST: Self = Self(1);

    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for ColorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Color({})", self.0)
    }
}

/// Cube rotation around the vertical axis, in quarter turns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Angle {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Angle {
    /// All angles in ascending order.
    pub const ALL: [Angle; 4] = [Angle::Deg0, Angle::Deg90, Angle::Deg180, Angle::Deg270];

    /// Angle in degrees (0, 90, 180 or 270).
    #[must_use]
    pub const fn degrees(self) -> u16 {
        match self {
            Angle::Deg0 => 0,
            Angle::Deg90 => 90,
            Angle::Deg180 => 180,
            Angle::Deg270 => 270,
        }
    }

    /// Parse a degree value, normalizing it into `[0, 360)` first.
    ///
    /// Returns `None` unless the value is a multiple of 90.
    #[must_use]
    pub fn from_degrees(degrees: i32) -> Option<Self> {
        match degrees.rem_euclid(360) {
            0 => Some(Angle::Deg0),
            90 => Some(Angle::Deg90),
            180 => Some(Angle::Deg180),
            270 => Some(Angle::Deg270),
            _ => None,
        }
    }

    /// Rotate by a whole number of quarter turns (negative turns go
    /// counter-clockwise).
    #[must_use]
    pub fn rotated(self, quarter_turns: i32) -> Self {
        let index = (self.degrees() as i32 / 90 + quarter_turns).rem_euclid(4);
        Self::ALL[index as usize]
    }
}

impl std::fmt::Display for Angle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// A single grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub color: ColorId,
    pub rotation: Angle,
}

impl Cell {
    /// The unpainted cell: color 0, rotation 0.
    pub const EMPTY: Self = Self {
        color: ColorId::EMPTY,
        rotation: Angle::Deg0,
    };

    #[must_use]
    pub const fn new(color: ColorId, rotation: Angle) -> Self {
        Self { color, rotation }
    }

    /// True when the cell holds no cube.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.color.is_empty()
    }
}
