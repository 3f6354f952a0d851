//! Difficulty tiers.
//!
//! Each tier fixes the range the goal's target cube count is drawn from and
//! how many placement attempts the generator may spend reaching it. Level
//! indices map onto tiers cyclically.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DifficultyTier {
    Easy,
    Mild,
    Hard,
}

impl DifficultyTier {
    /// All tiers, easiest first.
    pub const ALL: [DifficultyTier; 3] = [DifficultyTier::Easy, DifficultyTier::Mild, DifficultyTier::Hard];

    /// Number of tiers.
    pub const COUNT: usize = Self::ALL.len();

    /// Tier for a level index (`index mod COUNT`).
    #[must_use]
    pub const fn from_level(index: usize) -> Self {
        Self::ALL[index % Self::COUNT]
    }

    /// Position in [`DifficultyTier::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            DifficultyTier::Easy => 0,
            DifficultyTier::Mild => 1,
            DifficultyTier::Hard => 2,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            DifficultyTier::Easy => "Easy",
            DifficultyTier::Mild => "Mild",
            DifficultyTier::Hard => "Hard",
        }
    }

    /// Range the target cube count is drawn from.
    #[must_use]
    pub const fn cube_range(self) -> RangeInclusive<usize> {
        match self {
            DifficultyTier::Easy => 1..=2,
            DifficultyTier::Mild => 4..=8,
            DifficultyTier::Hard => 10..=16,
        }
    }

    /// Upper bound on cubes a goal of this tier can hold.
    #[must_use]
    pub const fn max_cubes(self) -> usize {
        *self.cube_range().end()
    }

    /// Placement attempts allowed on a `grid_size×grid_size` grid.
    #[must_use]
    pub const fn attempt_budget(self, grid_size: usize) -> usize {
        let cells = grid_size * grid_size;
        match self {
            DifficultyTier::Easy => 20,
            DifficultyTier::Mild => cells,
            DifficultyTier::Hard => 2 * cells,
        }
    }

    /// The following tier, wrapping from `Hard` back to `Easy`.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::from_level(self.index() + 1)
    }
}

impl std::fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
