//! Goal generation.
//!
//! [`GoalGenerator`] is the seam a level manager draws goals from.
//! [`RandomGoalGenerator`] is the standard implementation: it draws a
//! target cube count from the tier's range, then probes random cells,
//! filling each empty one it hits with a random cube color and rotation.
//! Probing stops at the target or when the tier's attempt budget runs
//! out, so a goal may hold fewer cubes than targeted on a crowded grid.

use crate::core::{Angle, Cell, ColorId, GameRng, GameRngState, Grid, Palette};

use super::tier::DifficultyTier;

/// Source of goal grids.
pub trait GoalGenerator {
    /// Produce a fresh `size×size` goal for `tier`, using colors from
    /// `palette`.
    fn generate(&mut self, tier: DifficultyTier, size: usize, palette: &Palette) -> Grid;
}

/// Random placement driven by a seeded [`GameRng`].
#[derive(Clone, Debug)]
pub struct RandomGoalGenerator {
    rng: GameRng,
}

impl RandomGoalGenerator {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }

    /// Checkpoint of the underlying RNG. Restoring it with
    /// [`GameRng::from_state`] reproduces the goals generated from here on.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}

impl GoalGenerator for RandomGoalGenerator {
    fn generate(&mut self, tier: DifficultyTier, size: usize, palette: &Palette) -> Grid {
        let mut goal = Grid::new(size);
        let target = self.rng.gen_inclusive(tier.cube_range());
        let budget = tier.attempt_budget(size);
        let cube_colors = palette.len() - 1;

        let mut attempts = 0;
        let mut placed = 0;
        while placed < target && attempts < budget {
            let row = self.rng.gen_index(size);
            let col = self.rng.gen_index(size);
            attempts += 1;

            if goal[(row, col)].is_empty() {
                let color = ColorId::new(1 + self.rng.gen_index(cube_colors) as u8);
                let rotation = self.rng.choose(&Angle::ALL).copied().unwrap_or_default();
                goal[(row, col)] = Cell::new(color, rotation);
                placed += 1;
            }
        }

        if placed < target {
            log::warn!(
                "{} goal placed {} of {} cubes after {} attempts",
                tier,
                placed,
                target,
                attempts
            );
        }
        goal
    }
}
