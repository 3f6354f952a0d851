//! Levels: difficulty tiers, goal generation, and the level manager.
//!
//! The level manager is the only place that changes the active tier. It
//! asks a [`GoalGenerator`] for a goal and resets the session with it.

pub mod generator;
pub mod manager;
pub mod tier;

pub use generator::{GoalGenerator, RandomGoalGenerator};
pub use manager::LevelManager;
pub use tier::DifficultyTier;
