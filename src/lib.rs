//! # glyph-weaver
//!
//! Puzzle state machine for a grid pattern-matching game: the player moves
//! a cursor over an N×N grid, paints cells with a color and rotation, and
//! must reproduce a generated goal pattern.
//!
//! ## Design Principles
//!
//! 1. **Explicit state**: Everything that changes during play lives in a
//!    [`Session`]. There are no statics.
//!
//! 2. **Deterministic replay**: Input is resolved to a canonical
//!    [`RecordedAction`] before it is applied, so replaying the log from a
//!    reset session always reaches the same state.
//!
//! 3. **Injectable randomness**: Goals come from a [`GoalGenerator`];
//!    the standard one is driven by a seeded [`GameRng`].
//!
//! Rendering, windowing and input-event plumbing belong to the host. The
//! host calls into [`LevelManager`] and reads state back from
//! [`LevelManager::session`].
//!
//! ## Modules
//!
//! - `core`: Cells, grids, actions, RNG, configuration
//! - `replay`: Action log and replay cursor
//! - `session`: Action application and match evaluation
//! - `level`: Difficulty tiers, goal generation, level manager
//! - `error`: Crate error type

pub mod core;
pub mod error;
pub mod level;
pub mod replay;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Action, Angle, Cell, ColorId, Coord, GameRng, GameRngState, Grid, Palette, PuzzleConfig,
    RecordedAction,
};

pub use crate::error::{PuzzleError, Result};

pub use crate::level::{DifficultyTier, GoalGenerator, LevelManager, RandomGoalGenerator};

pub use crate::replay::{ActionLog, Replayer};

pub use crate::session::{evaluate, MatchReport, MatchStatus, PaintState, Session};
