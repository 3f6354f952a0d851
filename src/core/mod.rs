//! Core puzzle types: cells, grids, actions, RNG, configuration.
//!
//! These are plain data types with no knowledge of sessions or levels.

pub mod action;
pub mod cell;
pub mod config;
pub mod grid;
pub mod rng;

pub use action::{Action, RecordedAction};
pub use cell::{Angle, Cell, ColorId};
pub use config::{Palette, PuzzleConfig, DEFAULT_GRID_SIZE};
pub use grid::{Coord, Grid};
pub use rng::{GameRng, GameRngState};
