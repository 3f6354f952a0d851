//! Error type shared by the whole crate.
//!
//! Non-matching patterns are game states, never errors. The variants here
//! cover precondition violations a host can trip over: bad coordinates,
//! action values outside the configured ranges, malformed saved grids, input during replay, and
//! failures decoding a saved action log.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PuzzleError {
    #[error("cell ({row}, {col}) is outside a {size}x{size} grid")]
    OutOfBounds { row: usize, col: usize, size: usize },
    #[error("color {color} is outside the palette of {palette_size} colors")]
    InvalidColor { color: u8, palette_size: usize },
    #[error("rotation by {0} degrees is not a multiple of 90")]
    InvalidRotation(i32),
    #[error("grid of size {size} cannot hold {cells} cells")]
    InvalidGridShape { size: usize, cells: usize },
    #[error("replay in progress, input actions are not accepted")]
    ReplayActive,
    #[error("action log codec failed: {0}")]
    LogCodec(#[from] bincode::Error),
}

pub type Result<T> = std::result::Result<T, PuzzleError>;
