//! Puzzle session: action application and match evaluation.
//!
//! A [`Session`] owns everything that changes while a level is played:
//! cursor, paint state, player grid, counters, the action log and the
//! replay cursor. The goal grid is handed in on reset and never mutated.

pub mod matching;
pub mod state;

pub use matching::{evaluate, MatchReport, MatchStatus};
pub use state::{PaintState, Session};
