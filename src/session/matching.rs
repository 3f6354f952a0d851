//! Match evaluation between a player grid and a goal grid.
//!
//! ## Rules
//!
//! - Every non-empty goal cell is a *required* cube. It scores when the
//!   player cell has the same color and rotation; anything else fails the
//!   match.
//! - A painted player cell over an empty goal cell fails the match.
//! - An empty goal with an empty player grid is always a match.
//! - Otherwise, if the number of required cubes differs from the number of
//!   painted cubes, the match fails regardless of the per-cell result.
//!
//! The score counts matched required cubes and is kept on failure, so it
//! reflects partial progress.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Coord, Grid};

/// Cached result of the last match evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchStatus {
    /// Not evaluated since the last reset.
    #[default]
    Unknown,
    Match,
    NoMatch,
}

impl MatchStatus {
    #[must_use]
    pub const fn is_match(self) -> bool {
        matches!(self, MatchStatus::Match)
    }
}

/// Full outcome of comparing a player grid against a goal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    /// Overall verdict.
    pub matched: bool,
    /// Required cubes reproduced exactly.
    pub score: usize,
    /// Non-empty goal cells.
    pub required: usize,
    /// Non-empty player cells.
    pub painted: usize,
    /// Cells where the player grid disagrees with the goal, row-major.
    pub mistakes: SmallVec<[Coord; 8]>,
}

impl MatchReport {
    #[must_use]
    pub fn status(&self) -> MatchStatus {
        if self.matched {
            MatchStatus::Match
        } else {
            MatchStatus::NoMatch
        }
    }
}

/// Compare `player` against `goal`. Neither grid is modified.
///
/// Both grids must have the same size.
#[must_use]
pub fn evaluate(player: &Grid, goal: &Grid) -> MatchReport {
    assert_eq!(
        player.size(),
        goal.size(),
        "Player and goal grids must have the same size"
    );

    let mut matched = true;
    let mut score = 0;
    let mut required = 0;
    let mut mistakes = SmallVec::new();

    for ((coord, goal_cell), (_, player_cell)) in goal.iter().zip(player.iter()) {
        if !goal_cell.is_empty() {
            required += 1;
            if player_cell == goal_cell {
                score += 1;
            } else {
                matched = false;
                mistakes.push(coord);
            }
        } else if !player_cell.is_empty() {
            matched = false;
            mistakes.push(coord);
        }
    }

    let painted = player.painted_count();
    if required == 0 && painted == 0 {
        matched = true;
    } else if required != painted {
        matched = false;
    }

    MatchReport {
        matched,
        score,
        required,
        painted,
        mistakes,
    }
}
