//! Player actions in raw and recorded form.
//!
//! The input layer produces [`Action`]s. Before an action is applied it is
//! resolved into a [`RecordedAction`], which is what the action log keeps
//! and what replay feeds back into the session. The two differ only for
//! `Paint`: the raw form means "paint with whatever is selected now", the
//! recorded form carries a snapshot of that selection so replay does not
//! depend on paint state that may have changed since.
//!
//! ## Example
//!
//! ```
//! use glyph_weaver::core::{Action, Angle, ColorId, RecordedAction};
//!
//! let raw = Action::Paint;
//! let recorded = RecordedAction::Paint {
//!     color: ColorId::new(2),
//!     rotation: Angle::Deg90,
//!     mirrored: false,
//! };
//! assert!(raw.is_paint());
//! assert!(recorded.is_paint());
//! ```

use serde::{Deserialize, Serialize};

use super::cell::{Angle, Cell, ColorId};

/// Raw input action, as produced by the host's input layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move the cursor by `(d_row, d_col)`, clamped to the grid.
    Move(i32, i32),
    /// Select the paint color.
    SetColor(ColorId),
    /// Rotate the paint rotation by a multiple of 90 degrees.
    Rotate(i32),
    /// Paint the cursor cell with the current paint state.
    Paint,
}

impl Action {
    pub const UP: Action = Action::Move(-1, 0);
    pub const DOWN: Action = Action::Move(1, 0);
    pub const LEFT: Action = Action::Move(0, -1);
    pub const RIGHT: Action = Action::Move(0, 1);

    /// Quarter turn clockwise.
    pub const ROTATE_CW: Action = Action::Rotate(90);
    /// Quarter turn counter-clockwise.
    pub const ROTATE_CCW: Action = Action::Rotate(-90);

    #[must_use]
    pub const fn is_paint(&self) -> bool {
        matches!(self, Action::Paint)
    }
}

/// Canonical, replayable form of an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordedAction {
    Move(i32, i32),
    SetColor(ColorId),
    /// Rotation delta in degrees, already checked to be a multiple of 90.
    Rotate(i32),
    /// Paint with a snapshot of the paint state and mirror flag taken at
    /// record time.
    Paint {
        color: ColorId,
        rotation: Angle,
        mirrored: bool,
    },
}

impl RecordedAction {
    #[must_use]
    pub const fn is_paint(&self) -> bool {
        matches!(self, RecordedAction::Paint { .. })
    }

    /// The cell a `Paint` writes, `None` for every other action.
    #[must_use]
    pub const fn painted_cell(&self) -> Option<Cell> {
        match *self {
            RecordedAction::Paint { color, rotation, .. } => Some(Cell::new(color, rotation)),
            _ => None,
        }
    }
}

impl std::fmt::Display for RecordedAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordedAction::Move(d_row, d_col) => write!(f, "move({d_row}, {d_col})"),
            RecordedAction::SetColor(color) => write!(f, "set {color}"),
            RecordedAction::Rotate(delta) => write!(f, "rotate {delta:+}"),
            RecordedAction::Paint {
                color,
                rotation,
                mirrored,
            } => {
                write!(f, "paint {color} at {rotation}")?;
                if *mirrored {
                    write!(f, " (mirrored)")?;
                }
                Ok(())
            }
        }
    }
}
