//! Replay cursor over an [`ActionLog`].
//!
//! The replayer only tracks whether a replay is running and how far it has
//! got. Applying the actions it hands out is the session's job, through the
//! same path live input uses.

use serde::{Deserialize, Serialize};

use super::action_log::ActionLog;
use crate::core::RecordedAction;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replayer {
    active: bool,
    position: usize,
}

impl Replayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter replay mode at the start of the log.
    pub fn start(&mut self) {
        self.active = true;
        self.position = 0;
    }

    /// Leave replay mode and rewind.
    pub fn stop(&mut self) {
        self.active = false;
        self.position = 0;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Number of actions handed out so far.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Hand out the next action of `log`.
    ///
    /// Returns `None` when not replaying. When the log is exhausted, replay
    /// mode is cleared and `None` is returned.
    pub fn advance(&mut self, log: &ActionLog) -> Option<RecordedAction> {
        if !self.active {
            return None;
        }

        match log.get(self.position) {
            Some(action) => {
                self.position += 1;
                Some(action)
            }
            None => {
                self.active = false;
                None
            }
        }
    }
}
