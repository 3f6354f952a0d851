//! Ordered history of recorded actions.
//!
//! Backed by `im::Vector` so cloning a session (for example to keep a
//! checkpoint before a replay) is O(1) regardless of history length.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::RecordedAction;
use crate::error::Result;

/// Recorded actions in the order they were applied.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionLog {
    actions: Vector<RecordedAction>,
}

impl ActionLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a recorded action.
    pub fn push(&mut self, action: RecordedAction) {
        self.actions.push_back(action);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Action at position `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<RecordedAction> {
        self.actions.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RecordedAction> {
        self.actions.iter()
    }

    pub fn clear(&mut self) {
        self.actions.clear();
    }

    /// Encode the log with bincode, for hosts that persist histories.
    pub fn encode(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a log produced by [`ActionLog::encode`].
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl FromIterator<RecordedAction> for ActionLog {
    fn from_iter<I: IntoIterator<Item = RecordedAction>>(iter: I) -> Self {
        Self {
            actions: iter.into_iter().collect(),
        }
    }
}
