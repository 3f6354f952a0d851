//! Action history and deterministic replay.
//!
//! Every effective player action is resolved to a [`RecordedAction`] and
//! appended to the session's [`ActionLog`]. A [`Replayer`] walks that log
//! one action per host tick so the session can rebuild its history from a
//! reset state.
//!
//! [`RecordedAction`]: crate::core::RecordedAction

pub mod action_log;
pub mod replayer;

pub use action_log::ActionLog;
pub use replayer::Replayer;
