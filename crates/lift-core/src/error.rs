//! Core error type.
//!
//! Every variant is a caller contract violation detected before any state is
//! touched.  Soft failures (boundary overruns, moving with the door open,
//! wasteful door opens) are reward penalties, never errors.

use thiserror::Error;

use crate::ActionMode;

#[derive(Debug, Error)]
pub enum LiftError {
    #[error("unknown action code {0} (expected 0..=4)")]
    UnknownAction(i64),

    #[error("expected {expected} per-car actions, got {got}")]
    ActionCountMismatch {
        expected: usize,
        got:      usize,
    },

    #[error("{mode:?} action mode cannot accept a {got}")]
    ActionShape {
        mode: ActionMode,
        got:  &'static str,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `lift-*` crates.
pub type LiftResult<T> = Result<T, LiftError>;
