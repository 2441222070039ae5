//! Action callbacks executed around state changes.
//!
//! Actions are short, synchronous, side-effecting closures supplied by the
//! consumer. Long-running or asynchronous work belongs outside the machine,
//! e.g. an action that enqueues work and returns immediately.

use std::sync::Arc;
use thiserror::Error;

/// Failure reported by a single exit or entry action.
///
/// A failing action never stops the rest of its phase; the engine collects
/// every `ActionError` produced by a phase and surfaces them together in a
/// [`TransitionError`](crate::engine::TransitionError).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ActionError {
    message: String,
}

impl ActionError {
    /// Create an action failure from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The failure detail.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<&str> for ActionError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for ActionError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

/// Outcome of one action invocation.
pub type ActionResult = Result<(), ActionError>;

/// A zero-argument synchronous callback run while leaving or entering a state.
///
/// Stored behind `Arc` so a finalized rule can hand shared handles to the
/// engine without re-allocating per trigger.
pub type Action = Arc<dyn Fn() -> ActionResult + Send + Sync>;
