//! Build errors for machine configuration.

use thiserror::Error;

/// Errors raised while declaring states and transitions.
///
/// All validation happens at configuration time; a machine that builds
/// successfully can never observe a malformed rule table.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("State '{state}' is already configured. Each state may be configured once per builder")]
    DuplicateState { state: String },

    #[error("Trigger '{trigger}' is already bound for state '{state}'")]
    DuplicateTrigger { state: String, trigger: String },

    #[error("Initial state '{state}' was never configured. Add a .state(..) scope for it before .build()")]
    UnreachableInitialState { state: String },
}
