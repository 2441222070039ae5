//! Aggregated action failures surfaced by trigger execution.

use crate::core::{ActionError, State, Trigger};
use std::fmt;
use thiserror::Error;

/// Which half of a transition a failure bundle came from.
///
/// The phase decides whether the state commit already happened: exit-phase
/// failures abort the transition before the commit, entry-phase failures
/// are reported after it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ActionPhase {
    Exit,
    Entry,
}

impl ActionPhase {
    /// True if the current-state cell had already moved to the target when
    /// this phase reported its failures.
    pub fn state_changed(self) -> bool {
        matches!(self, ActionPhase::Entry)
    }

    pub(crate) fn tag(self) -> &'static str {
        match self {
            ActionPhase::Exit => "state unchanged",
            ActionPhase::Entry => "state already changed",
        }
    }
}

impl fmt::Display for ActionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionPhase::Exit => write!(f, "exit"),
            ActionPhase::Entry => write!(f, "entry"),
        }
    }
}

/// Every failure collected across one action phase of a single transition.
///
/// The engine never stops a phase at its first failure; it runs every
/// action and bundles all failures, in registration order, into one value.
#[derive(Debug, Error)]
#[error("{} {} action(s) failed for '{}' --{}--> '{}' ({})", .failures.len(), .phase, .from, .trigger, .to, .phase.tag())]
pub struct TransitionError {
    phase: ActionPhase,
    from: String,
    trigger: String,
    to: String,
    failures: Vec<ActionError>,
}

impl TransitionError {
    pub(crate) fn new<S: State, T: Trigger>(
        phase: ActionPhase,
        from: &S,
        trigger: &T,
        to: &S,
        failures: Vec<ActionError>,
    ) -> Self {
        Self {
            phase,
            from: from.name().to_string(),
            trigger: trigger.name().to_string(),
            to: to.name().to_string(),
            failures,
        }
    }

    /// The phase that produced the failures.
    pub fn phase(&self) -> ActionPhase {
        self.phase
    }

    /// True if the machine had already committed the state change.
    pub fn state_changed(&self) -> bool {
        self.phase.state_changed()
    }

    /// Name of the originating state.
    pub fn from_state(&self) -> &str {
        &self.from
    }

    /// Name of the fired trigger.
    pub fn trigger(&self) -> &str {
        &self.trigger
    }

    /// Name of the target state.
    pub fn to_state(&self) -> &str {
        &self.to
    }

    /// Every action failure from the phase, in registration order.
    pub fn failures(&self) -> &[ActionError] {
        &self.failures
    }
}
