//! Builder for assembling a machine's rule table.

use crate::builder::error::BuildError;
use crate::builder::scope::StateScope;
use crate::core::{State, Trigger};
use crate::engine::{Machine, Rule, RuleKey};
use std::collections::{HashMap, HashSet};

/// Fluent builder that accumulates per-state transition definitions and
/// freezes them into a [`Machine`].
///
/// Uniqueness is enforced while configuring: each state may be configured
/// once per builder, and each trigger bound once per state. `build`
/// additionally checks that the initial state was configured, so every
/// rule-table invariant holds before a machine exists.
pub struct MachineBuilder<S: State, T: Trigger> {
    initial: S,
    configured: HashSet<S>,
    rules: HashMap<RuleKey<S, T>, Rule<S, T>>,
}

impl<S: State, T: Trigger> MachineBuilder<S, T> {
    /// Begin a builder seeded with the machine's initial state.
    ///
    /// Recording the initial state creates no rule; the state still has to
    /// be configured through [`state`](Self::state) before [`build`](Self::build).
    pub fn with_initial_state(initial: S) -> Self {
        Self {
            initial,
            configured: HashSet::new(),
            rules: HashMap::new(),
        }
    }

    /// Open a configuration scope for `state`.
    ///
    /// `configure` receives a fresh [`StateScope`] by value and threads it
    /// through the fluent chain, declaring this state's outgoing
    /// transitions. Fails with [`BuildError::DuplicateState`] if `state`
    /// was already configured in this builder.
    pub fn state<F>(mut self, state: S, configure: F) -> Result<Self, BuildError>
    where
        F: FnOnce(StateScope<S, T>) -> Result<StateScope<S, T>, BuildError>,
    {
        if !self.configured.insert(state.clone()) {
            return Err(BuildError::DuplicateState {
                state: state.name().to_string(),
            });
        }

        let scope = configure(StateScope::new(state))?;
        for (trigger, rule) in scope.into_rules() {
            let key = RuleKey::new(rule.from.clone(), trigger);
            self.rules.insert(key, rule);
        }
        Ok(self)
    }

    /// Validate and freeze the rule table into a runnable [`Machine`].
    ///
    /// Fails with [`BuildError::UnreachableInitialState`] if the initial
    /// state was never configured.
    pub fn build(self) -> Result<Machine<S, T>, BuildError> {
        if !self.configured.contains(&self.initial) {
            return Err(BuildError::UnreachableInitialState {
                state: self.initial.name().to_string(),
            });
        }

        Ok(Machine::new(self.initial, self.rules))
    }
}
