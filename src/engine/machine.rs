//! The execution engine: a frozen rule table plus the live current state.

use crate::core::{Action, ActionError, State, TransitionLog, TransitionRecord, Trigger};
use crate::engine::error::{ActionPhase, TransitionError};
use crate::engine::rule::{Rule, RuleKey, Topology};
use chrono::Utc;
use log::{debug, trace, warn};
use std::collections::HashMap;

/// A runnable state machine.
///
/// Owns the immutable rule table produced by
/// [`MachineBuilder::build`](crate::builder::MachineBuilder::build) and the
/// mutable current-state cell. Execution is fully synchronous: `trigger`
/// runs the lookup, both action phases, and the commit on the calling
/// thread. There is no internal locking; `&mut self` already rules out
/// concurrent trigger calls, and callers needing shared access must
/// serialize externally.
pub struct Machine<S: State, T: Trigger> {
    current: S,
    rules: HashMap<RuleKey<S, T>, Rule<S, T>>,
    log: TransitionLog<S, T>,
}

impl<S: State, T: Trigger> Machine<S, T> {
    pub(crate) fn new(initial: S, rules: HashMap<RuleKey<S, T>, Rule<S, T>>) -> Self {
        Self {
            current: initial,
            rules,
            log: TransitionLog::new(),
        }
    }

    /// The state the machine is currently in.
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Read-only view of the frozen rule table.
    pub fn rules(&self) -> &HashMap<RuleKey<S, T>, Rule<S, T>> {
        &self.rules
    }

    /// Log of committed transitions, oldest first.
    pub fn log(&self) -> &TransitionLog<S, T> {
        &self.log
    }

    /// Serializable description of the rule table, sorted for stable output.
    pub fn topology(&self) -> Topology<S, T> {
        Topology::new(self.rules.values().map(Rule::summary).collect())
    }

    /// Fire `trigger` against the current state.
    ///
    /// Returns `Ok(false)` when no rule maps `(current_state, trigger)`:
    /// no actions run and the state is unchanged. This is an expected
    /// outcome, not an error.
    ///
    /// When a rule matches, the exit actions run first, in registration
    /// order, every one of them even if some fail. If any exit action
    /// failed the transition is aborted with the collected failures and the
    /// state stays put. Otherwise the state change is committed and the
    /// entry actions run the same way. Entry failures are reported after
    /// the fact: the machine stays in the target state, and the caller
    /// decides whether that counts as recoverable.
    pub fn trigger(&mut self, trigger: T) -> Result<bool, TransitionError> {
        let key = RuleKey::new(self.current.clone(), trigger);
        let Some(rule) = self.rules.get(&key) else {
            trace!(
                "no rule for trigger '{}' in state '{}'",
                key.trigger.name(),
                key.from.name()
            );
            return Ok(false);
        };

        let failures = run_phase(rule.exit_actions());
        if !failures.is_empty() {
            warn!(
                "{} exit action(s) failed leaving '{}'; transition aborted",
                failures.len(),
                key.from.name()
            );
            return Err(TransitionError::new(
                ActionPhase::Exit,
                &key.from,
                &key.trigger,
                &rule.to,
                failures,
            ));
        }

        self.current = rule.to.clone();
        self.log = self.log.record(TransitionRecord {
            from: key.from.clone(),
            to: rule.to.clone(),
            trigger: key.trigger.clone(),
            timestamp: Utc::now(),
        });
        debug!(
            "'{}' --{}--> '{}'",
            key.from.name(),
            key.trigger.name(),
            rule.to.name()
        );

        let failures = run_phase(rule.entry_actions());
        if !failures.is_empty() {
            warn!(
                "{} entry action(s) failed entering '{}'; state already changed",
                failures.len(),
                rule.to.name()
            );
            return Err(TransitionError::new(
                ActionPhase::Entry,
                &key.from,
                &key.trigger,
                &rule.to,
                failures,
            ));
        }

        Ok(true)
    }
}

/// Run every action in the phase, in order, collecting the failures.
/// A failing action never stops the rest of the phase.
fn run_phase(actions: &[Action]) -> Vec<ActionError> {
    actions.iter().filter_map(|action| action().err()).collect()
}
