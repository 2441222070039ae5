//! Per-state configuration scope and the draft it accumulates.

use crate::builder::error::BuildError;
use crate::core::{Action, ActionResult, State, Trigger};
use crate::engine::Rule;
use std::collections::HashMap;
use std::mem;
use std::sync::Arc;

/// Ordered exit/entry actions accumulated while a transition is declared.
///
/// A draft lives only inside one [`state`](crate::builder::MachineBuilder::state)
/// configuration scope. Each [`go_to`](TriggerBinder::go_to) call moves the
/// pending lists into the finalized rule and leaves the draft empty, so the
/// next binding in the same scope starts clean unless new actions are
/// registered first.
#[derive(Default)]
pub struct TransitionDraft {
    pending_exit: Vec<Action>,
    pending_entry: Vec<Action>,
}

impl TransitionDraft {
    fn push_exit(&mut self, action: Action) {
        self.pending_exit.push(action);
    }

    fn push_entry(&mut self, action: Action) {
        self.pending_entry.push(action);
    }

    /// Move the pending lists out, leaving the draft empty.
    fn snapshot(&mut self) -> (Vec<Action>, Vec<Action>) {
        (
            mem::take(&mut self.pending_exit),
            mem::take(&mut self.pending_entry),
        )
    }
}

/// Fluent configuration scope for one state's outgoing transitions.
///
/// The scope is passed by value through the fluent chain (each call
/// consumes it and hands it back), so the draft is never aliased outside
/// the transition currently being declared.
pub struct StateScope<S: State, T: Trigger> {
    state: S,
    draft: TransitionDraft,
    rules: HashMap<T, Rule<S, T>>,
}

impl<S: State, T: Trigger> StateScope<S, T> {
    pub(crate) fn new(state: S) -> Self {
        Self {
            state,
            draft: TransitionDraft::default(),
            rules: HashMap::new(),
        }
    }

    /// Append an exit action to the draft, in call order.
    pub fn on_exit<F>(mut self, action: F) -> Self
    where
        F: Fn() -> ActionResult + Send + Sync + 'static,
    {
        self.draft.push_exit(Arc::new(action));
        self
    }

    /// Append an entry action to the draft, in call order.
    pub fn on_enter<F>(mut self, action: F) -> Self
    where
        F: Fn() -> ActionResult + Send + Sync + 'static,
    {
        self.draft.push_entry(Arc::new(action));
        self
    }

    /// Begin binding `trigger` to a target state.
    ///
    /// Nothing is recorded until the matching [`TriggerBinder::go_to`] call.
    pub fn on(self, trigger: T) -> TriggerBinder<S, T> {
        TriggerBinder {
            scope: self,
            trigger,
        }
    }

    pub(crate) fn into_rules(self) -> HashMap<T, Rule<S, T>> {
        self.rules
    }
}

/// A pending `(state, trigger)` binding, completed by [`go_to`](Self::go_to).
pub struct TriggerBinder<S: State, T: Trigger> {
    scope: StateScope<S, T>,
    trigger: T,
}

impl<S: State, T: Trigger> TriggerBinder<S, T> {
    /// Finalize the binding.
    ///
    /// Snapshots the draft's current action lists into an immutable rule
    /// keyed by `(state, trigger)`, clears the draft, and hands the scope
    /// back so the chain can declare further transitions from the same
    /// state. Fails with [`BuildError::DuplicateTrigger`] if the trigger is
    /// already bound in this scope.
    pub fn go_to(self, target: S) -> Result<StateScope<S, T>, BuildError> {
        let TriggerBinder { mut scope, trigger } = self;

        if scope.rules.contains_key(&trigger) {
            return Err(BuildError::DuplicateTrigger {
                state: scope.state.name().to_string(),
                trigger: trigger.name().to_string(),
            });
        }

        let (exit_actions, entry_actions) = scope.draft.snapshot();
        let rule = Rule::new(
            scope.state.clone(),
            trigger.clone(),
            target,
            exit_actions,
            entry_actions,
        );
        scope.rules.insert(trigger, rule);
        Ok(scope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{state_enum, trigger_enum};

    state_enum! {
        enum TestState {
            Paused,
            Playing,
            Stopped,
        }
    }

    trigger_enum! {
        enum TestTrigger {
            Play,
            Stop,
        }
    }

    #[test]
    fn go_to_snapshots_the_draft() {
        let scope = StateScope::<TestState, TestTrigger>::new(TestState::Paused)
            .on_exit(|| Ok(()))
            .on_enter(|| Ok(()))
            .on_enter(|| Ok(()))
            .on(TestTrigger::Play)
            .go_to(TestState::Playing)
            .unwrap();

        let rules = scope.into_rules();
        let rule = &rules[&TestTrigger::Play];
        assert_eq!(rule.to, TestState::Playing);
        assert_eq!(rule.exit_actions().len(), 1);
        assert_eq!(rule.entry_actions().len(), 2);
    }

    #[test]
    fn draft_clears_between_bindings() {
        let scope = StateScope::<TestState, TestTrigger>::new(TestState::Paused)
            .on_exit(|| Ok(()))
            .on(TestTrigger::Play)
            .go_to(TestState::Playing)
            .unwrap()
            .on(TestTrigger::Stop)
            .go_to(TestState::Stopped)
            .unwrap();

        let rules = scope.into_rules();
        assert_eq!(rules[&TestTrigger::Play].exit_actions().len(), 1);
        assert_eq!(rules[&TestTrigger::Stop].exit_actions().len(), 0);
        assert_eq!(rules[&TestTrigger::Stop].entry_actions().len(), 0);
    }

    #[test]
    fn later_binding_accumulates_fresh_actions() {
        let scope = StateScope::<TestState, TestTrigger>::new(TestState::Paused)
            .on(TestTrigger::Play)
            .go_to(TestState::Playing)
            .unwrap()
            .on_enter(|| Ok(()))
            .on(TestTrigger::Stop)
            .go_to(TestState::Stopped)
            .unwrap();

        let rules = scope.into_rules();
        assert_eq!(rules[&TestTrigger::Play].entry_actions().len(), 0);
        assert_eq!(rules[&TestTrigger::Stop].entry_actions().len(), 1);
    }

    #[test]
    fn rebinding_a_trigger_is_rejected() {
        let result = StateScope::<TestState, TestTrigger>::new(TestState::Paused)
            .on(TestTrigger::Play)
            .go_to(TestState::Playing)
            .unwrap()
            .on(TestTrigger::Play)
            .go_to(TestState::Stopped);

        assert!(matches!(
            result,
            Err(BuildError::DuplicateTrigger { .. })
        ));
    }

    #[test]
    fn on_alone_records_nothing() {
        let binder = StateScope::<TestState, TestTrigger>::new(TestState::Paused)
            .on_exit(|| Ok(()))
            .on(TestTrigger::Play);

        // The draft still holds the pending action; only go_to consumes it.
        let scope = binder.go_to(TestState::Playing).unwrap();
        let rules = scope.into_rules();
        assert_eq!(rules[&TestTrigger::Play].exit_actions().len(), 1);
    }
}
