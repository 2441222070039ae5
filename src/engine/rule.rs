//! Immutable transition rules and introspection over the frozen table.

use crate::core::{Action, State, Trigger};
use serde::{Deserialize, Serialize};

/// Unique lookup key for a rule: the originating state plus the fired trigger.
///
/// At most one rule exists per key; the builder enforces this before the
/// table is frozen.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RuleKey<S: State, T: Trigger> {
    pub from: S,
    pub trigger: T,
}

impl<S: State, T: Trigger> RuleKey<S, T> {
    pub fn new(from: S, trigger: T) -> Self {
        Self { from, trigger }
    }
}

/// One finalized transition: target state plus the snapshotted action lists.
///
/// Rules are created once at build time and never mutated afterwards.
#[derive(Clone)]
pub struct Rule<S: State, T: Trigger> {
    pub from: S,
    pub trigger: T,
    pub to: S,
    exit_actions: Vec<Action>,
    entry_actions: Vec<Action>,
}

impl<S: State, T: Trigger> Rule<S, T> {
    pub(crate) fn new(
        from: S,
        trigger: T,
        to: S,
        exit_actions: Vec<Action>,
        entry_actions: Vec<Action>,
    ) -> Self {
        Self {
            from,
            trigger,
            to,
            exit_actions,
            entry_actions,
        }
    }

    /// Exit actions in registration order.
    pub fn exit_actions(&self) -> &[Action] {
        &self.exit_actions
    }

    /// Entry actions in registration order.
    pub fn entry_actions(&self) -> &[Action] {
        &self.entry_actions
    }

    /// Serializable projection of this rule.
    pub fn summary(&self) -> RuleSummary<S, T> {
        RuleSummary {
            from: self.from.clone(),
            trigger: self.trigger.clone(),
            to: self.to.clone(),
            exit_actions: self.exit_actions.len(),
            entry_actions: self.entry_actions.len(),
        }
    }
}

/// Serializable projection of one rule.
///
/// Actions are closures and cannot be serialized; the projection carries
/// their counts only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct RuleSummary<S: State, T: Trigger> {
    pub from: S,
    pub trigger: T,
    pub to: S,
    pub exit_actions: usize,
    pub entry_actions: usize,
}

/// Deterministic, serializable description of a frozen rule table.
///
/// Rules are sorted by originating state name, then trigger name, so the
/// output is stable across runs regardless of hash ordering.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Topology<S: State, T: Trigger> {
    rules: Vec<RuleSummary<S, T>>,
}

impl<S: State, T: Trigger> Topology<S, T> {
    pub(crate) fn new(mut rules: Vec<RuleSummary<S, T>>) -> Self {
        rules.sort_by(|a, b| {
            a.from
                .name()
                .cmp(b.from.name())
                .then_with(|| a.trigger.name().cmp(b.trigger.name()))
        });
        Self { rules }
    }

    /// Rule projections in sorted order.
    pub fn rules(&self) -> &[RuleSummary<S, T>] {
        &self.rules
    }

    /// Render the topology as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        Paused,
        Playing,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Paused => "Paused",
                Self::Playing => "Playing",
            }
        }
    }

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestTrigger {
        Play,
        Pause,
    }

    impl Trigger for TestTrigger {
        fn name(&self) -> &str {
            match self {
                Self::Play => "Play",
                Self::Pause => "Pause",
            }
        }
    }

    #[test]
    fn equal_keys_resolve_to_one_table_entry() {
        let mut table = HashMap::new();
        table.insert(RuleKey::new(TestState::Paused, TestTrigger::Play), 1);
        table.insert(RuleKey::new(TestState::Paused, TestTrigger::Play), 2);

        assert_eq!(table.len(), 1);
        assert_eq!(
            table[&RuleKey::new(TestState::Paused, TestTrigger::Play)],
            2
        );
    }

    #[test]
    fn summary_reports_action_counts() {
        let rule = Rule::new(
            TestState::Paused,
            TestTrigger::Play,
            TestState::Playing,
            vec![Arc::new(|| Ok(())), Arc::new(|| Ok(()))],
            vec![Arc::new(|| Ok(()))],
        );

        let summary = rule.summary();
        assert_eq!(summary.from, TestState::Paused);
        assert_eq!(summary.to, TestState::Playing);
        assert_eq!(summary.exit_actions, 2);
        assert_eq!(summary.entry_actions, 1);
    }

    #[test]
    fn topology_sorts_by_state_then_trigger() {
        let topology = Topology::new(vec![
            RuleSummary {
                from: TestState::Playing,
                trigger: TestTrigger::Pause,
                to: TestState::Paused,
                exit_actions: 0,
                entry_actions: 0,
            },
            RuleSummary {
                from: TestState::Paused,
                trigger: TestTrigger::Play,
                to: TestState::Playing,
                exit_actions: 0,
                entry_actions: 0,
            },
            RuleSummary {
                from: TestState::Paused,
                trigger: TestTrigger::Pause,
                to: TestState::Paused,
                exit_actions: 0,
                entry_actions: 0,
            },
        ]);

        let names: Vec<(&str, &str)> = topology
            .rules()
            .iter()
            .map(|rule| (rule.from.name(), rule.trigger.name()))
            .collect();

        assert_eq!(
            names,
            vec![("Paused", "Pause"), ("Paused", "Play"), ("Playing", "Pause")]
        );
    }

    #[test]
    fn topology_roundtrips_through_json() {
        let topology = Topology::new(vec![RuleSummary {
            from: TestState::Paused,
            trigger: TestTrigger::Play,
            to: TestState::Playing,
            exit_actions: 1,
            entry_actions: 2,
        }]);

        let json = topology.to_json().unwrap();
        let deserialized: Topology<TestState, TestTrigger> = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.rules(), topology.rules());
    }
}
