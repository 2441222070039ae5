//! Trigger contract for transition events.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Capability contract for triggers.
///
/// Triggers come from a small, closed set of values, typically a fieldless
/// enum. Together with the originating state a trigger keys exactly one
/// rule, so the same equality/hash agreement required of [`State`] applies.
///
/// The [`trigger_enum!`](crate::trigger_enum) macro derives everything for
/// fieldless enums.
///
/// [`State`]: crate::core::State
pub trait Trigger:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the trigger's name for display/logging.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestTrigger {
        Play,
        Stop,
    }

    impl Trigger for TestTrigger {
        fn name(&self) -> &str {
            match self {
                Self::Play => "Play",
                Self::Stop => "Stop",
            }
        }
    }

    #[test]
    fn trigger_name_returns_correct_value() {
        assert_eq!(TestTrigger::Play.name(), "Play");
        assert_eq!(TestTrigger::Stop.name(), "Stop");
    }

    #[test]
    fn equal_triggers_hash_to_one_entry() {
        let mut triggers = HashSet::new();
        triggers.insert(TestTrigger::Play);
        triggers.insert(TestTrigger::Play);

        assert_eq!(triggers.len(), 1);
    }

    #[test]
    fn trigger_serializes_correctly() {
        let trigger = TestTrigger::Stop;
        let json = serde_json::to_string(&trigger).unwrap();
        let deserialized: TestTrigger = serde_json::from_str(&json).unwrap();
        assert_eq!(trigger, deserialized);
    }
}
