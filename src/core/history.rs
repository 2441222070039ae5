//! Committed-transition log.
//!
//! The engine appends a record for every committed transition. The log is
//! immutable: `record` returns a new log with the record appended.

use super::state::State;
use super::trigger::Trigger;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of one committed transition.
///
/// A record is written at commit time, after the exit phase succeeded and
/// the current-state cell moved. A later entry-phase failure does not
/// remove it; the state change already happened.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionRecord<S: State, T: Trigger> {
    /// The state the machine left
    pub from: S,
    /// The state the machine entered
    pub to: S,
    /// The trigger that caused the transition
    pub trigger: T,
    /// When the commit happened
    pub timestamp: DateTime<Utc>,
}

/// Ordered log of committed transitions.
///
/// `record` is a pure function: it does not mutate the existing log but
/// returns a new one with the record appended.
///
/// # Example
///
/// ```rust
/// use switchyard::core::{TransitionLog, TransitionRecord};
/// use switchyard::{state_enum, trigger_enum};
/// use chrono::Utc;
///
/// state_enum! {
///     enum Door { Open, Shut }
/// }
///
/// trigger_enum! {
///     enum Push { Slam }
/// }
///
/// let log = TransitionLog::new();
/// let log = log.record(TransitionRecord {
///     from: Door::Open,
///     to: Door::Shut,
///     trigger: Push::Slam,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(log.records().len(), 1);
/// assert_eq!(log.path(), vec![&Door::Open, &Door::Shut]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionLog<S: State, T: Trigger> {
    records: Vec<TransitionRecord<S, T>>,
}

impl<S: State, T: Trigger> Default for TransitionLog<S, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, T: Trigger> TransitionLog<S, T> {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record, returning a new log.
    pub fn record(&self, record: TransitionRecord<S, T>) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// All records in commit order.
    pub fn records(&self) -> &[TransitionRecord<S, T>] {
        &self.records
    }

    /// The most recent record, if any.
    pub fn last(&self) -> Option<&TransitionRecord<S, T>> {
        self.records.last()
    }

    /// The path of states traversed: the first record's source state, then
    /// the target of each record in order. Empty for an empty log.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(&first.from);
        }
        for record in &self.records {
            path.push(&record.to);
        }
        path
    }

    /// Time between the first and last commit.
    ///
    /// Returns `None` for an empty log.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }
}
