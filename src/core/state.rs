//! Core State contract for machine states.
//!
//! States are opaque, consumer-supplied values. The machine never inspects
//! a state beyond equality, hashing, and its diagnostic name.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Capability contract for state machine states.
///
/// A state is a value keying the rule table, so equality and hashing must
/// agree: two values that compare equal must hash identically and resolve
/// to the same configured transitions.
///
/// # Required Traits
///
/// - `Clone`: states are copied into rule keys and the transition log
/// - `Eq` + `Hash`: states key the rule-table lookup
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states appear in the serializable
///   transition log and topology export
///
/// For fieldless enums the [`state_enum!`](crate::state_enum) macro derives
/// all of this and generates [`name`](State::name).
///
/// # Example
///
/// ```rust
/// use switchyard::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum MediaState {
///     Paused,
///     Playing,
///     Stopped,
/// }
///
/// impl State for MediaState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Paused => "Paused",
///             Self::Playing => "Playing",
///             Self::Stopped => "Stopped",
///         }
///     }
/// }
/// ```
pub trait State:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    ///
    /// Used in error messages and log lines, never for lookup.
    fn name(&self) -> &str;
}
