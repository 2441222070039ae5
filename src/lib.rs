//! Switchyard: a table-driven finite state machine library
//!
//! A machine is configured once through a fluent builder and frozen into an
//! immutable rule table. From then on it is driven by firing triggers
//! against a live current state. Each rule carries ordered exit and entry
//! actions that run around the state change.
//!
//! # Core Concepts
//!
//! - **State** / **Trigger**: opaque, equality-keyed values supplied by the
//!   consumer (see the [`state_enum!`] and [`trigger_enum!`] macros)
//! - **Builder**: per-state configuration scopes with declaration-time
//!   validation; a built machine can never hold a malformed table
//! - **Engine**: synchronous trigger execution with a strict failure
//!   policy: every action in a phase runs even after one fails; exit
//!   failures abort before the commit while entry failures report after it
//!
//! # Example
//!
//! ```rust
//! use switchyard::{state_enum, trigger_enum, MachineBuilder};
//!
//! state_enum! {
//!     enum MediaState {
//!         Paused,
//!         Playing,
//!         Stopped,
//!     }
//! }
//!
//! trigger_enum! {
//!     enum MediaTrigger {
//!         Play,
//!         Stop,
//!     }
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut machine = MachineBuilder::with_initial_state(MediaState::Paused)
//!     .state(MediaState::Paused, |scope| {
//!         scope
//!             .on_exit(|| {
//!                 println!("leaving pause");
//!                 Ok(())
//!             })
//!             .on_enter(|| {
//!                 println!("rolling");
//!                 Ok(())
//!             })
//!             .on(MediaTrigger::Play)
//!             .go_to(MediaState::Playing)
//!     })?
//!     .state(MediaState::Playing, |scope| {
//!         scope.on(MediaTrigger::Stop).go_to(MediaState::Stopped)
//!     })?
//!     .build()?;
//!
//! // A mapped trigger commits the transition and reports success.
//! assert!(machine.trigger(MediaTrigger::Play)?);
//! assert_eq!(machine.current_state(), &MediaState::Playing);
//!
//! // An unmapped trigger is a defined negative outcome, not an error.
//! assert!(!machine.trigger(MediaTrigger::Play)?);
//! assert_eq!(machine.current_state(), &MediaState::Playing);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use builder::{BuildError, MachineBuilder, StateScope, TransitionDraft, TriggerBinder};
pub use core::{Action, ActionError, ActionResult, State, TransitionLog, TransitionRecord, Trigger};
pub use engine::{ActionPhase, Machine, Rule, RuleKey, RuleSummary, Topology, TransitionError};
