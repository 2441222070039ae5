//! Fluent configuration API for assembling state machines.
//!
//! Configuration follows a strict shape: a builder is seeded with the
//! initial state, each state is configured in its own scope, and every
//! uniqueness rule is checked at declaration time rather than at trigger
//! time.
//!
//! ```
//! use switchyard::builder::MachineBuilder;
//! use switchyard::{state_enum, trigger_enum};
//!
//! state_enum! {
//!     enum Door { Open, Shut }
//! }
//!
//! trigger_enum! {
//!     enum Push { Slam, Pull }
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let machine = MachineBuilder::with_initial_state(Door::Open)
//!     .state(Door::Open, |scope| {
//!         scope.on(Push::Slam).go_to(Door::Shut)
//!     })?
//!     .build()?;
//!
//! assert_eq!(machine.current_state(), &Door::Open);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod machine;
pub mod macros;
pub mod scope;

pub use error::BuildError;
pub use machine::MachineBuilder;
pub use scope::{StateScope, TransitionDraft, TriggerBinder};
