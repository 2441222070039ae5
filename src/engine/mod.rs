//! Trigger execution against a frozen rule table.
//!
//! The engine resolves each fired trigger to at most one rule and executes
//! it in two phases around the state commit:
//!
//! - **exit phase**: every exit action runs, failures collected; any
//!   failure aborts the transition before the state changes
//! - **entry phase**: runs only after the commit; failures are collected
//!   and reported, but the state is not rolled back
//!
//! Within a phase, execution is fail-soft: a failing action never prevents
//! the remaining actions of the same phase from running.

mod error;
mod machine;
mod rule;

pub use error::{ActionPhase, TransitionError};
pub use machine::Machine;
pub use rule::{Rule, RuleKey, RuleSummary, Topology};
