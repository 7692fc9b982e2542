//! Child process execution.
//!
//! - [`command`] prepares and runs the delegated script
//! - [`interrupt`] turns SIGINT during the wait into a reportable outcome

pub mod command;
pub mod interrupt;

pub use command::{ChildInvocation, ChildOutcome};
pub use interrupt::InterruptGuard;
