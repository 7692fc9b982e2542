//! Prerequisite detection.
//!
//! This module checks whether the external tools the delegated script
//! needs are installed, without running any of them.
//!
//! # Modules
//!
//! - [`probe`] - PATH parsing and executable lookup
//! - [`checker`] - Reports which required tools are missing

pub mod checker;
pub mod probe;

pub use checker::DependencyChecker;
