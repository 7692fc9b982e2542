//! Error types for launcher operations.
//!
//! This module defines [`LauncherError`], the error type returned by every
//! launcher stage, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Each stage returns a `LauncherError` variant describing what went wrong
//! - Only the entry point turns errors into messages and exit codes
//! - User interruption is an outcome of the child wait, not an error

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for launcher operations.
#[derive(Debug, Error)]
pub enum LauncherError {
    /// One or more required executables are not on the search path.
    #[error("Missing required dependencies: {}", names.join(", "))]
    MissingDependencies { names: Vec<String> },

    /// Neither the installed nor the source layout could be located.
    #[error("Could not find agentk scripts directory")]
    RootNotFound,

    /// The installation root exists but holds no delegated script.
    #[error("agentk script not found at {}", path.display())]
    ScriptNotFound { path: PathBuf },

    /// The child process could not be started or waited on.
    #[error("Error running agentk: {source}")]
    LaunchFailure {
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for launcher operations.
pub type Result<T> = std::result::Result<T, LauncherError>;
