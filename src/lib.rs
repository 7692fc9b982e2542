//! agentk - launcher for the agentk script.
//!
//! The launcher checks that the tools the script depends on are installed,
//! finds the installation root for either a packaged install or a source
//! checkout, and runs `bash <root>/agentk` with the caller's arguments,
//! environment and working directory. The script's exit code becomes the
//! launcher's own.
//!
//! # Modules
//!
//! - [`config`] - Launcher constants and per-run context
//! - [`error`] - Error types and result aliases
//! - [`launcher`] - Stage orchestration and exit codes
//! - [`layout`] - Installation root discovery
//! - [`requirements`] - Prerequisite detection on PATH
//! - [`shell`] - Child process execution and interrupt handling
//! - [`ui`] - User-facing output
//!
//! # Example
//!
//! ```
//! use agentk::config::{LaunchContext, LauncherConfig};
//! use agentk::launcher::{ExitOutcome, Launcher};
//! use agentk::ui::MockUI;
//!
//! // No PATH and no launcher location: the dependency check fails first.
//! let launcher = Launcher::new(LauncherConfig::default(), LaunchContext::default());
//! let mut ui = MockUI::new();
//! assert_eq!(launcher.run(&mut ui), ExitOutcome::DepsMissing);
//! assert_eq!(ui.stdout()[0], "Missing required dependencies:");
//! ```

pub mod config;
pub mod error;
pub mod launcher;
pub mod layout;
pub mod requirements;
pub mod shell;
pub mod ui;

pub use error::{LauncherError, Result};
