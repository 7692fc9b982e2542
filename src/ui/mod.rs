//! User-facing output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] for real terminal usage
//! - [`MockUI`] for capturing output in tests
//! - [`LauncherTheme`] for optional coloring
//! - [`hints`] for install guidance when tools are missing
//!
//! All diagnostics are plain text lines. Coloring is applied only when
//! the stream is a terminal and `NO_COLOR` is unset.

pub mod hints;
pub mod mock;
pub mod terminal;
pub mod theme;

pub use hints::report_missing;
pub use mock::MockUI;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, LauncherTheme};

/// Trait for user-facing output.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a plain line on stdout.
    fn message(&mut self, msg: &str);

    /// Display a heading line on stdout.
    fn header(&mut self, msg: &str);

    /// Display a remediation hint on stdout.
    fn hint(&mut self, msg: &str);

    /// Display a notice on stderr.
    fn warning(&mut self, msg: &str);

    /// Display an error on stderr.
    fn error(&mut self, msg: &str);
}
