//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures every line
//! for later assertion.
//!
//! # Example
//!
//! ```
//! use agentk::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.error("Error: something broke");
//! assert_eq!(ui.errors(), ["Error: something broke"]);
//! ```

use super::UserInterface;

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    stdout: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl MockUI {
    /// Create an empty MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines written to stdout (messages, headers, hints), in order.
    pub fn stdout(&self) -> &[String] {
        &self.stdout
    }

    /// Notices written to stderr.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Errors written to stderr.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Whether nothing at all was written.
    pub fn is_silent(&self) -> bool {
        self.stdout.is_empty() && self.warnings.is_empty() && self.errors.is_empty()
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.stdout.push(msg.to_string());
    }

    fn header(&mut self, msg: &str) {
        self.stdout.push(msg.to_string());
    }

    fn hint(&mut self, msg: &str) {
        self.stdout.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }
}
