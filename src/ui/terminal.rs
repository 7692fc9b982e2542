//! Terminal UI writing to the process's standard streams.

use console::Term;
use std::io::Write;

use super::{LauncherTheme, UserInterface};

/// Terminal UI implementation.
///
/// Messages go to stdout; errors and notices go to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    out_theme: LauncherTheme,
    err_theme: LauncherTheme,
}

impl TerminalUI {
    /// Create a terminal UI over stdout and stderr.
    pub fn new() -> Self {
        let out = Term::stdout();
        let err = Term::stderr();
        Self {
            out_theme: LauncherTheme::for_term(&out),
            err_theme: LauncherTheme::for_term(&err),
            out,
            err,
        }
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn header(&mut self, msg: &str) {
        writeln!(self.out, "{}", self.out_theme.format_header(msg)).ok();
    }

    fn hint(&mut self, msg: &str) {
        writeln!(self.out, "{}", self.out_theme.format_hint(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.err_theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.err_theme.format_error(msg)).ok();
    }
}
