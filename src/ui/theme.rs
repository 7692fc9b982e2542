//! Visual theme and styling.

use console::{Style, Term};

/// Launcher's visual theme.
///
/// Styling only changes appearance; the text is the same with or without
/// colors.
#[derive(Debug, Clone)]
pub struct LauncherTheme {
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for notices such as interruption (orange).
    pub warning: Style,
    /// Style for section headings (bold).
    pub header: Style,
    /// Style for remediation hints (dim).
    pub hint: Style,
}

impl Default for LauncherTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl LauncherTheme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            error: Style::new().red().bold().force_styling(true),
            warning: Style::new().color256(208).force_styling(true),
            header: Style::new().bold().force_styling(true),
            hint: Style::new().dim().force_styling(true),
        }
    }

    /// Create a theme without colors (for non-TTY or `NO_COLOR`).
    pub fn plain() -> Self {
        Self {
            error: Style::new(),
            warning: Style::new(),
            header: Style::new(),
            hint: Style::new(),
        }
    }

    /// Pick the colored or plain theme for `term`.
    pub fn for_term(term: &Term) -> Self {
        if should_use_colors(term) {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format an error message.
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(msg))
    }

    /// Format a notice.
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(msg))
    }

    /// Format a heading line.
    pub fn format_header(&self, msg: &str) -> String {
        format!("{}", self.header.apply_to(msg))
    }

    /// Format a hint line.
    pub fn format_hint(&self, msg: &str) -> String {
        format!("{}", self.hint.apply_to(msg))
    }
}

/// Check if colors should be enabled for `term`.
pub fn should_use_colors(term: &Term) -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    term.is_term()
}
