//! Install guidance for missing dependencies.

use super::UserInterface;

/// A titled block of install instructions.
#[derive(Debug, Clone, Copy)]
pub struct InstallHint {
    pub heading: &'static str,
    pub lines: &'static [&'static str],
}

/// Instructions printed after the list of missing tools.
pub const INSTALL_HINTS: &[InstallHint] = &[
    InstallHint {
        heading: "Install missing dependencies:",
        lines: &[
            "  brew install jq         # macOS",
            "  sudo apt install jq     # Linux",
        ],
    },
    InstallHint {
        heading: "Install Claude Code CLI:",
        lines: &["  https://claude.ai/code"],
    },
];

/// Print the missing tool names followed by install instructions.
pub fn report_missing(ui: &mut dyn UserInterface, missing: &[String]) {
    ui.header("Missing required dependencies:");
    for name in missing {
        ui.message(&format!("  - {}", name));
    }
    for hint in INSTALL_HINTS {
        ui.message("");
        ui.header(hint.heading);
        for line in hint.lines {
            ui.hint(line);
        }
    }
}
