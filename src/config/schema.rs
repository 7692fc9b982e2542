//! Launcher configuration.
//!
//! Every constant the launcher relies on lives in [`LauncherConfig`], so
//! each stage reads its parameters from one typed value. The [`Default`]
//! implementation describes a real agentk installation; tests build
//! variations of it.

/// Exit code for every launcher-side failure.
pub const EXIT_FAILURE: i32 = 1;

/// Exit code when the user interrupts the launcher while the script runs.
pub const EXIT_INTERRUPTED: i32 = 130;

/// An external executable that must be on the search path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyRequirement {
    /// Name shown to the user when the tool is missing.
    pub name: String,
    /// Executable name looked up on PATH.
    pub executable: String,
}

impl DependencyRequirement {
    /// Create a requirement with a display name and executable name.
    pub fn new(name: impl Into<String>, executable: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            executable: executable.into(),
        }
    }
}

/// Static description of the tool being launched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherConfig {
    /// Tool name, also the name of the source-layout marker.
    pub tool_name: String,
    /// File name of the delegated script under the installation root.
    pub script_name: String,
    /// Directory bundled next to the launcher in an installed layout.
    pub scripts_dir: String,
    /// Variable naming the installation root in the child environment.
    pub root_env_var: String,
    /// Interpreter used to run the delegated script.
    pub interpreter: String,
    /// Executables checked before anything else happens, in report order.
    pub requirements: Vec<DependencyRequirement>,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            tool_name: "agentk".to_string(),
            script_name: "agentk".to_string(),
            scripts_dir: "scripts".to_string(),
            root_env_var: "AGENTK_ROOT".to_string(),
            interpreter: "bash".to_string(),
            requirements: vec![
                DependencyRequirement::new("bash", "bash"),
                DependencyRequirement::new("jq", "jq"),
                DependencyRequirement::new("claude (Claude Code CLI)", "claude"),
            ],
        }
    }
}

impl LauncherConfig {
    /// Replace the requirement set.
    pub fn with_requirements(mut self, requirements: Vec<DependencyRequirement>) -> Self {
        self.requirements = requirements;
        self
    }
}
