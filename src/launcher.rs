//! Launcher entry point.
//!
//! Runs the stages in a fixed order and turns the first failure into a
//! message and an exit code:
//!
//! ```text
//! CheckingDeps -> ResolvingRoot -> ValidatingScript -> Delegating -> Done
//! ```
//!
//! Nothing is retried. Every failure ends the run.

use std::fmt;

use crate::config::{LaunchContext, LauncherConfig, EXIT_FAILURE, EXIT_INTERRUPTED};
use crate::error::{LauncherError, Result};
use crate::layout::{InstallationRoot, RootResolver};
use crate::requirements::DependencyChecker;
use crate::shell::{ChildInvocation, ChildOutcome};
use crate::ui::{report_missing, UserInterface};

/// Orchestration stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    CheckingDeps,
    ResolvingRoot,
    ValidatingScript,
    Delegating,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CheckingDeps => write!(f, "checking dependencies"),
            Self::ResolvingRoot => write!(f, "resolving installation root"),
            Self::ValidatingScript => write!(f, "validating script"),
            Self::Delegating => write!(f, "delegating"),
            Self::Done => write!(f, "done"),
        }
    }
}

/// Final result of a launcher run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutcome {
    /// The script ran; carries its exit code.
    Completed(i32),
    /// Required tools are missing.
    DepsMissing,
    /// The installation root or the script could not be found.
    RootOrScriptMissing,
    /// The script could not be started or supervised.
    LaunchFailure,
    /// The user interrupted the run.
    Interrupted,
}

impl ExitOutcome {
    /// Exit code reported to the operating system.
    pub fn code(&self) -> i32 {
        match self {
            Self::Completed(code) => *code,
            Self::DepsMissing | Self::RootOrScriptMissing | Self::LaunchFailure => EXIT_FAILURE,
            Self::Interrupted => EXIT_INTERRUPTED,
        }
    }
}

impl From<&LauncherError> for ExitOutcome {
    fn from(err: &LauncherError) -> Self {
        match err {
            LauncherError::MissingDependencies { .. } => Self::DepsMissing,
            LauncherError::RootNotFound | LauncherError::ScriptNotFound { .. } => {
                Self::RootOrScriptMissing
            }
            LauncherError::LaunchFailure { .. } => Self::LaunchFailure,
        }
    }
}

/// The launcher: configuration plus the inputs of one run.
pub struct Launcher {
    config: LauncherConfig,
    ctx: LaunchContext,
}

impl Launcher {
    pub fn new(config: LauncherConfig, ctx: LaunchContext) -> Self {
        Self { config, ctx }
    }

    /// Run every stage and report the outcome through `ui`.
    pub fn run(&self, ui: &mut dyn UserInterface) -> ExitOutcome {
        let child = match self.prepare() {
            Ok(child) => child,
            Err(e) => return report(ui, &e),
        };

        enter(Stage::Delegating);
        let outcome = match child.run() {
            ChildOutcome::Exited(code) => ExitOutcome::Completed(code),
            ChildOutcome::Interrupted => {
                ui.warning("\nInterrupted");
                ExitOutcome::Interrupted
            }
            ChildOutcome::LaunchFailed(source) => {
                report(ui, &LauncherError::LaunchFailure { source })
            }
        };
        enter(Stage::Done);
        tracing::debug!("Exiting with code {}", outcome.code());
        outcome
    }

    /// Run every stage up to, but not including, delegation.
    pub fn prepare(&self) -> Result<ChildInvocation> {
        enter(Stage::CheckingDeps);
        self.check_dependencies()?;

        enter(Stage::ResolvingRoot);
        let root = self.resolve_root()?;

        enter(Stage::ValidatingScript);
        ChildInvocation::prepare(&self.config, &root, &self.ctx)
    }

    fn check_dependencies(&self) -> Result<()> {
        let checker = DependencyChecker::new(&self.config.requirements, self.ctx.path_entries());
        let names = checker.missing();
        if names.is_empty() {
            Ok(())
        } else {
            Err(LauncherError::MissingDependencies { names })
        }
    }

    fn resolve_root(&self) -> Result<InstallationRoot> {
        RootResolver::new(&self.config).resolve(self.ctx.origin.as_deref())
    }
}

fn enter(stage: Stage) {
    tracing::debug!("Stage: {}", stage);
}

/// Print `err` the way its kind calls for and map it to an outcome.
fn report(ui: &mut dyn UserInterface, err: &LauncherError) -> ExitOutcome {
    tracing::debug!("Run failed: {:?}", err);
    match err {
        LauncherError::MissingDependencies { names } => report_missing(ui, names),
        LauncherError::LaunchFailure { .. } => ui.error(&err.to_string()),
        _ => ui.error(&format!("Error: {}", err)),
    }
    ExitOutcome::from(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{load_system_env, DependencyRequirement};
    use crate::ui::MockUI;
    use std::ffi::OsString;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    /// Default config without the dependency check, so tests need no tools on PATH.
    fn unchecked_config() -> LauncherConfig {
        LauncherConfig::default().with_requirements(Vec::new())
    }

    fn context(origin: &Path, args: &[&str]) -> LaunchContext {
        LaunchContext {
            args: args.iter().map(OsString::from).collect(),
            origin: Some(origin.to_path_buf()),
            env: load_system_env(),
            cwd: std::env::current_dir().ok(),
        }
    }

    /// `<temp>/bin` with `<temp>/bin/scripts/agentk` containing `body`.
    fn installed_layout(body: &str) -> (TempDir, std::path::PathBuf) {
        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("bin");
        fs::create_dir_all(bin.join("scripts")).unwrap();
        fs::write(bin.join("scripts/agentk"), body).unwrap();
        (temp, bin)
    }

    #[test]
    fn exit_codes_are_fixed() {
        assert_eq!(ExitOutcome::Completed(0).code(), 0);
        assert_eq!(ExitOutcome::Completed(1).code(), 1);
        assert_eq!(ExitOutcome::Completed(7).code(), 7);
        assert_eq!(ExitOutcome::DepsMissing.code(), 1);
        assert_eq!(ExitOutcome::RootOrScriptMissing.code(), 1);
        assert_eq!(ExitOutcome::LaunchFailure.code(), 1);
        assert_eq!(ExitOutcome::Interrupted.code(), 130);
    }

    #[test]
    fn errors_map_to_outcomes() {
        let cases = [
            (
                LauncherError::MissingDependencies { names: vec![] },
                ExitOutcome::DepsMissing,
            ),
            (LauncherError::RootNotFound, ExitOutcome::RootOrScriptMissing),
            (
                LauncherError::ScriptNotFound {
                    path: "x".into(),
                },
                ExitOutcome::RootOrScriptMissing,
            ),
            (
                LauncherError::LaunchFailure {
                    source: std::io::Error::other("gone"),
                },
                ExitOutcome::LaunchFailure,
            ),
        ];
        for (err, expected) in &cases {
            assert_eq!(ExitOutcome::from(err), *expected);
        }
    }

    #[test]
    fn missing_dependencies_stop_before_resolution() {
        let (_temp, bin) = installed_layout("exit 0\n");
        let config = LauncherConfig::default().with_requirements(vec![
            DependencyRequirement::new("frobnicator", "agentk-test-no-such-tool"),
        ]);
        let mut ui = MockUI::new();

        let outcome = Launcher::new(config, context(&bin, &[])).run(&mut ui);

        assert_eq!(outcome, ExitOutcome::DepsMissing);
        assert_eq!(ui.stdout()[1], "  - frobnicator");
        assert_eq!(ui.stdout()[2], "");
        assert!(ui.errors().is_empty());
    }

    #[test]
    fn unresolvable_root_reports_error() {
        let temp = TempDir::new().unwrap();
        let origin = temp.path().join("x/y");
        fs::create_dir_all(&origin).unwrap();
        let mut ui = MockUI::new();

        let outcome = Launcher::new(unchecked_config(), context(&origin, &[])).run(&mut ui);

        assert_eq!(outcome, ExitOutcome::RootOrScriptMissing);
        assert_eq!(ui.errors(), ["Error: Could not find agentk scripts directory"]);
    }

    #[test]
    fn source_layout_without_script_reports_path() {
        let temp = TempDir::new().unwrap();
        let origin = temp.path().join("target/debug");
        fs::create_dir_all(&origin).unwrap();
        fs::create_dir(temp.path().join("agentk")).unwrap();
        let mut ui = MockUI::new();

        let outcome = Launcher::new(unchecked_config(), context(&origin, &[])).run(&mut ui);

        assert_eq!(outcome, ExitOutcome::RootOrScriptMissing);
        let expected = format!(
            "Error: agentk script not found at {}",
            temp.path().join("agentk").display()
        );
        assert_eq!(ui.errors(), [expected]);
    }

    #[test]
    #[cfg(unix)]
    fn child_exit_code_becomes_outcome() {
        let (_temp, bin) = installed_layout(
            "[ \"$1\" = run ] && [ \"$2\" = --flag ] || exit 10\nexit 3\n",
        );
        let mut ui = MockUI::new();

        let outcome =
            Launcher::new(unchecked_config(), context(&bin, &["run", "--flag"])).run(&mut ui);

        assert_eq!(outcome, ExitOutcome::Completed(3));
        assert!(ui.is_silent());
    }

    #[test]
    fn launch_failure_reports_cause() {
        let (_temp, bin) = installed_layout("exit 0\n");
        let config = LauncherConfig {
            interpreter: "agentk-no-such-interpreter".to_string(),
            ..unchecked_config()
        };
        let mut ui = MockUI::new();

        let outcome = Launcher::new(config, context(&bin, &[])).run(&mut ui);

        assert_eq!(outcome, ExitOutcome::LaunchFailure);
        assert_eq!(ui.errors().len(), 1);
        assert!(ui.errors()[0].starts_with("Error running agentk: "));
    }

    #[test]
    fn prepare_points_child_at_installed_scripts() {
        let (_temp, bin) = installed_layout("exit 0\n");
        let child = Launcher::new(unchecked_config(), context(&bin, &["x"]))
            .prepare()
            .unwrap();
        assert_eq!(child.script(), bin.join("scripts/agentk"));
        assert_eq!(
            child.env().get(std::ffi::OsStr::new("AGENTK_ROOT")),
            Some(&bin.join("scripts").into_os_string())
        );
    }

    #[test]
    fn stage_display() {
        assert_eq!(Stage::CheckingDeps.to_string(), "checking dependencies");
        assert_eq!(Stage::Done.to_string(), "done");
    }
}
