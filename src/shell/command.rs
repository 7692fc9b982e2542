//! Delegation to the agentk script.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus};
use std::thread;
use std::time::{Duration, Instant};

use crate::config::{with_override, EnvMap, LaunchContext, LauncherConfig, EXIT_FAILURE};
use crate::error::Result;
use crate::layout::InstallationRoot;

use super::interrupt::InterruptGuard;

/// How often the wait loop checks the child and the interrupt latch.
const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Time an interrupted child gets to exit before it is killed.
const INTERRUPT_GRACE: Duration = Duration::from_millis(250);

/// How a delegated run ended.
#[derive(Debug)]
pub enum ChildOutcome {
    /// The child terminated; carries its exit code.
    Exited(i32),
    /// The launcher received SIGINT while waiting.
    Interrupted,
    /// The child could not be started or waited on.
    LaunchFailed(std::io::Error),
}

/// A fully prepared child process invocation.
///
/// Built once from the resolved root and the launcher's context, then only
/// read. The environment is a private copy of the launcher's own.
#[derive(Debug, Clone)]
pub struct ChildInvocation {
    interpreter: OsString,
    script: PathBuf,
    args: Vec<OsString>,
    env: EnvMap,
    cwd: Option<PathBuf>,
}

impl ChildInvocation {
    /// Prepare the invocation, failing if the script is absent.
    pub fn prepare(
        config: &LauncherConfig,
        root: &InstallationRoot,
        ctx: &LaunchContext,
    ) -> Result<Self> {
        let script = root.script(&config.script_name)?;
        let env = with_override(&ctx.env, &config.root_env_var, root.path().as_os_str());

        Ok(Self {
            interpreter: OsString::from(&config.interpreter),
            script,
            args: ctx.args.clone(),
            env,
            cwd: ctx.cwd.clone(),
        })
    }

    /// Script passed as the interpreter's first argument.
    pub fn script(&self) -> &Path {
        &self.script
    }

    /// Arguments forwarded after the script path.
    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Environment the child starts with.
    pub fn env(&self) -> &EnvMap {
        &self.env
    }

    /// Working directory the child starts in.
    pub fn cwd(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    /// Build the process command.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(&self.interpreter);
        cmd.arg(&self.script);
        cmd.args(&self.args);
        cmd.env_clear();
        cmd.envs(&self.env);
        if let Some(cwd) = &self.cwd {
            cmd.current_dir(cwd);
        }
        cmd
    }

    /// Run the child, blocking until it exits or the launcher is interrupted.
    ///
    /// After SIGINT the child gets a short grace period, then it is killed
    /// and reaped.
    pub fn run(&self) -> ChildOutcome {
        let guard = match InterruptGuard::install() {
            Ok(guard) => guard,
            Err(e) => return ChildOutcome::LaunchFailed(e),
        };

        tracing::debug!(
            "Running {} {} with {} argument(s)",
            self.interpreter.to_string_lossy(),
            self.script.display(),
            self.args.len()
        );

        let status = self
            .command()
            .spawn()
            .and_then(|mut child| supervise(&mut child, &guard));

        if guard.triggered() {
            return ChildOutcome::Interrupted;
        }

        match status {
            Ok(Some(status)) => ChildOutcome::Exited(exit_code(status)),
            Ok(None) => ChildOutcome::Interrupted,
            Err(e) => ChildOutcome::LaunchFailed(e),
        }
    }
}

/// Wait for `child`, returning `None` if an interrupt cut the wait short.
fn supervise(child: &mut Child, guard: &InterruptGuard) -> io::Result<Option<ExitStatus>> {
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if guard.triggered() {
            stop(child)?;
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

/// Give an interrupted child [`INTERRUPT_GRACE`] to exit, then kill it.
fn stop(child: &mut Child) -> io::Result<()> {
    let deadline = Instant::now() + INTERRUPT_GRACE;
    while Instant::now() < deadline {
        if child.try_wait()?.is_some() {
            return Ok(());
        }
        thread::sleep(POLL_INTERVAL);
    }

    tracing::debug!("Child {} still running after interrupt, killing it", child.id());
    if let Err(e) = child.kill() {
        tracing::debug!("Kill failed: {}", e);
    }
    child.wait().map(|_| ())
}

/// Exit code for a finished child; signal deaths follow the shell convention.
fn exit_code(status: ExitStatus) -> i32 {
    match status.code() {
        Some(code) => code,
        None => terminated_by_signal(status),
    }
}

#[cfg(unix)]
fn terminated_by_signal(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    match status.signal() {
        Some(signal) => 128 + signal,
        None => EXIT_FAILURE,
    }
}

#[cfg(not(unix))]
fn terminated_by_signal(_status: ExitStatus) -> i32 {
    EXIT_FAILURE
}
