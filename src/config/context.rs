//! Per-run inputs gathered from the host process.

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use super::environment::{load_system_env, EnvMap};

/// Everything the launcher reads from its surroundings.
///
/// Built once at startup with [`LaunchContext::from_process`]; tests
/// construct it field by field so each stage sees a fixed host.
#[derive(Debug, Clone, Default)]
pub struct LaunchContext {
    /// Arguments after the launcher's own name, forwarded verbatim.
    pub args: Vec<OsString>,
    /// Directory containing the launcher executable, if it could be determined.
    pub origin: Option<PathBuf>,
    /// Inherited environment snapshot.
    pub env: EnvMap,
    /// Working directory handed to the child. `None` leaves it inherited.
    pub cwd: Option<PathBuf>,
}

impl LaunchContext {
    /// Capture the context of the running process.
    pub fn from_process(args: Vec<OsString>) -> Self {
        Self {
            args,
            origin: launcher_dir(),
            env: load_system_env(),
            cwd: std::env::current_dir().ok(),
        }
    }

    /// Directories listed in the snapshot's `PATH`, in search order.
    pub fn path_entries(&self) -> Vec<PathBuf> {
        self.env
            .get(OsStr::new("PATH"))
            .map(|path| std::env::split_paths(path).collect())
            .unwrap_or_default()
    }
}

/// Directory holding the running executable, with symlinks resolved.
fn launcher_dir() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    let exe = exe.canonicalize().unwrap_or(exe);
    exe.parent().map(|dir| dir.to_path_buf())
}
