//! Executable lookup on the search path.
//!
//! Lookups walk the PATH entries directly and never spawn a process. The
//! `which` command is avoided because its behavior varies across systems
//! and it is sometimes a shell builtin.
//!
//! # Example
//!
//! ```no_run
//! use agentk::requirements::probe::resolve_tool_path;
//!
//! let path: Vec<_> = std::env::var_os("PATH")
//!     .map(|p| std::env::split_paths(&p).collect())
//!     .unwrap_or_default();
//! if let Some(bash) = resolve_tool_path("bash", &path) {
//!     println!("bash lives at {}", bash.display());
//! }
//! ```

use std::path::{Path, PathBuf};

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Candidate file names for `tool` inside one PATH directory.
#[cfg(windows)]
fn candidates(dir: &Path, tool: &str) -> Vec<PathBuf> {
    let exts = std::env::var("PATHEXT").unwrap_or_else(|_| ".COM;.EXE;.BAT;.CMD".to_string());
    let mut names = vec![dir.join(tool)];
    names.extend(
        exts.split(';')
            .filter(|ext| !ext.is_empty())
            .map(|ext| dir.join(format!("{}{}", tool, ext.to_lowercase()))),
    );
    names
}

#[cfg(not(windows))]
fn candidates(dir: &Path, tool: &str) -> Vec<PathBuf> {
    vec![dir.join(tool)]
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that is a regular file and executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        for candidate in candidates(dir, tool) {
            if candidate.is_file() && is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}
