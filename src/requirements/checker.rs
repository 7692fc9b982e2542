//! Dependency checker.
//!
//! The `DependencyChecker` reports which of a fixed set of executables are
//! absent from the search path.

use std::path::PathBuf;

use crate::config::DependencyRequirement;
use crate::requirements::probe::resolve_tool_path;

/// Checks a requirement set against a list of PATH directories.
pub struct DependencyChecker<'a> {
    requirements: &'a [DependencyRequirement],
    path_entries: Vec<PathBuf>,
}

impl<'a> DependencyChecker<'a> {
    /// Create a checker over `requirements`, searching `path_entries`.
    pub fn new(requirements: &'a [DependencyRequirement], path_entries: Vec<PathBuf>) -> Self {
        Self {
            requirements,
            path_entries,
        }
    }

    /// Display names of the requirements that could not be found.
    ///
    /// Order follows the requirement set. An empty list means everything
    /// is present.
    pub fn missing(&self) -> Vec<String> {
        self.requirements
            .iter()
            .filter(|req| !self.is_present(req))
            .map(|req| req.name.clone())
            .collect()
    }

    fn is_present(&self, requirement: &DependencyRequirement) -> bool {
        match resolve_tool_path(&requirement.executable, &self.path_entries) {
            Some(path) => {
                tracing::debug!("Found {} at {}", requirement.executable, path.display());
                true
            }
            None => {
                tracing::debug!("{} not found on PATH", requirement.executable);
                false
            }
        }
    }
}
