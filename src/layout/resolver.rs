//! Installation root resolution.
//!
//! Tries an ordered list of [`RootStrategy`] values:
//! 1. Installed layout (`scripts/` next to the launcher)
//! 2. Source layout (tool marker two levels up)
//!
//! The first strategy that applies wins. If none do, resolution fails with
//! [`LauncherError::RootNotFound`].

use std::path::{Path, PathBuf};

use super::strategy::{InstalledLayout, RootStrategy, SourceLayout};
use crate::config::LauncherConfig;
use crate::error::{LauncherError, Result};

/// A located installation root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallationRoot {
    path: PathBuf,
}

impl InstallationRoot {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Directory holding the delegated script.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of `script_name` directly under the root, if it is a file.
    pub fn script(&self, script_name: &str) -> Result<PathBuf> {
        let path = self.path.join(script_name);
        if path.is_file() {
            Ok(path)
        } else {
            Err(LauncherError::ScriptNotFound { path })
        }
    }
}

/// Ordered chain of layout strategies.
pub struct RootResolver {
    strategies: Vec<Box<dyn RootStrategy>>,
}

impl RootResolver {
    /// The standard chain: installed layout first, then source layout.
    pub fn new(config: &LauncherConfig) -> Self {
        Self::with_strategies(vec![
            Box::new(InstalledLayout::new(config)),
            Box::new(SourceLayout::new(config)),
        ])
    }

    /// A resolver over a custom strategy chain.
    pub fn with_strategies(strategies: Vec<Box<dyn RootStrategy>>) -> Self {
        Self { strategies }
    }

    /// Resolve the root relative to the launcher directory `origin`.
    ///
    /// A missing origin (the executable path could not be determined)
    /// resolves to nothing.
    pub fn resolve(&self, origin: Option<&Path>) -> Result<InstallationRoot> {
        let origin = origin.ok_or(LauncherError::RootNotFound)?;
        for strategy in &self.strategies {
            if let Some(path) = strategy.locate(origin) {
                tracing::debug!("Using {} layout at {}", strategy.kind(), path.display());
                return Ok(InstallationRoot::new(path));
            }
            tracing::debug!("{} layout not found from {}", strategy.kind(), origin.display());
        }
        Err(LauncherError::RootNotFound)
    }
}
