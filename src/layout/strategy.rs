//! Layout strategies for locating the installation root.
//!
//! Each strategy inspects the filesystem relative to the launcher's own
//! directory and either finds a root or reports that it does not apply.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::LauncherConfig;

/// Which deployment layout produced the installation root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    /// Scripts bundled next to the launcher.
    Installed,
    /// Running from a development checkout.
    Source,
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Installed => write!(f, "installed"),
            Self::Source => write!(f, "source"),
        }
    }
}

/// One way of finding the installation root.
pub trait RootStrategy {
    /// Layout this strategy recognizes.
    fn kind(&self) -> LayoutKind;

    /// Return the root if the layout is present around `origin`.
    fn locate(&self, origin: &Path) -> Option<PathBuf>;
}

/// `<origin>/<scripts_dir>` exists: that directory is the root.
#[derive(Debug, Clone)]
pub struct InstalledLayout {
    scripts_dir: String,
}

impl InstalledLayout {
    pub fn new(config: &LauncherConfig) -> Self {
        Self {
            scripts_dir: config.scripts_dir.clone(),
        }
    }
}

impl RootStrategy for InstalledLayout {
    fn kind(&self) -> LayoutKind {
        LayoutKind::Installed
    }

    fn locate(&self, origin: &Path) -> Option<PathBuf> {
        let scripts = origin.join(&self.scripts_dir);
        scripts.is_dir().then_some(scripts)
    }
}

/// Two levels above `origin` holds an entry named after the tool: that
/// ancestor is the root.
#[derive(Debug, Clone)]
pub struct SourceLayout {
    marker: String,
}

impl SourceLayout {
    pub fn new(config: &LauncherConfig) -> Self {
        Self {
            marker: config.tool_name.clone(),
        }
    }
}

impl RootStrategy for SourceLayout {
    fn kind(&self) -> LayoutKind {
        LayoutKind::Source
    }

    fn locate(&self, origin: &Path) -> Option<PathBuf> {
        let ancestor = origin.parent()?.parent()?;
        ancestor
            .join(&self.marker)
            .exists()
            .then(|| ancestor.to_path_buf())
    }
}
