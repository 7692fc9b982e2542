//! Installation layout discovery.
//!
//! The same launcher runs either from a packaged install, with scripts
//! bundled beside it, or straight from a development checkout. This module
//! finds the installation root in both cases without any configuration.

pub mod resolver;
pub mod strategy;

pub use resolver::{InstallationRoot, RootResolver};
pub use strategy::{InstalledLayout, LayoutKind, RootStrategy, SourceLayout};
