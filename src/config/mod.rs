//! Launcher configuration and runtime context.
//!
//! - Static tool description in [`schema`]
//! - Environment snapshot and override in [`environment`]
//! - Per-run inputs captured from the process in [`context`]

pub mod context;
pub mod environment;
pub mod schema;

pub use context::LaunchContext;
pub use environment::{load_system_env, with_override, EnvMap};
pub use schema::{DependencyRequirement, LauncherConfig, EXIT_FAILURE, EXIT_INTERRUPTED};
