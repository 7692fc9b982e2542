//! Environment snapshot handling.
//!
//! The child receives a copy of the launcher's environment with one key
//! overwritten. The launcher's own process environment is never modified.

use std::collections::HashMap;
use std::ffi::{OsStr, OsString};

/// Environment map keyed by raw OS strings so non-UTF-8 values survive.
pub type EnvMap = HashMap<OsString, OsString>;

/// Snapshot the current process environment.
pub fn load_system_env() -> EnvMap {
    std::env::vars_os().collect()
}

/// Copy `base` and set `key` to `value`, replacing any prior value.
pub fn with_override(base: &EnvMap, key: &str, value: &OsStr) -> EnvMap {
    let mut result = base.clone();
    result.insert(OsString::from(key), value.to_os_string());
    result
}
