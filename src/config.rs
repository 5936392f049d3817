//! Configuration System
//!
//! Builds the effective stack catalog: the built-in defaults shipped with the
//! binary, layered with an optional user override file. Nested mappings merge
//! key by key; every other value in the override replaces the default
//! wholesale. Tests included.

use crate::error::ConfigError;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::debug;

mod defaults;
mod format;
mod merge;
mod paths;
mod sources;

pub use defaults::load_defaults;
pub use format::ConfigFormat;
pub use merge::{merge, merge_value};
pub use sources::global_file::{default_config_path, load_override, locate_override};

/// XDG path helpers
pub mod xdg {
    pub use super::paths::*;
}

/// A nested key/value mapping as read from a catalog or override file.
pub type Mapping = Map<String, Value>;

/// Validate an explicitly requested config path.
///
/// `None` means "use the default location" and passes through untouched. An
/// explicit path must exist; a typo in `--config` is reported instead of being
/// treated as an absent override.
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>, ConfigError> {
    match explicit {
        None => Ok(None),
        Some(path) if path.exists() => Ok(Some(path.to_path_buf())),
        Some(path) => Err(ConfigError::ConfigPathInvalid(path.to_path_buf())),
    }
}

/// Combine the built-in defaults with user overrides.
///
/// The defaults are parsed fresh on every call, so the result never shares
/// state with a previous invocation.
pub fn build_config(user_path: Option<&Path>, strict: bool) -> Result<Mapping, ConfigError> {
    let defaults = load_defaults()?;
    let overrides = load_override(user_path, strict)?;
    if overrides.is_empty() {
        return Ok(defaults);
    }
    debug!(
        keys = overrides.len(),
        "Merging user overrides into built-in catalog"
    );
    Ok(merge(defaults, overrides))
}
