//! Global config file source: ~/.config/biucing/config.toml or $XDG_CONFIG_HOME/biucing/config.toml

use crate::config::xdg::app_config_dir;
use crate::config::{ConfigFormat, Mapping};
use crate::error::ConfigError;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File names probed under the app config dir, in order.
const CANDIDATES: [&str; 3] = ["config.toml", "config.yaml", "config.yml"];

/// Path to the global config file.
///
/// Returns the first candidate that exists, or `config.toml` when none does.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let dir = app_config_dir()?;
    Ok(CANDIDATES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
        .unwrap_or_else(|| dir.join(CANDIDATES[0])))
}

/// Location of the override file for this run.
///
/// An explicit `path` is returned as given. Otherwise the global config file is
/// used; when the home directory cannot be resolved this is `Ok(None)` unless
/// `strict` is set.
pub fn locate_override(path: Option<&Path>, strict: bool) -> Result<Option<PathBuf>, ConfigError> {
    match path {
        Some(path) => Ok(Some(path.to_path_buf())),
        None => unresolved_home_is_absent(default_config_path(), strict),
    }
}

fn unresolved_home_is_absent(
    located: Result<PathBuf, ConfigError>,
    strict: bool,
) -> Result<Option<PathBuf>, ConfigError> {
    match located {
        Ok(path) => Ok(Some(path)),
        Err(ConfigError::HomeDirUnavailable) if !strict => {
            debug!("Home directory unavailable; using built-in catalog");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Load the user override mapping.
///
/// With `path = None` the global config file is used (see `locate_override`). A missing file yields an
/// empty mapping, or `ConfigNotFound` when `strict` is set. A file that exists
/// but cannot be read or parsed is always an error.
pub fn load_override(path: Option<&Path>, strict: bool) -> Result<Mapping, ConfigError> {
    let target = match locate_override(path, strict)? {
        Some(target) => target,
        None => return Ok(Mapping::new()),
    };

    if !target.exists() {
        if strict {
            return Err(ConfigError::ConfigNotFound(target));
        }
        debug!(
            config_path = %target.display(),
            "No user config file; using built-in catalog"
        );
        return Ok(Mapping::new());
    }

    let content = std::fs::read_to_string(&target).map_err(|e| ConfigError::ConfigMalformed {
        path: target.clone(),
        message: e.to_string(),
    })?;
    if content.trim().is_empty() {
        return Ok(Mapping::new());
    }

    let format = ConfigFormat::from_path(&target);
    let value = format
        .parse(&content)
        .map_err(|message| ConfigError::ConfigMalformed {
            path: target.clone(),
            message,
        })?;

    debug!(
        config_path = %target.display(),
        format = format.as_str(),
        "Loaded user config file"
    );

    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        other => Err(ConfigError::ConfigMalformed {
            path: target,
            message: format!("expected a mapping at the top level, found {}", kind(&other)),
        }),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
