//! XDG config home resolution.

use crate::error::ConfigError;
use std::path::PathBuf;

/// Directory name used under the config home and for the log file.
pub const APP_DIR: &str = "biucing";

/// Config home: `$XDG_CONFIG_HOME` when set to an absolute path, otherwise `~/.config`.
pub fn config_home() -> Result<PathBuf, ConfigError> {
    if let Some(dir) = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .filter(|p| p.is_absolute())
    {
        return Ok(dir);
    }
    directories::BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".config"))
        .ok_or(ConfigError::HomeDirUnavailable)
}

/// `<config home>/biucing`
pub fn app_config_dir() -> Result<PathBuf, ConfigError> {
    Ok(config_home()?.join(APP_DIR))
}

/// Default log file under the platform state directory (data dir where there is none).
pub fn default_log_file() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_DIR).map(|dirs| {
        dirs.state_dir()
            .unwrap_or_else(|| dirs.data_local_dir())
            .join("biucing.log")
    })
}
