//! Error types for the biucing toolchain assistant.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config path does not exist: {}", .0.display())]
    ConfigPathInvalid(PathBuf),

    #[error("Config file is malformed: {}: {message}", path.display())]
    ConfigMalformed { path: PathBuf, message: String },

    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// The catalog embedded in the binary could not be parsed. This is a
    /// packaging defect, not a user error.
    #[error("Built-in catalog is corrupt: {0}")]
    DefaultCatalog(String),

    #[error("Could not determine the home directory for the user config")]
    HomeDirUnavailable,
}

/// Errors surfaced by CLI commands
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unknown domain '{0}'.")]
    UnknownDomain(String),

    #[error("Stack '{0}' not found.")]
    UnknownStack(String),

    #[error("Destination exists: {}. Use --force to overwrite.", .0.display())]
    DestinationExists(PathBuf),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}
