//! Built-in catalog embedded in the binary.

use super::Mapping;
use crate::error::ConfigError;

const DEFAULT_CATALOG: &str = include_str!("../../data/defaults.toml");

/// Parse the packaged catalog. Every call returns a fresh, independent copy.
pub fn load_defaults() -> Result<Mapping, ConfigError> {
    toml::from_str::<Mapping>(DEFAULT_CATALOG).map_err(|e| ConfigError::DefaultCatalog(e.to_string()))
}
