//! Config file formats: TOML (native), YAML and JSON, chosen by file extension.

use super::Mapping;
use serde_json::Value;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Pick a format from the file extension; anything unrecognised is TOML.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => ConfigFormat::Yaml,
            "json" => ConfigFormat::Json,
            _ => ConfigFormat::Toml,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "toml" => Some(ConfigFormat::Toml),
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            "json" => Some(ConfigFormat::Json),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ConfigFormat::Toml => "toml",
            ConfigFormat::Yaml => "yaml",
            ConfigFormat::Json => "json",
        }
    }

    /// Parse file content into a generic value. Errors carry the parser's message.
    pub fn parse(self, content: &str) -> Result<Value, String> {
        match self {
            ConfigFormat::Toml => toml::from_str::<Value>(content).map_err(|e| e.to_string()),
            ConfigFormat::Yaml => serde_yaml::from_str::<Value>(content).map_err(|e| e.to_string()),
            ConfigFormat::Json => serde_json::from_str::<Value>(content).map_err(|e| e.to_string()),
        }
    }

    /// Serialize a catalog in its stored key order.
    ///
    /// TOML has no null, so null entries are left out of TOML output; YAML and
    /// JSON keep them.
    pub fn render(self, catalog: &Mapping) -> Result<String, String> {
        match self {
            ConfigFormat::Toml => {
                toml::to_string_pretty(&without_nulls(catalog)).map_err(|e| e.to_string())
            }
            ConfigFormat::Yaml => serde_yaml::to_string(catalog).map_err(|e| e.to_string()),
            ConfigFormat::Json => serde_json::to_string_pretty(catalog)
                .map(|mut out| {
                    out.push('\n');
                    out
                })
                .map_err(|e| e.to_string()),
        }
    }
}

/// Copy of `catalog` with null mapping entries and null sequence items removed, at any depth.
fn without_nulls(catalog: &Mapping) -> Mapping {
    catalog
        .iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| (key.clone(), strip_null_value(value)))
        .collect()
}

fn strip_null_value(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(without_nulls(map)),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .filter(|item| !item.is_null())
                .map(strip_null_value)
                .collect(),
        ),
        other => other.clone(),
    }
}
