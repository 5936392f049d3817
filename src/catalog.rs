//! Stack catalog: domains, stacks and tools.
//!
//! The effective catalog is a plain nested mapping (defaults merged with user
//! overrides). This module puts read-only, typed views on top of it. Missing
//! fields are filled in when read, never written back.

use crate::config::Mapping;
use crate::error::ApiError;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Toolchain domains known to the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Frontend,
    Mobile,
    Desktop,
    Backend,
    Testing,
    Devops,
}

impl Domain {
    pub const ALL: [Domain; 6] = [
        Domain::Frontend,
        Domain::Mobile,
        Domain::Desktop,
        Domain::Backend,
        Domain::Testing,
        Domain::Devops,
    ];

    /// Catalog key for this domain.
    pub fn as_str(self) -> &'static str {
        match self {
            Domain::Frontend => "frontend",
            Domain::Mobile => "mobile",
            Domain::Desktop => "desktop",
            Domain::Backend => "backend",
            Domain::Testing => "testing",
            Domain::Devops => "devops",
        }
    }

    /// Human-readable name used in headings.
    pub fn title(self) -> &'static str {
        match self {
            Domain::Frontend => "Frontend",
            Domain::Mobile => "Mobile",
            Domain::Desktop => "Desktop",
            Domain::Backend => "Backend",
            Domain::Testing => "Testing",
            Domain::Devops => "DevOps",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Domain {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Domain::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| ApiError::UnknownDomain(s.to_string()))
    }
}

/// The effective catalog for one invocation. Read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    root: Mapping,
}

impl Catalog {
    pub fn new(root: Mapping) -> Self {
        Self { root }
    }

    pub fn as_map(&self) -> &Mapping {
        &self.root
    }

    /// Look up a domain by name.
    pub fn get_domain(&self, name: &str) -> Result<DomainEntry<'_>, ApiError> {
        let domain: Domain = name.parse()?;
        self.domain(domain)
    }

    /// Domain section, or `UnknownDomain` when the catalog has no mapping for it.
    pub fn domain(&self, domain: Domain) -> Result<DomainEntry<'_>, ApiError> {
        self.root
            .get(domain.as_str())
            .and_then(Value::as_object)
            .map(|fields| DomainEntry { domain, fields })
            .ok_or_else(|| ApiError::UnknownDomain(domain.as_str().to_string()))
    }
}

/// One domain's section of the catalog.
#[derive(Debug, Clone, Copy)]
pub struct DomainEntry<'a> {
    domain: Domain,
    fields: &'a Mapping,
}

impl<'a> DomainEntry<'a> {
    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn summary(&self) -> Option<&'a str> {
        self.fields.get("summary").and_then(Value::as_str)
    }

    /// The `stacks` mapping; empty when absent or not a mapping.
    pub fn stacks(&self) -> Stacks<'a> {
        self.fields
            .get("stacks")
            .and_then(Value::as_object)
            .map(Stacks::from_map)
            .unwrap_or_default()
    }
}

/// Named stacks of a domain.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stacks<'a> {
    entries: Option<&'a Mapping>,
}

impl<'a> Stacks<'a> {
    /// View over a `stacks` mapping.
    pub fn from_map(entries: &'a Mapping) -> Self {
        Self {
            entries: Some(entries),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.map_or(0, Mapping::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, name: &str) -> Option<StackEntry<'a>> {
        self.entries
            .and_then(|entries| entries.get_key_value(name))
            .map(|(name, value)| StackEntry { name, value })
    }

    pub fn iter(&self) -> impl Iterator<Item = StackEntry<'a>> + 'a {
        self.entries
            .into_iter()
            .flat_map(|entries| entries.iter())
            .map(|(name, value)| StackEntry { name, value })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StackEntry<'a> {
    name: &'a str,
    value: &'a Value,
}

impl<'a> StackEntry<'a> {
    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn description(&self) -> &'a str {
        self.value
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or("")
    }

    /// Tools in configured order; empty when `tools` is missing or not a sequence.
    pub fn tools(&self) -> Vec<ToolEntry<'a>> {
        self.value
            .get("tools")
            .and_then(Value::as_array)
            .map(|tools| tools.iter().map(|value| ToolEntry { value }).collect())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ToolEntry<'a> {
    value: &'a Value,
}

impl<'a> ToolEntry<'a> {
    pub fn name(&self) -> &'a str {
        self.field("name").unwrap_or("unknown")
    }

    pub fn category(&self) -> &'a str {
        self.field("category").unwrap_or("")
    }

    pub fn url(&self) -> &'a str {
        self.field("url").unwrap_or("")
    }

    fn field(&self, key: &str) -> Option<&'a str> {
        self.value.get(key).and_then(Value::as_str)
    }
}
