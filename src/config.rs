// In: src/config.rs

//! Deployment-time configuration of the scalar kind set.
//!
//! A `RegistryConfig` is read once at the application boundary (e.g. from a JSON
//! document shipped with a deployment) and turned into an immutable
//! `TypeRegistry` via `TypeRegistry::from_config`. There is no way to extend a
//! registry after that; a different kind set means a different configuration
//! and a restart.

use crate::error::SimpleDataError;
use crate::types::{Category, ScalarType};
use serde::{Deserialize, Serialize};

/// The textual kind list a registry is built from.
///
/// The categorized form is the authoritative one. The flat form lists kinds
/// without a numeric/other split; registries built from it cannot classify.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum RegistryConfig {
    /// `{"numeric": [...], "other": [...]}`
    Categorized {
        numeric: Vec<String>,
        other: Vec<String>,
    },
    /// `{"types": [...]}`
    Flat { types: Vec<String> },
}

impl RegistryConfig {
    /// Parses a configuration document.
    pub fn from_json(json: &str) -> Result<Self, SimpleDataError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SimpleDataError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// Default implementation mirrors the builtin registry's partition.
impl Default for RegistryConfig {
    fn default() -> Self {
        let names_in = |category: Category| {
            ScalarType::ALL
                .iter()
                .filter(|t| t.category() == category)
                .map(|t| t.name().to_string())
                .collect::<Vec<String>>()
        };
        RegistryConfig::Categorized {
            numeric: names_in(Category::Numeric),
            other: names_in(Category::Other),
        }
    }
}
