// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::error::{ForgelinkError, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// A named, independently configurable capability, mapped to the
/// namespace its resources are provisioned into.
#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    pub namespace: String,
}

/// Installer configuration, loaded from a YAML file
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    features: BTreeMap<String, Feature>,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            ForgelinkError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        serde_yaml::from_str(&raw).map_err(|e| {
            ForgelinkError::ConfigError(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Resolve the namespace registered for a feature
    pub fn feature_namespace(&self, feature: &str) -> Result<&str> {
        self.features
            .get(feature)
            .map(|f| f.namespace.as_str())
            .ok_or_else(|| ForgelinkError::UnknownFeature(feature.to_string()))
    }
}
