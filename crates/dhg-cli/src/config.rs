//! # Configuration File
//!
//! Optional YAML file passed with `--config`. Every field is optional and
//! supplies a default that an explicit command-line flag overrides:
//!
//! ```yaml
//! key: destination
//! nonce_length: 8
//! algorithm: md5
//! container_values: empty
//! max_depth: 127
//! seed: 42
//! ```
//!
//! Unknown fields are rejected so that a typo cannot silently fall back to
//! a default.

use std::path::Path;

use anyhow::{Context, Result};
use dhg_core::ContainerPolicy;
use serde::Deserialize;

/// Generator defaults loaded from a YAML file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Field name to search for.
    pub key: Option<String>,
    /// Number of nonce characters.
    pub nonce_length: Option<usize>,
    /// Digest algorithm name (`md5` or `sha256`).
    pub algorithm: Option<String>,
    /// Container-valued match policy (`empty`, `json`, or `skip`).
    pub container_values: Option<ContainerPolicy>,
    /// Maximum nesting depth the search may enter.
    pub max_depth: Option<usize>,
    /// Seed for a reproducible nonce sequence.
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    /// Parse a configuration document.
    pub fn from_yaml_str(text: &str) -> Result<Self, serde_yaml::Error> {
        // An empty file deserializes as YAML null rather than an empty map.
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
    }

    /// Read and parse the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config = Self::from_yaml_str(&text)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }
}
