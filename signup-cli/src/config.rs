//! CLI configuration: directory endpoint plus coordinator policy.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use signup_api::ApiConfig;
use signup_core::CoordinatorConfig;
use std::fs;
use std::path::Path;

/// Everything the driver needs, loadable from a JSON file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub api: ApiConfig,
    pub coordinator: CoordinatorConfig,
}

impl CliConfig {
    /// Reads a config file; a missing path yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}
