use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::resilience::RetryPolicy;

/// Asset storage settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AssetConfig {
    /// App storage root that experiment directories live under
    pub storage_root: PathBuf,

    /// Per-attempt timeout for file operations
    pub timeout_ms: u64,

    pub retry: RetryPolicy,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            storage_root: PathBuf::from("."),
            timeout_ms: 2000,
            retry: RetryPolicy::default(),
        }
    }
}

impl AssetConfig {
    pub fn new(storage_root: impl Into<PathBuf>) -> Self {
        Self {
            storage_root: storage_root.into(),
            ..Self::default()
        }
    }

    /// Load settings from a JSON file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .context(format!("Failed to read asset config from {:?}", path))?;

        let config: AssetConfig =
            serde_json::from_str(&json).context("Failed to parse asset config")?;

        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
