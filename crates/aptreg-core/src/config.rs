//! aptreg configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE: &str = "aptreg.toml";

/// Top-level aptreg configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AptregConfig {
    /// CSV file that student records are appended to.
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,
    /// Fixed quiz seed. Unset means a fresh random quiz every run.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_store_path() -> PathBuf {
    PathBuf::from("students.csv")
}

impl Default for AptregConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            seed: None,
        }
    }
}

impl AptregConfig {
    /// Apply command-line overrides on top of file settings.
    pub fn with_overrides(mut self, store_path: Option<PathBuf>, seed: Option<u64>) -> Self {
        if let Some(path) = store_path {
            self.store_path = path;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }
}

/// Load config from an explicit path, or from `aptreg.toml` in the working
/// directory, falling back to defaults when neither exists.
pub fn load_config_from(path: Option<&Path>) -> Result<AptregConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => anyhow::bail!("config file not found: {}", p.display()),
        None => Some(PathBuf::from(CONFIG_FILE)).filter(|p| p.exists()),
    };

    let Some(config_path) = config_path else {
        tracing::debug!("no config file found, using defaults");
        return Ok(AptregConfig::default());
    };

    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("failed to read config: {}", config_path.display()))?;
    let config = parse_config_str(&content)
        .with_context(|| format!("failed to parse config: {}", config_path.display()))?;
    tracing::debug!(path = %config_path.display(), ?config, "loaded config");
    Ok(config)
}

/// Parse a TOML config string.
pub fn parse_config_str(content: &str) -> Result<AptregConfig> {
    Ok(toml::from_str(content)?)
}
