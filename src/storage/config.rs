//! Configuration handling for Estate CLI
//!
//! Global settings live in the user config directory
//! (`estate-cli/config.toml`); per-directory settings live in
//! `estate.toml` next to the listing file. Both are optional and fall
//! back to defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::MAX_PROPERTIES;

/// Listing file used when neither config nor `--file` names one.
pub const DEFAULT_DATA_FILE: &str = "properties.txt";

/// Favorites file used when config does not name one.
pub const DEFAULT_FAVORITES_FILE: &str = "favorites.txt";

/// Name of the per-directory config file.
pub const LOCAL_CONFIG_FILE: &str = "estate.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Default output format for commands.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DefaultFormat {
    #[default]
    Text,
    Json,
}

/// Global user configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GlobalConfig {
    /// Default output format (text or json)
    pub default_format: DefaultFormat,
}

/// Per-directory configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalConfig {
    /// Listing file, relative to the working directory
    pub data_file: PathBuf,

    /// Favorites file, relative to the working directory
    pub favorites_file: PathBuf,

    /// Catalog (and favorites) capacity
    pub capacity: usize,
}

impl Default for LocalConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            favorites_file: PathBuf::from(DEFAULT_FAVORITES_FILE),
            capacity: MAX_PROPERTIES,
        }
    }
}

/// Combined configuration (global + local).
#[derive(Debug, Clone)]
pub struct Config {
    pub global: GlobalConfig,
    pub local: LocalConfig,
}

impl Config {
    /// Loads configuration from the default locations.
    pub fn load() -> Result<Self> {
        Self::for_dir(Path::new("."))
    }

    /// Loads configuration with the local file looked up in `dir`.
    pub fn for_dir(dir: &Path) -> Result<Self> {
        Ok(Self {
            global: Self::load_global()?,
            local: Self::load_local(dir)?,
        })
    }

    /// Returns the global config directory.
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "estate", "estate-cli").map(|dirs| dirs.config_dir().to_path_buf())
    }

    fn load_global() -> Result<GlobalConfig> {
        let config_dir = match Self::global_config_dir() {
            Some(dir) => dir,
            None => return Ok(GlobalConfig::default()),
        };

        let config_path = config_dir.join("config.toml");
        if !config_path.exists() {
            return Ok(GlobalConfig::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read global config: {}", config_path.display()))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .context("Failed to parse global config")
    }

    fn load_local(dir: &Path) -> Result<LocalConfig> {
        let config_path = dir.join(LOCAL_CONFIG_FILE);
        if !config_path.exists() {
            return Ok(LocalConfig::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config: {}", config_path.display()))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .context("Failed to parse config")
    }
}
