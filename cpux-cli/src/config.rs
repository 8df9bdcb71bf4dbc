//! Configuration loading for cpux-cli
//!
//! Configuration is loaded from:
//! 1. `--config` / environment variable CPUX_CONFIG_PATH
//! 2. ~/.cpux/config.toml
//! 3. Default values
//!
//! Command-line flags override whatever the file says.

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Report output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Report format
    #[serde(default)]
    pub format: OutputFormat,
    /// Show memory in GiB alongside bytes (text format only)
    #[serde(default = "default_true")]
    pub human_readable: bool,
}

/// Report format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            human_readable: default_true(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// An explicitly requested file must exist; the default location may not.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                bail!("config file not found: {}", path.display());
            }
            return Self::load_from(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                tracing::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Parse a specific TOML file
    pub fn load_from(path: &Path) -> Result<Self> {
        tracing::debug!("Loading config from: {}", path.display());
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("invalid config in {}", path.display()))
    }

    /// ~/.cpux/config.toml
    fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".cpux").join("config.toml"))
    }
}
