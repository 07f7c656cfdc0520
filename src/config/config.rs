//! TOML configuration parsing and management.

use crate::binding::BindMode;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Dispatch settings
    #[serde(default)]
    pub runner: RunnerConfig,
}

/// How handler dispatch behaves at the process boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// `lenient` ignores malformed arg tags, `strict` fails the bind
    #[serde(default)]
    pub bind_mode: BindMode,
    /// Exit status after a handler fails
    #[serde(default = "default_exit_code")]
    pub exit_code: i32,
    /// Print the command's usage after a handler fails
    #[serde(default = "default_print_usage")]
    pub print_usage: bool,
}

fn default_exit_code() -> i32 {
    1
}

fn default_print_usage() -> bool {
    true
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            bind_mode: BindMode::default(),
            exit_code: default_exit_code(),
            print_usage: default_print_usage(),
        }
    }
}

impl RunnerConfig {
    /// Parse a bare `RunnerConfig` table
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse runner config")
    }
}

/// Configuration loader
pub struct ConfigurationLoader {
    /// Where the configuration was looked up
    pub config_path: PathBuf,
    /// Loaded or default configuration
    pub config: Configuration,
}

impl ConfigurationLoader {
    /// Initialize configuration loader.
    ///
    /// # Arguments
    /// * `config_path` - Path to TOML config file. If None or missing, uses defaults.
    pub fn new(config_path: Option<&Path>) -> Result<Self> {
        let config_path = config_path
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| PathBuf::from("config/cli.toml"));

        let config = if config_path.exists() {
            Self::load_config(&config_path)?
        } else {
            Configuration::default()
        };

        Ok(Self {
            config_path,
            config,
        })
    }

    /// Create a loader from an already parsed configuration
    pub fn from_config(config: Configuration) -> Self {
        Self {
            config_path: PathBuf::from("config/cli.toml"),
            config,
        }
    }

    /// Load configuration from TOML file.
    fn load_config(path: &Path) -> Result<Configuration> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
    }
}
