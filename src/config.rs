use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::activity::ActivityConfig;
use crate::logging::LogConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Activity scoring goals and blend weights
    pub activity: ActivityConfig,

    /// Logging settings
    pub logging: LogConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).with_context(|| {
            format!("Failed to read config file: {}", path.as_ref().display())
        })?;

        let config: AppConfig = toml::from_str(&content).with_context(|| {
            format!("Failed to parse config file: {}", path.as_ref().display())
        })?;

        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml_content =
            toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        fs::write(&path, toml_content).with_context(|| {
            format!("Failed to write config file: {}", path.as_ref().display())
        })?;

        Ok(())
    }

    /// Default configuration file path under the platform config directory
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("fitplan")
            .join("config.toml")
    }

    /// Load from the default path, falling back to defaults when the file
    /// does not exist or cannot be parsed
    pub fn load_or_default() -> Self {
        let config_path = Self::default_config_path();

        match Self::load_from_file(&config_path) {
            Ok(config) => config,
            Err(_) => {
                tracing::debug!(
                    path = %config_path.display(),
                    "config file not found, using defaults"
                );
                Self::default()
            }
        }
    }
}
