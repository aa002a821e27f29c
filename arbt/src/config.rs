//! Configuration module for the arbt CLI.
//!
//! This module handles loading, saving, and managing configuration
//! settings for the arbt application.

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::commands::common::{error_messages, OutputFormat};
use crate::error::{ArbtError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "arbt.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Token output settings.
    #[serde(default)]
    pub lex: LexConfig,

    /// Diagnostic rendering settings.
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

/// Token output options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LexConfig {
    /// Output format, `text` or `json`.
    #[serde(default = "default_format")]
    pub format: String,

    /// Print each token's source range in text output.
    #[serde(default)]
    pub show_spans: bool,
}

/// Diagnostic rendering options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    /// Color the severity label of rendered diagnostics.
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_format() -> String {
    OutputFormat::Text.name().to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            lex: LexConfig::default(),
            diagnostics: DiagnosticsConfig::default(),
        }
    }
}

impl Default for LexConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            show_spans: false,
        }
    }
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

impl LexConfig {
    /// The configured output format.
    pub fn output_format(&self) -> Result<OutputFormat> {
        OutputFormat::from_str(&self.format).ok_or_else(|| {
            ArbtError::Validation(format!(
                "{} {}",
                error_messages::INVALID_CONFIG_FORMAT,
                self.format
            ))
        })
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/arbt/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => {
                debug!("no configuration file found, using defaults");
                Ok(Self::default())
            },
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ArbtError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| ArbtError::Config(format!("Failed to parse configuration: {}", e)))?;

        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Save configuration to a specific path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ArbtError::Config(format!("Failed to serialize configuration: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("arbt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("arbt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
