//! Configuration manager for loading and saving application configuration
//!
//! This module provides functionality to load and save configuration to
//! `<config dir>/config.json` with atomic writes to prevent corruption.

use crate::config::models::AppConfig;
use crate::error::{Result, SiteError, StringError};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "PROJECTTOWN_CONFIG_DIR";

/// Configuration manager
pub struct ConfigManager;

impl ConfigManager {
    /// Directory holding `config.json` and the log files
    ///
    /// Resolution order: `PROJECTTOWN_CONFIG_DIR`, `%APPDATA%\ProjectTown`,
    /// `$XDG_CONFIG_HOME/projecttown`, `$HOME/.config/projecttown`, `./ProjectTown`.
    pub fn get_config_dir() -> PathBuf {
        let non_empty = |key: &str| std::env::var_os(key).filter(|v| !v.is_empty());

        if let Some(dir) = non_empty(CONFIG_DIR_ENV) {
            return PathBuf::from(dir);
        }
        if let Some(appdata) = non_empty("APPDATA") {
            return PathBuf::from(appdata).join("ProjectTown");
        }
        if let Some(xdg) = non_empty("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("projecttown");
        }
        if let Some(home) = non_empty("HOME") {
            return PathBuf::from(home).join(".config").join("projecttown");
        }
        PathBuf::from(".").join("ProjectTown")
    }

    /// Get the path to the configuration file
    pub fn get_config_path() -> PathBuf {
        Self::get_config_dir().join("config.json")
    }

    /// Ensure the configuration directory exists
    pub fn ensure_config_dir() -> Result<PathBuf> {
        let config_dir = Self::get_config_dir();
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    /// Load configuration from disk
    ///
    /// If the configuration file doesn't exist, can't be read or is corrupt,
    /// returns default configuration.
    pub fn load() -> Result<AppConfig> {
        let config_path = Self::get_config_path();

        if !config_path.exists() {
            info!("Configuration file not found, using defaults");
            return Ok(AppConfig::default());
        }

        let json = match std::fs::read_to_string(&config_path) {
            Ok(json) => json,
            Err(e) => {
                warn!(
                    "Failed to read {}, using defaults: {}",
                    config_path.display(),
                    e
                );
                return Ok(AppConfig::default());
            }
        };

        match serde_json::from_str::<AppConfig>(&json) {
            Ok(config) => {
                info!("Configuration loaded from {}", config_path.display());
                Ok(config.validated())
            }
            Err(e) => {
                warn!("Failed to parse configuration, using defaults: {}", e);
                Ok(AppConfig::default())
            }
        }
    }

    /// Save configuration to disk with atomic write
    ///
    /// Writes a temporary file in the same directory and persists it over the
    /// target, so readers never observe a half-written file.
    pub fn save(config: &AppConfig) -> Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        let json = serde_json::to_string_pretty(config)?;
        let mut temp = tempfile::NamedTempFile::new_in(&config_dir)?;
        temp.write_all(json.as_bytes())?;
        temp.as_file().sync_all()?;
        temp.persist(&config_path).map_err(|e| {
            SiteError::ConfigError(StringError::new(format!(
                "Failed to replace {}: {}",
                config_path.display(),
                e.error
            )))
        })?;

        debug!("Configuration written to {}", config_path.display());
        info!("Configuration saved successfully");
        Ok(())
    }
}
