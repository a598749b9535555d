//! Configuration management for upcheck

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// URL of the release-metadata endpoint queried for the latest version
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Poll interval in milliseconds for the event loop tick
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,

    /// Dark-mode seed used when no CLI flag is given (`None` = undecided)
    #[serde(default)]
    pub theme: Option<bool>,

    /// Static footer text shown at the bottom of the panel
    #[serde(default = "default_footer")]
    pub footer: String,
}

fn default_endpoint() -> String {
    format!("https://crates.io/api/v1/crates/{}", env!("CARGO_PKG_NAME"))
}

const fn default_poll_interval() -> u64 {
    100
}

fn default_footer() -> String {
    "upcheck is free software, released under Apache-2.0.".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            poll_interval_ms: default_poll_interval(),
            theme: None,
            footer: default_footer(),
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// # Errors
    ///
    /// Returns an error if reading or parsing the config file fails
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be created or the file cannot be written
    pub fn save(&self) -> Result<()> {
        let path = Self::default_path();
        self.save_to(&path)
    }

    /// Save configuration to a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }
        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn default_path() -> PathBuf {
        paths::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("upcheck")
            .join("config.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.endpoint.starts_with("https://crates.io/api/v1/crates/"));
        assert_eq!(config.poll_interval_ms, 100);
        assert_eq!(config.theme, None);
        assert!(!config.footer.is_empty());
    }

    #[test]
    fn test_save_and_load() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.json");

        let config = Config {
            endpoint: "https://releases.example.com/upcheck".to_string(),
            poll_interval_ms: 200,
            theme: Some(true),
            footer: "custom footer".to_string(),
        };

        config.save_to(&config_path)?;
        let loaded = Config::load_from(&config_path)?;

        assert_eq!(config, loaded);
        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_error() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.json");

        assert!(Config::load_from(&config_path).is_err());
        Ok(())
    }

    #[test]
    fn test_load_invalid_json_returns_error() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.json");
        std::fs::write(&config_path, "{ not json")?;

        assert!(Config::load_from(&config_path).is_err());
        Ok(())
    }

    #[test]
    fn test_missing_fields_take_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.json");
        std::fs::write(&config_path, r#"{"theme": false}"#)?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.theme, Some(false));
        assert_eq!(loaded.endpoint, default_endpoint());
        assert_eq!(loaded.poll_interval_ms, 100);
        Ok(())
    }

    #[test]
    fn test_default_path_suffix() {
        let path = Config::default_path();
        assert!(path.ends_with("upcheck/config.json"));
    }
}
