//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::APP_CONFIG_DIR_NAME;

/// Largest accepted `display.top_count`.
pub const MAX_TOP_COUNT: usize = 10;

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// Campaign data location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DataConfig {
    /// JSON file with campaign records. The bundled dataset is used when unset.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Display help on startup
    pub show_help_on_startup: bool,
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_help_on_startup: true,
            theme_mode: ThemeMode::default(),
        }
    }
}

/// Search behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SearchConfig {
    /// Submitting an empty query shows all campaigns instead of doing nothing
    #[serde(default)]
    pub empty_query_shows_all: bool,
}

/// Highlight panel settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// How many campaigns `top` lists by default
    #[serde(default = "default_top_count")]
    pub top_count: usize,
}

fn default_top_count() -> usize {
    2
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            top_count: default_top_count(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/Fundboard/config.toml`
/// - macOS: `~/Library/Application Support/Fundboard/config.toml`
/// - Windows: `%APPDATA%\Fundboard\config.toml`
///
/// # Validation
///
/// - `data.file` must exist if set
/// - `display.top_count` must be between 1 and 10
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Campaign data location
    #[serde(default)]
    pub data: DataConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
    /// Search behaviour
    #[serde(default)]
    pub search: SearchConfig,
    /// Highlight settings
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    ///
    /// - Linux: `~/.config/Fundboard/`
    /// - macOS: `~/Library/Application Support/Fundboard/`
    /// - Windows: `%APPDATA%\Fundboard\`
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the default config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from a specific file.
    ///
    /// A missing file yields the defaults; a present but invalid file is an error.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the default config file.
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to a specific file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if let Some(file) = &self.data.file {
            if !file.exists() {
                anyhow::bail!("Campaign data file does not exist: {}", file.display());
            }
        }

        if self.display.top_count == 0 || self.display.top_count > MAX_TOP_COUNT {
            anyhow::bail!(
                "display.top_count must be between 1 and {MAX_TOP_COUNT}, got {}",
                self.display.top_count
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.data.file, None);
        assert!(config.ui.show_help_on_startup);
        assert_eq!(config.ui.theme_mode, ThemeMode::Auto);
        assert!(!config.search.empty_query_shows_all);
        assert_eq!(config.display.top_count, 2);
    }

    #[test]
    fn test_config_validate() {
        let config = Config::new();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_data_file() {
        let temp_dir = TempDir::new().unwrap();
        let data = temp_dir.path().join("games.json");

        let mut config = Config::new();
        config.data.file = Some(data.clone());
        assert!(config.validate().is_err());

        fs::write(&data, "[]").unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_top_count() {
        let mut config = Config::new();
        config.display.top_count = 0;
        assert!(config.validate().is_err());
        config.display.top_count = MAX_TOP_COUNT + 1;
        assert!(config.validate().is_err());
        config.display.top_count = MAX_TOP_COUNT;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");

        let mut config = Config::new();
        config.ui.theme_mode = ThemeMode::Light;
        config.search.empty_query_shows_all = true;
        config.display.top_count = 3;
        config.save_to(&config_file).unwrap();

        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded, config);
        assert!(!config_file.with_extension("toml.tmp").exists());
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
        assert_eq!(loaded, Config::new());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(&config_file, "[search]\nempty_query_shows_all = true\n").unwrap();

        let loaded = Config::load_from(&config_file).unwrap();
        assert!(loaded.search.empty_query_shows_all);
        assert_eq!(loaded.display.top_count, 2);
        assert!(loaded.ui.show_help_on_startup);
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(&config_file, "this is = = not toml").unwrap();
        assert!(Config::load_from(&config_file).is_err());
    }
}
