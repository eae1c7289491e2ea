// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[search]` - Search service URL and initial result count
//! - `[results]` - Result image cache size
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `PERSON_LENS_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Service URL
//!
//! The search service base URL is not only a preference: it is usually
//! provided by the environment. See [`resolve_api_base_url`].
//!
//! # Examples
//!
//! ```no_run
//! use person_lens::app::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.search.api_base_url = Some("http://localhost:8000".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::search::ResultCount;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Search service settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
    /// Base URL of the search service, used when `API_BASE_URL` is unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,

    /// Result count used when no previous session value exists.
    #[serde(
        default = "default_result_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_result_count: Option<u32>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_base_url: None,
            default_result_count: default_result_count(),
        }
    }
}

/// Result grid settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResultsConfig {
    /// Number of decoded result images kept in memory.
    #[serde(
        default = "default_thumbnail_cache_size",
        skip_serializing_if = "Option::is_none"
    )]
    pub thumbnail_cache_size: Option<usize>,
}

impl Default for ResultsConfig {
    fn default() -> Self {
        Self {
            thumbnail_cache_size: default_thumbnail_cache_size(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub results: ResultsConfig,
}

impl Config {
    /// Initial result count, clamped to the valid range.
    #[must_use]
    pub fn default_result_count(&self) -> ResultCount {
        self.search
            .default_result_count
            .map(ResultCount::from)
            .unwrap_or_default()
    }

    /// Thumbnail cache capacity, clamped to the supported range.
    #[must_use]
    pub fn thumbnail_cache_size(&self) -> usize {
        self.results
            .thumbnail_cache_size
            .unwrap_or(DEFAULT_THUMBNAIL_CACHE_SIZE)
            .clamp(MIN_THUMBNAIL_CACHE_SIZE, MAX_THUMBNAIL_CACHE_SIZE)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_result_count() -> Option<u32> {
    Some(DEFAULT_RESULT_COUNT)
}

fn default_thumbnail_cache_size() -> Option<usize> {
    Some(DEFAULT_THUMBNAIL_CACHE_SIZE)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {other}"))),
    }
}

// =============================================================================
// Service URL Resolution
// =============================================================================

/// Resolves the search service base URL.
///
/// Priority: `--api-url` CLI flag, then the `API_BASE_URL` environment
/// variable (which may come from a `.env` file), then `[search]
/// api_base_url`. Blank values are skipped. `None` means searching is
/// impossible until the user configures a URL.
#[must_use]
pub fn resolve_api_base_url(cli_value: Option<&str>, config: &Config) -> Option<String> {
    let env_value = std::env::var(ENV_API_BASE_URL).ok();
    pick_api_base_url(cli_value, env_value.as_deref(), config)
}

fn pick_api_base_url(
    cli_value: Option<&str>,
    env_value: Option<&str>,
    config: &Config,
) -> Option<String> {
    [
        cli_value,
        env_value,
        config.search.api_base_url.as_deref(),
    ]
    .into_iter()
    .flatten()
    .map(str::trim)
    .find(|value| !value.is_empty())
    .map(str::to_string)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "ignoring unreadable settings file");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            search: SearchConfig {
                api_base_url: Some("http://search.local:8000".to_string()),
                default_result_count: Some(25),
            },
            results: ResultsConfig {
                thumbnail_cache_size: Some(64),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(!message.is_empty()),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn unreadable_file_yields_defaults_and_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[search\nbroken")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn missing_file_yields_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            "[search]\napi_base_url = \"http://10.0.0.2:8000\"\n",
        )
        .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(
            loaded.search.api_base_url.as_deref(),
            Some("http://10.0.0.2:8000")
        );
        assert_eq!(loaded.search.default_result_count, Some(DEFAULT_RESULT_COUNT));
        assert_eq!(loaded.general.theme_mode, ThemeMode::System);
        assert_eq!(loaded.thumbnail_cache_size(), DEFAULT_THUMBNAIL_CACHE_SIZE);
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config =
            toml::from_str("[general]\ntheme_mode = \"DARK\"\n").expect("valid config");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn out_of_range_values_are_clamped_on_use() {
        let config = Config {
            search: SearchConfig {
                api_base_url: None,
                default_result_count: Some(50_000),
            },
            results: ResultsConfig {
                thumbnail_cache_size: Some(1),
            },
            ..Config::default()
        };
        assert_eq!(config.default_result_count().value(), MAX_RESULT_COUNT);
        assert_eq!(config.thumbnail_cache_size(), MIN_THUMBNAIL_CACHE_SIZE);
    }

    #[test]
    fn api_base_url_priority_is_cli_env_config() {
        let config = Config {
            search: SearchConfig {
                api_base_url: Some("http://from-config".to_string()),
                ..SearchConfig::default()
            },
            ..Config::default()
        };

        assert_eq!(
            pick_api_base_url(Some("http://from-cli"), Some("http://from-env"), &config),
            Some("http://from-cli".to_string())
        );
        assert_eq!(
            pick_api_base_url(None, Some("http://from-env"), &config),
            Some("http://from-env".to_string())
        );
        assert_eq!(
            pick_api_base_url(None, None, &config),
            Some("http://from-config".to_string())
        );
    }

    #[test]
    fn blank_api_base_urls_count_as_missing() {
        let config = Config::default();
        assert_eq!(pick_api_base_url(Some("  "), Some(""), &config), None);
    }
}
