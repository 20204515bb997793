// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[gallery]` - Manifest path and card image folder
//! - `[display]` - Card width, fallback background, gradient
//! - `[navigation]` - Tap zones, prefetching, cache size
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `CARD_DECK_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use card_deck::app::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.navigation.tap_zones = Some(true);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::media::Rgb;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Where the cards come from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Path of the JSON card manifest.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest: Option<PathBuf>,

    /// Image folder, resolved against the manifest's folder when relative.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cards_dir: Option<PathBuf>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            manifest: Some(PathBuf::from(DEFAULT_MANIFEST)),
            cards_dir: Some(PathBuf::from(DEFAULT_CARDS_DIR)),
        }
    }
}

/// How cards and the background are drawn.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Card width in logical pixels.
    #[serde(default = "default_card_width", skip_serializing_if = "Option::is_none")]
    pub card_width: Option<f32>,

    /// `#rrggbb` background used when sampling fails.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_background: Option<String>,

    /// Fade the sampled colour into white instead of a flat fill.
    #[serde(default = "default_gradient", skip_serializing_if = "Option::is_none")]
    pub gradient: Option<bool>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            card_width: default_card_width(),
            fallback_background: Some(DEFAULT_FALLBACK_BACKGROUND.to_string()),
            gradient: default_gradient(),
        }
    }
}

/// Input and loading behaviour.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavigationConfig {
    /// Navigate on a plain tap on the left/right half of the viewport.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tap_zones: Option<bool>,

    /// Decode neighbouring cards ahead of time.
    #[serde(default = "default_prefetch", skip_serializing_if = "Option::is_none")]
    pub prefetch: Option<bool>,

    /// Decoded cards kept in memory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_cards: Option<usize>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            tap_zones: Some(DEFAULT_TAP_ZONES),
            prefetch: default_prefetch(),
            cache_cards: Some(DEFAULT_CACHE_CARDS),
        }
    }
}

/// Full configuration, one struct per `settings.toml` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub gallery: GalleryConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
}

impl Config {
    /// Manifest path, falling back to the default.
    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        self.gallery
            .manifest
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MANIFEST))
    }

    /// Card folder as configured (not yet resolved against the manifest).
    #[must_use]
    pub fn cards_dir(&self) -> PathBuf {
        self.gallery
            .cards_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CARDS_DIR))
    }

    /// Card width, with out-of-range or non-finite values replaced by the default.
    #[must_use]
    pub fn card_width(&self) -> f32 {
        match self.display.card_width {
            Some(width) if width.is_finite() && (MIN_CARD_WIDTH..=MAX_CARD_WIDTH).contains(&width) => {
                width
            }
            _ => DEFAULT_CARD_WIDTH,
        }
    }

    /// Neutral background, falling back to light gray when the value does not parse.
    #[must_use]
    pub fn fallback_background(&self) -> Rgb {
        self.display
            .fallback_background
            .as_deref()
            .and_then(Rgb::from_hex)
            .unwrap_or(Rgb::NEUTRAL_GRAY)
    }

    #[must_use]
    pub fn gradient(&self) -> bool {
        self.display.gradient.unwrap_or(DEFAULT_GRADIENT)
    }

    #[must_use]
    pub fn tap_zones(&self) -> bool {
        self.navigation.tap_zones.unwrap_or(DEFAULT_TAP_ZONES)
    }

    #[must_use]
    pub fn prefetch(&self) -> bool {
        self.navigation.prefetch.unwrap_or(DEFAULT_PREFETCH)
    }

    #[must_use]
    pub fn cache_cards(&self) -> usize {
        self.navigation
            .cache_cards
            .unwrap_or(DEFAULT_CACHE_CARDS)
            .clamp(MIN_CACHE_CARDS, MAX_CACHE_CARDS)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_card_width() -> Option<f32> {
    Some(DEFAULT_CARD_WIDTH)
}

fn default_gradient() -> Option<bool> {
    Some(DEFAULT_GRADIENT)
}

fn default_prefetch() -> Option<bool> {
    Some(DEFAULT_PREFETCH)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
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
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "ignoring unreadable settings");
                    return (Config::default(), Some("config-load-error".to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Config`] if
/// it is not valid TOML for this schema.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
///
/// # Errors
///
/// See [`save_to_path`].
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
///
/// # Errors
///
/// See [`save_to_path`].
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
///
/// # Errors
///
/// Returns [`Error::Io`] on file system failure and [`Error::Config`] if
/// serialisation fails.
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
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            gallery: GalleryConfig {
                manifest: Some(PathBuf::from("/srv/deck/cards.json")),
                cards_dir: Some(PathBuf::from("images")),
            },
            display: DisplayConfig {
                card_width: Some(420.0),
                fallback_background: Some("#202020".to_string()),
                gradient: Some(false),
            },
            navigation: NavigationConfig {
                tap_zones: Some(true),
                prefetch: Some(false),
                cache_cards: Some(12),
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
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_warns_and_defaults_on_bad_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[display]\ncard_width = \"wide\"")
            .expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("config-load-error"));
    }

    #[test]
    fn missing_file_is_silent_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_sections_fill_defaults() {
        let config: Config = toml::from_str("[navigation]\ntap_zones = true\n").expect("parse");
        assert!(config.tap_zones());
        assert!(config.prefetch());
        assert_eq!(config.card_width(), DEFAULT_CARD_WIDTH);
        assert_eq!(config.manifest_path(), PathBuf::from(DEFAULT_MANIFEST));
    }

    #[test]
    fn invalid_values_fall_back() {
        let mut config = Config::default();
        config.display.card_width = Some(-5.0);
        config.display.fallback_background = Some("teal".to_string());
        config.navigation.cache_cards = Some(0);

        assert_eq!(config.card_width(), DEFAULT_CARD_WIDTH);
        assert_eq!(config.fallback_background(), Rgb::NEUTRAL_GRAY);
        assert_eq!(config.cache_cards(), MIN_CACHE_CARDS);
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }
}
