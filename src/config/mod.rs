// SPDX-License-Identifier: MPL-2.0
//! This module handles configuration, including loading and saving user
//! preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[toast]` - Toast display and fade durations
//! - `[confirm]` - Default dialog kind and re-ask policy
//!
//! # Path Resolution
//!
//! See [`paths`]: explicit override, `--config-dir`, `FEEDBACK_KIT_CONFIG_DIR`,
//! then the platform config directory.
//!
//! # Examples
//!
//! ```no_run
//! use feedback_kit::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.toast.display_ms = Some(5000);
//!
//! // Save the modified configuration
//! config::save_with_override(&config, None).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::ui::dialogs::{ConfirmKind, ReaskPolicy};
use crate::ui::notifications::ToastTiming;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "id").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Toast lifecycle settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToastConfig {
    /// Time a toast stays visible before fading (milliseconds).
    #[serde(default = "default_display_ms", skip_serializing_if = "Option::is_none")]
    pub display_ms: Option<u64>,

    /// Fade window before a hidden toast is removed (milliseconds).
    #[serde(default = "default_fade_ms", skip_serializing_if = "Option::is_none")]
    pub fade_ms: Option<u64>,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            display_ms: default_display_ms(),
            fade_ms: default_fade_ms(),
        }
    }
}

impl ToastConfig {
    /// Converts the section into store timings, clamping out-of-range values.
    #[must_use]
    pub fn timing(&self) -> ToastTiming {
        let display = self
            .display_ms
            .unwrap_or(DEFAULT_TOAST_DISPLAY_MS)
            .clamp(MIN_TOAST_DISPLAY_MS, MAX_TOAST_DISPLAY_MS);
        let fade = self
            .fade_ms
            .unwrap_or(DEFAULT_TOAST_FADE_MS)
            .clamp(MIN_TOAST_FADE_MS, MAX_TOAST_FADE_MS);

        ToastTiming {
            display: Duration::from_millis(display),
            fade: Duration::from_millis(fade),
        }
    }
}

/// Confirm dialog settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ConfirmConfig {
    /// Kind used when a request does not name one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_kind: Option<ConfirmKind>,

    /// Behavior when a request arrives while the dialog is open.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reask: Option<ReaskPolicy>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub toast: ToastConfig,

    #[serde(default)]
    pub confirm: ConfirmConfig,
}

fn default_display_ms() -> Option<u64> {
    Some(DEFAULT_TOAST_DISPLAY_MS)
}

fn default_fade_ms() -> Option<u64> {
    Some(DEFAULT_TOAST_FADE_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
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
/// the default config with the i18n key of a warning to show the user.
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
                    tracing::warn!(
                        path = %path.display(),
                        "falling back to default settings: {err}"
                    );
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

/// Saves the configuration to a custom directory, or to the resolved config
/// directory when `base_dir` is `None`.
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
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("id".to_string()),
            },
            toast: ToastConfig {
                display_ms: Some(4000),
                fade_ms: Some(250),
            },
            confirm: ConfirmConfig {
                default_kind: Some(ConfirmKind::Info),
                reask: Some(ReaskPolicy::Queue),
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

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_warns_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[toast]\ndisplay_ms = \"soon\"")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: Config = toml::from_str("[general]\nlanguage = \"id\"\n").unwrap();
        assert_eq!(config.toast, ToastConfig::default());
        assert_eq!(config.confirm, ConfirmConfig::default());
        assert_eq!(config.general.language.as_deref(), Some("id"));
    }

    #[test]
    fn confirm_section_parses_kebab_case() {
        let config: Config =
            toml::from_str("[confirm]\ndefault_kind = \"info\"\nreask = \"queue\"\n").unwrap();
        assert_eq!(config.confirm.default_kind, Some(ConfirmKind::Info));
        assert_eq!(config.confirm.reask, Some(ReaskPolicy::Queue));
    }

    #[test]
    fn default_timing_is_three_seconds_then_half_a_second() {
        let timing = ToastConfig::default().timing();
        assert_eq!(timing.display, Duration::from_millis(3000));
        assert_eq!(timing.fade, Duration::from_millis(500));
    }

    #[test]
    fn timing_is_clamped() {
        let toast = ToastConfig {
            display_ms: Some(10),
            fade_ms: Some(1_000_000),
        };
        let timing = toast.timing();
        assert_eq!(timing.display, Duration::from_millis(MIN_TOAST_DISPLAY_MS));
        assert_eq!(timing.fade, Duration::from_millis(MAX_TOAST_FADE_MS));
    }

    #[test]
    fn save_with_override_writes_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        save_with_override(&Config::default(), Some(temp_dir.path().to_path_buf()))
            .expect("save should succeed");
        assert!(temp_dir.path().join(CONFIG_FILE).exists());
    }
}
