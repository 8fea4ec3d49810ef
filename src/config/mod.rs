// SPDX-License-Identifier: MPL-2.0
//! This module handles the toast configuration: the settings bundle read by
//! the lifecycle manager and the overlay, its defaults, and loading/saving
//! it as a `toasts.toml` file.
//!
//! # Configuration Sections
//!
//! - `[behavior]` - Durations and the visible-count limit
//! - `[appearance]` - Colors, paddings, shadow and screen position
//!
//! # Resolution
//!
//! Every parameter resolves through three tiers: an explicit call-site
//! argument (only the toast duration has one), then the installed
//! [`Config`], then the constants in [`defaults`]. The `Config` accessors
//! perform the last two steps.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_TOAST_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config::{self, SharedConfig};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//! config.behavior.max_toasts = Some(3);
//!
//! // Install it for the manager and the overlay
//! let shared = SharedConfig::new(config.clone());
//! assert_eq!(shared.current().max_toasts(), 3);
//!
//! config::save(&config).expect("Failed to save config");
//! ```

mod color;
pub mod defaults;
mod shared;

pub use color::{HexColor, ParseHexColorError};
pub use defaults::*;
pub use shared::SharedConfig;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "toasts.toml";
const APP_NAME: &str = "IcedToast";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_TOAST_CONFIG_DIR";

// =============================================================================
// Enums
// =============================================================================

/// Where the toast stack is anchored on screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    #[default]
    Top,
    Bottom,
    Center,
}

// =============================================================================
// Section Structs
// =============================================================================

/// Lifecycle settings read by the manager.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Time a toast stays visible when `show` gets no explicit duration (seconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_duration_secs: Option<f64>,

    /// Maximum number of toasts visible at once.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_toasts: Option<usize>,

    /// Duration hint for insertion/removal animations (seconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_duration_secs: Option<f64>,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            default_duration_secs: Some(DEFAULT_DURATION_SECS),
            max_toasts: Some(DEFAULT_MAX_TOASTS),
            animation_duration_secs: Some(DEFAULT_ANIMATION_DURATION_SECS),
        }
    }
}

/// Visual settings read by the overlay.
///
/// Colors left unset follow the active iced theme.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Tint of the dismiss button.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<HexColor>,

    /// Fill of the toast card.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<HexColor>,

    /// Color of the message text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<HexColor>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_radius: Option<f32>,

    /// Shadow opacity (0.0 to 1.0).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_opacity: Option<f32>,

    /// Screen edge the stack is anchored to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<ToastPosition>,

    /// Gap between stacked toasts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_padding: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_padding: Option<f32>,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            primary_color: None,
            background_color: None,
            text_color: None,
            corner_radius: Some(DEFAULT_CORNER_RADIUS),
            shadow_radius: Some(DEFAULT_SHADOW_RADIUS),
            shadow_opacity: Some(DEFAULT_SHADOW_OPACITY),
            position: Some(ToastPosition::default()),
            spacing: Some(DEFAULT_SPACING),
            horizontal_padding: Some(DEFAULT_HORIZONTAL_PADDING),
            vertical_padding: Some(DEFAULT_VERTICAL_PADDING),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Toast configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Lifecycle settings.
    #[serde(default)]
    pub behavior: BehaviorConfig,

    /// Visual settings.
    #[serde(default)]
    pub appearance: AppearanceConfig,
}

impl Config {
    /// Returns a config with every field unset, so every accessor yields
    /// the built-in default.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            behavior: BehaviorConfig {
                default_duration_secs: None,
                max_toasts: None,
                animation_duration_secs: None,
            },
            appearance: AppearanceConfig {
                primary_color: None,
                background_color: None,
                text_color: None,
                corner_radius: None,
                shadow_radius: None,
                shadow_opacity: None,
                position: None,
                spacing: None,
                horizontal_padding: None,
                vertical_padding: None,
            },
        }
    }

    /// Resolves the duration (seconds) for a toast.
    ///
    /// `requested` is the call-site argument; it wins over the config.
    #[must_use]
    pub fn resolve_duration_secs(&self, requested: Option<f64>) -> f64 {
        requested.unwrap_or_else(|| self.default_duration_secs())
    }

    #[must_use]
    pub fn default_duration_secs(&self) -> f64 {
        self.behavior
            .default_duration_secs
            .unwrap_or(DEFAULT_DURATION_SECS)
    }

    /// Configured maximum visible count, as written.
    ///
    /// The manager never enforces less than [`MIN_MAX_TOASTS`].
    #[must_use]
    pub fn max_toasts(&self) -> usize {
        self.behavior.max_toasts.unwrap_or(DEFAULT_MAX_TOASTS)
    }

    #[must_use]
    pub fn animation_duration_secs(&self) -> f64 {
        self.behavior
            .animation_duration_secs
            .unwrap_or(DEFAULT_ANIMATION_DURATION_SECS)
    }

    /// Animation hint as a `Duration`; invalid values collapse to zero.
    #[must_use]
    pub fn animation_duration(&self) -> Duration {
        Duration::try_from_secs_f64(self.animation_duration_secs()).unwrap_or(Duration::ZERO)
    }

    #[must_use]
    pub fn primary_color(&self) -> Option<HexColor> {
        self.appearance.primary_color
    }

    #[must_use]
    pub fn background_color(&self) -> Option<HexColor> {
        self.appearance.background_color
    }

    #[must_use]
    pub fn text_color(&self) -> Option<HexColor> {
        self.appearance.text_color
    }

    #[must_use]
    pub fn corner_radius(&self) -> f32 {
        self.appearance
            .corner_radius
            .unwrap_or(DEFAULT_CORNER_RADIUS)
    }

    #[must_use]
    pub fn shadow_radius(&self) -> f32 {
        self.appearance
            .shadow_radius
            .unwrap_or(DEFAULT_SHADOW_RADIUS)
    }

    #[must_use]
    pub fn shadow_opacity(&self) -> f32 {
        self.appearance
            .shadow_opacity
            .unwrap_or(DEFAULT_SHADOW_OPACITY)
    }

    #[must_use]
    pub fn position(&self) -> ToastPosition {
        self.appearance.position.unwrap_or_default()
    }

    #[must_use]
    pub fn spacing(&self) -> f32 {
        self.appearance.spacing.unwrap_or(DEFAULT_SPACING)
    }

    #[must_use]
    pub fn horizontal_padding(&self) -> f32 {
        self.appearance
            .horizontal_padding
            .unwrap_or(DEFAULT_HORIZONTAL_PADDING)
    }

    #[must_use]
    pub fn vertical_padding(&self) -> f32 {
        self.appearance
            .vertical_padding
            .unwrap_or(DEFAULT_VERTICAL_PADDING)
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory: explicit override, then environment, then platform default.
fn get_config_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    if base_dir.is_some() {
        return base_dir;
    }
    if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    get_config_dir_with_override(base_dir).map(|mut path| {
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
/// default config with a warning message explaining what went wrong.
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
                    tracing::warn!(path = %path.display(), %err, "falling back to default toast config");
                    return (
                        Config::default(),
                        Some(format!("failed to load {}: {err}", path.display())),
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
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
