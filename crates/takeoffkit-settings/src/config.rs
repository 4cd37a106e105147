//! Configuration and settings management for TakeoffKit
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - Canvas settings (hit tolerances, zoom step, text sizing)
//! - Category table (which color feeds which aggregation bucket)
//! - Tool colors (default color per drawing tool)
//! - Slope presets (roof multipliers offered before any are computed)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use takeoffkit_core::constants;
use takeoffkit_core::Category;

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};

/// Canvas interaction settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// Edge hit tolerance in view pixels
    pub hit_tolerance_px: f64,
    /// Half side of a handle's square hit region in view pixels
    pub handle_half_size_px: f64,
    /// Edge band around the normalized ellipse boundary
    pub ellipse_edge_band: f64,
    /// Zoom multiplier per step
    pub zoom_step: f64,
    /// Text size at scale 1.0
    pub text_font_px: f64,
    /// Smallest on-screen text size
    pub min_text_font_px: f64,
    /// Radius of the circle created by an ellipse click
    pub ellipse_click_radius_px: f64,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            hit_tolerance_px: constants::HIT_TOLERANCE_PX,
            handle_half_size_px: constants::HANDLE_HALF_SIZE_PX,
            ellipse_edge_band: constants::ELLIPSE_EDGE_BAND,
            zoom_step: constants::ZOOM_STEP,
            text_font_px: constants::TEXT_FONT_PX,
            min_text_font_px: constants::MIN_TEXT_FONT_PX,
            ellipse_click_radius_px: constants::ELLIPSE_CLICK_RADIUS_PX,
        }
    }
}

/// One row of the color to category table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMapping {
    /// Shape color key (case-insensitive)
    pub color: String,
    /// Aggregation bucket for shapes of that color
    pub category: Category,
}

impl CategoryMapping {
    pub fn new(color: impl Into<String>, category: Category) -> Self {
        Self {
            color: color.into(),
            category,
        }
    }
}

/// Color to category table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategorySettings {
    pub mappings: Vec<CategoryMapping>,
}

impl Default for CategorySettings {
    fn default() -> Self {
        Self {
            mappings: vec![
                CategoryMapping::new("red", Category::Wall),
                CategoryMapping::new("blue", Category::Roof),
                CategoryMapping::new("green", Category::Bshita),
                CategoryMapping::new("orange", Category::Koya),
                CategoryMapping::new("cyan", Category::Window),
                CategoryMapping::new("magenta", Category::Door),
            ],
        }
    }
}

impl CategorySettings {
    /// Looks up the category of a color; unknown colors are uncategorized.
    pub fn category_of(&self, color: &str) -> Option<Category> {
        let key = normalize_color(color);
        self.mappings
            .iter()
            .find(|m| normalize_color(&m.color) == key)
            .map(|m| m.category)
    }
}

/// Default color per drawing tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolColors {
    pub rect: String,
    pub ellipse: String,
    pub line: String,
    pub triangle: String,
    pub text: String,
    /// Neutral color for shapes inserted without one
    pub neutral: String,
}

impl Default for ToolColors {
    fn default() -> Self {
        Self {
            rect: "red".to_string(),
            ellipse: "blue".to_string(),
            line: "green".to_string(),
            triangle: "orange".to_string(),
            text: "black".to_string(),
            neutral: constants::DEFAULT_COLOR.to_string(),
        }
    }
}

/// Roof slope presets
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SlopeSettings {
    /// Multipliers offered before any have been computed
    pub presets: Vec<f64>,
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Canvas interaction settings
    pub canvas: CanvasSettings,
    /// Color to category table
    pub categories: CategorySettings,
    /// Default tool colors
    pub tools: ToolColors,
    /// Slope presets
    pub slope: SlopeSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config location: `<config_dir>/takeoffkit/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string())
        })?;
        Ok(dir.join("takeoffkit").join("config.toml"))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let mut config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.slope.presets = normalize_presets(&config.slope.presets);
        config.validate()?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load config from `path` if it exists, otherwise defaults.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| SettingsError::SaveError(e.to_string()))?;
            }
        }
        std::fs::write(path, content).map_err(|e| SettingsError::SaveError(e.to_string()))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let canvas = &self.canvas;
        let positive = [
            ("canvas.hit_tolerance_px", canvas.hit_tolerance_px),
            ("canvas.handle_half_size_px", canvas.handle_half_size_px),
            ("canvas.ellipse_edge_band", canvas.ellipse_edge_band),
            ("canvas.text_font_px", canvas.text_font_px),
            ("canvas.min_text_font_px", canvas.min_text_font_px),
            ("canvas.ellipse_click_radius_px", canvas.ellipse_click_radius_px),
        ];
        for (key, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(out_of_range(key, value));
            }
        }

        if !(canvas.zoom_step.is_finite() && canvas.zoom_step > 1.0) {
            return Err(out_of_range("canvas.zoom_step", canvas.zoom_step));
        }

        let mut seen: Vec<String> = Vec::new();
        for mapping in &self.categories.mappings {
            let key = normalize_color(&mapping.color);
            if seen.contains(&key) {
                return Err(ConfigError::DuplicateColor(mapping.color.clone()));
            }
            seen.push(key);
        }

        if let Some(bad) = self
            .slope
            .presets
            .iter()
            .find(|p| !(p.is_finite() && **p > 0.0))
        {
            return Err(out_of_range("slope.presets", *bad));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

fn out_of_range(key: &str, value: f64) -> ConfigError {
    ConfigError::ValueOutOfRange {
        key: key.to_string(),
        value: value.to_string(),
    }
}

/// Canonical form of a color key for comparisons.
pub fn normalize_color(color: &str) -> String {
    color.trim().to_lowercase()
}

/// Sorts ascending and drops duplicates.
pub fn normalize_presets(presets: &[f64]) -> Vec<f64> {
    let mut sorted: Vec<f64> = presets.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted.dedup();
    sorted
}
