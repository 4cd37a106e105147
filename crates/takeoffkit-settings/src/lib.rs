//! TakeoffKit Settings Crate
//!
//! Handles application configuration: the color to category table, per-tool
//! default colors, interaction tolerances and the initial slope presets.

pub mod config;
pub mod error;

pub use config::{CanvasSettings, CategoryMapping, CategorySettings, Config, SlopeSettings, ToolColors};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
