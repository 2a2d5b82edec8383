//! Configuration schema definitions and loading.
//!
//! Defines the complete configuration structure for Daywall: logging
//! settings plus everything the wallpaper needs to start (initial theme
//! mode, daylight window, tick periods, display labels). All configuration
//! is serializable to/from TOML and every field has a default, so an empty
//! file is a valid configuration.

mod general;
mod loading;
mod paths;
mod wallpaper;

pub use general::{GeneralConfig, LogLevel};
pub use paths::ConfigPaths;
pub use wallpaper::{
    DaylightWindow, LabelConfig, ScheduleConfig, TemplateConfig, WallpaperConfig, WeekdayLabels,
};

use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};

/// Main configuration structure for Daywall.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Wallpaper behaviour and display settings.
    #[serde(default)]
    pub wallpaper: WallpaperConfig,
}

impl Config {
    /// JSON schema describing the configuration file.
    pub fn schema() -> Schema {
        schema_for!(Config)
    }
}

#[cfg(test)]
mod tests;
