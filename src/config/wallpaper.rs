use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{DaywallError, Result};

/// Settings for the wallpaper itself.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct WallpaperConfig {
    /// Theme mode before the host sends any `forcetheme` property
    /// ("auto", "day" or "night").
    #[serde(default = "default_initial_theme")]
    pub initial_theme: String,

    /// Accent color applied at startup, as "R G B". Unset leaves the
    /// custom color property untouched until the host pushes one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme_color: Option<String>,

    /// Tick periods.
    #[serde(default)]
    pub schedule: ScheduleConfig,

    /// Hours that count as daytime in automatic mode.
    #[serde(default)]
    pub daylight: DaylightWindow,

    /// Text shown in the indicator and date regions.
    #[serde(default)]
    pub labels: LabelConfig,

    /// Fixed page skeleton content.
    #[serde(default)]
    pub template: TemplateConfig,
}

impl Default for WallpaperConfig {
    fn default() -> Self {
        Self {
            initial_theme: default_initial_theme(),
            scheme_color: None,
            schedule: ScheduleConfig::default(),
            daylight: DaylightWindow::default(),
            labels: LabelConfig::default(),
            template: TemplateConfig::default(),
        }
    }
}

impl WallpaperConfig {
    /// Checks the daylight window and tick periods.
    ///
    /// # Errors
    /// Returns `ConfigValidation` naming the offending section
    pub fn validate(&self) -> Result<()> {
        let daylight = &self.daylight;
        if daylight.end_hour > 24 || daylight.start_hour >= daylight.end_hour {
            return Err(DaywallError::validation(
                "wallpaper.daylight",
                format!(
                    "expected 0 <= start_hour < end_hour <= 24, got {}..{}",
                    daylight.start_hour, daylight.end_hour
                ),
            ));
        }

        let schedule = &self.schedule;
        if schedule.clock_interval_ms == 0 || schedule.indicator_interval_ms == 0 {
            return Err(DaywallError::validation(
                "wallpaper.schedule",
                "tick intervals must be greater than zero",
            ));
        }

        Ok(())
    }
}

fn default_initial_theme() -> String {
    "auto".to_string()
}

/// Periods of the two recurring tasks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ScheduleConfig {
    /// Milliseconds between time/date refreshes.
    #[serde(default = "default_clock_interval")]
    pub clock_interval_ms: u64,

    /// Milliseconds between indicator refreshes.
    #[serde(default = "default_indicator_interval")]
    pub indicator_interval_ms: u64,
}

impl ScheduleConfig {
    /// Clock tick period.
    pub fn clock_interval(&self) -> Duration {
        Duration::from_millis(self.clock_interval_ms)
    }

    /// Indicator tick period.
    pub fn indicator_interval(&self) -> Duration {
        Duration::from_millis(self.indicator_interval_ms)
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            clock_interval_ms: default_clock_interval(),
            indicator_interval_ms: default_indicator_interval(),
        }
    }
}

fn default_clock_interval() -> u64 {
    1000
}

fn default_indicator_interval() -> u64 {
    5000
}

/// Half-open range of hours `[start_hour, end_hour)` treated as daytime.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DaylightWindow {
    /// First daytime hour.
    #[serde(default = "default_start_hour")]
    pub start_hour: u32,

    /// First night hour after the day.
    #[serde(default = "default_end_hour")]
    pub end_hour: u32,
}

impl DaylightWindow {
    /// Whether `hour` falls in the daytime range.
    pub fn contains(&self, hour: u32) -> bool {
        (self.start_hour..self.end_hour).contains(&hour)
    }
}

impl Default for DaylightWindow {
    fn default() -> Self {
        Self {
            start_hour: default_start_hour(),
            end_hour: default_end_hour(),
        }
    }
}

fn default_start_hour() -> u32 {
    6
}

fn default_end_hour() -> u32 {
    18
}

/// Display labels.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct LabelConfig {
    /// Indicator text for automatic mode.
    #[serde(default = "default_auto_label")]
    pub auto: String,

    /// Indicator text for the day theme.
    #[serde(default = "default_day_label")]
    pub day: String,

    /// Indicator text for the night theme.
    #[serde(default = "default_night_label")]
    pub night: String,

    /// Weekday names, Sunday first.
    #[serde(default)]
    pub weekdays: WeekdayLabels,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            auto: default_auto_label(),
            day: default_day_label(),
            night: default_night_label(),
            weekdays: WeekdayLabels::default(),
        }
    }
}

fn default_auto_label() -> String {
    "Auto".to_string()
}

fn default_day_label() -> String {
    "Day".to_string()
}

fn default_night_label() -> String {
    "Night".to_string()
}

/// Seven weekday names indexed by day-of-week, 0 = Sunday.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(transparent)]
pub struct WeekdayLabels(pub [String; 7]);

impl WeekdayLabels {
    /// Label for `weekday`; out-of-range indices wrap.
    pub fn label(&self, weekday: u32) -> &str {
        &self.0[weekday as usize % 7]
    }
}

impl Default for WeekdayLabels {
    fn default() -> Self {
        Self(
            ["星期日", "星期一", "星期二", "星期三", "星期四", "星期五", "星期六"]
                .map(String::from),
        )
    }
}

/// Content of the static page skeleton.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TemplateConfig {
    /// Text shown next to the branding icon.
    #[serde(default = "default_brand_text")]
    pub brand_text: String,

    /// Prefix shown before the theme indicator.
    #[serde(default = "default_indicator_prefix")]
    pub indicator_prefix: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            brand_text: default_brand_text(),
            indicator_prefix: default_indicator_prefix(),
        }
    }
}

fn default_brand_text() -> String {
    "GitHub".to_string()
}

fn default_indicator_prefix() -> String {
    "Theme: ".to_string()
}
