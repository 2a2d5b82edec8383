//! Theme resolution.
//!
//! Maps the user-selected [`ThemeMode`] and the current clock to the
//! [`ResolvedTheme`] that is actually rendered, and to the text shown in
//! the theme indicator. Everything here is pure; writing the result onto
//! the render surface lives in [`crate::surface`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    clock::ClockSnapshot,
    config::{DaylightWindow, LabelConfig},
};

/// CSS class marking an automatically derived theme.
pub const AUTO_CLASS: &str = "theme-auto";

/// The theme selection made by the user (or the host on their behalf).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ThemeMode {
    /// Follow the clock.
    #[default]
    Auto,
    /// Always day.
    Day,
    /// Always night.
    Night,
    /// A value the host sent that is none of the above, kept verbatim.
    ///
    /// Resolves like [`ThemeMode::Auto`] but does not take part in the
    /// hourly re-resolution, and its indicator shows the bare auto label.
    Other(String),
}

impl ThemeMode {
    /// Interprets a host-supplied mode string. Never fails.
    pub fn parse(value: &str) -> Self {
        match value {
            "auto" => ThemeMode::Auto,
            "day" => ThemeMode::Day,
            "night" => ThemeMode::Night,
            other => ThemeMode::Other(other.to_string()),
        }
    }

    /// The wire value of this mode.
    pub fn as_str(&self) -> &str {
        match self {
            ThemeMode::Auto => "auto",
            ThemeMode::Day => "day",
            ThemeMode::Night => "night",
            ThemeMode::Other(value) => value,
        }
    }

    /// True only for the explicit automatic mode.
    pub fn is_auto(&self) -> bool {
        matches!(self, ThemeMode::Auto)
    }
}

impl From<String> for ThemeMode {
    fn from(value: String) -> Self {
        ThemeMode::parse(&value)
    }
}

impl From<ThemeMode> for String {
    fn from(mode: ThemeMode) -> Self {
        mode.as_str().to_string()
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The concrete look that gets rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visual {
    /// Light theme.
    Day,
    /// Dark theme.
    Night,
}

impl Visual {
    /// CSS class token for this visual.
    pub fn class_name(self) -> &'static str {
        match self {
            Visual::Day => "theme-day",
            Visual::Night => "theme-night",
        }
    }

    /// The visual the daylight window assigns to `hour`.
    pub fn for_hour(hour: u32, window: &DaylightWindow) -> Self {
        if window.contains(hour) {
            Visual::Day
        } else {
            Visual::Night
        }
    }
}

/// Outcome of resolving a mode against the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedTheme {
    /// What gets rendered.
    pub visual: Visual,
    /// Whether `visual` came from the clock rather than an explicit choice.
    pub is_auto_derived: bool,
}

impl ResolvedTheme {
    /// The exact theme class tokens this resolution renders.
    pub fn class_tokens(&self) -> Vec<&'static str> {
        let mut tokens = vec![self.visual.class_name()];
        if self.is_auto_derived {
            tokens.push(AUTO_CLASS);
        }
        tokens
    }
}

/// Resolves `mode` against `clock`.
///
/// Explicit day and night win regardless of time. Anything else is derived
/// from the clock hour: day inside `window`, night outside it.
pub fn resolve(mode: &ThemeMode, clock: &ClockSnapshot, window: &DaylightWindow) -> ResolvedTheme {
    match mode {
        ThemeMode::Day => ResolvedTheme {
            visual: Visual::Day,
            is_auto_derived: false,
        },
        ThemeMode::Night => ResolvedTheme {
            visual: Visual::Night,
            is_auto_derived: false,
        },
        ThemeMode::Auto | ThemeMode::Other(_) => ResolvedTheme {
            visual: Visual::for_hour(clock.hour, window),
            is_auto_derived: true,
        },
    }
}

/// Indicator text for `mode` at `hour`.
///
/// Automatic mode shows the live classification, e.g. "Auto (Day)".
pub fn indicator_label(
    mode: &ThemeMode,
    hour: u32,
    window: &DaylightWindow,
    labels: &LabelConfig,
) -> String {
    match mode {
        ThemeMode::Auto => {
            let current = match Visual::for_hour(hour, window) {
                Visual::Day => &labels.day,
                Visual::Night => &labels.night,
            };
            format!("{} ({current})", labels.auto)
        }
        ThemeMode::Day => labels.day.clone(),
        ThemeMode::Night => labels.night.clone(),
        ThemeMode::Other(_) => labels.auto.clone(),
    }
}
