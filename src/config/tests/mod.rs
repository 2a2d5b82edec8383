//! Unit tests for config module
//!
//! Tests defaults, TOML merging over defaults, validation and file loading.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

use std::fs;

use tempfile::TempDir;

use crate::{
    DaywallError,
    config::{Config, LogLevel, WallpaperConfig},
};

#[test]
fn config_default_values() {
    let config = Config::default();

    assert_eq!(config.general.log_level, LogLevel::Info);
    assert_eq!(config.wallpaper.initial_theme, "auto");
    assert_eq!(config.wallpaper.schedule.clock_interval_ms, 1000);
    assert_eq!(config.wallpaper.schedule.indicator_interval_ms, 5000);
    assert_eq!(config.wallpaper.daylight.start_hour, 6);
    assert_eq!(config.wallpaper.daylight.end_hour, 18);
    assert!(config.wallpaper.scheme_color.is_none());
}

#[test]
fn config_serialize_toml() {
    let toml_str = toml::to_string(&Config::default()).unwrap();

    assert!(toml_str.contains("[general]"));
    assert!(toml_str.contains("[wallpaper]"));
}

#[test]
fn config_empty_toml_is_default() {
    let config = Config::from_toml_str("").unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn partial_table_keeps_sibling_defaults() {
    let config = Config::from_toml_str(
        r#"
        [wallpaper.daylight]
        start_hour = 7

        [wallpaper.labels]
        day = "Sun"
        "#,
    )
    .unwrap();

    assert_eq!(config.wallpaper.daylight.start_hour, 7);
    assert_eq!(config.wallpaper.daylight.end_hour, 18);
    assert_eq!(config.wallpaper.labels.day, "Sun");
    assert_eq!(config.wallpaper.labels.night, "Night");
    assert_eq!(config.wallpaper.labels.weekdays.label(2), "星期二");
}

#[test]
fn log_level_parses_lowercase() {
    let config = Config::from_toml_str("[general]\nlog_level = \"debug\"").unwrap();

    assert_eq!(config.general.log_level, LogLevel::Debug);
    assert_eq!(config.general.log_level.to_string(), "debug");
}

#[test]
fn inverted_daylight_window_is_rejected() {
    let err = Config::from_toml_str("[wallpaper.daylight]\nstart_hour = 18\nend_hour = 6")
        .unwrap_err();

    match err {
        DaywallError::ConfigValidation { component, .. } => {
            assert_eq!(component, "wallpaper.daylight");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn zero_interval_is_rejected() {
    let err =
        Config::from_toml_str("[wallpaper.schedule]\nclock_interval_ms = 0").unwrap_err();

    assert!(matches!(err, DaywallError::ConfigValidation { .. }));
}

#[test]
fn wallpaper_section_validates_on_its_own() {
    let mut wallpaper = WallpaperConfig::default();
    assert!(wallpaper.validate().is_ok());

    wallpaper.daylight.end_hour = 25;
    let err = wallpaper.validate().unwrap_err();

    assert!(matches!(
        err,
        DaywallError::ConfigValidation { ref component, .. } if component == "wallpaper.daylight"
    ));
}

#[test]
fn invalid_toml_reports_parse_error() {
    let err = Config::from_toml_str("[wallpaper").unwrap_err();

    assert!(matches!(err, DaywallError::TomlParseError { .. }));
}

#[test]
fn load_creates_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested/config.toml");

    let config = Config::load(&path).unwrap();

    assert!(path.exists());
    assert_eq!(config, Config::default());
}

#[test]
fn load_reads_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[wallpaper]\ninitial_theme = \"night\"\nscheme_color = \"10 20 30\"\n",
    )
    .unwrap();

    let config = Config::load(&path).unwrap();

    assert_eq!(config.wallpaper.initial_theme, "night");
    assert_eq!(config.wallpaper.scheme_color.as_deref(), Some("10 20 30"));
}

#[test]
fn schema_names_wallpaper_section() {
    let schema = serde_json::to_string(&Config::schema()).unwrap();

    assert!(schema.contains("wallpaper"));
    assert!(schema.contains("daylight"));
}
