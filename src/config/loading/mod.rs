mod file_creation;
mod merging;

use std::{fs, path::Path};

use file_creation::create_default_config_file;
use merging::merge_two_toml_configs;
use toml::Value;
use tracing::{debug, info, instrument};

use super::Config;
use crate::{DaywallError, Result};

impl Config {
    /// Loads the configuration file at `path`.
    ///
    /// A missing file is created with commented-out defaults first. The
    /// file's tables are deep-merged over the default configuration, so a
    /// file only needs to name the values it changes.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or read
    /// - The TOML content is invalid
    /// - The merged configuration fails validation
    #[instrument]
    pub fn load(path: &Path) -> Result<Config> {
        if !path.exists() {
            info!("Creating default config file at {}", path.display());
            create_default_config_file(path)?;
        }

        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content).map_err(|e| match e {
            DaywallError::TomlParseError { details, .. } => {
                DaywallError::toml_parse(details, Some(path))
            }
            other => other,
        })?;

        debug!(?config, "Configuration loaded");
        Ok(config)
    }

    /// Parses TOML text merged over the defaults and validates the result.
    ///
    /// # Errors
    /// Returns an error if the TOML is invalid or fails validation
    pub fn from_toml_str(content: &str) -> Result<Config> {
        let overlay: Value =
            toml::from_str(content).map_err(|e| DaywallError::toml_parse(e, None))?;
        let defaults = Value::try_from(Config::default())
            .map_err(|e| DaywallError::validation("defaults", e))?;

        let config: Config = merge_two_toml_configs(defaults, overlay)
            .try_into()
            .map_err(|e| DaywallError::validation("config parsing", e))?;

        config.validate()?;
        Ok(config)
    }

    /// Checks cross-field constraints serde cannot express.
    ///
    /// # Errors
    /// Returns `ConfigValidation` naming the offending section
    pub fn validate(&self) -> Result<()> {
        self.wallpaper.validate()
    }
}
