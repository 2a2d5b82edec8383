use std::{fmt, io, path::Path, result};

use thiserror::Error;

/// Error types for the Daywall application.
///
/// The wallpaper state machine itself never fails; these errors only
/// surface at the edges: loading configuration, decoding host events and
/// setting up logging.
#[derive(Error, Debug)]
pub enum DaywallError {
    /// Configuration validation error
    #[error("configuration validation failed for '{component}': {details}")]
    ConfigValidation {
        /// Component that failed validation
        component: String,
        /// Validation error details
        details: String,
    },

    /// Standard I/O operation error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// TOML parsing error with location context
    #[error("failed to parse TOML at '{location}': {details}")]
    TomlParseError {
        /// Location of TOML being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },

    /// A host property event could not be decoded
    #[error("malformed property event: {details}")]
    EventParse {
        /// Decoder error details
        details: String,
    },
}

/// A specialized `Result` type for Daywall operations.
pub type Result<T> = result::Result<T, DaywallError>;

impl DaywallError {
    /// Creates a TOML parsing error with optional file path context.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying parsing error
    /// * `path` - Optional path to the file that failed to parse
    pub fn toml_parse(error: impl fmt::Display, path: Option<&Path>) -> Self {
        let location = match path {
            Some(p) => {
                let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
                clean_path.to_string_lossy().to_string()
            }
            None => "string".to_string(),
        };

        DaywallError::TomlParseError {
            location,
            details: error.to_string(),
        }
    }

    /// Creates a validation error for the named config component.
    pub fn validation(component: &str, details: impl fmt::Display) -> Self {
        DaywallError::ConfigValidation {
            component: component.to_string(),
            details: details.to_string(),
        }
    }
}
