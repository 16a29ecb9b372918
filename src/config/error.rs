//! Error types for configuration parsing and resolution.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
///
/// Every variant names the offending file so the single error line the
/// user sees is actionable on its own.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the configuration file as JSON.
    #[error("Failed to parse config file '{}': {source}", path.display())]
    JsonParse {
        /// Path to the config file
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// The file parsed as JSON but the top level is not an object.
    #[error("Config file '{}' must contain a JSON object", path.display())]
    NotAnObject {
        /// Path to the config file
        path: PathBuf,
    },

    /// A recognized key holds a value of the wrong type.
    #[error("Invalid value for '{key}' in config file '{}': expected a string", path.display())]
    InvalidValue {
        /// Path to the config file
        path: PathBuf,
        /// The offending key as written in the file
        key: String,
    },

    /// The port value is not an integer in `0..=65535`.
    #[error("Invalid port '{value}' in config file '{}': expected an integer in 0..=65535", path.display())]
    InvalidPort {
        /// Path to the config file
        path: PathBuf,
        /// The offending value, rendered as JSON
        value: String,
    },

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
