//! JSON configuration file parsing.
//!
//! A config file is a JSON object with any subset of the keys `host`,
//! `port`, `username` and `password`. Keys are matched case-insensitively
//! and unrecognized keys are ignored, so the same file format works for
//! both the user-supplied file and the personal `~/.router-restart.conf`.

use std::path::Path;

use serde_json::Value;

use super::ConfigError;
use super::resolve::PartialParams;

/// Connection parameters read from one configuration file.
///
/// All fields are optional to allow partial configuration that is merged
/// with the other resolution layers.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FileConfig {
    /// Router host, if defined
    pub host: Option<String>,

    /// Administration port, if defined
    pub port: Option<u16>,

    /// Administrator username, if defined
    pub username: Option<String>,

    /// Administrator password, if defined
    pub password: Option<String>,
}

impl FileConfig {
    /// Loads configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(path, &content)
    }

    /// Parses configuration from a JSON string.
    ///
    /// The path is only used for error context.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not a JSON object, or a
    /// recognized key holds a value of the wrong type.
    pub fn parse(path: &Path, content: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(content).map_err(|e| ConfigError::JsonParse {
            path: path.to_path_buf(),
            source: e,
        })?;

        let Value::Object(entries) = value else {
            return Err(ConfigError::NotAnObject {
                path: path.to_path_buf(),
            });
        };

        let mut config = Self::default();

        for (key, value) in &entries {
            if key.eq_ignore_ascii_case("host") {
                config.host = Some(string_value(path, key, value)?);
            } else if key.eq_ignore_ascii_case("port") {
                config.port = Some(port_value(path, value)?);
            } else if key.eq_ignore_ascii_case("username") {
                config.username = Some(string_value(path, key, value)?);
            } else if key.eq_ignore_ascii_case("password") {
                config.password = Some(string_value(path, key, value)?);
            }
        }

        Ok(config)
    }
}

impl From<FileConfig> for PartialParams {
    fn from(file: FileConfig) -> Self {
        Self {
            host: file.host,
            port: file.port,
            username: file.username,
            password: file.password,
        }
    }
}

fn string_value(path: &Path, key: &str, value: &Value) -> Result<String, ConfigError> {
    value
        .as_str()
        .map(ToOwned::to_owned)
        .ok_or_else(|| ConfigError::InvalidValue {
            path: path.to_path_buf(),
            key: key.to_string(),
        })
}

/// Coerces a port value to `u16`.
///
/// Accepts a JSON integer or a string holding one; anything else is a
/// configuration error rather than a silently-dropped field.
fn port_value(path: &Path, value: &Value) -> Result<u16, ConfigError> {
    let port = match value {
        Value::Number(n) => n.as_u64().and_then(|n| u16::try_from(n).ok()),
        Value::String(s) => s.trim().parse::<u16>().ok(),
        _ => None,
    };

    port.ok_or_else(|| ConfigError::InvalidPort {
        path: path.to_path_buf(),
        value: value.to_string(),
    })
}

/// Generates a default configuration file.
#[must_use]
pub fn default_config_template() -> String {
    r#"{
    "host": "192.168.0.1",
    "port": 80,
    "username": "admin",
    "password": "admin"
}
"#
    .to_string()
}
