//! Layered parameter resolution.
//!
//! This module merges the four configuration sources into the effective
//! connection parameters used by the rest of the application. Merging is
//! an explicit field-by-field fold over a fixed schema: each layer is a
//! [`PartialParams`] record, and for every field the first layer that
//! defines a value wins.

use std::fmt;
use std::path::{Path, PathBuf};

use super::cli::Cli;
use super::defaults;
use super::error::ConfigError;
use super::file::FileConfig;

/// One partial layer of connection parameters.
///
/// A layer only contributes the fields it defines; unset fields are
/// filled by lower-priority layers during resolution.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PartialParams {
    /// Router host, if defined by this layer
    pub host: Option<String>,

    /// Administration port, if defined by this layer
    pub port: Option<u16>,

    /// Administrator username, if defined by this layer
    pub username: Option<String>,

    /// Administrator password, if defined by this layer
    pub password: Option<String>,
}

impl PartialParams {
    /// Field-by-field merge: `self` wins wherever it defines a value,
    /// `lower` fills the rest.
    #[must_use]
    pub fn or(self, lower: Self) -> Self {
        Self {
            host: self.host.or(lower.host),
            port: self.port.or(lower.port),
            username: self.username.or(lower.username),
            password: self.password.or(lower.password),
        }
    }
}

/// Fully resolved connection parameters.
///
/// Every field is guaranteed to be set: the defaults layer defines all
/// four fields, so resolution is total. The record is immutable once
/// produced; the orchestrator only reads from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedParams {
    /// Router host
    pub host: String,

    /// Administration port
    pub port: u16,

    /// Administrator username
    pub username: String,

    /// Administrator password
    pub password: String,
}

impl fmt::Display for ResolvedParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Params {{ host: {}, port: {}, username: {} }}",
            self.host, self.port, self.username,
        )
    }
}

impl ResolvedParams {
    /// Merges an ordered list of layers, highest priority first, and
    /// fills any field no layer defined with the built-in default.
    #[must_use]
    pub fn resolve(layers: impl IntoIterator<Item = PartialParams>) -> Self {
        let merged = layers
            .into_iter()
            .fold(PartialParams::default(), PartialParams::or);

        Self {
            host: merged.host.unwrap_or_else(|| defaults::HOST.to_owned()),
            port: merged.port.unwrap_or(defaults::PORT),
            username: merged
                .username
                .unwrap_or_else(|| defaults::USERNAME.to_owned()),
            password: merged
                .password
                .unwrap_or_else(|| defaults::PASSWORD.to_owned()),
        }
    }

    /// Loads and resolves configuration from the CLI and both optional
    /// config files.
    ///
    /// # Errors
    ///
    /// Returns an error if the user-supplied config file cannot be read
    /// or parsed. The personal file never produces an error here: a
    /// missing one is ignored and a malformed one is warned about and
    /// skipped.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        Self::load_with_personal(cli, personal_config_path())
    }

    /// Like [`ResolvedParams::load`], with an explicit personal-file path
    /// (useful for testing).
    pub fn load_with_personal(
        cli: &Cli,
        personal: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let mut layers = vec![cli.partial()];

        if let Some(ref path) = cli.config_file {
            layers.push(FileConfig::load(path)?.into());
        }

        if let Some(partial) = personal.as_deref().and_then(load_personal_config) {
            layers.push(partial);
        }

        Ok(Self::resolve(layers))
    }
}

/// Path of the optional personal config file, `~/.router-restart.conf`.
fn personal_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(defaults::PERSONAL_CONFIG_FILENAME))
}

/// Loads the personal config file, if it exists.
///
/// The personal file is optional, so it is never fatal: a missing file is
/// silently ignored and a malformed one is skipped with a warning.
fn load_personal_config(path: &Path) -> Option<PartialParams> {
    if !path.is_file() {
        return None;
    }

    match FileConfig::load(path) {
        Ok(file) => Some(file.into()),
        Err(e) => {
            tracing::warn!("Ignoring personal config file: {e}");
            None
        }
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::file::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
