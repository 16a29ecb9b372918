//! Configuration layer for router-restart.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - JSON configuration file parsing ([`FileConfig`])
//! - Layered parameter resolution ([`PartialParams`], [`ResolvedParams`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Connection parameters (`host`, `port`, `username`, `password`) are
//! resolved per field with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **User config file** - The JSON file passed via `--config-file`
//! 3. **Personal config file** - `~/.router-restart.conf`, if it exists
//! 4. **Built-in defaults** - Hardcoded default values
//!
//! Each field is resolved independently: a source only contributes the
//! fields it defines, and a field set by a higher-priority source is never
//! overwritten by a lower one. No source has to be complete; the defaults
//! layer defines every field, so resolution always produces a full record.
//!
//! # Error Semantics
//!
//! A user-supplied config file that is missing, unreadable, or malformed is
//! a fatal error surfaced before any network call. A missing personal file
//! is silently ignored; a malformed personal file is warned about and
//! skipped (it is optional, so it never aborts the run).

mod cli;
pub mod defaults;
mod error;
mod file;
mod resolve;

#[cfg(test)]
mod resolve_tests;

pub use cli::{Cli, Command};
pub use error::ConfigError;
pub use file::{FileConfig, default_config_template};
pub use resolve::{PartialParams, ResolvedParams, write_default_config};
