//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use super::resolve::PartialParams;

const LONG_ABOUT: &str = "\
Authorizes as the administrator on your router and attempts to restart it.

Currently supported devices are:
  * TP-Link
    - TL-WR841N
    - TL-WR941N
    - ... maybe all other TP-Link`s?";

const AFTER_HELP: &str = "\
Host, port, username and password values are resolved in this order:
  1. Command-line options
  2. CONF_FILE settings
  3. ~/.router-restart.conf settings
  4. Default internal values

Default settings internally set by this program are:
  --host 192.168.0.1
  --port 80
  --username admin
  --password admin";

/// router-restart: Router WAN Reconnect & Reboot
///
/// Authorizes as the administrator on your router and restarts its
/// WAN connection, or reboots the whole device.
#[derive(Debug, Parser)]
#[command(name = "router-restart")]
#[command(version, about, long_about = LONG_ABOUT, after_help = AFTER_HELP)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Host IP or host name of the router
    #[arg(short = 'o', long)]
    pub host: Option<String>,

    /// Port of the administration interface
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Administrator account name
    #[arg(short, long, value_name = "NAME")]
    pub username: Option<String>,

    /// Administrator account password
    #[arg(short = 'w', long, value_name = "PASS")]
    pub password: Option<String>,

    /// Options defined in this file are taken if not specified
    /// explicitly by command-line options
    #[arg(short, long = "config-file", value_name = "CONF_FILE")]
    pub config_file: Option<PathBuf>,

    /// Reboot the device instead of reconnecting
    #[arg(short, long)]
    pub reboot: bool,

    /// No action; simulate events only
    #[arg(short = 's', long = "simulate", visible_alias = "dry-run")]
    pub dry_run: bool,

    /// Increase the verbosity level (can be repeated)
    #[arg(short = 'v', action = ArgAction::Count, conflicts_with = "verbose")]
    pub verbosity: u8,

    /// Set the verbosity level directly
    #[arg(long, value_name = "VERBOSITY")]
    pub verbose: Option<u8>,
}

/// Subcommands for router-restart
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "router-restart.conf")]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// The effective verbosity, whichever of `-v`/`--verbose` was used.
    #[must_use]
    pub fn verbosity_level(&self) -> u8 {
        self.verbose.unwrap_or(self.verbosity)
    }

    /// The connection parameters this invocation defined explicitly.
    ///
    /// This is the highest-priority resolution layer; options the user
    /// did not pass stay unset so lower layers can fill them in.
    #[must_use]
    pub fn partial(&self) -> PartialParams {
        PartialParams {
            host: self.host.clone(),
            port: self.port,
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}
