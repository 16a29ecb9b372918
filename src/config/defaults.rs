//! Default values for connection parameters.
//!
//! Centralized constants to avoid magic values scattered across the codebase.
//! These match the factory configuration of the supported TP-Link devices.

/// Default router host.
pub const HOST: &str = "192.168.0.1";

/// Default administration interface port.
pub const PORT: u16 = 80;

/// Default administrator username.
pub const USERNAME: &str = "admin";

/// Default administrator password.
pub const PASSWORD: &str = "admin";

/// File name of the optional personal config file in the home directory.
pub const PERSONAL_CONFIG_FILENAME: &str = ".router-restart.conf";
