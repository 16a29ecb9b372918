//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and the exit-status
//! policy that support the main entry point.

use router_restart::router::RequestOutcome;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - unreadable or malformed config file.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Runtime error (exit code 2) - a sub-request timed out, was refused,
    /// or was rejected by the router.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Returns true when every issued sub-request succeeded.
pub fn all_succeeded(outcomes: &[RequestOutcome]) -> bool {
    outcomes.iter().all(RequestOutcome::is_success)
}

/// Maps sub-request outcomes to the process exit code.
///
/// The worst individual outcome wins: the process exits zero only when
/// every sub-request succeeded, even though a failed `Disconnect` does
/// not stop the following `Connect` from being attempted.
pub fn action_exit_code(outcomes: &[RequestOutcome]) -> std::process::ExitCode {
    if all_succeeded(outcomes) {
        exit_code::SUCCESS
    } else {
        exit_code::runtime_error()
    }
}

/// Sets up the tracing subscriber for logging.
///
/// Verbosity maps 0 to warnings, 1-2 to info, 3 and above to debug.
/// Below verbosity 2 the output is bare status lines; above it,
/// timestamps and levels are included.
pub fn setup_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 | 2 => Level::INFO,
        _ => Level::DEBUG,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbosity >= 4);

    if verbosity < 2 {
        builder.without_time().with_level(false).init();
    } else {
        builder.init();
    }
}
