//! router-restart: Router WAN Reconnect & Reboot
//!
//! Entry point for the router-restart application.

use router_restart::config::{Cli, Command, ResolvedParams, write_default_config};
use std::process::ExitCode;

mod app;
mod run;

use app::{action_exit_code, exit_code, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // Handle init subcommand
    if let Some(Command::Init { output }) = &cli.command {
        return handle_init(output);
    }

    setup_tracing(cli.verbosity_level());

    // Resolve configuration; abort before any network call on failure
    let params = match ResolvedParams::load(&cli) {
        Ok(params) => params,
        Err(e) => {
            tracing::error!("Configuration error: {e}");
            return exit_code::CONFIG_ERROR;
        }
    };

    tracing::debug!("{params}");

    run_action(params, cli.reboot, cli.dry_run)
}

/// Handles the `init` subcommand.
fn handle_init(output: &std::path::Path) -> ExitCode {
    match write_default_config(output) {
        Ok(()) => {
            println!("Configuration template written to: {}", output.display());
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::CONFIG_ERROR
        }
    }
}

/// Runs the resolved action with the given parameters.
///
/// Excluded from coverage - requires async runtime.
#[cfg(not(tarpaulin_include))]
fn run_action(params: ResolvedParams, reboot: bool, dry_run: bool) -> ExitCode {
    let runtime = tokio::runtime::Runtime::new().expect("Failed to create Tokio runtime");

    match runtime.block_on(run::execute(params, reboot, dry_run)) {
        Ok(outcomes) => action_exit_code(&outcomes),
        Err(e) => {
            tracing::error!("Application error: {e}");
            exit_code::runtime_error()
        }
    }
}
