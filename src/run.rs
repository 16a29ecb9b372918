//! Application execution logic.
//!
//! Builds the production HTTP client and drives the orchestrator for
//! one invocation.

use thiserror::Error;

use router_restart::config::ResolvedParams;
use router_restart::router::{ActionOrchestrator, ReqwestClient, RequestOutcome};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to build the HTTP client.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

/// Executes the requested action and returns one outcome per issued
/// sub-request.
///
/// Transport and HTTP failures are not errors at this level: they are
/// classified into the returned outcomes, each already reported with its
/// own status line.
///
/// # Errors
///
/// Returns an error only if the HTTP client cannot be built.
pub async fn execute(
    params: ResolvedParams,
    reboot: bool,
    dry_run: bool,
) -> Result<Vec<RequestOutcome>, RunError> {
    if dry_run {
        tracing::info!("Dry-run mode enabled - requests will be simulated, not sent");
    }

    let client = ReqwestClient::new().map_err(RunError::ClientBuild)?;
    let orchestrator = ActionOrchestrator::new(client, params).with_dry_run(dry_run);

    Ok(orchestrator.run(reboot).await)
}
