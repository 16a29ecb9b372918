//! Request sequencing and outcome classification.
//!
//! The orchestrator turns a high-level intent (reboot or reconnect) into
//! one or two sub-requests, issues them strictly in sequence, and reports
//! exactly one status line per sub-request. A failed sub-request never
//! aborts the remaining one: the supported devices need the full
//! disconnect/reconnect pair to refresh a WAN lease even when the
//! disconnect step reports an error page.

use crate::config::ResolvedParams;

use super::{Action, Credentials, RouterClient, TransportError};

/// Terminal classification of one issued sub-request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// The router accepted the request (2xx status).
    Success,
    /// The connection timed out before a status was received.
    TransportTimeout,
    /// The connection was refused or the host is unreachable.
    TransportRefused,
    /// The router responded with a non-2xx status.
    HttpError(http::StatusCode),
}

impl RequestOutcome {
    /// Returns true for [`RequestOutcome::Success`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Classifies a transport result, transport failures first.
    fn classify(result: Result<http::StatusCode, TransportError>) -> Self {
        match result {
            Err(TransportError::Timeout) => Self::TransportTimeout,
            Err(TransportError::Refused(_)) => Self::TransportRefused,
            Ok(status) if !status.is_success() => Self::HttpError(status),
            Ok(_) => Self::Success,
        }
    }
}

/// Issues the sub-requests for one logical action, in order.
///
/// Holds the resolved parameters read-only; nothing is mutated after
/// construction. In dry-run mode no network I/O happens and every
/// sub-request is treated as an HTTP 200.
#[derive(Debug)]
pub struct ActionOrchestrator<C> {
    client: C,
    params: ResolvedParams,
    dry_run: bool,
}

impl<C> ActionOrchestrator<C> {
    /// Creates an orchestrator over the given transport and parameters.
    #[must_use]
    pub const fn new(client: C, params: ResolvedParams) -> Self {
        Self {
            client,
            params,
            dry_run: false,
        }
    }

    /// Enables or disables dry-run mode.
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

impl<C: RouterClient> ActionOrchestrator<C> {
    /// Executes the requested logical action and returns one outcome per
    /// issued sub-request, in issue order.
    ///
    /// `reboot` issues a single [`Action::Reboot`]; otherwise
    /// [`Action::Disconnect`] and [`Action::Connect`] are both issued,
    /// regardless of how the first one went.
    pub async fn run(&self, reboot: bool) -> Vec<RequestOutcome> {
        let actions: &[Action] = if reboot {
            &[Action::Reboot]
        } else {
            &[Action::Disconnect, Action::Connect]
        };

        let mut outcomes = Vec::with_capacity(actions.len());
        for &action in actions {
            let outcome = self.issue(action).await;
            report(action, outcome);
            outcomes.push(outcome);
        }
        outcomes
    }

    /// Issues one sub-request and classifies its outcome.
    async fn issue(&self, action: Action) -> RequestOutcome {
        let url = action.url(&self.params.host, self.params.port);

        tracing::debug!("Host: {}", self.params.host);
        tracing::debug!("Port: {}", self.params.port);
        tracing::debug!("URL: {url}");
        tracing::debug!("Username: {}", self.params.username);
        tracing::debug!("Password: {}", self.params.password);

        tracing::info!("Trying to connect to the router...");

        if self.dry_run {
            return RequestOutcome::Success;
        }

        let credentials = Credentials {
            username: self.params.username.clone(),
            password: self.params.password.clone(),
        };

        let result = self.client.get(&url, &credentials).await;
        match &result {
            Ok(_) => tracing::info!("Connected successfully!"),
            Err(e) => tracing::debug!("{e}"),
        }

        RequestOutcome::classify(result)
    }
}

/// Emits the single status line for one sub-request.
fn report(action: Action, outcome: RequestOutcome) {
    match outcome {
        RequestOutcome::Success => match action {
            Action::Connect => {
                tracing::info!("Gaining Internet access. Wait some seconds...");
            }
            Action::Disconnect => tracing::info!("Disconnected from Internet..."),
            Action::Reboot => {
                tracing::info!("Reboot is in progress now. Wait a minute...");
            }
        },
        RequestOutcome::TransportTimeout => tracing::error!(
            "Timeout connecting to the router or waiting for data from the router"
        ),
        RequestOutcome::TransportRefused => tracing::error!(
            "Unable to connect to the router: either wrong hostname or wrong port"
        ),
        RequestOutcome::HttpError(status) => {
            tracing::error!("{action} failed with status {status}, please try again");
        }
    }
}
