//! Error types for the router transport.

use thiserror::Error;

/// Transport-level failure: no HTTP status was received.
///
/// The two variants are kept apart because they imply different user
/// remediation: a timeout points at the wrong network, a refusal at the
/// wrong host or port.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connecting to the router or waiting for its response exceeded
    /// the timeout.
    #[error("Timed out connecting to the router or waiting for data")]
    Timeout,

    /// Connection actively refused or host unreachable.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and other network-level errors.
    #[error("Unable to connect to the router: {0}")]
    Refused(#[source] Box<dyn std::error::Error + Send + Sync>),
}
