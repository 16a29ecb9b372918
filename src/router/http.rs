//! Transport trait and credential type.

use super::TransportError;

/// HTTP Basic credentials for the administration interface.
///
/// The router holds no session state; every request is independently
/// authenticated with these.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Administrator username
    pub username: String,
    /// Administrator password
    pub password: String,
}

/// Trait for issuing authenticated GET requests against the router.
///
/// # Design
///
/// This trait abstracts the HTTP client implementation, enabling:
/// - Dependency injection for testing with mock clients
/// - Swapping HTTP libraries without changing calling code
///
/// Only the response status matters to the caller; the embedded web
/// server's response bodies are HTML error pages with no machine value,
/// so the trait does not surface them.
pub trait RouterClient: Send + Sync {
    /// Sends an authenticated GET request and returns the response status.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the connection times out
    /// ([`TransportError::Timeout`]) or cannot be established
    /// ([`TransportError::Refused`]).
    fn get(
        &self,
        url: &str,
        credentials: &Credentials,
    ) -> impl std::future::Future<Output = Result<http::StatusCode, TransportError>> + Send;
}
