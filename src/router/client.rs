//! Production HTTP client implementation using reqwest.

use std::time::Duration;

use super::{Credentials, RouterClient, TransportError};

/// Connect-phase timeout.
///
/// Kept shorter than [`READ_TIMEOUT`] so an unreachable router surfaces
/// faster than a slow one.
pub const CONNECT_TIMEOUT: Duration = Duration::from_millis(3100);

/// Read-phase timeout, covering the wait for the response.
pub const READ_TIMEOUT: Duration = Duration::from_secs(5);

/// Production HTTP client using reqwest.
///
/// This is a thin wrapper around `reqwest::Client` that implements the
/// [`RouterClient`] trait, configured with the connect and read timeouts
/// the embedded web servers need.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a new HTTP client with the router timeouts applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying TLS or connection backend
    /// cannot be initialized.
    pub fn new() -> Result<Self, reqwest::Error> {
        let inner = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(READ_TIMEOUT)
            .build()?;

        Ok(Self { inner })
    }

    /// Creates an HTTP client from an existing reqwest client.
    ///
    /// Useful when you need custom configuration (timeouts, proxies, etc.).
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { inner: client }
    }
}

impl RouterClient for ReqwestClient {
    async fn get(
        &self,
        url: &str,
        credentials: &Credentials,
    ) -> Result<http::StatusCode, TransportError> {
        let response = self
            .inner
            .get(url)
            .basic_auth(&credentials.username, Some(&credentials.password))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TransportError::Timeout
                } else {
                    TransportError::Refused(Box::new(e))
                }
            })?;

        Ok(response.status())
    }
}
