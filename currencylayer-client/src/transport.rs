//! Default reqwest-backed transport adapter.

use async_trait::async_trait;
use reqwest::Client;

use currencylayer_types::{ClientError, HttpTransport};

/// [`HttpTransport`] adapter over a shared [`reqwest::Client`].
///
/// The underlying client is safe for concurrent use; timeout and TLS
/// behavior are inherited from its configuration unmodified.
#[derive(Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a transport with a fresh connection pool.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Wraps an existing client, preserving its configuration.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(
        &self,
        url: &str,
        params: &[(&'static str, String)],
    ) -> Result<String, ClientError> {
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| ClientError::Transport(Box::new(e)))?;
        // The status code is not consulted; the payload's `success` flag
        // is the authoritative signal.
        response
            .text()
            .await
            .map_err(|e| ClientError::Transport(Box::new(e)))
    }
}
