//! HTTP transport port.
//!
//! The client issues every request through this trait. Implementations can
//! be reqwest-backed adapters, in-memory mocks for tests, etc.

use crate::error::ClientError;

/// Port trait for HTTP execution.
///
/// Implementations must be safe for concurrent use; the client shares one
/// transport across all calls.
#[async_trait::async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issues a GET request against `url` with the given query parameters
    /// and returns the response body.
    ///
    /// The HTTP status code is not part of the contract: currencylayer
    /// answers 200 even for logical failures, so callers judge success
    /// from the payload alone. Only a failed exchange (connection error,
    /// timeout, TLS) is an error here.
    async fn get(
        &self,
        url: &str,
        params: &[(&'static str, String)],
    ) -> Result<String, ClientError>;
}
