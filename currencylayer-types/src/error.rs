//! Error types for the currencylayer client.

use serde::{Deserialize, Serialize};

/// Logical failure reported by the remote API.
///
/// currencylayer answers HTTP 200 even for failed requests; the payload's
/// `error` object is the only place the failure is described. Code and
/// message are carried untouched for the caller to branch on or display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("currencylayer error {code}: {info}")]
pub struct ApiError {
    /// Numeric error code from the payload's `error.code` field.
    pub code: i64,
    /// Human-readable message from the payload's `error.info` field.
    pub info: String,
}

/// Error type for client operations.
///
/// The three kinds are mutually exclusive per call; no failure is retried
/// or silently downgraded.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP exchange itself failed (connection, timeout, TLS).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The body did not parse as JSON or did not match the expected shape
    /// for the requested operation.
    #[error("malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// The API executed the request but reported `success: false`.
    #[error(transparent)]
    Api(#[from] ApiError),
}
