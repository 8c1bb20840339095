//! Blocking variants of the client operations.
//!
//! [`CurrencyLayerApi`] here owns a current-thread tokio runtime and drives
//! the async client to completion on the calling thread. It adds no
//! behavior of its own: no retries, no cancellation, and for identical
//! transport responses it produces results value-equal to the async path.

use std::io;
use std::sync::Arc;

use chrono::NaiveDate;

use currencylayer_types::{
    ClientError, ConvertResponse, HistoricalResponse, HttpTransport, ListResponse, LiveResponse,
};

/// Blocking counterpart of [`crate::CurrencyLayerApi`].
pub struct CurrencyLayerApi {
    inner: crate::CurrencyLayerApi,
    runtime: tokio::runtime::Runtime,
}

impl CurrencyLayerApi {
    /// Creates a blocking client backed by the default reqwest transport.
    pub fn new(access_key: impl Into<String>, use_secure_connection: bool) -> io::Result<Self> {
        Self::from_async(crate::CurrencyLayerApi::new(
            access_key,
            use_secure_connection,
        ))
    }

    /// Creates a blocking client that issues requests through the given
    /// transport.
    pub fn with_transport(
        access_key: impl Into<String>,
        use_secure_connection: bool,
        transport: Arc<dyn HttpTransport>,
    ) -> io::Result<Self> {
        Self::from_async(crate::CurrencyLayerApi::with_transport(
            access_key,
            use_secure_connection,
            transport,
        ))
    }

    /// Wraps an already-constructed async client. Fails only if the
    /// runtime cannot be created.
    pub fn from_async(inner: crate::CurrencyLayerApi) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(Self { inner, runtime })
    }

    /// Blocking form of [`crate::CurrencyLayerApi::list`].
    pub fn list(&self) -> Result<ListResponse, ClientError> {
        self.runtime.block_on(self.inner.list())
    }

    /// Blocking form of [`crate::CurrencyLayerApi::live`].
    pub fn live(
        &self,
        currencies: Option<&str>,
        source: Option<&str>,
    ) -> Result<LiveResponse, ClientError> {
        self.runtime.block_on(self.inner.live(currencies, source))
    }

    /// Blocking form of [`crate::CurrencyLayerApi::historical`].
    pub fn historical(
        &self,
        date: NaiveDate,
        currencies: Option<&str>,
        source: Option<&str>,
    ) -> Result<HistoricalResponse, ClientError> {
        self.runtime
            .block_on(self.inner.historical(date, currencies, source))
    }

    /// Blocking form of [`crate::CurrencyLayerApi::convert`].
    pub fn convert(&self, from: &str, to: &str, amount: f64) -> Result<ConvertResponse, ClientError> {
        self.runtime.block_on(self.inner.convert(from, to, amount))
    }
}
