//! # currencylayer Client
//!
//! A typed Rust client for the currencylayer.com JSON API.
//!
//! Four operations are exposed, each as an `async fn` here and as a
//! blocking counterpart in [`blocking`]:
//! - [`CurrencyLayerApi::list`] - all supported currencies
//! - [`CurrencyLayerApi::live`] - current exchange rates
//! - [`CurrencyLayerApi::historical`] - rates for a past date
//! - [`CurrencyLayerApi::convert`] - convert an amount between currencies
//!
//! Requests go through the [`HttpTransport`] port; tests inject an
//! in-memory transport, production code uses [`ReqwestTransport`].

pub mod blocking;
mod transport;


pub use transport::ReqwestTransport;

use std::sync::Arc;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde_json::Value;

use currencylayer_types::{
    ApiError, ClientError, ConvertResponse, HistoricalResponse, HttpTransport, ListResponse,
    LiveResponse,
};

/// Query parameter names fixed by the remote API contract.
mod params {
    pub const ACCESS_KEY: &str = "access_key";
    pub const CURRENCIES: &str = "currencies";
    pub const SOURCE: &str = "source";
    pub const DATE: &str = "date";
    pub const FROM: &str = "from";
    pub const TO: &str = "to";
    pub const AMOUNT: &str = "amount";
}

/// Endpoint path segments under the API base.
mod endpoints {
    pub const LIST: &str = "list";
    pub const LIVE: &str = "live";
    pub const HISTORICAL: &str = "historical";
    pub const CONVERT: &str = "convert";
}

const API_HOST: &str = "apilayer.net/api";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Client for the currencylayer.com JSON API.
///
/// Holds an access key, a scheme choice and a shared transport; all three
/// are immutable for the lifetime of the instance, and every call is
/// stateless relative to any other call. Secure (HTTPS) connections are
/// available for paying subscribers.
pub struct CurrencyLayerApi {
    access_key: String,
    base_url: String,
    transport: Arc<dyn HttpTransport>,
}

impl CurrencyLayerApi {
    /// Creates a client backed by the default reqwest transport.
    pub fn new(access_key: impl Into<String>, use_secure_connection: bool) -> Self {
        Self::with_transport(
            access_key,
            use_secure_connection,
            Arc::new(ReqwestTransport::new()),
        )
    }

    /// Creates a client that issues requests through the given transport.
    pub fn with_transport(
        access_key: impl Into<String>,
        use_secure_connection: bool,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        let protocol = if use_secure_connection { "https" } else { "http" };
        Self {
            access_key: access_key.into(),
            base_url: format!("{protocol}://{API_HOST}"),
            transport,
        }
    }

    /// Returns all supported currencies, keyed by three-letter code.
    pub async fn list(&self) -> Result<ListResponse, ClientError> {
        self.execute(endpoints::LIST, Vec::new()).await
    }

    /// Returns live exchange rates for a `source` currency (the API defaults
    /// to USD). `currencies` limits the result to a comma-separated set of
    /// target codes, e.g. `"EUR,GBP,HUF"`.
    ///
    /// Codes are passed through unvalidated; the remote API rejects
    /// anything it does not recognize.
    pub async fn live(
        &self,
        currencies: Option<&str>,
        source: Option<&str>,
    ) -> Result<LiveResponse, ClientError> {
        let mut query = Vec::new();
        if let Some(currencies) = currencies {
            query.push((params::CURRENCIES, currencies.to_string()));
        }
        if let Some(source) = source {
            query.push((params::SOURCE, source.to_string()));
        }
        self.execute(endpoints::LIVE, query).await
    }

    /// Returns exchange rates for a past calendar `date`, with the same
    /// `currencies`/`source` semantics as [`live`](Self::live). The date is
    /// transmitted as `YYYY-MM-DD`.
    pub async fn historical(
        &self,
        date: NaiveDate,
        currencies: Option<&str>,
        source: Option<&str>,
    ) -> Result<HistoricalResponse, ClientError> {
        let mut query = vec![(params::DATE, date.format(DATE_FORMAT).to_string())];
        if let Some(currencies) = currencies {
            query.push((params::CURRENCIES, currencies.to_string()));
        }
        if let Some(source) = source {
            query.push((params::SOURCE, source.to_string()));
        }
        self.execute(endpoints::HISTORICAL, query).await
    }

    /// Converts `amount` of the `from` currency into the `to` currency at
    /// the current rate. The amount is passed through unvalidated.
    pub async fn convert(
        &self,
        from: &str,
        to: &str,
        amount: f64,
    ) -> Result<ConvertResponse, ClientError> {
        let query = vec![
            (params::FROM, from.to_string()),
            (params::TO, to.to_string()),
            (params::AMOUNT, amount.to_string()),
        ];
        self.execute(endpoints::CONVERT, query).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        mut query: Vec<(&'static str, String)>,
    ) -> Result<T, ClientError> {
        query.insert(0, (params::ACCESS_KEY, self.access_key.clone()));
        let url = format!("{}/{}", self.base_url, endpoint);
        tracing::debug!(%url, "issuing currencylayer request");
        let body = self.transport.get(&url, &query).await?;
        parse_payload(&body)
    }
}

/// Gates a payload on its `success` flag.
///
/// The API answers HTTP 200 even for logical failures, so the flag is the
/// only trustworthy success signal. A false or missing flag turns the
/// nested `error` object into an [`ApiError`]; if that object is absent
/// too, the payload does not match the API contract at all and the parse
/// failure surfaces as [`ClientError::MalformedResponse`].
fn parse_payload<T: DeserializeOwned>(body: &str) -> Result<T, ClientError> {
    let value: Value = serde_json::from_str(body)?;
    if value.get("success").and_then(Value::as_bool).unwrap_or(false) {
        Ok(serde_json::from_value(value)?)
    } else {
        let error = value.get("error").cloned().unwrap_or(Value::Null);
        Err(serde_json::from_value::<ApiError>(error)?.into())
    }
}
