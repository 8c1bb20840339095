//! Typed response records, one per API endpoint.
//!
//! Each record is an immutable snapshot deserialized from a single JSON
//! payload; fields carry the JSON values verbatim. Every successful payload
//! also echoes the `terms` and `privacy` URLs of the service.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// List
// ─────────────────────────────────────────────────────────────────────────────

/// All currencies supported by the API, from the `list` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse {
    pub success: bool,
    pub terms: String,
    pub privacy: String,
    /// Three-letter currency code mapped to its display name.
    pub currencies: HashMap<String, String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Live
// ─────────────────────────────────────────────────────────────────────────────

/// Current exchange rates for a source currency, from the `live` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveResponse {
    pub success: bool,
    pub terms: String,
    pub privacy: String,
    /// UNIX timestamp of the quoted rates.
    pub timestamp: i64,
    /// Source currency the quotes are relative to.
    pub source: Option<String>,
    /// Exchange rates keyed by concatenated source+target pair code,
    /// e.g. `"USDHUF"`.
    pub quotes: HashMap<String, f64>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Historical
// ─────────────────────────────────────────────────────────────────────────────

/// Exchange rates for a past calendar date, from the `historical` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalResponse {
    pub success: bool,
    pub terms: String,
    pub privacy: String,
    /// Always `true` on historical payloads.
    pub historical: bool,
    /// The date the quotes apply to, `YYYY-MM-DD` on the wire.
    pub date: NaiveDate,
    pub timestamp: i64,
    pub source: Option<String>,
    pub quotes: HashMap<String, f64>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Convert
// ─────────────────────────────────────────────────────────────────────────────

/// Result of converting an amount between two currencies, from the
/// `convert` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertResponse {
    pub success: bool,
    pub terms: String,
    pub privacy: String,
    /// Echo of the requested conversion.
    pub query: ConvertQuery,
    /// The quote the conversion was computed with.
    pub info: ConvertInfo,
    /// The converted amount.
    pub result: f64,
}

/// Echo of the `from`/`to`/`amount` parameters of a convert call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertQuery {
    pub from: String,
    pub to: String,
    pub amount: f64,
}

/// Rate metadata attached to a convert result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertInfo {
    pub timestamp: i64,
    pub quote: f64,
}
