//! # currencylayer Types
//!
//! Response records, error types and port traits for the currencylayer
//! API client. This crate has ZERO IO dependencies - only data structures
//! and trait definitions.
//!
//! ## Architecture
//!
//! - `responses/` - Typed response records, one per API endpoint
//! - `ports/` - The HTTP transport trait that adapters must implement
//! - `error/` - API and client error types

pub mod error;
pub mod ports;
pub mod responses;

// Re-export commonly used types
pub use error::{ApiError, ClientError};
pub use ports::HttpTransport;
pub use responses::{
    ConvertInfo, ConvertQuery, ConvertResponse, HistoricalResponse, ListResponse, LiveResponse,
};
