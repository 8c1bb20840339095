//! Port traits (interfaces for adapters).
//!
//! The client depends on these traits, not concrete implementations.

mod transport;

pub use transport::HttpTransport;
