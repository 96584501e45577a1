//! Core types for landslide risk monitoring records.
//!
//! - `record`: the `Record` observation and JSON decoding of API payloads
//! - `risk`: risk categories and their display palette
//! - `error`: `LrmError` and the crate `Result` alias
//! - `api` (feature `api`): native HTTP client for the monitoring endpoint

pub mod error;
pub mod record;
pub mod risk;

#[cfg(feature = "api")]
pub mod api;

pub use error::{LrmError, Result};
pub use record::Record;
pub use risk::RiskLevel;

/// Endpoint the dashboard reads from when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000/api/landslide-risk";
