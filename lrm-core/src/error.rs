/// Error types for the landslide risk monitor
use thiserror::Error;

/// Main error type for fetching and decoding monitoring records
#[derive(Error, Debug)]
pub enum LrmError {
    /// HTTP request failed before a response arrived
    #[cfg(feature = "api")]
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status
    #[error("Network response was not ok: HTTP {0}")]
    HttpStatus(u16),

    /// The body was not a JSON array of records
    #[error("Failed to decode records: {0}")]
    Decode(String),

    /// Browser-side fetch failure (transport or body read)
    #[error("Fetch failed: {0}")]
    Fetch(String),
}

impl From<serde_json::Error> for LrmError {
    fn from(err: serde_json::Error) -> Self {
        LrmError::Decode(err.to_string())
    }
}

/// Type alias for Results using LrmError
pub type Result<T> = std::result::Result<T, LrmError>;
