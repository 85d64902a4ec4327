//! Fetch failures.
//!
//! The story reducer only ever learns that a fetch failed; the variants here
//! exist for logging and for the status line.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Endpoint or request URL does not parse
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Transport-level failure (DNS, TLS, reset, body read)
    #[error("Connection failed: {0}")]
    Connection(#[source] reqwest::Error),

    /// Request exceeded the total timeout
    #[error("Request timeout after {duration}s")]
    Timeout { duration: u64 },

    /// Upstream answered with a non-success status
    #[error("Upstream returned status {status}")]
    Status { status: u16 },

    /// Body was not a search page
    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Short text for the status line.
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::InvalidUrl { .. } | FetchError::Client(_) => "Invalid search endpoint",
            FetchError::Connection(_) => "Could not reach the search API",
            FetchError::Timeout { .. } => "The search API timed out",
            FetchError::Status { .. } => "The search API returned an error",
            FetchError::Decode(_) => "The search API returned an unexpected response",
        }
    }
}
