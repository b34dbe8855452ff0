//! Error types for the search scraper
//!
//! Every failure is fatal to a scrape run; there is no local recovery.

use thiserror::Error;

/// Error type for all scraper operations
#[derive(Error, Debug)]
pub enum SearchError {
    /// Domain configuration file missing or not a flat string map
    #[error("Configuration unavailable: {0}")]
    ConfigUnavailable(String),

    /// Requested country code has no entry in the domain map
    #[error("Country ({0}) is currently not supported")]
    UnsupportedCountry(String),

    /// Network-level failure (DNS, connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    TransportError(#[from] reqwest::Error),

    /// Provider answered with anything other than 200
    #[error("Received status {status} from {url}, suggesting a ban")]
    BlockedOrError {
        /// HTTP status code returned by the provider
        status: u16,
        /// URL that was requested
        url: String,
    },

    /// Response body could not be treated as an HTML document
    #[error("Failed to parse HTML: {0}")]
    ParseError(String),
}

impl SearchError {
    /// Whether the provider refused the request with a non-200 status
    pub fn is_blocked(&self) -> bool {
        matches!(self, SearchError::BlockedOrError { .. })
    }
}

/// Result type alias for scraper operations
pub type Result<T> = std::result::Result<T, SearchError>;
