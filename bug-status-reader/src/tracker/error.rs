//! Tracker client error types.

use thiserror::Error;

/// Errors that can occur while talking to the bug tracker.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// The configured search endpoint is not a valid URL.
    #[error("Invalid search endpoint '{url}'")]
    InvalidEndpoint { url: String },

    /// Transport-level failure.
    #[error("Tracker request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// The tracker answered with a non-success status.
    #[error("Tracker returned HTTP {status} for {key}")]
    HttpStatus { key: String, status: u16 },
}
