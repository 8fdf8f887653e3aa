//! Response parsing error types.

use thiserror::Error;

/// Errors that can occur while parsing a search response.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The response body is not a well-formed XML document.
    #[error("Malformed search response: {reason}")]
    MalformedDocument { reason: String },
}
