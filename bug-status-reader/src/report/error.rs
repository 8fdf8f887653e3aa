//! Report error types.

use thiserror::Error;

/// Errors that can occur while writing reports.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Failed to create or write a report file.
    #[error("Failed to write report '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Row template rendering failed.
    #[error("Row rendering error: {0}")]
    RenderError(#[from] handlebars::RenderError),
}
