//! Problem-list error types.

use thiserror::Error;

/// Errors that can occur while reading a problem list.
#[derive(Debug, Error)]
pub enum ProblemListError {
    /// Failed to read the problem-list file.
    #[error("Failed to read problem list '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
