//! Runner error types.

/// Fatal errors that abort a run during setup.
///
/// Per-key fetch and parse failures are not represented here; they are
/// folded into the run summary instead.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration loading errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// Problem-list reading errors.
    #[error(transparent)]
    ProblemList(#[from] crate::problem_list::ProblemListError),

    /// Report file errors.
    #[error(transparent)]
    Report(#[from] crate::report::ReportError),

    /// Tracker client construction errors.
    #[error(transparent)]
    Tracker(#[from] crate::tracker::TrackerError),

    /// Results directory creation failed.
    #[error("Failed to create results directory '{path}': {source}")]
    ResultsDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
