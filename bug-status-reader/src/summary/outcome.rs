//! Per-key processing outcomes.

/// Result of processing a single issue key.
#[derive(Debug, Clone)]
pub enum KeyOutcome {
    /// Fetch and parse succeeded; rows may have been written.
    Routed {
        /// The issue key.
        key: String,

        /// Records the search returned for this key.
        records: usize,

        /// Rows appended to the fixed-issues report.
        fixed_rows: usize,

        /// Rows appended to the test-issues report.
        test_rows: usize,
    },

    /// Fetch or parse failed; the key was skipped.
    Failed {
        /// The issue key.
        key: String,

        /// Error message.
        error: String,
    },
}
