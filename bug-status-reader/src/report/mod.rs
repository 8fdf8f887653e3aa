//! HTML report generation.
//!
//! Two reports are produced per run: fixed issues and test-related issues.
//! Each is a minimal HTML table written through a line-flushed append
//! writer, so rows written before an interrupted run stay on disk.

mod error;
mod render;
mod router;
mod writer;

pub use error::ReportError;
pub use render::ReportRenderer;
pub use router::{destinations, ReportCounters, ReportDestinations, ReportRouter};
pub use writer::ReportWriter;

use std::path::{Path, PathBuf};

/// File name of the test-issues report.
pub const TEST_ISSUES_FILE: &str = "test_issues.html";

/// Derives both report paths from the problem-list path.
///
/// The fixed-issues report is named after the problem list (`<stem>.html`);
/// the test-issues report name is fixed.
#[must_use]
pub fn report_paths(results_dir: &Path, problem_list: &Path) -> (PathBuf, PathBuf) {
    let stem = problem_list
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| "problem_list".to_string());

    (
        results_dir.join(format!("{stem}.html")),
        results_dir.join(TEST_ISSUES_FILE),
    )
}
