//! Report membership rules and row routing.

use std::path::Path;

use tracing::info;

use super::render::{ReportRenderer, HEADER_ROW};
use super::writer::ReportWriter;
use super::ReportError;
use crate::parser::IssueRecord;

/// Marker routing an issue into the test-issues report.
const TEST_BUG_MARKER: &str = "[TEST_BUG]";

/// Which reports a record belongs to. Membership is independent, a record
/// can land in both reports or in neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportDestinations {
    /// The issue has a positive resolution id.
    pub fixed: bool,

    /// The description carries the test-bug marker.
    pub test: bool,
}

/// Decides report membership for a record.
#[must_use]
pub fn destinations(record: &IssueRecord) -> ReportDestinations {
    ReportDestinations {
        fixed: record.resolution_id > 0,
        test: record.description.starts_with(TEST_BUG_MARKER),
    }
}

/// Per-report row counters, 1-based and incremented before use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportCounters {
    /// Rows written to the fixed-issues report.
    pub fixed: usize,

    /// Rows written to the test-issues report.
    pub test: usize,
}

/// Routes parsed records into the two report files.
pub struct ReportRouter {
    fixed: ReportWriter,
    test: ReportWriter,
    renderer: ReportRenderer,
    counters: ReportCounters,
}

impl ReportRouter {
    /// Opens both reports and writes their table opening and header row.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if either file cannot be created or written.
    pub fn open(fixed_path: &Path, test_path: &Path) -> Result<Self, ReportError> {
        let mut fixed = ReportWriter::create(fixed_path)?;
        let mut test = ReportWriter::create(test_path)?;

        for writer in [&mut fixed, &mut test] {
            writer.append_line("<table>")?;
            writer.append_line(HEADER_ROW)?;
        }

        Ok(Self {
            fixed,
            test,
            renderer: ReportRenderer::new(),
            counters: ReportCounters::default(),
        })
    }

    /// Routes one record, appending a row to every report it belongs to.
    ///
    /// Each report keeps its own running sequence number, so a record that
    /// lands in both reports gets independent numbers.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if rendering or writing a row fails.
    pub fn route(&mut self, record: &IssueRecord) -> Result<ReportDestinations, ReportError> {
        let destinations = destinations(record);

        if destinations.fixed {
            self.counters.fixed += 1;
            info!(
                key = %record.key,
                status = %record.status,
                resolution = %record.resolution,
                "Fixed issue"
            );
            let row = self.renderer.render_row(self.counters.fixed, record)?;
            self.fixed.append_line(&row)?;
        }

        if destinations.test {
            self.counters.test += 1;
            info!(key = %record.key, "Test issue");
            let row = self.renderer.render_row(self.counters.test, record)?;
            self.test.append_line(&row)?;
        }

        Ok(destinations)
    }

    /// Current row counters.
    #[must_use]
    pub fn counters(&self) -> ReportCounters {
        self.counters
    }

    /// Closes both tables.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if either closing tag cannot be written.
    pub fn finish(mut self) -> Result<(), ReportError> {
        self.fixed.append_line("</table>")?;
        self.test.append_line("</table>")?;
        Ok(())
    }
}
