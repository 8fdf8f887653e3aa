//! Orchestrates a full problem-list check.
//!
//! One run is: read the problem list, extract issue keys, fetch each key's
//! XML search result, parse it, and route every returned record into the
//! reports. A failing key is logged and skipped; rows already written stay
//! in the reports.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use futures::stream::{self, StreamExt};
use tracing::{info, warn};

use crate::parser::{parse_search_response, IssueRecord};
use crate::problem_list::{collect_issue_keys, IssueKey, LineClassifier};
use crate::report::{report_paths, ReportRouter};
use crate::summary::{KeyOutcome, RunSummary};
use crate::tracker::TrackerClient;

/// Orchestrates classify, fetch, parse, route and write for one problem
/// list.
pub struct Runner {
    config: RunnerConfig,
    client: TrackerClient,
    classifier: LineClassifier,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if the tracker client cannot be constructed.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let client = TrackerClient::new(config.tracker())?;
        let classifier = LineClassifier::new(config.tracker().line_policy);

        Ok(Self {
            config,
            client,
            classifier,
        })
    }

    /// Executes the full run and returns its summary.
    ///
    /// Per-key fetch and parse failures are logged and counted but do not
    /// abort the run.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] on setup failures: an unusable results
    /// directory, an unreadable problem list, or unwritable reports.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        let mut summary = RunSummary::new();

        std::fs::create_dir_all(self.config.results_dir()).map_err(|e| {
            RunnerError::ResultsDir {
                path: self.config.results_dir().display().to_string(),
                source: e,
            }
        })?;

        let (fixed_path, test_path) =
            report_paths(self.config.results_dir(), self.config.problem_list());
        info!(path = %fixed_path.display(), "Generating fixed-issues report");
        info!(path = %test_path.display(), "Generating test-issues report");

        let (keys, lines_read) = collect_issue_keys(self.config.problem_list(), &self.classifier)?;
        summary.lines_read = lines_read;
        summary.keys_extracted = keys.len();

        if keys.is_empty() {
            warn!("Problem list names no issues");
        }

        let mut router = ReportRouter::open(&fixed_path, &test_path)?;

        // Keep up to `concurrency` fetches in flight; `buffered` hands
        // results back in input order, so report rows stay deterministic.
        let mut responses = stream::iter(keys)
            .map(|key| {
                let client = &self.client;
                async move {
                    let result = fetch_and_parse(client, &key).await;
                    (key, result)
                }
            })
            .buffered(self.config.concurrency());

        while let Some((key, result)) = responses.next().await {
            let outcome = match result {
                Ok(records) => route_records(&mut router, &key, &records)?,
                Err(error) => {
                    warn!(key = %key, error = %error, "Skipping issue key");
                    KeyOutcome::Failed {
                        key: key.to_string(),
                        error,
                    }
                }
            };
            summary.record_outcome(&outcome);
        }

        router.finish()?;

        info!(
            fixed = summary.fixed_rows,
            test = summary.test_rows,
            failed = summary.keys_failed,
            "Run complete"
        );
        Ok(summary)
    }
}

/// Fetches one key and parses the response, flattening both error kinds
/// into a message for the outcome record.
async fn fetch_and_parse(
    client: &TrackerClient,
    key: &IssueKey,
) -> Result<Vec<IssueRecord>, String> {
    let body = client.fetch_issue(key).await.map_err(|e| e.to_string())?;
    parse_search_response(&body).map_err(|e| e.to_string())
}

fn route_records(
    router: &mut ReportRouter,
    key: &IssueKey,
    records: &[IssueRecord],
) -> Result<KeyOutcome, RunnerError> {
    let mut fixed_rows = 0;
    let mut test_rows = 0;

    for record in records {
        let destinations = router.route(record)?;
        if destinations.fixed {
            fixed_rows += 1;
        }
        if destinations.test {
            test_rows += 1;
        }
    }

    Ok(KeyOutcome::Routed {
        key: key.to_string(),
        records: records.len(),
        fixed_rows,
        test_rows,
    })
}
