//! Runner configuration.

use std::path::{Path, PathBuf};

use crate::config::TrackerConfig;

/// Configuration for a report-generation run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Path to the problem-list file.
    problem_list: PathBuf,
    /// Directory the reports are written to.
    results_dir: PathBuf,
    /// Maximum concurrent tracker requests.
    concurrency: usize,
    /// Tracker endpoint settings, including the line policy.
    tracker: TrackerConfig,
}

impl RunnerConfig {
    /// Creates a configuration with default tracker settings and strictly
    /// sequential fetching.
    #[must_use]
    pub fn new(problem_list: PathBuf, results_dir: PathBuf) -> Self {
        Self {
            problem_list,
            results_dir,
            concurrency: 1,
            tracker: TrackerConfig::default(),
        }
    }

    /// Sets custom tracker settings.
    #[must_use]
    pub fn with_tracker(mut self, tracker: TrackerConfig) -> Self {
        self.tracker = tracker;
        self
    }

    /// Sets the number of tracker requests kept in flight.
    #[must_use]
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Returns the problem-list path.
    pub fn problem_list(&self) -> &Path {
        &self.problem_list
    }

    /// Returns the results directory.
    pub fn results_dir(&self) -> &Path {
        &self.results_dir
    }

    /// Returns the fetch concurrency.
    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Returns the tracker settings.
    pub fn tracker(&self) -> &TrackerConfig {
        &self.tracker
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_sequential_fetching() {
        let config = RunnerConfig::new(PathBuf::from("ProblemList.txt"), PathBuf::from("out"));
        assert_eq!(config.concurrency(), 1);
    }

    #[test]
    fn concurrency_is_clamped_to_at_least_one() {
        let config = RunnerConfig::new(PathBuf::from("ProblemList.txt"), PathBuf::from("out"))
            .with_concurrency(0);
        assert_eq!(config.concurrency(), 1);
    }
}
