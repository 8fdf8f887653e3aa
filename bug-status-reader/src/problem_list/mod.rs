//! Problem-list reading and issue-key extraction.
//!
//! A problem list is a line-oriented text file naming issues to check.
//! Two extraction policies exist in the wild; see [`LinePolicy`].

mod classifier;
mod error;

pub use classifier::{LineClassifier, LinePolicy};
pub use error::ProblemListError;

use std::path::Path;
use tracing::{debug, info};

/// An issue key of the form `JDK-<id>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueKey(String);

impl IssueKey {
    pub(crate) fn new(key: String) -> Self {
        Self(key)
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for IssueKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reads a problem list and extracts every issue key it names.
///
/// Keys are returned in file order together with the number of lines read.
/// Lines that do not name an issue are skipped silently.
///
/// # Errors
///
/// Returns [`ProblemListError`] if the file cannot be read.
pub fn collect_issue_keys(
    path: &Path,
    classifier: &LineClassifier,
) -> Result<(Vec<IssueKey>, usize), ProblemListError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ProblemListError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;

    let mut keys = Vec::new();
    let mut lines_read = 0;
    for line in contents.lines() {
        lines_read += 1;
        let extracted = classifier.classify(line);
        if !extracted.is_empty() {
            debug!(line, count = extracted.len(), "Extracted issue keys");
        }
        keys.extend(extracted);
    }

    info!(
        path = %path.display(),
        lines = lines_read,
        keys = keys.len(),
        "Read problem list"
    );
    Ok((keys, lines_read))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn collects_keys_in_file_order() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("ProblemList.txt");
        fs::write(
            &path,
            "# header comment\n\
             javax/swing/Foo.java 8150225 generic-all\n\
             java/awt/Bar.java 8031109,8132123 linux-all\n",
        )
        .unwrap();

        let classifier = LineClassifier::new(LinePolicy::TokenList);
        let (keys, lines) = collect_issue_keys(&path, &classifier).unwrap();

        assert_eq!(lines, 3);
        let keys: Vec<String> = keys.into_iter().map(|k| k.to_string()).collect();
        assert_eq!(keys, vec!["JDK-8150225", "JDK-8031109", "JDK-8132123"]);
    }

    #[test]
    fn empty_file_yields_no_keys() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("ProblemList.txt");
        fs::write(&path, "").unwrap();

        let classifier = LineClassifier::new(LinePolicy::TokenList);
        let (keys, lines) = collect_issue_keys(&path, &classifier).unwrap();

        assert_eq!(lines, 0);
        assert!(keys.is_empty());
    }

    #[test]
    fn missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let classifier = LineClassifier::new(LinePolicy::TokenList);

        let result = collect_issue_keys(&temp.path().join("absent.txt"), &classifier);
        assert!(matches!(result, Err(ProblemListError::IoError { .. })));
    }
}
