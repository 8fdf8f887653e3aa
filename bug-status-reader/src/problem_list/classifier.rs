//! Line classification policies.

use regex::Regex;
use serde::Deserialize;

use super::IssueKey;

/// Prefix identifying significant lines under the comment-URL policy.
const BROWSE_URL_PREFIX: &str = "# https://bugs.openjdk.java.net/browse/JDK-";

/// Issue keys carry this prefix once the numeric id is extracted.
const KEY_PREFIX: &str = "JDK-";

/// Pattern accepted as a numeric issue id under the token-list policy.
const NUMERIC_PATTERN: &str = r"^[-+]?\d*\.?\d+$";

/// How issue keys are extracted from problem-list lines.
///
/// Both policies appear in real problem lists; which one applies is
/// configuration, never hard-wired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinePolicy {
    /// Whitespace-separated records where the second token is a
    /// comma-separated list of numeric issue ids.
    #[default]
    TokenList,

    /// Only comment lines embedding a tracker browse URL are significant.
    CommentUrl,
}

/// Extracts issue keys from problem-list lines.
///
/// Malformed lines yield no keys instead of failing the run.
pub struct LineClassifier {
    policy: LinePolicy,
    numeric: Regex,
}

impl LineClassifier {
    /// Creates a classifier for the given policy.
    #[must_use]
    pub fn new(policy: LinePolicy) -> Self {
        Self {
            policy,
            numeric: Regex::new(NUMERIC_PATTERN).expect("hard-coded pattern compiles"),
        }
    }

    /// Returns the configured policy.
    #[must_use]
    pub fn policy(&self) -> LinePolicy {
        self.policy
    }

    /// Extracts every issue key named by one line.
    #[must_use]
    pub fn classify(&self, line: &str) -> Vec<IssueKey> {
        match self.policy {
            LinePolicy::TokenList => self.classify_tokens(line),
            LinePolicy::CommentUrl => classify_comment_url(line),
        }
    }

    fn classify_tokens(&self, line: &str) -> Vec<IssueKey> {
        // skip empty and commented lines
        if line.is_empty() || line.starts_with('#') {
            return Vec::new();
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 2 {
            return Vec::new();
        }

        tokens[1]
            .split(',')
            .filter(|id| !id.starts_with("JRE"))
            .filter(|id| self.numeric.is_match(id))
            .map(|id| IssueKey::new(format!("{KEY_PREFIX}{id}")))
            .collect()
    }
}

/// Extracts the issue key from a browse-URL comment line.
///
/// The key is the second `-`-separated segment of the line, re-prefixed
/// and truncated at the first space.
fn classify_comment_url(line: &str) -> Vec<IssueKey> {
    if !line.starts_with(BROWSE_URL_PREFIX) {
        return Vec::new();
    }

    let Some(segment) = line.split('-').nth(1) else {
        return Vec::new();
    };

    let key = format!("{KEY_PREFIX}{segment}");
    match key.split(' ').next() {
        Some(key) if key.len() > KEY_PREFIX.len() => vec![IssueKey::new(key.to_string())],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(classifier: &LineClassifier, line: &str) -> Vec<String> {
        classifier
            .classify(line)
            .into_iter()
            .map(|k| k.to_string())
            .collect()
    }

    #[test]
    fn token_policy_skips_comments_and_blank_lines() {
        let classifier = LineClassifier::new(LinePolicy::TokenList);

        assert!(classifier.classify("").is_empty());
        assert!(classifier.classify("# a comment").is_empty());
        assert!(classifier.classify("#8150225").is_empty());
    }

    #[test]
    fn token_policy_extracts_comma_separated_ids() {
        let classifier = LineClassifier::new(LinePolicy::TokenList);

        assert_eq!(
            keys(&classifier, "DESC 123,456,JRE789"),
            vec!["JDK-123", "JDK-456"]
        );
    }

    #[test]
    fn token_policy_requires_two_tokens() {
        let classifier = LineClassifier::new(LinePolicy::TokenList);

        assert!(classifier.classify("8150225").is_empty());
        assert!(classifier.classify("   ").is_empty());
    }

    #[test]
    fn token_policy_rejects_non_numeric_ids() {
        let classifier = LineClassifier::new(LinePolicy::TokenList);

        assert!(classifier.classify("test/Foo.java pending").is_empty());
        assert_eq!(
            keys(&classifier, "test/Foo.java 8150225,tbd,8031109"),
            vec!["JDK-8150225", "JDK-8031109"]
        );
    }

    #[test]
    fn comment_url_policy_extracts_key_from_browse_line() {
        let classifier = LineClassifier::new(LinePolicy::CommentUrl);

        assert_eq!(
            keys(
                &classifier,
                "# https://bugs.openjdk.java.net/browse/JDK-8150225 some text"
            ),
            vec!["JDK-8150225"]
        );
        assert_eq!(
            keys(
                &classifier,
                "# https://bugs.openjdk.java.net/browse/JDK-8031109"
            ),
            vec!["JDK-8031109"]
        );
    }

    #[test]
    fn comment_url_policy_ignores_other_lines() {
        let classifier = LineClassifier::new(LinePolicy::CommentUrl);

        assert!(classifier.classify("").is_empty());
        assert!(classifier.classify("# plain comment").is_empty());
        assert!(classifier.classify("DESC 123,456").is_empty());
    }

    #[test]
    fn comment_url_policy_rejects_empty_key() {
        let classifier = LineClassifier::new(LinePolicy::CommentUrl);

        assert!(classifier
            .classify("# https://bugs.openjdk.java.net/browse/JDK-")
            .is_empty());
    }
}
