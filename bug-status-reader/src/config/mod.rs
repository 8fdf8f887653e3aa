//! Tracker configuration loading.
//!
//! Settings ship with working defaults and can be overridden through an
//! optional TOML file:
//!
//! ```toml
//! search-url = "https://bugs.openjdk.java.net/sr/jira.issueviews:searchrequest-xml/temp/SearchRequest.xml"
//! user-agent = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_12_1)"
//! line-policy = "token-list"
//! ```

mod error;

pub use error::ConfigError;

use crate::problem_list::LinePolicy;
use serde::Deserialize;
use std::path::Path;
use tracing::info;
use url::Url;

pub(crate) fn default_search_url() -> String {
    "https://bugs.openjdk.java.net/sr/jira.issueviews:searchrequest-xml/temp/SearchRequest.xml"
        .to_string()
}

pub(crate) fn default_user_agent() -> String {
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_12_1)".to_string()
}

/// Tracker access settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TrackerConfig {
    /// Base URL of the XML search endpoint.
    #[serde(default = "default_search_url")]
    pub search_url: String,

    /// User-Agent header value sent with every search request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// How problem-list lines are turned into issue keys.
    #[serde(default)]
    pub line_policy: LinePolicy,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            search_url: default_search_url(),
            user_agent: default_user_agent(),
            line_policy: LinePolicy::default(),
        }
    }
}

/// Loads tracker settings from a TOML file.
///
/// Missing keys fall back to the defaults; the parsed settings are
/// validated before being returned.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file cannot be read, is not valid TOML,
/// or fails validation.
pub fn load_config(path: &Path) -> Result<TrackerConfig, ConfigError> {
    info!(path = %path.display(), "Loading tracker configuration");

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;

    let config: TrackerConfig = toml::from_str(&contents).map_err(|e| ConfigError::TomlError {
        path: path.display().to_string(),
        source: e,
    })?;

    validate(&config, path)?;
    Ok(config)
}

fn validate(config: &TrackerConfig, path: &Path) -> Result<(), ConfigError> {
    if Url::parse(&config.search_url).is_err() {
        return Err(ConfigError::ValidationError {
            path: path.display().to_string(),
            message: format!("search-url is not a valid URL: {}", config.search_url),
        });
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            path: path.display().to_string(),
            message: "user-agent must not be empty".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_point_at_the_tracker() {
        let config = TrackerConfig::default();

        assert!(config.search_url.starts_with("https://bugs.openjdk.java.net/"));
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
        assert_eq!(config.line_policy, LinePolicy::TokenList);
    }

    #[test]
    fn load_config_applies_overrides() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            r#"
search-url = "https://tracker.example.com/search.xml"
line-policy = "comment-url"
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();

        assert_eq!(config.search_url, "https://tracker.example.com/search.xml");
        assert_eq!(config.line_policy, LinePolicy::CommentUrl);
        // unset keys keep their defaults
        assert_eq!(config.user_agent, default_user_agent());
    }

    #[test]
    fn load_config_rejects_bad_toml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "search-url = [not toml").unwrap();

        let result = load_config(&path);
        assert!(matches!(result, Err(ConfigError::TomlError { .. })));
    }

    #[test]
    fn load_config_rejects_invalid_search_url() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, r#"search-url = "not a url""#).unwrap();

        let result = load_config(&path);
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }

    #[test]
    fn load_config_rejects_blank_user_agent() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, r#"user-agent = "  ""#).unwrap();

        let result = load_config(&path);
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }

    #[test]
    fn load_config_missing_file_is_an_io_error() {
        let temp = TempDir::new().unwrap();

        let result = load_config(&temp.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::IoError { .. })));
    }
}
