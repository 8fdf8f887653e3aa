//! Bug tracker search client.
//!
//! The tracker exposes an XML issue view over a JQL search endpoint; this
//! client is a read-only consumer of it. One GET per issue key, no retry.

mod error;

pub use error::TrackerError;

use crate::config::TrackerConfig;
use crate::problem_list::IssueKey;
use reqwest::Client;
use tracing::{debug, info_span, Instrument};
use url::Url;

/// Read-only client for the tracker's XML search endpoint.
pub struct TrackerClient {
    client: Client,
    search_url: Url,
    user_agent: String,
}

impl TrackerClient {
    /// Creates a client from the given settings.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::InvalidEndpoint`] if the configured search
    /// URL does not parse.
    pub fn new(config: &TrackerConfig) -> Result<Self, TrackerError> {
        let search_url =
            Url::parse(&config.search_url).map_err(|_| TrackerError::InvalidEndpoint {
                url: config.search_url.clone(),
            })?;

        Ok(Self {
            client: Client::new(),
            search_url,
            user_agent: config.user_agent.clone(),
        })
    }

    /// Builds the search URL querying for a single issue key.
    #[must_use]
    pub fn search_url_for(&self, key: &IssueKey) -> Url {
        let mut url = self.search_url.clone();
        url.query_pairs_mut()
            .append_pair("jqlQuery", &format!("issuekey={key}"));
        url
    }

    /// Fetches the raw XML search result for one issue key.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::RequestError`] on transport failure and
    /// [`TrackerError::HttpStatus`] when the tracker answers with a
    /// non-success status.
    pub async fn fetch_issue(&self, key: &IssueKey) -> Result<String, TrackerError> {
        let url = self.search_url_for(key);
        let span = info_span!("fetch_issue", key = %key);

        async {
            debug!(url = %url, "Requesting issue status");

            let response = self
                .client
                .get(url)
                .header(reqwest::header::USER_AGENT, self.user_agent.as_str())
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                return Err(TrackerError::HttpStatus {
                    key: key.to_string(),
                    status: status.as_u16(),
                });
            }

            Ok(response.text().await?)
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> IssueKey {
        IssueKey::new(s.to_string())
    }

    #[test]
    fn search_url_encodes_the_jql_query() {
        let client = TrackerClient::new(&TrackerConfig::default()).unwrap();

        let url = client.search_url_for(&key("JDK-8150225"));
        assert_eq!(
            url.as_str(),
            "https://bugs.openjdk.java.net/sr/jira.issueviews:searchrequest-xml/temp/SearchRequest.xml?jqlQuery=issuekey%3DJDK-8150225"
        );
    }

    #[test]
    fn rejects_invalid_endpoint() {
        let config = TrackerConfig {
            search_url: "not a url".to_string(),
            ..TrackerConfig::default()
        };

        let result = TrackerClient::new(&config);
        assert!(matches!(result, Err(TrackerError::InvalidEndpoint { .. })));
    }

    #[tokio::test]
    async fn connection_failure_is_a_request_error() {
        // nothing listens on port 1
        let config = TrackerConfig {
            search_url: "http://127.0.0.1:1/search.xml".to_string(),
            ..TrackerConfig::default()
        };
        let client = TrackerClient::new(&config).unwrap();

        let result = client.fetch_issue(&key("JDK-1")).await;
        assert!(matches!(result, Err(TrackerError::RequestError(_))));
    }
}
