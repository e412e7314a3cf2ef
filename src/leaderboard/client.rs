use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use super::error::FetchError;
use super::models::{LeaderboardEnvelope, LeaderboardResponse, RequestFilter};
use crate::config::Config;
use crate::constants::{LEADERBOARD_ENDPOINT, USER_AGENT};

/// Anything that can answer a leaderboard query.
#[async_trait]
pub trait LeaderboardSource: Send + Sync {
    /// Fetch one page of the leaderboard.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] describing why no data was produced.
    async fn fetch(&self, filter: &RequestFilter) -> Result<LeaderboardResponse, FetchError>;
}

/// HTTP client for the leaderboard endpoint.
#[derive(Debug, Clone)]
pub struct LeaderboardClient {
    http: Client,
    endpoint: Url,
}

impl LeaderboardClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint URL cannot be built or the HTTP
    /// client fails to initialize.
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        // Without a configured timeout the transport default applies.
        if let Some(timeout) = config.http_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to create HTTP client")?;

        Self::with_http_client(http, &config.base_url)
    }

    /// Create a client around an existing `reqwest::Client`.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not a valid absolute URL.
    pub fn with_http_client(http: Client, base_url: &str) -> Result<Self> {
        let endpoint = endpoint_url(base_url)?;
        Ok(Self { http, endpoint })
    }

    /// The full request URL for a filter.
    #[must_use]
    pub fn request_url(&self, filter: &RequestFilter) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().extend_pairs(filter.query_pairs());
        url
    }
}

#[async_trait]
impl LeaderboardSource for LeaderboardClient {
    async fn fetch(&self, filter: &RequestFilter) -> Result<LeaderboardResponse, FetchError> {
        let url = self.request_url(filter);
        debug!(url = %url, "Fetching leaderboard");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        let envelope = match LeaderboardEnvelope::decode(&body) {
            Ok(envelope) => envelope,
            // An error page without an envelope says more through its status
            // than through the parse failure.
            Err(_) if !status.is_success() => {
                warn!(status = %status, "Leaderboard service returned a non-JSON error");
                return Err(FetchError::Application(format!(
                    "Leaderboard service responded with HTTP {status}"
                )));
            }
            Err(err) => return Err(err),
        };

        envelope.into_result()
    }
}

/// Resolve the endpoint path against the configured base URL.
fn endpoint_url(base_url: &str) -> Result<Url> {
    let base = Url::parse(base_url).with_context(|| format!("Invalid base URL: {base_url}"))?;
    base.join(LEADERBOARD_ENDPOINT)
        .with_context(|| format!("Cannot resolve {LEADERBOARD_ENDPOINT} against {base_url}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaderboard::Period;

    #[test]
    fn test_request_url_encodes_filter() {
        let client = LeaderboardClient::with_http_client(Client::new(), "https://gifts.example")
            .unwrap();
        let url = client.request_url(&RequestFilter::new(Period::Weekly, 2, 25));
        assert_eq!(
            url.as_str(),
            "https://gifts.example/api/leaderboard?period=weekly&page=2&limit=25"
        );
    }

    #[test]
    fn test_endpoint_replaces_base_path() {
        let client =
            LeaderboardClient::with_http_client(Client::new(), "https://gifts.example/app/")
                .unwrap();
        let url = client.request_url(&RequestFilter::default());
        assert_eq!(url.path(), "/api/leaderboard");
        assert_eq!(url.query(), Some("period=all-time&page=1&limit=50"));
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(LeaderboardClient::with_http_client(Client::new(), "not a url").is_err());
    }
}
