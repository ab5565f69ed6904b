//! HTTP client for the published-to-web CSV export of the product sheet.

use std::time::Duration;

use reqwest::Client;

use crate::error::FeedError;

/// Fetches the raw CSV payload from a published-sheet URL.
///
/// One request per fetch, no retry and no backoff: the feed is best-effort
/// and the caller degrades to an empty catalog on failure. Non-2xx statuses
/// surface as typed errors rather than being read as payload.
pub struct CsvFeedClient {
    client: Client,
}

impl CsvFeedClient {
    /// Creates a `CsvFeedClient` with the configured request timeout and
    /// `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, FeedError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches the CSV payload from `url` as text.
    ///
    /// # Errors
    ///
    /// - [`FeedError::UnexpectedStatus`] — any non-2xx response.
    /// - [`FeedError::Http`] — network, TLS, or timeout failure.
    pub async fn fetch(&self, url: &str) -> Result<String, FeedError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(FeedError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        Ok(response.text().await?)
    }
}
