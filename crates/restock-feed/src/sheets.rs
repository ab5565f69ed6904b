//! HTTP client for the key-authenticated Google Sheets values API.
//!
//! Wraps `reqwest` with typed error handling and response deserialization
//! for the one endpoint the feed needs:
//! `GET /v4/spreadsheets/{sheet_id}/values/{range}?key={api_key}`.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::Deserialize;

use crate::error::FeedError;

const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com/";

/// Fixed value range: all twelve product columns, starting below the header
/// row. The values API returns cells positionally, so the sheet must keep
/// the canonical column order.
const VALUES_RANGE: &str = "Products!A2:L";

/// Response envelope from the values endpoint. `values` is omitted entirely
/// when the range is empty.
#[derive(Debug, Deserialize)]
struct ValuesResponse {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

/// Client for the Google Sheets values API.
///
/// Use [`SheetsClient::new`] for production or
/// [`SheetsClient::with_base_url`] to point at a mock server in tests.
pub struct SheetsClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl SheetsClient {
    /// Creates a client pointed at the production Sheets API.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, FeedError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`FeedError::InvalidUrl`] if `base_url` is
    /// not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, FeedError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Normalise: exactly one trailing slash so Url::join appends to the
        // path instead of replacing the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| FeedError::InvalidUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Fetches the product rows for `sheet_id` from the fixed range.
    ///
    /// Returns the raw positional cell rows; mapping to records is the
    /// caller's job (see [`crate::normalize::map_rows`]).
    ///
    /// # Errors
    ///
    /// - [`FeedError::UnexpectedStatus`] — any non-2xx response (including
    ///   the 400/403 the API returns for a bad key).
    /// - [`FeedError::Http`] — network, TLS, or timeout failure.
    /// - [`FeedError::Deserialize`] — response body is not the expected
    ///   values envelope.
    /// - [`FeedError::InvalidUrl`] — `sheet_id` does not form a valid path.
    pub async fn fetch_rows(&self, sheet_id: &str) -> Result<Vec<Vec<String>>, FeedError> {
        let path = format!("v4/spreadsheets/{sheet_id}/values/{VALUES_RANGE}");
        let mut url = self
            .base_url
            .join(&path)
            .map_err(|e| FeedError::InvalidUrl {
                url: format!("{}{path}", self.base_url),
                reason: e.to_string(),
            })?;
        url.query_pairs_mut().append_pair("key", &self.api_key);

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(FeedError::UnexpectedStatus {
                status: status.as_u16(),
                // The key travels as a query parameter; log the path only.
                url: format!("{}{path}", self.base_url),
            });
        }

        let body = response.text().await?;
        let parsed =
            serde_json::from_str::<ValuesResponse>(&body).map_err(|e| FeedError::Deserialize {
                context: format!("values range for sheet {sheet_id}"),
                source: e,
            })?;

        Ok(parsed.values)
    }
}
