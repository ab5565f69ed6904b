//! Total feed-loading facade: configuration in, `Vec<Product>` out.
//!
//! Everything below this module returns `Result`; this module is the
//! boundary where feed failures stop. The catalog renders whatever comes
//! back, so `load` never raises — an unconfigured feed and an unreachable
//! feed both degrade to an empty list, distinguishable only in the logs.

use restock_core::Product;
use tracing::{error, info, warn};

use crate::client::CsvFeedClient;
use crate::error::FeedError;
use crate::normalize::{map_rows, parse_feed, ParseOutcome};
use crate::sheets::SheetsClient;

/// Feed source settings, passed in explicitly at construction. There are no
/// process-global reads inside the fetcher; tests inject a config without
/// touching the environment.
#[derive(Clone)]
pub struct FeedConfig {
    /// Published-to-web CSV endpoint. Preferred when set.
    pub csv_url: Option<String>,
    /// Spreadsheet identifier for the values-API path.
    pub sheet_id: Option<String>,
    /// API key paired with `sheet_id`; both must be set for the API path.
    pub api_key: Option<String>,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            csv_url: None,
            sheet_id: None,
            api_key: None,
            timeout_secs: 30,
            user_agent: restock_core::config::DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl std::fmt::Debug for FeedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedConfig")
            .field("csv_url", &self.csv_url)
            .field("sheet_id", &self.sheet_id)
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// The product feed: fetches, parses, and degrades gracefully.
pub struct ProductFeed {
    config: FeedConfig,
    /// Sheets API base-URL override for tests; `None` means production.
    sheets_base_url: Option<String>,
}

impl ProductFeed {
    #[must_use]
    pub fn new(config: FeedConfig) -> Self {
        Self {
            config,
            sheets_base_url: None,
        }
    }

    /// Like [`ProductFeed::new`], but points the Sheets client at a custom
    /// base URL (for testing with wiremock).
    #[must_use]
    pub fn with_sheets_base_url(config: FeedConfig, base_url: &str) -> Self {
        Self {
            config,
            sheets_base_url: Some(base_url.to_owned()),
        }
    }

    /// Loads the catalog from the configured source.
    ///
    /// Prefers the CSV URL when configured, otherwise the sheet-id/API-key
    /// pair. Total: no source configured, a transport failure, and a
    /// malformed payload all return an empty list after logging. Rejected
    /// rows are logged per-row and the remaining records returned.
    pub async fn load(&self) -> Vec<Product> {
        match self.try_load().await {
            Ok(Some(outcome)) => {
                for row in &outcome.skipped {
                    warn!(line = row.line, reason = %row.reason, "skipping malformed feed row");
                }
                info!(
                    products = outcome.products.len(),
                    skipped = outcome.skipped.len(),
                    "product feed loaded"
                );
                outcome.products
            }
            Ok(None) => {
                warn!("no product feed configured; serving an empty catalog");
                Vec::new()
            }
            Err(e) => {
                error!(error = %e, "product feed fetch failed; serving an empty catalog");
                Vec::new()
            }
        }
    }

    /// `Ok(None)` means no source is configured; errors are transport or
    /// payload failures from a configured source.
    async fn try_load(&self) -> Result<Option<ParseOutcome>, FeedError> {
        if let Some(url) = &self.config.csv_url {
            let client = CsvFeedClient::new(self.config.timeout_secs, &self.config.user_agent)?;
            let payload = client.fetch(url).await?;
            return Ok(Some(parse_feed(&payload)));
        }

        if let (Some(sheet_id), Some(api_key)) = (&self.config.sheet_id, &self.config.api_key) {
            let client = match &self.sheets_base_url {
                Some(base) => SheetsClient::with_base_url(
                    api_key,
                    self.config.timeout_secs,
                    &self.config.user_agent,
                    base,
                )?,
                None => SheetsClient::new(api_key, self.config.timeout_secs, &self.config.user_agent)?,
            };
            let rows = client.fetch_rows(sheet_id).await?;
            return Ok(Some(map_rows(rows)));
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_config_default_has_no_sources() {
        let config = FeedConfig::default();
        assert!(config.csv_url.is_none());
        assert!(config.sheet_id.is_none());
        assert!(config.api_key.is_none());
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn feed_config_debug_redacts_api_key() {
        let config = FeedConfig {
            api_key: Some("super-secret".to_owned()),
            ..FeedConfig::default()
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("[redacted]"));
    }

    #[tokio::test]
    async fn load_with_partial_api_config_is_unconfigured() {
        // Sheet id without a key: no source, empty catalog, no network.
        let config = FeedConfig {
            sheet_id: Some("sheet-123".to_owned()),
            ..FeedConfig::default()
        };
        let products = ProductFeed::new(config).load().await;
        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn load_with_key_but_no_sheet_id_is_unconfigured() {
        let config = FeedConfig {
            api_key: Some("key-456".to_owned()),
            ..FeedConfig::default()
        };
        let products = ProductFeed::new(config).load().await;
        assert!(products.is_empty());
    }
}
