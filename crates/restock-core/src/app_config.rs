/// Application configuration resolved from the environment at startup.
///
/// Every feed-related setting is optional: an unconfigured feed source is a
/// normal empty-catalog case, not an error. See [`crate::config`] for the
/// loading rules.
#[derive(Clone)]
pub struct AppConfig {
    /// Published-to-web CSV endpoint for the product sheet.
    pub sheets_csv_url: Option<String>,
    /// Spreadsheet identifier for the key-authenticated Sheets API path.
    pub sheet_id: Option<String>,
    /// API key paired with `sheet_id`. Both must be present for the API
    /// path to be considered configured.
    pub sheets_api_key: Option<String>,
    /// Bot username used to build `t.me` deep links.
    pub telegram_bot_username: String,
    pub feed_timeout_secs: u64,
    pub user_agent: String,
    pub log_level: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("sheets_csv_url", &self.sheets_csv_url)
            .field("sheet_id", &self.sheet_id)
            .field(
                "sheets_api_key",
                &self.sheets_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("telegram_bot_username", &self.telegram_bot_username)
            .field("feed_timeout_secs", &self.feed_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("log_level", &self.log_level)
            .finish()
    }
}
