use thiserror::Error;

use crate::app_config::AppConfig;

pub const DEFAULT_USER_AGENT: &str = "restock/0.1 (feed-ingestion)";
pub const DEFAULT_BOT_USERNAME: &str = "your_bot_username";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a present env var holds an invalid value.
/// Absent feed variables are not errors; the feed is simply unconfigured.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a present env var holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    // Empty string counts as unset so a blank line in .env doesn't turn
    // into a configured-but-unreachable feed source.
    let optional = |var: &str| -> Option<String> { lookup(var).ok().filter(|v| !v.is_empty()) };

    let sheets_csv_url = optional("RESTOCK_SHEETS_CSV_URL");
    let sheet_id = optional("RESTOCK_SHEET_ID");
    let sheets_api_key = optional("RESTOCK_SHEETS_API_KEY");

    let telegram_bot_username = or_default("RESTOCK_TELEGRAM_BOT_USERNAME", DEFAULT_BOT_USERNAME);
    let feed_timeout_secs = parse_u64("RESTOCK_FEED_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("RESTOCK_USER_AGENT", DEFAULT_USER_AGENT);
    let log_level = or_default("RESTOCK_LOG_LEVEL", "info");

    Ok(AppConfig {
        sheets_csv_url,
        sheet_id,
        sheets_api_key,
        telegram_bot_username,
        feed_timeout_secs,
        user_agent,
        log_level,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn build_app_config_succeeds_with_empty_env() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).expect("empty env should be valid");
        assert!(cfg.sheets_csv_url.is_none());
        assert!(cfg.sheet_id.is_none());
        assert!(cfg.sheets_api_key.is_none());
        assert_eq!(cfg.telegram_bot_username, DEFAULT_BOT_USERNAME);
        assert_eq!(cfg.feed_timeout_secs, 30);
        assert_eq!(cfg.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn build_app_config_reads_csv_url() {
        let mut map = HashMap::new();
        map.insert("RESTOCK_SHEETS_CSV_URL", "https://docs.example.com/pub.csv");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(
            cfg.sheets_csv_url.as_deref(),
            Some("https://docs.example.com/pub.csv")
        );
    }

    #[test]
    fn build_app_config_treats_empty_values_as_unset() {
        let mut map = HashMap::new();
        map.insert("RESTOCK_SHEETS_CSV_URL", "");
        map.insert("RESTOCK_SHEET_ID", "");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert!(cfg.sheets_csv_url.is_none());
        assert!(cfg.sheet_id.is_none());
    }

    #[test]
    fn build_app_config_reads_api_pair() {
        let mut map = HashMap::new();
        map.insert("RESTOCK_SHEET_ID", "sheet-123");
        map.insert("RESTOCK_SHEETS_API_KEY", "key-456");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.sheet_id.as_deref(), Some("sheet-123"));
        assert_eq!(cfg.sheets_api_key.as_deref(), Some("key-456"));
    }

    #[test]
    fn build_app_config_timeout_override() {
        let mut map = HashMap::new();
        map.insert("RESTOCK_FEED_TIMEOUT_SECS", "60");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.feed_timeout_secs, 60);
    }

    #[test]
    fn build_app_config_timeout_invalid() {
        let mut map = HashMap::new();
        map.insert("RESTOCK_FEED_TIMEOUT_SECS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "RESTOCK_FEED_TIMEOUT_SECS"),
            "expected InvalidEnvVar(RESTOCK_FEED_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_bot_username_override() {
        let mut map = HashMap::new();
        map.insert("RESTOCK_TELEGRAM_BOT_USERNAME", "resale_vault_bot");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.telegram_bot_username, "resale_vault_bot");
    }

    #[test]
    fn debug_redacts_api_key() {
        let mut map = HashMap::new();
        map.insert("RESTOCK_SHEETS_API_KEY", "super-secret");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        let rendered = format!("{cfg:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("[redacted]"));
    }
}
