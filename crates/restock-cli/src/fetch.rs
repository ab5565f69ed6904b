use restock_feed::{FeedConfig, ProductFeed};

/// Loads the configured feed and prints the catalog as pretty JSON.
pub async fn run() -> anyhow::Result<()> {
    let config = restock_core::load_app_config()?;

    let feed = ProductFeed::new(FeedConfig {
        csv_url: config.sheets_csv_url.clone(),
        sheet_id: config.sheet_id.clone(),
        api_key: config.sheets_api_key.clone(),
        timeout_secs: config.feed_timeout_secs,
        user_agent: config.user_agent.clone(),
    });

    let products = feed.load().await;
    println!("{}", serde_json::to_string_pretty(&products)?);
    Ok(())
}
