use restock_core::BotLinks;

/// Prints the Telegram purchase deep link for one listing, using the
/// configured bot username.
pub fn run(id: &str, title: &str) -> anyhow::Result<()> {
    let config = restock_core::load_app_config()?;
    let links = BotLinks::new(&config.telegram_bot_username);
    println!("{}", links.product_link(id, title));
    Ok(())
}
