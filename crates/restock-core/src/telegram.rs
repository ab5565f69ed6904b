//! Telegram deep-link construction for checkout hand-off.
//!
//! Checkout is delegated entirely to Telegram: the storefront never takes
//! payment itself, it opens a pre-filled chat with the shop bot. `BotLinks`
//! is a plain capability object built once from config by the composition
//! root and passed by reference — there is no hidden global instance.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters escaped in the `text` query component. Matches JavaScript's
/// `encodeURIComponent`, which the bot's start-parameter handling expects.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Builds `t.me` deep links for a configured shop bot.
#[derive(Debug, Clone)]
pub struct BotLinks {
    bot_username: String,
}

impl BotLinks {
    #[must_use]
    pub fn new(bot_username: &str) -> Self {
        Self {
            bot_username: bot_username.to_owned(),
        }
    }

    /// Deep link that opens the shop bot with a purchase intent for one
    /// listing: `https://t.me/<bot>?start=product_<id>&text=<message>`.
    ///
    /// The message is the Russian storefront phrasing `Хочу купить: <title>`,
    /// URL-encoded.
    #[must_use]
    pub fn product_link(&self, product_id: &str, product_title: &str) -> String {
        let message = format!("Хочу купить: {product_title}");
        let encoded = utf8_percent_encode(&message, COMPONENT);
        format!(
            "https://t.me/{}?start=product_{product_id}&text={encoded}",
            self.bot_username
        )
    }

    /// Pre-filled direct-inquiry link: `https://t.me/<bot>?text=<message>`.
    #[must_use]
    pub fn inquiry_link(&self, message: &str) -> String {
        let encoded = utf8_percent_encode(message, COMPONENT);
        format!("https://t.me/{}?text={encoded}", self.bot_username)
    }
}
