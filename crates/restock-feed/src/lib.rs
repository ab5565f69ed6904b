pub mod client;
pub mod error;
pub mod feed;
pub mod normalize;
pub mod parse;
pub mod sheets;

pub use client::CsvFeedClient;
pub use error::FeedError;
pub use feed::{FeedConfig, ProductFeed};
pub use normalize::{parse_feed, ParseOutcome, SkipReason, SkippedRow};
pub use sheets::SheetsClient;
