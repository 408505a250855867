mod client;
mod feed_error;
mod models;

pub use client::HttpFeedSource;
pub use feed_error::FeedError;
pub use models::{DiscoverMovie, DiscoverPage};

use crate::domain::DateWindow;

/// The two upstream reads a page needs.
///
/// Implementations must be shareable across the server's worker threads.
pub trait FeedSource: Send + Sync {
    /// Raw RSS document of the review feed.
    fn fetch_review_feed(&self) -> Result<String, FeedError>;

    /// One page of discovery results released inside `window`.
    fn discover_movies(&self, window: &DateWindow) -> Result<Vec<DiscoverMovie>, FeedError>;
}
