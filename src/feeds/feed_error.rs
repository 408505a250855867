use thiserror::Error;

/// Failures while fetching or decoding an upstream feed.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Upstream returned HTTP {status}: {url}")]
    Status { status: u16, url: String },
    #[error("RSS parse error: {0}")]
    RssParse(#[from] rss::Error),
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
    #[error("Discovery API key is not configured")]
    MissingApiKey,
}
