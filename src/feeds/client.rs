// client.rs
use crate::config::Config;
use crate::domain::DateWindow;
use crate::feeds::{DiscoverMovie, DiscoverPage, FeedError, FeedSource};
use reqwest::blocking::Client;
use reqwest::header::{HeaderValue, ACCEPT};
use tracing::{debug, info};
use url::Url;

const USER_AGENT: &str = concat!("tardy_critic/", env!("CARGO_PKG_VERSION"));

/// Fetches both upstreams over HTTP with a single shared client.
pub struct HttpFeedSource {
    client: Client,
    rss_url: Url,
    discover_url: String,
    api_key: Option<String>,
    region: String,
}

impl HttpFeedSource {
    pub fn new(cfg: &Config) -> Result<Self, FeedError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(cfg.http_timeout)
            .build()?;

        Ok(Self {
            client,
            rss_url: cfg.letterboxd_rss_url.clone(),
            discover_url: format!(
                "{}/discover/movie",
                cfg.tmdb_base_url.as_str().trim_end_matches('/')
            ),
            api_key: cfg.tmdb_api_key.clone(),
            region: cfg.tmdb_region.clone(),
        })
    }

    fn get_text(&self, req: reqwest::blocking::RequestBuilder) -> Result<String, FeedError> {
        let resp = req.send()?;
        let status = resp.status();

        if !status.is_success() {
            return Err(FeedError::Status {
                status: status.as_u16(),
                url: resp.url().to_string(),
            });
        }

        Ok(resp.text()?)
    }
}

impl FeedSource for HttpFeedSource {
    fn fetch_review_feed(&self) -> Result<String, FeedError> {
        let start = std::time::Instant::now();

        let body = self.get_text(
            self.client
                .get(self.rss_url.clone())
                .header(ACCEPT, HeaderValue::from_static("application/rss+xml, application/xml")),
        )?;

        info!(
            url = %self.rss_url,
            bytes = body.len(),
            elapsed = ?start.elapsed(),
            "fetched review feed"
        );
        Ok(body)
    }

    fn discover_movies(&self, window: &DateWindow) -> Result<Vec<DiscoverMovie>, FeedError> {
        let api_key = self.api_key.as_deref().ok_or(FeedError::MissingApiKey)?;
        let start = std::time::Instant::now();

        let gte = window.start.format("%Y-%m-%d").to_string();
        let lte = window.end.format("%Y-%m-%d").to_string();
        let params = [
            ("api_key", api_key),
            ("region", self.region.as_str()),
            ("sort_by", "popularity.desc"),
            ("primary_release_date.gte", gte.as_str()),
            ("primary_release_date.lte", lte.as_str()),
            ("page", "1"),
        ];

        let body = self.get_text(self.client.get(&self.discover_url).query(&params))?;
        let page: DiscoverPage = serde_json::from_str(&body)?;

        debug!(
            page = page.page,
            total_results = page.total_results,
            "discovery page decoded"
        );
        info!(
            from = %gte,
            to = %lte,
            results = page.results.len(),
            elapsed = ?start.elapsed(),
            "fetched anniversary candidates"
        );
        Ok(page.results)
    }
}
