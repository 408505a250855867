use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;
use url::Url;

pub const DEFAULT_RSS_URL: &str = "https://letterboxd.com/tardycritic/rss/";
pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_TMDB_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w342";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} is not a valid URL: {source}")]
    InvalidUrl {
        name: &'static str,
        #[source]
        source: url::ParseError,
    },
    #[error("{name} has an invalid value: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Runtime configuration, read once at startup and handed to the components
/// that need it.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub letterboxd_rss_url: Url,
    /// Discovery API key. Without one the anniversary lists stay empty.
    pub tmdb_api_key: Option<String>,
    pub tmdb_base_url: Url,
    pub tmdb_region: String,
    /// Prefix joined with a result's `poster_path`.
    pub tmdb_image_base_url: String,
    pub http_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            letterboxd_rss_url: Url::parse(DEFAULT_RSS_URL).expect("default RSS URL is valid"),
            tmdb_api_key: None,
            tmdb_base_url: Url::parse(DEFAULT_TMDB_BASE_URL)
                .expect("default TMDB URL is valid"),
            tmdb_region: "US".to_string(),
            tmdb_image_base_url: DEFAULT_TMDB_IMAGE_BASE_URL.to_string(),
            http_timeout: Duration::from_secs(30),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a config from any key lookup, falling back to the defaults for
    /// unset or blank keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Config::default();

        let bind_addr = match get("BIND_ADDR") {
            Some(v) => v.parse::<SocketAddr>().map_err(|_| ConfigError::InvalidValue {
                name: "BIND_ADDR",
                value: v,
            })?,
            None => defaults.bind_addr,
        };

        let max_workers = match get("MAX_WORKERS") {
            Some(v) => v
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::InvalidValue {
                    name: "MAX_WORKERS",
                    value: v,
                })?,
            None => defaults.max_workers,
        };

        let http_timeout = match get("HTTP_TIMEOUT_SECS") {
            Some(v) => v
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .ok_or(ConfigError::InvalidValue {
                    name: "HTTP_TIMEOUT_SECS",
                    value: v,
                })?,
            None => defaults.http_timeout,
        };

        Ok(Self {
            bind_addr,
            max_workers,
            letterboxd_rss_url: parse_url("LETTERBOXD_RSS_URL", get("LETTERBOXD_RSS_URL"))?
                .unwrap_or(defaults.letterboxd_rss_url),
            tmdb_api_key: get("TMDB_API_KEY"),
            tmdb_base_url: parse_url("TMDB_BASE_URL", get("TMDB_BASE_URL"))?
                .unwrap_or(defaults.tmdb_base_url),
            tmdb_region: get("TMDB_REGION").unwrap_or(defaults.tmdb_region),
            tmdb_image_base_url: parse_url("TMDB_IMAGE_BASE_URL", get("TMDB_IMAGE_BASE_URL"))?
                .map(|u| u.to_string())
                .unwrap_or(defaults.tmdb_image_base_url),
            http_timeout,
        })
    }
}

fn parse_url(name: &'static str, value: Option<String>) -> Result<Option<Url>, ConfigError> {
    value
        .map(|v| Url::parse(&v).map_err(|source| ConfigError::InvalidUrl { name, source }))
        .transpose()
}
