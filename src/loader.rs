// src/loader.rs

use crate::domain::{match_anniversaries, normalize_feed, Anniversaries, DateWindow, FilmReview};
use crate::feeds::{FeedError, FeedSource};
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use std::thread;
use tracing::{debug, error, warn};

/// Everything the home page renders, rebuilt on every request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HomeData {
    /// Most recently watched first.
    pub films: Vec<FilmReview>,
    pub anniversaries: Anniversaries,
}

impl HomeData {
    /// The featured review: the most recently watched film.
    pub fn latest(&self) -> Option<&FilmReview> {
        self.films.first()
    }
}

pub fn utc_today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Fetches and normalizes both upstreams for a page view.
///
/// Upstream failures are logged and degrade to empty lists; loading never
/// fails.
pub struct PageLoader {
    source: Box<dyn FeedSource>,
    image_base_url: String,
    today: fn() -> NaiveDate,
}

impl PageLoader {
    pub fn new(source: Box<dyn FeedSource>, image_base_url: impl Into<String>) -> Self {
        Self {
            source,
            image_base_url: image_base_url.into(),
            today: utc_today,
        }
    }

    /// Replaces the UTC clock, for pinning the date in tests.
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn load_home(&self) -> HomeData {
        self.load_home_on((self.today)())
    }

    pub fn load_home_on(&self, today: NaiveDate) -> HomeData {
        let window = DateWindow::around_tenth_anniversary(today);

        // The two reads are independent; run the feed on its own thread.
        let (feed, movies) = thread::scope(|s| {
            let feed = s.spawn(|| self.source.fetch_review_feed());
            let movies = self.source.discover_movies(&window);
            (feed.join(), movies)
        });

        let films = match feed {
            Ok(Ok(xml)) => normalize_feed(&xml),
            Ok(Err(e)) => {
                warn!(error = %e, "review feed unavailable, rendering without films");
                Vec::new()
            }
            Err(_) => {
                error!("review feed fetch panicked");
                Vec::new()
            }
        };

        let anniversaries = match movies {
            Ok(movies) => match_anniversaries(&movies, today, &self.image_base_url),
            Err(FeedError::MissingApiKey) => {
                debug!("no discovery API key, skipping anniversaries");
                Anniversaries::default()
            }
            Err(e) => {
                warn!(error = %e, "anniversary candidates unavailable");
                Anniversaries::default()
            }
        };

        HomeData {
            films,
            anniversaries,
        }
    }
}
