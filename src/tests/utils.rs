use crate::domain::DateWindow;
use crate::feeds::{DiscoverMovie, FeedError, FeedSource};
use crate::loader::PageLoader;
use chrono::NaiveDate;
use std::sync::{Arc, Mutex};

/// A canned review feed: three films, deliberately out of watched-date order.
pub fn sample_feed() -> String {
    r#"<?xml version="1.0" encoding="utf-8"?>
<rss version="2.0" xmlns:letterboxd="https://letterboxd.com" xmlns:tmdb="https://themoviedb.org" xmlns:dc="http://purl.org/dc/elements/1.1/">
  <channel>
    <title>Letterboxd - Tardy Critic</title>
    <link>https://letterboxd.com/tardycritic/</link>
    <description>Letterboxd - Tardy Critic</description>
    <item>
      <title>Boyhood, 2014 - ★★★★</title>
      <link>https://letterboxd.com/tardycritic/film/boyhood/</link>
      <pubDate>Tue, 2 Jan 2024 09:00:00 +1300</pubDate>
      <letterboxd:watchedDate>2024-01-01</letterboxd:watchedDate>
      <letterboxd:rewatch>No</letterboxd:rewatch>
      <letterboxd:filmTitle>Boyhood</letterboxd:filmTitle>
      <letterboxd:filmYear>2014</letterboxd:filmYear>
      <letterboxd:memberRating>4.0</letterboxd:memberRating>
      <description><![CDATA[ <p><img src="https://a.ltrbxd.com/boyhood.jpg"/></p> <p>Twelve years, one film.</p> ]]></description>
    </item>
    <item>
      <title>Whiplash, 2014 - ★★★★½</title>
      <link>https://letterboxd.com/tardycritic/film/whiplash-2014/</link>
      <pubDate>Sat, 2 Mar 2024 09:00:00 +1300</pubDate>
      <letterboxd:watchedDate>2024-03-01</letterboxd:watchedDate>
      <letterboxd:rewatch>Yes</letterboxd:rewatch>
      <letterboxd:filmTitle>Whiplash</letterboxd:filmTitle>
      <letterboxd:filmYear>2014</letterboxd:filmYear>
      <letterboxd:memberRating>4.5</letterboxd:memberRating>
      <description><![CDATA[ <p><img src="https://a.ltrbxd.com/whiplash.jpg"/></p> <p>Not quite my tempo.</p> ]]></description>
    </item>
    <item>
      <title>Nightcrawler, 2014</title>
      <link>https://letterboxd.com/tardycritic/film/nightcrawler/</link>
      <pubDate>Fri, 16 Jun 2023 09:00:00 +1200</pubDate>
      <letterboxd:watchedDate>2023-06-15</letterboxd:watchedDate>
      <letterboxd:filmTitle>Nightcrawler</letterboxd:filmTitle>
      <letterboxd:filmYear>2014</letterboxd:filmYear>
      <description><![CDATA[ <p><img src="https://a.ltrbxd.com/nightcrawler.jpg"/></p> <p>Gyllenhaal at his gauntest.</p> ]]></description>
    </item>
  </channel>
</rss>"#
        .to_string()
}

pub fn discover_movie(id: u64, release: &str, votes: u32) -> DiscoverMovie {
    DiscoverMovie {
        id,
        title: format!("Anniversary {id}"),
        release_date: Some(release.to_string()),
        poster_path: Some(format!("/poster-{id}.jpg")),
        vote_count: votes,
        adult: false,
    }
}

/// In-memory `FeedSource`. `None` for the feed simulates an outage; `None` for
/// the movies simulates a missing API key.
pub struct FixtureSource {
    feed: Option<String>,
    movies: Option<Vec<DiscoverMovie>>,
    windows: Arc<Mutex<Vec<DateWindow>>>,
}

impl FixtureSource {
    pub fn new(feed: Option<String>, movies: Option<Vec<DiscoverMovie>>) -> Self {
        Self {
            feed,
            movies,
            windows: Arc::default(),
        }
    }

    /// Windows passed to `discover_movies`, in call order.
    pub fn windows(&self) -> Arc<Mutex<Vec<DateWindow>>> {
        Arc::clone(&self.windows)
    }
}

impl FeedSource for FixtureSource {
    fn fetch_review_feed(&self) -> Result<String, FeedError> {
        self.feed.clone().ok_or(FeedError::Status {
            status: 503,
            url: "https://letterboxd.test/rss/".to_string(),
        })
    }

    fn discover_movies(&self, window: &DateWindow) -> Result<Vec<DiscoverMovie>, FeedError> {
        if let Ok(mut seen) = self.windows.lock() {
            seen.push(*window);
        }
        self.movies.clone().ok_or(FeedError::MissingApiKey)
    }
}

/// Loader pinned to 15 May 2024 over the given fixture.
pub fn test_loader(source: FixtureSource) -> PageLoader {
    PageLoader::new(Box::new(source), "https://img.test/w342")
        .with_clock(|| NaiveDate::from_ymd_opt(2024, 5, 15).unwrap())
}
