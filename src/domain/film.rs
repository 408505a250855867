// src/domain/film.rs

use crate::domain::markup::{poster_url, strip_poster_paragraph};
use crate::feeds::FeedError;
use chrono::NaiveDate;
use rss::{Channel, Item};
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, error, warn};

/// Prefix Letterboxd uses for its RSS extension elements.
const LETTERBOXD_NS: &str = "letterboxd";

/// One reviewed film, flattened out of a feed `<item>`.
///
/// Fields the feed may omit are `Option`s; nothing is defaulted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilmReview {
    pub title: Option<String>,
    pub year: Option<String>,
    /// Canonical review URL. Unique within a feed.
    pub link: String,
    pub image_url: Option<String>,
    /// RFC-822 `pubDate`, empty when the item has none.
    pub published_at: String,
    pub watched_date: Option<NaiveDate>,
    pub rating: Option<String>,
    pub review_html: String,
    pub rewatched: bool,
}

impl FilmReview {
    /// Builds a review from a feed item. Items without a link are rejected,
    /// since the link is the only stable identity the feed offers.
    pub fn from_item(item: &Item) -> Option<Self> {
        let link = item.link().map(str::trim).filter(|l| !l.is_empty())?;
        let description = item.description().unwrap_or_default();

        let watched_date = letterboxd_field(item, "watchedDate").and_then(|raw| {
            NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                .map_err(|e| debug!(link, raw, error = %e, "unparsable watched date"))
                .ok()
        });

        Some(Self {
            title: letterboxd_field(item, "filmTitle").map(str::to_string),
            year: letterboxd_field(item, "filmYear").map(str::to_string),
            link: link.to_string(),
            image_url: poster_url(description),
            published_at: item.pub_date().unwrap_or_default().to_string(),
            watched_date,
            rating: letterboxd_field(item, "memberRating").map(str::to_string),
            review_html: strip_poster_paragraph(description),
            rewatched: letterboxd_field(item, "rewatch") == Some("Yes"),
        })
    }
}

fn letterboxd_field<'a>(item: &'a Item, name: &str) -> Option<&'a str> {
    item.extensions()
        .get(LETTERBOXD_NS)?
        .get(name)?
        .first()?
        .value()
}

/// Parses an RSS document into reviews, one per `<item>`, in feed order.
///
/// Items without a link, or repeating an earlier item's link, are skipped.
pub fn parse_feed(xml: &str) -> Result<Vec<FilmReview>, FeedError> {
    let channel = Channel::read_from(xml.as_bytes())?;
    let mut seen = HashSet::new();

    let films = channel
        .items()
        .iter()
        .filter_map(|item| {
            let Some(film) = FilmReview::from_item(item) else {
                warn!(title = item.title().unwrap_or_default(), "feed item has no link, skipping");
                return None;
            };
            if !seen.insert(film.link.clone()) {
                warn!(link = %film.link, "duplicate feed item, skipping");
                return None;
            }
            Some(film)
        })
        .collect();

    Ok(films)
}

/// Most recently watched first. Reviews without a watched date go last,
/// and ties keep their feed order.
pub fn sort_by_watched_date(films: &mut [FilmReview]) {
    films.sort_by(|a, b| match (a.watched_date, b.watched_date) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}

/// Parse + sort, absorbing parse failures into an empty list.
pub fn normalize_feed(xml: &str) -> Vec<FilmReview> {
    let mut films = match parse_feed(xml) {
        Ok(films) => films,
        Err(e) => {
            error!(error = %e, "could not parse review feed");
            Vec::new()
        }
    };

    sort_by_watched_date(&mut films);
    films
}
