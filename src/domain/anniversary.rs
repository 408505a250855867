// src/domain/anniversary.rs

use crate::feeds::DiscoverMovie;
use chrono::{Months, NaiveDate};
use serde::Serialize;
use tracing::debug;

/// Discovery results with fewer votes than this are too obscure to feature.
pub const MIN_VOTE_COUNT: u32 = 2000;
/// How many upcoming anniversaries the page shows.
pub const MAX_UPCOMING: usize = 5;

const ANNIVERSARY_MONTHS: u32 = 10 * 12;
/// Primary release dates often run ahead of the wide theatrical date, so the
/// discovery query looks this far either side of "ten years ago today".
const WINDOW_PAD_MONTHS: u32 = 2;

const TMDB_MOVIE_URL: &str = "https://www.themoviedb.org/movie";

/// Inclusive primary-release-date range sent to the discovery API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn around_tenth_anniversary(today: NaiveDate) -> Self {
        let centre = months_before(today, ANNIVERSARY_MONTHS);
        Self {
            start: months_before(centre, WINDOW_PAD_MONTHS),
            end: centre
                .checked_add_months(Months::new(WINDOW_PAD_MONTHS))
                .unwrap_or(NaiveDate::MAX),
        }
    }
}

fn months_before(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(months))
        .unwrap_or(NaiveDate::MIN)
}

/// Calendar anniversary: same month and day ten years on. 29 February falls
/// back to 28 February when the target year is not a leap year.
pub fn tenth_anniversary(release_date: NaiveDate) -> Option<NaiveDate> {
    release_date.checked_add_months(Months::new(ANNIVERSARY_MONTHS))
}

/// A film close to its tenth anniversary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnniversaryCandidate {
    pub id: u64,
    pub title: String,
    pub poster_url: Option<String>,
    pub link: String,
    release_date: NaiveDate,
    tenth_anniversary_date: NaiveDate,
}

impl AnniversaryCandidate {
    /// `None` when the result has no usable release date.
    pub fn from_discover(movie: &DiscoverMovie, image_base_url: &str) -> Option<Self> {
        let raw = movie.release_date.as_deref().unwrap_or_default();
        let release_date = match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => date,
            Err(_) => {
                debug!(id = movie.id, title = %movie.title, raw, "no usable release date");
                return None;
            }
        };

        Some(Self {
            id: movie.id,
            title: movie.title.clone(),
            poster_url: movie
                .poster_path
                .as_deref()
                .filter(|p| !p.is_empty())
                .map(|p| format!("{}{}", image_base_url.trim_end_matches('/'), p)),
            link: format!("{TMDB_MOVIE_URL}/{}", movie.id),
            release_date,
            tenth_anniversary_date: tenth_anniversary(release_date)?,
        })
    }

    pub fn release_date(&self) -> NaiveDate {
        self.release_date
    }

    pub fn tenth_anniversary_date(&self) -> NaiveDate {
        self.tenth_anniversary_date
    }
}

/// Candidates split by where their anniversary falls relative to today.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Anniversaries {
    /// Turning ten today.
    pub today: Vec<AnniversaryCandidate>,
    /// Turning ten later, earliest release first, at most [`MAX_UPCOMING`].
    pub upcoming: Vec<AnniversaryCandidate>,
}

/// Filters discovery results down to the anniversaries worth showing.
///
/// `today` is a UTC calendar date; no time-of-day is involved anywhere.
pub fn match_anniversaries(
    movies: &[DiscoverMovie],
    today: NaiveDate,
    image_base_url: &str,
) -> Anniversaries {
    let mut result = Anniversaries::default();

    for candidate in movies
        .iter()
        .filter(|m| !m.adult)
        .filter(|m| m.vote_count >= MIN_VOTE_COUNT)
        .filter_map(|m| AnniversaryCandidate::from_discover(m, image_base_url))
    {
        let date = candidate.tenth_anniversary_date();
        if date == today {
            result.today.push(candidate);
        } else if date > today {
            result.upcoming.push(candidate);
        }
    }

    result.upcoming.sort_by_key(|c| c.release_date());
    result.upcoming.truncate(MAX_UPCOMING);

    debug!(
        considered = movies.len(),
        today = result.today.len(),
        upcoming = result.upcoming.len(),
        "matched anniversaries"
    );
    result
}
