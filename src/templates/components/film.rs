use crate::domain::FilmReview;
use maud::{html, Markup, PreEscaped};

/// "Title (Year)", tolerating either half missing.
pub fn film_label(film: &FilmReview) -> String {
    let title = film.title.as_deref().unwrap_or("Untitled");
    match film.year.as_deref() {
        Some(year) => format!("{title} ({year})"),
        None => title.to_string(),
    }
}

/// Letterboxd ratings are 0.5–5.0 in half steps; render them as stars.
pub fn rating_stars(rating: &str) -> Option<String> {
    let value: f32 = rating.trim().parse().ok()?;
    if !(0.0..=5.0).contains(&value) {
        return None;
    }

    let whole = value.floor() as usize;
    let mut stars = "★".repeat(whole);
    if value - value.floor() >= 0.5 {
        stars.push('½');
    }
    Some(stars)
}

/// Grid tile: poster linking to the review, caption below.
pub fn film_card(film: &FilmReview) -> Markup {
    let label = film_label(film);

    html! {
        div class="film-card" data-link=(film.link) {
            a href=(film.link) {
                @if let Some(src) = &film.image_url {
                    img src=(src) alt=(label) loading="lazy";
                } @else {
                    div class="poster-missing" { (label) }
                }
            }
            div class="film-caption" {
                (label)
                @if film.rewatched {
                    span class="rewatch" title="Rewatch" { " ↻" }
                }
            }
        }
    }
}

/// Featured panel for the most recent review.
pub fn review_panel(film: &FilmReview) -> Markup {
    let label = film_label(film);

    html! {
        section class="latest-review" {
            @if let Some(src) = &film.image_url {
                a href=(film.link) class="latest-poster" {
                    img src=(src) alt=(label);
                }
            }
            div class="latest-body" {
                p class="eyebrow" { "Latest review" }
                h2 { a href=(film.link) { (label) } }
                p class="meta" {
                    @if let Some(stars) = film.rating.as_deref().and_then(rating_stars) {
                        span class="stars" { (stars) }
                    }
                    @if film.rewatched {
                        span class="rewatch" { "Rewatched" }
                    }
                    @if let Some(date) = film.watched_date {
                        span class="watched" { "Watched " (date.format("%-d %B %Y").to_string()) }
                    }
                }
                // Review markup comes straight from the reviewer's own feed.
                div class="review" { (PreEscaped(&film.review_html)) }
                a href=(film.link) class="read-more" { "Read on Letterboxd →" }
            }
        }
    }
}
