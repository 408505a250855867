// templates/pages/home.rs

use crate::loader::HomeData;
use crate::templates::{
    components::{anniversary_list, film_card, review_panel},
    site_layout,
};
use maud::{html, Markup};

pub fn home_page(data: &HomeData) -> Markup {
    site_layout(
        "Tardy Critic",
        html! {
            @if let Some(latest) = data.latest() {
                (review_panel(latest))
            }

            div class="anniversary-columns" {
                (anniversary_list(
                    "Ten years ago today",
                    &data.anniversaries.today,
                    "Nothing turns ten today.",
                ))
                (anniversary_list(
                    "Coming up",
                    &data.anniversaries.upcoming,
                    "No anniversaries on the horizon.",
                ))
            }

            section class="reviews" {
                h2 { "Reviews" }
                @if data.films.is_empty() {
                    p class="empty" { "No reviews to show right now. Check back soon." }
                } @else {
                    div class="poster-grid" {
                        @for film in &data.films {
                            (film_card(film))
                        }
                    }
                }
            }
        },
    )
}
