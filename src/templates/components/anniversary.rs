use crate::domain::AnniversaryCandidate;
use maud::{html, Markup};

pub fn anniversary_list(heading: &str, candidates: &[AnniversaryCandidate], empty: &str) -> Markup {
    html! {
        section class="anniversaries" {
            h2 { (heading) }
            @if candidates.is_empty() {
                p class="empty" { (empty) }
            } @else {
                ul {
                    @for c in candidates {
                        li {
                            a href=(c.link) {
                                @if let Some(src) = &c.poster_url {
                                    img src=(src) alt=(c.title) loading="lazy";
                                }
                                span class="anniversary-title" { (c.title) }
                            }
                            span class="anniversary-date" {
                                "Released " (c.release_date().format("%-d %B %Y").to_string())
                                " · turns ten " (c.tenth_anniversary_date().format("%-d %B").to_string())
                            }
                        }
                    }
                }
            }
        }
    }
}
