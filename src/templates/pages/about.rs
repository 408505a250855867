use crate::templates::site_layout;
use maud::{html, Markup};

pub fn about_page() -> Markup {
    site_layout(
        "About Tardy Critic",
        html! {
            article class="about" {
                h2 { "About" }
                p {
                    "We believe that reviewing movies ten years after their release provides a unique \
                     perspective on the film, as it's removed from the initial hype and promotion \
                     surrounding its debut. By giving each film time to simmer and re-watching it with \
                     a fresh set of eyes, we can more accurately assess its impact and relevance."
                }
                p {
                    "We're always looking for ways to improve our reviews and expand our coverage. \
                     We're open to feedback and suggestions on how we can better serve our readers and \
                     provide a more insightful and engaging analysis of each film."
                }
                h3 { "How it began..." }
                p {
                    "With a Twitter conversation."
                }
            }
        },
    )
}
