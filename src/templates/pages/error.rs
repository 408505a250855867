use crate::templates::site_layout;
use maud::{html, Markup};

/// Basic error page in the site chrome.
pub fn error_page(status: u16, message: &str) -> Markup {
    site_layout(
        &format!("Error {status}"),
        html! {
            section class="error" {
                h2 { "Error " (status) }
                p { (message) }
                p { a href="/" { "← Back to reviews" } }
            }
        },
    )
}
