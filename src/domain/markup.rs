// src/domain/markup.rs

use scraper::{ElementRef, Html, Selector};

/// Returns the `src` of the first `<img>` element in a description fragment.
///
/// Letterboxd puts the poster image in the first paragraph of every item, so
/// this is the poster for every feed shape seen so far. Descriptions without
/// any image yield `None`.
pub fn poster_url(description: &str) -> Option<String> {
    let fragment = Html::parse_fragment(description);
    let img = Selector::parse("img").ok()?;

    fragment
        .select(&img)
        .find_map(|el| el.value().attr("src"))
        .map(str::trim)
        .filter(|src| !src.is_empty())
        .map(str::to_string)
}

/// Removes the leading poster paragraph (`<p><img …/></p>`) and returns the
/// remaining review markup.
///
/// Only a first paragraph that actually holds an image is dropped; anything
/// else is returned re-serialized but otherwise untouched.
pub fn strip_poster_paragraph(description: &str) -> String {
    let mut fragment = Html::parse_fragment(description);
    let Ok(img) = Selector::parse("img") else {
        return fragment.root_element().inner_html();
    };

    let leading = {
        let root = fragment.root_element();
        let first = root.children().find(|node| match node.value().as_text() {
            Some(text) => !text.trim().is_empty(),
            None => node.value().is_element(),
        });
        first
            .and_then(ElementRef::wrap)
            .filter(|el| el.value().name() == "p" && el.select(&img).next().is_some())
            .map(|el| el.id())
    };

    if let Some(id) = leading {
        if let Some(mut node) = fragment.tree.get_mut(id) {
            node.detach();
        }
    }

    fragment.root_element().inner_html()
}
