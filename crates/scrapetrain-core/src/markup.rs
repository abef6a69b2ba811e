//! Small helpers over `scraper` shared by the page parsers.

use scraper::{ElementRef, Selector};

/// Parses a selector known at compile time.
pub(crate) fn selector(css: &'static str) -> Selector {
    Selector::parse(css).expect("static CSS selector")
}

/// Concatenated text of an element with surrounding whitespace trimmed.
pub(crate) fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}
