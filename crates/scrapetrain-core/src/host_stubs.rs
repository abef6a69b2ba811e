//! Object-storage base URLs embedded in the profile page's inline scripts.
//!
//! The player configuration script names its storage bucket with a quoted
//! absolute URL. Concatenating that stub with a track identifier gives a
//! candidate audio URL (see [`crate::candidate`]).

use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;

use crate::markup::{selector, text_of};

/// Token that marks a script as the storage configuration.
const STORAGE_MARKER: &str = "AWS";

static STUB_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<url>https?://\S+)'").expect("static regex"));

/// Returns the stub of every marked script, in document order.
///
/// Duplicates are kept. A marked script without a quoted URL contributes nothing.
pub fn extract_host_stubs(document: &Html) -> Vec<String> {
    let scripts = selector("script");
    let mut stubs = Vec::new();
    for script in document.select(&scripts) {
        let text = text_of(script);
        if !text.contains(STORAGE_MARKER) {
            continue;
        }
        match STUB_URL.captures(&text).and_then(|c| c.name("url")) {
            Some(m) => stubs.push(m.as_str().to_string()),
            None => tracing::warn!("storage script without a quoted URL, ignoring"),
        }
    }
    tracing::debug!(count = stubs.len(), "host stubs discovered");
    stubs
}
