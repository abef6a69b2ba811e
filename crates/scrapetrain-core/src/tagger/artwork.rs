//! Cover art download with size fallback.

use crate::http::HttpClient;
use crate::tracklist::NOMINAL_SIZE;

/// Smaller sizes tried, largest first, when the nominal size is unavailable.
pub const FALLBACK_SIZES: [&str; 3] = ["250x250", "120x120", "60x60"];

/// URLs to try for `artwork_url`: the nominal size, then each fallback size.
pub fn artwork_candidates(artwork_url: &str) -> Vec<String> {
    let mut urls = vec![artwork_url.to_string()];
    for size in FALLBACK_SIZES {
        let url = artwork_url.replace(NOMINAL_SIZE, size);
        if !urls.contains(&url) {
            urls.push(url);
        }
    }
    urls
}

/// Fetches cover art, falling back through smaller sizes. `None` when no size is fetchable.
pub fn fetch_artwork<C: HttpClient>(client: &C, artwork_url: &str) -> Option<Vec<u8>> {
    for url in artwork_candidates(artwork_url) {
        match client.get(&url, &[]) {
            Ok(data) if !data.is_empty() => return Some(data),
            Ok(_) => tracing::debug!(url = %url, "empty artwork body"),
            Err(e) => tracing::debug!(url = %url, error = %e, "artwork unavailable"),
        }
    }
    tracing::warn!(artwork_url, "no artwork size could be fetched");
    None
}
