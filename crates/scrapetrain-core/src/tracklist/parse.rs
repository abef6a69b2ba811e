//! Parse one page of the profile listing endpoint.

use scraper::{ElementRef, Html};
use serde::Deserialize;

use super::Track;
use crate::error::Result;
use crate::markup::{selector, text_of};
use crate::naming::slugify;

/// Thumbnail size token in listing artwork URLs.
pub(crate) const THUMB_SIZE: &str = "60x60";
/// Largest artwork size the site serves.
pub(crate) const NOMINAL_SIZE: &str = "360x360";

/// The endpoint wraps a server-rendered HTML fragment in JSON.
#[derive(Debug, Deserialize)]
struct ListingResponse {
    content: String,
}

/// One page of results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingPage {
    /// The empty-results marker; pagination stops here.
    Empty,
    Tracks(Vec<Track>),
}

/// Parses a listing response body. Track elements missing artwork, title or id are skipped.
pub fn parse_listing_page(body: &[u8]) -> Result<ListingPage> {
    let response: ListingResponse = serde_json::from_slice(body)?;
    let fragment = Html::parse_fragment(&response.content);

    if fragment.select(&selector("div.empty-search")).next().is_some() {
        return Ok(ListingPage::Empty);
    }

    let tracks = fragment
        .select(&selector("div.js-profile-track"))
        .filter_map(|el| {
            let track = parse_track(el);
            if track.is_none() {
                tracing::warn!("skipping track element with missing fields");
            }
            track
        })
        .collect();
    Ok(ListingPage::Tracks(tracks))
}

fn parse_track(el: ElementRef<'_>) -> Option<Track> {
    let artwork_url = el
        .select(&selector("img[src]"))
        .next()
        .and_then(|img| img.value().attr("src"))?
        .replace(THUMB_SIZE, NOMINAL_SIZE);

    let title = el
        .select(&selector("div.title__name-tooltip"))
        .next()
        .map(text_of)?;

    let id = el
        .select(&selector("[data-id]"))
        .next()
        .and_then(|d| d.value().attr("data-id"))
        .map(str::trim)
        .filter(|id| !id.is_empty())?
        .to_string();

    let slug = match slugify(&title, true) {
        s if s.is_empty() => slugify(&id, true),
        s => s,
    };

    Some(Track {
        title,
        slug,
        artwork_url,
        id,
    })
}
