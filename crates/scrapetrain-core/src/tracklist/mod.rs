//! Track list compilation from the paginated listing endpoint.

mod parse;

pub use parse::{parse_listing_page, ListingPage};
pub(crate) use parse::NOMINAL_SIZE;

use crate::config::SiteConfig;
use crate::error::{Result, ScrapeError};
use crate::http::HttpClient;
use crate::naming::disambiguate;

/// One track as listed on the profile, latest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    /// Title as displayed.
    pub title: String,
    /// Unicode slug of the title, unique within the run; used as file stem.
    pub slug: String,
    /// Artwork at the nominal (largest) size.
    pub artwork_url: String,
    /// Opaque platform identifier appended to host stubs.
    pub id: String,
}

impl Track {
    pub fn file_name(&self) -> String {
        format!("{}.mp3", self.slug)
    }
}

/// URL of listing page `page` (1-based) for `endpoint`.
pub fn listing_url(site: &SiteConfig, endpoint: &str, page: u32) -> String {
    format!(
        "{}profile-tracks/{}?search=&sort=latest&page={}",
        site.base(),
        endpoint,
        page
    )
}

/// Requests listing pages 1, 2, … until one carries the empty-results marker.
///
/// Returns the tracks of every page before it, in encounter order, with
/// duplicate slugs disambiguated. Fails with `PageLimitExceeded` if
/// `max_pages` pages all had results.
pub fn compile_tracklist<C: HttpClient>(
    client: &C,
    site: &SiteConfig,
    endpoint: &str,
    max_pages: u32,
) -> Result<Vec<Track>> {
    let mut tracks: Vec<Track> = Vec::new();

    for page in 1..=max_pages {
        let url = listing_url(site, endpoint, page);
        let body = client
            .get(&url, &[])
            .map_err(|e| ScrapeError::fetch(&url, e))?;
        match parse_listing_page(&body)? {
            ListingPage::Empty => {
                tracing::debug!(endpoint, page, total = tracks.len(), "listing exhausted");
                disambiguate(tracks.iter_mut().map(|t| &mut t.slug));
                return Ok(tracks);
            }
            ListingPage::Tracks(found) => {
                tracing::debug!(endpoint, page, found = found.len(), "listing page");
                tracks.extend(found);
            }
        }
    }

    Err(ScrapeError::PageLimitExceeded {
        endpoint: endpoint.to_string(),
        max_pages,
    })
}
