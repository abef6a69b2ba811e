//! Pure extraction of profile data from the fetched profile page.

use scraper::Html;

use crate::error::{Result, ScrapeError};
use crate::host_stubs::extract_host_stubs;
use crate::markup::{selector, text_of};

/// Elements the site renders instead of a profile when the artist doesn't exist.
const NOT_FOUND_MARKERS: &str = "div.error-page, section.page-404";

/// Everything the scraper needs from a profile page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfilePage {
    /// Artist name as displayed, whitespace collapsed.
    pub artist_name: String,
    /// Listing endpoint identifier; None if the profile has no track listing.
    pub data_endpoint: Option<String>,
    /// Storage base URLs in discovery order.
    pub host_stubs: Vec<String>,
}

/// Parses a profile page. `url` is only used for error reporting.
pub fn parse_profile_page(html: &str, url: &str) -> Result<ProfilePage> {
    let document = Html::parse_document(html);

    if document.select(&selector(NOT_FOUND_MARKERS)).next().is_some() {
        return Err(ScrapeError::ProfileNotFound {
            url: url.to_string(),
        });
    }

    let artist_name = document
        .select(&selector("h1.profile-bio__name"))
        .next()
        .map(text_of)
        .map(|name| name.split_whitespace().collect::<Vec<_>>().join(" "))
        .ok_or(ScrapeError::UnexpectedMarkup("artist name heading"))?;

    let data_endpoint = document
        .select(&selector("form.js-filter-form"))
        .next()
        .and_then(|form| form.value().attr("data-endpoint"))
        .and_then(|endpoint| endpoint.trim().rsplit('/').next())
        .filter(|id| !id.is_empty())
        .map(str::to_string);

    Ok(ProfilePage {
        artist_name,
        data_endpoint,
        host_stubs: extract_host_stubs(&document),
    })
}
