//! Profile page fetching and validation.

mod parse;
mod source;

use std::path::{Path, PathBuf};

pub use parse::{parse_profile_page, ProfilePage};
pub use source::resolve_profile_url;

use crate::config::SiteConfig;
use crate::error::{Result, ScrapeError};
use crate::http::HttpClient;
use crate::naming::slugify;

/// One artist profile, created once per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub url: String,
    pub artist_name: String,
    pub artist_slug: String,
    /// `<output_dir>/<artist_slug>`
    pub dir_path: PathBuf,
}

impl Profile {
    pub fn new(url: &str, artist_name: &str, output_dir: &Path) -> Result<Self> {
        let artist_slug = artist_slug(artist_name)
            .ok_or(ScrapeError::UnexpectedMarkup("usable artist name"))?;
        Ok(Self {
            url: url.to_string(),
            artist_name: artist_name.to_string(),
            dir_path: output_dir.join(&artist_slug),
            artist_slug,
        })
    }
}

/// ASCII slug of the artist name, or the Unicode slug when nothing ASCII survives.
fn artist_slug(name: &str) -> Option<String> {
    [false, true]
        .into_iter()
        .map(|unicode| slugify(name, unicode))
        .find(|slug| !slug.is_empty())
}

/// Fetches and validates a profile page.
///
/// Fails with `InvalidSource` for foreign references and `ProfileNotFound`
/// when the page answers 404 or shows the not-found marker.
pub fn fetch_profile<C: HttpClient>(
    client: &C,
    site: &SiteConfig,
    reference: &str,
    output_dir: &Path,
) -> Result<(Profile, ProfilePage)> {
    let url = resolve_profile_url(reference, site)?;
    tracing::info!(url = %url, "fetching profile");

    let body = client.get(url.as_str(), &[]).map_err(|e| {
        if e.is_not_found() {
            ScrapeError::ProfileNotFound {
                url: url.to_string(),
            }
        } else {
            ScrapeError::fetch(url.as_str(), e)
        }
    })?;

    let page = parse_profile_page(&String::from_utf8_lossy(&body), url.as_str())?;
    let profile = Profile::new(url.as_str(), &page.artist_name, output_dir)?;
    tracing::debug!(
        artist = %profile.artist_name,
        endpoint = ?page.data_endpoint,
        stubs = page.host_stubs.len(),
        "profile parsed"
    );
    Ok((profile, page))
}
