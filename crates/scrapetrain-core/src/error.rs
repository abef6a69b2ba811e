//! Error taxonomy for scraping one profile.
//!
//! Every variant here is fatal to the profile being processed. Per-track
//! problems (no working candidate, missing artwork, file already present)
//! are reported as [`crate::scrape::TrackOutcome`] values instead.

use std::path::PathBuf;

use crate::http::FetchError;

pub type Result<T, E = ScrapeError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    /// Reference did not parse as a URL or points at a foreign host.
    #[error("doesn't look like a TrakTrain URL: {reference}")]
    InvalidSource { reference: String },

    /// Profile page answered 404 or carries the not-found marker.
    #[error("profile not found: {url}")]
    ProfileNotFound { url: String },

    /// Profile page has no listing endpoint to paginate.
    #[error("{artist} doesn't seem to have any tracks")]
    NoTracks { artist: String },

    /// Page structure is missing something every profile page has.
    #[error("unexpected page markup: missing {0}")]
    UnexpectedMarkup(&'static str),

    #[error("listing {endpoint} still had results after {max_pages} pages")]
    PageLimitExceeded { endpoint: String, max_pages: u32 },

    #[error("malformed listing response: {0}")]
    ListingPayload(#[from] serde_json::Error),

    #[error("GET {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: FetchError,
    },

    #[error("expected a .txt list of profiles, got {}", path.display())]
    NotAListFile { path: PathBuf },

    #[error("tagging {} failed: {source}", path.display())]
    Tag {
        path: PathBuf,
        #[source]
        source: lofty::error::LoftyError,
    },

    #[error("{} has no writable tag", path.display())]
    NoWritableTag { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ScrapeError {
    pub(crate) fn fetch(url: &str, source: FetchError) -> Self {
        ScrapeError::Fetch {
            url: url.to_string(),
            source,
        }
    }
}
