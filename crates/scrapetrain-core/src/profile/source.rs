//! Turning a user-supplied profile reference into a validated site URL.

use url::Url;

use crate::config::SiteConfig;
use crate::error::{Result, ScrapeError};

/// Resolves a profile reference (absolute URL or bare profile name) to a URL on the site.
///
/// Bare names are appended to the site's base URL. Fails with
/// [`ScrapeError::InvalidSource`] if the result is not http(s) or its host is
/// not one of the site's hostnames.
///
/// # Examples
///
/// - `"https://traktrain.com/artist"` → unchanged
/// - `"artist"` → `"https://traktrain.com/artist"`
/// - `"https://soundcloud.com/artist"` → `InvalidSource`
pub fn resolve_profile_url(reference: &str, site: &SiteConfig) -> Result<Url> {
    let reference = reference.trim();
    let invalid = || ScrapeError::InvalidSource {
        reference: reference.to_string(),
    };
    if reference.is_empty() {
        return Err(invalid());
    }

    let url = match Url::parse(reference) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) if starts_with_site_host(reference, site) => {
            Url::parse(&format!("https://{}", reference)).map_err(|_| invalid())?
        }
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let base = Url::parse(&site.base()).map_err(|_| invalid())?;
            base.join(reference.trim_start_matches('/'))
                .map_err(|_| invalid())?
        }
        Err(_) => return Err(invalid()),
    };

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid());
    }
    match url.host_str() {
        Some(host) if site.is_site_host(host) => Ok(url),
        _ => Err(invalid()),
    }
}

/// `traktrain.com/artist` style references: a scheme-less URL on the site.
fn starts_with_site_host(reference: &str, site: &SiteConfig) -> bool {
    reference
        .split('/')
        .next()
        .is_some_and(|first| first.contains('.') && site.is_site_host(first))
}
