//! Download URL resolution across the discovered host stubs.
//!
//! Some stubs point at storage that no longer holds a given track, so each
//! stub is tried in turn. The most recently discovered stub goes first since
//! earlier ones are more often stale.

use crate::config::SiteConfig;
use crate::http::HttpClient;

/// Candidate URLs for `track_id`, one per stub, in attempt order (reverse discovery).
pub fn candidate_urls(stubs: &[String], track_id: &str) -> Vec<String> {
    stubs
        .iter()
        .rev()
        .map(|stub| format!("{}{}", stub, track_id))
        .collect()
}

/// Fetches the first candidate that answers with a payload.
///
/// Every request carries `Origin` and `Referer` set to the site, without which
/// storage rejects the request. A failing candidate moves on to the next;
/// `None` means every candidate failed (or there were none) and the track
/// should be skipped.
pub fn fetch_first_candidate<C: HttpClient>(
    client: &C,
    site: &SiteConfig,
    stubs: &[String],
    track_id: &str,
) -> Option<Vec<u8>> {
    let origin = site.origin();
    let referer = site.referer();
    let headers = [("Origin", origin.as_str()), ("Referer", referer.as_str())];

    for url in candidate_urls(stubs, track_id) {
        match client.get(&url, &headers) {
            Ok(body) => {
                tracing::debug!(url = %url, bytes = body.len(), "candidate succeeded");
                return Some(body);
            }
            Err(e) if e.is_not_found() => {
                tracing::debug!(url = %url, "candidate not found, trying next");
            }
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "candidate failed, trying next");
            }
        }
    }
    tracing::info!(track_id, candidates = stubs.len(), "no candidate host had the track");
    None
}
