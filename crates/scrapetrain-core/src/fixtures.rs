//! Test doubles shared by unit tests: an in-memory recording client and page builders.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::http::{FetchError, HttpClient};

/// One recorded GET.
#[derive(Debug, Clone)]
pub(crate) struct Recorded {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// Serves canned bodies by exact URL; unknown URLs answer 404.
#[derive(Default)]
pub(crate) struct MockClient {
    routes: HashMap<String, Result<Vec<u8>, u32>>,
    requests: RefCell<Vec<Recorded>>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ok(mut self, url: &str, body: impl Into<Vec<u8>>) -> Self {
        self.routes.insert(url.to_string(), Ok(body.into()));
        self
    }

    pub fn status(mut self, url: &str, code: u32) -> Self {
        self.routes.insert(url.to_string(), Err(code));
        self
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.borrow().clone()
    }

    pub fn urls(&self) -> Vec<String> {
        self.requests.borrow().iter().map(|r| r.url.clone()).collect()
    }
}

impl HttpClient for MockClient {
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<Vec<u8>, FetchError> {
        self.requests.borrow_mut().push(Recorded {
            url: url.to_string(),
            headers: headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        });
        match self.routes.get(url) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(code)) => Err(FetchError::Http(*code)),
            None => Err(FetchError::Http(404)),
        }
    }
}

/// A few MPEG-1 Layer III frames (128 kbps, 44.1 kHz, stereo) with silent bodies.
pub(crate) fn fake_mp3() -> Vec<u8> {
    const FRAME_LEN: usize = 417;
    let mut out = Vec::with_capacity(FRAME_LEN * 24);
    for _ in 0..24 {
        let mut frame = vec![0u8; FRAME_LEN];
        frame[..4].copy_from_slice(&[0xFF, 0xFB, 0x90, 0x00]);
        out.extend_from_slice(&frame);
    }
    out
}

/// Profile page with an artist heading, listing form and one script per host stub.
pub(crate) fn profile_html(artist: &str, endpoint: Option<&str>, stubs: &[&str]) -> String {
    let form = match endpoint {
        Some(e) => format!(r#"<form class="js-filter-form" data-endpoint="/profile-tracks/{e}"></form>"#),
        None => r#"<form class="js-filter-form"></form>"#.to_string(),
    };
    let scripts: String = stubs
        .iter()
        .map(|s| format!("<script>window.AWS_CONFIG = {{ bucket: '{s}' }};</script>"))
        .collect();
    format!(
        r#"<html><head>{scripts}</head><body>
        <h1 class="profile-bio__name">{artist}</h1>
        {form}
        </body></html>"#
    )
}

/// One track element as served inside a listing fragment.
pub(crate) fn track_html(id: &str, title: &str, art: &str) -> String {
    format!(
        r#"<div class="js-profile-track">
            <img src="{art}">
            <div class="title__name-tooltip">
{title}
</div>
            <button class="play" data-id="{id}"></button>
        </div>"#
    )
}

/// JSON body of a listing page holding the given track elements.
pub(crate) fn listing_json(tracks: &[String]) -> String {
    serde_json::json!({ "content": tracks.concat() }).to_string()
}

pub(crate) fn empty_listing_json() -> String {
    serde_json::json!({ "content": r#"<div class="empty-search">No tracks found</div>"# })
        .to_string()
}
