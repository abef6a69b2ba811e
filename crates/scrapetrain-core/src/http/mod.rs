//! Blocking HTTP GET transport.
//!
//! Every network call the scraper makes goes through [`HttpClient`] so that
//! page parsing, pagination and candidate resolution can be exercised
//! without a network. [`CurlClient`] is the libcurl-backed implementation.

mod curl_client;

pub use curl_client::CurlClient;

/// Error returned by a single GET (curl failure or non-2xx status).
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Curl reported an error (timeout, connection, TLS, etc.).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// HTTP response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
}

impl FetchError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::Http(404) | FetchError::Http(410))
    }
}

/// Minimal blocking GET client.
pub trait HttpClient {
    /// Performs a GET with the given extra headers and returns the full body.
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<Vec<u8>, FetchError>;
}

impl<C: HttpClient + ?Sized> HttpClient for &C {
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<Vec<u8>, FetchError> {
        (**self).get(url, headers)
    }
}
