pub mod config;
pub mod error;
pub mod logging;

mod markup;

pub mod candidate;
pub mod host_stubs;
pub mod http;
pub mod input;
pub mod naming;
pub mod profile;
pub mod scrape;
pub mod tagger;
pub mod tracklist;

#[cfg(test)]
pub(crate) mod fixtures;

pub use error::{Result, ScrapeError};
