//! Filesystem-safe names for artists and tracks.
//!
//! Slugs keep alphanumerics, underscores and single spaces; see [`slugify`].
//! Within one profile run, repeated track slugs are made unique with
//! [`disambiguate`].

mod dedupe;
mod slug;

pub use dedupe::disambiguate;
pub use slug::slugify;
