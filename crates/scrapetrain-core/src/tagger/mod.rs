//! Writing the downloaded audio and its ID3 metadata.

mod artwork;

pub use artwork::{artwork_candidates, fetch_artwork, FALLBACK_SIZES};

use std::fs;
use std::io::Cursor;
use std::path::Path;

use lofty::config::WriteOptions;
use lofty::file::{AudioFile, TaggedFileExt};
use lofty::picture::{MimeType, Picture, PictureType};
use lofty::prelude::Accessor;
use lofty::probe::Probe;
use lofty::tag::Tag;

use crate::error::{Result, ScrapeError};

/// Metadata written into a saved track.
#[derive(Debug, Clone, Default)]
pub struct TrackTags<'a> {
    pub artist: &'a str,
    pub title: &'a str,
    /// Set only when the user asked for an album override.
    pub album: Option<&'a str>,
    /// Front cover, stored as `image/jpeg`.
    pub cover: Option<Vec<u8>>,
}

/// Writes `audio` to `path`, then writes `tags` into the file in place.
///
/// The payload is parsed before anything touches disk, so a payload lofty
/// can't read leaves `path` untouched.
pub fn persist_track(path: &Path, audio: &[u8], tags: &TrackTags<'_>) -> Result<()> {
    let tag_err = |source| ScrapeError::Tag {
        path: path.to_path_buf(),
        source,
    };

    let mut tagged = Probe::new(Cursor::new(audio))
        .guess_file_type()?
        .read()
        .map_err(tag_err)?;

    let tag_type = tagged.primary_tag_type();
    if tagged.tag(tag_type).is_none() {
        tagged.insert_tag(Tag::new(tag_type));
    }
    let tag = tagged
        .tag_mut(tag_type)
        .ok_or_else(|| ScrapeError::NoWritableTag {
            path: path.to_path_buf(),
        })?;

    tag.set_artist(tags.artist.to_string());
    tag.set_title(tags.title.to_string());
    if let Some(album) = tags.album {
        tag.set_album(album.to_string());
    }
    if let Some(cover) = &tags.cover {
        tag.remove_picture_type(PictureType::CoverFront);
        tag.push_picture(Picture::new_unchecked(
            PictureType::CoverFront,
            Some(MimeType::Jpeg),
            Some("Cover".to_string()),
            cover.clone(),
        ));
    }

    fs::write(path, audio)?;
    tagged
        .save_to_path(path, WriteOptions::default())
        .map_err(tag_err)?;
    Ok(())
}
