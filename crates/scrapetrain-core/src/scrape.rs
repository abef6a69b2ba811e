//! Per-profile pipeline and batch driver.
//!
//! fetch profile → compile track list → for each track: resolve a candidate,
//! fetch artwork, write and tag. Profile-level failures are errors; track-level
//! failures are [`TrackOutcome`]s and never abort the profile.

use std::fs;
use std::path::{Path, PathBuf};

use crate::candidate::fetch_first_candidate;
use crate::config::{ScrapeConfig, SiteConfig};
use crate::error::{Result, ScrapeError};
use crate::http::HttpClient;
use crate::profile::{fetch_profile, Profile};
use crate::tagger::{fetch_artwork, persist_track, TrackTags};
use crate::tracklist::{compile_tracklist, Track};

/// Settings for one invocation, threaded through every profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Base directory; files land in `<output_dir>/<artist_slug>/<track_slug>.mp3`.
    pub output_dir: PathBuf,
    /// Album tag override.
    pub album: Option<String>,
    /// Re-download tracks whose file already exists.
    pub overwrite: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackOutcome {
    Saved { path: PathBuf, with_cover: bool },
    /// File exists and overwrite was not requested; no audio request made.
    SkippedExisting { path: PathBuf },
    /// No host stub served the track.
    Unavailable,
    /// Payload fetched but could not be written or tagged.
    Failed { reason: String },
}

#[derive(Debug, Clone)]
pub struct TrackReport {
    /// 1-based position in the listing.
    pub number: usize,
    pub track: Track,
    pub outcome: TrackOutcome,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub saved: usize,
    pub skipped: usize,
    pub unavailable: usize,
    pub failed: usize,
}

#[derive(Debug, Clone)]
pub struct ProfileReport {
    pub profile: Profile,
    pub tracks: Vec<TrackReport>,
}

impl ProfileReport {
    pub fn summary(&self) -> Summary {
        let mut s = Summary::default();
        for t in &self.tracks {
            match t.outcome {
                TrackOutcome::Saved { .. } => s.saved += 1,
                TrackOutcome::SkippedExisting { .. } => s.skipped += 1,
                TrackOutcome::Unavailable => s.unavailable += 1,
                TrackOutcome::Failed { .. } => s.failed += 1,
            }
        }
        s
    }
}

/// Receives progress as profiles are processed. Every method defaults to a no-op.
pub trait ProgressSink {
    fn profile_started(&mut self, _profile: &Profile, _track_count: usize) {}
    fn track_finished(&mut self, _report: &TrackReport) {}
    fn profile_finished(&mut self, _report: &ProfileReport) {}
    /// Called by [`run_batch`] when a profile fails as a whole.
    fn profile_failed(&mut self, _reference: &str, _error: &ScrapeError) {}
}

/// Sink that ignores everything.
pub struct NoProgress;

impl ProgressSink for NoProgress {}

/// Downloads every track of one profile.
pub fn scrape_profile<C: HttpClient>(
    client: &C,
    cfg: &ScrapeConfig,
    reference: &str,
    opts: &RunOptions,
    progress: &mut dyn ProgressSink,
) -> Result<ProfileReport> {
    let (profile, page) = fetch_profile(client, &cfg.site, reference, &opts.output_dir)?;

    let endpoint = page.data_endpoint.ok_or_else(|| ScrapeError::NoTracks {
        artist: profile.artist_name.clone(),
    })?;
    let tracks = compile_tracklist(client, &cfg.site, &endpoint, cfg.max_pages)?;

    fs::create_dir_all(&profile.dir_path)?;
    tracing::info!(
        artist = %profile.artist_name,
        tracks = tracks.len(),
        dir = %profile.dir_path.display(),
        "downloading profile"
    );
    progress.profile_started(&profile, tracks.len());

    let mut reports = Vec::with_capacity(tracks.len());
    for (i, track) in tracks.into_iter().enumerate() {
        let outcome = download_track(client, &cfg.site, &profile, &page.host_stubs, &track, opts);
        let report = TrackReport {
            number: i + 1,
            track,
            outcome,
        };
        progress.track_finished(&report);
        reports.push(report);
    }

    let report = ProfileReport {
        profile,
        tracks: reports,
    };
    let s = report.summary();
    tracing::info!(
        artist = %report.profile.artist_name,
        saved = s.saved,
        skipped = s.skipped,
        unavailable = s.unavailable,
        failed = s.failed,
        "profile done"
    );
    progress.profile_finished(&report);
    Ok(report)
}

fn download_track<C: HttpClient>(
    client: &C,
    site: &SiteConfig,
    profile: &Profile,
    stubs: &[String],
    track: &Track,
    opts: &RunOptions,
) -> TrackOutcome {
    let path = track_path(&profile.dir_path, track);
    if path.exists() && !opts.overwrite {
        tracing::debug!(path = %path.display(), "already exists, skipping");
        return TrackOutcome::SkippedExisting { path };
    }

    let Some(audio) = fetch_first_candidate(client, site, stubs, &track.id) else {
        tracing::warn!(track = %track.title, id = %track.id, "track unavailable, skipping");
        return TrackOutcome::Unavailable;
    };

    let cover = fetch_artwork(client, &track.artwork_url);
    let with_cover = cover.is_some();
    let tags = TrackTags {
        artist: &profile.artist_name,
        title: &track.title,
        album: opts.album.as_deref(),
        cover,
    };
    match persist_track(&path, &audio, &tags) {
        Ok(()) => {
            tracing::info!(path = %path.display(), with_cover, "saved");
            TrackOutcome::Saved { path, with_cover }
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "saving track failed");
            TrackOutcome::Failed {
                reason: e.to_string(),
            }
        }
    }
}

/// Processes each reference in turn. A failing profile is logged and does not stop the batch.
pub fn run_batch<C: HttpClient>(
    client: &C,
    cfg: &ScrapeConfig,
    references: &[String],
    opts: &RunOptions,
    progress: &mut dyn ProgressSink,
) -> Vec<(String, Result<ProfileReport>)> {
    let mut results = Vec::with_capacity(references.len());
    for reference in references {
        let result = scrape_profile(client, cfg, reference, opts, &mut *progress);
        if let Err(e) = &result {
            tracing::error!(reference = %reference, error = %e, "profile failed");
            progress.profile_failed(reference, e);
        }
        results.push((reference.clone(), result));
    }
    results
}

/// Destination of `track` under `dir`.
pub fn track_path(dir: &Path, track: &Track) -> PathBuf {
    dir.join(track.file_name())
}
