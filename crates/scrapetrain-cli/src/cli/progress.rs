//! Progress lines printed while profiles download.
//!
//! Track lines and summaries go to `out`; profile failures go to `err`.

use scrapetrain_core::profile::Profile;
use scrapetrain_core::scrape::{ProfileReport, ProgressSink, TrackOutcome, TrackReport};
use scrapetrain_core::ScrapeError;
use std::io::Write;

pub struct PrintProgress<O: Write, E: Write> {
    out: O,
    err: E,
    total: usize,
    failures: usize,
}

impl<O: Write, E: Write> PrintProgress<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self {
            out,
            err,
            total: 0,
            failures: 0,
        }
    }

    /// Profiles reported through `profile_failed` so far.
    pub fn failures(&self) -> usize {
        self.failures
    }

    #[cfg(test)]
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl<O: Write, E: Write> ProgressSink for PrintProgress<O, E> {
    fn profile_started(&mut self, profile: &Profile, track_count: usize) {
        self.total = track_count;
        let _ = writeln!(
            self.out,
            "{}: {} tracks -> {}",
            profile.artist_name,
            track_count,
            profile.dir_path.display()
        );
    }

    fn track_finished(&mut self, report: &TrackReport) {
        let _ = writeln!(
            self.out,
            "[{}/{}] {}: {}",
            report.number,
            self.total,
            report.track.title,
            describe(&report.outcome)
        );
    }

    fn profile_finished(&mut self, report: &ProfileReport) {
        let _ = writeln!(self.out, "{}", summary_line(report));
    }

    fn profile_failed(&mut self, reference: &str, error: &ScrapeError) {
        self.failures += 1;
        let _ = writeln!(self.err, "{}: {}", reference, error);
    }
}

pub fn describe(outcome: &TrackOutcome) -> String {
    match outcome {
        TrackOutcome::Saved { with_cover: true, .. } => "saved".to_string(),
        TrackOutcome::Saved { with_cover: false, .. } => "saved (no cover art)".to_string(),
        TrackOutcome::SkippedExisting { .. } => "already exists, skipped".to_string(),
        TrackOutcome::Unavailable => "not available on any host, skipped".to_string(),
        TrackOutcome::Failed { reason } => format!("failed: {}", reason),
    }
}

pub fn summary_line(report: &ProfileReport) -> String {
    let s = report.summary();
    format!(
        "{}: {} saved, {} skipped, {} unavailable, {} failed",
        report.profile.artist_name, s.saved, s.skipped, s.unavailable, s.failed
    )
}
