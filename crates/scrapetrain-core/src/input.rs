//! Command-line input: one profile reference, or a local list of them.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ScrapeError};

/// What the user pointed the tool at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileInput {
    /// A profile URL or bare profile name.
    Single(String),
    /// A local newline-delimited file of references.
    ListFile(PathBuf),
}

impl ProfileInput {
    /// An argument naming an existing local path (plain or `file://`) is a list file;
    /// anything else is a single reference.
    pub fn detect(arg: &str) -> Self {
        let arg = arg.trim();
        let local = arg.strip_prefix("file://").unwrap_or(arg);
        if !local.is_empty() && Path::new(local).exists() {
            ProfileInput::ListFile(PathBuf::from(local))
        } else {
            ProfileInput::Single(arg.to_string())
        }
    }
}

/// Reads a `.txt` list of profile references.
///
/// Lines are trimmed, blank lines ignored, and repeated references dropped
/// (first occurrence wins, order kept).
pub fn read_profile_list(path: &Path) -> Result<Vec<String>> {
    let is_txt = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
    if !is_txt || !path.is_file() {
        return Err(ScrapeError::NotAListFile {
            path: path.to_path_buf(),
        });
    }

    let data = fs::read_to_string(path)?;
    let mut seen = HashSet::new();
    let references: Vec<String> = data
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| seen.insert(line.to_string()))
        .map(str::to_string)
        .collect();
    tracing::debug!(path = %path.display(), count = references.len(), "read profile list");
    Ok(references)
}
