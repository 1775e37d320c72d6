//! Filesystem scanning: which folders to process and which drawing to use.
//!
//! ## Directory Structure
//!
//! ```text
//! drawing/                          # Source root
//! ├── 00-minimal-av-softmarks/      # Subject folder → 00-minimal-av-softmarks.jpg
//! │   ├── take-1/
//! │   │   └── frame-0001.jpg
//! │   └── take-2/
//! │       └── frame-0042.JPG        # Newest anywhere in the subtree wins
//! ├── 01-dense-grid/
//! │   └── notes.txt                 # No JPEG → skipped
//! └── stray.jpg                     # Files at the root are ignored
//! ```
//!
//! Inside a subject folder, hidden entries are invisible: a dot-file is never
//! a candidate and a dot-directory is never descended into. That keeps macOS
//! AppleDouble sidecars (`._frame-0001.jpg`) from being mistaken for drawings.
//!
//! Both lookups are deterministic for a fixed filesystem snapshot: subject
//! folders are sorted by name, and the recursive walk is sorted by file name at
//! every level. When two JPEGs share a modification time, the one found later
//! in that walk wins.

use log::{debug, warn};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A JPEG found under a subject folder, with its modification time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateImage {
    pub path: PathBuf,
    pub modified: SystemTime,
}

/// Whether the file name has a `.jpg` or `.jpeg` extension, any case.
pub fn is_jpeg(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("jpg") || e.eq_ignore_ascii_case("jpeg"))
}

fn is_hidden(name: &OsStr) -> bool {
    name.as_encoded_bytes().starts_with(b".")
}

/// List the immediate child directories of `root`, sorted by base name.
///
/// Files and deeper descendants are excluded. Symlinks to directories count
/// as directories.
pub fn subject_folders(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let io_err = |source| ScanError::Io {
        path: root.to_path_buf(),
        source,
    };

    let mut dirs = Vec::new();
    for entry in fs::read_dir(root).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(dirs)
}

/// Find the most recently modified JPEG anywhere under `dir`.
///
/// Returns `Ok(None)` when the subtree holds no JPEG at all; that is a skip
/// for the caller, not an error. Entries the walk cannot read are logged and
/// passed over, and hidden entries below `dir` are pruned.
pub fn newest_jpeg(dir: &Path) -> Result<Option<CandidateImage>, ScanError> {
    let mut newest: Option<CandidateImage> = None;

    let walk = WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e.file_name()));
    for entry in walk {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("skipping unreadable entry under {}: {e}", dir.display());
                continue;
            }
        };

        let path = entry.path();
        if !is_jpeg(path) || !path.is_file() {
            continue;
        }

        let modified = fs::metadata(path)
            .and_then(|m| m.modified())
            .map_err(|source| ScanError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        // `>=`: on a tie the later file in walk order takes over
        if newest.as_ref().is_none_or(|n| modified >= n.modified) {
            newest = Some(CandidateImage {
                path: path.to_path_buf(),
                modified,
            });
        }
    }

    if let Some(found) = &newest {
        debug!("newest under {}: {}", dir.display(), found.path.display());
    }
    Ok(newest)
}
