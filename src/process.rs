//! The batch run: validate, prepare, iterate subject folders, report.
//!
//! ## Flow
//!
//! ```text
//! validate  source is a directory, backend is available   (no writes yet)
//! prepare   create the destination directory
//! iterate   for each subject folder, sorted by name:
//!             no JPEG        → Skipped, carry on
//!             newest JPEG    → <dest>/<folder>.jpg, Wrote
//! finish    Finished { processed }
//! ```
//!
//! ## Failure policy
//!
//! A folder without a JPEG is a soft skip. Anything that goes wrong with the
//! JPEG that *was* found (unreadable header, zero dimensions, failed
//! transform) aborts the whole run: it points at a corrupt input the operator
//! should look at, so it is never folded into a skip.

use crate::imaging::{BackendError, ImageBackend, ThumbnailConfig, create_thumbnail};
use crate::output::Reporter;
use crate::scan::{self, ScanError};
use log::debug;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Exit status for a usage error (bad arguments, source not a directory).
pub const EXIT_USAGE: u8 = 1;
/// Exit status when the image backend cannot run on this system.
pub const EXIT_MISSING_DEPENDENCY: u8 = 3;
/// Exit status for a hard failure part way through the run.
pub const EXIT_FAILURE: u8 = 4;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("source is not a directory: {}", .0.display())]
    SourceNotDirectory(PathBuf),
    #[error("{backend} backend unavailable: {reason}")]
    MissingDependency {
        backend: &'static str,
        reason: String,
    },
    #[error("could not create destination directory {}: {source}", path.display())]
    CreateDestination {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Image(#[from] BackendError),
}

impl ProcessError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            ProcessError::SourceNotDirectory(_) => EXIT_USAGE,
            ProcessError::MissingDependency { .. } => EXIT_MISSING_DEPENDENCY,
            ProcessError::CreateDestination { .. }
            | ProcessError::Scan(_)
            | ProcessError::Image(_) => EXIT_FAILURE,
        }
    }
}

/// Progress events emitted to the [`Reporter`] during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessEvent {
    /// A thumbnail was written to `output` from `source`.
    Wrote { output: PathBuf, source: PathBuf },
    /// `folder` holds no JPEG anywhere in its subtree.
    Skipped { folder: PathBuf },
    /// All folders handled.
    Finished { processed: usize },
}

/// Counts for a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub processed: usize,
    pub skipped: usize,
}

/// `<dest>/<folder base name>.jpg`
pub fn output_path_for(dest_dir: &Path, folder: &Path) -> PathBuf {
    let mut name = folder.file_name().unwrap_or_default().to_os_string();
    name.push(".jpg");
    dest_dir.join(name)
}

/// Write one thumbnail per subject folder of `source_root` into `dest_dir`.
pub fn process(
    source_root: &Path,
    dest_dir: &Path,
    backend: &impl ImageBackend,
    config: &ThumbnailConfig,
    reporter: &mut impl Reporter,
) -> Result<RunSummary, ProcessError> {
    if !source_root.is_dir() {
        return Err(ProcessError::SourceNotDirectory(source_root.to_path_buf()));
    }
    backend
        .check_available()
        .map_err(|e| ProcessError::MissingDependency {
            backend: backend.name(),
            reason: match e {
                BackendError::Unavailable(reason) => reason,
                other => other.to_string(),
            },
        })?;
    debug!("using {} backend", backend.name());

    std::fs::create_dir_all(dest_dir).map_err(|source| ProcessError::CreateDestination {
        path: dest_dir.to_path_buf(),
        source,
    })?;

    let mut summary = RunSummary::default();
    for folder in scan::subject_folders(source_root)? {
        let Some(newest) = scan::newest_jpeg(&folder)? else {
            reporter.report(ProcessEvent::Skipped { folder });
            summary.skipped += 1;
            continue;
        };

        let output = output_path_for(dest_dir, &folder);
        create_thumbnail(backend, &newest.path, &output, config)?;
        reporter.report(ProcessEvent::Wrote {
            output,
            source: newest.path,
        });
        summary.processed += 1;
    }

    reporter.report(ProcessEvent::Finished {
        processed: summary.processed,
    });
    Ok(summary)
}
