//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the three operations every backend must
//! support: an availability check, identify, and thumbnail.
//!
//! Two implementations exist:
//! - [`RustBackend`](super::rust_backend::RustBackend): in-process, built on
//!   the `image` crate. Always the default.
//! - [`MagickBackend`](super::magick_backend::MagickBackend): shells out to
//!   ImageMagick's `identify` and `convert`.

use super::params::ThumbnailParams;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("image backend unavailable: {0}")]
    Unavailable(String),
    #[error("Failed to read dimensions of {}: {reason}", path.display())]
    DimensionProbeFailed { path: PathBuf, reason: String },
    #[error(
        "Invalid image dimensions {width}x{height} for {} (target size {target})",
        path.display()
    )]
    InvalidDimensions {
        path: PathBuf,
        width: u32,
        height: u32,
        target: u32,
    },
    #[error("Resize/crop failed for {}: {reason}", path.display())]
    TransformFailed { path: PathBuf, reason: String },
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for image processing backends.
///
/// The orchestration code only ever talks to this trait, so swapping the
/// in-process backend for the ImageMagick one (or a mock in tests) never
/// touches the pipeline.
pub trait ImageBackend {
    /// Short name used in diagnostics (`rust`, `magick`).
    fn name(&self) -> &'static str;

    /// Check that the backend can actually run on this system.
    ///
    /// Called once before any filesystem writes. An `Err` here is a startup
    /// failure, not a per-file one.
    fn check_available(&self) -> Result<(), BackendError>;

    /// Get image dimensions.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Resample to the fill size, crop the square window, encode as JPEG.
    fn thumbnail(&self, params: &ThumbnailParams) -> Result<(), BackendError>;
}
