//! High-level image operations.
//!
//! These functions combine calculations with backend execution.
//! They take configuration, compute parameters, and call the backend.

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::calculations::{CropGeometry, calculate_crop_geometry};
use super::params::{Quality, ThumbnailParams};
use log::debug;
use std::path::Path;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Get image dimensions using the backend.
pub fn get_dimensions(backend: &impl ImageBackend, path: &Path) -> Result<Dimensions> {
    backend.identify(path)
}

/// Configuration for thumbnail generation.
#[derive(Debug, Clone)]
pub struct ThumbnailConfig {
    /// Edge length of the square output, in pixels.
    pub size: u32,
    pub quality: Quality,
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            size: 256,
            quality: Quality::default(),
        }
    }
}

/// Plan a thumbnail operation without executing it.
///
/// Useful for testing parameter generation.
pub fn plan_thumbnail(
    source: &Path,
    output_path: &Path,
    source_dims: Dimensions,
    config: &ThumbnailConfig,
) -> Result<ThumbnailParams> {
    let geometry = calculate_crop_geometry(source_dims, config.size).ok_or_else(|| {
        BackendError::InvalidDimensions {
            path: source.to_path_buf(),
            width: source_dims.width,
            height: source_dims.height,
            target: config.size,
        }
    })?;

    Ok(ThumbnailParams {
        source: source.to_path_buf(),
        output: output_path.to_path_buf(),
        geometry,
        quality: config.quality,
    })
}

/// Create a square crop-to-fill JPEG thumbnail at `output_path`.
///
/// Probes the source, computes the geometry, runs the backend, and then
/// checks that a non-empty file actually landed at `output_path`.
pub fn create_thumbnail(
    backend: &impl ImageBackend,
    source: &Path,
    output_path: &Path,
    config: &ThumbnailConfig,
) -> Result<CropGeometry> {
    let dims = get_dimensions(backend, source)?;
    let params = plan_thumbnail(source, output_path, dims, config)?;
    debug!(
        "{}: {}x{} → {:?}",
        source.display(),
        dims.width,
        dims.height,
        params.geometry
    );

    backend.thumbnail(&params)?;

    let written = std::fs::metadata(output_path)
        .map(|m| m.is_file() && m.len() > 0)
        .unwrap_or(false);
    if !written {
        return Err(BackendError::TransformFailed {
            path: source.to_path_buf(),
            reason: format!("no output written to {}", output_path.display()),
        });
    }

    Ok(params.geometry)
}
