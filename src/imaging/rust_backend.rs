//! Pure Rust image processing backend, statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Identify | `image::image_dimensions` (header only, no full decode) |
//! | Decode (JPEG) | `image::ImageReader` |
//! | Resample | `image::DynamicImage::resize_exact` with `Lanczos3` |
//! | Crop | `image::DynamicImage::crop_imm` |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` |

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::params::{Quality, ThumbnailParams};
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::path::Path;

/// Pure Rust backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode an image from disk.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    let failed = |reason: String| BackendError::TransformFailed {
        path: path.to_path_buf(),
        reason,
    };
    ImageReader::open(path)
        .map_err(|e| failed(format!("cannot open: {e}")))?
        .with_guessed_format()
        .map_err(|e| failed(format!("cannot read: {e}")))?
        .decode()
        .map_err(|e| failed(format!("decode failed: {e}")))
}

/// Encode and save as baseline JPEG.
///
/// The error is a reason string naming `path`; the caller attaches it to the
/// source it was rendering.
fn save_jpeg(img: &DynamicImage, path: &Path, quality: Quality) -> Result<(), String> {
    let file = std::fs::File::create(path)
        .map_err(|e| format!("cannot create {}: {e}", path.display()))?;
    let writer = std::io::BufWriter::new(file);
    let quality = u8::try_from(quality.value()).unwrap_or(100);
    let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(writer, quality);
    // JPEG has no alpha channel
    DynamicImage::ImageRgb8(img.to_rgb8())
        .write_with_encoder(encoder)
        .map_err(|e| format!("JPEG encode to {} failed: {e}", path.display()))
}

impl ImageBackend for RustBackend {
    fn name(&self) -> &'static str {
        "rust"
    }

    fn check_available(&self) -> Result<(), BackendError> {
        if ImageFormat::Jpeg.reading_enabled() && ImageFormat::Jpeg.writing_enabled() {
            Ok(())
        } else {
            Err(BackendError::Unavailable(
                "the `image` crate was built without JPEG support".to_string(),
            ))
        }
    }

    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) =
            image::image_dimensions(path).map_err(|e| BackendError::DimensionProbeFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        Ok(Dimensions { width, height })
    }

    fn thumbnail(&self, params: &ThumbnailParams) -> Result<(), BackendError> {
        let g = params.geometry;
        let img = load_image(&params.source)?;

        let scaled = img.resize_exact(g.scaled_width, g.scaled_height, FilterType::Lanczos3);
        let cropped = scaled.crop_imm(g.offset_x, g.offset_y, g.target_size, g.target_size);

        save_jpeg(&cropped, &params.output, params.quality).map_err(|reason| {
            BackendError::TransformFailed {
                path: params.source.clone(),
                reason,
            }
        })
    }
}
