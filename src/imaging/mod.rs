//! Image processing behind a swappable backend.
//!
//! | Operation | Rust backend | ImageMagick backend |
//! |---|---|---|
//! | **Identify** | `image::image_dimensions` | `identify -format "%w %h"` |
//! | **Thumbnail** | `resize_exact` + `crop_imm` + `JpegEncoder` | `convert -resize -crop` |
//!
//! The module is split into:
//! - **Calculations**: Pure crop-to-fill geometry (unit testable)
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`] + [`MagickBackend`]
//! - **Operations**: High-level functions combining calculations + backend

pub mod backend;
mod calculations;
pub mod magick_backend;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::{CropGeometry, calculate_crop_geometry};
pub use magick_backend::MagickBackend;
pub use operations::{ThumbnailConfig, create_thumbnail, get_dimensions};
pub use params::{Quality, ThumbnailParams};
pub use rust_backend::RustBackend;
