//! Pure calculation functions for image dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

use super::backend::Dimensions;

/// Where to resample and where to cut for a square crop-to-fill thumbnail.
///
/// Resampling the source to `scaled_width × scaled_height` and then cropping
/// a `target_size × target_size` window whose top-left corner sits at
/// (`offset_x`, `offset_y`) covers the whole square with no letterboxing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropGeometry {
    pub scaled_width: u32,
    pub scaled_height: u32,
    pub offset_x: u32,
    pub offset_y: u32,
    pub target_size: u32,
}

/// Calculate the crop-to-fill geometry for a square target.
///
/// The shorter source edge is scaled to exactly `target_size`; the longer edge
/// overflows and is center-cropped. Sources smaller than the target are
/// upscaled.
///
/// # Arguments
/// * `source` - Original image dimensions
/// * `target_size` - Edge length of the square output
///
/// Returns `None` if any of the inputs is zero. The caller knows which file
/// the dimensions came from and reports it.
///
/// # Examples
/// ```
/// # use drawing_thumbs::imaging::{Dimensions, calculate_crop_geometry};
/// let g = calculate_crop_geometry(Dimensions { width: 800, height: 600 }, 256).unwrap();
/// assert_eq!((g.scaled_width, g.scaled_height), (341, 256));
/// assert_eq!((g.offset_x, g.offset_y), (42, 0));
/// ```
pub fn calculate_crop_geometry(source: Dimensions, target_size: u32) -> Option<CropGeometry> {
    let Dimensions { width, height } = source;
    if width == 0 || height == 0 || target_size == 0 {
        return None;
    }

    let scale = target_size as f64 / width.min(height) as f64;
    // Float error can land the tight edge at target - 1; clamp it back up.
    let scaled_width = ((width as f64 * scale).round() as u32).max(target_size);
    let scaled_height = ((height as f64 * scale).round() as u32).max(target_size);

    Some(CropGeometry {
        scaled_width,
        scaled_height,
        offset_x: (scaled_width - target_size) / 2,
        offset_y: (scaled_height - target_size) / 2,
        target_size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(width: u32, height: u32, size: u32) -> CropGeometry {
        calculate_crop_geometry(Dimensions { width, height }, size).unwrap()
    }

    #[test]
    fn landscape_crops_horizontally() {
        // 800x600 → scale 256/600 → 341.33x256 → 341x256, offset (341-256)/2 = 42
        let g = geometry(800, 600, 256);
        assert_eq!((g.scaled_width, g.scaled_height), (341, 256));
        assert_eq!((g.offset_x, g.offset_y), (42, 0));
        assert_eq!(g.target_size, 256);
    }

    #[test]
    fn portrait_crops_vertically() {
        let g = geometry(600, 800, 256);
        assert_eq!((g.scaled_width, g.scaled_height), (256, 341));
        assert_eq!((g.offset_x, g.offset_y), (0, 42));
    }

    #[test]
    fn square_source_has_no_offset() {
        for (side, size) in [(256, 256), (1000, 256), (100, 256), (3, 7), (4096, 1)] {
            let g = geometry(side, side, size);
            assert_eq!((g.scaled_width, g.scaled_height), (size, size));
            assert_eq!((g.offset_x, g.offset_y), (0, 0), "{side}px → {size}px");
        }
    }

    #[test]
    fn small_source_is_upscaled() {
        // 100x50 → scale 256/50 = 5.12 → 512x256
        let g = geometry(100, 50, 256);
        assert_eq!((g.scaled_width, g.scaled_height), (512, 256));
        assert_eq!((g.offset_x, g.offset_y), (128, 0));
    }

    #[test]
    fn odd_overflow_floors_the_offset() {
        // 257x256 at 256 → 257x256, (257-256)/2 = 0
        let g = geometry(257, 256, 256);
        assert_eq!(g.scaled_width, 257);
        assert_eq!(g.offset_x, 0);
    }

    #[test]
    fn extreme_panorama() {
        // 10000x100 → scale 2.56 → 25600x256
        let g = geometry(10000, 100, 256);
        assert_eq!((g.scaled_width, g.scaled_height), (25600, 256));
        assert_eq!(g.offset_x, (25600 - 256) / 2);
    }

    #[test]
    fn scaled_image_always_covers_target() {
        let sizes = [1, 7, 64, 255, 256, 257, 1000];
        let dims = [1, 2, 3, 17, 99, 255, 256, 333, 600, 800, 1023, 4032];
        for &size in &sizes {
            for &w in &dims {
                for &h in &dims {
                    let g = geometry(w, h, size);
                    assert!(g.scaled_width >= size, "{w}x{h}@{size}: {g:?}");
                    assert!(g.scaled_height >= size, "{w}x{h}@{size}: {g:?}");
                    assert_eq!(g.scaled_width.min(g.scaled_height), size, "{w}x{h}@{size}");
                    assert!(g.offset_x + size <= g.scaled_width);
                    assert!(g.offset_y + size <= g.scaled_height);
                }
            }
        }
    }

    #[test]
    fn zero_width_is_rejected() {
        assert_eq!(
            calculate_crop_geometry(Dimensions { width: 0, height: 600 }, 256),
            None
        );
    }

    #[test]
    fn zero_height_is_rejected() {
        assert!(calculate_crop_geometry(Dimensions { width: 800, height: 0 }, 256).is_none());
    }

    #[test]
    fn zero_target_is_rejected() {
        assert!(calculate_crop_geometry(Dimensions { width: 800, height: 600 }, 0).is_none());
    }
}
