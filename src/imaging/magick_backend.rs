//! ImageMagick subprocess backend.
//!
//! Shells out to `identify` and `convert`, the same way a shell script
//! driving ImageMagick would. Selected with `DRAWING_THUMBS_BACKEND=magick`
//! for machines where ImageMagick's resampler is preferred.
//!
//! | Operation | Command |
//! |---|---|
//! | Availability | `convert -version`, `identify -version` |
//! | Identify | `identify -format "%w %h" <src>[0]` |
//! | Thumbnail | `convert <src> -resize WxH! -crop SxS+X+Y +repage -quality Q jpeg:<dst>` |

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::params::ThumbnailParams;
use log::debug;
use std::path::Path;
use std::process::{Command, Stdio};

pub struct MagickBackend {
    convert: String,
    identify: String,
}

impl MagickBackend {
    pub fn new() -> Self {
        Self {
            convert: "convert".to_string(),
            identify: "identify".to_string(),
        }
    }
}

impl Default for MagickBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse `identify -format "%w %h"` output.
fn parse_dimensions(stdout: &str) -> Option<Dimensions> {
    let mut parts = stdout.split_whitespace();
    let width = parts.next()?.parse().ok()?;
    let height = parts.next()?.parse().ok()?;
    Some(Dimensions { width, height })
}

/// Build the `convert` argument list for a thumbnail.
fn convert_args(params: &ThumbnailParams) -> Vec<String> {
    let g = params.geometry;
    vec![
        params.source.to_string_lossy().into_owned(),
        "-resize".to_string(),
        // `!` forces the exact size; the geometry already preserves aspect
        format!("{}x{}!", g.scaled_width, g.scaled_height),
        "-crop".to_string(),
        format!(
            "{}x{}+{}+{}",
            g.target_size, g.target_size, g.offset_x, g.offset_y
        ),
        "+repage".to_string(),
        "-quality".to_string(),
        params.quality.value().to_string(),
        format!("jpeg:{}", params.output.to_string_lossy()),
    ]
}

/// Run `<binary> -version` and fail with `Unavailable` unless it succeeds.
fn check_binary(binary: &str) -> Result<(), BackendError> {
    match Command::new(binary)
        .arg("-version")
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .output()
    {
        Ok(output) if output.status.success() => {
            let version = String::from_utf8_lossy(&output.stdout);
            debug!(
                "{binary} version: {}",
                version.lines().next().unwrap_or("unknown")
            );
            Ok(())
        }
        Ok(_) => Err(BackendError::Unavailable(format!(
            "`{binary}` was found but `{binary} -version` failed"
        ))),
        Err(_) => Err(BackendError::Unavailable(format!(
            "this tool requires `{binary}` (ImageMagick), which is not installed or not in PATH"
        ))),
    }
}

impl ImageBackend for MagickBackend {
    fn name(&self) -> &'static str {
        "magick"
    }

    fn check_available(&self) -> Result<(), BackendError> {
        check_binary(&self.convert)?;
        check_binary(&self.identify)
    }

    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let probe_failed = |reason: String| BackendError::DimensionProbeFailed {
            path: path.to_path_buf(),
            reason,
        };

        // `[0]` keeps multi-frame inputs to a single answer
        let target = format!("{}[0]", path.to_string_lossy());
        let output = Command::new(&self.identify)
            .args(["-format", "%w %h", target.as_str()])
            .output()
            .map_err(|e| probe_failed(e.to_string()))?;
        if !output.status.success() {
            return Err(probe_failed(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        parse_dimensions(&String::from_utf8_lossy(&output.stdout))
            .ok_or_else(|| probe_failed("could not parse width/height".to_string()))
    }

    fn thumbnail(&self, params: &ThumbnailParams) -> Result<(), BackendError> {
        let output = Command::new(&self.convert)
            .args(convert_args(params))
            .stdout(Stdio::null())
            .output()
            .map_err(|e| BackendError::TransformFailed {
                path: params.source.clone(),
                reason: e.to_string(),
            })?;

        if output.status.success() {
            Ok(())
        } else {
            Err(BackendError::TransformFailed {
                path: params.source.clone(),
                reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::calculations::CropGeometry;
    use crate::imaging::params::Quality;

    #[test]
    fn parse_dimensions_reads_width_and_height() {
        assert_eq!(
            parse_dimensions("800 600"),
            Some(Dimensions {
                width: 800,
                height: 600
            })
        );
        assert_eq!(
            parse_dimensions("  4032 3024\n"),
            Some(Dimensions {
                width: 4032,
                height: 3024
            })
        );
    }

    #[test]
    fn parse_dimensions_rejects_garbage() {
        assert_eq!(parse_dimensions(""), None);
        assert_eq!(parse_dimensions("800"), None);
        assert_eq!(parse_dimensions("wide tall"), None);
        assert_eq!(parse_dimensions("-1 600"), None);
    }

    #[test]
    fn convert_args_encode_geometry() {
        let params = ThumbnailParams {
            source: "/drawings/A/photo.jpg".into(),
            output: "/synth/A.jpg".into(),
            geometry: CropGeometry {
                scaled_width: 341,
                scaled_height: 256,
                offset_x: 42,
                offset_y: 0,
                target_size: 256,
            },
            quality: Quality::new(90),
        };

        assert_eq!(
            convert_args(&params),
            vec![
                "/drawings/A/photo.jpg",
                "-resize",
                "341x256!",
                "-crop",
                "256x256+42+0",
                "+repage",
                "-quality",
                "90",
                "jpeg:/synth/A.jpg",
            ]
        );
    }

    #[test]
    fn missing_binary_is_unavailable() {
        let backend = MagickBackend {
            convert: "drawing-thumbs-no-such-convert".to_string(),
            identify: "drawing-thumbs-no-such-identify".to_string(),
        };

        assert!(matches!(
            backend.check_available(),
            Err(BackendError::Unavailable(_))
        ));
        assert!(matches!(
            backend.identify(Path::new("/x.jpg")),
            Err(BackendError::DimensionProbeFailed { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn missing_identify_is_unavailable_even_with_convert() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::TempDir::new().unwrap();
        let convert = tmp.path().join("convert");
        std::fs::write(&convert, "#!/bin/sh\necho 'Version: ImageMagick 6.9.12'\n").unwrap();
        std::fs::set_permissions(&convert, std::fs::Permissions::from_mode(0o755)).unwrap();

        let backend = MagickBackend {
            convert: convert.to_string_lossy().into_owned(),
            identify: "drawing-thumbs-no-such-identify".to_string(),
        };
        check_binary(&backend.convert).unwrap();

        match backend.check_available() {
            Err(BackendError::Unavailable(reason)) => {
                assert!(reason.contains("drawing-thumbs-no-such-identify"), "{reason}")
            }
            other => panic!("expected Unavailable, got {other:?}"),
        }
    }
}
