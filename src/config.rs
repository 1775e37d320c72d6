//! Run settings.
//!
//! There is no config file: the two positional paths are the whole CLI, and
//! the thumbnail itself is fixed at 256×256, JPEG quality 90. The one knob is
//! the image backend, picked from the environment:
//!
//! ```text
//! DRAWING_THUMBS_BACKEND=rust     # default, in-process `image` crate
//! DRAWING_THUMBS_BACKEND=magick   # ImageMagick `convert` / `identify`
//! ```

use crate::imaging::ThumbnailConfig;
use thiserror::Error;

/// Environment variable that selects the image backend.
pub const BACKEND_ENV_VAR: &str = "DRAWING_THUMBS_BACKEND";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown DRAWING_THUMBS_BACKEND value {0:?} (expected `rust` or `magick`)")]
    UnknownBackend(String),
}

/// Which [`ImageBackend`](crate::imaging::ImageBackend) does the pixel work.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BackendKind {
    #[default]
    Rust,
    Magick,
}

impl BackendKind {
    /// Parse a backend name. Unset or blank means the default.
    pub fn parse(value: Option<&str>) -> Result<Self, ConfigError> {
        match value.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(v) if v.eq_ignore_ascii_case("rust") => Ok(Self::Rust),
            Some(v) if v.eq_ignore_ascii_case("magick") || v.eq_ignore_ascii_case("imagemagick") => {
                Ok(Self::Magick)
            }
            Some(v) => Err(ConfigError::UnknownBackend(v.to_string())),
        }
    }
}

/// Everything a run needs besides the two paths.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub backend: BackendKind,
    pub thumbnail: ThumbnailConfig,
}

impl Settings {
    /// Build settings from an environment lookup.
    ///
    /// Takes the lookup as a function so tests don't have to mutate the
    /// process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let backend = BackendKind::parse(lookup(BACKEND_ENV_VAR).as_deref())?;
        Ok(Self {
            backend,
            thumbnail: ThumbnailConfig::default(),
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}
