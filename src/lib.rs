//! # drawing-thumbs
//!
//! For every immediate subfolder of a drawings directory, find the newest JPEG
//! anywhere inside it and write a 256×256 crop-to-fill thumbnail named after
//! the subfolder:
//!
//! ```text
//! artefact/drawing/00-minimal-av-softmarks/**/newest.jpg
//!     → config/synth/00-minimal-av-softmarks.jpg
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Subject folder listing and newest-JPEG lookup |
//! | [`imaging`] | Crop-to-fill geometry and the swappable image backends |
//! | [`process`] | The batch run: validation, iteration, failure policy, exit codes |
//! | [`config`] | Backend selection and thumbnail settings |
//! | [`output`] | Line formatting and the [`output::Reporter`] sink |
//!
//! # Design Decisions
//!
//! ## Backend Behind a Trait
//!
//! Probing and resampling go through [`imaging::ImageBackend`]. The default
//! [`imaging::RustBackend`] is pure Rust and has no runtime dependencies; the
//! [`imaging::MagickBackend`] drives ImageMagick for parity with script-based
//! setups. The run never knows which one it has.
//!
//! ## Skip vs Abort
//!
//! A folder with no JPEG is skipped and the run carries on. A JPEG that cannot
//! be measured or transformed aborts the whole run, since it means the input
//! is corrupt rather than absent.
//!
//! ## Injected Reporting
//!
//! [`process::process`] never prints. Events go to a [`output::Reporter`],
//! which is the console in the binary and a `Vec` in tests.

pub mod config;
pub mod imaging;
pub mod output;
pub mod process;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
