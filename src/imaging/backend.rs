//! Image backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two operations icon generation
//! needs: decode the source once, then write one resized PNG per plan.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend).

use super::params::IconPlan;
use image::RgbaImage;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Decoded source image, normalized to RGBA8.
///
/// Read-only once built; every icon is resized from the same buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceImage {
    pixels: RgbaImage,
}

impl SourceImage {
    pub fn new(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}

/// Trait for image backends.
///
/// `Sync` so a single backend can serve a rayon pool in parallel mode.
pub trait ImageBackend: Sync {
    /// Decode the file at `path` into a four-channel buffer.
    fn decode(&self, path: &Path) -> Result<SourceImage, BackendError>;

    /// Resize `source` to `plan.size` square and write it as PNG to
    /// `plan.output_path`, replacing any existing file.
    fn write_icon(&self, source: &SourceImage, plan: &IconPlan) -> Result<(), BackendError>;
}
