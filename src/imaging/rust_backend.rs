//! Pure Rust icon backend built on the `image` crate.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, TIFF, WebP) | `image::ImageReader` with content sniffing |
//! | Normalize | `DynamicImage::into_rgba8` |
//! | Resize | `image::imageops::resize` with `Lanczos3` filter |
//! | Encode → PNG | `image::codecs::png::PngEncoder` |

use super::backend::{BackendError, ImageBackend, SourceImage};
use super::params::IconPlan;
use image::codecs::png::PngEncoder;
use image::imageops::FilterType;
use image::{ExtendedColorType, ImageEncoder, ImageReader};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Pure Rust backend using the `image` crate.
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

impl ImageBackend for RustBackend {
    fn decode(&self, path: &Path) -> Result<SourceImage, BackendError> {
        // Sniff the format from content so a mislabeled extension still decodes.
        let img = ImageReader::open(path)?
            .with_guessed_format()?
            .decode()
            .map_err(|source| BackendError::Decode {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(SourceImage::new(img.into_rgba8()))
    }

    fn write_icon(&self, source: &SourceImage, plan: &IconPlan) -> Result<(), BackendError> {
        // Both edges forced to `size`: aspect ratio is not preserved.
        let resized =
            image::imageops::resize(source.pixels(), plan.size, plan.size, FilterType::Lanczos3);

        let file = std::fs::File::create(&plan.output_path)?;
        let mut writer = BufWriter::new(file);
        PngEncoder::new(&mut writer)
            .write_image(
                resized.as_raw(),
                resized.width(),
                resized.height(),
                ExtendedColorType::Rgba8,
            )
            .map_err(|source| BackendError::Encode {
                path: plan.output_path.clone(),
                source,
            })?;
        writer.flush()?;
        Ok(())
    }
}
