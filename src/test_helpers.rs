//! Shared test utilities.
//!
//! Synthetic source images, PNG readback, and directory listings for tests
//! that run against a `tempfile::TempDir`.

use crate::config::IconConfig;
use image::{ExtendedColorType, ImageEncoder, Rgb, RgbImage, Rgba, RgbaImage};
use std::path::{Path, PathBuf};

// =========================================================================
// Fixture setup
// =========================================================================

/// Default config rooted in `dir`: input `dir/logo.png` (created, empty),
/// icons under `dir/res`.
///
/// Only suitable for the mock backend, which never reads the input.
pub fn mock_config(dir: &Path) -> IconConfig {
    let input = dir.join("logo.png");
    std::fs::write(&input, b"").unwrap();
    IconConfig {
        project_path: dir.join("res"),
        input_image: input,
        ..IconConfig::default()
    }
}

/// Write a solid-color RGBA PNG.
pub fn create_test_png(path: &Path, width: u32, height: u32, color: Rgba<u8>) {
    let img = RgbaImage::from_pixel(width, height, color);
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::png::PngEncoder::new(writer)
        .write_image(img.as_raw(), width, height, ExtendedColorType::Rgba8)
        .unwrap();
}

/// Write a small gradient JPEG (three channels, no alpha).
pub fn create_test_jpeg(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::jpeg::JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, ExtendedColorType::Rgb8)
        .unwrap();
}

/// Decode a PNG written by the backend. Panics if it is not a PNG.
pub fn read_png(path: &Path) -> RgbaImage {
    image::ImageReader::with_format(
        std::io::BufReader::new(std::fs::File::open(path).unwrap()),
        image::ImageFormat::Png,
    )
    .decode()
    .unwrap_or_else(|e| panic!("{} is not a valid PNG: {e}", path.display()))
    .into_rgba8()
}

// =========================================================================
// Filesystem snapshots
// =========================================================================

/// All regular files under `root`, as sorted `/`-joined relative paths.
pub fn list_files(root: &Path) -> Vec<String> {
    let mut files = Vec::new();
    collect_files(root, root, &mut files);
    files.sort();
    files
}

fn collect_files(root: &Path, dir: &Path, files: &mut Vec<String>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in entries {
        let path: PathBuf = entry.unwrap().path();
        if path.is_dir() {
            collect_files(root, &path, files);
        } else {
            let relative = path.strip_prefix(root).unwrap();
            let parts: Vec<String> = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect();
            files.push(parts.join("/"));
        }
    }
}
