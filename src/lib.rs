//! # Launcher Icons
//!
//! Generates Android launcher icons for every `mipmap-*` density bucket from
//! one square source image.
//!
//! ```text
//! logo.png (1024x1024)
//!   → android/app/src/main/res/mipmap-mdpi/ic_launcher.png      48x48
//!   → android/app/src/main/res/mipmap-hdpi/ic_launcher.png      72x72
//!   → android/app/src/main/res/mipmap-xhdpi/ic_launcher.png     96x96
//!   → android/app/src/main/res/mipmap-xxhdpi/ic_launcher.png    144x144
//!   → android/app/src/main/res/mipmap-xxxhdpi/ic_launcher.png   192x192
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `IconConfig`: stock defaults, optional `icongen.toml`, validation |
//! | [`imaging`] | Decode, Lanczos3 square resize, PNG encode; output planning |
//! | [`generate`] | Runs one generation: input check, decode once, write every size |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Decode Once
//!
//! The source is decoded a single time into an RGBA8 buffer and every icon is
//! resized from that buffer. Inputs without alpha come out fully opaque.
//!
//! ## Squash, Don't Crop
//!
//! Each icon is resized to exactly `size × size`. A non-square source is
//! squashed; there is no crop or padding step.
//!
//! ## Missing Input Is Not An Error
//!
//! An absent source image ends the run cleanly with one diagnostic line and
//! nothing written. Decode and write failures are errors and stop the run.

pub mod config;
pub mod generate;
pub mod imaging;
pub mod output;

#[cfg(test)]
pub(crate) mod test_helpers;
