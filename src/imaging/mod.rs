//! Image processing — pure Rust.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode** | `image::ImageReader` → RGBA8 |
//! | **Resize** | `imageops::resize`, Lanczos3, forced square |
//! | **Encode** | `PngEncoder` |
//!
//! The module is split into:
//! - **Parameters**: [`IconPlan`], one planned output file
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: planning from config, and directory-then-write execution

pub mod backend;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, ImageBackend, SourceImage};
pub use operations::{create_icon, plan_icons};
pub use params::IconPlan;
pub use rust_backend::RustBackend;
