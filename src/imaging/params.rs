//! Parameter types for icon operations.
//!
//! These structs describe *what* to write, not *how*. They sit between
//! [`operations`](super::operations), which plans one output per size table
//! entry, and the [`backend`](super::backend), which does the pixel work.

use std::path::PathBuf;

/// One planned output: a square icon of `size` pixels at `output_path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconPlan {
    /// Density bucket label, also the name of the output directory.
    pub label: String,
    /// Edge length in pixels.
    pub size: u32,
    /// `<project_path>/<label>`
    pub output_dir: PathBuf,
    /// `<project_path>/<label>/<icon_name>`
    pub output_path: PathBuf,
}

impl IconPlan {
    /// Dimensions as displayed to the user, e.g. `48x48`.
    pub fn dimensions(&self) -> String {
        format!("{}x{}", self.size, self.size)
    }
}
