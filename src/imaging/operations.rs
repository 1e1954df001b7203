//! High-level icon operations.
//!
//! Planning is a pure function of the configuration; writing combines a plan
//! with backend execution.

use super::backend::{BackendError, ImageBackend, SourceImage};
use super::params::IconPlan;
use crate::config::IconConfig;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Plan one output per size table entry, in table order.
///
/// Touches nothing on disk.
pub fn plan_icons(config: &IconConfig) -> Vec<IconPlan> {
    config
        .sizes
        .iter()
        .map(|entry| {
            let output_dir = config.project_path.join(&entry.label);
            let output_path = output_dir.join(&config.icon_name);
            IconPlan {
                label: entry.label.clone(),
                size: entry.size,
                output_dir,
                output_path,
            }
        })
        .collect()
}

/// Ensure the plan's directory exists, then write the icon.
///
/// Directory creation is idempotent; an existing icon is overwritten.
pub fn create_icon(backend: &impl ImageBackend, source: &SourceImage, plan: &IconPlan) -> Result<()> {
    std::fs::create_dir_all(&plan.output_dir)?;
    backend.write_icon(source, plan)
}
