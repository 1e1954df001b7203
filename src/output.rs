//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Generate
//!
//! ```text
//! Saved android/app/src/main/res/mipmap-mdpi/ic_launcher.png (48x48)
//! Saved android/app/src/main/res/mipmap-hdpi/ic_launcher.png (72x72)
//! ...
//! ```
//!
//! or, when the source image is absent:
//!
//! ```text
//! logo.png not found. Put your source image at this path and run again.
//! ```
//!
//! ## Check
//!
//! ```text
//! Input: logo.png (found)
//! mipmap-mdpi     48x48    -> android/app/src/main/res/mipmap-mdpi/ic_launcher.png
//! mipmap-hdpi     72x72    -> android/app/src/main/res/mipmap-hdpi/ic_launcher.png
//! ```
//!
//! # Architecture
//!
//! Each output has a `format_*` function (pure, returns the text) for
//! testability and a `print_*` wrapper that writes to stdout.

use crate::generate::IconEvent;
use crate::imaging::IconPlan;
use std::path::Path;

// ============================================================================
// Generate
// ============================================================================

/// Format a progress event as its display line.
pub fn format_icon_event(event: &IconEvent) -> String {
    match event {
        IconEvent::Written { path, size, .. } => {
            format!("Saved {} ({}x{})", path.display(), size, size)
        }
    }
}

/// Format the diagnostic for a missing source image.
pub fn format_missing_input(input: &Path) -> String {
    format!(
        "{} not found. Put your source image at this path and run again.",
        input.display()
    )
}

pub fn print_missing_input(input: &Path) {
    println!("{}", format_missing_input(input));
}

// ============================================================================
// Check
// ============================================================================

/// Format the planned outputs for `check`, one line per size table entry.
pub fn format_plan(input: &Path, input_exists: bool, plans: &[IconPlan]) -> Vec<String> {
    let status = if input_exists { "found" } else { "missing" };
    let mut lines = vec![format!("Input: {} ({})", input.display(), status)];

    let label_width = plans.iter().map(|p| p.label.len()).max().unwrap_or(0);
    for plan in plans {
        lines.push(format!(
            "{:<label_width$}  {:<9}-> {}",
            plan.label,
            plan.dimensions(),
            plan.output_path.display(),
        ));
    }
    lines
}

pub fn print_plan(input: &Path, input_exists: bool, plans: &[IconPlan]) {
    for line in format_plan(input, input_exists, plans) {
        println!("{}", line);
    }
}
