//! Icon generation configuration.
//!
//! Handles loading, validating, and merging `icongen.toml`. Stock defaults
//! reproduce the Android launcher layout; a config file overrides only the
//! keys it names.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! project_path = "android/app/src/main/res"  # Base resource directory
//! input_image = "logo.png"                   # Square source image
//! icon_name = "ic_launcher.png"              # File name in every density dir
//!
//! [[sizes]]
//! label = "mipmap-mdpi"
//! size = 48
//!
//! [[sizes]]
//! label = "mipmap-hdpi"
//! size = 72
//!
//! # ... mipmap-xhdpi 96, mipmap-xxhdpi 144, mipmap-xxxhdpi 192
//!
//! [processing]
//! max_processes = 1   # 1 = sequential, 0 = one worker per core
//! ```
//!
//! ## Partial Configuration
//!
//! Tables merge key-by-key. The `[[sizes]]` array is replaced as a whole:
//! listing any entry discards the five defaults.
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "icongen.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Complete, validated configuration for one run.
///
/// Built once in `main` and passed by reference; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IconConfig {
    /// Base directory under which per-density directories are created.
    pub project_path: PathBuf,
    /// Source image; must exist when generation starts.
    pub input_image: PathBuf,
    /// File name written into every density directory.
    pub icon_name: String,
    /// Ordered label → edge length table.
    pub sizes: SizeTable,
    /// Worker settings.
    pub processing: ProcessingConfig,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            project_path: PathBuf::from("android/app/src/main/res"),
            input_image: PathBuf::from("logo.png"),
            icon_name: "ic_launcher.png".to_string(),
            sizes: SizeTable::default(),
            processing: ProcessingConfig::default(),
        }
    }
}

impl IconConfig {
    /// Validate values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sizes.is_empty() {
            return Err(ConfigError::Validation("sizes must not be empty".into()));
        }
        if !is_single_component(&self.icon_name) {
            return Err(ConfigError::Validation(format!(
                "icon_name must be a plain file name, got {:?}",
                self.icon_name
            )));
        }
        let mut seen = HashSet::new();
        for entry in self.sizes.iter() {
            if !is_single_component(&entry.label) {
                return Err(ConfigError::Validation(format!(
                    "sizes label must be a plain directory name, got {:?}",
                    entry.label
                )));
            }
            if entry.size == 0 {
                return Err(ConfigError::Validation(format!(
                    "size for {} must be positive",
                    entry.label
                )));
            }
            if !seen.insert(entry.label.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate sizes label {}",
                    entry.label
                )));
            }
        }
        Ok(())
    }

    /// Apply command-line overrides on top of the loaded values.
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(input) = overrides.input_image {
            self.input_image = input;
        }
        if let Some(project) = overrides.project_path {
            self.project_path = project;
        }
        if let Some(name) = overrides.icon_name {
            self.icon_name = name;
        }
        self
    }
}

/// Values supplied on the command line; `None` keeps the configured value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub input_image: Option<PathBuf>,
    pub project_path: Option<PathBuf>,
    pub icon_name: Option<String>,
}

fn is_single_component(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains('/')
        && !name.contains('\\')
}

/// One density bucket: output directory name and square edge length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SizeEntry {
    pub label: String,
    pub size: u32,
}

impl SizeEntry {
    pub fn new(label: &str, size: u32) -> Self {
        Self {
            label: label.to_string(),
            size,
        }
    }
}

/// Ordered size table. Order only affects reporting order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SizeTable(Vec<SizeEntry>);

impl SizeTable {
    pub fn new(entries: Vec<SizeEntry>) -> Self {
        Self(entries)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SizeEntry> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for SizeTable {
    fn default() -> Self {
        Self(vec![
            SizeEntry::new("mipmap-mdpi", 48),
            SizeEntry::new("mipmap-hdpi", 72),
            SizeEntry::new("mipmap-xhdpi", 96),
            SizeEntry::new("mipmap-xxhdpi", 144),
            SizeEntry::new("mipmap-xxxhdpi", 192),
        ])
    }
}

/// Worker settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Number of icons written concurrently.
    /// `1` writes strictly in table order; `0` uses every core.
    /// Values larger than the core count are clamped down.
    pub max_processes: usize,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self { max_processes: 1 }
    }
}

/// Resolve the effective thread count from config.
///
/// - `0` → use all available cores
/// - `n` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    match config.max_processes {
        0 => cores,
        n => n.min(cores),
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// Base layer for merging user overrides on top.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(IconConfig::default())
        .map_err(|e| ConfigError::Validation(format!("default config must serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values, arrays included, replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read a config file as a raw TOML value.
pub fn load_raw_config(path: &Path) -> Result<toml::Value, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<IconConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: IconConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the effective config.
///
/// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_FILE`] in
/// `dir` is used if present, otherwise stock defaults.
pub fn load_config(path: Option<&Path>, dir: &Path) -> Result<IconConfig, ConfigError> {
    let overlay = match path {
        Some(p) => Some(load_raw_config(p)?),
        None => {
            let implicit = dir.join(DEFAULT_CONFIG_FILE);
            if implicit.exists() {
                Some(load_raw_config(&implicit)?)
            } else {
                None
            }
        }
    };
    resolve_config(stock_defaults_value()?, overlay)
}

/// Returns a fully-commented stock `icongen.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Launcher Icons Configuration
# ============================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# Base resource directory; one subdirectory per density is created here.
project_path = "android/app/src/main/res"

# Source image. Square, 1024x1024 recommended. Non-square input is squashed.
input_image = "logo.png"

# File name written into every density directory.
icon_name = "ic_launcher.png"

# ---------------------------------------------------------------------------
# Density buckets
# ---------------------------------------------------------------------------
# Listing any [[sizes]] entry replaces the whole default table.
[[sizes]]
label = "mipmap-mdpi"
size = 48

[[sizes]]
label = "mipmap-hdpi"
size = 72

[[sizes]]
label = "mipmap-xhdpi"
size = 96

[[sizes]]
label = "mipmap-xxhdpi"
size = 144

[[sizes]]
label = "mipmap-xxxhdpi"
size = 192

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Icons written concurrently. 1 = one after another in table order,
# 0 = one worker per CPU core.
max_processes = 1
"##
}
