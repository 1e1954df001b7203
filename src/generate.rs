//! Icon generation.
//!
//! Reads the configured source image once and writes one square PNG per size
//! table entry:
//!
//! ```text
//! android/app/src/main/res/
//! ├── mipmap-mdpi/ic_launcher.png      48x48
//! ├── mipmap-hdpi/ic_launcher.png      72x72
//! ├── mipmap-xhdpi/ic_launcher.png     96x96
//! ├── mipmap-xxhdpi/ic_launcher.png    144x144
//! └── mipmap-xxxhdpi/ic_launcher.png   192x192
//! ```
//!
//! ## Failure handling
//!
//! A missing input file is an expected condition, reported as
//! [`GenerateOutcome::InputMissing`] before anything is written. Every other
//! failure (decode, directory creation, write) is a [`GenerateError`] that
//! stops the run. Icons already written stay on disk.
//!
//! ## Parallel Processing
//!
//! With `processing.max_processes = 1` (the default) icons are written one
//! after another in table order and the first failure stops the remaining
//! entries. Larger values spread the writes over a local
//! [rayon](https://docs.rs/rayon) pool; progress is still reported in table
//! order.

use crate::config::{IconConfig, effective_threads};
use crate::imaging::{BackendError, IconPlan, ImageBackend, SourceImage, create_icon, plan_icons};
use rayon::prelude::*;
use std::path::PathBuf;
use std::sync::mpsc::Sender;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image processing failed: {0}")]
    Imaging(#[from] BackendError),
    #[error("Failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Progress event emitted once per icon written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconEvent {
    Written {
        label: String,
        path: PathBuf,
        size: u32,
    },
}

/// A successfully written icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenIcon {
    pub label: String,
    pub path: PathBuf,
    pub size: u32,
}

impl From<&IconPlan> for WrittenIcon {
    fn from(plan: &IconPlan) -> Self {
        Self {
            label: plan.label.clone(),
            path: plan.output_path.clone(),
            size: plan.size,
        }
    }
}

/// How a run ended without an unrecovered error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// Every entry was written, in table order.
    Generated(Vec<WrittenIcon>),
    /// The input file does not exist; nothing was written.
    InputMissing(PathBuf),
}

/// Generate every icon in `config.sizes` from `config.input_image`.
///
/// Sends an [`IconEvent`] per written icon when `events` is given.
pub fn generate_icons(
    backend: &impl ImageBackend,
    config: &IconConfig,
    events: Option<Sender<IconEvent>>,
) -> Result<GenerateOutcome, GenerateError> {
    if !config.input_image.exists() {
        return Ok(GenerateOutcome::InputMissing(config.input_image.clone()));
    }

    let source = backend.decode(&config.input_image)?;
    let plans = plan_icons(config);

    let threads = effective_threads(&config.processing);
    let written = if threads > 1 {
        write_parallel(backend, &source, &plans, threads, events.as_ref())?
    } else {
        write_sequential(backend, &source, &plans, events.as_ref())?
    };

    Ok(GenerateOutcome::Generated(written))
}

fn write_sequential(
    backend: &impl ImageBackend,
    source: &SourceImage,
    plans: &[IconPlan],
    events: Option<&Sender<IconEvent>>,
) -> Result<Vec<WrittenIcon>, GenerateError> {
    let mut written = Vec::with_capacity(plans.len());
    for plan in plans {
        create_icon(backend, source, plan)?;
        let icon = WrittenIcon::from(plan);
        emit(events, &icon);
        written.push(icon);
    }
    Ok(written)
}

fn write_parallel(
    backend: &impl ImageBackend,
    source: &SourceImage,
    plans: &[IconPlan],
    threads: usize,
    events: Option<&Sender<IconEvent>>,
) -> Result<Vec<WrittenIcon>, GenerateError> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()?;
    let results: Vec<Result<(), BackendError>> = pool.install(|| {
        plans
            .par_iter()
            .map(|plan| create_icon(backend, source, plan))
            .collect()
    });

    // Report the successful prefix in table order, then the first failure.
    let mut written = Vec::with_capacity(plans.len());
    for (plan, result) in plans.iter().zip(results) {
        result?;
        let icon = WrittenIcon::from(plan);
        emit(events, &icon);
        written.push(icon);
    }
    Ok(written)
}

fn emit(events: Option<&Sender<IconEvent>>, icon: &WrittenIcon) {
    if let Some(tx) = events {
        // A dropped receiver only loses progress output.
        let _ = tx.send(IconEvent::Written {
            label: icon.label.clone(),
            path: icon.path.clone(),
            size: icon.size,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ProcessingConfig, SizeEntry, SizeTable};
    use crate::imaging::backend::tests::{MockBackend, RecordedOp};
    use crate::test_helpers::{list_files, mock_config};
    use tempfile::TempDir;

    #[test]
    fn missing_input_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let mut config = mock_config(tmp.path());
        config.input_image = tmp.path().join("absent.png");
        let backend = MockBackend::new();

        let outcome = generate_icons(&backend, &config, None).unwrap();

        assert_eq!(outcome, GenerateOutcome::InputMissing(config.input_image));
        assert!(backend.get_operations().is_empty());
        assert!(!config.project_path.exists());
        assert_eq!(list_files(tmp.path()), ["logo.png"]);
    }

    #[test]
    fn decodes_once_then_writes_in_table_order() {
        let tmp = TempDir::new().unwrap();
        let config = mock_config(tmp.path());
        let backend = MockBackend::new();

        generate_icons(&backend, &config, None).unwrap();

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 6);
        assert!(matches!(&ops[0], RecordedOp::Decode(_)));
        assert_eq!(
            backend.written_labels(),
            [
                "mipmap-mdpi",
                "mipmap-hdpi",
                "mipmap-xhdpi",
                "mipmap-xxhdpi",
                "mipmap-xxxhdpi"
            ]
        );
    }

    #[test]
    fn creates_every_density_directory() {
        let tmp = TempDir::new().unwrap();
        let config = mock_config(tmp.path());

        generate_icons(&MockBackend::new(), &config, None).unwrap();

        for entry in config.sizes.iter() {
            assert!(config.project_path.join(&entry.label).is_dir());
        }
    }

    #[test]
    fn events_follow_table_order() {
        let tmp = TempDir::new().unwrap();
        let config = mock_config(tmp.path());
        let (tx, rx) = std::sync::mpsc::channel();

        generate_icons(&MockBackend::new(), &config, Some(tx)).unwrap();

        let sizes: Vec<u32> = rx
            .iter()
            .map(|IconEvent::Written { size, .. }| size)
            .collect();
        assert_eq!(sizes, [48, 72, 96, 144, 192]);
    }

    #[test]
    fn first_failure_stops_sequential_run() {
        let tmp = TempDir::new().unwrap();
        let config = mock_config(tmp.path());
        let backend = MockBackend::failing_on("mipmap-xhdpi");
        let (tx, rx) = std::sync::mpsc::channel();

        let result = generate_icons(&backend, &config, Some(tx));

        assert!(matches!(result, Err(GenerateError::Imaging(BackendError::Io(_)))));
        assert_eq!(backend.written_labels(), ["mipmap-mdpi", "mipmap-hdpi"]);
        assert_eq!(rx.iter().count(), 2);
        // Later entries are never attempted.
        assert!(!config.project_path.join("mipmap-xxhdpi").exists());
    }

    #[test]
    fn parallel_run_reports_in_table_order() {
        let tmp = TempDir::new().unwrap();
        let config = IconConfig {
            processing: ProcessingConfig { max_processes: 0 },
            ..mock_config(tmp.path())
        };
        let (tx, rx) = std::sync::mpsc::channel();

        let outcome = generate_icons(&MockBackend::new(), &config, Some(tx)).unwrap();

        let GenerateOutcome::Generated(written) = outcome else {
            panic!("expected icons to be generated");
        };
        let labels: Vec<&str> = written.iter().map(|w| w.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "mipmap-mdpi",
                "mipmap-hdpi",
                "mipmap-xhdpi",
                "mipmap-xxhdpi",
                "mipmap-xxxhdpi"
            ]
        );
        assert_eq!(rx.iter().count(), 5);
    }

    #[test]
    fn parallel_failure_reports_successful_prefix() {
        let tmp = TempDir::new().unwrap();
        let config = IconConfig {
            processing: ProcessingConfig { max_processes: 0 },
            ..mock_config(tmp.path())
        };
        let backend = MockBackend::failing_on("mipmap-hdpi");
        let (tx, rx) = std::sync::mpsc::channel();

        let result = generate_icons(&backend, &config, Some(tx));

        assert!(result.is_err());
        let labels: Vec<String> = rx
            .iter()
            .map(|IconEvent::Written { label, .. }| label)
            .collect();
        assert_eq!(labels, ["mipmap-mdpi"]);
    }

    #[test]
    fn written_icons_carry_plan_paths() {
        let tmp = TempDir::new().unwrap();
        let config = IconConfig {
            sizes: SizeTable::new(vec![SizeEntry::new("drawable", 24)]),
            ..mock_config(tmp.path())
        };

        let outcome = generate_icons(&MockBackend::new(), &config, None).unwrap();

        assert_eq!(
            outcome,
            GenerateOutcome::Generated(vec![WrittenIcon {
                label: "drawable".into(),
                path: config.project_path.join("drawable/ic_launcher.png"),
                size: 24,
            }])
        );
        assert!(config.project_path.join("drawable").is_dir());
    }
}
