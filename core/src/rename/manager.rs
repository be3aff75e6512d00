use crate::api::{open_header, SeriesClassifier};
use crate::error::{Result, SeriesError};
use crate::rename::collect::collect_dicom_files;
use crate::rename::study::{sanitize, StudyKey};
use crate::types::{RenameOptions, UnmatchedPolicy};
use log::{debug, info, warn};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// What happened to one source file
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(tag = "action", rename_all = "snake_case"))]
pub enum RenameOutcome {
    /// Copied to the destination
    Copied { destination: PathBuf, series: String },
    /// Destination already existed and was left untouched
    AlreadyPresent { destination: PathBuf, series: String },
    /// Dry run: where the file would go
    Planned { destination: PathBuf, series: String },
    /// No rule matched and the policy skips such files
    Unmatched,
    /// Reading, classification or copying failed
    Failed { error: String },
}

impl RenameOutcome {
    /// Series folder for outcomes that have a destination
    pub fn series(&self) -> Option<&str> {
        match self {
            RenameOutcome::Copied { series, .. }
            | RenameOutcome::AlreadyPresent { series, .. }
            | RenameOutcome::Planned { series, .. } => Some(series),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct FileOutcome {
    pub source: PathBuf,
    #[cfg_attr(feature = "json", serde(flatten))]
    pub outcome: RenameOutcome,
}

/// Per-file outcomes of one rename run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct RenameSummary {
    pub outcomes: Vec<FileOutcome>,
}

impl RenameSummary {
    fn count(&self, pred: impl Fn(&RenameOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.outcome)).count()
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn copied(&self) -> usize {
        self.count(|o| matches!(o, RenameOutcome::Copied { .. }))
    }

    pub fn already_present(&self) -> usize {
        self.count(|o| matches!(o, RenameOutcome::AlreadyPresent { .. }))
    }

    pub fn planned(&self) -> usize {
        self.count(|o| matches!(o, RenameOutcome::Planned { .. }))
    }

    pub fn unmatched(&self) -> usize {
        self.count(|o| matches!(o, RenameOutcome::Unmatched))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, RenameOutcome::Failed { .. }))
    }

    /// Number of files per series folder
    pub fn by_series(&self) -> BTreeMap<String, usize> {
        let mut tally = BTreeMap::new();
        for series in self.outcomes.iter().filter_map(|o| o.outcome.series()) {
            *tally.entry(series.to_string()).or_insert(0) += 1;
        }
        tally
    }

    pub fn failures(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.outcomes.iter().filter_map(|o| match o.outcome {
            RenameOutcome::Failed { ref error } => Some((o.source.as_path(), error.as_str())),
            _ => None,
        })
    }
}

/// Copies classified DICOM files into a `<study>/<series>/<file>` tree
///
/// # Example
///
/// ```no_run
/// use mrseries_core::{RenameManager, RenameOptions, SeriesClassifier};
/// use std::path::Path;
///
/// let classifier = SeriesClassifier::with_builtin_rules().unwrap();
/// let manager = RenameManager::new(classifier, RenameOptions::default());
/// let summary = manager.run(Path::new("incoming"), Path::new("sorted")).unwrap();
/// println!("{} copied, {} unmatched", summary.copied(), summary.unmatched());
/// ```
pub struct RenameManager {
    classifier: SeriesClassifier,
    options: RenameOptions,
}

impl RenameManager {
    pub fn new(classifier: SeriesClassifier, options: RenameOptions) -> Self {
        Self {
            classifier,
            options,
        }
    }

    pub fn options(&self) -> &RenameOptions {
        &self.options
    }

    /// Processes every DICOM file below `input`
    ///
    /// Per-file failures are recorded in the summary and never abort the batch.
    ///
    /// # Errors
    ///
    /// Fails only when a dedicated worker pool cannot be created.
    pub fn run(&self, input: &Path, output: &Path) -> Result<RenameSummary> {
        let files = collect_dicom_files(input);
        info!("Found {} DICOM files in {}", files.len(), input.display());
        self.run_files(&files, output)
    }

    /// Processes an explicit list of files
    pub fn run_files(&self, files: &[PathBuf], output: &Path) -> Result<RenameSummary> {
        let outcomes = match self.options.threads {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()?;
                pool.install(|| self.process_all(files, output))
            }
            None => self.process_all(files, output),
        };

        let summary = RenameSummary { outcomes };
        info!(
            "Processed {} files: {} copied, {} already present, {} planned, {} unmatched, {} failed",
            summary.total(),
            summary.copied(),
            summary.already_present(),
            summary.planned(),
            summary.unmatched(),
            summary.failed()
        );
        Ok(summary)
    }

    fn process_all(&self, files: &[PathBuf], output: &Path) -> Vec<FileOutcome> {
        files
            .par_iter()
            .map(|source| FileOutcome {
                source: source.clone(),
                outcome: self.process_file(source, output),
            })
            .collect()
    }

    fn process_file(&self, source: &Path, output: &Path) -> RenameOutcome {
        let planned = match self.plan(source, output) {
            Ok(Some(planned)) => planned,
            Ok(None) => {
                debug!("{}: no matching series, skipped", source.display());
                return RenameOutcome::Unmatched;
            }
            Err(e) => {
                warn!("Skipping {}: {}", source.display(), e);
                return RenameOutcome::Failed {
                    error: e.to_string(),
                };
            }
        };
        let (destination, series) = planned;

        if self.options.dry_run {
            return RenameOutcome::Planned {
                destination,
                series,
            };
        }
        if destination.exists() && !self.options.overwrite {
            debug!("{} already present", destination.display());
            return RenameOutcome::AlreadyPresent {
                destination,
                series,
            };
        }

        match copy_atomic(source, &destination) {
            Ok(()) => {
                debug!("{} -> {}", source.display(), destination.display());
                RenameOutcome::Copied {
                    destination,
                    series,
                }
            }
            Err(e) => {
                warn!("Failed to copy {}: {}", source.display(), e);
                RenameOutcome::Failed {
                    error: e.to_string(),
                }
            }
        }
    }

    /// Destination path and series folder, or `None` for a skipped instance
    fn plan(&self, source: &Path, output: &Path) -> Result<Option<(PathBuf, String)>> {
        let dcm = open_header(source)?;
        let classified = self.classifier.classify_dicom(&dcm)?;

        let series = match classified.name() {
            Some(name) => sanitize(name),
            None => match self.options.unmatched {
                UnmatchedPolicy::Skip => return Ok(None),
                UnmatchedPolicy::Passthrough => sanitize(&self.options.unclassified_dir),
            },
        };

        let file_name = source.file_name().ok_or_else(|| {
            SeriesError::InvalidValue(format!("{} has no file name", source.display()))
        })?;
        let study = StudyKey::from_dicom(&dcm).folder_name();

        Ok(Some((output.join(study).join(&series).join(file_name), series)))
    }
}

/// Copies through a uniquely named temporary file and renames it into place
///
/// Readers never observe a partially written destination, and concurrent
/// writers of the same destination each publish a complete file.
pub fn copy_atomic(source: &Path, destination: &Path) -> io::Result<()> {
    let parent = destination
        .parent()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "destination has no parent"))?;
    fs::create_dir_all(parent)?;

    let file_name = destination
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let temp = parent.join(format!(
        ".{}.{}.{}.tmp",
        file_name,
        std::process::id(),
        TEMP_COUNTER.fetch_add(1, Ordering::Relaxed)
    ));

    let result = fs::copy(source, &temp).and_then(|_| fs::rename(&temp, destination));
    if result.is_err() {
        let _ = fs::remove_file(&temp);
    }
    result
}
