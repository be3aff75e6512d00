//! MR series classification and renaming
//!
//! Per-instance DICOM metadata flows one way through three units:
//! [`extract`] normalises a [`MetadataRecord`] into an [`AttributeBundle`],
//! [`resolve`] derives the [`Orientation`], and a [`RuleSet`] assigns a
//! [`SeriesCategory`] with a canonical series name. [`SeriesClassifier`] wraps
//! the pipeline and [`RenameManager`] applies it to whole directory trees.

pub mod api;
pub mod classifier;
pub mod cli;
pub mod error;
pub mod extraction;
pub mod orientation;
pub mod rename;
pub mod types;

pub use api::{open_header, ClassifiedSeries, SeriesClassifier};
pub use classifier::RuleSet;
pub use cli::report::{RenameReport, TextReport};
pub use error::{Result, SeriesError};
pub use extraction::{extract, read_record};
pub use orientation::resolve;
pub use rename::{RenameManager, RenameOutcome, RenameSummary, StudyKey};
pub use types::*;
