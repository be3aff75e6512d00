//! Caller-side rename pipeline
//!
//! Walks an input tree, classifies every DICOM instance and copies it to
//! `<output>/<study>/<series name>/<file name>`. Directory creation is
//! idempotent and every copy is published with an atomic rename, so
//! parallel workers need no locking.

pub mod collect;
pub mod manager;
pub mod study;

pub use collect::{collect_dicom_files, is_dicom_file};
pub use manager::{copy_atomic, FileOutcome, RenameManager, RenameOutcome, RenameSummary};
pub use study::StudyKey;
