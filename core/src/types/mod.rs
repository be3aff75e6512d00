//! Core type definitions for MR series classification
//!
//! This module provides the fundamental types used throughout the mrseries library:
//! - [`MetadataRecord`]: Raw per-instance header fields
//! - [`AttributeBundle`]: Typed attributes consumed by the classifier
//! - [`ImageType`]: Decomposed DICOM ImageType field
//! - [`Orientation`]: Plane combined with original/reformatted provenance
//! - [`SeriesCategory`]: Closed set of clinical series categories
//! - [`ClassificationResult`]: Category plus synthesized series name
//! - [`RenameOptions`]: Configuration for the rename pipeline

mod enums;
mod image_type;
mod metadata;
mod options;
mod orientation;
mod result;

pub use enums::{
    AcquisitionType, CategoryFamily, Plane, Provenance, SeriesCategory, ALL_CATEGORIES,
};
pub use image_type::{ImageType, REFORMATTED_MARKER};
pub use metadata::{AttributeBundle, MetadataRecord, OrientationVectors};
pub use options::{RenameOptions, UnmatchedPolicy};
pub use orientation::{Orientation, ALL_ORIENTATIONS};
pub use result::ClassificationResult;
