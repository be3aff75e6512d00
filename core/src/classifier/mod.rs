//! Series classification
//!
//! An ordered table of [`RuleDefinition`]s is compiled into immutable
//! [`CategoryMatcher`]s. [`RuleSet::classify`] walks them in order and returns
//! the first match, or `NoMatch` when none applies.

mod builtin;
mod definition;
mod matcher;

pub use builtin::builtin_rules;
pub use definition::{description, Condition, ContrastPolicy, RuleDefinition, VariantDefinition};
pub use matcher::CategoryMatcher;

use crate::error::Result;
use crate::types::{AttributeBundle, ClassificationResult, Orientation};
use log::debug;

/// An ordered, compiled rule table
///
/// # Example
///
/// ```
/// use mrseries_core::classifier::RuleSet;
/// use mrseries_core::{extract, resolve, MetadataRecord, SeriesCategory};
///
/// let rules = RuleSet::builtin().unwrap();
/// let record = MetadataRecord::new("MR")
///     .with_description("T1 CUBE AXI")
///     .with_image_type(&["DERIVED", "SECONDARY", "REFORMATTED"])
///     .with_acquisition_type("3D")
///     .with_orientation([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
///
/// let bundle = extract(&record).unwrap();
/// let orientation = resolve(bundle.orientation_vectors.as_ref(), &bundle.image_type);
/// let result = rules.classify(&bundle, orientation);
///
/// assert_eq!(result.category, SeriesCategory::T1);
/// assert_eq!(result.synthesized_name.as_deref(), Some("T1CUBE_AXIr"));
/// ```
#[derive(Debug)]
pub struct RuleSet {
    definitions: Vec<RuleDefinition>,
    matchers: Vec<CategoryMatcher>,
}

impl RuleSet {
    /// Compiles rule definitions, keeping their order
    ///
    /// # Errors
    ///
    /// Returns the first [`SeriesError::InvalidRule`](crate::SeriesError::InvalidRule)
    /// raised by a definition.
    pub fn compile(definitions: Vec<RuleDefinition>) -> Result<Self> {
        let matchers = definitions
            .iter()
            .map(CategoryMatcher::compile)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            definitions,
            matchers,
        })
    }

    /// Compiles the built-in table
    pub fn builtin() -> Result<Self> {
        Self::compile(builtin_rules())
    }

    pub fn definitions(&self) -> &[RuleDefinition] {
        &self.definitions
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// Returns the first matching category and its synthesized name
    ///
    /// Never fails; an unrecognised series yields `NoMatch`.
    pub fn classify(&self, bundle: &AttributeBundle, orientation: Orientation) -> ClassificationResult {
        for matcher in &self.matchers {
            if let Some(result) = matcher.evaluate(bundle, orientation) {
                debug!(
                    "{:?} ({}) classified as {}",
                    bundle.series_description, orientation, result
                );
                return result;
            }
        }
        debug!(
            "{:?} ({}) matched no rule",
            bundle.series_description, orientation
        );
        ClassificationResult::no_match()
    }

    /// Loads a rule table from a JSON array of definitions
    #[cfg(feature = "json")]
    pub fn from_json_str(json: &str) -> Result<Self> {
        let definitions: Vec<RuleDefinition> = serde_json::from_str(json)?;
        Self::compile(definitions)
    }

    /// Loads a rule table from a JSON file
    #[cfg(feature = "json")]
    pub fn from_json_file(path: &std::path::Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Serializes the definitions as pretty-printed JSON
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.definitions)?)
    }
}
