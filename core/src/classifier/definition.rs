use crate::types::{AcquisitionType, Orientation, SeriesCategory, ALL_ORIENTATIONS};

/// How a rule treats the contrast flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(rename_all = "lowercase"))]
pub enum ContrastPolicy {
    /// Contrast neither constrains matching nor changes the name
    #[default]
    Ignore,
    /// Append "CE" to the name of contrast-enhanced series
    Suffix,
    /// Only match contrast-enhanced series
    Require,
    /// Only match series without contrast
    Forbid,
}

/// One condition of a variant; all conditions of a variant must hold
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(rename_all = "snake_case"))]
pub enum Condition {
    /// Case-insensitive pattern against the series description
    Description(String),
    /// Last Image Type value equals this text
    ImageTypeLast(String),
    /// Diffusion b-value
    BValue(f64),
    /// Repetition time in ms
    RepetitionTime(f64),
    /// Number of diffusion directions
    DiffusionDirections(u32),
}

/// A named refinement of a category, e.g. `T1CUBE` within T1
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct VariantDefinition {
    pub name: String,
    pub when: Vec<Condition>,
}

/// Declarative description of one category matcher
///
/// Rule tables are plain data: the classification loop never changes when a
/// category is added.
///
/// # Example
///
/// ```
/// use mrseries_core::classifier::{Condition, ContrastPolicy, RuleDefinition};
/// use mrseries_core::{AcquisitionType, SeriesCategory};
///
/// let rule = RuleDefinition::new(SeriesCategory::T2, "T2")
///     .acquisition(&[AcquisitionType::TwoD, AcquisitionType::ThreeD])
///     .include(&["T2"])
///     .contrast(ContrastPolicy::Suffix)
///     .variant("T2FLAIR", vec![Condition::Description("FLAIR".to_string())])
///     .all_orientations();
///
/// assert_eq!(rule.modality, "MR");
/// assert_eq!(rule.orientations.as_ref().map(|o| o.len()), Some(6));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleDefinition {
    pub category: SeriesCategory,

    pub modality: String,

    /// Allowed acquisition types; empty allows any
    #[cfg_attr(feature = "json", serde(default))]
    pub acquisition: Vec<AcquisitionType>,

    /// Description patterns; at least one must match
    pub include: Vec<String>,

    /// Description patterns; none may match
    #[cfg_attr(feature = "json", serde(default))]
    pub exclude: Vec<String>,

    /// Required first Image Type value, e.g. "ORIGINAL"
    #[cfg_attr(feature = "json", serde(default))]
    pub image_type_first: Option<String>,

    #[cfg_attr(feature = "json", serde(default))]
    pub contrast: ContrastPolicy,

    /// Name used when no variant applies
    pub base_name: String,

    /// Evaluated in order, first match wins
    #[cfg_attr(feature = "json", serde(default))]
    pub variants: Vec<VariantDefinition>,

    /// Orientations the category names; `None` leaves orientation unused
    #[cfg_attr(feature = "json", serde(default))]
    pub orientations: Option<Vec<Orientation>>,

    /// Append `_<orientation>` to names of rules with an orientation table
    #[cfg_attr(feature = "json", serde(default = "default_orientation_suffix"))]
    pub orientation_suffix: bool,

    /// Only match when one of the variants applies
    #[cfg_attr(feature = "json", serde(default))]
    pub variant_required: bool,
}

#[cfg(feature = "json")]
fn default_orientation_suffix() -> bool {
    true
}

impl RuleDefinition {
    /// Creates an MR rule with no constraints beyond the category
    pub fn new(category: SeriesCategory, base_name: &str) -> Self {
        Self {
            category,
            modality: "MR".to_string(),
            acquisition: Vec::new(),
            include: Vec::new(),
            exclude: Vec::new(),
            image_type_first: None,
            contrast: ContrastPolicy::Ignore,
            base_name: base_name.to_string(),
            variants: Vec::new(),
            orientations: None,
            orientation_suffix: true,
            variant_required: false,
        }
    }

    pub fn modality(mut self, modality: &str) -> Self {
        self.modality = modality.to_string();
        self
    }

    pub fn acquisition(mut self, types: &[AcquisitionType]) -> Self {
        self.acquisition = types.to_vec();
        self
    }

    pub fn include(mut self, patterns: &[&str]) -> Self {
        self.include = patterns.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn exclude(mut self, patterns: &[&str]) -> Self {
        self.exclude = patterns.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn image_type_first(mut self, value: &str) -> Self {
        self.image_type_first = Some(value.to_string());
        self
    }

    pub fn contrast(mut self, policy: ContrastPolicy) -> Self {
        self.contrast = policy;
        self
    }

    /// Appends a variant after the existing ones
    pub fn variant(mut self, name: &str, when: Vec<Condition>) -> Self {
        self.variants.push(VariantDefinition {
            name: name.to_string(),
            when,
        });
        self
    }

    pub fn orientations(mut self, orientations: &[Orientation]) -> Self {
        self.orientations = Some(orientations.to_vec());
        self
    }

    /// Names all three planes in both provenances
    pub fn all_orientations(self) -> Self {
        self.orientations(&ALL_ORIENTATIONS)
    }

    /// Keeps the orientation table as a constraint but leaves it out of the name
    pub fn without_orientation_suffix(mut self) -> Self {
        self.orientation_suffix = false;
        self
    }

    /// Drops the base name fallback: series no variant covers do not match
    pub fn require_variant(mut self) -> Self {
        self.variant_required = true;
        self
    }
}

/// Shorthand for a description condition
pub fn description(pattern: &str) -> Condition {
    Condition::Description(pattern.to_string())
}
