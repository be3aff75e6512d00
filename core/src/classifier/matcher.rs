use crate::classifier::definition::{Condition, ContrastPolicy, RuleDefinition};
use crate::error::{Result, SeriesError};
use crate::types::{
    AcquisitionType, AttributeBundle, ClassificationResult, Orientation, SeriesCategory,
};
use regex::{Regex, RegexBuilder};

/// Numeric conditions accept this much slack
const NUMERIC_TOLERANCE: f64 = 0.5;

fn compile_pattern(pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| SeriesError::InvalidRule(format!("pattern {:?}: {}", pattern, e)))
}

fn close_to(actual: Option<f64>, expected: f64) -> bool {
    actual.is_some_and(|v| (v - expected).abs() < NUMERIC_TOLERANCE)
}

#[derive(Debug)]
enum CompiledCondition {
    Description(Regex),
    ImageTypeLast(String),
    BValue(f64),
    RepetitionTime(f64),
    DiffusionDirections(u32),
}

impl CompiledCondition {
    fn compile(condition: &Condition) -> Result<Self> {
        Ok(match condition {
            Condition::Description(p) => CompiledCondition::Description(compile_pattern(p)?),
            Condition::ImageTypeLast(v) => CompiledCondition::ImageTypeLast(v.trim().to_string()),
            Condition::BValue(v) => CompiledCondition::BValue(*v),
            Condition::RepetitionTime(v) => CompiledCondition::RepetitionTime(*v),
            Condition::DiffusionDirections(n) => CompiledCondition::DiffusionDirections(*n),
        })
    }

    fn holds(&self, bundle: &AttributeBundle) -> bool {
        match self {
            CompiledCondition::Description(re) => re.is_match(&bundle.series_description),
            CompiledCondition::ImageTypeLast(v) => bundle.image_type.last() == Some(v.as_str()),
            CompiledCondition::BValue(v) => close_to(bundle.b_value, *v),
            CompiledCondition::RepetitionTime(v) => close_to(bundle.repetition_time, *v),
            CompiledCondition::DiffusionDirections(n) => bundle.diffusion_directions == Some(*n),
        }
    }
}

#[derive(Debug)]
struct CompiledVariant {
    name: String,
    when: Vec<CompiledCondition>,
}

/// A compiled, immutable rule
///
/// Holds no mutable state; one instance serves any number of threads.
#[derive(Debug)]
pub struct CategoryMatcher {
    category: SeriesCategory,
    modality: String,
    acquisition: Vec<AcquisitionType>,
    include: Vec<Regex>,
    exclude: Vec<Regex>,
    image_type_first: Option<String>,
    contrast: ContrastPolicy,
    base_name: String,
    variants: Vec<CompiledVariant>,
    orientations: Option<Vec<Orientation>>,
    orientation_suffix: bool,
    variant_required: bool,
}

impl CategoryMatcher {
    /// Compiles a rule definition
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::InvalidRule`] for a pattern that does not
    /// compile, a rule without include patterns or base name, a `NoMatch`
    /// category, an orientation table that is empty or lists `Unknown`, or
    /// a rule that requires a variant but defines none.
    pub fn compile(definition: &RuleDefinition) -> Result<Self> {
        let label = definition.category.simple_name();
        if definition.category.is_no_match() {
            return Err(SeriesError::InvalidRule(
                "NO_MATCH cannot be produced by a rule".to_string(),
            ));
        }
        if definition.include.is_empty() {
            return Err(SeriesError::InvalidRule(format!(
                "{}: at least one include pattern is required",
                label
            )));
        }
        if definition.base_name.trim().is_empty() {
            return Err(SeriesError::InvalidRule(format!("{}: empty base name", label)));
        }
        if let Some(ref table) = definition.orientations {
            if table.is_empty() || table.iter().any(|o| o.is_unknown()) {
                return Err(SeriesError::InvalidRule(format!(
                    "{}: orientation table must list known orientations",
                    label
                )));
            }
        }

        if definition.variant_required && definition.variants.is_empty() {
            return Err(SeriesError::InvalidRule(format!(
                "{}: a variant is required but none is defined",
                label
            )));
        }

        let variants = definition
            .variants
            .iter()
            .map(|v| {
                Ok(CompiledVariant {
                    name: v.name.clone(),
                    when: v
                        .when
                        .iter()
                        .map(CompiledCondition::compile)
                        .collect::<Result<Vec<_>>>()?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            category: definition.category,
            modality: definition.modality.trim().to_uppercase(),
            acquisition: definition.acquisition.clone(),
            include: definition
                .include
                .iter()
                .map(|p| compile_pattern(p))
                .collect::<Result<Vec<_>>>()?,
            exclude: definition
                .exclude
                .iter()
                .map(|p| compile_pattern(p))
                .collect::<Result<Vec<_>>>()?,
            image_type_first: definition
                .image_type_first
                .as_ref()
                .map(|v| v.trim().to_string()),
            contrast: definition.contrast,
            base_name: definition.base_name.clone(),
            variants,
            orientations: definition.orientations.clone(),
            orientation_suffix: definition.orientation_suffix,
            variant_required: definition.variant_required,
        })
    }

    pub fn category(&self) -> SeriesCategory {
        self.category
    }

    /// Conjunction of modality, acquisition, image type, contrast,
    /// description, orientation-table and required-variant constraints
    pub fn matches(&self, bundle: &AttributeBundle, orientation: Orientation) -> bool {
        if bundle.modality != self.modality {
            return false;
        }
        if !self.acquisition.is_empty() && !self.acquisition.contains(&bundle.acquisition_type) {
            return false;
        }
        if let Some(ref first) = self.image_type_first {
            if !bundle.image_type.pixels.eq_ignore_ascii_case(first) {
                return false;
            }
        }
        match self.contrast {
            ContrastPolicy::Require if !bundle.contrast => return false,
            ContrastPolicy::Forbid if bundle.contrast => return false,
            _ => {}
        }

        let description = bundle.series_description.as_str();
        if !self.include.iter().any(|re| re.is_match(description)) {
            return false;
        }
        if self.exclude.iter().any(|re| re.is_match(description)) {
            return false;
        }

        if let Some(ref table) = self.orientations {
            if !table.contains(&orientation) {
                return false;
            }
        }

        !self.variant_required || self.variant(bundle).is_some()
    }

    fn variant(&self, bundle: &AttributeBundle) -> Option<&str> {
        self.variants
            .iter()
            .find(|v| v.when.iter().all(|c| c.holds(bundle)))
            .map(|v| v.name.as_str())
    }

    /// Builds the series name: variant or base, then "CE", then orientation
    pub fn synthesize_name(&self, bundle: &AttributeBundle, orientation: Orientation) -> String {
        let stem = self.variant(bundle).unwrap_or(self.base_name.as_str());

        let mut name = stem.to_string();
        if self.contrast == ContrastPolicy::Suffix && bundle.contrast {
            name.push_str("CE");
        }
        if self.orientations.is_some() && self.orientation_suffix {
            if let Some(suffix) = orientation.suffix() {
                name.push('_');
                name.push_str(suffix);
            }
        }
        name
    }

    /// Returns the classification when this matcher applies
    pub fn evaluate(
        &self,
        bundle: &AttributeBundle,
        orientation: Orientation,
    ) -> Option<ClassificationResult> {
        if self.matches(bundle, orientation) {
            Some(ClassificationResult::matched(
                self.category,
                self.synthesize_name(bundle, orientation),
            ))
        } else {
            None
        }
    }
}
