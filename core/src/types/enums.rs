use std::fmt;

/// MR acquisition type from (0018,0023)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub enum AcquisitionType {
    #[cfg_attr(feature = "json", serde(rename = "2D"))]
    TwoD,
    #[cfg_attr(feature = "json", serde(rename = "3D"))]
    ThreeD,
    #[default]
    #[cfg_attr(feature = "json", serde(rename = "UNKNOWN"))]
    Unknown,
}

impl AcquisitionType {
    /// Returns whether this type is unknown
    pub fn is_unknown(&self) -> bool {
        matches!(self, AcquisitionType::Unknown)
    }

    /// Returns simple name for display
    pub fn simple_name(&self) -> &'static str {
        match self {
            AcquisitionType::TwoD => "2D",
            AcquisitionType::ThreeD => "3D",
            AcquisitionType::Unknown => "unknown",
        }
    }

    /// Parses acquisition type from string
    ///
    /// Anything other than `2D` or `3D` (case-insensitive) is unknown.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "2D" => AcquisitionType::TwoD,
            "3D" => AcquisitionType::ThreeD,
            _ => AcquisitionType::Unknown,
        }
    }
}

impl fmt::Display for AcquisitionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}

/// Anatomical imaging plane derived from orientation vectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "lowercase"))]
pub enum Plane {
    Axial,
    Sagittal,
    Coronal,
    Unknown,
}

impl Plane {
    /// Returns whether this plane is unknown
    pub fn is_unknown(&self) -> bool {
        matches!(self, Plane::Unknown)
    }

    /// Returns simple name for display
    pub fn simple_name(&self) -> &'static str {
        match self {
            Plane::Axial => "axial",
            Plane::Sagittal => "sagittal",
            Plane::Coronal => "coronal",
            Plane::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}

/// Whether an image was acquired natively or reconstructed in another plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "lowercase"))]
pub enum Provenance {
    #[default]
    Original,
    Reformatted,
}

impl Provenance {
    /// Returns simple name for display
    pub fn simple_name(&self) -> &'static str {
        match self {
            Provenance::Original => "original",
            Provenance::Reformatted => "reformatted",
        }
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}

/// Clinical series category assigned by the classifier
///
/// `NoMatch` is an ordinary outcome for series no rule recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum SeriesCategory {
    T1,
    T2,
    Dwi,
    Adc,
    Eadc,
    Swan,
    Eswan,
    Asl,
    Dsc,
    MraBrain,
    MraNeck,
    MravrBrain,
    MravrNeck,
    Cvr,
    Resting,
    Dti,
    NoMatch,
}

/// Every category a rule can produce, in declaration order
pub const ALL_CATEGORIES: [SeriesCategory; 16] = [
    SeriesCategory::T1,
    SeriesCategory::T2,
    SeriesCategory::Dwi,
    SeriesCategory::Adc,
    SeriesCategory::Eadc,
    SeriesCategory::Swan,
    SeriesCategory::Eswan,
    SeriesCategory::Asl,
    SeriesCategory::Dsc,
    SeriesCategory::MraBrain,
    SeriesCategory::MraNeck,
    SeriesCategory::MravrBrain,
    SeriesCategory::MravrNeck,
    SeriesCategory::Cvr,
    SeriesCategory::Resting,
    SeriesCategory::Dti,
];

impl SeriesCategory {
    /// Returns whether this is the no-match sentinel
    pub fn is_no_match(&self) -> bool {
        matches!(self, SeriesCategory::NoMatch)
    }

    /// Returns the category label
    pub fn simple_name(&self) -> &'static str {
        match self {
            SeriesCategory::T1 => "T1",
            SeriesCategory::T2 => "T2",
            SeriesCategory::Dwi => "DWI",
            SeriesCategory::Adc => "ADC",
            SeriesCategory::Eadc => "EADC",
            SeriesCategory::Swan => "SWAN",
            SeriesCategory::Eswan => "ESWAN",
            SeriesCategory::Asl => "ASL",
            SeriesCategory::Dsc => "DSC",
            SeriesCategory::MraBrain => "MRA_BRAIN",
            SeriesCategory::MraNeck => "MRA_NECK",
            SeriesCategory::MravrBrain => "MRAVR_BRAIN",
            SeriesCategory::MravrNeck => "MRAVR_NECK",
            SeriesCategory::Cvr => "CVR",
            SeriesCategory::Resting => "RESTING",
            SeriesCategory::Dti => "DTI",
            SeriesCategory::NoMatch => "NO_MATCH",
        }
    }

    /// Parses a category label, case-insensitive
    ///
    /// Returns `None` for labels outside the closed set.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        let upper = s.trim().to_uppercase();
        if upper == "NO_MATCH" || upper == "NOMATCH" {
            return Some(SeriesCategory::NoMatch);
        }
        ALL_CATEGORIES
            .iter()
            .copied()
            .find(|c| c.simple_name() == upper)
    }

    /// Returns the downstream processing family
    pub fn family(&self) -> CategoryFamily {
        match self {
            SeriesCategory::T1 | SeriesCategory::T2 => CategoryFamily::Structural,
            SeriesCategory::Dwi | SeriesCategory::Adc | SeriesCategory::Eadc | SeriesCategory::Dti => {
                CategoryFamily::Diffusion
            }
            SeriesCategory::Swan | SeriesCategory::Eswan => CategoryFamily::Susceptibility,
            SeriesCategory::MraBrain
            | SeriesCategory::MraNeck
            | SeriesCategory::MravrBrain
            | SeriesCategory::MravrNeck => CategoryFamily::Angiography,
            SeriesCategory::Asl | SeriesCategory::Dsc => CategoryFamily::Perfusion,
            SeriesCategory::Cvr | SeriesCategory::Resting => CategoryFamily::Functional,
            SeriesCategory::NoMatch => CategoryFamily::Unclassified,
        }
    }

    /// Series needing functional post-processing
    pub fn is_functional(&self) -> bool {
        self.family() == CategoryFamily::Functional
    }

    /// Series needing perfusion post-processing
    pub fn is_perfusion(&self) -> bool {
        self.family() == CategoryFamily::Perfusion
    }
}

impl fmt::Display for SeriesCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}

/// Grouping of categories by the post-processing they receive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "lowercase"))]
pub enum CategoryFamily {
    Structural,
    Diffusion,
    Susceptibility,
    Angiography,
    Perfusion,
    Functional,
    Unclassified,
}

impl CategoryFamily {
    /// Returns simple name for display
    pub fn simple_name(&self) -> &'static str {
        match self {
            CategoryFamily::Structural => "structural",
            CategoryFamily::Diffusion => "diffusion",
            CategoryFamily::Susceptibility => "susceptibility",
            CategoryFamily::Angiography => "angiography",
            CategoryFamily::Perfusion => "perfusion",
            CategoryFamily::Functional => "functional",
            CategoryFamily::Unclassified => "unclassified",
        }
    }
}

impl fmt::Display for CategoryFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquisition_type_from_str() {
        assert_eq!(AcquisitionType::from_str("2D"), AcquisitionType::TwoD);
        assert_eq!(AcquisitionType::from_str(" 3d "), AcquisitionType::ThreeD);
        assert_eq!(AcquisitionType::from_str(""), AcquisitionType::Unknown);
        assert_eq!(AcquisitionType::from_str("4D"), AcquisitionType::Unknown);
    }

    #[test]
    fn test_category_labels_round_trip() {
        for category in ALL_CATEGORIES {
            assert_eq!(SeriesCategory::from_str(category.simple_name()), Some(category));
        }
        assert_eq!(SeriesCategory::from_str("mra_brain"), Some(SeriesCategory::MraBrain));
        assert_eq!(SeriesCategory::from_str("FLAIR"), None);
    }

    #[test]
    fn test_category_families() {
        assert!(SeriesCategory::Cvr.is_functional());
        assert!(SeriesCategory::Resting.is_functional());
        assert!(SeriesCategory::Asl.is_perfusion());
        assert!(SeriesCategory::Dsc.is_perfusion());
        assert!(!SeriesCategory::T1.is_perfusion());
        assert_eq!(SeriesCategory::Eadc.family(), CategoryFamily::Diffusion);
        assert_eq!(SeriesCategory::NoMatch.family(), CategoryFamily::Unclassified);
    }

    #[test]
    fn test_display() {
        assert_eq!(SeriesCategory::MravrNeck.to_string(), "MRAVR_NECK");
        assert_eq!(Plane::Coronal.to_string(), "coronal");
        assert_eq!(Provenance::Reformatted.to_string(), "reformatted");
        assert_eq!(AcquisitionType::ThreeD.to_string(), "3D");
    }
}
