use crate::types::{Plane, Provenance};
use std::fmt;

/// Resolved orientation of a series
///
/// Combines the geometric [`Plane`] with the acquisition [`Provenance`].
/// Every known plane has exactly one reformatted counterpart; an unknown
/// plane carries no provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[cfg_attr(feature = "json", serde(rename = "AXI"))]
    Axial,
    #[cfg_attr(feature = "json", serde(rename = "SAG"))]
    Sagittal,
    #[cfg_attr(feature = "json", serde(rename = "COR"))]
    Coronal,
    #[cfg_attr(feature = "json", serde(rename = "AXIr"))]
    AxialReformatted,
    #[cfg_attr(feature = "json", serde(rename = "SAGr"))]
    SagittalReformatted,
    #[cfg_attr(feature = "json", serde(rename = "CORr"))]
    CoronalReformatted,
    #[cfg_attr(feature = "json", serde(rename = "UNKNOWN"))]
    Unknown,
}

/// The six orientations with a name suffix
pub const ALL_ORIENTATIONS: [Orientation; 6] = [
    Orientation::Axial,
    Orientation::Sagittal,
    Orientation::Coronal,
    Orientation::AxialReformatted,
    Orientation::SagittalReformatted,
    Orientation::CoronalReformatted,
];

impl Orientation {
    /// Combines a plane with a provenance
    pub fn new(plane: Plane, provenance: Provenance) -> Self {
        match (plane, provenance) {
            (Plane::Axial, Provenance::Original) => Orientation::Axial,
            (Plane::Sagittal, Provenance::Original) => Orientation::Sagittal,
            (Plane::Coronal, Provenance::Original) => Orientation::Coronal,
            (Plane::Axial, Provenance::Reformatted) => Orientation::AxialReformatted,
            (Plane::Sagittal, Provenance::Reformatted) => Orientation::SagittalReformatted,
            (Plane::Coronal, Provenance::Reformatted) => Orientation::CoronalReformatted,
            (Plane::Unknown, _) => Orientation::Unknown,
        }
    }

    /// Returns the geometric plane
    pub fn plane(&self) -> Plane {
        match self {
            Orientation::Axial | Orientation::AxialReformatted => Plane::Axial,
            Orientation::Sagittal | Orientation::SagittalReformatted => Plane::Sagittal,
            Orientation::Coronal | Orientation::CoronalReformatted => Plane::Coronal,
            Orientation::Unknown => Plane::Unknown,
        }
    }

    /// Returns the provenance, `Original` for an unknown plane
    pub fn provenance(&self) -> Provenance {
        match self {
            Orientation::AxialReformatted
            | Orientation::SagittalReformatted
            | Orientation::CoronalReformatted => Provenance::Reformatted,
            _ => Provenance::Original,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Orientation::Unknown)
    }

    /// Returns the series name suffix, e.g. `AXI` or `CORr`
    pub fn suffix(&self) -> Option<&'static str> {
        match self {
            Orientation::Axial => Some("AXI"),
            Orientation::Sagittal => Some("SAG"),
            Orientation::Coronal => Some("COR"),
            Orientation::AxialReformatted => Some("AXIr"),
            Orientation::SagittalReformatted => Some("SAGr"),
            Orientation::CoronalReformatted => Some("CORr"),
            Orientation::Unknown => None,
        }
    }

    /// Parses a suffix such as `SAGr`; anything unrecognised is unknown
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Self {
        let s = s.trim();
        ALL_ORIENTATIONS
            .iter()
            .copied()
            .find(|o| o.suffix() == Some(s))
            .unwrap_or(Orientation::Unknown)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.suffix().unwrap_or("unknown"))
    }
}
