use crate::types::{AcquisitionType, ImageType};

/// Row and column direction cosines from Image Orientation (Patient)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct OrientationVectors {
    pub row: [f64; 3],
    pub column: [f64; 3],
}

impl OrientationVectors {
    pub fn new(row: [f64; 3], column: [f64; 3]) -> Self {
        Self { row, column }
    }

    /// Builds vectors from the six values of (0020,0037)
    ///
    /// Returns `None` unless exactly six values are given.
    pub fn from_slice(values: &[f64]) -> Option<Self> {
        match values {
            [r0, r1, r2, c0, c1, c2] => Some(Self::new([*r0, *r1, *r2], [*c0, *c1, *c2])),
            _ => None,
        }
    }

    /// Cross product of the row and column vectors
    pub fn normal(&self) -> [f64; 3] {
        let [rx, ry, rz] = self.row;
        let [cx, cy, cz] = self.column;
        [ry * cz - rz * cy, rz * cx - rx * cz, rx * cy - ry * cx]
    }
}

/// Per-instance header fields consumed by classification
///
/// Every field is optional as read from the file. The record is never
/// mutated by extraction or classification.
///
/// # Example
///
/// ```
/// use mrseries_core::MetadataRecord;
///
/// let record = MetadataRecord::new("MR")
///     .with_description("T1 CUBE AXI")
///     .with_image_type(&["ORIGINAL", "PRIMARY", "OTHER"])
///     .with_acquisition_type("3D")
///     .with_contrast(false);
///
/// assert_eq!(record.modality.as_deref(), Some("MR"));
/// assert_eq!(record.image_type_flags.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct MetadataRecord {
    /// Modality (0008,0060), the only required attribute
    pub modality: Option<String>,

    /// Series Description (0008,103E)
    pub series_description: Option<String>,

    /// Image Type (0008,0008) values in order
    pub image_type_flags: Vec<String>,

    /// MR Acquisition Type (0018,0023)
    pub acquisition_type: Option<String>,

    /// Whether a contrast agent was administered
    pub contrast_flag: Option<bool>,

    /// Image Orientation (Patient) (0020,0037)
    pub orientation_vectors: Option<OrientationVectors>,

    /// Repetition Time (0018,0080) in ms
    pub repetition_time: Option<f64>,

    /// Diffusion b-value
    pub b_value: Option<f64>,

    /// Number of diffusion gradient directions
    pub diffusion_directions: Option<u32>,
}

impl MetadataRecord {
    /// Creates a record with only the modality set
    pub fn new(modality: &str) -> Self {
        Self {
            modality: Some(modality.to_string()),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.series_description = Some(description.to_string());
        self
    }

    pub fn with_image_type(mut self, flags: &[&str]) -> Self {
        self.image_type_flags = flags.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_acquisition_type(mut self, acquisition_type: &str) -> Self {
        self.acquisition_type = Some(acquisition_type.to_string());
        self
    }

    pub fn with_contrast(mut self, contrast: bool) -> Self {
        self.contrast_flag = Some(contrast);
        self
    }

    pub fn with_orientation(mut self, row: [f64; 3], column: [f64; 3]) -> Self {
        self.orientation_vectors = Some(OrientationVectors::new(row, column));
        self
    }

    pub fn with_repetition_time(mut self, repetition_time: f64) -> Self {
        self.repetition_time = Some(repetition_time);
        self
    }

    pub fn with_b_value(mut self, b_value: f64) -> Self {
        self.b_value = Some(b_value);
        self
    }

    pub fn with_diffusion_directions(mut self, directions: u32) -> Self {
        self.diffusion_directions = Some(directions);
        self
    }
}

/// Typed attributes extracted from a [`MetadataRecord`]
///
/// Absent optional fields are replaced by neutral defaults: an empty
/// description, no contrast and an unknown acquisition type.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct AttributeBundle {
    /// Upper-case modality, e.g. "MR"
    pub modality: String,

    /// Trimmed series description
    pub series_description: String,

    /// Parsed ImageType field
    pub image_type: ImageType,

    pub acquisition_type: AcquisitionType,

    pub contrast: bool,

    pub orientation_vectors: Option<OrientationVectors>,

    pub repetition_time: Option<f64>,

    pub b_value: Option<f64>,

    pub diffusion_directions: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_requires_six_values() {
        assert!(OrientationVectors::from_slice(&[1.0, 0.0, 0.0, 0.0, 1.0, 0.0]).is_some());
        assert!(OrientationVectors::from_slice(&[1.0, 0.0, 0.0]).is_none());
        assert!(OrientationVectors::from_slice(&[]).is_none());
    }

    #[test]
    fn test_normal_of_axial_slice() {
        let vectors = OrientationVectors::new([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        assert_eq!(vectors.normal(), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_record_builder() {
        let record = MetadataRecord::new("MR")
            .with_repetition_time(2000.0)
            .with_b_value(1000.0)
            .with_diffusion_directions(32);

        assert_eq!(record.repetition_time, Some(2000.0));
        assert_eq!(record.b_value, Some(1000.0));
        assert_eq!(record.diffusion_directions, Some(32));
        assert!(record.series_description.is_none());
    }
}
