use crate::error::{Result, SeriesError};
use crate::types::{AcquisitionType, AttributeBundle, ImageType, MetadataRecord};

/// Translates a raw record into the typed attribute bundle
///
/// # Errors
///
/// Returns [`SeriesError::MissingTag`] when the modality is absent or blank.
/// Every other field falls back to a neutral default.
///
/// # Example
///
/// ```
/// use mrseries_core::{extract, AcquisitionType, MetadataRecord};
///
/// let bundle = extract(&MetadataRecord::new(" mr ")).unwrap();
/// assert_eq!(bundle.modality, "MR");
/// assert_eq!(bundle.series_description, "");
/// assert_eq!(bundle.acquisition_type, AcquisitionType::Unknown);
/// assert!(!bundle.contrast);
///
/// assert!(extract(&MetadataRecord::default()).is_err());
/// ```
pub fn extract(record: &MetadataRecord) -> Result<AttributeBundle> {
    let modality = record
        .modality
        .as_deref()
        .map(|m| m.trim().to_uppercase())
        .filter(|m| !m.is_empty())
        .ok_or_else(|| SeriesError::MissingTag("Modality (0008,0060)".to_string()))?;

    Ok(AttributeBundle {
        modality,
        series_description: record
            .series_description
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string(),
        image_type: ImageType::from_flags(&record.image_type_flags),
        acquisition_type: record
            .acquisition_type
            .as_deref()
            .map(AcquisitionType::from_str)
            .unwrap_or_default(),
        contrast: record.contrast_flag.unwrap_or(false),
        orientation_vectors: record.orientation_vectors,
        repetition_time: record.repetition_time,
        b_value: record.b_value,
        diffusion_directions: record.diffusion_directions,
    })
}
