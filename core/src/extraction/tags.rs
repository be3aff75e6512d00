use dicom_core::Tag;
use dicom_object::InMemDicomObject;

// Classification Tags
pub const IMAGE_TYPE: Tag = Tag(0x0008, 0x0008);
pub const MODALITY: Tag = Tag(0x0008, 0x0060);
pub const SERIES_DESCRIPTION: Tag = Tag(0x0008, 0x103E);
pub const MR_ACQUISITION_TYPE: Tag = Tag(0x0018, 0x0023);
pub const CONTRAST_BOLUS_AGENT: Tag = Tag(0x0018, 0x0010);

// Image Geometry Tags
pub const IMAGE_ORIENTATION_PATIENT: Tag = Tag(0x0020, 0x0037);

// Sequence Parameter Tags
pub const REPETITION_TIME: Tag = Tag(0x0018, 0x0080);
pub const DIFFUSION_B_VALUE: Tag = Tag(0x0018, 0x9087);

// GE Private Tags
pub const GE_SLOP_INT_6_9: Tag = Tag(0x0043, 0x1039);
pub const GE_DIFFUSION_DIRECTIONS: Tag = Tag(0x0019, 0x10E0);

// Study/Series Identification Tags
pub const PATIENT_ID: Tag = Tag(0x0010, 0x0020);
pub const STUDY_DATE: Tag = Tag(0x0008, 0x0020);
pub const ACCESSION_NUMBER: Tag = Tag(0x0008, 0x0050);

/// Helper to get string value from DICOM tag
///
/// Returns `None` if the tag is not present or cannot be converted to string
pub fn get_string_value(dcm: &InMemDicomObject, tag: Tag) -> Option<String> {
    dcm.element(tag)
        .ok()
        .and_then(|elem| elem.to_str().ok())
        .map(|s| s.trim().to_string())
}

/// Helper to get integer value from DICOM tag
///
/// Returns `None` if the tag is not present or cannot be converted to i64.
/// For multi-valued elements only the first value is read.
pub fn get_int_value(dcm: &InMemDicomObject, tag: Tag) -> Option<i64> {
    dcm.element(tag)
        .ok()
        .and_then(|elem| elem.to_int::<i64>().ok())
}

/// Helper to get a floating point value from DICOM tag
pub fn get_float_value(dcm: &InMemDicomObject, tag: Tag) -> Option<f64> {
    dcm.element(tag)
        .ok()
        .and_then(|elem| elem.to_float64().ok())
}

/// Helper to get multi-valued floating point data from DICOM tag
///
/// Decimal strings such as Image Orientation (Patient) are parsed value by value.
pub fn get_multi_float_value(dcm: &InMemDicomObject, tag: Tag) -> Option<Vec<f64>> {
    dcm.element(tag)
        .ok()
        .and_then(|elem| elem.to_multi_float64().ok())
}

/// Helper to get multi-string value from DICOM tag
///
/// Returns `None` if the tag is not present or cannot be converted to Vec<String>
pub fn get_multi_string_value(dcm: &InMemDicomObject, tag: Tag) -> Option<Vec<String>> {
    dcm.element(tag).ok().and_then(|elem| {
        if let Ok(strs) = elem.to_multi_str() {
            Some(strs.iter().map(|s| s.trim().to_string()).collect())
        } else {
            // Fallback: try to get as single string and split by backslash
            elem.to_str()
                .ok()
                .map(|s| s.split('\\').map(|part| part.trim().to_string()).collect())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicom_core::{DataElement, PrimitiveValue, VR};

    #[test]
    fn test_tag_values() {
        assert_eq!(IMAGE_TYPE, Tag(0x0008, 0x0008));
        assert_eq!(MODALITY, Tag(0x0008, 0x0060));
        assert_eq!(MR_ACQUISITION_TYPE, Tag(0x0018, 0x0023));
        assert_eq!(IMAGE_ORIENTATION_PATIENT, Tag(0x0020, 0x0037));
    }

    #[test]
    fn test_multi_string_is_trimmed() {
        let mut dcm = InMemDicomObject::new_empty();
        dcm.put(DataElement::new(
            IMAGE_TYPE,
            VR::CS,
            PrimitiveValue::Strs(
                vec!["ORIGINAL ".to_string(), "PRIMARY".to_string(), " OTHER".to_string()].into(),
            ),
        ));

        assert_eq!(
            get_multi_string_value(&dcm, IMAGE_TYPE),
            Some(vec![
                "ORIGINAL".to_string(),
                "PRIMARY".to_string(),
                "OTHER".to_string()
            ])
        );
    }

    #[test]
    fn test_multi_float_from_decimal_strings() {
        let mut dcm = InMemDicomObject::new_empty();
        dcm.put(DataElement::new(
            IMAGE_ORIENTATION_PATIENT,
            VR::DS,
            PrimitiveValue::Strs(
                vec!["1", "0", "0", "0", "1", "0"]
                    .into_iter()
                    .map(String::from)
                    .collect::<Vec<_>>()
                    .into(),
            ),
        ));

        assert_eq!(
            get_multi_float_value(&dcm, IMAGE_ORIENTATION_PATIENT),
            Some(vec![1.0, 0.0, 0.0, 0.0, 1.0, 0.0])
        );
    }

    #[test]
    fn test_missing_tag_yields_none() {
        let dcm = InMemDicomObject::new_empty();
        assert_eq!(get_string_value(&dcm, SERIES_DESCRIPTION), None);
        assert_eq!(get_float_value(&dcm, REPETITION_TIME), None);
        assert_eq!(get_int_value(&dcm, GE_SLOP_INT_6_9), None);
    }
}
