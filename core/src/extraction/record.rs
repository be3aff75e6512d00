use crate::extraction::tags::{
    get_float_value, get_int_value, get_multi_float_value, get_multi_string_value,
    get_string_value, CONTRAST_BOLUS_AGENT, DIFFUSION_B_VALUE, GE_DIFFUSION_DIRECTIONS,
    GE_SLOP_INT_6_9, IMAGE_ORIENTATION_PATIENT, IMAGE_TYPE, MODALITY, MR_ACQUISITION_TYPE,
    REPETITION_TIME, SERIES_DESCRIPTION,
};
use crate::types::{MetadataRecord, OrientationVectors};
use dicom_object::InMemDicomObject;

/// Reads the classification fields of one DICOM instance
///
/// Never fails: absent or unreadable attributes stay `None`, and the
/// decision about which absences are fatal is left to [`extract`](super::extract).
pub fn read_record(dcm: &InMemDicomObject) -> MetadataRecord {
    let series_description = get_string_value(dcm, SERIES_DESCRIPTION);

    MetadataRecord {
        modality: get_string_value(dcm, MODALITY).filter(|s| !s.is_empty()),
        contrast_flag: Some(has_contrast(dcm, series_description.as_deref())),
        series_description,
        image_type_flags: get_multi_string_value(dcm, IMAGE_TYPE).unwrap_or_default(),
        acquisition_type: get_string_value(dcm, MR_ACQUISITION_TYPE).filter(|s| !s.is_empty()),
        orientation_vectors: get_multi_float_value(dcm, IMAGE_ORIENTATION_PATIENT)
            .and_then(|values| OrientationVectors::from_slice(&values)),
        repetition_time: get_float_value(dcm, REPETITION_TIME),
        b_value: extract_b_value(dcm),
        diffusion_directions: get_float_value(dcm, GE_DIFFUSION_DIRECTIONS)
            .filter(|n| n.is_finite() && *n >= 0.0)
            .map(|n| n.round() as u32),
    }
}

/// Contrast is administered when the agent tag is filled or the description says "+C"
fn has_contrast(dcm: &InMemDicomObject, description: Option<&str>) -> bool {
    let agent = get_string_value(dcm, CONTRAST_BOLUS_AGENT).is_some_and(|s| !s.is_empty());
    agent || description.is_some_and(description_mentions_contrast)
}

/// Checks for the "+C" / "C+" shorthand, case-insensitive
pub fn description_mentions_contrast(description: &str) -> bool {
    let upper = description.to_uppercase();
    upper.contains("+C") || upper.contains("C+")
}

/// Standard b-value first, then the first value of the GE private field
fn extract_b_value(dcm: &InMemDicomObject) -> Option<f64> {
    get_float_value(dcm, DIFFUSION_B_VALUE)
        .or_else(|| get_int_value(dcm, GE_SLOP_INT_6_9).map(|v| v as f64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicom_core::{DataElement, PrimitiveValue, VR};
    use rstest::rstest;

    fn strs(values: &[&str]) -> PrimitiveValue {
        PrimitiveValue::Strs(
            values
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .into(),
        )
    }

    fn create_test_dicom(description: &str) -> InMemDicomObject {
        let mut dcm = InMemDicomObject::new_empty();
        dcm.put(DataElement::new(MODALITY, VR::CS, PrimitiveValue::from("MR")));
        dcm.put(DataElement::new(
            SERIES_DESCRIPTION,
            VR::LO,
            PrimitiveValue::from(description),
        ));
        dcm.put(DataElement::new(
            IMAGE_TYPE,
            VR::CS,
            strs(&["DERIVED", "SECONDARY", "REFORMATTED"]),
        ));
        dcm.put(DataElement::new(
            MR_ACQUISITION_TYPE,
            VR::CS,
            PrimitiveValue::from("3D"),
        ));
        dcm.put(DataElement::new(
            IMAGE_ORIENTATION_PATIENT,
            VR::DS,
            strs(&["1", "0", "0", "0", "0", "-1"]),
        ));
        dcm
    }

    #[test]
    fn test_read_record_fields() {
        let dcm = create_test_dicom("T1 CUBE COR");
        let record = read_record(&dcm);

        assert_eq!(record.modality.as_deref(), Some("MR"));
        assert_eq!(record.series_description.as_deref(), Some("T1 CUBE COR"));
        assert_eq!(
            record.image_type_flags,
            vec!["DERIVED", "SECONDARY", "REFORMATTED"]
        );
        assert_eq!(record.acquisition_type.as_deref(), Some("3D"));
        assert_eq!(record.contrast_flag, Some(false));
        assert_eq!(
            record.orientation_vectors,
            Some(OrientationVectors::new([1.0, 0.0, 0.0], [0.0, 0.0, -1.0]))
        );
        assert_eq!(record.b_value, None);
    }

    #[test]
    fn test_empty_object_reads_as_empty_record() {
        let record = read_record(&InMemDicomObject::new_empty());
        assert_eq!(record.modality, None);
        assert!(record.image_type_flags.is_empty());
        assert_eq!(record.orientation_vectors, None);
        assert_eq!(record.contrast_flag, Some(false));
    }

    #[test]
    fn test_contrast_agent_tag_sets_flag() {
        let mut dcm = create_test_dicom("T1 CUBE AXI");
        dcm.put(DataElement::new(
            CONTRAST_BOLUS_AGENT,
            VR::LO,
            PrimitiveValue::from("GADOVIST"),
        ));
        assert_eq!(read_record(&dcm).contrast_flag, Some(true));
    }

    #[rstest]
    #[case("AX T1 +C", true)]
    #[case("Ax T1 c+", true)]
    #[case("T1 CUBE", false)]
    #[case("ASL CBF", false)]
    fn test_description_mentions_contrast(#[case] description: &str, #[case] expected: bool) {
        assert_eq!(description_mentions_contrast(description), expected);
    }

    #[test]
    fn test_b_value_falls_back_to_private_tag() {
        let mut dcm = create_test_dicom("DWI");
        dcm.put(DataElement::new(
            GE_SLOP_INT_6_9,
            VR::IS,
            strs(&["1000", "8", "0", "0"]),
        ));
        assert_eq!(read_record(&dcm).b_value, Some(1000.0));

        dcm.put(DataElement::new(
            DIFFUSION_B_VALUE,
            VR::FD,
            PrimitiveValue::from(0.0_f64),
        ));
        assert_eq!(read_record(&dcm).b_value, Some(0.0));
    }

    #[test]
    fn test_sequence_parameters() {
        let mut dcm = create_test_dicom("DTI");
        dcm.put(DataElement::new(
            REPETITION_TIME,
            VR::DS,
            PrimitiveValue::from("2000"),
        ));
        dcm.put(DataElement::new(
            GE_DIFFUSION_DIRECTIONS,
            VR::DS,
            PrimitiveValue::from("32"),
        ));

        let record = read_record(&dcm);
        assert_eq!(record.repetition_time, Some(2000.0));
        assert_eq!(record.diffusion_directions, Some(32));
    }

    #[test]
    fn test_malformed_orientation_is_absent() {
        let mut dcm = create_test_dicom("T2");
        dcm.put(DataElement::new(
            IMAGE_ORIENTATION_PATIENT,
            VR::DS,
            strs(&["1", "0", "0"]),
        ));
        assert_eq!(read_record(&dcm).orientation_vectors, None);
    }
}
