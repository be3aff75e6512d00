use crate::extraction::tags::{
    get_string_value, ACCESSION_NUMBER, MODALITY, PATIENT_ID, STUDY_DATE,
};
use dicom_object::InMemDicomObject;
use std::fmt;

const MISSING: &str = "UNKNOWN";

/// Identifies the study folder an instance is copied into
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct StudyKey {
    pub patient_id: Option<String>,
    pub study_date: Option<String>,
    pub modality: Option<String>,
    pub accession_number: Option<String>,
}

impl StudyKey {
    pub fn from_dicom(dcm: &InMemDicomObject) -> Self {
        let read = |tag| get_string_value(dcm, tag).filter(|s| !s.is_empty());
        Self {
            patient_id: read(PATIENT_ID),
            study_date: read(STUDY_DATE),
            modality: read(MODALITY),
            accession_number: read(ACCESSION_NUMBER),
        }
    }

    /// `<PatientID>_<StudyDate>_<Modality>_<AccessionNumber>`
    ///
    /// Missing parts read `UNKNOWN`; path separators become `_`.
    pub fn folder_name(&self) -> String {
        [
            &self.patient_id,
            &self.study_date,
            &self.modality,
            &self.accession_number,
        ]
        .iter()
        .map(|part| sanitize(part.as_deref().unwrap_or(MISSING)))
        .collect::<Vec<_>>()
        .join("_")
    }
}

impl fmt::Display for StudyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.folder_name())
    }
}

/// Makes a single path component out of arbitrary header text
pub fn sanitize(component: &str) -> String {
    let cleaned: String = component
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '\0' => '_',
            c => c,
        })
        .collect();
    match cleaned.as_str() {
        "" | "." | ".." => MISSING.to_string(),
        _ => cleaned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicom_core::{DataElement, PrimitiveValue, VR};

    #[test]
    fn test_folder_name_from_dicom() {
        let mut dcm = InMemDicomObject::new_empty();
        dcm.put(DataElement::new(PATIENT_ID, VR::LO, PrimitiveValue::from("P001")));
        dcm.put(DataElement::new(STUDY_DATE, VR::DA, PrimitiveValue::from("20240115")));
        dcm.put(DataElement::new(MODALITY, VR::CS, PrimitiveValue::from("MR")));
        dcm.put(DataElement::new(
            ACCESSION_NUMBER,
            VR::SH,
            PrimitiveValue::from("A123"),
        ));

        let key = StudyKey::from_dicom(&dcm);
        assert_eq!(key.folder_name(), "P001_20240115_MR_A123");
    }

    #[test]
    fn test_missing_parts_are_unknown() {
        let mut dcm = InMemDicomObject::new_empty();
        dcm.put(DataElement::new(PATIENT_ID, VR::LO, PrimitiveValue::from("P001")));

        let key = StudyKey::from_dicom(&dcm);
        assert_eq!(key.folder_name(), "P001_UNKNOWN_UNKNOWN_UNKNOWN");
    }

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize("a/b\\c"), "a_b_c");
        assert_eq!(sanitize(" .. "), "UNKNOWN");
        assert_eq!(sanitize(""), "UNKNOWN");
        assert_eq!(sanitize("T1CUBE_AXIr"), "T1CUBE_AXIr");
    }
}
