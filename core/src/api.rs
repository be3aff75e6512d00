use crate::classifier::RuleSet;
use crate::error::Result;
use crate::extraction::{extract, read_record};
use crate::orientation::resolve;
use crate::types::{AttributeBundle, ClassificationResult, MetadataRecord, Orientation};
use dicom_dictionary_std::tags::PIXEL_DATA;
use dicom_object::{InMemDicomObject, OpenFileOptions};
use std::path::Path;

/// Main entry point for classifying MR series
///
/// Runs the one-way pipeline: record, attribute bundle, orientation,
/// classification. The rule table is compiled once and shared by every call.
///
/// # Example
///
/// ```
/// use mrseries_core::{SeriesCategory, SeriesClassifier};
/// use dicom_object::InMemDicomObject;
/// use dicom_core::{DataElement, PrimitiveValue, VR, Tag};
///
/// let mut dcm = InMemDicomObject::new_empty();
/// dcm.put(DataElement::new(
///     Tag(0x0008, 0x0060), // Modality
///     VR::CS,
///     PrimitiveValue::from("MR"),
/// ));
/// dcm.put(DataElement::new(
///     Tag(0x0008, 0x103E), // SeriesDescription
///     VR::LO,
///     PrimitiveValue::from("Ax T1 +C"),
/// ));
/// dcm.put(DataElement::new(
///     Tag(0x0018, 0x0023), // MRAcquisitionType
///     VR::CS,
///     PrimitiveValue::from("2D"),
/// ));
/// dcm.put(DataElement::new(
///     Tag(0x0020, 0x0037), // ImageOrientationPatient
///     VR::DS,
///     PrimitiveValue::Strs(
///         ["1", "0", "0", "0", "1", "0"].iter().map(|s| s.to_string()).collect::<Vec<_>>().into(),
///     ),
/// ));
///
/// let classifier = SeriesClassifier::with_builtin_rules().unwrap();
/// let series = classifier.classify_dicom(&dcm).unwrap();
///
/// assert_eq!(series.result.category, SeriesCategory::T1);
/// assert_eq!(series.name(), Some("T1CE_AXI"));
/// ```
#[derive(Debug)]
pub struct SeriesClassifier {
    rules: RuleSet,
}

impl SeriesClassifier {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Creates a classifier with the built-in rule table
    pub fn with_builtin_rules() -> Result<Self> {
        Ok(Self::new(RuleSet::builtin()?))
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Classifies an already-read metadata record
    ///
    /// # Errors
    ///
    /// Only extraction can fail, when the modality is missing.
    pub fn classify_record(&self, record: &MetadataRecord) -> Result<ClassifiedSeries> {
        let attributes = extract(record)?;
        let orientation = resolve(attributes.orientation_vectors.as_ref(), &attributes.image_type);
        let result = self.rules.classify(&attributes, orientation);

        Ok(ClassifiedSeries {
            attributes,
            orientation,
            result,
        })
    }

    /// Classifies an in-memory DICOM object
    pub fn classify_dicom(&self, dcm: &InMemDicomObject) -> Result<ClassifiedSeries> {
        self.classify_record(&read_record(dcm))
    }

    /// Reads the header of a DICOM file and classifies it
    ///
    /// Parsing stops before Pixel Data.
    pub fn classify_file(&self, path: &Path) -> Result<ClassifiedSeries> {
        let dcm = open_header(path)?;
        self.classify_dicom(&dcm)
    }
}

/// Opens a DICOM file without loading its pixel data
pub fn open_header(path: &Path) -> Result<dicom_object::DefaultDicomObject> {
    Ok(OpenFileOptions::new().read_until(PIXEL_DATA).open_file(path)?)
}

/// Everything computed for one instance
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct ClassifiedSeries {
    pub attributes: AttributeBundle,
    pub orientation: Orientation,
    pub result: ClassificationResult,
}

impl ClassifiedSeries {
    /// Synthesized series name, if any rule matched
    pub fn name(&self) -> Option<&str> {
        self.result.synthesized_name.as_deref()
    }

    pub fn is_match(&self) -> bool {
        self.result.is_match()
    }
}
