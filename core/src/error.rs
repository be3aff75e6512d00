use thiserror::Error;

/// Result type for mrseries operations
pub type Result<T> = std::result::Result<T, SeriesError>;

/// Error types for mrseries operations
///
/// Only extraction and the surrounding I/O can fail. Orientation resolution
/// and classification are total and never produce one of these.
#[derive(Error, Debug)]
pub enum SeriesError {
    /// A required attribute is absent from the metadata record
    #[error("Missing required tag: {0}")]
    MissingTag(String),

    /// DICOM reading error
    #[error("DICOM error: {0}")]
    DicomError(String),

    /// Invalid tag value
    #[error("Invalid tag value: {0}")]
    InvalidValue(String),

    /// A rule definition could not be compiled
    #[error("Invalid rule: {0}")]
    InvalidRule(String),

    /// Rule configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),

    /// Worker pool could not be created
    #[error("Thread pool error: {0}")]
    ThreadPool(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

// Convert dicom-object errors
impl From<dicom_object::ReadError> for SeriesError {
    fn from(e: dicom_object::ReadError) -> Self {
        SeriesError::DicomError(format!("{}", e))
    }
}

impl From<dicom_core::value::ConvertValueError> for SeriesError {
    fn from(e: dicom_core::value::ConvertValueError) -> Self {
        SeriesError::InvalidValue(format!("{}", e))
    }
}

impl From<regex::Error> for SeriesError {
    fn from(e: regex::Error) -> Self {
        SeriesError::InvalidRule(format!("{}", e))
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for SeriesError {
    fn from(e: serde_json::Error) -> Self {
        SeriesError::Config(format!("{}", e))
    }
}

impl From<rayon::ThreadPoolBuildError> for SeriesError {
    fn from(e: rayon::ThreadPoolBuildError) -> Self {
        SeriesError::ThreadPool(format!("{}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tag_message() {
        let err = SeriesError::MissingTag("Modality (0008,0060)".to_string());
        assert_eq!(err.to_string(), "Missing required tag: Modality (0008,0060)");
    }

    #[test]
    fn test_regex_error_becomes_invalid_rule() {
        let err: SeriesError = regex::Regex::new("(unclosed").unwrap_err().into();
        assert!(matches!(err, SeriesError::InvalidRule(_)));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: SeriesError = io.into();
        assert!(err.to_string().starts_with("IO error"));
    }
}
