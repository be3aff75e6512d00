use std::fmt;

/// Marker placed in the third Image Type value of reconstructed images
pub const REFORMATTED_MARKER: &str = "REFORMATTED";

/// DICOM ImageType field decomposed into its components
///
/// The ImageType field contains information about:
/// - `pixels`: First element (e.g., "ORIGINAL", "DERIVED")
/// - `exam`: Second element (e.g., "PRIMARY", "SECONDARY")
/// - `flavor`: Third element, carries the "REFORMATTED" marker on MR reconstructions
/// - `extras`: Additional elements beyond the first three (e.g., "MIN IP")
///
/// An empty or short field is represented with empty strings and `None`,
/// never rejected.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct ImageType {
    pub pixels: String,
    pub exam: String,
    pub flavor: Option<String>,
    pub extras: Option<Vec<String>>,
}

impl ImageType {
    /// Creates a new ImageType
    pub fn new(
        pixels: String,
        exam: String,
        flavor: Option<String>,
        extras: Option<Vec<String>>,
    ) -> Self {
        Self {
            pixels,
            exam,
            flavor,
            extras,
        }
    }

    /// Builds an ImageType from the ordered multi-value flags
    ///
    /// # Example
    ///
    /// ```
    /// use mrseries_core::ImageType;
    ///
    /// let flags = vec!["DERIVED".to_string(), "SECONDARY".to_string(), "REFORMATTED".to_string()];
    /// let image_type = ImageType::from_flags(&flags);
    /// assert!(image_type.is_reformatted());
    /// assert!(!ImageType::from_flags(&[]).is_reformatted());
    /// ```
    pub fn from_flags(flags: &[String]) -> Self {
        let mut iter = flags.iter().map(|s| s.trim().to_string());
        let pixels = iter.next().unwrap_or_default();
        let exam = iter.next().unwrap_or_default();
        let flavor = iter.next();
        let extras: Vec<String> = iter.collect();

        Self {
            pixels,
            exam,
            flavor,
            extras: if extras.is_empty() { None } else { Some(extras) },
        }
    }

    /// Returns the flags in their original order
    ///
    /// Leading empty values are kept so positions stay meaningful.
    pub fn flags(&self) -> Vec<&str> {
        let mut flags = Vec::new();
        if self.pixels.is_empty() && self.exam.is_empty() && self.flavor.is_none() {
            return flags;
        }
        flags.push(self.pixels.as_str());
        flags.push(self.exam.as_str());
        if let Some(ref flavor) = self.flavor {
            flags.push(flavor.as_str());
        }
        if let Some(ref extras) = self.extras {
            flags.extend(extras.iter().map(|s| s.as_str()));
        }
        flags
    }

    /// Returns the last flag, if any
    pub fn last(&self) -> Option<&str> {
        self.flags().last().copied()
    }

    /// Returns true if the third value is exactly the reformatted marker
    ///
    /// Fewer than three values means the image is treated as original.
    pub fn is_reformatted(&self) -> bool {
        self.flavor.as_deref() == Some(REFORMATTED_MARKER)
    }

    /// Returns a simple string representation
    ///
    /// Format: "pixels|exam|flavor|extra1|extra2|..."
    /// Empty values are represented as ''
    pub fn simple_repr(&self) -> String {
        self.flags()
            .iter()
            .map(|f| if f.is_empty() { "''" } else { *f })
            .collect::<Vec<_>>()
            .join("|")
    }

    /// Checks if the image type contains a specific value
    pub fn contains(&self, val: &str) -> bool {
        self.flags().iter().any(|f| *f == val)
    }

    /// Returns true if both pixels and exam are non-empty
    pub fn is_valid(&self) -> bool {
        !self.pixels.is_empty() && !self.exam.is_empty()
    }
}

impl fmt::Display for ImageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_repr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_from_flags_decomposes() {
        let img_type = ImageType::from_flags(&flags(&["ORIGINAL", "PRIMARY", "OTHER", "MIN IP"]));
        assert_eq!(img_type.pixels, "ORIGINAL");
        assert_eq!(img_type.exam, "PRIMARY");
        assert_eq!(img_type.flavor.as_deref(), Some("OTHER"));
        assert_eq!(img_type.extras, Some(vec!["MIN IP".to_string()]));
        assert_eq!(img_type.last(), Some("MIN IP"));
    }

    #[test]
    fn test_from_empty_flags() {
        let img_type = ImageType::from_flags(&[]);
        assert!(!img_type.is_valid());
        assert!(img_type.flags().is_empty());
        assert_eq!(img_type.last(), None);
        assert_eq!(img_type.simple_repr(), "");
    }

    #[test]
    fn test_is_reformatted_requires_third_position() {
        assert!(ImageType::from_flags(&flags(&["DERIVED", "SECONDARY", "REFORMATTED"])).is_reformatted());
        assert!(ImageType::from_flags(&flags(&["DERIVED", "SECONDARY", " REFORMATTED "])).is_reformatted());
        assert!(!ImageType::from_flags(&flags(&["REFORMATTED", "SECONDARY"])).is_reformatted());
        assert!(!ImageType::from_flags(&flags(&["DERIVED", "SECONDARY", "OTHER", "REFORMATTED"])).is_reformatted());
        assert!(!ImageType::from_flags(&flags(&["ORIGINAL", "PRIMARY", "ORIGINAL"])).is_reformatted());
    }

    #[test]
    fn test_simple_repr_with_empty_value() {
        let img_type = ImageType::from_flags(&flags(&["DERIVED", "", "REFORMATTED"]));
        assert_eq!(img_type.simple_repr(), "DERIVED|''|REFORMATTED");
        assert_eq!(img_type.to_string(), "DERIVED|''|REFORMATTED");
    }

    #[test]
    fn test_contains() {
        let img_type = ImageType::from_flags(&flags(&["ORIGINAL", "PRIMARY", "M", "ND", "NORM"]));
        assert!(img_type.contains("ORIGINAL"));
        assert!(img_type.contains("ND"));
        assert!(!img_type.contains("DERIVED"));
    }
}
