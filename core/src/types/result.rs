use crate::types::SeriesCategory;
use std::fmt;

/// Outcome of classifying one series
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct ClassificationResult {
    pub category: SeriesCategory,

    /// Canonical series name, `None` exactly when nothing matched
    pub synthesized_name: Option<String>,
}

impl ClassificationResult {
    pub fn matched(category: SeriesCategory, synthesized_name: String) -> Self {
        Self {
            category,
            synthesized_name: Some(synthesized_name),
        }
    }

    pub fn no_match() -> Self {
        Self {
            category: SeriesCategory::NoMatch,
            synthesized_name: None,
        }
    }

    pub fn is_match(&self) -> bool {
        !self.category.is_no_match()
    }
}

impl fmt::Display for ClassificationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.synthesized_name {
            Some(ref name) => write!(f, "{} ({})", name, self.category),
            None => write!(f, "{}", self.category),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let result = ClassificationResult::matched(SeriesCategory::T1, "T1CUBE_AXI".to_string());
        assert_eq!(result.to_string(), "T1CUBE_AXI (T1)");
        assert_eq!(ClassificationResult::no_match().to_string(), "NO_MATCH");
        assert!(!ClassificationResult::no_match().is_match());
    }
}
