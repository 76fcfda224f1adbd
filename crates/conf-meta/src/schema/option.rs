//! Option specification schema

use serde::{Deserialize, Serialize};

use crate::value::{CanonicalValue, OptionType};

/// One recognized option of a tool.
///
/// An option may carry a shared-concept tag, marking it as one tool's
/// expression of a logical setting that other tools may also express under
/// their own names (e.g., black's `line-length` and isort's `line_length`
/// both tagged `line_length`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionSpec {
    /// Option name as it appears in the tool's config section
    pub name: String,
    /// Declared semantic type
    pub value_type: OptionType,
    /// Shared-concept id, when this option expresses a cross-tool setting
    #[serde(default)]
    pub concept: Option<String>,
    /// Value used when the option is absent or unusable
    pub default: CanonicalValue,
}

impl OptionSpec {
    /// Create a new option spec with no shared-concept tag.
    pub fn new(
        name: impl Into<String>,
        value_type: OptionType,
        default: impl Into<CanonicalValue>,
    ) -> Self {
        Self {
            name: name.into(),
            value_type,
            concept: None,
            default: default.into(),
        }
    }

    /// Tag the option with a shared-concept id (builder pattern).
    pub fn with_concept(mut self, concept: impl Into<String>) -> Self {
        self.concept = Some(concept.into());
        self
    }

    /// Check whether the default value matches the declared type.
    pub fn default_matches_type(&self) -> bool {
        self.default.value_type() == self.value_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_no_concept() {
        let spec = OptionSpec::new("line-length", OptionType::Integer, 88);
        assert_eq!(spec.name, "line-length");
        assert_eq!(spec.value_type, OptionType::Integer);
        assert_eq!(spec.concept, None);
        assert_eq!(spec.default, CanonicalValue::Integer(88));
    }

    #[test]
    fn test_with_concept() {
        let spec =
            OptionSpec::new("line-length", OptionType::Integer, 88).with_concept("line_length");
        assert_eq!(spec.concept.as_deref(), Some("line_length"));
    }

    #[test]
    fn test_default_matches_type() {
        let good = OptionSpec::new("strict", OptionType::Bool, false);
        assert!(good.default_matches_type());

        let bad = OptionSpec::new("strict", OptionType::Bool, 1);
        assert!(!bad.default_matches_type());
    }
}
