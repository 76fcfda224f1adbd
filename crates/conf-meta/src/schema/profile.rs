//! Tool profile schema

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::option::OptionSpec;

/// What role a tool plays in the development workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolKind {
    /// Code formatter (e.g., black)
    Formatter,
    /// Import sorter (e.g., isort)
    ImportSorter,
    /// Style/doc linter (e.g., flake8)
    Linter,
    /// Static type checker (e.g., mypy)
    TypeChecker,
    /// Test runner (e.g., pytest)
    TestRunner,
}

/// Static catalog entry for one known tool: its identity and the options it
/// recognizes. Immutable once registered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolProfile {
    /// Machine identifier, doubling as the config section name (e.g., "black")
    pub slug: String,
    /// Display name (e.g., "Black")
    pub name: String,
    /// Tool role
    pub kind: ToolKind,
    /// Recognized options by name
    options: HashMap<String, OptionSpec>,
}

impl ToolProfile {
    /// Create a profile with no options yet.
    pub fn new(slug: impl Into<String>, name: impl Into<String>, kind: ToolKind) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            kind,
            options: HashMap::new(),
        }
    }

    /// Add a recognized option (builder pattern). Replaces any option with
    /// the same name.
    pub fn with_option(mut self, spec: OptionSpec) -> Self {
        self.options.insert(spec.name.clone(), spec);
        self
    }

    /// Look up an option spec by name.
    pub fn option(&self, name: &str) -> Option<&OptionSpec> {
        self.options.get(name)
    }

    /// Check if the tool recognizes an option.
    pub fn has_option(&self, name: &str) -> bool {
        self.options.contains_key(name)
    }

    /// Number of recognized options.
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// All recognized option names (sorted).
    pub fn option_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.options.keys().map(String::as_str).collect();
        names.sort();
        names
    }

    /// Iterate over all option specs.
    pub fn options(&self) -> impl Iterator<Item = &OptionSpec> {
        self.options.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::OptionType;

    fn make_profile() -> ToolProfile {
        ToolProfile::new("black", "Black", ToolKind::Formatter)
            .with_option(OptionSpec::new("line-length", OptionType::Integer, 88))
            .with_option(OptionSpec::new("preview", OptionType::Bool, false))
    }

    #[test]
    fn test_option_lookup() {
        let profile = make_profile();
        assert!(profile.has_option("line-length"));
        assert!(!profile.has_option("line_length"));
        assert_eq!(
            profile.option("line-length").map(|s| s.value_type),
            Some(OptionType::Integer)
        );
        assert!(profile.option("unknown").is_none());
    }

    #[test]
    fn test_option_names_sorted() {
        let profile = make_profile();
        assert_eq!(profile.option_names(), vec!["line-length", "preview"]);
        assert_eq!(profile.option_count(), 2);
    }

    #[test]
    fn test_with_option_replaces_existing() {
        let profile = make_profile()
            .with_option(OptionSpec::new("line-length", OptionType::Integer, 100));
        assert_eq!(profile.option_count(), 2);
        assert_eq!(
            profile.option("line-length").and_then(|s| s.default.as_integer()),
            Some(100)
        );
    }
}
