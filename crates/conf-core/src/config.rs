//! In-memory configuration representations
//!
//! [`RawConfig`] is the loader's output: tool sections of untyped values in
//! document order. [`CanonicalConfig`] is the normalizer's output: the same
//! shape, but with values coerced to their declared types and tagged with
//! where they came from. Each stage builds a fresh structure; nothing is
//! shared or mutated across stages except the resolver's explicit write-back.

use serde::{Deserialize, Serialize};

use conf_content::RawValue;
use conf_meta::CanonicalValue;

/// One tool section as loaded, entries in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSection {
    pub tool: String,
    pub options: Vec<(String, RawValue)>,
}

/// The whole document as loaded: sections in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawConfig {
    sections: Vec<RawSection>,
}

impl RawConfig {
    pub fn push_section(&mut self, section: RawSection) {
        self.sections.push(section);
    }

    pub fn sections(&self) -> &[RawSection] {
        &self.sections
    }

    pub fn section(&self, tool: &str) -> Option<&RawSection> {
        self.sections.iter().find(|s| s.tool == tool)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Where an effective value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// Set in the document and kept as written
    Explicit,
    /// Substituted from the option's default after a type mismatch
    Default,
    /// Inherited from a shared concept's resolution
    Inherited,
    /// Explicitly set, then updated by a union resolution
    Resolved,
}

/// A typed value, or a raw pass-through for options the registry does not
/// recognize. Unknown options are never silently dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EntryValue {
    Canonical(CanonicalValue),
    Untyped(RawValue),
}

impl EntryValue {
    pub fn as_canonical(&self) -> Option<&CanonicalValue> {
        match self {
            EntryValue::Canonical(value) => Some(value),
            EntryValue::Untyped(_) => None,
        }
    }
}

impl std::fmt::Display for EntryValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryValue::Canonical(value) => write!(f, "{}", value),
            EntryValue::Untyped(value) => write!(f, "{}", value),
        }
    }
}

/// One effective option value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigEntry {
    pub option: String,
    pub value: EntryValue,
    pub origin: Origin,
}

/// One tool's canonical section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalSection {
    pub tool: String,
    /// Whether the tool has a registered profile
    pub known: bool,
    entries: Vec<ConfigEntry>,
}

impl CanonicalSection {
    pub fn new(tool: impl Into<String>, known: bool) -> Self {
        Self {
            tool: tool.into(),
            known,
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: ConfigEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[ConfigEntry] {
        &self.entries
    }

    pub fn entry(&self, option: &str) -> Option<&ConfigEntry> {
        self.entries.iter().find(|e| e.option == option)
    }

    pub fn entry_mut(&mut self, option: &str) -> Option<&mut ConfigEntry> {
        self.entries.iter_mut().find(|e| e.option == option)
    }

    /// Insert or replace an entry.
    pub fn set(&mut self, option: &str, value: CanonicalValue, origin: Origin) {
        match self.entry_mut(option) {
            Some(entry) => {
                entry.value = EntryValue::Canonical(value);
                entry.origin = origin;
            }
            None => self.entries.push(ConfigEntry {
                option: option.to_string(),
                value: EntryValue::Canonical(value),
                origin,
            }),
        }
    }
}

/// The whole document in canonical form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanonicalConfig {
    sections: Vec<CanonicalSection>,
}

impl CanonicalConfig {
    pub fn push_section(&mut self, section: CanonicalSection) {
        self.sections.push(section);
    }

    pub fn sections(&self) -> &[CanonicalSection] {
        &self.sections
    }

    pub fn section(&self, tool: &str) -> Option<&CanonicalSection> {
        self.sections.iter().find(|s| s.tool == tool)
    }

    pub fn section_mut(&mut self, tool: &str) -> Option<&mut CanonicalSection> {
        self.sections.iter_mut().find(|s| s.tool == tool)
    }

    /// The effective value of one option, if present.
    pub fn effective(&self, tool: &str, option: &str) -> Option<&EntryValue> {
        self.section(tool)
            .and_then(|s| s.entry(option))
            .map(|e| &e.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_config_lookup() {
        let mut config = RawConfig::default();
        config.push_section(RawSection {
            tool: "black".to_string(),
            options: vec![("line-length".to_string(), RawValue::Integer(100))],
        });

        assert_eq!(config.len(), 1);
        assert!(config.section("black").is_some());
        assert!(config.section("isort").is_none());
    }

    #[test]
    fn test_set_replaces_existing_entry() {
        let mut section = CanonicalSection::new("black", true);
        section.set("line-length", CanonicalValue::Integer(88), Origin::Explicit);
        section.set("line-length", CanonicalValue::Integer(100), Origin::Inherited);

        assert_eq!(section.entries().len(), 1);
        let entry = section.entry("line-length").unwrap();
        assert_eq!(entry.origin, Origin::Inherited);
        assert_eq!(
            entry.value.as_canonical().and_then(|v| v.as_integer()),
            Some(100)
        );
    }

    #[test]
    fn test_effective_lookup() {
        let mut config = CanonicalConfig::default();
        let mut section = CanonicalSection::new("black", true);
        section.set("preview", CanonicalValue::Bool(true), Origin::Explicit);
        config.push_section(section);

        assert!(config.effective("black", "preview").is_some());
        assert!(config.effective("black", "missing").is_none());
        assert!(config.effective("missing", "preview").is_none());
    }

    #[test]
    fn test_untyped_entries_have_no_canonical_value() {
        let entry = ConfigEntry {
            option: "branch".to_string(),
            value: EntryValue::Untyped(RawValue::Bool(true)),
            origin: Origin::Explicit,
        };
        assert!(entry.value.as_canonical().is_none());
        assert_eq!(entry.value.to_string(), "true");
    }
}
