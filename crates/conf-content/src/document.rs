//! Configuration document wrapper
//!
//! Wraps `toml_edit::DocumentMut` so the pipeline reads sections in source
//! order and writes resolved values back without disturbing comments,
//! formatting, or keys it never touched.

use toml_edit::DocumentMut;

use crate::error::{Error, Result};
use crate::value::RawValue;

/// One top-level tool section, with entries in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Section (tool) name
    pub name: String,
    /// Option entries in source order
    pub entries: Vec<(String, RawValue)>,
}

/// A parsed configuration document.
#[derive(Debug, Clone)]
pub struct ConfigDocument {
    doc: DocumentMut,
}

impl ConfigDocument {
    /// Parse a TOML document.
    ///
    /// There is no partial parse: any syntax error fails the whole document.
    pub fn parse(source: &str) -> Result<Self> {
        let doc: DocumentMut = source
            .parse()
            .map_err(|e: toml_edit::TomlError| Error::parse("TOML", e.to_string()))?;
        Ok(Self { doc })
    }

    /// All top-level table sections in source order.
    ///
    /// Non-table top-level keys are not tool sections and are skipped (they
    /// survive rendering untouched). Within a section, nested tables and
    /// inline tables are outside the flat option model and are skipped the
    /// same way.
    pub fn sections(&self) -> Vec<Section> {
        let mut sections = Vec::new();
        for (name, item) in self.doc.iter() {
            let Some(table) = item.as_table() else {
                continue;
            };
            let mut entries = Vec::new();
            for (key, item) in table.iter() {
                if let Some(value) = item.as_value() {
                    if let Some(raw) = RawValue::from_toml(value) {
                        entries.push((key.to_string(), raw));
                    }
                }
            }
            sections.push(Section {
                name: name.to_string(),
                entries,
            });
        }
        sections
    }

    /// Section names in source order.
    pub fn section_names(&self) -> Vec<String> {
        self.sections().into_iter().map(|s| s.name).collect()
    }

    /// Read a single value.
    pub fn get_value(&self, section: &str, key: &str) -> Option<RawValue> {
        self.doc
            .get(section)
            .and_then(|item| item.as_table())
            .and_then(|table| table.get(key))
            .and_then(|item| item.as_value())
            .and_then(RawValue::from_toml)
    }

    /// Set a single value, creating the section if it does not exist.
    ///
    /// Everything else in the document keeps its formatting verbatim.
    pub fn set_value(&mut self, section: &str, key: &str, value: &RawValue) {
        let item = self
            .doc
            .entry(section)
            .or_insert_with(toml_edit::table);
        if !item.is_table() {
            *item = toml_edit::table();
        }
        if let Some(table) = item.as_table_mut() {
            table[key] = toml_edit::value(value.to_toml());
        }
    }

    /// Render the document back to TOML text.
    pub fn render(&self) -> String {
        self.doc.to_string()
    }
}
