//! Config loader stage
//!
//! First of the four pipeline stages. Parsing itself is delegated to
//! conf-content; this stage's responsibility is a uniform in-memory
//! representation and the single fatal parse error.

use conf_content::ConfigDocument;

use crate::config::{RawConfig, RawSection};
use crate::error::{Error, Result};

/// Parse a settings document into a [`RawConfig`].
///
/// Unknown top-level sections pass through as unknown-tool entries for later
/// stages to warn about; only an unparseable document is fatal. The returned
/// [`ConfigDocument`] keeps the original formatting for later write-back.
pub fn load(source: &str) -> Result<(ConfigDocument, RawConfig)> {
    let document = ConfigDocument::parse(source).map_err(|e| Error::MalformedDocument {
        message: e.to_string(),
    })?;

    let mut raw = RawConfig::default();
    for section in document.sections() {
        tracing::debug!(tool = %section.name, options = section.entries.len(), "loaded section");
        raw.push_section(RawSection {
            tool: section.name,
            options: section.entries,
        });
    }

    Ok((document, raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use conf_content::RawValue;

    #[test]
    fn test_load_preserves_section_order() {
        let (_, raw) = load("[isort]\nprofile = \"black\"\n\n[black]\nline-length = 88\n").unwrap();
        let tools: Vec<_> = raw.sections().iter().map(|s| s.tool.as_str()).collect();
        assert_eq!(tools, vec!["isort", "black"]);
    }

    #[test]
    fn test_load_keeps_unknown_sections() {
        let (_, raw) = load("[coverage]\nbranch = true\n").unwrap();
        assert_eq!(
            raw.section("coverage").unwrap().options,
            vec![("branch".to_string(), RawValue::Bool(true))]
        );
    }

    #[test]
    fn test_malformed_document_is_fatal() {
        let err = load("[black\nline-length = 88").unwrap_err();
        assert!(matches!(err, Error::MalformedDocument { .. }));
    }

    #[test]
    fn test_empty_document() {
        let (_, raw) = load("").unwrap();
        assert!(raw.is_empty());
    }
}
