//! Pipeline driver
//!
//! [`Engine`] owns a validated registry and runs the whole pipeline over one
//! document: load, normalize, resolve, assemble. Construction fails if the
//! registry is defective; a run never mutates the engine, so one engine can
//! serve any number of documents.

use conf_content::{ConfigDocument, RawValue};
use conf_meta::{CanonicalValue, ProfileRegistry};

use crate::bundle::{ResolvedBundle, compute_digest};
use crate::config::Origin;
use crate::error::Result;
use crate::finding::ConflictReport;
use crate::{loader, normalize, resolve};

pub struct Engine {
    registry: ProfileRegistry,
}

impl Engine {
    /// Build an engine over a registry, validating it first.
    pub fn new(registry: ProfileRegistry) -> Result<Self> {
        registry.validate()?;
        Ok(Self { registry })
    }

    /// Build an engine over the builtin tool catalog.
    pub fn with_builtins() -> Result<Self> {
        Self::new(ProfileRegistry::with_builtins())
    }

    pub fn registry(&self) -> &ProfileRegistry {
        &self.registry
    }

    /// Run the full pipeline over one TOML document.
    pub fn run(&self, source: &str) -> Result<ResolvedBundle> {
        let (_, bundle) = self.run_with_document(source)?;
        Ok(bundle)
    }

    fn run_with_document(&self, source: &str) -> Result<(ConfigDocument, ResolvedBundle)> {
        let digest = compute_digest(source);
        let (document, raw) = loader::load(source)?;
        let (mut config, mut findings) = normalize::normalize(&raw, &self.registry);
        let (resolutions, resolution_findings) = resolve::resolve(&mut config, &self.registry)?;
        findings.extend(resolution_findings);

        let report = ConflictReport::new(findings);
        tracing::info!(status = %report.status(), findings = report.len(), "pipeline run complete");
        Ok((document, ResolvedBundle::new(config, resolutions, report, digest)))
    }

    /// Rewrite the document so every shared concept reads consistently.
    ///
    /// Inherited, resolved, and default-substituted values are materialized
    /// into their sections, and every participating entry of a resolved
    /// concept is set to the authoritative value. Formatting, comments, and
    /// key order of untouched content survive. Running the pipeline over the
    /// rendered output reports no consistency findings.
    pub fn render(&self, source: &str) -> Result<String> {
        let (mut document, bundle) = self.run_with_document(source)?;

        for section in bundle.config.sections() {
            for entry in section.entries() {
                if entry.origin == Origin::Explicit {
                    continue;
                }
                if let Some(value) = entry.value.as_canonical() {
                    document.set_value(&section.tool, &entry.option, &raw_from_canonical(value));
                }
            }
        }

        // Conflicted explicit entries are repaired too; the bundle records
        // the disagreement, the rendered document does not keep it.
        for resolution in &bundle.resolutions {
            let Some(concept) = self.registry.concept(&resolution.concept) else {
                continue;
            };
            let raw = raw_from_canonical(&resolution.value);
            for binding in concept.bindings() {
                if bundle.config.section(&binding.tool).is_none() {
                    continue;
                }
                document.set_value(&binding.tool, &binding.option, &raw);
            }
        }

        Ok(document.render())
    }
}

fn raw_from_canonical(value: &CanonicalValue) -> RawValue {
    match value {
        CanonicalValue::Bool(b) => RawValue::Bool(*b),
        CanonicalValue::Integer(i) => RawValue::Integer(*i),
        CanonicalValue::Str(s) => RawValue::Str(s.clone()),
        CanonicalValue::StringSet(items) => {
            RawValue::List(items.iter().cloned().map(RawValue::Str).collect())
        }
        CanonicalValue::StringList(items) => {
            RawValue::List(items.iter().cloned().map(RawValue::Str).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conf_meta::{MergeStrategy, SharedConcept};

    #[test]
    fn test_defective_registry_is_rejected() {
        let mut registry = ProfileRegistry::with_builtins();
        registry.register_concept(
            SharedConcept::new("dangling", MergeStrategy::Union).with_binding("black", "no-such"),
        );

        assert!(Engine::new(registry).is_err());
    }

    #[test]
    fn test_empty_document_is_ok() {
        let engine = Engine::with_builtins().unwrap();
        let bundle = engine.run("").unwrap();

        assert!(bundle.report.is_empty());
        assert!(bundle.resolutions.is_empty());
        assert_eq!(bundle.status, crate::finding::RunStatus::Ok);
    }

    #[test]
    fn test_raw_from_canonical_shapes() {
        assert_eq!(
            raw_from_canonical(&CanonicalValue::Integer(88)),
            RawValue::Integer(88)
        );
        assert_eq!(
            raw_from_canonical(&CanonicalValue::set(["b", "a"])),
            RawValue::List(vec![RawValue::Str("a".into()), RawValue::Str("b".into())])
        );
    }
}
