//! Resolved bundle assembly
//!
//! The bundle is the pipeline's terminal artifact: the canonical config with
//! every inheritance and resolution applied, the per-concept resolutions, the
//! conflict report, and a digest of the input it was computed from. Assembly
//! is pure; two runs over the same input produce identical bundles.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::config::CanonicalConfig;
use crate::error::Result;
use crate::finding::{ConflictReport, RunStatus};
use crate::resolve::ConceptResolution;

/// Hex-encoded SHA-256 digest of an input document.
pub fn compute_digest(source: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(source.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// The validated output of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedBundle {
    /// Canonical sections with effective values and origins
    pub config: CanonicalConfig,
    /// Authoritative value per shared concept, in registry order
    pub resolutions: Vec<ConceptResolution>,
    /// Everything the run found worth reporting
    pub report: ConflictReport,
    /// Overall run classification
    pub status: RunStatus,
    /// Digest of the input document this bundle was computed from
    pub input_digest: String,
}

impl ResolvedBundle {
    pub fn new(
        config: CanonicalConfig,
        resolutions: Vec<ConceptResolution>,
        report: ConflictReport,
        input_digest: String,
    ) -> Self {
        let status = report.status();
        Self {
            config,
            resolutions,
            report,
            status,
            input_digest,
        }
    }

    /// The resolution computed for one concept, if it had any participants.
    pub fn resolution(&self, concept: &str) -> Option<&ConceptResolution> {
        self.resolutions.iter().find(|r| r.concept == concept)
    }

    /// Serialize the bundle as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_stable_and_input_sensitive() {
        let a = compute_digest("[black]\nline-length = 100\n");
        let b = compute_digest("[black]\nline-length = 100\n");
        let c = compute_digest("[black]\nline-length = 120\n");

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn test_status_derives_from_report() {
        let bundle = ResolvedBundle::new(
            CanonicalConfig::default(),
            Vec::new(),
            ConflictReport::default(),
            compute_digest(""),
        );
        assert_eq!(bundle.status, RunStatus::Ok);
    }
}
