//! Findings and the conflict report
//!
//! Every non-fatal condition the pipeline observes becomes a [`Finding`].
//! Findings accumulate in document/registry order, so two runs on identical
//! input produce identical reports.

use std::fmt;

use serde::{Deserialize, Serialize};

use conf_content::RawValue;
use conf_meta::{CanonicalValue, OptionType};

/// How serious a finding is. Only `Error` affects the run status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{}", name)
    }
}

/// What kind of condition a finding records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FindingKind {
    /// A config section references a tool absent from the registry
    UnknownTool,
    /// An option is not recognized by its tool's profile
    UnknownOption,
    /// A raw value could not be coerced to its declared type
    TypeMismatch,
    /// Explicit values of a must-match concept disagree
    ConflictingValue,
    /// An explicit value lost to a higher-priority or looser one
    ShadowedValue,
    /// A tool's explicit set misses elements other tools exclude
    PartialCoverage,
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FindingKind::UnknownTool => "unknown-tool",
            FindingKind::UnknownOption => "unknown-option",
            FindingKind::TypeMismatch => "type-mismatch",
            FindingKind::ConflictingValue => "conflicting-value",
            FindingKind::ShadowedValue => "shadowed-value",
            FindingKind::PartialCoverage => "partial-coverage",
        };
        write!(f, "{}", name)
    }
}

/// One tool's value as it appears in a finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolValue {
    pub tool: String,
    pub option: String,
    pub value: String,
}

impl ToolValue {
    pub fn new(
        tool: impl Into<String>,
        option: impl Into<String>,
        value: impl fmt::Display,
    ) -> Self {
        Self {
            tool: tool.into(),
            option: option.into(),
            value: value.to_string(),
        }
    }
}

impl fmt::Display for ToolValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{} = {}", self.tool, self.option, self.value)
    }
}

/// One observation made during a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub severity: Severity,
    pub kind: FindingKind,
    /// Shared concept involved, when the finding concerns one
    pub concept: Option<String>,
    pub message: String,
    /// The per-tool values in play, in declaration order
    pub values: Vec<ToolValue>,
    /// The resolution taken, when one applies
    pub resolution: Option<String>,
}

impl Finding {
    pub fn unknown_tool(tool: &str) -> Self {
        Self {
            severity: Severity::Warning,
            kind: FindingKind::UnknownTool,
            concept: None,
            message: format!("'{}' is not a registered tool; its section is carried through unvalidated", tool),
            values: Vec::new(),
            resolution: None,
        }
    }

    pub fn unknown_option(tool: &str, option: &str) -> Self {
        Self {
            severity: Severity::Warning,
            kind: FindingKind::UnknownOption,
            concept: None,
            message: format!("'{}' does not recognize option '{}'; value passed through untyped", tool, option),
            values: Vec::new(),
            resolution: None,
        }
    }

    pub fn type_mismatch(
        tool: &str,
        option: &str,
        expected: OptionType,
        found: &RawValue,
        substituted: &CanonicalValue,
    ) -> Self {
        Self {
            severity: Severity::Error,
            kind: FindingKind::TypeMismatch,
            concept: None,
            message: format!(
                "'{}.{}' expects {}, got {} value '{}'",
                tool, option, expected, found.type_name(), found
            ),
            values: vec![ToolValue::new(tool, option, found)],
            resolution: Some(format!("substituted default {}", substituted)),
        }
    }

    pub fn conflicting_value(
        concept: &str,
        values: Vec<ToolValue>,
        winner: &ToolValue,
    ) -> Self {
        Self {
            severity: Severity::Error,
            kind: FindingKind::ConflictingValue,
            concept: Some(concept.to_string()),
            message: format!("tools disagree on '{}'", concept),
            values,
            resolution: Some(format!("resolved to {} by precedence", winner)),
        }
    }

    pub fn shadowed_value(
        concept: &str,
        values: Vec<ToolValue>,
        resolution: impl Into<String>,
    ) -> Self {
        Self {
            severity: Severity::Info,
            kind: FindingKind::ShadowedValue,
            concept: Some(concept.to_string()),
            message: format!("divergent values for '{}' are shadowed by the resolution", concept),
            values,
            resolution: Some(resolution.into()),
        }
    }

    pub fn partial_coverage(
        concept: &str,
        tool: &str,
        option: &str,
        missing: &[String],
        resolved: &CanonicalValue,
    ) -> Self {
        Self {
            severity: Severity::Info,
            kind: FindingKind::PartialCoverage,
            concept: Some(concept.to_string()),
            message: format!(
                "'{}.{}' misses patterns excluded elsewhere: {}",
                tool, option, missing.join(", ")
            ),
            values: vec![ToolValue::new(tool, option, missing.join(", "))],
            resolution: Some(format!("widened to {}", resolved)),
        }
    }
}

/// Classification of a whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RunStatus {
    /// No warnings or errors (info findings allowed)
    Ok,
    /// Warnings present, no errors
    OkWithWarnings,
    /// At least one error-severity finding
    Failed,
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunStatus::Ok => "ok",
            RunStatus::OkWithWarnings => "ok-with-warnings",
            RunStatus::Failed => "failed",
        };
        write!(f, "{}", name)
    }
}

/// Ordered collection of findings from one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConflictReport {
    findings: Vec<Finding>,
}

impl ConflictReport {
    pub fn new(findings: Vec<Finding>) -> Self {
        Self { findings }
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn push(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.findings.iter().any(|f| f.severity == Severity::Error)
    }

    pub fn has_warnings(&self) -> bool {
        self.findings.iter().any(|f| f.severity == Severity::Warning)
    }

    /// Classify the run: any error fails it; otherwise warnings demote it.
    pub fn status(&self) -> RunStatus {
        if self.has_errors() {
            RunStatus::Failed
        } else if self.has_warnings() {
            RunStatus::OkWithWarnings
        } else {
            RunStatus::Ok
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_is_ok() {
        let report = ConflictReport::default();
        assert!(report.is_empty());
        assert_eq!(report.status(), RunStatus::Ok);
    }

    #[test]
    fn test_warnings_demote_status() {
        let report = ConflictReport::new(vec![Finding::unknown_tool("coverage")]);
        assert_eq!(report.status(), RunStatus::OkWithWarnings);
        assert!(report.has_warnings());
        assert!(!report.has_errors());
    }

    #[test]
    fn test_errors_fail_the_run() {
        let winner = ToolValue::new("black", "line-length", 100);
        let report = ConflictReport::new(vec![
            Finding::unknown_tool("coverage"),
            Finding::conflicting_value("line_length", vec![winner.clone()], &winner),
        ]);
        assert_eq!(report.status(), RunStatus::Failed);
    }

    #[test]
    fn test_info_findings_keep_ok() {
        let report = ConflictReport::new(vec![Finding::shadowed_value(
            "source_paths",
            vec![],
            "resolved to [tests]",
        )]);
        assert_eq!(report.status(), RunStatus::Ok);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Error > Severity::Warning);
        assert!(Severity::Warning > Severity::Info);
    }
}
