//! Shared concept schema
//!
//! A shared concept is a logical setting that more than one tool can express
//! under its own option name (line length, exclusion patterns). Each concept
//! declares how divergent explicit values are merged; the strategy is
//! registry data, not engine behavior.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How divergent explicit values for a concept are merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MergeStrategy {
    /// All explicit values must be equal; divergence is an error, resolved
    /// by the concept's precedence order.
    MustMatch,
    /// The resolved value is the set union of all explicit values.
    Union,
    /// Numeric concepts where the loosest bound (maximum) wins.
    MostPermissive,
    /// The first explicit value in precedence order wins; others are
    /// shadowed, not erroneous.
    PrecedenceList,
}

impl MergeStrategy {
    /// Whether a concept with this strategy must register a precedence order.
    pub fn requires_precedence(&self) -> bool {
        matches!(self, MergeStrategy::MustMatch | MergeStrategy::PrecedenceList)
    }
}

impl fmt::Display for MergeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MergeStrategy::MustMatch => "must-match",
            MergeStrategy::Union => "union",
            MergeStrategy::MostPermissive => "most-permissive",
            MergeStrategy::PrecedenceList => "precedence-list",
        };
        write!(f, "{}", name)
    }
}

/// One tool's expression of a shared concept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptBinding {
    /// Tool slug
    pub tool: String,
    /// Option name within that tool's profile
    pub option: String,
}

impl ConceptBinding {
    pub fn new(tool: impl Into<String>, option: impl Into<String>) -> Self {
        Self {
            tool: tool.into(),
            option: option.into(),
        }
    }
}

impl fmt::Display for ConceptBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.tool, self.option)
    }
}

/// A logical setting expressible by multiple tools.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedConcept {
    /// Concept id (e.g., "line_length")
    pub id: String,
    /// Merge strategy applied when tools diverge
    pub strategy: MergeStrategy,
    /// Participating (tool, option) pairs, in declaration order
    bindings: Vec<ConceptBinding>,
    /// Tool priority order used by MustMatch and PrecedenceList (first wins)
    precedence: Vec<String>,
}

impl SharedConcept {
    /// Create a concept with no bindings yet.
    pub fn new(id: impl Into<String>, strategy: MergeStrategy) -> Self {
        Self {
            id: id.into(),
            strategy,
            bindings: Vec::new(),
            precedence: Vec::new(),
        }
    }

    /// Bind one tool's option to this concept (builder pattern).
    pub fn with_binding(mut self, tool: impl Into<String>, option: impl Into<String>) -> Self {
        self.bindings.push(ConceptBinding::new(tool, option));
        self
    }

    /// Set the tool priority order (builder pattern). First entry wins.
    pub fn with_precedence<I, S>(mut self, tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.precedence = tools.into_iter().map(Into::into).collect();
        self
    }

    /// Participating bindings in declaration order.
    pub fn bindings(&self) -> &[ConceptBinding] {
        &self.bindings
    }

    /// Registered tool priority order.
    pub fn precedence(&self) -> &[String] {
        &self.precedence
    }

    /// The binding belonging to one tool, if it participates.
    pub fn binding_for(&self, tool: &str) -> Option<&ConceptBinding> {
        self.bindings.iter().find(|b| b.tool == tool)
    }

    /// Position of a tool in the precedence order, if listed.
    pub fn precedence_rank(&self, tool: &str) -> Option<usize> {
        self.precedence.iter().position(|t| t == tool)
    }
}
