//! Error types for conf-meta

use crate::value::OptionType;

/// Result type for conf-meta operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in conf-meta operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Tool not found in the registry
    #[error("Tool not found: {slug}")]
    ToolNotFound { slug: String },

    /// Concept not found in the registry
    #[error("Concept not found: {id}")]
    ConceptNotFound { id: String },

    /// A concept whose strategy needs a precedence order has none registered.
    ///
    /// This is a registry defect, not a user-input problem.
    #[error("Concept '{concept}' requires a precedence order but none is registered")]
    MissingPrecedence { concept: String },

    /// A concept binding or precedence entry is inconsistent with the
    /// registered profiles
    #[error("Invalid binding for concept '{concept}': {message}")]
    InvalidBinding { concept: String, message: String },

    /// An option's default value does not match its declared type
    #[error("Default for {tool}.{option} is {actual}, expected {expected}")]
    DefaultTypeMismatch {
        tool: String,
        option: String,
        expected: OptionType,
        actual: OptionType,
    },
}

impl Error {
    pub fn invalid_binding(concept: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidBinding {
            concept: concept.into(),
            message: message.into(),
        }
    }
}
