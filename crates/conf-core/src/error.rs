//! Error types for conf-core
//!
//! Only two conditions abort a run: a document that cannot be parsed at all,
//! and a defective registry. Everything else the pipeline can observe is
//! recorded as a [`Finding`](crate::finding::Finding) and the run continues.

/// Result type for conf-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in conf-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input document could not be parsed at all. There is no partial
    /// document parse; this aborts the run before any tool is processed.
    #[error("Malformed document: {message}")]
    MalformedDocument { message: String },

    /// The registry itself is defective (e.g., a must-match concept with no
    /// precedence order). A defect in the catalog, not in user input.
    #[error("Registry misconfiguration: {0}")]
    Registry(#[from] conf_meta::Error),

    /// Content error from conf-content
    #[error(transparent)]
    Content(#[from] conf_content::Error),

    /// Bundle serialization error
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
