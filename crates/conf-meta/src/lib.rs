//! Tool profiles, shared concepts, and the profile registry for Conf
//!
//! This crate is the static knowledge layer of the configuration engine:
//! which tools exist, which options each recognizes (with semantic types and
//! defaults), and which options across tools express the same logical
//! setting. Everything here is immutable data assembled at process start;
//! the pipeline in `conf-core` consumes it read-only.

pub mod builtins;
pub mod error;
pub mod registry;
pub mod schema;
pub mod value;

pub use builtins::{BUILTIN_CONCEPT_COUNT, BUILTIN_COUNT, builtin_concepts, builtin_profiles};
pub use error::{Error, Result};
pub use registry::ProfileRegistry;
pub use schema::{ConceptBinding, MergeStrategy, OptionSpec, SharedConcept, ToolKind, ToolProfile};
pub use value::{CanonicalValue, OptionType};
