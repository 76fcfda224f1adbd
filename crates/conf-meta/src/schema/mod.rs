//! Schema types for tool profiles and shared concepts

mod concept;
mod option;
mod profile;

pub use concept::{ConceptBinding, MergeStrategy, SharedConcept};
pub use option::OptionSpec;
pub use profile::{ToolKind, ToolProfile};
