//! # conf-core
//!
//! The consistency checking and resolution pipeline. A run takes one TOML
//! settings document and a tool registry through four stages:
//!
//! 1. **Load** ([`loader`]): parse the document into ordered raw sections.
//! 2. **Normalize** ([`normalize`]): coerce raw values against registered
//!    option types, substituting defaults on mismatch.
//! 3. **Resolve** ([`resolve`]): compare explicit values of every shared
//!    concept and compute one authoritative value per its merge strategy.
//! 4. **Assemble** ([`bundle`]): package the canonical config, resolutions,
//!    and conflict report into a [`ResolvedBundle`].
//!
//! [`Engine`] drives the whole pipeline; the stages are also usable on their
//! own. Runs are deterministic: the same document and registry always yield
//! the same bundle.

pub mod bundle;
pub mod config;
pub mod engine;
pub mod error;
pub mod finding;
pub mod loader;
pub mod normalize;
pub mod resolve;

pub use bundle::{ResolvedBundle, compute_digest};
pub use config::{
    CanonicalConfig, CanonicalSection, ConfigEntry, EntryValue, Origin, RawConfig, RawSection,
};
pub use engine::Engine;
pub use error::{Error, Result};
pub use finding::{ConflictReport, Finding, FindingKind, RunStatus, Severity, ToolValue};
pub use resolve::ConceptResolution;
