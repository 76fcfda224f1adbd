//! Format-preserving configuration document parsing for Conf
//!
//! Thin wrapper around the external TOML parser: turns a settings document
//! into ordered sections of untyped [`RawValue`]s, and writes resolved
//! values back without disturbing anything it did not touch.

pub mod document;
pub mod error;
pub mod value;

pub use document::{ConfigDocument, Section};
pub use error::{Error, Result};
pub use value::RawValue;
