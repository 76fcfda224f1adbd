//! Command implementations for conf-cli

pub mod resolve;
pub mod validate;

pub use resolve::run_resolve;
pub use validate::run_validate;
