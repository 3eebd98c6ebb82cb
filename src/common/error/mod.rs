//! Unified error type for the crate.
//!
//! Document-layer errors ([`crate::ooxml::OoxmlError`]) and the errors of the
//! image and YAML crates are folded into one [`Error`] at the public surface.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
