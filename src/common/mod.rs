//! Common types, traits, and utilities shared across the crate.
//!
//! This module provides the unit conversions, colors and XML helpers used by
//! both the document layer and the deck layer, plus the crate-wide error.

// Submodule declarations
pub mod error;
pub mod style;
pub mod unit;
pub mod xml;

// Re-exports for convenience
pub use error::{Error, Result};
pub use style::RGBColor;
pub use unit::{Emu, inches};
