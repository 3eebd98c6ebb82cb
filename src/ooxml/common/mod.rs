//! Parts shared by every OOXML package kind.

pub mod properties;

pub use properties::{AppProperties, DocumentProperties};
