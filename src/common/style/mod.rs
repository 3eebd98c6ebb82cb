//! Style primitives shared by the document and deck layers.

pub mod color;

pub use color::RGBColor;
