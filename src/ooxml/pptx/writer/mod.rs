//! Mutable presentation writer components for PPTX.

pub mod pres;
pub(crate) mod relmap;
pub mod shape;
pub mod slide;
pub mod text;

// Re-export main types
pub use pres::Presentation;
pub use shape::{AutoShapeType, Geometry, Shape, ShapeKind};
pub use slide::{Slide, SlideLayout};
pub use text::{Alignment, Paragraph, Run, TextFrame};
