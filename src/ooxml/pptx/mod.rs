//! PowerPoint (.pptx) presentation support.
//!
//! This module provides a mutable PresentationML object model and the code
//! that turns it into an Office Open XML package:
//!
//! - [`Presentation`]: the deck, owning its [`Slide`]s
//! - [`Slide`]: an ordered list of [`Shape`]s on a [`SlideLayout`]
//! - [`TextFrame`], [`Paragraph`], [`Run`]: the text body of a shape
//! - [`Package`]: the assembled OPC package (template parts, media, properties)
//! - [`DeckSummary`]: a structural reader for verifying written decks
//!
//! # Example
//!
//! ```rust,no_run
//! use pitchdeck::ooxml::pptx::{Alignment, Geometry, Presentation, SlideLayout};
//!
//! let mut pres = Presentation::new();
//! let slide = pres.add_slide(SlideLayout::Blank);
//! if let Some(frame) = slide
//!     .add_text_box(Geometry::from_inches(9.0, 6.9, 1.0, 0.3))
//!     .text_frame_mut()
//! {
//!     let paragraph = frame.first_paragraph_mut();
//!     paragraph.set_alignment(Alignment::Right);
//!     paragraph.add_run_with_text("1/1");
//! }
//! pres.save("one.pptx")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod format;
pub mod package;
pub mod reader;
pub mod template;
pub mod writer;

pub use format::{ImageFormat, TextFormat};
pub use package::Package;
pub use reader::{DeckSummary, ParagraphSummary, RunSummary, ShapeSummary, ShapeType, SlideSummary};
pub use writer::{
    Alignment, AutoShapeType, Geometry, Paragraph, Presentation, Run, Shape, ShapeKind, Slide,
    SlideLayout, TextFrame,
};
