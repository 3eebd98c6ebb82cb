//! Office Open XML (OOXML) presentation support.
//!
//! The implementation is based on the Open Packaging Conventions (OPC) and
//! covers the slice of PresentationML a generated deck needs: placeholders,
//! text boxes, rectangles and pictures.
//!
//! # Architecture
//!
//! 1. **OPC Layer** (`opc`): package parts, relationships, content types and
//!    the ZIP container
//! 2. **Shared Utilities** (`common`, `error`): document properties and errors
//! 3. **PresentationML** (`pptx`): the mutable presentation model, the default
//!    template parts and a structural reader
//!
//! # Example: Writing a Presentation
//!
//! ```rust,no_run
//! use pitchdeck::common::inches;
//! use pitchdeck::ooxml::pptx::{Geometry, Presentation, SlideLayout};
//!
//! let mut pres = Presentation::new();
//! let slide = pres.add_slide(SlideLayout::TitleOnly);
//! slide
//!     .add_text_box(Geometry::new(inches(1.0), inches(1.0), inches(4.0), inches(1.0)))
//!     .text_frame_mut()
//!     .expect("text box")
//!     .first_paragraph_mut()
//!     .add_run_with_text("Hello");
//! pres.save("hello.pptx")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
pub mod common;
pub mod error;
pub mod opc;
pub mod pptx;

// Re-export commonly used types from OPC layer
pub use opc::{OpcPackage, PackURI};

// Re-export common utilities
pub use common::DocumentProperties;

// Re-export error types
pub use error::{OoxmlError, Result};
