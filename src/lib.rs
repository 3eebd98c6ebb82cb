//! Pitchdeck - generates the "AI industrial marketing agent" product deck.
//!
//! The crate is split into two layers:
//!
//! - **Document layer** ([`ooxml`]): a small PresentationML object model
//!   (presentation, slides, shapes, text frames) and an Open Packaging
//!   Conventions writer that serializes it into a `.pptx` file. A reader
//!   turns a written package back into a structural [`DeckSummary`].
//! - **Deck layer** ([`deck`]): brand constants, the styling helpers
//!   (title, bullets, logo, page number), the cover and content slide
//!   builders, and the literal ten-slide narrative.
//!
//! # Example - Building the deck
//!
//! ```no_run
//! use pitchdeck::deck::{self, Brand};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let brand = Brand::default();
//! let pres = deck::build_deck(&brand);
//! pres.save(deck::OUTPUT_FILE_NAME)?;
//! println!("slides: {}", pres.slide_count());
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Inspecting a written deck
//!
//! ```no_run
//! use pitchdeck::DeckSummary;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let summary = DeckSummary::open("deck.pptx")?;
//! for slide in summary.slides() {
//!     println!("{:?}", slide.title());
//! }
//! # Ok(())
//! # }
//! ```

/// Shared types: units, colors, XML escaping and the crate-wide error.
pub mod common;

/// Deck content: brand constants, slide helpers, builders and the narrative.
pub mod deck;

/// OOXML (Office Open XML) presentation writer and reader.
pub mod ooxml;

pub use common::{Error, RGBColor, Result};
pub use ooxml::pptx::{DeckSummary, Presentation, Slide, SlideLayout};
