//! The "AI工业营销Agent" product deck.
//!
//! [`build_deck`] assembles a cover and nine content slides from the brand
//! constants in [`Brand::default`] and the literal narrative in
//! [`content_slides`]. The styling helpers are public so other decks can be
//! built the same way.

pub mod brand;
pub mod builders;
pub mod bullets;
pub mod content;
pub mod helpers;
pub mod outline;

pub use brand::Brand;
pub use builders::{add_cover_slide, add_simple_slide};
pub use bullets::{BulletEntry, BulletItem};
pub use content::{OUTPUT_FILE_NAME, SlideContent, TOTAL_SLIDES, build_deck, content_slides};
pub use helpers::{
    TextStyle, add_bullets, add_bullets_in, add_logo, add_page_number, add_title, set_text_style,
};
pub use outline::DeckOutline;
