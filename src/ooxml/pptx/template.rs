//! Presentation template module.
//!
//! Provides the minimal set of template parts a new presentation needs: one
//! slide master, its layouts and a theme. The part contents live under
//! `resources/` and are embedded at compile time.
//!
//! The slide master refers to its layouts as `rId1`, `rId2`, ... in
//! [`SlideLayout::ALL`] order, followed by the theme; the package builder
//! relates the parts in exactly that order.

use super::writer::SlideLayout;

/// Slide master XML. Layout relationships are `rId1`..`rIdN`.
pub fn default_slide_master_xml() -> &'static str {
    include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/resources/slideMasters/slideMaster1.xml"
    ))
}

/// Slide layout XML for `layout`.
pub fn slide_layout_xml(layout: SlideLayout) -> &'static str {
    match layout {
        SlideLayout::TitleOnly => include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/resources/slideLayouts/slideLayout1.xml"
        )),
        SlideLayout::Blank => include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/resources/slideLayouts/slideLayout2.xml"
        )),
    }
}

/// Theme XML (Office color, font and format schemes).
pub fn default_theme_xml() -> &'static str {
    include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/resources/theme/theme1.xml"
    ))
}
