//! Cover and content slide builders.

use crate::ooxml::pptx::{AutoShapeType, Geometry, Presentation, SlideLayout};

use super::brand::Brand;
use super::bullets::BulletItem;
use super::helpers::{
    METADATA_GRAY, TextStyle, add_bullets, add_logo, add_page_number, add_title, set_text_style,
};

pub const ACCENT_BAR_SHAPE: &str = "Accent Bar";
pub const METADATA_SHAPE: &str = "Deck Metadata";

/// Append the cover: accent bar, title block, metadata line, logo and `1/total`.
///
/// The title and subtitle go into the title placeholder, moved to the
/// cover's title block position.
pub fn add_cover_slide(pres: &mut Presentation, total: usize, brand: &Brand) {
    let slide = pres.add_slide(SlideLayout::TitleOnly);

    slide
        .add_auto_shape(
            AutoShapeType::Rectangle,
            Geometry::from_inches(0.0, 6.5, 10.0, 0.4),
        )
        .set_name(ACCENT_BAR_SHAPE)
        .set_fill(brand.accent)
        .set_line_visible(false);

    if let Some(frame) = slide
        .title_placeholder_mut()
        .map(|shape| shape.set_geometry(Geometry::from_inches(0.8, 1.2, 8.8, 1.2)))
        .and_then(|shape| shape.text_frame_mut())
    {
        let run = frame
            .clear()
            .first_paragraph_mut()
            .add_run_with_text(&brand.title);
        set_text_style(
            run,
            &TextStyle::body(brand)
                .bold(true)
                .size(36.0)
                .color(brand.primary),
        );

        let run = frame.add_paragraph().add_run_with_text(&brand.subtitle);
        set_text_style(run, &TextStyle::body(brand));
    }

    let metadata = slide
        .add_text_box(Geometry::from_inches(0.8, 2.4, 6.5, 1.0))
        .set_name(METADATA_SHAPE);
    if let Some(frame) = metadata.text_frame_mut() {
        let run = frame
            .clear()
            .first_paragraph_mut()
            .add_run_with_text(&brand.metadata_line());
        set_text_style(run, &TextStyle::body(brand).size(14.0).color(METADATA_GRAY));
    }

    add_logo(slide, brand);
    add_page_number(slide, 1, total, brand);
}

/// Append a content slide: title, bullets, logo and `idx/total`.
pub fn add_simple_slide(
    pres: &mut Presentation,
    idx: usize,
    total: usize,
    title: &str,
    bullets: &[BulletItem],
    brand: &Brand,
) {
    let slide = pres.add_slide(SlideLayout::TitleOnly);
    add_title(slide, title, brand);
    add_bullets(slide, bullets, brand);
    add_logo(slide, brand);
    add_page_number(slide, idx, total, brand);
    tracing::trace!(idx, title, bullets = bullets.len(), "content slide built");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::helpers::{BULLETS_SHAPE, PAGE_NUMBER_SHAPE};
    use crate::ooxml::pptx::ShapeKind;
    use std::path::PathBuf;

    fn brand_without_logo() -> Brand {
        Brand {
            logo_path: PathBuf::from("/nonexistent/logo.png"),
            ..Brand::default()
        }
    }

    #[test]
    fn test_cover_slide() {
        let brand = brand_without_logo();
        let mut pres = Presentation::new();
        add_cover_slide(&mut pres, 10, &brand);

        let slide = pres.slide(0).unwrap();
        assert_eq!(slide.title(), Some(brand.title.clone()));

        let title = slide.title_placeholder().unwrap();
        assert_eq!(title.geometry(), Some(Geometry::from_inches(0.8, 1.2, 8.8, 1.2)));
        let paragraphs = title.text_frame().unwrap().paragraphs();
        assert_eq!(paragraphs.len(), 2);
        assert_eq!(paragraphs[0].runs()[0].format().size, Some(36.0));
        assert_eq!(paragraphs[1].runs()[0].format().size, Some(20.0));
        assert_eq!(paragraphs[1].runs()[0].format().bold, Some(false));

        let bar = slide.shape_named(ACCENT_BAR_SHAPE).unwrap();
        match bar.kind() {
            ShapeKind::AutoShape {
                fill, line_visible, ..
            } => {
                assert_eq!(*fill, Some(brand.accent));
                assert!(!line_visible);
            },
            other => panic!("unexpected accent bar kind {other:?}"),
        }

        let metadata = slide.shape_named(METADATA_SHAPE).unwrap();
        assert_eq!(metadata.text_frame().unwrap().text(), brand.metadata_line());

        let page = slide.shape_named(PAGE_NUMBER_SHAPE).unwrap();
        assert_eq!(page.text_frame().unwrap().text(), "1/10");
        assert_eq!(slide.picture_count(), 0);
    }

    #[test]
    fn test_simple_slide() {
        let brand = brand_without_logo();
        let mut pres = Presentation::new();
        let bullets = vec![BulletItem::from("a"), BulletItem::from(("b", 1))];
        add_simple_slide(&mut pres, 4, 10, "目标用户与应用场景", &bullets, &brand);

        let slide = pres.slide(0).unwrap();
        assert_eq!(slide.title().as_deref(), Some("目标用户与应用场景"));
        let list = slide.shape_named(BULLETS_SHAPE).unwrap();
        assert_eq!(list.text_frame().unwrap().paragraphs().len(), 3);
        assert_eq!(
            slide
                .shape_named(PAGE_NUMBER_SHAPE)
                .unwrap()
                .text_frame()
                .unwrap()
                .text(),
            "4/10"
        );
    }
}
