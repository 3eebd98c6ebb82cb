//! Slide helpers: text styling, title, bullets, logo and page number.

use crate::common::{Error, RGBColor, Result, inches};
use crate::ooxml::pptx::{Alignment, Geometry, Run, Shape, Slide, TextFormat};
use std::io::Cursor;
use std::path::Path;

use super::brand::Brand;
use super::bullets::BulletItem;

/// Gray of the cover metadata line.
pub const METADATA_GRAY: RGBColor = RGBColor::new(90, 90, 90);
/// Gray of the page-number footer.
pub const PAGE_NUMBER_GRAY: RGBColor = RGBColor::new(120, 120, 120);

/// Shape names, so written decks can be inspected by name.
pub const BULLETS_SHAPE: &str = "Bullets";
pub const PAGE_NUMBER_SHAPE: &str = "Page Number";
pub const LOGO_SHAPE: &str = "Logo";
pub const TITLE_FALLBACK_SHAPE: &str = "Title";

/// Where bullets go unless the caller says otherwise.
pub fn default_bullet_region() -> Geometry {
    Geometry::from_inches(0.8, 1.8, 8.8, 4.8)
}

/// Run styling: font, size, weight and color.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font: String,
    /// Size in points
    pub size: f64,
    pub bold: bool,
    pub color: RGBColor,
}

impl TextStyle {
    /// 20pt regular text in the brand font and text color.
    pub fn body(brand: &Brand) -> Self {
        Self {
            font: brand.font.clone(),
            size: 20.0,
            bold: false,
            color: brand.text_color,
        }
    }

    pub fn size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn color(mut self, color: RGBColor) -> Self {
        self.color = color;
        self
    }
}

/// Apply `style` to a run, replacing its previous format.
pub fn set_text_style(run: &mut Run, style: &TextStyle) {
    run.set_format(
        TextFormat::new()
            .font(&style.font)
            .size(style.size)
            .bold(style.bold)
            .color(style.color),
    );
}

/// Font size for a bullet at `level`.
pub fn bullet_size(level: u8) -> f64 {
    if level == 0 { 18.0 } else { 16.0 }
}

/// Add a right-aligned `idx/total` footer.
pub fn add_page_number(slide: &mut Slide, idx: usize, total: usize, brand: &Brand) {
    let shape = slide.add_text_box(Geometry::from_inches(9.0, 6.9, 1.0, 0.3));
    shape.set_name(PAGE_NUMBER_SHAPE);
    if let Some(frame) = shape.text_frame_mut() {
        let paragraph = frame.clear().first_paragraph_mut();
        let run = paragraph.add_run_with_text(&format!("{idx}/{total}"));
        set_text_style(run, &TextStyle::body(brand).size(10.0).color(PAGE_NUMBER_GRAY));
        paragraph.set_alignment(Alignment::Right);
    }
}

/// Place the logo in the top-right corner, 0.5in high.
///
/// Returns whether a logo was added. Any failure to read or decode the file
/// leaves the slide untouched; the cause is only traced at debug level.
pub fn add_logo(slide: &mut Slide, brand: &Brand) -> bool {
    match try_add_logo(slide, &brand.logo_path) {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!(path = %brand.logo_path.display(), error = %e, "logo skipped");
            false
        },
    }
}

fn try_add_logo(slide: &mut Slide, path: &Path) -> Result<()> {
    let data = std::fs::read(path)?;
    let (width_px, height_px) = image::ImageReader::new(Cursor::new(&data))
        .with_guessed_format()?
        .into_dimensions()?;
    if width_px == 0 || height_px == 0 {
        return Err(Error::Image(format!("{width_px}x{height_px} image")));
    }

    let height = inches(0.5);
    let width = (height as f64 * width_px as f64 / height_px as f64).round() as i64;
    slide
        .add_picture(data, Geometry::new(inches(9.0), inches(0.2), width, height))?
        .set_name(LOGO_SHAPE)
        .set_description("logo");
    Ok(())
}

/// Write a bold 28pt heading into the title placeholder.
///
/// Slides without a title placeholder get a text box at the top instead.
pub fn add_title(slide: &mut Slide, title: &str, brand: &Brand) {
    let shape = if slide.title_placeholder().is_some() {
        slide.title_placeholder_mut()
    } else {
        Some(
            slide
                .add_text_box(Geometry::from_inches(0.6, 0.5, 8.0, 1.0))
                .set_name(TITLE_FALLBACK_SHAPE),
        )
    };
    let Some(frame) = shape.and_then(Shape::text_frame_mut) else {
        return;
    };

    let run = frame.clear().first_paragraph_mut().add_run_with_text(title);
    set_text_style(
        run,
        &TextStyle::body(brand)
            .bold(true)
            .size(28.0)
            .color(brand.primary),
    );
}

/// Add a bullet list in the default region.
pub fn add_bullets(slide: &mut Slide, items: &[BulletItem], brand: &Brand) {
    add_bullets_in(slide, items, default_bullet_region(), brand);
}

/// Add a bullet list in `region`.
///
/// The text frame keeps its one empty, run-less paragraph; each item then
/// gets its own paragraph at the item's level.
pub fn add_bullets_in(slide: &mut Slide, items: &[BulletItem], region: Geometry, brand: &Brand) {
    let shape = slide.add_text_box(region);
    shape.set_name(BULLETS_SHAPE);
    let Some(frame) = shape.text_frame_mut() else {
        return;
    };
    // the cleared first paragraph stays empty, with no run
    frame.clear();

    for item in items {
        let paragraph = frame.add_paragraph();
        paragraph.set_level(item.level);
        let run = paragraph.add_run_with_text(&item.text);
        set_text_style(run, &TextStyle::body(brand).size(bullet_size(item.level)));
    }
}
