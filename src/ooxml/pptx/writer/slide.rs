/// Slide types and implementation for PPTX presentations.
use crate::ooxml::error::{OoxmlError, Result};

use super::super::format::ImageFormat;
use super::relmap::RelationshipMapper;
use super::shape::{AutoShapeType, Geometry, Shape};

/// Slide layouts provided by the default template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideLayout {
    /// A title placeholder and nothing else
    TitleOnly,
    /// No placeholders
    Blank,
}

impl SlideLayout {
    /// All layouts, in the order of their layout parts.
    pub const ALL: [SlideLayout; 2] = [SlideLayout::TitleOnly, SlideLayout::Blank];

    /// Display name, as stored in `<p:cSld name>`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::TitleOnly => "Title Only",
            Self::Blank => "Blank",
        }
    }

    /// 1-based number of the `slideLayoutN.xml` part.
    pub fn part_number(&self) -> usize {
        match self {
            Self::TitleOnly => 1,
            Self::Blank => 2,
        }
    }

    /// Whether slides on this layout get a title placeholder.
    pub fn has_title(&self) -> bool {
        matches!(self, Self::TitleOnly)
    }
}

/// A slide in a presentation.
#[derive(Debug, Clone)]
pub struct Slide {
    /// Slide ID (unique identifier, 256 and up)
    slide_id: u32,
    layout: SlideLayout,
    /// Shapes on the slide, in z-order
    shapes: Vec<Shape>,
    next_shape_id: u32,
}

impl Slide {
    /// Create a slide on `layout`, with the layout's placeholders.
    pub(crate) fn new(slide_id: u32, layout: SlideLayout) -> Self {
        // id 1 belongs to the shape tree itself
        let mut slide = Self {
            slide_id,
            layout,
            shapes: Vec::new(),
            next_shape_id: 2,
        };
        if layout.has_title() {
            let id = slide.allocate_shape_id();
            slide.shapes.push(Shape::new_title_placeholder(id));
        }
        slide
    }

    fn allocate_shape_id(&mut self) -> u32 {
        let id = self.next_shape_id;
        self.next_shape_id += 1;
        id
    }

    fn push_shape(&mut self, shape: Shape) -> &mut Shape {
        let index = self.shapes.len();
        self.shapes.push(shape);
        &mut self.shapes[index]
    }

    /// Get the slide ID.
    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    pub fn layout(&self) -> SlideLayout {
        self.layout
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Find the first shape with the given name.
    pub fn shape_named(&self, name: &str) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.name() == name)
    }

    pub fn title_placeholder(&self) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.is_title_placeholder())
    }

    /// The title placeholder, if the layout provides one.
    pub fn title_placeholder_mut(&mut self) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.is_title_placeholder())
    }

    /// First non-empty paragraph of the title placeholder.
    pub fn title(&self) -> Option<String> {
        self.title_placeholder()?
            .text_frame()?
            .paragraphs()
            .iter()
            .map(|p| p.text())
            .find(|text| !text.is_empty())
    }

    /// Add a text box and return it.
    pub fn add_text_box(&mut self, geometry: Geometry) -> &mut Shape {
        let id = self.allocate_shape_id();
        self.push_shape(Shape::new_text_box(id, geometry))
    }

    /// Add an auto shape (filled, outlined preset geometry) and return it.
    pub fn add_auto_shape(&mut self, shape_type: AutoShapeType, geometry: Geometry) -> &mut Shape {
        let id = self.allocate_shape_id();
        self.push_shape(Shape::new_auto_shape(id, shape_type, geometry))
    }

    /// Add a picture from image bytes.
    ///
    /// Returns an error if the bytes are not a supported image format.
    pub fn add_picture(&mut self, data: Vec<u8>, geometry: Geometry) -> Result<&mut Shape> {
        let format = ImageFormat::detect_from_bytes(&data)
            .ok_or_else(|| OoxmlError::InvalidFormat("Unknown image format".to_string()))?;

        let id = self.allocate_shape_id();
        Ok(self.push_shape(Shape::new_picture(id, data, format, geometry)))
    }

    pub fn picture_count(&self) -> usize {
        self.shapes.iter().filter(|s| s.is_picture()).count()
    }

    /// Collect all images of the slide, in shape order.
    pub(crate) fn collect_images(&self) -> Vec<(&[u8], ImageFormat)> {
        self.shapes.iter().filter_map(Shape::image_data).collect()
    }

    /// Generate slide XML content with relationship IDs from the mapper.
    ///
    /// # Arguments
    /// * `slide_index` - The index of this slide (used to look up relationships)
    /// * `rel_mapper` - The relationship mapper containing actual relationship IDs
    pub(crate) fn to_xml(
        &self,
        slide_index: usize,
        rel_mapper: &RelationshipMapper,
    ) -> Result<String> {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<p:sld xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" "#,
        );
        xml.push_str(r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#);
        xml.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
        );

        xml.push_str("<p:cSld>");
        xml.push_str("<p:spTree>");

        // Write group shape properties (required)
        xml.push_str("<p:nvGrpSpPr>");
        xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
        xml.push_str("<p:cNvGrpSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGrpSpPr>");
        xml.push_str("<p:grpSpPr>");
        xml.push_str("<a:xfrm>");
        xml.push_str(r#"<a:off x="0" y="0"/>"#);
        xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
        xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
        xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
        xml.push_str("</a:xfrm>");
        xml.push_str("</p:grpSpPr>");

        let mut image_counter = 0;
        for shape in &self.shapes {
            let rel_id = if shape.is_picture() {
                let rid = rel_mapper.get_image_id(slide_index, image_counter);
                image_counter += 1;
                rid
            } else {
                None
            };

            shape.to_xml(&mut xml, rel_id)?;
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
        xml.push_str("</p:sld>");

        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_title_only_has_placeholder() {
        let slide = Slide::new(256, SlideLayout::TitleOnly);
        assert_eq!(slide.shape_count(), 1);
        let title = slide.title_placeholder().unwrap();
        assert_eq!(title.id(), 2);
        assert_eq!(slide.title(), None);
    }

    #[test]
    fn test_blank_has_no_placeholder() {
        let mut slide = Slide::new(256, SlideLayout::Blank);
        assert_eq!(slide.shape_count(), 0);
        assert!(slide.title_placeholder_mut().is_none());

        let shape = slide.add_text_box(Geometry::default());
        assert_eq!(shape.id(), 2);
    }

    #[test]
    fn test_shape_ids_are_unique() {
        let mut slide = Slide::new(256, SlideLayout::TitleOnly);
        slide.add_text_box(Geometry::default());
        slide.add_auto_shape(AutoShapeType::Rectangle, Geometry::default());
        slide
            .add_picture(PNG_MAGIC.to_vec(), Geometry::default())
            .unwrap();

        let ids: Vec<u32> = slide.shapes().iter().map(Shape::id).collect();
        assert_eq!(ids, vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_title_text() {
        let mut slide = Slide::new(256, SlideLayout::TitleOnly);
        slide
            .title_placeholder_mut()
            .and_then(Shape::text_frame_mut)
            .unwrap()
            .first_paragraph_mut()
            .add_run_with_text("产品愿景");
        assert_eq!(slide.title().as_deref(), Some("产品愿景"));
    }

    #[test]
    fn test_unknown_picture_format_is_rejected() {
        let mut slide = Slide::new(256, SlideLayout::Blank);
        let err = slide
            .add_picture(b"plain text".to_vec(), Geometry::default())
            .unwrap_err();
        assert!(matches!(err, OoxmlError::InvalidFormat(_)));
        assert_eq!(slide.shape_count(), 0);
    }

    #[test]
    fn test_xml_uses_mapped_image_ids() {
        let mut slide = Slide::new(256, SlideLayout::TitleOnly);
        slide
            .add_text_box(Geometry::default())
            .set_name("Bullets");
        slide
            .add_picture(PNG_MAGIC.to_vec(), Geometry::default())
            .unwrap();
        assert_eq!(slide.picture_count(), 1);
        assert_eq!(slide.collect_images().len(), 1);

        let mut mapper = RelationshipMapper::new();
        mapper.add_image(3, 0, "rId2".to_string());

        let xml = slide.to_xml(3, &mapper).unwrap();
        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains(r#"name="Bullets""#));
        assert!(xml.contains(r#"r:embed="rId2""#));
        assert!(xml.ends_with("</p:sld>"));

        assert!(slide.to_xml(0, &RelationshipMapper::new()).is_err());
    }
}
