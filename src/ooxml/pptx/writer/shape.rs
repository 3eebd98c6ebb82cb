/// Shape types and implementation for PPTX presentations.
use crate::common::RGBColor;
use crate::common::unit::{Emu, inches};
use crate::common::xml::escape_xml;
use crate::ooxml::error::{OoxmlError, Result};
use std::fmt::Write as FmtWrite;

use super::super::format::ImageFormat;
use super::text::TextFrame;

/// Position and size of a shape, in EMU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Geometry {
    pub left: Emu,
    pub top: Emu,
    pub width: Emu,
    pub height: Emu,
}

impl Geometry {
    pub const fn new(left: Emu, top: Emu, width: Emu, height: Emu) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Geometry from inch values.
    pub fn from_inches(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self::new(inches(left), inches(top), inches(width), inches(height))
    }

    fn to_xfrm(self, xml: &mut String) -> Result<()> {
        write!(
            xml,
            r#"<a:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></a:xfrm>"#,
            self.left, self.top, self.width, self.height
        )?;
        Ok(())
    }
}

/// Preset geometries available for auto shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoShapeType {
    Rectangle,
}

impl AutoShapeType {
    /// Value of the `prst` attribute.
    pub fn preset(&self) -> &'static str {
        match self {
            Self::Rectangle => "rect",
        }
    }

    fn base_name(&self) -> &'static str {
        match self {
            Self::Rectangle => "Rectangle",
        }
    }
}

/// What a shape is, with the data specific to its kind.
#[derive(Debug, Clone)]
pub enum ShapeKind {
    /// The layout's title placeholder. Without a geometry it inherits the
    /// position from the layout.
    TitlePlaceholder {
        geometry: Option<Geometry>,
        text_frame: TextFrame,
    },
    TextBox {
        geometry: Geometry,
        text_frame: TextFrame,
    },
    AutoShape {
        shape_type: AutoShapeType,
        geometry: Geometry,
        fill: Option<RGBColor>,
        line_visible: bool,
    },
    Picture {
        data: Vec<u8>,
        format: ImageFormat,
        geometry: Geometry,
        description: String,
    },
}

/// A shape on a slide (placeholder, text box, auto shape or picture).
#[derive(Debug, Clone)]
pub struct Shape {
    /// Shape ID, unique within the slide
    id: u32,
    name: String,
    kind: ShapeKind,
}

impl Shape {
    pub(crate) fn new_title_placeholder(id: u32) -> Self {
        Self {
            id,
            name: format!("Title {}", id - 1),
            kind: ShapeKind::TitlePlaceholder {
                geometry: None,
                text_frame: TextFrame::new(),
            },
        }
    }

    pub(crate) fn new_text_box(id: u32, geometry: Geometry) -> Self {
        Self {
            id,
            name: format!("TextBox {}", id - 1),
            kind: ShapeKind::TextBox {
                geometry,
                text_frame: TextFrame::new(),
            },
        }
    }

    pub(crate) fn new_auto_shape(id: u32, shape_type: AutoShapeType, geometry: Geometry) -> Self {
        Self {
            id,
            name: format!("{} {}", shape_type.base_name(), id - 1),
            kind: ShapeKind::AutoShape {
                shape_type,
                geometry,
                fill: None,
                line_visible: true,
            },
        }
    }

    pub(crate) fn new_picture(
        id: u32,
        data: Vec<u8>,
        format: ImageFormat,
        geometry: Geometry,
    ) -> Self {
        Self {
            id,
            name: format!("Picture {}", id - 1),
            kind: ShapeKind::Picture {
                data,
                format,
                geometry,
                description: String::new(),
            },
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the shape (the `name` attribute of `<p:cNvPr>`).
    pub fn set_name(&mut self, name: &str) -> &mut Self {
        self.name = name.to_string();
        self
    }

    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    pub fn is_title_placeholder(&self) -> bool {
        matches!(self.kind, ShapeKind::TitlePlaceholder { .. })
    }

    pub fn is_picture(&self) -> bool {
        matches!(self.kind, ShapeKind::Picture { .. })
    }

    /// Explicit geometry; `None` for a placeholder that inherits it.
    pub fn geometry(&self) -> Option<Geometry> {
        match &self.kind {
            ShapeKind::TitlePlaceholder { geometry, .. } => *geometry,
            ShapeKind::TextBox { geometry, .. }
            | ShapeKind::AutoShape { geometry, .. }
            | ShapeKind::Picture { geometry, .. } => Some(*geometry),
        }
    }

    /// Set an explicit geometry, overriding the layout for placeholders.
    pub fn set_geometry(&mut self, new_geometry: Geometry) -> &mut Self {
        match &mut self.kind {
            ShapeKind::TitlePlaceholder { geometry, .. } => *geometry = Some(new_geometry),
            ShapeKind::TextBox { geometry, .. }
            | ShapeKind::AutoShape { geometry, .. }
            | ShapeKind::Picture { geometry, .. } => *geometry = new_geometry,
        }
        self
    }

    /// The text frame, for shapes that carry text.
    pub fn text_frame(&self) -> Option<&TextFrame> {
        match &self.kind {
            ShapeKind::TitlePlaceholder { text_frame, .. }
            | ShapeKind::TextBox { text_frame, .. } => Some(text_frame),
            _ => None,
        }
    }

    pub fn text_frame_mut(&mut self) -> Option<&mut TextFrame> {
        match &mut self.kind {
            ShapeKind::TitlePlaceholder { text_frame, .. }
            | ShapeKind::TextBox { text_frame, .. } => Some(text_frame),
            _ => None,
        }
    }

    /// Set a solid fill (auto shapes only).
    pub fn set_fill(&mut self, color: RGBColor) -> &mut Self {
        if let ShapeKind::AutoShape { fill, .. } = &mut self.kind {
            *fill = Some(color);
        }
        self
    }

    /// Show or hide the outline (auto shapes only).
    pub fn set_line_visible(&mut self, visible: bool) -> &mut Self {
        if let ShapeKind::AutoShape { line_visible, .. } = &mut self.kind {
            *line_visible = visible;
        }
        self
    }

    /// Set the alternative text (pictures only).
    pub fn set_description(&mut self, text: &str) -> &mut Self {
        if let ShapeKind::Picture { description, .. } = &mut self.kind {
            *description = text.to_string();
        }
        self
    }

    /// Get image data if this shape is a picture.
    pub(crate) fn image_data(&self) -> Option<(&[u8], ImageFormat)> {
        match &self.kind {
            ShapeKind::Picture { data, format, .. } => Some((data.as_slice(), *format)),
            _ => None,
        }
    }

    /// Generate XML for this shape.
    ///
    /// Pictures require the relationship ID of their image part.
    pub(crate) fn to_xml(&self, xml: &mut String, image_rel_id: Option<&str>) -> Result<()> {
        let name = escape_xml(&self.name);

        match &self.kind {
            ShapeKind::TitlePlaceholder {
                geometry,
                text_frame,
            } => {
                xml.push_str("<p:sp><p:nvSpPr>");
                write!(xml, r#"<p:cNvPr id="{}" name="{}"/>"#, self.id, name)?;
                xml.push_str(r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>"#);
                xml.push_str(r#"<p:nvPr><p:ph type="title"/></p:nvPr>"#);
                xml.push_str("</p:nvSpPr>");

                match geometry {
                    Some(geometry) => {
                        xml.push_str("<p:spPr>");
                        geometry.to_xfrm(xml)?;
                        xml.push_str("</p:spPr>");
                    },
                    None => xml.push_str("<p:spPr/>"),
                }

                text_frame.to_xml(xml, "<a:bodyPr/>")?;
                xml.push_str("</p:sp>");
            },
            ShapeKind::TextBox {
                geometry,
                text_frame,
            } => {
                xml.push_str("<p:sp><p:nvSpPr>");
                write!(xml, r#"<p:cNvPr id="{}" name="{}"/>"#, self.id, name)?;
                xml.push_str(r#"<p:cNvSpPr txBox="1"/><p:nvPr/>"#);
                xml.push_str("</p:nvSpPr>");

                xml.push_str("<p:spPr>");
                geometry.to_xfrm(xml)?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                xml.push_str("<a:noFill/>");
                xml.push_str("</p:spPr>");

                text_frame.to_xml(xml, r#"<a:bodyPr wrap="square" rtlCol="0"><a:spAutoFit/></a:bodyPr>"#)?;
                xml.push_str("</p:sp>");
            },
            ShapeKind::AutoShape {
                shape_type,
                geometry,
                fill,
                line_visible,
            } => {
                xml.push_str("<p:sp><p:nvSpPr>");
                write!(xml, r#"<p:cNvPr id="{}" name="{}"/>"#, self.id, name)?;
                xml.push_str("<p:cNvSpPr/><p:nvPr/>");
                xml.push_str("</p:nvSpPr>");

                xml.push_str("<p:spPr>");
                geometry.to_xfrm(xml)?;
                write!(
                    xml,
                    r#"<a:prstGeom prst="{}"><a:avLst/></a:prstGeom>"#,
                    shape_type.preset()
                )?;
                if let Some(color) = fill {
                    write!(
                        xml,
                        r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                        color.to_hex()
                    )?;
                }
                if !line_visible {
                    xml.push_str("<a:ln><a:noFill/></a:ln>");
                }
                xml.push_str("</p:spPr>");

                // Theme-driven style so the shape renders like one drawn in PowerPoint
                xml.push_str(concat!(
                    "<p:style>",
                    r#"<a:lnRef idx="2"><a:schemeClr val="accent1"><a:shade val="50000"/></a:schemeClr></a:lnRef>"#,
                    r#"<a:fillRef idx="1"><a:schemeClr val="accent1"/></a:fillRef>"#,
                    r#"<a:effectRef idx="0"><a:schemeClr val="accent1"/></a:effectRef>"#,
                    r#"<a:fontRef idx="minor"><a:schemeClr val="lt1"/></a:fontRef>"#,
                    "</p:style>"
                ));
                xml.push_str("</p:sp>");
            },
            ShapeKind::Picture {
                geometry,
                description,
                ..
            } => {
                let rel_id = image_rel_id.ok_or_else(|| {
                    OoxmlError::Other(format!("picture '{}' has no image relationship", self.name))
                })?;

                xml.push_str("<p:pic><p:nvPicPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="{}" descr="{}"/>"#,
                    self.id,
                    name,
                    escape_xml(description)
                )?;
                xml.push_str(r#"<p:cNvPicPr><a:picLocks noChangeAspect="1"/></p:cNvPicPr>"#);
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvPicPr>");

                xml.push_str("<p:blipFill>");
                write!(xml, r#"<a:blip r:embed="{}"/>"#, rel_id)?;
                xml.push_str("<a:stretch><a:fillRect/></a:stretch>");
                xml.push_str("</p:blipFill>");

                xml.push_str("<p:spPr>");
                geometry.to_xfrm(xml)?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                xml.push_str("</p:spPr>");
                xml.push_str("</p:pic>");
            },
        }

        Ok(())
    }
}
