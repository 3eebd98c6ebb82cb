//! Structural reader for written presentations.
//!
//! Reads a `.pptx` package back into a [`DeckSummary`]: the slides in
//! presentation order, their shapes, and the paragraphs and runs of every
//! text-bearing shape. Only what the writer produces is understood; group
//! shapes, tables and charts are reported as [`ShapeType::Other`].

use crate::common::unit::centipoints_to_pt;
use crate::common::xml::unescape_xml;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::relationship_type as rt;
use crate::ooxml::opc::PackageReader;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::path::Path;

use super::writer::Alignment;

/// Kind of a shape as found in slide XML.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeType {
    TitlePlaceholder,
    /// Any non-title placeholder
    Placeholder,
    TextBox,
    AutoShape,
    Picture,
    Other,
}

/// A run: its text and the formatting the reader understands.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RunSummary {
    pub text: String,
    /// Font size in points
    pub size: Option<f64>,
    pub bold: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParagraphSummary {
    pub level: u8,
    pub alignment: Option<Alignment>,
    pub runs: Vec<RunSummary>,
}

impl ParagraphSummary {
    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShapeSummary {
    pub name: String,
    pub shape_type: ShapeType,
    pub paragraphs: Vec<ParagraphSummary>,
}

impl ShapeSummary {
    fn new(shape_type: ShapeType) -> Self {
        Self {
            name: String::new(),
            shape_type,
            paragraphs: Vec::new(),
        }
    }

    /// Paragraph texts joined with newlines.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(ParagraphSummary::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// The shapes of one slide, in z-order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SlideSummary {
    pub shapes: Vec<ShapeSummary>,
}

impl SlideSummary {
    /// First non-empty paragraph of the title placeholder.
    pub fn title(&self) -> Option<String> {
        self.shapes
            .iter()
            .find(|s| s.shape_type == ShapeType::TitlePlaceholder)?
            .paragraphs
            .iter()
            .map(ParagraphSummary::text)
            .find(|text| !text.is_empty())
    }

    pub fn picture_count(&self) -> usize {
        self.shapes
            .iter()
            .filter(|s| s.shape_type == ShapeType::Picture)
            .count()
    }

    /// Find the first shape with the given name.
    pub fn shape_named(&self, name: &str) -> Option<&ShapeSummary> {
        self.shapes.iter().find(|s| s.name == name)
    }

    /// Text of every shape, one shape per line group.
    pub fn text(&self) -> String {
        self.shapes
            .iter()
            .map(ShapeSummary::text)
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Parse slide XML.
    pub fn from_xml(xml: &[u8]) -> Result<Self> {
        let mut reader = Reader::from_reader(xml);
        let mut buf = Vec::new();

        let mut shapes = Vec::new();
        let mut shape: Option<ShapeSummary> = None;
        let mut paragraph: Option<ParagraphSummary> = None;
        let mut run: Option<RunSummary> = None;
        let mut in_text = false;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                    b"sp" => shape = Some(ShapeSummary::new(ShapeType::AutoShape)),
                    b"pic" => shape = Some(ShapeSummary::new(ShapeType::Picture)),
                    b"graphicFrame" | b"grpSp" => shape = Some(ShapeSummary::new(ShapeType::Other)),
                    b"p" if shape.is_some() => paragraph = Some(ParagraphSummary::default()),
                    b"r" if paragraph.is_some() => run = Some(RunSummary::default()),
                    b"t" if run.is_some() => in_text = true,
                    _ => Self::apply_properties(e, shape.as_mut(), paragraph.as_mut(), run.as_mut())?,
                },
                Ok(Event::Empty(ref e)) => match e.local_name().as_ref() {
                    // <a:p/> is a paragraph with no runs
                    b"p" => {
                        if let Some(shape) = shape.as_mut() {
                            shape.paragraphs.push(ParagraphSummary::default());
                        }
                    },
                    _ => Self::apply_properties(e, shape.as_mut(), paragraph.as_mut(), run.as_mut())?,
                },
                Ok(Event::Text(ref e)) if in_text => {
                    if let Some(run) = run.as_mut() {
                        run.text.push_str(&unescape_xml(&String::from_utf8_lossy(e)));
                    }
                },
                Ok(Event::GeneralRef(ref e)) if in_text => {
                    if let Some(run) = run.as_mut() {
                        match e.resolve_char_ref()? {
                            Some(ch) => run.text.push(ch),
                            None => {
                                let entity = format!("&{};", String::from_utf8_lossy(e));
                                run.text.push_str(&unescape_xml(&entity));
                            },
                        }
                    }
                },
                Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                    b"t" => in_text = false,
                    b"r" => {
                        if let (Some(finished), Some(paragraph)) = (run.take(), paragraph.as_mut()) {
                            paragraph.runs.push(finished);
                        }
                    },
                    b"p" => {
                        if let (Some(finished), Some(shape)) = (paragraph.take(), shape.as_mut()) {
                            shape.paragraphs.push(finished);
                        }
                    },
                    b"sp" | b"pic" | b"graphicFrame" | b"grpSp" => {
                        if let Some(finished) = shape.take() {
                            shapes.push(finished);
                        }
                    },
                    _ => {},
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(OoxmlError::Xml(format!("Slide parse error: {}", e))),
                _ => {},
            }
            buf.clear();
        }

        Ok(Self { shapes })
    }

    /// Apply the attributes of a property element to whatever is open.
    fn apply_properties(
        e: &BytesStart,
        shape: Option<&mut ShapeSummary>,
        paragraph: Option<&mut ParagraphSummary>,
        run: Option<&mut RunSummary>,
    ) -> Result<()> {
        match e.local_name().as_ref() {
            b"cNvPr" => {
                if let Some(shape) = shape
                    && shape.name.is_empty()
                {
                    shape.name = attr_value(e, b"name")?.unwrap_or_default();
                }
            },
            b"cNvSpPr" => {
                if let Some(shape) = shape
                    && attr_value(e, b"txBox")?.as_deref() == Some("1")
                {
                    shape.shape_type = ShapeType::TextBox;
                }
            },
            b"ph" => {
                if let Some(shape) = shape {
                    shape.shape_type = match attr_value(e, b"type")?.as_deref() {
                        Some("title" | "ctrTitle") => ShapeType::TitlePlaceholder,
                        _ => ShapeType::Placeholder,
                    };
                }
            },
            b"pPr" => {
                if let Some(paragraph) = paragraph {
                    if let Some(level) = attr_value(e, b"lvl")? {
                        paragraph.level = level.parse().unwrap_or(0);
                    }
                    paragraph.alignment = attr_value(e, b"algn")?
                        .as_deref()
                        .and_then(Alignment::from_ooxml);
                }
            },
            b"rPr" => {
                if let Some(run) = run {
                    run.size = attr_value(e, b"sz")?
                        .and_then(|sz| sz.parse::<u32>().ok())
                        .map(centipoints_to_pt);
                    run.bold = attr_value(e, b"b")?.map(|b| b == "1" || b == "true");
                }
            },
            _ => {},
        }
        Ok(())
    }
}

fn attr_value(e: &BytesStart, key: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        if attr.key.local_name().as_ref() == key {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

/// Structural summary of a whole presentation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeckSummary {
    slides: Vec<SlideSummary>,
}

impl DeckSummary {
    /// Read a `.pptx` file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_package(&PackageReader::open(path)?)
    }

    /// Read `.pptx` bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_package(&PackageReader::from_bytes(data)?)
    }

    fn from_package(package: &PackageReader) -> Result<Self> {
        let pres_uri = package
            .package_rels()?
            .part_with_reltype(rt::OFFICE_DOCUMENT)?
            .target_partname()?;
        let pres_rels = package.rels_for(&pres_uri)?;
        let pres_xml = package.blob_for(&pres_uri)?;

        let mut slides = Vec::new();
        for r_id in slide_rel_ids(pres_xml)? {
            let rel = pres_rels
                .get(&r_id)
                .ok_or_else(|| OoxmlError::PartNotFound(format!("slide relationship {r_id}")))?;
            let slide_uri = rel.target_partname()?;
            slides.push(SlideSummary::from_xml(package.blob_for(&slide_uri)?)?);
        }

        Ok(Self { slides })
    }

    pub fn slides(&self) -> &[SlideSummary] {
        &self.slides
    }

    pub fn slide(&self, index: usize) -> Option<&SlideSummary> {
        self.slides.get(index)
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }
}

/// Relationship IDs of `<p:sldId>` entries, in presentation order.
fn slide_rel_ids(pres_xml: &[u8]) -> Result<Vec<String>> {
    let mut reader = Reader::from_reader(pres_xml);
    let mut buf = Vec::new();
    let mut ids = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e))
                if e.local_name().as_ref() == b"sldId" =>
            {
                // r:id is the only "id" attribute with a prefix
                for attr in e.attributes() {
                    let attr = attr.map_err(quick_xml::Error::from)?;
                    if attr.key.as_ref() == b"r:id" {
                        ids.push(attr.unescape_value()?.into_owned());
                    }
                }
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(OoxmlError::Xml(format!("Presentation parse error: {}", e))),
            _ => {},
        }
        buf.clear();
    }

    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RGBColor;
    use crate::ooxml::pptx::format::TextFormat;
    use crate::ooxml::pptx::writer::{AutoShapeType, Geometry, Presentation, SlideLayout};

    fn sample_deck() -> Presentation {
        let mut pres = Presentation::new();

        let slide = pres.add_slide(SlideLayout::TitleOnly);
        slide
            .title_placeholder_mut()
            .and_then(|s| s.text_frame_mut())
            .unwrap()
            .first_paragraph_mut()
            .add_run_with_text("Q&A <总结>")
            .set_format(TextFormat::new().size(28.0).bold(true));
        slide
            .add_auto_shape(AutoShapeType::Rectangle, Geometry::default())
            .set_fill(RGBColor::new(0, 160, 233));

        let slide = pres.add_slide(SlideLayout::Blank);
        let frame = slide
            .add_text_box(Geometry::default())
            .set_name("Page Number")
            .text_frame_mut()
            .unwrap();
        let paragraph = frame.first_paragraph_mut();
        paragraph.set_alignment(Alignment::Right);
        paragraph
            .add_run_with_text("2/2")
            .set_format(TextFormat::new().size(10.0));
        frame.add_paragraph().set_level(2).add_run_with_text("deep");

        pres
    }

    #[test]
    fn test_read_back() {
        let bytes = sample_deck().to_bytes().unwrap();
        let summary = DeckSummary::from_bytes(&bytes).unwrap();
        assert_eq!(summary.slide_count(), 2);

        let first = summary.slide(0).unwrap();
        assert_eq!(first.title().as_deref(), Some("Q&A <总结>"));
        assert_eq!(first.shapes[1].shape_type, ShapeType::AutoShape);
        let title_run = &first.shapes[0].paragraphs[0].runs[0];
        assert_eq!(title_run.size, Some(28.0));
        assert_eq!(title_run.bold, Some(true));

        let second = summary.slide(1).unwrap();
        assert_eq!(second.title(), None);
        let page = second.shape_named("Page Number").unwrap();
        assert_eq!(page.shape_type, ShapeType::TextBox);
        assert_eq!(page.paragraphs[0].alignment, Some(Alignment::Right));
        assert_eq!(page.paragraphs[0].text(), "2/2");
        assert_eq!(page.paragraphs[1].level, 2);
        assert_eq!(second.text(), "2/2\ndeep");
    }

    #[test]
    fn test_empty_paragraph_is_kept() {
        let xml = br#"<p:sld xmlns:p="p" xmlns:a="a"><p:cSld><p:spTree>
            <p:sp><p:nvSpPr><p:cNvPr id="2" name="Box"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr>
            <p:txBody><a:bodyPr/><a:p/><a:p><a:r><a:rPr sz="1800"/><a:t>x &amp; y</a:t></a:r></a:p></p:txBody></p:sp>
            </p:spTree></p:cSld></p:sld>"#;
        let slide = SlideSummary::from_xml(xml).unwrap();
        let shape = &slide.shapes[0];
        assert_eq!(shape.name, "Box");
        assert_eq!(shape.paragraphs.len(), 2);
        assert_eq!(shape.paragraphs[1].text(), "x & y");
        assert_eq!(shape.paragraphs[1].runs[0].size, Some(18.0));
    }

    #[test]
    fn test_not_a_presentation() {
        assert!(DeckSummary::from_bytes(b"PK but not really").is_err());
    }
}
