/// Presentation writer for PPTX.
use crate::common::unit::Emu;
use crate::ooxml::common::DocumentProperties;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::pptx::package::Package;
use std::fmt::Write as FmtWrite;
use std::io::Write;
use std::path::Path;

use super::slide::{Slide, SlideLayout};

/// ID of the first slide in `<p:sldIdLst>`.
pub const FIRST_SLIDE_ID: u32 = 256;

/// A mutable PowerPoint presentation for writing.
///
/// Provides methods to add slides, set dimensions and document properties,
/// and to serialize the whole deck into a `.pptx` package.
#[derive(Debug)]
pub struct Presentation {
    /// Slides in the presentation
    slides: Vec<Slide>,
    /// Slide width in EMUs (English Metric Units, 914400 EMU = 1 inch)
    slide_width: Emu,
    /// Slide height in EMUs
    slide_height: Emu,
    /// Core properties written to `docProps/core.xml`
    properties: DocumentProperties,
}

impl Presentation {
    /// Create a new empty presentation with default dimensions.
    ///
    /// Default size is 10" x 7.5" (standard 4:3 aspect ratio).
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_width: 9144000,  // 10 inches
            slide_height: 6858000, // 7.5 inches
            properties: DocumentProperties::default(),
        }
    }

    /// Append a new slide on `layout` and return it.
    pub fn add_slide(&mut self, layout: SlideLayout) -> &mut Slide {
        let index = self.slides.len();
        let slide_id = FIRST_SLIDE_ID + index as u32;
        self.slides.push(Slide::new(slide_id, layout));
        &mut self.slides[index]
    }

    /// Get the number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Get a slide by index (0-based).
    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Get the slide width in EMUs.
    pub fn slide_width(&self) -> Emu {
        self.slide_width
    }

    /// Get the slide height in EMUs.
    pub fn slide_height(&self) -> Emu {
        self.slide_height
    }

    pub fn properties(&self) -> &DocumentProperties {
        &self.properties
    }

    /// Replace the core document properties.
    pub fn set_properties(&mut self, properties: DocumentProperties) {
        self.properties = properties;
    }

    /// Generate presentation.xml content with actual relationship IDs.
    ///
    /// # Arguments
    /// * `master_rel_id` - Relationship ID of the slide master
    /// * `slide_rel_ids` - Relationship IDs of the slides, in slide order
    pub(crate) fn generate_presentation_xml(
        &self,
        master_rel_id: &str,
        slide_rel_ids: &[String],
    ) -> Result<String> {
        if slide_rel_ids.len() != self.slides.len() {
            return Err(OoxmlError::Xml(format!(
                "expected {} slide relationship IDs, got {}",
                self.slides.len(),
                slide_rel_ids.len()
            )));
        }

        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" saveSubsetFonts="1">"#);

        // Write slide master ID list
        xml.push_str("<p:sldMasterIdLst>");
        write!(
            xml,
            r#"<p:sldMasterId id="2147483648" r:id="{}"/>"#,
            master_rel_id
        )?;
        xml.push_str("</p:sldMasterIdLst>");

        // Write slide ID list
        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (slide, rel_id) in self.slides.iter().zip(slide_rel_ids) {
                write!(
                    xml,
                    r#"<p:sldId id="{}" r:id="{}"/>"#,
                    slide.slide_id(),
                    rel_id
                )?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        // Write slide size
        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}" type="screen4x3"/>"#,
            self.slide_width, self.slide_height
        )?;

        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
        xml.push_str("</p:presentation>");

        Ok(xml)
    }

    /// Serialize the presentation into `.pptx` bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Package::from_presentation(self)?.to_bytes()
    }

    /// Write the presentation to a stream.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        Package::from_presentation(self)?.write_to(writer)
    }

    /// Save the presentation to `path`, replacing any existing file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        Package::from_presentation(self)?.save(path)
    }
}

impl Default for Presentation {
    fn default() -> Self {
        Self::new()
    }
}
