/// Text frames, paragraphs and runs for PPTX shapes.
use crate::common::unit::pt_to_centipoints;
use crate::common::xml::escape_xml;
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

use super::super::format::TextFormat;

/// Deepest outline level a DrawingML paragraph may carry.
pub const MAX_LEVEL: u8 = 8;

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    /// Value of the `algn` attribute.
    pub fn as_ooxml(&self) -> &'static str {
        match self {
            Self::Left => "l",
            Self::Center => "ctr",
            Self::Right => "r",
            Self::Justify => "just",
        }
    }

    /// Parse an `algn` attribute value.
    pub fn from_ooxml(value: &str) -> Option<Self> {
        match value {
            "l" => Some(Self::Left),
            "ctr" => Some(Self::Center),
            "r" => Some(Self::Right),
            "just" => Some(Self::Justify),
            _ => None,
        }
    }
}

/// A run of text sharing one character format.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Run {
    text: String,
    format: TextFormat,
}

impl Run {
    /// Create a run with inherited formatting.
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            format: TextFormat::default(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: &str) -> &mut Self {
        self.text = text.to_string();
        self
    }

    pub fn format(&self) -> &TextFormat {
        &self.format
    }

    /// Mutable access to the character format.
    pub fn format_mut(&mut self) -> &mut TextFormat {
        &mut self.format
    }

    /// Replace the character format.
    pub fn set_format(&mut self, format: TextFormat) -> &mut Self {
        self.format = format;
        self
    }

    fn to_xml(&self, xml: &mut String) -> Result<()> {
        let format = &self.format;
        xml.push_str("<a:r>");
        xml.push_str(r#"<a:rPr lang="zh-CN" altLang="en-US""#);

        if let Some(size) = format.size {
            write!(xml, r#" sz="{}""#, pt_to_centipoints(size))?;
        }
        if let Some(bold) = format.bold {
            write!(xml, r#" b="{}""#, u8::from(bold))?;
        }
        if let Some(italic) = format.italic {
            write!(xml, r#" i="{}""#, u8::from(italic))?;
        }
        if let Some(underline) = format.underline {
            xml.push_str(if underline { r#" u="sng""# } else { r#" u="none""# });
        }
        xml.push_str(r#" dirty="0">"#);

        // CT_TextCharacterProperties: fill before the typefaces
        if let Some(color) = format.color {
            write!(
                xml,
                r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                color.to_hex()
            )?;
        }
        if let Some(ref font) = format.font {
            let font = escape_xml(font);
            write!(
                xml,
                r#"<a:latin typeface="{font}"/><a:ea typeface="{font}"/>"#
            )?;
        }

        xml.push_str("</a:rPr>");
        write!(xml, "<a:t>{}</a:t>", escape_xml(&self.text))?;
        xml.push_str("</a:r>");
        Ok(())
    }
}

/// A paragraph: an outline level, an optional alignment and its runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    level: u8,
    alignment: Option<Alignment>,
    runs: Vec<Run>,
}

impl Paragraph {
    /// Create an empty paragraph at level 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a run holding `text` and return it.
    pub fn add_run_with_text(&mut self, text: &str) -> &mut Run {
        let index = self.runs.len();
        self.runs.push(Run::new(text));
        &mut self.runs[index]
    }

    /// Replace all runs with a single run holding `text`.
    pub fn set_text(&mut self, text: &str) -> &mut Run {
        self.runs.clear();
        self.add_run_with_text(text)
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(Run::text).collect()
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    /// Set the outline level, clamped to `0..=8`.
    pub fn set_level(&mut self, level: u8) -> &mut Self {
        self.level = level.min(MAX_LEVEL);
        self
    }

    pub fn alignment(&self) -> Option<Alignment> {
        self.alignment
    }

    pub fn set_alignment(&mut self, alignment: Alignment) -> &mut Self {
        self.alignment = Some(alignment);
        self
    }

    fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<a:p>");

        if self.level > 0 || self.alignment.is_some() {
            xml.push_str("<a:pPr");
            if self.level > 0 {
                write!(xml, r#" lvl="{}""#, self.level)?;
            }
            if let Some(alignment) = self.alignment {
                write!(xml, r#" algn="{}""#, alignment.as_ooxml())?;
            }
            xml.push_str("/>");
        }

        for run in &self.runs {
            run.to_xml(xml)?;
        }

        if self.runs.is_empty() {
            xml.push_str(r#"<a:endParaRPr lang="zh-CN" altLang="en-US" dirty="0"/>"#);
        }

        xml.push_str("</a:p>");
        Ok(())
    }
}

/// The text body of a shape.
///
/// A text frame always holds at least one paragraph.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFrame {
    paragraphs: Vec<Paragraph>,
}

impl Default for TextFrame {
    fn default() -> Self {
        Self {
            paragraphs: vec![Paragraph::new()],
        }
    }
}

impl TextFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove all text, leaving a single empty paragraph.
    pub fn clear(&mut self) -> &mut Self {
        self.paragraphs.clear();
        self.paragraphs.push(Paragraph::new());
        self
    }

    /// The first paragraph, which always exists.
    pub fn first_paragraph_mut(&mut self) -> &mut Paragraph {
        if self.paragraphs.is_empty() {
            self.paragraphs.push(Paragraph::new());
        }
        &mut self.paragraphs[0]
    }

    /// Append an empty paragraph and return it.
    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        let index = self.paragraphs.len();
        self.paragraphs.push(Paragraph::new());
        &mut self.paragraphs[index]
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Paragraph texts joined with newlines.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Write `<p:txBody>` with the given `<a:bodyPr>` element.
    pub(crate) fn to_xml(&self, xml: &mut String, body_pr: &str) -> Result<()> {
        xml.push_str("<p:txBody>");
        xml.push_str(body_pr);
        xml.push_str("<a:lstStyle/>");
        for paragraph in &self.paragraphs {
            paragraph.to_xml(xml)?;
        }
        xml.push_str("</p:txBody>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RGBColor;

    #[test]
    fn test_clear_leaves_one_empty_paragraph() {
        let mut frame = TextFrame::new();
        frame.first_paragraph_mut().add_run_with_text("a");
        frame.add_paragraph().add_run_with_text("b");
        assert_eq!(frame.paragraphs().len(), 2);

        frame.clear();
        assert_eq!(frame.paragraphs().len(), 1);
        assert!(frame.paragraphs()[0].runs().is_empty());
        assert_eq!(frame.text(), "");
    }

    #[test]
    fn test_level_is_clamped() {
        let mut paragraph = Paragraph::new();
        paragraph.set_level(3);
        assert_eq!(paragraph.level(), 3);
        paragraph.set_level(42);
        assert_eq!(paragraph.level(), MAX_LEVEL);
    }

    #[test]
    fn test_set_text_replaces_runs() {
        let mut paragraph = Paragraph::new();
        paragraph.add_run_with_text("one");
        paragraph.add_run_with_text("two");
        assert_eq!(paragraph.text(), "onetwo");

        paragraph.set_text("three");
        assert_eq!(paragraph.runs().len(), 1);
        assert_eq!(paragraph.text(), "three");
    }

    #[test]
    fn test_run_xml() {
        let mut frame = TextFrame::new();
        let paragraph = frame.first_paragraph_mut();
        paragraph.set_level(1).set_alignment(Alignment::Right);
        paragraph
            .add_run_with_text("A & B")
            .format_mut()
            .clone_from(&TextFormat {
                font: Some("Microsoft YaHei".to_string()),
                size: Some(16.0),
                bold: Some(true),
                color: Some(RGBColor::new(30, 30, 30)),
                ..Default::default()
            });

        let mut xml = String::new();
        frame.to_xml(&mut xml, "<a:bodyPr/>").unwrap();

        assert!(xml.starts_with("<p:txBody><a:bodyPr/><a:lstStyle/>"));
        assert!(xml.contains(r#"<a:pPr lvl="1" algn="r"/>"#));
        assert!(xml.contains(r#"sz="1600" b="1""#));
        assert!(xml.contains(
            r#"<a:solidFill><a:srgbClr val="1E1E1E"/></a:solidFill><a:latin typeface="Microsoft YaHei"/>"#
        ));
        assert!(xml.contains("<a:t>A &amp; B</a:t>"));
    }

    #[test]
    fn test_empty_paragraph_xml() {
        let mut xml = String::new();
        TextFrame::new().to_xml(&mut xml, "<a:bodyPr/>").unwrap();
        assert!(xml.contains("<a:p><a:endParaRPr"));
        assert!(!xml.contains("<a:pPr"));
    }
}
