//! Document properties for OOXML packages.
//!
//! Core properties live in `docProps/core.xml`, extended (application)
//! properties in `docProps/app.xml`.

use crate::common::xml::escape_xml;
use chrono::{DateTime, SecondsFormat, Utc};

/// Document core properties (metadata).
///
/// These properties are stored in the `docProps/core.xml` file in the OPC package.
#[derive(Debug, Clone, Default)]
pub struct DocumentProperties {
    /// Document title
    pub title: Option<String>,
    /// Document subject
    pub subject: Option<String>,
    /// Document creator/author
    pub creator: Option<String>,
    /// Last modified by
    pub last_modified_by: Option<String>,
    /// Revision number
    pub revision: Option<u32>,
    /// Document language
    pub language: Option<String>,
    /// Creation date
    pub created: Option<DateTime<Utc>>,
    /// Last modification date
    pub modified: Option<DateTime<Utc>>,
}

impl DocumentProperties {
    /// Create a new empty document properties.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document title.
    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Set the document subject.
    pub fn subject(mut self, subject: &str) -> Self {
        self.subject = Some(subject.to_string());
        self
    }

    /// Set the document creator.
    pub fn creator(mut self, creator: &str) -> Self {
        self.creator = Some(creator.to_string());
        self
    }

    /// Set the last modified by.
    pub fn last_modified_by(mut self, name: &str) -> Self {
        self.last_modified_by = Some(name.to_string());
        self
    }

    /// Set the revision number.
    pub fn revision(mut self, revision: u32) -> Self {
        self.revision = Some(revision);
        self
    }

    /// Set the document language (e.g. "zh-CN").
    pub fn language(mut self, language: &str) -> Self {
        self.language = Some(language.to_string());
        self
    }

    /// Set both creation and modification date.
    pub fn dated(mut self, when: DateTime<Utc>) -> Self {
        self.created = Some(when);
        self.modified = Some(when);
        self
    }

    /// Generate `docProps/core.xml`.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(1024);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#);

        let mut element = |tag: &str, value: Option<&str>| {
            if let Some(value) = value {
                xml.push_str(&format!("<{tag}>{}</{tag}>", escape_xml(value)));
            }
        };
        element("dc:title", self.title.as_deref());
        element("dc:subject", self.subject.as_deref());
        element("dc:creator", self.creator.as_deref());
        element("cp:lastModifiedBy", self.last_modified_by.as_deref());
        element(
            "cp:revision",
            self.revision.map(|r| r.to_string()).as_deref(),
        );
        element("dc:language", self.language.as_deref());

        for (tag, when) in [
            ("dcterms:created", self.created),
            ("dcterms:modified", self.modified),
        ] {
            if let Some(when) = when {
                xml.push_str(&format!(
                    r#"<{tag} xsi:type="dcterms:W3CDTF">{}</{tag}>"#,
                    when.to_rfc3339_opts(SecondsFormat::Secs, true)
                ));
            }
        }

        xml.push_str("</cp:coreProperties>");
        xml
    }
}

/// Extended (application) properties stored in `docProps/app.xml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppProperties {
    /// Producing application name
    pub application: String,
    /// Number of slides in the presentation
    pub slides: usize,
}

impl AppProperties {
    /// Generate `docProps/app.xml`.
    pub fn to_xml(&self) -> String {
        format!(
            concat!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
                r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" "#,
                r#"xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#,
                "<Application>{}</Application>",
                "<PresentationFormat>On-screen Show (4:3)</PresentationFormat>",
                "<Slides>{}</Slides>",
                "</Properties>"
            ),
            escape_xml(&self.application),
            self.slides
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_document_properties_builder() {
        let props = DocumentProperties::new()
            .title("产品定义")
            .creator("yy1 / 深思")
            .revision(1);

        assert_eq!(props.title.as_deref(), Some("产品定义"));
        assert_eq!(props.creator.as_deref(), Some("yy1 / 深思"));
        assert_eq!(props.revision, Some(1));
    }

    #[test]
    fn test_xml_generation() {
        let when = Utc.with_ymd_and_hms(2026, 1, 13, 0, 0, 0).unwrap();
        let props = DocumentProperties::new()
            .title("My Deck")
            .creator("Test Author")
            .revision(1)
            .dated(when);

        let xml = props.to_xml();
        assert!(xml.contains("<dc:title>My Deck</dc:title>"));
        assert!(xml.contains("<dc:creator>Test Author</dc:creator>"));
        assert!(xml.contains("<cp:revision>1</cp:revision>"));
        assert!(xml.contains(
            r#"<dcterms:created xsi:type="dcterms:W3CDTF">2026-01-13T00:00:00Z</dcterms:created>"#
        ));
        assert!(!xml.contains("dc:subject"));
    }

    #[test]
    fn test_xml_escaping() {
        let props = DocumentProperties::new().title("R&D <Deck> \"Final\"");

        let xml = props.to_xml();
        assert!(xml.contains("R&amp;D &lt;Deck&gt; &quot;Final&quot;"));
    }

    #[test]
    fn test_app_properties() {
        let app = AppProperties {
            application: "pitchdeck".to_string(),
            slides: 10,
        };
        let xml = app.to_xml();
        assert!(xml.contains("<Application>pitchdeck</Application>"));
        assert!(xml.contains("<Slides>10</Slides>"));
    }
}
