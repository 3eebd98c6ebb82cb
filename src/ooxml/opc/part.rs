use crate::ooxml::opc::packuri::PackURI;
use crate::ooxml::opc::rel::Relationships;
/// Open Packaging Convention (OPC) package parts.
///
/// Parts are the fundamental units of content in an OPC package, each with a
/// unique partname, a content type, a binary blob and optional relationships.

/// A part in an OPC package.
#[derive(Debug, Clone)]
pub struct Part {
    /// Partname of this part (e.g., "/ppt/slides/slide1.xml")
    partname: PackURI,
    /// Content type of this part
    content_type: String,
    /// Serialized content
    blob: Vec<u8>,
    /// Relationships from this part to other parts
    rels: Relationships,
}

impl Part {
    /// Create a new part with no relationships.
    pub fn new(partname: PackURI, content_type: &str, blob: Vec<u8>) -> Self {
        let rels = Relationships::new(partname.base_uri().to_string());
        Self {
            partname,
            content_type: content_type.to_string(),
            blob,
            rels,
        }
    }

    /// Get the partname of this part.
    #[inline]
    pub fn partname(&self) -> &PackURI {
        &self.partname
    }

    /// Get the content type of this part.
    #[inline]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Get the binary content of this part.
    #[inline]
    pub fn blob(&self) -> &[u8] {
        &self.blob
    }

    /// Replace the binary content of this part.
    pub fn set_blob(&mut self, blob: Vec<u8>) {
        self.blob = blob;
    }

    /// Get the relationships for this part.
    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Add or get a relationship to another part, returning its rId.
    ///
    /// The stored target is relative to this part's directory.
    pub fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        let target_ref = target.relative_ref(self.partname.base_uri());
        self.rels.get_or_add(reltype, &target_ref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};

    #[test]
    fn test_relate_to_uses_relative_target() {
        let mut slide = Part::new(
            PackURI::new("/ppt/slides/slide1.xml").unwrap(),
            ct::PML_SLIDE,
            b"<p:sld/>".to_vec(),
        );
        let layout = PackURI::new("/ppt/slideLayouts/slideLayout1.xml").unwrap();

        let r_id = slide.relate_to(&layout, rt::SLIDE_LAYOUT);
        assert_eq!(r_id, "rId1");
        assert_eq!(slide.relate_to(&layout, rt::SLIDE_LAYOUT), "rId1");

        let rel = slide.rels().get("rId1").unwrap();
        assert_eq!(rel.target_ref(), "../slideLayouts/slideLayout1.xml");
        assert_eq!(rel.target_partname().unwrap(), layout);
    }
}
