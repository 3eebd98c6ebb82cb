//! Package reader for OPC packages.
//!
//! Reads the ZIP container of a package into memory and serves part blobs and
//! parsed relationships by partname.

use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::{PACKAGE_URI, PackURI};
use crate::ooxml::opc::rel::Relationships;
use std::collections::HashMap;
use std::io::{Cursor, Read};
use std::path::Path;

/// Reader that provides access to the members of a ZIP-based OPC package.
///
/// All members are decompressed up front; presentation packages are small.
#[derive(Debug)]
pub struct PackageReader {
    /// Member contents keyed by membername (no leading slash)
    members: HashMap<String, Vec<u8>>,
}

impl PackageReader {
    /// Open an OPC package from a file path.
    ///
    /// # Errors
    /// Returns an error if the file doesn't exist, isn't a valid ZIP file,
    /// or cannot be read.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(OpcError::PackageNotFound(path.display().to_string()));
        }

        let data = std::fs::read(path)?;
        Self::from_bytes(&data)
    }

    /// Read an OPC package from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut archive = zip::ZipArchive::new(Cursor::new(data))?;
        let mut members = HashMap::with_capacity(archive.len());

        for index in 0..archive.len() {
            let mut file = archive.by_index(index)?;
            if file.is_dir() {
                continue;
            }
            let mut blob = Vec::with_capacity(file.size() as usize);
            file.read_to_end(&mut blob)?;
            members.insert(file.name().to_string(), blob);
        }

        Ok(Self { members })
    }

    /// Get the binary content for a part by its PackURI.
    pub fn blob_for(&self, pack_uri: &PackURI) -> Result<&[u8]> {
        self.members
            .get(pack_uri.membername())
            .map(Vec::as_slice)
            .ok_or_else(|| OpcError::PartNotFound(pack_uri.to_string()))
    }

    /// Get the relationships of a source part (or of the package for "/").
    ///
    /// Returns an empty collection if the source has no relationships part.
    pub fn rels_for(&self, source_uri: &PackURI) -> Result<Relationships> {
        let rels_uri = source_uri.rels_uri().map_err(OpcError::InvalidPackUri)?;

        match self.members.get(rels_uri.membername()) {
            Some(xml) => Relationships::from_xml(xml, source_uri.base_uri()),
            None => Ok(Relationships::new(source_uri.base_uri().to_string())),
        }
    }

    /// Package-level relationships (`/_rels/.rels`).
    pub fn package_rels(&self) -> Result<Relationships> {
        let package_uri = PackURI::new(PACKAGE_URI).map_err(OpcError::InvalidPackUri)?;
        self.rels_for(&package_uri)
    }

    /// Check if a specific member exists in the package.
    pub fn contains(&self, pack_uri: &PackURI) -> bool {
        self.members.contains_key(pack_uri.membername())
    }

    /// Membernames in sorted order.
    pub fn member_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.members.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of members in the package.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check if the package is empty.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
    use crate::ooxml::opc::{OpcPackage, PackageWriter, Part};

    #[test]
    fn test_read_back_written_package() {
        let mut pkg = OpcPackage::new();
        let pres = PackURI::new("/ppt/presentation.xml").unwrap();
        let slide = PackURI::new("/ppt/slides/slide1.xml").unwrap();

        let mut pres_part = Part::new(pres.clone(), ct::PML_PRESENTATION_MAIN, b"<p/>".to_vec());
        pres_part.relate_to(&slide, rt::SLIDE);
        pkg.add_part(pres_part).unwrap();
        pkg.add_part(Part::new(slide.clone(), ct::PML_SLIDE, b"<s/>".to_vec()))
            .unwrap();
        pkg.relate_to(&pres, rt::OFFICE_DOCUMENT);

        let bytes = PackageWriter::to_bytes(&pkg).unwrap();
        let reader = PackageReader::from_bytes(&bytes).unwrap();

        assert_eq!(reader.blob_for(&slide).unwrap(), b"<s/>");
        let office_doc = reader
            .package_rels()
            .unwrap()
            .part_with_reltype(rt::OFFICE_DOCUMENT)
            .unwrap()
            .target_partname()
            .unwrap();
        assert_eq!(office_doc, pres);

        let pres_rels = reader.rels_for(&pres).unwrap();
        assert_eq!(
            pres_rels.get("rId1").unwrap().target_partname().unwrap(),
            slide
        );
        assert!(reader.rels_for(&slide).unwrap().is_empty());
        assert!(reader.member_names().contains(&"[Content_Types].xml"));
    }

    #[test]
    fn test_not_a_zip() {
        assert!(matches!(
            PackageReader::from_bytes(b"definitely not a zip"),
            Err(OpcError::Zip(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            PackageReader::open("/nonexistent/deck.pptx"),
            Err(OpcError::PackageNotFound(_))
        ));
    }
}
