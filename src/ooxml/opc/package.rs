/// In-memory OPC package.
///
/// This module provides the OpcPackage type, which holds the parts and the
/// package-level relationships of a document until it is written out.
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::{PACKAGE_URI, PackURI};
use crate::ooxml::opc::part::Part;
use crate::ooxml::opc::rel::Relationships;
use std::collections::BTreeMap;

/// An Open Packaging Convention package in memory.
///
/// Parts are kept ordered by partname so serialization is deterministic.
#[derive(Debug)]
pub struct OpcPackage {
    /// Package-level relationships
    rels: Relationships,

    /// All parts in the package, indexed by partname
    parts: BTreeMap<PackURI, Part>,
}

impl OpcPackage {
    /// Create a new empty OPC package.
    pub fn new() -> Self {
        Self {
            rels: Relationships::new(PACKAGE_URI.to_string()),
            parts: BTreeMap::new(),
        }
    }

    /// Add a part to the package.
    ///
    /// Returns an error if a part with the same partname already exists.
    pub fn add_part(&mut self, part: Part) -> Result<()> {
        if self.parts.contains_key(part.partname()) {
            return Err(OpcError::DuplicatePart(part.partname().to_string()));
        }
        self.parts.insert(part.partname().clone(), part);
        Ok(())
    }

    /// Get a part by partname.
    pub fn part(&self, partname: &PackURI) -> Result<&Part> {
        self.parts
            .get(partname)
            .ok_or_else(|| OpcError::PartNotFound(partname.to_string()))
    }

    /// Check whether a part exists.
    pub fn contains(&self, partname: &PackURI) -> bool {
        self.parts.contains_key(partname)
    }

    /// Iterate over all parts in partname order.
    pub fn iter_parts(&self) -> impl Iterator<Item = &Part> {
        self.parts.values()
    }

    /// Number of parts (excluding relationship parts and content types).
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Package-level relationships (`/_rels/.rels`).
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Relate the package itself to a part, returning the rId.
    pub fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        let target_ref = target.relative_ref(PACKAGE_URI);
        self.rels.get_or_add(reltype, &target_ref)
    }
}

impl Default for OpcPackage {
    fn default() -> Self {
        Self::new()
    }
}
