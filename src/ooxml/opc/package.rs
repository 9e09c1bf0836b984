/// In-memory OPC package assembled before serialization.
use std::path::Path;

use crate::ooxml::opc::error::Result;
use crate::ooxml::opc::packuri::{PACKAGE_URI, PackURI};
use crate::ooxml::opc::part::Part;
use crate::ooxml::opc::pkgwriter::PackageWriter;
use crate::ooxml::opc::rel::Relationships;

/// An Open Packaging Convention package in memory.
///
/// Parts keep their insertion order, which is the order they are written to
/// the archive.
pub struct OpcPackage {
    /// Package-level relationships
    rels: Relationships,

    parts: Vec<Box<dyn Part>>,
}

impl OpcPackage {
    pub fn new() -> Self {
        Self {
            rels: Relationships::new(PACKAGE_URI),
            parts: Vec::new(),
        }
    }

    /// Add a part, replacing any existing part with the same partname.
    pub fn add_part(&mut self, part: Box<dyn Part>) {
        match self
            .parts
            .iter_mut()
            .find(|p| p.partname() == part.partname())
        {
            Some(existing) => *existing = part,
            None => self.parts.push(part),
        }
    }

    /// Relate the package itself to `target`, returning the rId.
    pub fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        self.rels.get_or_add(reltype, target.membername())
    }

    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    pub fn iter_parts(&self) -> impl Iterator<Item = &dyn Part> {
        self.parts.iter().map(|p| p.as_ref())
    }

    pub fn part(&self, partname: &str) -> Option<&dyn Part> {
        self.iter_parts().find(|p| p.partname().as_str() == partname)
    }

    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Serialize the package.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        PackageWriter::to_bytes(self)
    }

    /// Write the package to `path`, replacing any existing file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        PackageWriter::write(path, self)
    }
}

impl Default for OpcPackage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::part::BlobPart;

    #[test]
    fn test_add_part_replaces_same_name() {
        let mut pkg = OpcPackage::new();
        let uri = PackURI::new("/word/document.xml").unwrap();
        pkg.add_part(Box::new(BlobPart::new(uri.clone(), "application/xml", "<a/>")));
        pkg.add_part(Box::new(BlobPart::new(uri, "application/xml", "<b/>")));

        assert_eq!(pkg.part_count(), 1);
        assert_eq!(pkg.part("/word/document.xml").unwrap().blob(), b"<b/>");
    }

    #[test]
    fn test_package_relationship_target() {
        let mut pkg = OpcPackage::new();
        let uri = PackURI::new("/word/document.xml").unwrap();
        assert_eq!(pkg.relate_to(&uri, "urn:doc"), "rId1");
        assert_eq!(pkg.rels().get("rId1").unwrap().target_ref(), "word/document.xml");
    }
}
