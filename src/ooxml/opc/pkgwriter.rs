//! Package writer for OPC packages.
//!
//! Serializes an [`OpcPackage`] to a ZIP archive: `[Content_Types].xml`
//! first, then the package relationships, then every part followed by its
//! own relationships.

use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::{content_type as ct, namespace};
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::package::OpcPackage;
use crate::ooxml::opc::packuri::{CONTENT_TYPES_URI, PACKAGE_URI, PackURI};
use crate::ooxml::opc::phys_pkg::PhysPkgWriter;
use std::collections::BTreeMap;
use std::path::Path;

/// Package writer that serializes an OPC package to a ZIP file.
pub struct PackageWriter;

impl PackageWriter {
    /// Write an OPC package to a file.
    ///
    /// The package is fully serialized in memory before the file is touched,
    /// so a serialization failure never leaves a truncated file behind.
    pub fn write<P: AsRef<Path>>(path: P, package: &OpcPackage) -> Result<()> {
        let bytes = Self::to_bytes(package)?;
        std::fs::write(path.as_ref(), &bytes)?;
        log::info!(
            "wrote {} ({} parts, {} bytes)",
            path.as_ref().display(),
            package.part_count(),
            bytes.len()
        );
        Ok(())
    }

    /// Serialize an OPC package to bytes.
    pub fn to_bytes(package: &OpcPackage) -> Result<Vec<u8>> {
        let mut phys_writer = PhysPkgWriter::new();

        Self::write_content_types(&mut phys_writer, package)?;
        Self::write_pkg_rels(&mut phys_writer, package)?;
        Self::write_parts(&mut phys_writer, package)?;

        phys_writer.finish()
    }

    fn write_content_types(phys_writer: &mut PhysPkgWriter, package: &OpcPackage) -> Result<()> {
        let blob = ContentTypesItem::from_package(package).to_xml();
        let uri = PackURI::new(CONTENT_TYPES_URI).map_err(OpcError::InvalidPackUri)?;
        phys_writer.write(&uri, blob.as_bytes())
    }

    fn write_pkg_rels(phys_writer: &mut PhysPkgWriter, package: &OpcPackage) -> Result<()> {
        let rels_uri = PackURI::new(PACKAGE_URI)
            .and_then(|uri| uri.rels_uri())
            .map_err(OpcError::InvalidPackUri)?;
        phys_writer.write(&rels_uri, package.rels().to_xml().as_bytes())
    }

    fn write_parts(phys_writer: &mut PhysPkgWriter, package: &OpcPackage) -> Result<()> {
        for part in package.iter_parts() {
            log::debug!("writing part {} ({} bytes)", part.partname(), part.blob().len());
            phys_writer.write(part.partname(), part.blob())?;

            if !part.rels().is_empty() {
                let rels_uri = part
                    .partname()
                    .rels_uri()
                    .map_err(OpcError::InvalidPackUri)?;
                phys_writer.write(&rels_uri, part.rels().to_xml().as_bytes())?;
            }
        }
        Ok(())
    }
}

/// Helper for building [Content_Types].xml content.
///
/// Both maps are ordered so the serialized form does not depend on part
/// insertion order.
struct ContentTypesItem {
    /// Default content types by extension
    defaults: BTreeMap<String, String>,

    /// Override content types by partname
    overrides: BTreeMap<String, String>,
}

impl ContentTypesItem {
    fn new() -> Self {
        let mut defaults = BTreeMap::new();
        defaults.insert("rels".to_string(), ct::OPC_RELATIONSHIPS.to_string());
        defaults.insert("xml".to_string(), ct::XML.to_string());

        Self {
            defaults,
            overrides: BTreeMap::new(),
        }
    }

    fn from_package(package: &OpcPackage) -> Self {
        let mut cti = Self::new();
        for part in package.iter_parts() {
            cti.add_content_type(part.partname(), part.content_type());
        }
        cti
    }

    /// Parts matching an extension default need no override.
    fn add_content_type(&mut self, partname: &PackURI, content_type: &str) {
        if self.defaults.get(partname.ext()).map(String::as_str) == Some(content_type) {
            return;
        }
        self.overrides
            .insert(partname.to_string(), content_type.to_string());
    }

    fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.overrides.len() * 160);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(r#"<Types xmlns=""#);
        xml.push_str(namespace::OPC_CONTENT_TYPES);
        xml.push_str(r#"">"#);

        for (ext, content_type) in &self.defaults {
            xml.push_str(&format!(
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                escape_xml(ext),
                escape_xml(content_type)
            ));
        }

        for (partname, content_type) in &self.overrides {
            xml.push_str(&format!(
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                escape_xml(partname),
                escape_xml(content_type)
            ));
        }

        xml.push_str("</Types>");
        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::part::BlobPart;
    use crate::ooxml::opc::phys_pkg::PhysPkgReader;

    fn sample_package() -> OpcPackage {
        let mut pkg = OpcPackage::new();
        let doc = PackURI::new("/word/document.xml").unwrap();
        let styles = PackURI::new("/word/styles.xml").unwrap();
        pkg.relate_to(&doc, "urn:officeDocument");
        pkg.add_part(Box::new(BlobPart::new(styles.clone(), ct::WML_STYLES, "<w:styles/>")));
        let mut doc_part = BlobPart::new(doc, ct::WML_DOCUMENT_MAIN, "<w:document/>");
        crate::ooxml::opc::part::Part::relate_to(&mut doc_part, &styles, "urn:styles");
        pkg.add_part(Box::new(doc_part));
        pkg
    }

    #[test]
    fn test_content_types_sorted() {
        let xml = ContentTypesItem::from_package(&sample_package()).to_xml();

        let doc = xml.find(r#"PartName="/word/document.xml""#).unwrap();
        let styles = xml.find(r#"PartName="/word/styles.xml""#).unwrap();
        assert!(doc < styles);
        assert!(xml.contains(r#"<Default Extension="rels""#));
    }

    #[test]
    fn test_members_written() {
        let bytes = PackageWriter::to_bytes(&sample_package()).unwrap();
        let reader = PhysPkgReader::from_bytes(bytes).unwrap();
        assert_eq!(
            reader.member_names(),
            vec![
                "[Content_Types].xml",
                "_rels/.rels",
                "word/styles.xml",
                "word/document.xml",
                "word/_rels/document.xml.rels",
            ]
        );
    }
}
