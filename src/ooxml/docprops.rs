//! Core and extended document properties (`docProps/core.xml`,
//! `docProps/app.xml`).
//!
//! Values are static text. No timestamps are written so repeated saves of
//! the same content produce identical packages.

use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::opc::{BlobPart, OpcPackage};

use super::{escape_text, part_uri};

/// Default author recorded in every package.
pub const DEFAULT_CREATOR: &str = "AVE CRM";

/// Application name recorded in the extended properties.
pub const APPLICATION: &str = "ave-docgen";

/// Metadata written into the package's property parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentProperties {
    pub title: String,
    pub creator: String,
    pub application: String,
}

impl DocumentProperties {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            creator: DEFAULT_CREATOR.to_string(),
            application: APPLICATION.to_string(),
        }
    }

    pub fn core_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(512);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#);
        if !self.title.is_empty() {
            xml.push_str("<dc:title>");
            xml.push_str(&escape_text(&self.title)?);
            xml.push_str("</dc:title>");
        }
        xml.push_str("<dc:creator>");
        xml.push_str(&escape_text(&self.creator)?);
        xml.push_str("</dc:creator>");
        xml.push_str("<cp:lastModifiedBy>");
        xml.push_str(&escape_text(&self.creator)?);
        xml.push_str("</cp:lastModifiedBy>");
        xml.push_str("<cp:revision>1</cp:revision>");
        xml.push_str("</cp:coreProperties>");
        Ok(xml)
    }

    pub fn app_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(256);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#);
        xml.push_str("<Application>");
        xml.push_str(&escape_text(&self.application)?);
        xml.push_str("</Application>");
        xml.push_str("<DocSecurity>0</DocSecurity>");
        xml.push_str("</Properties>");
        Ok(xml)
    }

    /// Add both property parts to `pkg` and relate them from the package.
    pub fn add_to(&self, pkg: &mut OpcPackage) -> Result<()> {
        let core_uri = part_uri("/docProps/core.xml")?;
        let app_uri = part_uri("/docProps/app.xml")?;
        let (core_xml, app_xml) = (self.core_xml()?, self.app_xml()?);

        pkg.relate_to(&core_uri, rt::CORE_PROPERTIES);
        pkg.relate_to(&app_uri, rt::EXTENDED_PROPERTIES);
        pkg.add_part(Box::new(BlobPart::new(
            core_uri,
            ct::OPC_CORE_PROPERTIES,
            core_xml,
        )));
        pkg.add_part(Box::new(BlobPart::new(
            app_uri,
            ct::OFC_EXTENDED_PROPERTIES,
            app_xml,
        )));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_properties_escape_title() {
        let props = DocumentProperties::new("Stage & Scriptie");
        let xml = props.core_xml().unwrap();
        assert!(xml.contains("<dc:title>Stage &amp; Scriptie</dc:title>"));
        assert!(xml.contains("<dc:creator>AVE CRM</dc:creator>"));
        assert!(!xml.contains("dcterms:created"));
    }

    #[test]
    fn test_control_character_in_title_rejected() {
        let mut pkg = OpcPackage::new();
        let err = DocumentProperties::new("Titel\u{0}").add_to(&mut pkg).unwrap_err();
        assert!(matches!(err, crate::ooxml::OoxmlError::InvalidFormat(_)));
        assert_eq!(pkg.part_count(), 0);
    }

    #[test]
    fn test_parts_are_related_from_package() {
        let mut pkg = OpcPackage::new();
        DocumentProperties::new("x").add_to(&mut pkg).unwrap();
        assert_eq!(pkg.part_count(), 2);
        assert!(pkg.rels().part_with_reltype(rt::CORE_PROPERTIES).is_ok());
        assert!(
            pkg.part("/docProps/app.xml")
                .unwrap()
                .blob()
                .starts_with(b"<?xml")
        );
    }
}
