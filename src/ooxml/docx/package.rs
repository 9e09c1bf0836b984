/// Package implementation for Word documents.
use std::path::Path;

use crate::ooxml::docprops::DocumentProperties;
use crate::ooxml::docx::template;
use crate::ooxml::docx::writer::{MutableDocument, MutableStyle, generate_styles_xml};
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::opc::{BlobPart, OpcPackage, Part};
use crate::ooxml::part_uri;

/// A Word (.docx) package being written.
///
/// Holds the document body, the style sheet, and the package properties.
/// Saving consumes the package, so a saved package cannot be appended to.
///
/// # Examples
///
/// ```rust,no_run
/// use ave_docgen::ooxml::docx::Package;
///
/// let mut pkg = Package::new("Memo");
/// pkg.document_mut().add_paragraph_with_text("Hello");
/// pkg.save("memo.docx")?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Package {
    document: MutableDocument,
    styles: Vec<MutableStyle>,
    properties: DocumentProperties,
}

impl Package {
    /// Create a package with the built-in style sheet and no base font.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_base_font(title, None)
    }

    /// Create a package whose `Normal` style uses `font` as
    /// `(family, half-points)`.
    pub fn with_base_font(title: impl Into<String>, font: Option<(&str, u32)>) -> Self {
        let mut styles = vec![
            MutableStyle::normal(font),
            MutableStyle::default_paragraph_font(),
            MutableStyle::normal_table(),
            MutableStyle::title(),
        ];
        // Levels 1..=9 are always valid
        styles.extend((1..=9).filter_map(|level| MutableStyle::heading(level).ok()));
        styles.push(MutableStyle::list_bullet());
        styles.push(MutableStyle::table_grid());

        Self {
            document: MutableDocument::new(),
            styles,
            properties: DocumentProperties::new(title),
        }
    }

    #[inline]
    pub fn document(&self) -> &MutableDocument {
        &self.document
    }

    #[inline]
    pub fn document_mut(&mut self) -> &mut MutableDocument {
        &mut self.document
    }

    #[inline]
    pub fn styles(&self) -> &[MutableStyle] {
        &self.styles
    }

    #[inline]
    pub fn properties(&self) -> &DocumentProperties {
        &self.properties
    }

    /// Assemble the OPC package.
    pub fn to_opc(&self) -> Result<OpcPackage> {
        let mut pkg = OpcPackage::new();

        let mut main = BlobPart::new(
            part_uri("/word/document.xml")?,
            ct::WML_DOCUMENT_MAIN,
            self.document.to_xml()?,
        );
        let styles = BlobPart::new(
            part_uri("/word/styles.xml")?,
            ct::WML_STYLES,
            generate_styles_xml(&self.styles)?,
        );
        let numbering = BlobPart::new(
            part_uri("/word/numbering.xml")?,
            ct::WML_NUMBERING,
            template::default_numbering_xml(),
        );
        let settings = BlobPart::new(
            part_uri("/word/settings.xml")?,
            ct::WML_SETTINGS,
            template::default_settings_xml(),
        );

        main.relate_to(styles.partname(), rt::STYLES);
        main.relate_to(numbering.partname(), rt::NUMBERING);
        main.relate_to(settings.partname(), rt::SETTINGS);

        pkg.relate_to(main.partname(), rt::OFFICE_DOCUMENT);
        pkg.add_part(Box::new(main));
        pkg.add_part(Box::new(styles));
        pkg.add_part(Box::new(numbering));
        pkg.add_part(Box::new(settings));
        self.properties.add_to(&mut pkg)?;

        Ok(pkg)
    }

    /// Serialize the package into .docx bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(self.to_opc()?.to_bytes()?)
    }

    /// Write the package to `path`, replacing any existing file.
    pub fn save<P: AsRef<Path>>(self, path: P) -> Result<()> {
        self.to_opc()?.save(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_parts() {
        let pkg = Package::new("Test").to_opc().unwrap();
        let names: Vec<&str> = pkg.iter_parts().map(|p| p.partname().as_str()).collect();
        assert_eq!(
            names,
            vec![
                "/word/document.xml",
                "/word/styles.xml",
                "/word/numbering.xml",
                "/word/settings.xml",
                "/docProps/core.xml",
                "/docProps/app.xml",
            ]
        );
        assert_eq!(pkg.part("/word/document.xml").unwrap().rels().len(), 3);
        assert_eq!(
            pkg.rels()
                .part_with_reltype(rt::OFFICE_DOCUMENT)
                .unwrap()
                .target_ref(),
            "word/document.xml"
        );
    }

    #[test]
    fn test_base_font_reaches_normal_style() {
        let pkg = Package::with_base_font("Test", Some(("Arial", 22)));
        let xml = generate_styles_xml(pkg.styles()).unwrap();
        assert!(xml.contains(r#"w:styleId="Normal""#));
        assert!(xml.contains(r#"<w:rFonts w:ascii="Arial""#));
    }

    #[test]
    fn test_bytes_are_stable() {
        let mut pkg = Package::new("Stable");
        pkg.document_mut().add_paragraph_with_text("Zelfde inhoud");
        assert_eq!(pkg.to_bytes().unwrap(), pkg.to_bytes().unwrap());
    }
}
