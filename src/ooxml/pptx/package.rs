/// Package implementation for PowerPoint presentations.
use std::path::Path;

use crate::ooxml::docprops::DocumentProperties;
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::opc::{BlobPart, OpcPackage, PackURI, Part};
use crate::ooxml::part_uri;
use crate::ooxml::pptx::template;
use crate::ooxml::pptx::writer::MutablePresentation;

/// A PowerPoint (.pptx) package being written.
///
/// Saving consumes the package.
///
/// # Examples
///
/// ```rust,no_run
/// use ave_docgen::ooxml::pptx::{Package, SlideLayout};
///
/// let mut pkg = Package::new("Deck");
/// pkg.presentation_mut()
///     .add_slide(SlideLayout::TitleSlide)
///     .set_title("Welkom");
/// pkg.save("deck.pptx")?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Package {
    presentation: MutablePresentation,
    properties: DocumentProperties,
}

impl Package {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            presentation: MutablePresentation::new(),
            properties: DocumentProperties::new(title),
        }
    }

    #[inline]
    pub fn presentation(&self) -> &MutablePresentation {
        &self.presentation
    }

    #[inline]
    pub fn presentation_mut(&mut self) -> &mut MutablePresentation {
        &mut self.presentation
    }

    #[inline]
    pub fn properties(&self) -> &DocumentProperties {
        &self.properties
    }

    /// Assemble the OPC package.
    pub fn to_opc(&self) -> Result<OpcPackage> {
        let master_uri = part_uri("/ppt/slideMasters/slideMaster1.xml")?;
        let theme_uri = part_uri("/ppt/theme/theme1.xml")?;
        let layout_uris = (1..=template::all_slide_layouts().len())
            .map(|n| part_uri(&format!("/ppt/slideLayouts/slideLayout{}.xml", n)))
            .collect::<Result<Vec<PackURI>>>()?;

        // Master relationships must come out as rId1, rId2 for the layouts
        let mut master = BlobPart::new(
            master_uri.clone(),
            ct::PML_SLIDE_MASTER,
            template::default_slide_master_xml(),
        );
        for uri in &layout_uris {
            master.relate_to(uri, rt::SLIDE_LAYOUT);
        }
        master.relate_to(&theme_uri, rt::THEME);

        let layouts = layout_uris
            .iter()
            .zip(template::all_slide_layouts())
            .map(|(uri, xml)| {
                let mut layout = BlobPart::new(uri.clone(), ct::PML_SLIDE_LAYOUT, xml);
                layout.relate_to(&master_uri, rt::SLIDE_MASTER);
                layout
            })
            .collect::<Vec<_>>();

        let mut slides = Vec::with_capacity(self.presentation.slide_count());
        for (index, slide) in self.presentation.slides().iter().enumerate() {
            let uri = part_uri(&format!("/ppt/slides/slide{}.xml", index + 1))?;
            let mut part = BlobPart::new(uri, ct::PML_SLIDE, slide.to_xml()?);
            part.relate_to(&layout_uris[slide.layout().index()], rt::SLIDE_LAYOUT);
            slides.push(part);
        }

        let main_uri = part_uri("/ppt/presentation.xml")?;
        let pres_props_uri = part_uri("/ppt/presProps.xml")?;
        let view_props_uri = part_uri("/ppt/viewProps.xml")?;
        let table_styles_uri = part_uri("/ppt/tableStyles.xml")?;

        // The main part's blob depends on its own relationship IDs
        let mut main = BlobPart::new(main_uri, ct::PML_PRESENTATION_MAIN, Vec::<u8>::new());
        let master_rel_id = main.relate_to(&master_uri, rt::SLIDE_MASTER);
        let slide_rel_ids = slides
            .iter()
            .map(|s| main.relate_to(s.partname(), rt::SLIDE))
            .collect::<Vec<_>>();
        main.relate_to(&pres_props_uri, rt::PRES_PROPS);
        main.relate_to(&view_props_uri, rt::VIEW_PROPS);
        main.relate_to(&theme_uri, rt::THEME);
        main.relate_to(&table_styles_uri, rt::TABLE_STYLES);

        let presentation_xml = self
            .presentation
            .generate_presentation_xml(&master_rel_id, &slide_rel_ids)?;
        main.set_blob(presentation_xml);

        let mut pkg = OpcPackage::new();
        pkg.relate_to(main.partname(), rt::OFFICE_DOCUMENT);
        pkg.add_part(Box::new(main));
        pkg.add_part(Box::new(master));
        for layout in layouts {
            pkg.add_part(Box::new(layout));
        }
        for slide in slides {
            pkg.add_part(Box::new(slide));
        }
        pkg.add_part(Box::new(BlobPart::new(
            theme_uri,
            ct::OFC_THEME,
            template::default_theme_xml(),
        )));
        pkg.add_part(Box::new(BlobPart::new(
            pres_props_uri,
            ct::PML_PRES_PROPS,
            template::default_pres_props_xml(),
        )));
        pkg.add_part(Box::new(BlobPart::new(
            view_props_uri,
            ct::PML_VIEW_PROPS,
            template::default_view_props_xml(),
        )));
        pkg.add_part(Box::new(BlobPart::new(
            table_styles_uri,
            ct::PML_TABLE_STYLES,
            template::default_table_styles_xml(),
        )));
        self.properties.add_to(&mut pkg)?;

        Ok(pkg)
    }

    /// Serialize the package into .pptx bytes.
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
    use crate::ooxml::pptx::SlideLayout;

    fn two_slide_package() -> Package {
        let mut pkg = Package::new("Deck");
        let pres = pkg.presentation_mut();
        pres.add_slide(SlideLayout::TitleSlide).set_title("Titel");
        pres.add_slide(SlideLayout::TitleAndContent).set_title("Inhoud");
        pkg
    }

    #[test]
    fn test_master_layout_rel_ids() {
        let opc = two_slide_package().to_opc().unwrap();
        let master = opc.part("/ppt/slideMasters/slideMaster1.xml").unwrap();
        let target = |id: &str| master.rels().get(id).unwrap().target_ref().to_string();
        assert_eq!(target("rId1"), "../slideLayouts/slideLayout1.xml");
        assert_eq!(target("rId2"), "../slideLayouts/slideLayout2.xml");
        assert_eq!(target("rId3"), "../theme/theme1.xml");
    }

    #[test]
    fn test_slides_point_at_their_layout() {
        let opc = two_slide_package().to_opc().unwrap();
        let second = opc.part("/ppt/slides/slide2.xml").unwrap();
        assert_eq!(
            second.rels().get("rId1").unwrap().target_ref(),
            "../slideLayouts/slideLayout2.xml"
        );
    }

    #[test]
    fn test_presentation_lists_slides() {
        let opc = two_slide_package().to_opc().unwrap();
        let main = opc.part("/ppt/presentation.xml").unwrap();
        let xml = std::str::from_utf8(main.blob()).unwrap();
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId2"/>"#));
        assert!(xml.contains(r#"<p:sldId id="257" r:id="rId3"/>"#));
        assert_eq!(main.rels().len(), 7);
    }
}
