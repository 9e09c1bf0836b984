/// Presentation writer for PPTX.
use crate::ooxml::error::{OoxmlError, Result};
use std::fmt::Write as FmtWrite;

use super::slide::{MutableSlide, SlideLayout};

/// ID of the single slide master in `p:sldMasterIdLst`.
const SLIDE_MASTER_ID: u32 = 2147483648;

/// First ID handed out to slides in `p:sldIdLst`.
const FIRST_SLIDE_ID: u32 = 256;

/// A mutable PowerPoint presentation for writing.
#[derive(Debug)]
pub struct MutablePresentation {
    /// Slides in the presentation
    pub(crate) slides: Vec<MutableSlide>,
    /// Slide width in EMUs (English Metric Units, 914400 EMU = 1 inch)
    slide_width: i64,
    /// Slide height in EMUs
    slide_height: i64,
}

impl MutablePresentation {
    /// Create a new empty presentation with default dimensions.
    ///
    /// Default size is 10" x 7.5" (standard 4:3 aspect ratio).
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_width: 9144000,  // 10 inches
            slide_height: 6858000, // 7.5 inches
        }
    }

    /// Add a new slide using `layout`.
    pub fn add_slide(&mut self, layout: SlideLayout) -> &mut MutableSlide {
        let slide_id = FIRST_SLIDE_ID + self.slides.len() as u32;
        self.slides.push(MutableSlide::new(slide_id, layout));
        let last = self.slides.len() - 1;
        &mut self.slides[last]
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &[MutableSlide] {
        &self.slides
    }

    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    /// Generate presentation.xml content.
    ///
    /// `master_rel_id` is the relationship to the slide master and
    /// `slide_rel_ids` holds one relationship ID per slide, in slide order.
    pub(crate) fn generate_presentation_xml(
        &self,
        master_rel_id: &str,
        slide_rel_ids: &[String],
    ) -> Result<String> {
        if slide_rel_ids.len() != self.slides.len() {
            return Err(OoxmlError::Xml(format!(
                "expected {} slide relationship IDs, got {}",
                self.slides.len(),
                slide_rel_ids.len()
            )));
        }

        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" saveSubsetFonts="1">"#);

        xml.push_str("<p:sldMasterIdLst>");
        write!(
            xml,
            r#"<p:sldMasterId id="{}" r:id="{}"/>"#,
            SLIDE_MASTER_ID, master_rel_id
        )?;
        xml.push_str("</p:sldMasterIdLst>");

        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (slide, rel_id) in self.slides.iter().zip(slide_rel_ids) {
                write!(
                    xml,
                    r#"<p:sldId id="{}" r:id="{}"/>"#,
                    slide.slide_id(),
                    rel_id
                )?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}" type="screen4x3"/>"#,
            self.slide_width, self.slide_height
        )?;
        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
        xml.push_str("</p:presentation>");

        Ok(xml)
    }
}

impl Default for MutablePresentation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_presentation() {
        let pres = MutablePresentation::new();
        assert_eq!(pres.slide_count(), 0);
        assert_eq!(pres.slide_width(), 9144000);
        assert_eq!(pres.slide_height(), 6858000);
    }

    #[test]
    fn test_slide_ids_increase() {
        let mut pres = MutablePresentation::new();
        pres.add_slide(SlideLayout::TitleSlide);
        let second = pres.add_slide(SlideLayout::TitleAndContent);
        second.set_title("Agenda");
        assert_eq!(second.slide_id(), 257);
        assert_eq!(pres.slide_count(), 2);
    }

    #[test]
    fn test_xml_generation() {
        let mut pres = MutablePresentation::new();
        pres.add_slide(SlideLayout::TitleSlide).set_title("Test");

        let xml = pres
            .generate_presentation_xml("rId1", &["rId2".to_string()])
            .unwrap();
        assert!(xml.contains(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#));
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId2"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="9144000" cy="6858000""#));
    }

    #[test]
    fn test_missing_slide_rel_ids() {
        let mut pres = MutablePresentation::new();
        pres.add_slide(SlideLayout::TitleSlide);
        assert!(pres.generate_presentation_xml("rId1", &[]).is_err());
    }
}
