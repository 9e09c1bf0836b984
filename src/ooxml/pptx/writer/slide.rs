/// Slide types and implementation for PPTX presentations.
use crate::ooxml::error::Result;

use super::shape::{MutableShape, PlaceholderType};

/// Layouts provided by the slide master, in master order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideLayout {
    /// Centered title and subtitle
    TitleSlide,
    /// Title and a content placeholder
    TitleAndContent,
}

impl SlideLayout {
    /// Zero-based position of the layout under the slide master.
    pub(crate) fn index(&self) -> usize {
        match self {
            Self::TitleSlide => 0,
            Self::TitleAndContent => 1,
        }
    }

    fn placeholders(&self) -> (PlaceholderType, PlaceholderType) {
        match self {
            Self::TitleSlide => (PlaceholderType::CenterTitle, PlaceholderType::SubTitle),
            Self::TitleAndContent => (PlaceholderType::Title, PlaceholderType::Body),
        }
    }
}

/// A mutable slide in a presentation.
///
/// Every slide carries the two placeholders of its layout: a title and a
/// body (the subtitle on a title slide).
#[derive(Debug, Clone)]
pub struct MutableSlide {
    /// Slide ID (unique identifier)
    pub(crate) slide_id: u32,
    pub(crate) layout: SlideLayout,
    pub(crate) title: MutableShape,
    pub(crate) body: MutableShape,
}

impl MutableSlide {
    pub(crate) fn new(slide_id: u32, layout: SlideLayout) -> Self {
        let (title, body) = layout.placeholders();
        // IDs: 1=group, 2=title, 3=body
        let mut body = MutableShape::new_placeholder(3, body);
        if layout == SlideLayout::TitleAndContent {
            body.set_word_wrap(true);
        }
        Self {
            slide_id,
            layout,
            title: MutableShape::new_placeholder(2, title),
            body,
        }
    }

    #[inline]
    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    #[inline]
    pub fn layout(&self) -> SlideLayout {
        self.layout
    }

    pub fn set_title(&mut self, title: &str) {
        self.title.set_text(title);
    }

    pub fn title(&self) -> String {
        self.title.text()
    }

    /// The body placeholder (the subtitle on a title slide).
    pub fn body_mut(&mut self) -> &mut MutableShape {
        &mut self.body
    }

    pub fn body(&self) -> &MutableShape {
        &self.body
    }

    /// Generate slide XML content.
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<p:sld xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" "#,
        );
        xml.push_str(r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#);
        xml.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
        );

        xml.push_str("<p:cSld>");
        xml.push_str("<p:spTree>");

        // Write group shape properties (required)
        xml.push_str("<p:nvGrpSpPr>");
        xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
        xml.push_str("<p:cNvGrpSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGrpSpPr>");
        xml.push_str("<p:grpSpPr>");
        xml.push_str("<a:xfrm>");
        xml.push_str(r#"<a:off x="0" y="0"/>"#);
        xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
        xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
        xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
        xml.push_str("</a:xfrm>");
        xml.push_str("</p:grpSpPr>");

        self.title.to_xml(&mut xml)?;
        self.body.to_xml(&mut xml)?;

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
        xml.push_str("</p:sld>");

        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_slide_placeholders() {
        let mut slide = MutableSlide::new(256, SlideLayout::TitleSlide);
        slide.set_title("Eindpresentatie");
        slide.body_mut().add_paragraph("Stage", 0).add_paragraph("2026", 0);

        let xml = slide.to_xml().unwrap();
        assert!(xml.contains(r#"<p:ph type="ctrTitle"/>"#));
        assert!(xml.contains(r#"<p:ph type="subTitle" idx="1"/>"#));
        assert!(!xml.contains("wrap="));
        assert_eq!(slide.title(), "Eindpresentatie");
    }

    #[test]
    fn test_content_body_wraps() {
        let slide = MutableSlide::new(257, SlideLayout::TitleAndContent);
        let xml = slide.to_xml().unwrap();
        assert!(xml.contains(r#"<p:ph idx="1"/>"#));
        assert!(xml.contains(r#"<a:bodyPr wrap="square"/>"#));
        assert_eq!(slide.layout().index(), 1);
        assert!(xml.ends_with("</p:sld>"));
    }
}
