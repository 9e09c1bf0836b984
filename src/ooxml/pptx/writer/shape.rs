/// Placeholder shapes for PPTX slides.
use crate::ooxml::error::Result;
use crate::ooxml::escape_text;
use std::fmt::Write as FmtWrite;

/// Placeholder a shape inherits its position and formatting from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderType {
    /// Centered title of the Title Slide layout
    CenterTitle,
    /// Subtitle of the Title Slide layout
    SubTitle,
    /// Title of the Title and Content layout
    Title,
    /// Content area of the Title and Content layout
    Body,
}

impl PlaceholderType {
    /// The `p:ph` element for this placeholder.
    fn ph_xml(&self) -> &'static str {
        match self {
            Self::CenterTitle => r#"<p:ph type="ctrTitle"/>"#,
            Self::SubTitle => r#"<p:ph type="subTitle" idx="1"/>"#,
            Self::Title => r#"<p:ph type="title"/>"#,
            Self::Body => r#"<p:ph idx="1"/>"#,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::CenterTitle | Self::Title => "Title",
            Self::SubTitle => "Subtitle",
            Self::Body => "Content Placeholder",
        }
    }
}

/// One paragraph of a text frame, with its outline level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextParagraph {
    pub level: u8,
    pub text: String,
}

/// A placeholder shape holding a text frame.
#[derive(Debug, Clone)]
pub struct MutableShape {
    /// Shape ID
    pub(crate) shape_id: u32,
    pub(crate) placeholder: PlaceholderType,
    pub(crate) paragraphs: Vec<TextParagraph>,
    /// Word-wrap the text frame
    pub(crate) word_wrap: bool,
}

impl MutableShape {
    pub(crate) fn new_placeholder(shape_id: u32, placeholder: PlaceholderType) -> Self {
        Self {
            shape_id,
            placeholder,
            paragraphs: Vec::new(),
            word_wrap: false,
        }
    }

    /// Replace the text frame content with a single level-0 paragraph.
    pub fn set_text(&mut self, text: &str) -> &mut Self {
        self.paragraphs.clear();
        self.add_paragraph(text, 0)
    }

    /// Append a paragraph at outline `level` (0 is the top level).
    pub fn add_paragraph(&mut self, text: &str, level: u8) -> &mut Self {
        self.paragraphs.push(TextParagraph {
            level,
            text: text.to_string(),
        });
        self
    }

    pub fn set_word_wrap(&mut self, wrap: bool) -> &mut Self {
        self.word_wrap = wrap;
        self
    }

    #[inline]
    pub fn placeholder(&self) -> PlaceholderType {
        self.placeholder
    }

    #[inline]
    pub fn paragraphs(&self) -> &[TextParagraph] {
        &self.paragraphs
    }

    /// Paragraph texts joined with newlines.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<p:sp>");
        xml.push_str("<p:nvSpPr>");
        write!(
            xml,
            r#"<p:cNvPr id="{}" name="{} {}"/>"#,
            self.shape_id,
            self.placeholder.name(),
            self.shape_id - 1
        )?;
        xml.push_str(r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>"#);
        write!(xml, "<p:nvPr>{}</p:nvPr>", self.placeholder.ph_xml())?;
        xml.push_str("</p:nvSpPr>");

        // Geometry comes from the layout placeholder
        xml.push_str("<p:spPr/>");

        xml.push_str("<p:txBody>");
        if self.word_wrap {
            xml.push_str(r#"<a:bodyPr wrap="square"/>"#);
        } else {
            xml.push_str("<a:bodyPr/>");
        }
        xml.push_str("<a:lstStyle/>");

        // A text body needs at least one paragraph
        if self.paragraphs.is_empty() {
            xml.push_str(r#"<a:p><a:endParaRPr lang="nl-NL" dirty="0"/></a:p>"#);
        }
        for para in &self.paragraphs {
            xml.push_str("<a:p>");
            if para.level > 0 {
                write!(xml, r#"<a:pPr lvl="{}"/>"#, para.level)?;
            }
            if para.text.is_empty() {
                xml.push_str(r#"<a:endParaRPr lang="nl-NL" dirty="0"/>"#);
            } else {
                xml.push_str("<a:r>");
                xml.push_str(r#"<a:rPr lang="nl-NL" dirty="0"/>"#);
                write!(xml, "<a:t>{}</a:t>", escape_text(&para.text)?)?;
                xml.push_str("</a:r>");
            }
            xml.push_str("</a:p>");
        }
        xml.push_str("</p:txBody>");

        xml.push_str("</p:sp>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(shape: &MutableShape) -> String {
        let mut xml = String::new();
        shape.to_xml(&mut xml).unwrap();
        xml
    }

    #[test]
    fn test_title_placeholder() {
        let mut shape = MutableShape::new_placeholder(2, PlaceholderType::CenterTitle);
        shape.set_text("Stage & CRM");
        let xml = render(&shape);
        assert!(xml.contains(r#"<p:cNvPr id="2" name="Title 1"/>"#));
        assert!(xml.contains(r#"<p:ph type="ctrTitle"/>"#));
        assert!(xml.contains("<a:t>Stage &amp; CRM</a:t>"));
    }

    #[test]
    fn test_levels_and_wrap() {
        let mut shape = MutableShape::new_placeholder(3, PlaceholderType::Body);
        shape
            .set_word_wrap(true)
            .add_paragraph("Kern", 0)
            .add_paragraph("Detail", 1);
        let xml = render(&shape);
        assert!(xml.contains(r#"<a:bodyPr wrap="square"/>"#));
        assert!(xml.contains(r#"<a:p><a:pPr lvl="1"/><a:r>"#));
        assert_eq!(xml.matches("<a:pPr").count(), 1);
        assert_eq!(shape.text(), "Kern\nDetail");
    }

    #[test]
    fn test_control_character_rejected() {
        let mut shape = MutableShape::new_placeholder(3, PlaceholderType::Body);
        shape.add_paragraph("Vragen?\u{1B}", 0);
        let mut xml = String::new();
        assert!(shape.to_xml(&mut xml).is_err());
    }

    #[test]
    fn test_empty_frame_keeps_paragraph() {
        let shape = MutableShape::new_placeholder(3, PlaceholderType::SubTitle);
        let xml = render(&shape);
        assert!(xml.contains(r#"<a:lstStyle/><a:p><a:endParaRPr"#));
    }
}
