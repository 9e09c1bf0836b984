/// Run types and implementation for DOCX documents.
use crate::common::RGBColor;
use crate::ooxml::error::Result;
use crate::ooxml::escape_text;
use std::fmt::Write as FmtWrite;

/// Run content type.
#[derive(Debug, Clone, PartialEq)]
pub enum RunContent {
    /// Text; `'\n'` becomes a line break and `'\t'` a tab
    Text(String),
    /// Page break
    PageBreak,
}

/// A mutable run.
///
/// Runs contain text and character formatting.
#[derive(Debug, Clone)]
pub struct MutableRun {
    pub(crate) content: RunContent,
    pub(crate) properties: RunProperties,
}

impl MutableRun {
    pub(crate) fn new() -> Self {
        Self {
            content: RunContent::Text(String::new()),
            properties: RunProperties::default(),
        }
    }

    /// Set the text content.
    pub fn set_text(&mut self, text: &str) -> &mut Self {
        self.content = RunContent::Text(text.to_string());
        self
    }

    pub fn bold(&mut self, bold: bool) -> &mut Self {
        self.properties.bold = bold;
        self
    }

    pub fn italic(&mut self, italic: bool) -> &mut Self {
        self.properties.italic = italic;
        self
    }

    /// Set font size in half-points (e.g., 24 = 12pt).
    pub fn font_size(&mut self, size: u32) -> &mut Self {
        self.properties.font_size = Some(size);
        self
    }

    pub fn font_name(&mut self, name: &str) -> &mut Self {
        self.properties.font_name = Some(name.to_string());
        self
    }

    pub fn color(&mut self, color: RGBColor) -> &mut Self {
        self.properties.color = Some(color);
        self
    }

    /// Turn this run into a page break.
    pub fn add_page_break(&mut self) -> &mut Self {
        self.content = RunContent::PageBreak;
        self
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:r>");
        self.properties.to_xml(xml)?;

        match &self.content {
            RunContent::Text(text) => write_text(xml, text)?,
            RunContent::PageBreak => xml.push_str("<w:br w:type=\"page\"/>"),
        }

        xml.push_str("</w:r>");
        Ok(())
    }
}

/// Write run text, splitting on line breaks and tabs.
fn write_text(xml: &mut String, text: &str) -> Result<()> {
    let mut segment_start = 0;
    for (idx, ch) in text.char_indices() {
        let marker = match ch {
            '\n' => "<w:br/>",
            '\t' => "<w:tab/>",
            _ => continue,
        };
        push_text_segment(xml, &text[segment_start..idx])?;
        xml.push_str(marker);
        segment_start = idx + ch.len_utf8();
    }
    push_text_segment(xml, &text[segment_start..])
}

#[inline]
fn push_text_segment(xml: &mut String, segment: &str) -> Result<()> {
    if !segment.is_empty() {
        xml.push_str("<w:t xml:space=\"preserve\">");
        xml.push_str(&escape_text(segment)?);
        xml.push_str("</w:t>");
    }
    Ok(())
}

/// Run properties.
#[derive(Debug, Clone, Default)]
pub(crate) struct RunProperties {
    pub(crate) bold: bool,
    pub(crate) italic: bool,
    pub(crate) font_size: Option<u32>,
    pub(crate) font_name: Option<String>,
    pub(crate) color: Option<RGBColor>,
}

impl RunProperties {
    pub(crate) fn has_properties(&self) -> bool {
        self.bold
            || self.italic
            || self.font_size.is_some()
            || self.font_name.is_some()
            || self.color.is_some()
    }

    /// Write `w:rPr`, children in schema order.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        if !self.has_properties() {
            return Ok(());
        }

        xml.push_str("<w:rPr>");
        if let Some(ref font_name) = self.font_name {
            let font_name = escape_text(font_name)?;
            write!(
                xml,
                "<w:rFonts w:ascii=\"{0}\" w:hAnsi=\"{0}\" w:cs=\"{0}\"/>",
                font_name
            )?;
        }
        if self.bold {
            xml.push_str("<w:b/>");
        }
        if self.italic {
            xml.push_str("<w:i/>");
        }
        if let Some(color) = self.color {
            write!(xml, "<w:color w:val=\"{}\"/>", color.to_hex())?;
        }
        if let Some(size) = self.font_size {
            write!(xml, "<w:sz w:val=\"{0}\"/><w:szCs w:val=\"{0}\"/>", size)?;
        }
        xml.push_str("</w:rPr>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn render(run: &MutableRun) -> String {
        let mut xml = String::new();
        run.to_xml(&mut xml).unwrap();
        xml
    }

    #[test]
    fn test_property_order() {
        let mut run = MutableRun::new();
        run.set_text("KLIK")
            .font_size(24)
            .color(RGBColor::new(200, 0, 0))
            .bold(true)
            .font_name("Arial");

        let xml = render(&run);
        let fonts = xml.find("<w:rFonts").unwrap();
        let bold = xml.find("<w:b/>").unwrap();
        let color = xml.find("<w:color w:val=\"C80000\"/>").unwrap();
        let size = xml.find("<w:sz w:val=\"24\"/>").unwrap();
        assert!(fonts < bold && bold < color && color < size);
    }

    #[test]
    fn test_line_breaks_and_tabs() {
        let mut run = MutableRun::new();
        run.set_text("Betreft:\tanalyse\n");
        assert_eq!(
            render(&run),
            "<w:r><w:t xml:space=\"preserve\">Betreft:</w:t><w:tab/>\
             <w:t xml:space=\"preserve\">analyse</w:t><w:br/></w:r>"
        );
    }

    #[test]
    fn test_page_break() {
        let mut run = MutableRun::new();
        run.add_page_break();
        assert_eq!(render(&run), "<w:r><w:br w:type=\"page\"/></w:r>");
    }

    #[test]
    fn test_plain_run_has_no_properties() {
        let mut run = MutableRun::new();
        run.set_text("a & b");
        let xml = render(&run);
        assert!(!xml.contains("<w:rPr>"));
        assert!(xml.contains("a &amp; b"));
    }

    #[test]
    fn test_control_character_rejected() {
        let mut run = MutableRun::new();
        run.set_text("bel\u{7}tekst");
        let mut xml = String::new();
        let err = run.to_xml(&mut xml).unwrap_err();
        assert!(matches!(err, crate::ooxml::OoxmlError::InvalidFormat(_)));
    }

    proptest! {
        #[test]
        fn prop_every_line_becomes_one_break(text in "[a-z<&\n\t ]{0,40}") {
            let mut run = MutableRun::new();
            run.set_text(&text);
            let xml = render(&run);
            prop_assert_eq!(xml.matches("<w:br/>").count(), text.matches('\n').count());
            prop_assert_eq!(xml.matches("<w:tab/>").count(), text.matches('\t').count());
            prop_assert!(!xml.contains("<&"));
        }
    }
}
