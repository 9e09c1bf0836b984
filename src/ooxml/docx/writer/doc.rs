/// Document writer implementation for DOCX.
use crate::ooxml::error::{OoxmlError, Result};

use super::paragraph::MutableParagraph;
use super::section::SectionProperties;
use super::style::heading_style_id;
use super::table::MutableTable;

/// A mutable Word document body for writing.
///
/// Content is kept in insertion order; the section properties are always
/// written as the last child of `w:body`.
#[derive(Debug, Clone, Default)]
pub struct MutableDocument {
    body: DocumentBody,
    /// Section properties (page size and margins)
    section: SectionProperties,
}

impl MutableDocument {
    /// Create a new empty document with a US Letter section.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new paragraph to the end of the document.
    pub fn add_paragraph(&mut self) -> &mut MutableParagraph {
        self.body.add_paragraph()
    }

    /// Add a paragraph with text.
    pub fn add_paragraph_with_text(&mut self, text: &str) -> &mut MutableParagraph {
        let para = self.body.add_paragraph();
        para.add_run_with_text(text);
        para
    }

    /// Add a heading paragraph. Level 0 uses the "Title" style, 1-9 use
    /// "Heading N".
    pub fn add_heading(&mut self, text: &str, level: u8) -> Result<&mut MutableParagraph> {
        if level > 9 {
            return Err(OoxmlError::InvalidFormat(format!(
                "heading level must be 0-9, got {}",
                level
            )));
        }
        let para = self.body.add_paragraph();
        para.set_style(&heading_style_id(level));
        if !text.is_empty() {
            para.add_run_with_text(text);
        }
        Ok(para)
    }

    /// Add a table whose columns share the section's text width.
    pub fn add_table(&mut self, cols: usize) -> &mut MutableTable {
        let width = self.section.text_width();
        self.body.add_table(MutableTable::new(cols, width))
    }

    /// Add a paragraph holding a single page break run.
    pub fn add_page_break(&mut self) {
        self.body.add_paragraph().add_run().add_page_break();
    }

    /// Number of paragraphs and tables in the body.
    pub fn body_element_count(&self) -> usize {
        self.body.elements.len()
    }

    pub fn paragraph_count(&self) -> usize {
        self.body
            .elements
            .iter()
            .filter(|e| matches!(e, BodyElement::Paragraph(_)))
            .count()
    }

    pub fn table_count(&self) -> usize {
        self.body
            .elements
            .iter()
            .filter(|e| matches!(e, BodyElement::Table(_)))
            .count()
    }

    /// Generate the `word/document.xml` content.
    pub fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(4096);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#);
        xml.push_str("<w:body>");
        self.body.to_xml(&mut xml)?;
        // sectPr must be the last element in the body
        self.section.to_xml(&mut xml)?;
        xml.push_str("</w:body>");
        xml.push_str("</w:document>");
        Ok(xml)
    }
}

/// Document body containing block-level elements.
#[derive(Debug, Clone, Default)]
struct DocumentBody {
    elements: Vec<BodyElement>,
}

#[derive(Debug, Clone)]
enum BodyElement {
    Paragraph(MutableParagraph),
    Table(MutableTable),
}

impl DocumentBody {
    fn add_paragraph(&mut self) -> &mut MutableParagraph {
        self.elements
            .push(BodyElement::Paragraph(MutableParagraph::new()));
        match self.elements.last_mut() {
            Some(BodyElement::Paragraph(p)) => p,
            _ => unreachable!(),
        }
    }

    fn add_table(&mut self, table: MutableTable) -> &mut MutableTable {
        self.elements.push(BodyElement::Table(table));
        match self.elements.last_mut() {
            Some(BodyElement::Table(t)) => t,
            _ => unreachable!(),
        }
    }

    fn to_xml(&self, xml: &mut String) -> Result<()> {
        for element in &self.elements {
            match element {
                BodyElement::Paragraph(p) => p.to_xml(xml)?,
                BodyElement::Table(t) => t.to_xml(xml)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_is_last_body_child() {
        let mut doc = MutableDocument::new();
        doc.add_heading("Business Case", 0).unwrap();
        doc.add_paragraph_with_text("Inleiding");
        doc.add_table(2).add_row();

        let xml = doc.to_xml().unwrap();
        assert!(xml.ends_with("</w:sectPr></w:body></w:document>"));
        assert!(xml.contains(r#"<w:pStyle w:val="Title"/>"#));
        assert_eq!(doc.body_element_count(), 3);
        assert_eq!(doc.paragraph_count(), 2);
        assert_eq!(doc.table_count(), 1);
    }

    #[test]
    fn test_heading_level_bounds() {
        let mut doc = MutableDocument::new();
        assert!(doc.add_heading("x", 9).is_ok());
        assert!(doc.add_heading("x", 10).is_err());
        assert_eq!(doc.body_element_count(), 1);
    }

    #[test]
    fn test_table_uses_text_width() {
        let mut doc = MutableDocument::new();
        let table = doc.add_table(4);
        assert_eq!(table.grid, vec![2340; 4]);
    }

    #[test]
    fn test_page_break_paragraph() {
        let mut doc = MutableDocument::new();
        doc.add_page_break();
        let xml = doc.to_xml().unwrap();
        assert!(xml.contains(r#"<w:p><w:r><w:br w:type="page"/></w:r></w:p>"#));
    }
}
