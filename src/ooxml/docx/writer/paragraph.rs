/// Paragraph types and implementation for DOCX documents.
use crate::common::xml::escape_xml;
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

pub use super::super::format::ParagraphAlignment;
use super::run::MutableRun;

/// A mutable paragraph in a document.
#[derive(Debug, Clone)]
pub struct MutableParagraph {
    pub(crate) runs: Vec<MutableRun>,
    /// Paragraph style ID
    pub(crate) style: Option<String>,
    pub(crate) properties: ParagraphProperties,
}

impl MutableParagraph {
    pub(crate) fn new() -> Self {
        Self {
            runs: Vec::new(),
            style: None,
            properties: ParagraphProperties::default(),
        }
    }

    /// Add a new run to the paragraph.
    pub fn add_run(&mut self) -> &mut MutableRun {
        self.runs.push(MutableRun::new());
        let last = self.runs.len() - 1;
        &mut self.runs[last]
    }

    /// Add a run with text.
    pub fn add_run_with_text(&mut self, text: &str) -> &mut MutableRun {
        let run = self.add_run();
        run.set_text(text);
        run
    }

    /// Set the paragraph style by style ID.
    pub fn set_style(&mut self, style_id: &str) {
        self.style = Some(style_id.to_string());
    }

    pub fn set_alignment(&mut self, alignment: ParagraphAlignment) {
        self.properties.alignment = Some(alignment);
    }

    /// Set spacing before this paragraph in twips.
    pub fn set_space_before(&mut self, twips: u32) {
        self.properties.space_before = Some(twips);
    }

    /// Set spacing after this paragraph in twips.
    pub fn set_space_after(&mut self, twips: u32) {
        self.properties.space_after = Some(twips);
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        let has_ppr = self.style.is_some() || self.properties.has_properties();
        if !has_ppr && self.runs.is_empty() {
            xml.push_str("<w:p/>");
            return Ok(());
        }

        xml.push_str("<w:p>");

        if has_ppr {
            xml.push_str("<w:pPr>");

            if let Some(ref style) = self.style {
                write!(xml, "<w:pStyle w:val=\"{}\"/>", escape_xml(style))?;
            }

            if self.properties.space_before.is_some() || self.properties.space_after.is_some() {
                xml.push_str("<w:spacing");
                if let Some(before) = self.properties.space_before {
                    write!(xml, " w:before=\"{}\"", before)?;
                }
                if let Some(after) = self.properties.space_after {
                    write!(xml, " w:after=\"{}\"", after)?;
                }
                xml.push_str("/>");
            }

            if let Some(alignment) = self.properties.alignment {
                write!(xml, "<w:jc w:val=\"{}\"/>", alignment.as_str())?;
            }

            xml.push_str("</w:pPr>");
        }

        for run in &self.runs {
            run.to_xml(xml)?;
        }

        xml.push_str("</w:p>");
        Ok(())
    }
}

/// Paragraph properties.
#[derive(Debug, Clone, Default)]
pub(crate) struct ParagraphProperties {
    pub(crate) alignment: Option<ParagraphAlignment>,
    pub(crate) space_before: Option<u32>,
    pub(crate) space_after: Option<u32>,
}

impl ParagraphProperties {
    pub(crate) fn has_properties(&self) -> bool {
        self.alignment.is_some()
            || self.space_before.is_some()
            || self.space_after.is_some()
    }
}
