/// Table types and implementation for DOCX documents.
use crate::common::xml::escape_xml;
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

use super::paragraph::MutableParagraph;

/// Single-line border applied to every side of a table.
#[derive(Debug, Clone)]
pub struct TableBorder {
    /// Border width in eighths of a point (e.g., 8 = 1pt)
    pub size: u32,
    /// Border color in hex RGB format
    pub color: String,
}

impl Default for TableBorder {
    fn default() -> Self {
        Self {
            size: 4,
            color: "auto".to_string(),
        }
    }
}

impl TableBorder {
    /// Write the six `w:tblBorders` children with this border.
    pub(crate) fn write_all_sides(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:tblBorders>");
        for side in ["top", "left", "bottom", "right", "insideH", "insideV"] {
            write!(
                xml,
                "<w:{} w:val=\"single\" w:sz=\"{}\" w:space=\"0\" w:color=\"{}\"/>",
                side,
                self.size,
                self.color
            )?;
        }
        xml.push_str("</w:tblBorders>");
        Ok(())
    }
}

/// Table properties.
#[derive(Debug, Clone, Default)]
pub(crate) struct TableProperties {
    /// Table style ID; without one the table gets single borders
    pub(crate) style: Option<String>,
}

/// A mutable table with a fixed column grid.
#[derive(Debug, Clone)]
pub struct MutableTable {
    /// Grid column widths in twips
    pub(crate) grid: Vec<u32>,
    /// Whether widths were fixed by the caller
    pub(crate) fixed_layout: bool,
    pub(crate) rows: Vec<MutableRow>,
    pub(crate) properties: TableProperties,
}

impl MutableTable {
    /// Create a table whose `cols` columns share `text_width` twips evenly.
    pub(crate) fn new(cols: usize, text_width: u32) -> Self {
        let col_width = text_width / cols.max(1) as u32;
        Self {
            grid: vec![col_width; cols],
            fixed_layout: false,
            rows: Vec::new(),
            properties: TableProperties::default(),
        }
    }

    /// Fix column widths in twips. Every cell of every row takes the width
    /// of its grid column.
    pub fn set_column_widths(&mut self, widths: Vec<u32>) {
        self.grid = widths;
        self.fixed_layout = true;
    }

    pub fn set_style(&mut self, style_id: &str) {
        self.properties.style = Some(style_id.to_string());
    }

    /// Add a row with one empty cell per grid column.
    pub fn add_row(&mut self) -> &mut MutableRow {
        let cells = self.grid.len();
        self.rows.push(MutableRow::new(cells));
        let last = self.rows.len() - 1;
        &mut self.rows[last]
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:tbl>");

        xml.push_str("<w:tblPr>");
        if let Some(ref style) = self.properties.style {
            write!(xml, "<w:tblStyle w:val=\"{}\"/>", escape_xml(style))?;
        }
        if self.fixed_layout {
            let total: u32 = self.grid.iter().sum();
            write!(xml, "<w:tblW w:w=\"{}\" w:type=\"dxa\"/>", total)?;
        } else {
            xml.push_str("<w:tblW w:w=\"0\" w:type=\"auto\"/>");
        }
        if self.properties.style.is_none() {
            TableBorder::default().write_all_sides(xml)?;
        }
        if self.fixed_layout {
            xml.push_str("<w:tblLayout w:type=\"fixed\"/>");
        }
        xml.push_str("<w:tblLook w:val=\"04A0\" w:firstRow=\"1\" w:lastRow=\"0\" w:firstColumn=\"1\" w:lastColumn=\"0\" w:noHBand=\"0\" w:noVBand=\"1\"/>");
        xml.push_str("</w:tblPr>");

        xml.push_str("<w:tblGrid>");
        for width in &self.grid {
            write!(xml, "<w:gridCol w:w=\"{}\"/>", width)?;
        }
        xml.push_str("</w:tblGrid>");

        for row in &self.rows {
            row.to_xml(xml, &self.grid)?;
        }

        xml.push_str("</w:tbl>");
        Ok(())
    }
}

/// A mutable table row.
#[derive(Debug, Clone)]
pub struct MutableRow {
    pub(crate) cells: Vec<MutableCell>,
}

impl MutableRow {
    pub(crate) fn new(cols: usize) -> Self {
        Self {
            cells: (0..cols).map(|_| MutableCell::new()).collect(),
        }
    }

    pub fn cell(&mut self, index: usize) -> Option<&mut MutableCell> {
        self.cells.get_mut(index)
    }

    pub(crate) fn to_xml(&self, xml: &mut String, grid: &[u32]) -> Result<()> {
        xml.push_str("<w:tr>");
        for (cell, width) in self.cells.iter().zip(grid) {
            cell.to_xml(xml, *width)?;
        }
        xml.push_str("</w:tr>");
        Ok(())
    }
}

/// A mutable table cell.
#[derive(Debug, Clone)]
pub struct MutableCell {
    pub(crate) paragraphs: Vec<MutableParagraph>,
}

impl MutableCell {
    pub(crate) fn new() -> Self {
        Self {
            paragraphs: Vec::new(),
        }
    }

    /// Add a new paragraph to the cell.
    pub fn add_paragraph(&mut self) -> &mut MutableParagraph {
        self.paragraphs.push(MutableParagraph::new());
        let last = self.paragraphs.len() - 1;
        &mut self.paragraphs[last]
    }

    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Replace the cell content with a single text paragraph.
    pub fn set_text(&mut self, text: &str) {
        self.paragraphs.clear();
        self.add_paragraph().add_run_with_text(text);
    }

    /// A cell must end with a paragraph, so an empty cell gets an empty one.
    pub(crate) fn to_xml(&self, xml: &mut String, width: u32) -> Result<()> {
        xml.push_str("<w:tc>");
        write!(xml, "<w:tcPr><w:tcW w:w=\"{}\" w:type=\"dxa\"/></w:tcPr>", width)?;

        if self.paragraphs.is_empty() {
            xml.push_str("<w:p/>");
        }
        for para in &self.paragraphs {
            para.to_xml(xml)?;
        }

        xml.push_str("</w:tc>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(table: &MutableTable) -> String {
        let mut xml = String::new();
        table.to_xml(&mut xml).unwrap();
        xml
    }

    #[test]
    fn test_fixed_widths_reach_every_cell() {
        let mut table = MutableTable::new(3, 9360);
        table.set_column_widths(vec![1440, 6480, 1152]);
        table.set_style("TableGrid");
        table.add_row().cell(0).unwrap().set_text("Slide");
        table.add_row();

        let xml = render(&table);
        assert!(
            xml.contains("<w:tblStyle w:val=\"TableGrid\"/><w:tblW w:w=\"9072\" w:type=\"dxa\"/>")
        );
        assert!(xml.contains("<w:gridCol w:w=\"6480\"/>"));
        assert_eq!(xml.matches("<w:tcW w:w=\"6480\" w:type=\"dxa\"/>").count(), 2);
        assert_eq!(xml.matches("<w:tc>").count(), 6);
        assert!(!xml.contains("<w:tblBorders>"));
    }

    #[test]
    fn test_empty_cell_gets_paragraph() {
        let mut table = MutableTable::new(1, 9360);
        table.add_row();
        let xml = render(&table);
        assert!(xml.contains("</w:tcPr><w:p/></w:tc>"));
    }

    #[test]
    fn test_unstyled_table_has_borders() {
        let mut table = MutableTable::new(2, 9360);
        table.add_row();
        let xml = render(&table);
        assert!(xml.contains("<w:tblBorders><w:top w:val=\"single\""));
        assert!(xml.contains("<w:gridCol w:w=\"4680\"/>"));
        assert_eq!(xml.matches("<w:tr>").count(), 1);
    }
}
