/// Outline to WordprocessingML rendering.
use std::path::Path;

use super::Render;
use crate::common::{Error, Length, Result};
use crate::ooxml;
use crate::ooxml::docx::Package;
use crate::ooxml::docx::writer::{MutableParagraph, style_id_from_name};
use crate::ooxml::inspect::inspect_docx;
use crate::outline::{Block, Heading, Outline, Paragraph, ParagraphStyle, Table};

const LIST_BULLET_STYLE: &str = "ListBullet";

/// Build the .docx package for `outline`.
///
/// Blocks map to body elements in order: a heading, paragraph, page break
/// or spacer becomes one paragraph, a bullet list one paragraph per item,
/// and a table one table.
pub fn build_package(outline: &Outline) -> ooxml::Result<Package> {
    let base_font = outline
        .base_font()
        .map(|font| (font.family.as_str(), half_points(font.size)));
    let mut pkg = Package::with_base_font(outline.title(), base_font);
    let doc = pkg.document_mut();

    for block in outline.blocks() {
        match block {
            Block::Heading(heading) => write_heading(doc.add_heading("", heading.level)?, heading),
            Block::Paragraph(paragraph) => write_paragraph(doc.add_paragraph(), paragraph),
            Block::BulletList(items) => {
                for item in items {
                    write_paragraph(doc.add_paragraph(), item);
                }
            },
            Block::Table(table) => write_table(doc.add_table(table.columns()), table),
            Block::PageBreak => doc.add_page_break(),
            Block::Spacer => {
                doc.add_paragraph();
            },
        }
    }

    log::debug!(
        "built document '{}' with {} body elements",
        outline.title(),
        doc.body_element_count()
    );
    Ok(pkg)
}

/// The heading's color and size apply to every run it produces.
fn write_heading(para: &mut MutableParagraph, heading: &Heading) {
    if let Some(alignment) = heading.alignment {
        para.set_alignment(alignment.into());
    }
    if heading.text.is_empty() {
        return;
    }
    let run = para.add_run_with_text(&heading.text);
    if let Some(color) = heading.color {
        run.color(color);
    }
    if let Some(size) = heading.size {
        run.font_size(half_points(size));
    }
}

fn write_paragraph(para: &mut MutableParagraph, paragraph: &Paragraph) {
    if paragraph.style == ParagraphStyle::ListBullet {
        para.set_style(LIST_BULLET_STYLE);
    }
    if let Some(alignment) = paragraph.alignment {
        para.set_alignment(alignment.into());
    }
    if let Some(space) = paragraph.space_before {
        para.set_space_before(twips(space));
    }
    if let Some(space) = paragraph.space_after {
        para.set_space_after(twips(space));
    }

    for run in &paragraph.runs {
        let target = para.add_run_with_text(&run.text);
        target.bold(run.bold).italic(run.italic);
        if let Some(color) = run.color {
            target.color(color);
        }
        if let Some(size) = run.size {
            target.font_size(half_points(size));
        }
        if let Some(font) = &run.font {
            target.font_name(font);
        }
    }
}

fn write_table(target: &mut ooxml::docx::MutableTable, table: &Table) {
    if let Some(widths) = table.widths() {
        target.set_column_widths(widths.iter().copied().map(twips).collect());
    }
    if let Some(style) = table.style() {
        target.set_style(&style_id_from_name(style));
    }

    for row in table.rows() {
        let target_row = target.add_row();
        for (index, cell) in row.cells.iter().enumerate() {
            // Rows are validated against the column count when the table is built
            let Some(target_cell) = target_row.cell(index) else {
                continue;
            };
            for paragraph in &cell.paragraphs {
                write_paragraph(target_cell.add_paragraph(), paragraph);
            }
        }
    }
}

#[inline]
fn twips(length: Length) -> u32 {
    u32::try_from(length.twips()).unwrap_or(0)
}

#[inline]
fn half_points(length: Length) -> u32 {
    u32::try_from(length.half_points()).unwrap_or(0)
}

impl Render for Outline {
    fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(build_package(self)?.to_bytes()?)
    }

    fn write_to(&self, path: &Path) -> Result<()> {
        build_package(self)?.save(path)?;
        Ok(())
    }

    fn verify(&self, path: &Path) -> Result<()> {
        let summary = inspect_docx(path)?;
        let expected = self.body_element_count();
        let found = summary.body_element_count();
        if expected != found {
            return Err(Error::Verification {
                file: path.display().to_string(),
                what: "body elements",
                expected,
                found,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RGBColor;
    use crate::ooxml::docx::writer::ParagraphAlignment;
    use crate::ooxml::inspect::{BodyBlock, inspect_docx_bytes};
    use crate::outline::{Alignment, OutlineBuilder, Run, TableBuilder};

    fn summarize(outline: &Outline) -> crate::ooxml::inspect::DocumentSummary {
        inspect_docx_bytes(outline.to_bytes().unwrap()).unwrap()
    }

    #[test]
    fn test_empty_outline_renders() {
        let outline = OutlineBuilder::new("Leeg").build().unwrap();
        let summary = summarize(&outline);
        assert_eq!(summary.body_element_count(), 0);
        assert_eq!(summary.title.as_deref(), Some("Leeg"));
    }

    #[test]
    fn test_heading_override_on_every_run() {
        let outline = OutlineBuilder::new("Doc")
            .heading(
                Heading::new("1. Wat is AVE CRM?", 1)
                    .color(RGBColor::new(128, 4, 0))
                    .size_pt(14.0),
            )
            .build()
            .unwrap();
        let summary = summarize(&outline);
        let heading = summary.paragraphs().next().unwrap();
        assert_eq!(heading.style.as_deref(), Some("Heading1"));
        assert!(!heading.runs.is_empty());
        for run in &heading.runs {
            assert_eq!(run.color.as_deref(), Some("800400"));
            assert_eq!(run.size, Some(28));
        }
    }

    #[test]
    fn test_block_accounting() {
        let outline = OutlineBuilder::new("Doc")
            .heading(Heading::new("Titel", 0).align(Alignment::Center))
            .paragraph(Paragraph::new().run(Run::new("Betreft:").bold()).text(" analyse"))
            .bullets(["een", "twee", "drie"].map(Paragraph::plain))
            .page_break()
            .table(TableBuilder::new(2).row(["a", "b"]))
            .spacer()
            .build()
            .unwrap();
        let summary = summarize(&outline);
        assert_eq!(summary.body_element_count(), outline.body_element_count());
        assert_eq!(summary.body_element_count(), 8);

        let bullets: Vec<_> = summary
            .paragraphs()
            .filter(|p| p.style.as_deref() == Some(LIST_BULLET_STYLE))
            .collect();
        assert_eq!(bullets.len(), 3);
        assert!(summary.paragraphs().any(|p| p.page_break));
    }

    #[test]
    fn test_run_formatting() {
        let outline = OutlineBuilder::new("Doc")
            .paragraph(
                Paragraph::new()
                    .run(
                        Run::new("--- [KLIK] NAAR VOLGENDE SLIDE ---")
                            .bold()
                            .color(RGBColor::new(200, 0, 0))
                            .size_pt(12.0),
                    )
                    .align(Alignment::Center)
                    .space_before_pt(12.0)
                    .space_after_pt(12.0),
            )
            .build()
            .unwrap();
        let summary = summarize(&outline);
        let para = summary.find_paragraph("--- [KLIK] NAAR VOLGENDE SLIDE ---").unwrap();
        assert_eq!(para.alignment, Some(ParagraphAlignment::Center));
        let run = &para.runs[0];
        assert!(run.bold);
        assert!(!run.italic);
        assert_eq!(run.color.as_deref(), Some("C80000"));
        assert_eq!(run.size, Some(24));
    }

    #[test]
    fn test_table_widths_and_rows() {
        let outline = OutlineBuilder::new("Doc")
            .table(
                TableBuilder::new(3)
                    .widths([
                        Length::from_inches(1.0),
                        Length::from_inches(4.5),
                        Length::from_inches(0.8),
                    ])
                    .style("Table Grid")
                    .row(["Slide", "Kernboodschap", "Tijd"])
                    .row(["1. Titel", "Welkom", "0:30"]),
            )
            .build()
            .unwrap();
        let summary = summarize(&outline);
        match &summary.blocks[0] {
            BodyBlock::Table(table) => {
                assert_eq!(table.grid, vec![1440, 6480, 1152]);
                assert_eq!(table.row_cell_counts(), vec![3, 3]);
                assert_eq!(table.rows[1][2], "0:30");
            },
            other => panic!("expected a table, got {other:?}"),
        }
    }

    #[test]
    fn test_base_font_in_styles() {
        let outline = OutlineBuilder::new("Doc").base_font("Arial", 11.0).build().unwrap();
        let pkg = build_package(&outline).unwrap();
        let normal = pkg.styles().iter().find(|s| s.style_id() == "Normal").unwrap();
        let mut xml = String::new();
        normal.to_xml(&mut xml).unwrap();
        assert!(xml.contains("Arial"));
        assert!(xml.contains(r#"<w:sz w:val="22"/>"#));
    }

    #[test]
    fn test_control_character_fails_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bel.docx");
        let outline = OutlineBuilder::new("Doc")
            .paragraph(Paragraph::plain("bel\u{7}tekst"))
            .build()
            .unwrap();
        let err = crate::render::render(&outline, &path).unwrap_err();
        assert!(matches!(err, Error::InvalidFormat(_)));
        assert!(!path.exists());
    }
}
