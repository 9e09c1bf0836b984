//! Read-back inspection of generated packages.
//!
//! Reopens a .docx or .pptx and summarizes what a reader of the file would
//! see: the top-level body blocks of a document, or the slides of a deck.
//! Only the markup this crate writes is understood; anything else is
//! skipped.

use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::common::xml::unescape_xml;
use crate::ooxml::docx::format::ParagraphAlignment;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::relationship_type as rt;
use crate::ooxml::opc::packuri::PACKAGE_URI;
use crate::ooxml::opc::phys_pkg::PhysPkgReader;
use crate::ooxml::opc::{PackURI, Relationships};
use crate::ooxml::part_uri;

/// Formatting and text of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    /// Hex RGB, as written in `w:color`
    pub color: Option<String>,
    /// Size in half-points
    pub size: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParagraphSummary {
    pub style: Option<String>,
    pub alignment: Option<ParagraphAlignment>,
    pub runs: Vec<RunSummary>,
    pub page_break: bool,
}

impl ParagraphSummary {
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(|r| r.text.is_empty()) && !self.page_break
    }
}

/// Grid and cell text of a table. Paragraphs inside a cell are joined
/// with newlines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableSummary {
    /// Grid column widths in twips
    pub grid: Vec<u32>,
    pub rows: Vec<Vec<String>>,
}

impl TableSummary {
    pub fn columns(&self) -> usize {
        self.grid.len()
    }

    pub fn row_cell_counts(&self) -> Vec<usize> {
        self.rows.iter().map(Vec::len).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyBlock {
    Paragraph(ParagraphSummary),
    Table(TableSummary),
}

/// Summary of a WordprocessingML package.
#[derive(Debug, Clone, Default)]
pub struct DocumentSummary {
    /// `dc:title` from the core properties
    pub title: Option<String>,
    pub blocks: Vec<BodyBlock>,
}

impl DocumentSummary {
    /// Number of top-level paragraphs and tables.
    pub fn body_element_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn paragraphs(&self) -> impl Iterator<Item = &ParagraphSummary> {
        self.blocks.iter().filter_map(|b| match b {
            BodyBlock::Paragraph(p) => Some(p),
            BodyBlock::Table(_) => None,
        })
    }

    pub fn tables(&self) -> impl Iterator<Item = &TableSummary> {
        self.blocks.iter().filter_map(|b| match b {
            BodyBlock::Table(t) => Some(t),
            BodyBlock::Paragraph(_) => None,
        })
    }

    /// First paragraph whose text equals `text`.
    pub fn find_paragraph(&self, text: &str) -> Option<&ParagraphSummary> {
        self.paragraphs().find(|p| p.text() == text)
    }
}

/// Text of one slide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideSummary {
    pub title: String,
    /// Uses the centered-title placeholder of the Title Slide layout
    pub is_title_slide: bool,
    /// Body (or subtitle) paragraphs as `(level, text)`
    pub paragraphs: Vec<(u8, String)>,
}

/// Summary of a PresentationML package.
#[derive(Debug, Clone, Default)]
pub struct DeckSummary {
    pub title: Option<String>,
    /// Slide size in EMUs
    pub slide_size: (i64, i64),
    pub slides: Vec<SlideSummary>,
}

impl DeckSummary {
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }
}

/// Summarize the .docx at `path`.
pub fn inspect_docx<P: AsRef<Path>>(path: P) -> Result<DocumentSummary> {
    summarize_docx(PhysPkgReader::open(path)?)
}

pub fn inspect_docx_bytes(data: Vec<u8>) -> Result<DocumentSummary> {
    summarize_docx(PhysPkgReader::from_bytes(data)?)
}

/// Summarize the .pptx at `path`.
pub fn inspect_pptx<P: AsRef<Path>>(path: P) -> Result<DeckSummary> {
    summarize_pptx(PhysPkgReader::open(path)?)
}

pub fn inspect_pptx_bytes(data: Vec<u8>) -> Result<DeckSummary> {
    summarize_pptx(PhysPkgReader::from_bytes(data)?)
}

fn summarize_docx(mut reader: PhysPkgReader) -> Result<DocumentSummary> {
    let pkg_rels = package_rels(&mut reader)?;
    let main_uri = pkg_rels.target_partname(pkg_rels.part_with_reltype(rt::OFFICE_DOCUMENT)?)?;
    let blob = reader.blob_for(&main_uri)?;

    Ok(DocumentSummary {
        title: core_title(&mut reader, &pkg_rels)?,
        blocks: BodyReader::default().read(&blob)?,
    })
}

fn summarize_pptx(mut reader: PhysPkgReader) -> Result<DeckSummary> {
    let pkg_rels = package_rels(&mut reader)?;
    let main_uri = pkg_rels.target_partname(pkg_rels.part_with_reltype(rt::OFFICE_DOCUMENT)?)?;
    let main_rels = part_rels(&mut reader, &main_uri)?;
    let (slide_rel_ids, slide_size) = read_presentation(&reader.blob_for(&main_uri)?)?;

    let mut slides = Vec::with_capacity(slide_rel_ids.len());
    for r_id in slide_rel_ids {
        let rel = main_rels
            .get(&r_id)
            .ok_or_else(|| OoxmlError::PartNotFound(format!("slide relationship {}", r_id)))?;
        let slide_uri = main_rels.target_partname(rel)?;
        slides.push(SlideReader::default().read(&reader.blob_for(&slide_uri)?)?);
    }

    Ok(DeckSummary {
        title: core_title(&mut reader, &pkg_rels)?,
        slide_size,
        slides,
    })
}

fn package_rels(reader: &mut PhysPkgReader) -> Result<Relationships> {
    let uri = part_uri(PACKAGE_URI)?;
    part_rels(reader, &uri)
}

fn part_rels(reader: &mut PhysPkgReader, uri: &PackURI) -> Result<Relationships> {
    match reader.rels_xml_for(uri)? {
        Some(xml) => Ok(Relationships::from_xml(uri.base_uri(), &xml)?),
        None => Ok(Relationships::new(uri.base_uri())),
    }
}

fn core_title(reader: &mut PhysPkgReader, pkg_rels: &Relationships) -> Result<Option<String>> {
    let Ok(rel) = pkg_rels.part_with_reltype(rt::CORE_PROPERTIES) else {
        return Ok(None);
    };
    let blob = reader.blob_for(&pkg_rels.target_partname(rel)?)?;

    let mut xml = Reader::from_reader(blob.as_slice());
    let mut buf = Vec::new();
    let mut raw: Option<String> = None;
    loop {
        match xml.read_event_into(&mut buf)? {
            Event::Start(e) if e.local_name().as_ref() == b"title" => raw = Some(String::new()),
            Event::Text(t) => {
                if let Some(raw) = raw.as_mut() {
                    raw.push_str(&String::from_utf8_lossy(&t));
                }
            },
            Event::GeneralRef(r) => {
                if let Some(raw) = raw.as_mut() {
                    push_entity(raw, &r);
                }
            },
            Event::End(e) if e.local_name().as_ref() == b"title" => {
                return Ok(raw.map(|r| unescape_xml(&r)));
            },
            Event::Eof => return Ok(None),
            _ => {},
        }
        buf.clear();
    }
}

/// Read the slide relationship IDs and the slide size from presentation.xml.
fn read_presentation(blob: &[u8]) -> Result<(Vec<String>, (i64, i64))> {
    let mut xml = Reader::from_reader(blob);
    let mut buf = Vec::new();
    let mut r_ids = Vec::new();
    let mut size = (0, 0);

    loop {
        match xml.read_event_into(&mut buf)? {
            Event::Start(e) | Event::Empty(e) => match e.local_name().as_ref() {
                b"sldId" => {
                    if let Some(r_id) = attr_qname(&e, b"r:id")? {
                        r_ids.push(r_id);
                    }
                },
                b"sldSz" => {
                    size = (
                        attr_parse(&e, b"cx")?.unwrap_or(0),
                        attr_parse(&e, b"cy")?.unwrap_or(0),
                    );
                },
                _ => {},
            },
            Event::Eof => break,
            _ => {},
        }
        buf.clear();
    }

    Ok((r_ids, size))
}

/// Value of the attribute whose local name is `local`.
fn attr(e: &BytesStart<'_>, local: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.local_name().as_ref() == local {
            return Ok(Some(unescape_xml(std::str::from_utf8(&attr.value)?)));
        }
    }
    Ok(None)
}

/// Value of the attribute with the exact qualified name `qname`.
fn attr_qname(e: &BytesStart<'_>, qname: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == qname {
            return Ok(Some(unescape_xml(std::str::from_utf8(&attr.value)?)));
        }
    }
    Ok(None)
}

fn attr_parse<T: std::str::FromStr>(e: &BytesStart<'_>, local: &[u8]) -> Result<Option<T>> {
    Ok(attr(e, local)?.and_then(|v| v.parse().ok()))
}

/// On/off toggle such as `<w:b/>` or `<w:b w:val="0"/>`.
fn toggle(e: &BytesStart<'_>) -> Result<bool> {
    Ok(!matches!(
        attr(e, b"val")?.as_deref(),
        Some("0" | "false" | "off")
    ))
}

fn push_entity(raw: &mut String, name: &[u8]) {
    raw.push('&');
    raw.push_str(&String::from_utf8_lossy(name));
    raw.push(';');
}

/// Streaming reader for `w:body`.
#[derive(Default)]
struct BodyReader {
    blocks: Vec<BodyBlock>,
    /// Nesting depth of `w:tbl`
    table_depth: usize,
    paragraph: Option<ParagraphSummary>,
    run: Option<RunSummary>,
    table: Option<TableSummary>,
    cell: Option<String>,
    cell_paragraphs: usize,
    in_run: bool,
    in_text: bool,
    raw: String,
}

impl BodyReader {
    fn read(mut self, blob: &[u8]) -> Result<Vec<BodyBlock>> {
        let mut xml = Reader::from_reader(blob);
        let mut buf = Vec::new();

        loop {
            match xml.read_event_into(&mut buf)? {
                Event::Start(e) => self.start(&e)?,
                Event::Empty(e) => {
                    self.start(&e)?;
                    self.end(e.local_name().as_ref());
                },
                Event::End(e) => self.end(e.local_name().as_ref()),
                Event::Text(t) if self.in_text => self.raw.push_str(&String::from_utf8_lossy(&t)),
                Event::GeneralRef(r) if self.in_text => push_entity(&mut self.raw, &r),
                Event::Eof => break,
                _ => {},
            }
            buf.clear();
        }

        Ok(self.blocks)
    }

    fn push_text(&mut self, text: &str) {
        if let Some(run) = self.run.as_mut() {
            run.text.push_str(text);
        } else if let Some(cell) = self.cell.as_mut() {
            cell.push_str(text);
        }
    }

    fn start(&mut self, e: &BytesStart<'_>) -> Result<()> {
        match e.local_name().as_ref() {
            b"tbl" => {
                self.table_depth += 1;
                if self.table_depth == 1 {
                    self.table = Some(TableSummary::default());
                }
            },
            b"gridCol" if self.table_depth == 1 => {
                let width = attr_parse(e, b"w")?.unwrap_or(0);
                if let Some(table) = self.table.as_mut() {
                    table.grid.push(width);
                }
            },
            b"tr" if self.table_depth == 1 => {
                if let Some(table) = self.table.as_mut() {
                    table.rows.push(Vec::new());
                }
            },
            b"tc" if self.table_depth == 1 => {
                self.cell = Some(String::new());
                self.cell_paragraphs = 0;
            },
            b"p" => {
                if self.table_depth == 0 {
                    self.paragraph = Some(ParagraphSummary::default());
                } else if let Some(cell) = self.cell.as_mut() {
                    if self.cell_paragraphs > 0 {
                        cell.push('\n');
                    }
                    self.cell_paragraphs += 1;
                }
            },
            b"r" => {
                self.in_run = true;
                if self.paragraph.is_some() {
                    self.run = Some(RunSummary::default());
                }
            },
            b"pStyle" => {
                let style = attr(e, b"val")?;
                if let (Some(p), None) = (self.paragraph.as_mut(), &self.run) {
                    p.style = style;
                }
            },
            b"jc" => {
                let alignment = attr(e, b"val")?.and_then(|v| ParagraphAlignment::from_xml(&v));
                if let (Some(p), None) = (self.paragraph.as_mut(), &self.run) {
                    p.alignment = alignment;
                }
            },
            b"b" => {
                let on = toggle(e)?;
                if let Some(run) = self.run.as_mut() {
                    run.bold = on;
                }
            },
            b"i" => {
                let on = toggle(e)?;
                if let Some(run) = self.run.as_mut() {
                    run.italic = on;
                }
            },
            b"color" => {
                let color = attr(e, b"val")?;
                if let Some(run) = self.run.as_mut() {
                    run.color = color;
                }
            },
            b"sz" => {
                let size = attr_parse(e, b"val")?;
                if let Some(run) = self.run.as_mut() {
                    run.size = size;
                }
            },
            b"t" => self.in_text = true,
            b"br" if self.in_run => {
                if attr(e, b"type")?.as_deref() == Some("page") {
                    if let Some(p) = self.paragraph.as_mut() {
                        p.page_break = true;
                    }
                } else {
                    self.push_text("\n");
                }
            },
            b"tab" if self.in_run => self.push_text("\t"),
            _ => {},
        }
        Ok(())
    }

    fn end(&mut self, local: &[u8]) {
        match local {
            b"t" => {
                self.in_text = false;
                let text = unescape_xml(&self.raw);
                self.raw.clear();
                self.push_text(&text);
            },
            b"r" => {
                self.in_run = false;
                if let (Some(p), Some(run)) = (self.paragraph.as_mut(), self.run.take()) {
                    p.runs.push(run);
                }
            },
            b"p" if self.table_depth == 0 => {
                if let Some(p) = self.paragraph.take() {
                    self.blocks.push(BodyBlock::Paragraph(p));
                }
            },
            b"tc" if self.table_depth == 1 => {
                if let (Some(text), Some(row)) = (
                    self.cell.take(),
                    self.table.as_mut().and_then(|t| t.rows.last_mut()),
                ) {
                    row.push(text);
                }
            },
            b"tbl" => {
                if self.table_depth == 1
                    && let Some(table) = self.table.take()
                {
                    self.blocks.push(BodyBlock::Table(table));
                }
                self.table_depth = self.table_depth.saturating_sub(1);
            },
            _ => {},
        }
    }
}

/// Text of one `p:sp` shape.
#[derive(Default)]
struct ShapeText {
    /// `type` of the placeholder; `body` when only an index is given
    placeholder: Option<String>,
    paragraphs: Vec<(u8, String)>,
}

/// Streaming reader for a slide part.
#[derive(Default)]
struct SlideReader {
    shapes: Vec<ShapeText>,
    shape: Option<ShapeText>,
    paragraph: Option<(u8, String)>,
    in_text: bool,
    raw: String,
}

impl SlideReader {
    fn read(mut self, blob: &[u8]) -> Result<SlideSummary> {
        let mut xml = Reader::from_reader(blob);
        let mut buf = Vec::new();

        loop {
            match xml.read_event_into(&mut buf)? {
                Event::Start(e) => self.start(&e)?,
                Event::Empty(e) => {
                    self.start(&e)?;
                    self.end(e.local_name().as_ref());
                },
                Event::End(e) => self.end(e.local_name().as_ref()),
                Event::Text(t) if self.in_text => self.raw.push_str(&String::from_utf8_lossy(&t)),
                Event::GeneralRef(r) if self.in_text => push_entity(&mut self.raw, &r),
                Event::Eof => break,
                _ => {},
            }
            buf.clear();
        }

        let mut summary = SlideSummary::default();
        for shape in self.shapes {
            match shape.placeholder.as_deref() {
                Some(kind @ ("title" | "ctrTitle")) => {
                    summary.is_title_slide = kind == "ctrTitle";
                    summary.title = shape
                        .paragraphs
                        .into_iter()
                        .map(|(_, text)| text)
                        .collect::<Vec<_>>()
                        .join("\n");
                },
                _ => {
                    // An empty text frame reads back as no paragraphs
                    let only_empty =
                        shape.paragraphs.len() == 1 && shape.paragraphs[0].1.is_empty();
                    if !only_empty {
                        summary.paragraphs.extend(shape.paragraphs);
                    }
                },
            }
        }
        Ok(summary)
    }

    fn start(&mut self, e: &BytesStart<'_>) -> Result<()> {
        match e.local_name().as_ref() {
            b"sp" => self.shape = Some(ShapeText::default()),
            b"ph" => {
                let kind = attr(e, b"type")?.unwrap_or_else(|| "body".to_string());
                if let Some(shape) = self.shape.as_mut() {
                    shape.placeholder = Some(kind);
                }
            },
            b"p" if self.shape.is_some() => self.paragraph = Some((0, String::new())),
            b"pPr" => {
                let level = attr_parse(e, b"lvl")?.unwrap_or(0);
                if let Some(paragraph) = self.paragraph.as_mut() {
                    paragraph.0 = level;
                }
            },
            b"t" => self.in_text = true,
            b"br" => {
                if let Some(paragraph) = self.paragraph.as_mut() {
                    paragraph.1.push('\n');
                }
            },
            _ => {},
        }
        Ok(())
    }

    fn end(&mut self, local: &[u8]) {
        match local {
            b"t" => {
                self.in_text = false;
                let text = unescape_xml(&self.raw);
                self.raw.clear();
                if let Some(paragraph) = self.paragraph.as_mut() {
                    paragraph.1.push_str(&text);
                }
            },
            b"p" => {
                if let (Some(shape), Some(paragraph)) = (self.shape.as_mut(), self.paragraph.take())
                {
                    shape.paragraphs.push(paragraph);
                }
            },
            b"sp" => {
                if let Some(shape) = self.shape.take() {
                    self.shapes.push(shape);
                }
            },
            _ => {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::docx;
    use crate::ooxml::pptx::{self, SlideLayout};

    #[test]
    fn test_docx_blocks() {
        let mut pkg = docx::Package::new("Inspectie & test");
        let doc = pkg.document_mut();
        doc.add_heading("Titel", 0).unwrap();
        let para = doc.add_paragraph();
        para.set_alignment(ParagraphAlignment::Right);
        para.add_run_with_text("Datum:").bold(true);
        para.add_run_with_text(" 1 & 2\nregel");
        doc.add_paragraph();
        let table = doc.add_table(2);
        table.add_row().cell(0).unwrap().set_text("a");
        doc.add_page_break();

        let summary = inspect_docx_bytes(pkg.to_bytes().unwrap()).unwrap();
        assert_eq!(summary.title.as_deref(), Some("Inspectie & test"));
        assert_eq!(summary.body_element_count(), 5);

        let paragraphs: Vec<_> = summary.paragraphs().collect();
        assert_eq!(paragraphs[0].style.as_deref(), Some("Title"));
        assert_eq!(paragraphs[1].alignment, Some(ParagraphAlignment::Right));
        assert!(paragraphs[1].runs[0].bold);
        assert_eq!(paragraphs[1].text(), "Datum: 1 & 2\nregel");
        assert!(paragraphs[2].is_empty());
        assert!(paragraphs[3].page_break);

        let table = summary.tables().next().unwrap();
        assert_eq!(table.columns(), 2);
        assert_eq!(table.rows, vec![vec!["a".to_string(), String::new()]]);
    }

    #[test]
    fn test_pptx_slides() {
        let mut pkg = pptx::Package::new("Deck");
        let pres = pkg.presentation_mut();
        let first = pres.add_slide(SlideLayout::TitleSlide);
        first.set_title("Eind");
        first.body_mut().add_paragraph("Stage", 0).add_paragraph("2026", 0);
        let second = pres.add_slide(SlideLayout::TitleAndContent);
        second.set_title("Agenda");
        second.body_mut().add_paragraph("Kern", 0).add_paragraph("Detail <1>", 1);
        pres.add_slide(SlideLayout::TitleAndContent).set_title("Leeg");

        let summary = inspect_pptx_bytes(pkg.to_bytes().unwrap()).unwrap();
        assert_eq!(summary.slide_count(), 3);
        assert_eq!(summary.slide_size, (9144000, 6858000));
        assert!(summary.slides[0].is_title_slide);
        assert_eq!(summary.slides[0].paragraphs.len(), 2);
        assert_eq!(summary.slides[1].title, "Agenda");
        assert_eq!(
            summary.slides[1].paragraphs,
            vec![(0, "Kern".to_string()), (1, "Detail <1>".to_string())]
        );
        assert!(summary.slides[2].paragraphs.is_empty());
    }

    #[test]
    fn test_not_a_package() {
        assert!(inspect_docx_bytes(b"not a zip".to_vec()).is_err());
    }
}
