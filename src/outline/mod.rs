//! Styled document outlines.
//!
//! An [`Outline`] is the ordered, styled description of a word-processing
//! document: headings, paragraphs made of independently styled runs, bullet
//! lists, fixed-column tables, page breaks, and spacers. A [`Deck`] is the
//! slide-level counterpart for presentations.
//!
//! Outlines are assembled with [`OutlineBuilder`], which is threaded by value
//! through each append so that construction reads as a fold:
//!
//! ```rust
//! use ave_docgen::outline::{Alignment, Heading, OutlineBuilder, Paragraph, Run};
//!
//! let outline = OutlineBuilder::new("Memo")
//!     .heading(Heading::new("Memo", 0).align(Alignment::Center))
//!     .paragraph(Paragraph::new().run(Run::new("Datum:").bold()).text(" 30 januari 2026"))
//!     .spacer()
//!     .build()
//!     .unwrap();
//! assert_eq!(outline.body_element_count(), 3);
//! ```

mod builder;
mod deck;

pub use builder::{OutlineBuilder, TableBuilder};
pub use deck::{Deck, DeckBuilder, Item, Slide};

use crate::common::{Length, RGBColor};
use thiserror::Error;

/// Contract violations detected while an outline is being built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OutlineError {
    /// A table row supplied a different number of cells than the table declares
    #[error("table row {row} has {got} cells, expected {expected}")]
    CellCount {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// Fixed column widths do not match the column count
    #[error("table declares {expected} columns but {got} column widths")]
    ColumnWidths { expected: usize, got: usize },

    /// Tables need at least one column
    #[error("table must have at least one column")]
    NoColumns,

    /// Heading level outside 0..=9
    #[error("heading level must be 0-9, got {0}")]
    HeadingLevel(u8),
}

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

/// Base font applied to the `Normal` style of the document.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub family: String,
    pub size: Length,
}

impl Font {
    pub fn new(family: impl Into<String>, size_pt: f64) -> Self {
        Self {
            family: family.into(),
            size: Length::from_pt(size_pt),
        }
    }
}

/// A contiguous span of text sharing one style.
///
/// A `'\n'` in the text renders as a line break inside the paragraph and a
/// `'\t'` as a tab.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Run {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub color: Option<RGBColor>,
    pub size: Option<Length>,
    pub font: Option<String>,
}

impl Run {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn color(mut self, color: RGBColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn size_pt(mut self, pt: f64) -> Self {
        self.size = Some(Length::from_pt(pt));
        self
    }

    pub fn font(mut self, family: impl Into<String>) -> Self {
        self.font = Some(family.into());
        self
    }
}

impl From<&str> for Run {
    fn from(text: &str) -> Self {
        Run::new(text)
    }
}

impl From<String> for Run {
    fn from(text: String) -> Self {
        Run::new(text)
    }
}

/// Paragraph style applied to a [`Paragraph`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParagraphStyle {
    #[default]
    Normal,
    ListBullet,
}

/// A paragraph: ordered runs plus paragraph-level layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    pub runs: Vec<Run>,
    pub style: ParagraphStyle,
    pub alignment: Option<Alignment>,
    pub space_before: Option<Length>,
    pub space_after: Option<Length>,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// A paragraph holding a single unstyled run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new().text(text)
    }

    /// A list-bullet paragraph holding a single unstyled run.
    pub fn bullet(text: impl Into<String>) -> Self {
        Self::plain(text).list_bullet()
    }

    pub fn run(mut self, run: impl Into<Run>) -> Self {
        self.runs.push(run.into());
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.run(Run::new(text))
    }

    pub fn list_bullet(mut self) -> Self {
        self.style = ParagraphStyle::ListBullet;
        self
    }

    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn space_before_pt(mut self, pt: f64) -> Self {
        self.space_before = Some(Length::from_pt(pt));
        self
    }

    pub fn space_after_pt(mut self, pt: f64) -> Self {
        self.space_after = Some(Length::from_pt(pt));
        self
    }

    /// Concatenated text of all runs.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(|r| r.text.is_empty())
    }
}

/// A heading. Level 0 is the document title, 1..=9 are heading levels.
///
/// A color or size override applies to every run the heading produces.
#[derive(Debug, Clone, PartialEq)]
pub struct Heading {
    pub text: String,
    pub level: u8,
    pub alignment: Option<Alignment>,
    pub color: Option<RGBColor>,
    pub size: Option<Length>,
}

impl Heading {
    pub fn new(text: impl Into<String>, level: u8) -> Self {
        Self {
            text: text.into(),
            level,
            alignment: None,
            color: None,
            size: None,
        }
    }

    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn color(mut self, color: RGBColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn size_pt(mut self, pt: f64) -> Self {
        self.size = Some(Length::from_pt(pt));
        self
    }
}

/// One table cell: a small sequence of paragraphs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cell {
    pub paragraphs: Vec<Paragraph>,
}

impl Cell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paragraph(mut self, paragraph: Paragraph) -> Self {
        self.paragraphs.push(paragraph);
        self
    }

    pub fn paragraphs(mut self, paragraphs: impl IntoIterator<Item = Paragraph>) -> Self {
        self.paragraphs.extend(paragraphs);
        self
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::new().paragraph(Paragraph::plain(text))
    }
}

impl From<Paragraph> for Cell {
    fn from(paragraph: Paragraph) -> Self {
        Cell::new().paragraph(paragraph)
    }
}

/// A table row. Rows only exist inside a validated [`Table`].
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub cells: Vec<Cell>,
}

/// A table with a fixed column count.
///
/// Built through [`TableBuilder`], which guarantees that every row holds
/// exactly `columns` cells and that `widths`, when present, has one entry
/// per column.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: usize,
    widths: Option<Vec<Length>>,
    style: Option<String>,
    rows: Vec<Row>,
}

impl Table {
    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn widths(&self) -> Option<&[Length]> {
        self.widths.as_deref()
    }

    pub fn style(&self) -> Option<&str> {
        self.style.as_deref()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }
}

/// One structural unit of an outline.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading(Heading),
    Paragraph(Paragraph),
    BulletList(Vec<Paragraph>),
    Table(Table),
    PageBreak,
    Spacer,
}

impl Block {
    /// Number of top-level body elements this block renders to.
    pub fn body_element_count(&self) -> usize {
        match self {
            Block::BulletList(items) => items.len(),
            Block::Heading(_)
            | Block::Paragraph(_)
            | Block::Table(_)
            | Block::PageBreak
            | Block::Spacer => 1,
        }
    }
}

/// The ordered, styled content of one word-processing document.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    title: String,
    base_font: Option<Font>,
    blocks: Vec<Block>,
}

impl Outline {
    /// Document title, written to the package metadata.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn base_font(&self) -> Option<&Font> {
        self.base_font.as_ref()
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Number of top-level body elements (paragraphs and tables) the
    /// rendered document contains, excluding section properties.
    pub fn body_element_count(&self) -> usize {
        self.blocks.iter().map(Block::body_element_count).sum()
    }

    pub fn headings(&self) -> impl Iterator<Item = &Heading> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Heading(h) => Some(h),
            _ => None,
        })
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Table(t) => Some(t),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_builder() {
        let run = Run::new("--- [KLIK] ---")
            .bold()
            .color(RGBColor::new(200, 0, 0))
            .size_pt(12.0);
        assert!(run.bold);
        assert!(!run.italic);
        assert_eq!(run.size.map(|s| s.half_points()), Some(24));
    }

    #[test]
    fn test_paragraph_text() {
        let para = Paragraph::new()
            .run(Run::new("Betreft:").bold())
            .text(" Software analyse");
        assert_eq!(para.plain_text(), "Betreft: Software analyse");
        assert_eq!(para.runs.len(), 2);
        assert!(!para.is_empty());
        assert!(Paragraph::new().is_empty());
    }

    #[test]
    fn test_block_counts() {
        let bullets = Block::BulletList(vec![Paragraph::bullet("a"), Paragraph::bullet("b")]);
        assert_eq!(bullets.body_element_count(), 2);
        assert_eq!(Block::Spacer.body_element_count(), 1);
        assert_eq!(Block::BulletList(Vec::new()).body_element_count(), 0);
    }
}
