//! Fold-style outline construction.
//!
//! Every append consumes the builder and hands it back, so an outline is
//! written as one expression. Contract violations are recorded on the
//! builder and reported by [`OutlineBuilder::build`]; once an error is
//! recorded, later appends are ignored.

use super::{Block, Cell, Font, Heading, Outline, OutlineError, Paragraph, Row, Table};
use crate::common::Length;

/// Builder threaded through each append of an [`Outline`].
#[derive(Debug, Clone)]
#[must_use = "an outline builder does nothing until `build` is called"]
pub struct OutlineBuilder {
    outline: Outline,
    error: Option<OutlineError>,
}

impl OutlineBuilder {
    /// Start an outline. The title only feeds the package metadata; add a
    /// level-0 heading to show it in the body.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            outline: Outline {
                title: title.into(),
                base_font: None,
                blocks: Vec::new(),
            },
            error: None,
        }
    }

    /// Set the family and size of the `Normal` style.
    pub fn base_font(mut self, family: impl Into<String>, size_pt: f64) -> Self {
        self.outline.base_font = Some(Font::new(family, size_pt));
        self
    }

    pub fn heading(self, heading: Heading) -> Self {
        if heading.level > 9 {
            let level = heading.level;
            return self.fail(OutlineError::HeadingLevel(level));
        }
        self.push(Block::Heading(heading))
    }

    pub fn paragraph(self, paragraph: Paragraph) -> Self {
        self.push(Block::Paragraph(paragraph))
    }

    /// Append several paragraphs, one block each.
    pub fn paragraphs(self, paragraphs: impl IntoIterator<Item = Paragraph>) -> Self {
        paragraphs.into_iter().fold(self, Self::paragraph)
    }

    /// Append a bullet list. Every item is rendered with the list-bullet
    /// style regardless of the style it was built with.
    pub fn bullets(self, items: impl IntoIterator<Item = Paragraph>) -> Self {
        let items = items.into_iter().map(Paragraph::list_bullet).collect();
        self.push(Block::BulletList(items))
    }

    pub fn table(self, table: TableBuilder) -> Self {
        match table.build() {
            Ok(table) => self.push(Block::Table(table)),
            Err(err) => self.fail(err),
        }
    }

    pub fn page_break(self) -> Self {
        self.push(Block::PageBreak)
    }

    /// An empty paragraph used for vertical whitespace.
    pub fn spacer(self) -> Self {
        self.push(Block::Spacer)
    }

    /// Apply `f` to the builder, for appending a repeated section from data.
    pub fn with(self, f: impl FnOnce(Self) -> Self) -> Self {
        f(self)
    }

    pub fn build(self) -> Result<Outline, OutlineError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.outline),
        }
    }

    fn push(mut self, block: Block) -> Self {
        if self.error.is_none() {
            self.outline.blocks.push(block);
        }
        self
    }

    fn fail(mut self, err: OutlineError) -> Self {
        self.error.get_or_insert(err);
        self
    }
}

/// Builder for a [`Table`] with a fixed column count.
#[derive(Debug, Clone)]
#[must_use = "a table builder must be appended to an outline"]
pub struct TableBuilder {
    columns: usize,
    widths: Option<Vec<Length>>,
    style: Option<String>,
    rows: Vec<Row>,
    error: Option<OutlineError>,
}

impl TableBuilder {
    pub fn new(columns: usize) -> Self {
        Self {
            columns,
            widths: None,
            style: None,
            rows: Vec::new(),
            error: if columns == 0 {
                Some(OutlineError::NoColumns)
            } else {
                None
            },
        }
    }

    /// Fix column widths. They apply to the grid and to every cell of
    /// every row.
    pub fn widths(mut self, widths: impl IntoIterator<Item = Length>) -> Self {
        let widths: Vec<Length> = widths.into_iter().collect();
        if widths.len() != self.columns {
            self.error.get_or_insert(OutlineError::ColumnWidths {
                expected: self.columns,
                got: widths.len(),
            });
        }
        self.widths = Some(widths);
        self
    }

    /// Table style by display name, e.g. `"Table Grid"`.
    pub fn style(mut self, name: impl Into<String>) -> Self {
        self.style = Some(name.into());
        self
    }

    pub fn row<C: Into<Cell>>(mut self, cells: impl IntoIterator<Item = C>) -> Self {
        let cells: Vec<Cell> = cells.into_iter().map(Into::into).collect();
        if cells.len() != self.columns {
            self.error.get_or_insert(OutlineError::CellCount {
                row: self.rows.len(),
                expected: self.columns,
                got: cells.len(),
            });
        }
        self.rows.push(Row { cells });
        self
    }

    pub fn build(self) -> Result<Table, OutlineError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        Ok(Table {
            columns: self.columns,
            widths: self.widths,
            style: self.style,
            rows: self.rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::Alignment;

    #[test]
    fn test_fold_preserves_order() {
        let outline = OutlineBuilder::new("Doc")
            .heading(Heading::new("Titel", 0).align(Alignment::Center))
            .paragraph(Paragraph::plain("een"))
            .bullets(["a", "b", "c"].map(Paragraph::plain))
            .page_break()
            .spacer()
            .build()
            .unwrap();

        assert_eq!(outline.blocks().len(), 5);
        assert!(matches!(outline.blocks()[0], Block::Heading(_)));
        assert!(matches!(outline.blocks()[3], Block::PageBreak));
        assert_eq!(outline.body_element_count(), 1 + 1 + 3 + 1 + 1);
    }

    #[test]
    fn test_bullets_force_list_style() {
        let outline = OutlineBuilder::new("Doc")
            .bullets([Paragraph::plain("x")])
            .build()
            .unwrap();
        match &outline.blocks()[0] {
            Block::BulletList(items) => {
                assert_eq!(items[0].style, crate::outline::ParagraphStyle::ListBullet)
            },
            other => panic!("unexpected block {other:?}"),
        }
    }

    #[test]
    fn test_row_cell_count_mismatch() {
        let err = TableBuilder::new(3)
            .row(["Slide", "Kern", "Tijd"])
            .row(["alleen", "twee"])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            OutlineError::CellCount {
                row: 1,
                expected: 3,
                got: 2
            }
        );
    }

    #[test]
    fn test_table_error_reaches_outline() {
        let result = OutlineBuilder::new("Doc")
            .paragraph(Paragraph::plain("voor"))
            .table(TableBuilder::new(2).row(["a", "b", "c"]))
            .paragraph(Paragraph::plain("na"))
            .build();
        assert!(matches!(result, Err(OutlineError::CellCount { got: 3, .. })));
    }

    #[test]
    fn test_width_count_mismatch() {
        let err = TableBuilder::new(3)
            .widths([Length::from_inches(1.0), Length::from_inches(4.5)])
            .build()
            .unwrap_err();
        assert_eq!(err, OutlineError::ColumnWidths { expected: 3, got: 2 });
    }

    #[test]
    fn test_zero_columns_rejected() {
        assert_eq!(TableBuilder::new(0).build().unwrap_err(), OutlineError::NoColumns);
    }

    #[test]
    fn test_heading_level_limit() {
        let result = OutlineBuilder::new("Doc").heading(Heading::new("diep", 10)).build();
        assert_eq!(result.unwrap_err(), OutlineError::HeadingLevel(10));
    }

    #[test]
    fn test_empty_outline() {
        let outline = OutlineBuilder::new("Leeg").build().unwrap();
        assert!(outline.is_empty());
        assert_eq!(outline.body_element_count(), 0);
        assert_eq!(outline.title(), "Leeg");
    }
}
