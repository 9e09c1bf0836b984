/// Style writer support for DOCX documents.
///
/// Builds the `styles.xml` part from a list of style definitions. The
/// built-in factories cover every style the document writer references.
use crate::common::RGBColor;
use crate::common::xml::escape_xml;
use crate::ooxml::docx::enums::WdStyleType;
use crate::ooxml::error::{OoxmlError, Result};
use std::fmt::Write as FmtWrite;

use super::paragraph::ParagraphAlignment;
use super::table::TableBorder;

/// Numbering instance the `ListBullet` style points at.
pub const BULLET_NUM_ID: u32 = 1;

/// A mutable style definition for writing.
///
/// # Examples
///
/// ```rust
/// use ave_docgen::ooxml::docx::enums::WdStyleType;
/// use ave_docgen::ooxml::docx::writer::MutableStyle;
///
/// let mut style = MutableStyle::new("Footer", "Footer Note", WdStyleType::Paragraph);
/// style.set_based_on(Some("Normal".to_string()));
/// style.set_font_size(Some(16));
/// style.set_italic(true);
/// assert_eq!(style.style_id(), "Footer");
/// ```
#[derive(Debug, Clone)]
pub struct MutableStyle {
    /// Style identifier (e.g., "Heading1")
    style_id: String,
    /// UI-visible name (e.g., "heading 1")
    name: String,
    style_type: WdStyleType,
    /// Whether this is the default style for its type
    is_default: bool,
    is_custom: bool,
    based_on: Option<String>,
    /// Style applied to the following paragraph
    next: Option<String>,
    /// UI priority for display ordering (lower = higher priority)
    priority: Option<i32>,
    is_quick_style: bool,
    is_semi_hidden: bool,
    keep_next: bool,
    /// Outline level (0-based) for heading styles
    outline_level: Option<u8>,
    /// Numbering instance for list styles
    num_id: Option<u32>,
    font_name: Option<String>,
    /// Font size in half-points (e.g., 24 = 12pt)
    font_size: Option<u32>,
    bold: bool,
    italic: bool,
    color: Option<RGBColor>,
    alignment: Option<ParagraphAlignment>,
    /// Space before paragraph in twips
    space_before: Option<u32>,
    /// Space after paragraph in twips
    space_after: Option<u32>,
    /// Left indent in twips
    indent_left: Option<u32>,
    /// Hanging indent in twips
    indent_hanging: Option<u32>,
    /// Table borders for table styles
    table_borders: Option<TableBorder>,
}

impl MutableStyle {
    pub fn new(
        style_id: impl Into<String>,
        name: impl Into<String>,
        style_type: WdStyleType,
    ) -> Self {
        Self {
            style_id: style_id.into(),
            name: name.into(),
            style_type,
            is_default: false,
            is_custom: true,
            based_on: None,
            next: None,
            priority: None,
            is_quick_style: false,
            is_semi_hidden: false,
            keep_next: false,
            outline_level: None,
            num_id: None,
            font_name: None,
            font_size: None,
            bold: false,
            italic: false,
            color: None,
            alignment: None,
            space_before: None,
            space_after: None,
            indent_left: None,
            indent_hanging: None,
            table_borders: None,
        }
    }

    #[inline]
    pub fn style_id(&self) -> &str {
        &self.style_id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn style_type(&self) -> WdStyleType {
        self.style_type
    }

    pub fn set_default(&mut self, is_default: bool) {
        self.is_default = is_default;
    }

    pub fn set_custom(&mut self, is_custom: bool) {
        self.is_custom = is_custom;
    }

    pub fn set_based_on(&mut self, based_on: Option<String>) {
        self.based_on = based_on;
    }

    pub fn set_next(&mut self, next: Option<String>) {
        self.next = next;
    }

    pub fn set_priority(&mut self, priority: Option<i32>) {
        self.priority = priority;
    }

    pub fn set_quick_style(&mut self, is_quick_style: bool) {
        self.is_quick_style = is_quick_style;
    }

    pub fn set_semi_hidden(&mut self, is_semi_hidden: bool) {
        self.is_semi_hidden = is_semi_hidden;
    }

    pub fn set_keep_next(&mut self, keep_next: bool) {
        self.keep_next = keep_next;
    }

    pub fn set_outline_level(&mut self, level: Option<u8>) {
        self.outline_level = level;
    }

    pub fn set_num_id(&mut self, num_id: Option<u32>) {
        self.num_id = num_id;
    }

    pub fn set_font_name(&mut self, font_name: Option<String>) {
        self.font_name = font_name;
    }

    pub fn set_font_size(&mut self, font_size: Option<u32>) {
        self.font_size = font_size;
    }

    pub fn set_bold(&mut self, bold: bool) {
        self.bold = bold;
    }

    pub fn set_italic(&mut self, italic: bool) {
        self.italic = italic;
    }

    pub fn set_color(&mut self, color: Option<RGBColor>) {
        self.color = color;
    }

    pub fn set_alignment(&mut self, alignment: Option<ParagraphAlignment>) {
        self.alignment = alignment;
    }

    pub fn set_space_before(&mut self, space_before: Option<u32>) {
        self.space_before = space_before;
    }

    pub fn set_space_after(&mut self, space_after: Option<u32>) {
        self.space_after = space_after;
    }

    pub fn set_indent(&mut self, left: Option<u32>, hanging: Option<u32>) {
        self.indent_left = left;
        self.indent_hanging = hanging;
    }

    pub fn set_table_borders(&mut self, borders: Option<TableBorder>) {
        self.table_borders = borders;
    }

    fn has_paragraph_properties(&self) -> bool {
        self.keep_next
            || self.num_id.is_some()
            || self.space_before.is_some()
            || self.space_after.is_some()
            || self.indent_left.is_some()
            || self.indent_hanging.is_some()
            || self.alignment.is_some()
            || self.outline_level.is_some()
    }

    fn has_run_properties(&self) -> bool {
        self.font_name.is_some()
            || self.bold
            || self.italic
            || self.color.is_some()
            || self.font_size.is_some()
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        write!(
            xml,
            r#"<w:style w:type="{}" w:styleId="{}""#,
            self.style_type.to_xml(),
            escape_xml(&self.style_id)
        )?;
        if self.is_default {
            xml.push_str(r#" w:default="1""#);
        }
        if self.is_custom {
            xml.push_str(r#" w:customStyle="1""#);
        }
        xml.push('>');

        write!(xml, r#"<w:name w:val="{}"/>"#, escape_xml(&self.name))?;
        if let Some(ref based_on) = self.based_on {
            write!(xml, r#"<w:basedOn w:val="{}"/>"#, escape_xml(based_on))?;
        }
        if let Some(ref next) = self.next {
            write!(xml, r#"<w:next w:val="{}"/>"#, escape_xml(next))?;
        }
        if let Some(priority) = self.priority {
            write!(xml, r#"<w:uiPriority w:val="{}"/>"#, priority)?;
        }
        if self.is_semi_hidden {
            xml.push_str("<w:semiHidden/><w:unhideWhenUsed/>");
        }
        if self.is_quick_style {
            xml.push_str("<w:qFormat/>");
        }

        if self.has_paragraph_properties() {
            xml.push_str("<w:pPr>");
            if self.keep_next {
                xml.push_str("<w:keepNext/><w:keepLines/>");
            }
            if let Some(num_id) = self.num_id {
                write!(xml, r#"<w:numPr><w:numId w:val="{}"/></w:numPr>"#, num_id)?;
            }
            if self.space_before.is_some() || self.space_after.is_some() {
                xml.push_str("<w:spacing");
                if let Some(before) = self.space_before {
                    write!(xml, r#" w:before="{}""#, before)?;
                }
                if let Some(after) = self.space_after {
                    write!(xml, r#" w:after="{}""#, after)?;
                }
                xml.push_str("/>");
            }
            if self.indent_left.is_some() || self.indent_hanging.is_some() {
                xml.push_str("<w:ind");
                if let Some(left) = self.indent_left {
                    write!(xml, r#" w:left="{}""#, left)?;
                }
                if let Some(hanging) = self.indent_hanging {
                    write!(xml, r#" w:hanging="{}""#, hanging)?;
                }
                xml.push_str("/>");
            }
            if let Some(alignment) = self.alignment {
                write!(xml, r#"<w:jc w:val="{}"/>"#, alignment.as_str())?;
            }
            if let Some(level) = self.outline_level {
                write!(xml, r#"<w:outlineLvl w:val="{}"/>"#, level)?;
            }
            xml.push_str("</w:pPr>");
        }

        if self.has_run_properties() {
            xml.push_str("<w:rPr>");
            if let Some(ref font_name) = self.font_name {
                let font_name = escape_xml(font_name);
                write!(
                    xml,
                    r#"<w:rFonts w:ascii="{0}" w:hAnsi="{0}" w:cs="{0}"/>"#,
                    font_name
                )?;
            }
            if self.bold {
                xml.push_str("<w:b/><w:bCs/>");
            }
            if self.italic {
                xml.push_str("<w:i/><w:iCs/>");
            }
            if let Some(color) = self.color {
                write!(xml, r#"<w:color w:val="{}"/>"#, color.to_hex())?;
            }
            if let Some(size) = self.font_size {
                write!(xml, r#"<w:sz w:val="{0}"/><w:szCs w:val="{0}"/>"#, size)?;
            }
            xml.push_str("</w:rPr>");
        }

        if self.style_type == WdStyleType::Table {
            xml.push_str("<w:tblPr>");
            if let Some(ref borders) = self.table_borders {
                borders.write_all_sides(xml)?;
            }
            xml.push_str(r#"<w:tblCellMar><w:top w:w="0" w:type="dxa"/><w:left w:w="108" w:type="dxa"/><w:bottom w:w="0" w:type="dxa"/><w:right w:w="108" w:type="dxa"/></w:tblCellMar>"#);
            xml.push_str("</w:tblPr>");
        }

        xml.push_str("</w:style>");
        Ok(())
    }

    /// Factory methods for the built-in styles
    ///
    /// The "Normal" paragraph style. `font` is `(family, half-points)`.
    pub fn normal(font: Option<(&str, u32)>) -> Self {
        let mut style = Self::new("Normal", "Normal", WdStyleType::Paragraph);
        style.set_default(true);
        style.set_custom(false);
        style.set_quick_style(true);
        if let Some((family, size)) = font {
            style.set_font_name(Some(family.to_string()));
            style.set_font_size(Some(size));
        }
        style
    }

    pub fn default_paragraph_font() -> Self {
        let mut style = Self::new(
            "DefaultParagraphFont",
            "Default Paragraph Font",
            WdStyleType::Character,
        );
        style.set_default(true);
        style.set_custom(false);
        style.set_priority(Some(1));
        style.set_semi_hidden(true);
        style
    }

    pub fn normal_table() -> Self {
        let mut style = Self::new("TableNormal", "Normal Table", WdStyleType::Table);
        style.set_default(true);
        style.set_custom(false);
        style.set_priority(Some(99));
        style.set_semi_hidden(true);
        style
    }

    /// The "Title" style used for level-0 headings.
    pub fn title() -> Self {
        let mut style = Self::new("Title", "Title", WdStyleType::Paragraph);
        style.set_based_on(Some("Normal".to_string()));
        style.set_next(Some("Normal".to_string()));
        style.set_custom(false);
        style.set_font_size(Some(52)); // 26pt
        style.set_color(Some(RGBColor::new(0x17, 0x36, 0x5D)));
        style.set_space_after(Some(300));
        style.set_priority(Some(10));
        style.set_quick_style(true);
        style
    }

    /// The "Heading N" style for `level` in 1..=9.
    pub fn heading(level: u8) -> Result<Self> {
        if !(1..=9).contains(&level) {
            return Err(OoxmlError::InvalidFormat(format!(
                "heading style level must be 1-9, got {}",
                level
            )));
        }

        let mut style = Self::new(
            heading_style_id(level),
            format!("heading {}", level),
            WdStyleType::Paragraph,
        );
        style.set_based_on(Some("Normal".to_string()));
        style.set_next(Some("Normal".to_string()));
        style.set_custom(false);
        style.set_keep_next(true);
        style.set_outline_level(Some(level - 1));
        style.set_bold(true);
        let (size, color, before) = match level {
            1 => (28, RGBColor::new(0x36, 0x5F, 0x91), 480), // 14pt
            2 => (26, RGBColor::new(0x4F, 0x81, 0xBD), 200), // 13pt
            _ => (22, RGBColor::new(0x4F, 0x81, 0xBD), 200), // 11pt
        };
        style.set_font_size(Some(size));
        style.set_color(Some(color));
        style.set_space_before(Some(before));
        style.set_space_after(Some(0));
        style.set_priority(Some(9));
        style.set_quick_style(true);
        Ok(style)
    }

    /// The "List Bullet" style, bound to the bullet numbering instance.
    pub fn list_bullet() -> Self {
        let mut style = Self::new("ListBullet", "List Bullet", WdStyleType::Paragraph);
        style.set_based_on(Some("Normal".to_string()));
        style.set_custom(false);
        style.set_num_id(Some(BULLET_NUM_ID));
        style.set_indent(Some(360), Some(360));
        style.set_priority(Some(99));
        style
    }

    /// The "Table Grid" style: single borders on every side.
    pub fn table_grid() -> Self {
        let mut style = Self::new("TableGrid", "Table Grid", WdStyleType::Table);
        style.set_based_on(Some("TableNormal".to_string()));
        style.set_custom(false);
        style.set_priority(Some(59));
        style.set_table_borders(Some(TableBorder::default()));
        style
    }
}

/// Style ID of the heading at `level` (0 is the title).
pub fn heading_style_id(level: u8) -> String {
    if level == 0 {
        "Title".to_string()
    } else {
        format!("Heading{}", level)
    }
}

/// Map a table style display name (e.g. "Table Grid") to its style ID.
pub fn style_id_from_name(name: &str) -> String {
    name.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Generate a complete styles.xml document from a list of styles.
pub fn generate_styles_xml(styles: &[MutableStyle]) -> Result<String> {
    let mut xml = String::with_capacity(1024 + styles.len() * 512);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(
        r#"<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" "#,
    );
    xml.push_str(
        r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
    );

    xml.push_str("<w:docDefaults>");
    xml.push_str("<w:rPrDefault><w:rPr>");
    xml.push_str(r#"<w:rFonts w:ascii="Calibri" w:hAnsi="Calibri" w:cs="Calibri"/>"#);
    xml.push_str(r#"<w:sz w:val="22"/><w:szCs w:val="22"/>"#);
    xml.push_str(r#"<w:lang w:val="nl-NL"/>"#);
    xml.push_str("</w:rPr></w:rPrDefault>");
    xml.push_str(r#"<w:pPrDefault><w:pPr><w:spacing w:after="200" w:line="276" w:lineRule="auto"/></w:pPr></w:pPrDefault>"#);
    xml.push_str("</w:docDefaults>");

    for style in styles {
        style.to_xml(&mut xml)?;
    }

    xml.push_str("</w:styles>");
    Ok(xml)
}
