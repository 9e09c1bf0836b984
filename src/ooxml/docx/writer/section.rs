use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

/// Section properties for a portrait page: size and margins.
///
/// All measurements are in twips (1440 = 1 inch).
#[derive(Debug, Clone)]
pub struct SectionProperties {
    pub page_width: u32,
    pub page_height: u32,
    pub margin_top: u32,
    pub margin_bottom: u32,
    pub margin_left: u32,
    pub margin_right: u32,
    /// Header distance from top
    pub header_distance: u32,
    /// Footer distance from bottom
    pub footer_distance: u32,
}

impl Default for SectionProperties {
    fn default() -> Self {
        // US Letter size: 8.5" x 11" = 12240 x 15840 twips
        Self {
            page_width: 12240,
            page_height: 15840,
            margin_top: 1440,
            margin_bottom: 1440,
            margin_left: 1440,
            margin_right: 1440,
            header_distance: 720,
            footer_distance: 720,
        }
    }
}

impl SectionProperties {
    /// Width available to body text between the side margins.
    pub fn text_width(&self) -> u32 {
        self.page_width
            .saturating_sub(self.margin_left)
            .saturating_sub(self.margin_right)
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:sectPr>");
        write!(
            xml,
            r#"<w:pgSz w:w="{}" w:h="{}"/>"#,
            self.page_width, self.page_height
        )?;
        write!(
            xml,
            r#"<w:pgMar w:top="{}" w:right="{}" w:bottom="{}" w:left="{}" w:header="{}" w:footer="{}" w:gutter="0"/>"#,
            self.margin_top,
            self.margin_right,
            self.margin_bottom,
            self.margin_left,
            self.header_distance,
            self.footer_distance
        )?;
        xml.push_str("</w:sectPr>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_defaults() {
        let section = SectionProperties::default();
        assert_eq!(section.text_width(), 9360);

        let mut xml = String::new();
        section.to_xml(&mut xml).unwrap();
        assert!(xml.starts_with("<w:sectPr><w:pgSz w:w=\"12240\" w:h=\"15840\""));
    }

    #[test]
    fn test_margins_written_in_twips() {
        let mut xml = String::new();
        SectionProperties::default().to_xml(&mut xml).unwrap();
        assert!(
            xml.contains(r#"<w:pgMar w:top="1440" w:right="1440" w:bottom="1440" w:left="1440""#)
        );
        assert!(xml.ends_with("</w:sectPr>"));
    }
}
