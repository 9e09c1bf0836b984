//! Presentation template module.
//!
//! Static parts shared by every generated .pptx: one slide master with two
//! layouts, a theme, and the presentation-level property parts.

/// Slide master with title and body placeholders and the text styles.
///
/// Its layout ID list expects `rId1` to point at the Title Slide layout
/// and `rId2` at the Title and Content layout.
pub fn default_slide_master_xml() -> &'static str {
    include_str!("resources/slideMasters/slideMaster1.xml")
}

/// Generate slide layout 1 XML (Title Slide)
pub fn slide_layout_1_xml() -> &'static str {
    include_str!("resources/slideLayouts/slideLayout1.xml")
}

/// Generate slide layout 2 XML (Title and Content)
pub fn slide_layout_2_xml() -> &'static str {
    include_str!("resources/slideLayouts/slideLayout2.xml")
}

/// Get all slide layout XMLs in layout order.
pub fn all_slide_layouts() -> Vec<&'static str> {
    vec![slide_layout_1_xml(), slide_layout_2_xml()]
}

pub fn default_theme_xml() -> &'static str {
    include_str!("resources/theme/theme1.xml")
}

pub fn default_table_styles_xml() -> &'static str {
    include_str!("resources/tableStyles.xml")
}

pub fn default_view_props_xml() -> &'static str {
    include_str!("resources/viewProps.xml")
}

pub fn default_pres_props_xml() -> &'static str {
    include_str!("resources/presProps.xml")
}
