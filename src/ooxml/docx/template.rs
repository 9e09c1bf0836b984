//! Document template module.
//!
//! Static parts every generated .docx carries unchanged.

/// Bullet list numbering: abstract definition 0, instance 1.
pub fn default_numbering_xml() -> &'static str {
    include_str!("resources/numbering.xml")
}

/// Generate default settings.xml content
pub fn default_settings_xml() -> &'static str {
    include_str!("resources/settings.xml")
}
