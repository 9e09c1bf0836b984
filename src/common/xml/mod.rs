//! XML text helpers shared by the package writers and the inspector.

mod escape;

pub use escape::{escape_xml, invalid_xml_char, unescape_xml};
