//! Office Open XML (OOXML) package writing and inspection.
//!
//! The module is organized into several layers:
//!
//! 1. **OPC Layer** (`opc`): package parts, relationships, content types,
//!    and the ZIP container
//! 2. **Format-Specific Writers**:
//!    - `docx`: WordprocessingML documents
//!    - `pptx`: PresentationML decks
//! 3. **Shared Parts** (`docprops`): core and extended properties
//! 4. **Inspection** (`inspect`): read-back summaries of written packages
//!
//! # Example: Writing a Word Document
//!
//! ```rust,no_run
//! use ave_docgen::ooxml::docx::Package;
//!
//! let mut pkg = Package::new("Notes");
//! pkg.document_mut().add_paragraph_with_text("Hello");
//! pkg.save("notes.docx")?;
//!
//! let summary = ave_docgen::ooxml::inspect::inspect_docx("notes.docx")?;
//! assert_eq!(summary.body_element_count(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
pub mod docprops;
pub mod docx;
pub mod error;
pub mod inspect;
pub mod opc;
pub mod pptx;

// Re-export commonly used types from OPC layer
pub use opc::{OpcPackage, PackURI};

// Re-export error types
pub use error::{OoxmlError, Result};

/// Parse a partname known at compile time.
pub(crate) fn part_uri(uri: &str) -> Result<PackURI> {
    PackURI::new(uri).map_err(|e| OoxmlError::Opc(opc::error::OpcError::InvalidPackUri(e)))
}

/// Escape `text` for element content.
///
/// Fails with [`OoxmlError::InvalidFormat`] when `text` holds a character
/// XML cannot represent, so no ill-formed part is ever written.
pub(crate) fn escape_text(text: &str) -> Result<String> {
    match crate::common::xml::invalid_xml_char(text) {
        Some(ch) => Err(OoxmlError::InvalidFormat(format!(
            "text contains U+{:04X}, which XML cannot represent: {:?}",
            u32::from(ch),
            text
        ))),
        None => Ok(crate::common::xml::escape_xml(text)),
    }
}
