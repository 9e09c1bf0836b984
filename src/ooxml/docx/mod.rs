/// Word (.docx) document writing.
///
/// The module is organized around these key types:
/// - `Package`: the .docx package being assembled
/// - `MutableDocument`: the body content (paragraphs, tables, section)
/// - `MutableStyle`: entries of the style sheet
///
/// # Example
///
/// ```rust,no_run
/// use ave_docgen::ooxml::docx::Package;
///
/// let mut pkg = Package::with_base_font("Report", Some(("Arial", 22)));
/// let doc = pkg.document_mut();
/// doc.add_heading("Report", 0)?;
/// doc.add_paragraph_with_text("First line\nSecond line");
/// let table = doc.add_table(2);
/// table.add_row().cell(0).unwrap().set_text("Cell");
/// pkg.save("report.docx")?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub mod enums;
pub mod format;
pub mod package;
pub mod template;
pub mod writer;

pub use package::Package;
pub use writer::{MutableDocument, MutableParagraph, MutableRun, MutableStyle, MutableTable};
