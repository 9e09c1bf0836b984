//! Rendering outlines into Office Open XML files.
//!
//! [`Render`] is implemented for [`Outline`](crate::outline::Outline), which
//! becomes a WordprocessingML document, and for
//! [`Deck`](crate::outline::Deck), which becomes a PresentationML deck.
//! Rendering is a single sequential pass; the package is assembled in
//! memory and written to disk in one call.
//!
//! # Examples
//!
//! ```rust,no_run
//! use ave_docgen::outline::{Heading, OutlineBuilder, Paragraph};
//! use ave_docgen::render;
//!
//! let outline = OutlineBuilder::new("Memo")
//!     .heading(Heading::new("Memo", 0))
//!     .paragraph(Paragraph::plain("Tekst"))
//!     .build()?;
//! render::render(&outline, "memo.docx")?;
//! # Ok::<(), ave_docgen::Error>(())
//! ```

mod docx;
mod pptx;

pub use docx::build_package as build_docx_package;
pub use pptx::build_package as build_pptx_package;

use std::path::Path;

use crate::common::Result;

/// Types that can be rendered to an Office Open XML file.
pub trait Render {
    /// Serialize into the bytes of a complete package.
    fn to_bytes(&self) -> Result<Vec<u8>>;

    /// Write the package to `path`, replacing any existing file.
    fn write_to(&self, path: &Path) -> Result<()>;

    /// Re-open the file at `path` and check it against `self`.
    fn verify(&self, path: &Path) -> Result<()>;
}

/// Render `document` to `path`.
///
/// Fails with [`Error::Io`](crate::Error::Io) carrying the underlying I/O
/// error when the file cannot be written. No retry.
pub fn render<D, P>(document: &D, path: P) -> Result<()>
where
    D: Render + ?Sized,
    P: AsRef<Path>,
{
    document.write_to(path.as_ref())
}
