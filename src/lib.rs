//! ave-docgen - Office documents for the AVE CRM internship presentation
//!
//! This library renders styled document outlines into Office Open XML files
//! and ships five generators built on top of it.
//!
//! # Features
//!
//! - **Outlines**: ordered headings, styled runs, bullet lists, fixed-column
//!   tables, page breaks and spacers, plus slide decks
//! - **DOCX/PPTX Writer**: an OPC package writer with deterministic output
//! - **Inspection**: read-back summaries of written packages
//! - **Generators**: business case, two speaker scripts, playbook and deck
//!
//! # Example - Rendering an outline
//!
//! ```no_run
//! use ave_docgen::common::RGBColor;
//! use ave_docgen::outline::{Alignment, Heading, OutlineBuilder, Paragraph, Run};
//!
//! # fn main() -> Result<(), ave_docgen::Error> {
//! let outline = OutlineBuilder::new("Memo")
//!     .base_font("Arial", 11.0)
//!     .heading(Heading::new("Memo", 0).align(Alignment::Center))
//!     .heading(Heading::new("1. Inleiding", 1).color(RGBColor::new(128, 4, 0)))
//!     .paragraph(Paragraph::new().run(Run::new("Let op:").bold()).text(" concept"))
//!     .bullets(["Eerste punt", "Tweede punt"].map(Paragraph::plain))
//!     .build()?;
//!
//! ave_docgen::render::render(&outline, "memo.docx")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Running a generator
//!
//! ```no_run
//! use ave_docgen::generators::{Generator, Presentation};
//!
//! # fn main() -> Result<(), ave_docgen::Error> {
//! let path = Presentation.generate(std::path::Path::new("out"))?;
//! println!("{}", path.display());
//! # Ok(())
//! # }
//! ```

/// Errors, units, colors and XML helpers
pub mod common;

/// Styled document outlines and slide decks
pub mod outline;

/// OOXML (Office Open XML) package writer and reader
///
/// Writes WordprocessingML (.docx) and PresentationML (.pptx) packages and
/// reads them back for inspection.
pub mod ooxml;

/// Outline to file rendering
pub mod render;

/// The five document generators
pub mod generators;

/// Command line shared by the generator binaries
pub mod cli;

// Re-export commonly used types for convenience
pub use common::{Error, Result};
pub use outline::{Deck, Outline};
pub use render::{Render, render};
