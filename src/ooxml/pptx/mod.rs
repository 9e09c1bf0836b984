//! PowerPoint (.pptx) presentation writing.
//!
//! - `Package`: the .pptx package being assembled
//! - `MutablePresentation`: slide list and slide size
//! - `MutableSlide`: a slide with the title and body placeholders of its layout
//!
//! # Example
//!
//! ```rust,no_run
//! use ave_docgen::ooxml::pptx::{Package, SlideLayout};
//!
//! let mut pkg = Package::new("Deck");
//! let slide = pkg.presentation_mut().add_slide(SlideLayout::TitleAndContent);
//! slide.set_title("Agenda");
//! slide.body_mut().add_paragraph("Inleiding", 0).add_paragraph("Context", 1);
//! pkg.save("deck.pptx")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
pub mod package;
pub mod template;
pub mod writer;

pub use package::Package;
pub use writer::{MutablePresentation, MutableShape, MutableSlide, PlaceholderType, SlideLayout};
