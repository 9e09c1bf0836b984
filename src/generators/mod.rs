//! The five document generators.
//!
//! Each generator owns a fixed output file name and builds its outline from
//! literal content. [`Generator::generate`] renders it into a directory.
//!
//! # Examples
//!
//! ```rust,no_run
//! use ave_docgen::generators::{BusinessCase, Generator};
//!
//! let path = BusinessCase.generate(std::path::Path::new("."))?;
//! println!("{}", BusinessCase.confirmation());
//! # Ok::<(), ave_docgen::Error>(())
//! ```

mod business_case;
mod click_script;
mod full_script;
mod playbook;
mod presentation;

pub use business_case::BusinessCase;
pub use click_script::ClickScript;
pub use full_script::FullScript;
pub use playbook::Playbook;
pub use presentation::Presentation;

use std::path::{Path, PathBuf};

use crate::common::{RGBColor, Result};
use crate::render::{self, Render};

/// Section headings of the speaker scripts and the playbook key messages.
pub(crate) const DARK_BLUE: RGBColor = RGBColor::new(0, 51, 102);

/// Stage directions in the speaker scripts.
pub(crate) const CUE_RED: RGBColor = RGBColor::new(200, 0, 0);

/// A document generator with a fixed output file.
pub trait Generator {
    /// The outline type this generator renders.
    type Document: Render;

    /// File name of the generated document.
    const FILE_NAME: &'static str;

    /// Build the outline. Fails only on an outline contract violation.
    fn build(&self) -> Result<Self::Document>;

    /// The line printed after a successful run.
    fn confirmation(&self) -> String {
        format!("Successfully generated '{}'", Self::FILE_NAME)
    }

    /// Build the outline and render it into `dir`, returning the written
    /// path.
    fn generate(&self, dir: &Path) -> Result<PathBuf> {
        self.generate_document(dir).map(|(_, path)| path)
    }

    /// Like [`generate`](Self::generate), but also hands back the rendered
    /// outline so the file can be checked against it.
    fn generate_document(&self, dir: &Path) -> Result<(Self::Document, PathBuf)> {
        let document = self.build()?;
        let path = dir.join(Self::FILE_NAME);
        render::render(&document, &path)?;
        Ok((document, path))
    }
}
