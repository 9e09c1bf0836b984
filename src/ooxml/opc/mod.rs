/// Open Packaging Conventions (OPC) implementation.
///
/// Covers the parts of Open Packaging Conventions needed to assemble and read back
/// Office Open XML documents:
///
/// - Package structure (parts, relationships)
/// - Content type management
/// - ZIP-based physical packaging
pub mod constants;
pub mod error;
pub mod package;
pub mod packuri;
pub mod part;
pub mod phys_pkg;
pub mod pkgwriter;
pub mod rel;

// Re-export commonly used types
pub use package::OpcPackage;
pub use packuri::PackURI;
pub use part::{BlobPart, Part};
pub use rel::{Relationship, Relationships};
