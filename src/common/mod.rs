//! Common types and utilities shared across the outline, the writers, and
//! the generators.

// Submodule declarations
pub mod error;
pub mod style;
pub mod unit;
pub mod xml;

// Re-exports for convenience
pub use error::{Error, Result};
pub use style::{Length, RGBColor};
