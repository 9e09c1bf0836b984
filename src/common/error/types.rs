//! Unified error type for document generation.
//!
//! Outline contract violations, package assembly failures and I/O failures
//! all surface through [`Error`], so a generator binary can report any of
//! them with a single error chain.
use thiserror::Error;

use crate::outline::OutlineError;

/// Main error type for generator operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error, surfaced unmodified from the filesystem
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The outline violated one of its construction contracts
    #[error("Invalid outline: {0}")]
    Outline(#[from] OutlineError),

    /// XML serialization or parsing error
    #[error("XML error: {0}")]
    XmlError(String),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// Package part not found
    #[error("Component not found: {0}")]
    ComponentNotFound(String),

    /// Malformed package content
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// A written document does not match the outline it was rendered from
    #[error("Verification failed for {file}: expected {expected} {what}, found {found}")]
    Verification {
        file: String,
        what: &'static str,
        expected: usize,
        found: usize,
    },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type for generator operations.
pub type Result<T> = std::result::Result<T, Error>;
