//! Error conversion implementations.
//!
//! Package-level errors are flattened into the unified [`Error`] so that an
//! I/O failure deep inside the package writer still reaches the caller as
//! [`Error::Io`].

use super::types::Error;
use crate::ooxml::error::OoxmlError;
use crate::ooxml::opc::error::OpcError;

impl From<OpcError> for Error {
    fn from(err: OpcError) -> Self {
        Error::from_opc_error(err)
    }
}

impl From<OoxmlError> for Error {
    fn from(err: OoxmlError) -> Self {
        match err {
            OoxmlError::Io(e) => Error::Io(e),
            OoxmlError::Xml(s) => Error::XmlError(s),
            OoxmlError::PartNotFound(s) => Error::ComponentNotFound(s),
            OoxmlError::InvalidFormat(s) => Error::InvalidFormat(s),
            OoxmlError::Opc(e) => Error::from_opc_error(e),
            OoxmlError::Other(s) => Error::Other(s),
        }
    }
}

impl Error {
    fn from_opc_error(err: OpcError) -> Self {
        match err {
            OpcError::IoError(e) => Error::Io(e),
            OpcError::ZipError(e) => Error::ZipError(e.to_string()),
            OpcError::PartNotFound(s) => Error::ComponentNotFound(s),
            OpcError::InvalidPackUri(s) => Error::InvalidFormat(s),
            OpcError::XmlError(s) => Error::XmlError(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error_survives_nesting() {
        let inner = io::Error::new(io::ErrorKind::PermissionDenied, "read-only");
        let err = Error::from(OoxmlError::Opc(OpcError::IoError(inner)));
        match err {
            Error::Io(e) => assert_eq!(e.kind(), io::ErrorKind::PermissionDenied),
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[test]
    fn test_xml_error_maps_to_xml() {
        let err = Error::from(OoxmlError::Xml("unexpected eof".to_string()));
        assert!(matches!(err, Error::XmlError(s) if s == "unexpected eof"));
    }
}
