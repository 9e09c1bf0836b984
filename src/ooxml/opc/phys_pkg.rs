//! The physical (ZIP) layer of an OPC package.

use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::PackURI;
use std::io::{Cursor, Read, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipArchive, ZipWriter};

/// Physical package writer.
///
/// Members are deflated and stamped with the fixed DOS epoch, so the same
/// parts written in the same order produce identical bytes.
pub struct PhysPkgWriter {
    archive: ZipWriter<Cursor<Vec<u8>>>,
    options: SimpleFileOptions,
}

impl PhysPkgWriter {
    /// Create a new package writer that writes to memory.
    pub fn new() -> Self {
        Self {
            archive: ZipWriter::new(Cursor::new(Vec::new())),
            options: SimpleFileOptions::default()
                .compression_method(CompressionMethod::Deflated)
                .last_modified_time(DateTime::default()),
        }
    }

    /// Write a part to the package.
    pub fn write(&mut self, pack_uri: &PackURI, blob: &[u8]) -> Result<()> {
        self.archive.start_file(pack_uri.membername(), self.options)?;
        self.archive.write_all(blob)?;
        Ok(())
    }

    /// Finish writing and return the package bytes.
    pub fn finish(self) -> Result<Vec<u8>> {
        Ok(self.archive.finish()?.into_inner())
    }
}

impl Default for PhysPkgWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Physical package reader over an in-memory ZIP archive.
pub struct PhysPkgReader {
    archive: ZipArchive<Cursor<Vec<u8>>>,
}

impl PhysPkgReader {
    /// Open a package file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_bytes(std::fs::read(path)?)
    }

    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        Ok(Self {
            archive: ZipArchive::new(Cursor::new(data))?,
        })
    }

    /// Content of the part at `pack_uri`.
    pub fn blob_for(&mut self, pack_uri: &PackURI) -> Result<Vec<u8>> {
        let mut file = match self.archive.by_name(pack_uri.membername()) {
            Ok(file) => file,
            Err(zip::result::ZipError::FileNotFound) => {
                return Err(OpcError::PartNotFound(pack_uri.to_string()));
            },
            Err(e) => return Err(e.into()),
        };
        let mut blob = Vec::with_capacity(file.size() as usize);
        file.read_to_end(&mut blob)?;
        Ok(blob)
    }

    /// Relationships XML of `source_uri`, or `None` when it has none.
    pub fn rels_xml_for(&mut self, source_uri: &PackURI) -> Result<Option<Vec<u8>>> {
        let rels_uri = source_uri.rels_uri().map_err(OpcError::InvalidPackUri)?;
        match self.blob_for(&rels_uri) {
            Ok(blob) => Ok(Some(blob)),
            Err(OpcError::PartNotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Member names in archive order.
    #[cfg(test)]
    pub(crate) fn member_names(&self) -> Vec<String> {
        self.archive.file_names().map(String::from).collect()
    }

    pub fn len(&self) -> usize {
        self.archive.len()
    }

    pub fn is_empty(&self) -> bool {
        self.archive.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let mut writer = PhysPkgWriter::new();
        let pack_uri = PackURI::new("/test.txt").unwrap();
        writer.write(&pack_uri, b"Hello, World!").unwrap();
        let zip_data = writer.finish().unwrap();

        let mut reader = PhysPkgReader::from_bytes(zip_data).unwrap();
        assert_eq!(reader.blob_for(&pack_uri).unwrap(), b"Hello, World!");
        assert_eq!(reader.member_names(), vec!["test.txt".to_string()]);
    }

    #[test]
    fn test_missing_part() {
        let mut writer = PhysPkgWriter::new();
        writer
            .write(&PackURI::new("/word/document.xml").unwrap(), b"<w:document/>")
            .unwrap();
        let mut reader = PhysPkgReader::from_bytes(writer.finish().unwrap()).unwrap();

        let missing = PackURI::new("/word/styles.xml").unwrap();
        assert!(matches!(reader.blob_for(&missing), Err(OpcError::PartNotFound(_))));
        assert_eq!(
            reader
                .rels_xml_for(&PackURI::new("/word/document.xml").unwrap())
                .unwrap(),
            None
        );
    }

    #[test]
    fn test_output_is_stable() {
        let build = || {
            let mut writer = PhysPkgWriter::new();
            writer.write(&PackURI::new("/a.xml").unwrap(), b"<a/>").unwrap();
            writer.write(&PackURI::new("/b.xml").unwrap(), b"<b/>").unwrap();
            writer.finish().unwrap()
        };
        assert_eq!(build(), build());
    }
}
