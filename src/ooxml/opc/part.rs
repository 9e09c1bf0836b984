//! Parts of an OPC package.

use crate::ooxml::opc::packuri::PackURI;
use crate::ooxml::opc::rel::Relationships;

/// A part in an OPC package.
///
/// Each part has a unique partname, a content type, a serialized body, and
/// may have relationships to other parts.
pub trait Part {
    fn partname(&self) -> &PackURI;

    fn content_type(&self) -> &str;

    /// Serialized content of the part.
    fn blob(&self) -> &[u8];

    fn rels(&self) -> &Relationships;

    fn rels_mut(&mut self) -> &mut Relationships;

    /// Relate this part to `target`, returning the rId. The stored target is
    /// relative to this part's directory.
    fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        let target_ref = target.relative_ref(self.partname().base_uri());
        self.rels_mut().get_or_add(reltype, &target_ref)
    }
}

/// A part whose content is already serialized.
#[derive(Debug, Clone)]
pub struct BlobPart {
    partname: PackURI,
    content_type: String,
    blob: Vec<u8>,
    rels: Relationships,
}

impl BlobPart {
    pub fn new(
        partname: PackURI,
        content_type: impl Into<String>,
        blob: impl Into<Vec<u8>>,
    ) -> Self {
        let rels = Relationships::new(partname.base_uri());
        Self {
            partname,
            content_type: content_type.into(),
            blob: blob.into(),
            rels,
        }
    }

    /// Replace the serialized content, keeping the relationships.
    pub fn set_blob(&mut self, blob: impl Into<Vec<u8>>) {
        self.blob = blob.into();
    }
}

impl Part for BlobPart {
    fn partname(&self) -> &PackURI {
        &self.partname
    }

    fn content_type(&self) -> &str {
        &self.content_type
    }

    fn blob(&self) -> &[u8] {
        &self.blob
    }

    fn rels(&self) -> &Relationships {
        &self.rels
    }

    fn rels_mut(&mut self) -> &mut Relationships {
        &mut self.rels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relate_to_uses_relative_target() {
        let mut slide = BlobPart::new(
            PackURI::new("/ppt/slides/slide1.xml").unwrap(),
            "application/xml",
            "<p:sld/>",
        );
        let layout = PackURI::new("/ppt/slideLayouts/slideLayout1.xml").unwrap();

        assert_eq!(slide.relate_to(&layout, "urn:layout"), "rId1");
        assert_eq!(slide.relate_to(&layout, "urn:layout"), "rId1");
        let rel = slide.rels().get("rId1").unwrap();
        assert_eq!(rel.target_ref(), "../slideLayouts/slideLayout1.xml");
        assert_eq!(slide.blob(), b"<p:sld/>");
    }
}
