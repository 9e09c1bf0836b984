//! Relationships between parts of an OPC package.

use crate::common::xml::{escape_xml, unescape_xml};
use crate::ooxml::opc::constants::namespace;
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::PackURI;
use quick_xml::Reader;
use quick_xml::events::Event;

/// A single relationship from a source part to a target part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1", "rId2")
    r_id: String,

    /// Relationship type URI
    reltype: String,

    /// Target reference, relative to the source part's directory
    target_ref: String,
}

impl Relationship {
    pub fn new(r_id: String, reltype: String, target_ref: String) -> Self {
        Self {
            r_id,
            reltype,
            target_ref,
        }
    }

    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    #[inline]
    pub fn reltype(&self) -> &str {
        &self.reltype
    }

    #[inline]
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }
}

/// Ordered collection of relationships from a single source.
///
/// Relationships are kept in insertion order, which is also rId order for
/// collections built through [`Relationships::get_or_add`], so serialization
/// is stable across runs.
#[derive(Debug, Clone)]
pub struct Relationships {
    /// Directory of the source part, for resolving targets
    base_uri: String,

    rels: Vec<Relationship>,
}

impl Relationships {
    pub fn new(base_uri: impl Into<String>) -> Self {
        Self {
            base_uri: base_uri.into(),
            rels: Vec::new(),
        }
    }

    /// Parse a serialized .rels part.
    pub fn from_xml(base_uri: impl Into<String>, xml: &[u8]) -> Result<Self> {
        let mut rels = Self::new(base_uri);
        let mut reader = Reader::from_reader(xml);
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Empty(e) | Event::Start(e) if e.local_name().as_ref() == b"Relationship" => {
                    let mut r_id = None;
                    let mut reltype = None;
                    let mut target = None;
                    for attr in e.attributes() {
                        let attr = attr?;
                        let raw = std::str::from_utf8(&attr.value)
                            .map_err(|err| OpcError::XmlError(err.to_string()))?;
                        let value = unescape_xml(raw);
                        match attr.key.as_ref() {
                            b"Id" => r_id = Some(value),
                            b"Type" => reltype = Some(value),
                            b"Target" => target = Some(value),
                            _ => {},
                        }
                    }
                    match (r_id, reltype, target) {
                        (Some(r_id), Some(reltype), Some(target)) => {
                            rels.rels.push(Relationship::new(r_id, reltype, target))
                        },
                        _ => {
                            return Err(OpcError::XmlError(
                                "Relationship element missing Id, Type or Target".to_string(),
                            ));
                        },
                    }
                },
                Event::Eof => break,
                _ => {},
            }
            buf.clear();
        }

        Ok(rels)
    }

    /// Return the rId of the relationship of `reltype` to `target_ref`,
    /// adding one with the next free rId if none exists yet.
    pub fn get_or_add(&mut self, reltype: &str, target_ref: &str) -> String {
        if let Some(rel) = self
            .rels
            .iter()
            .find(|rel| rel.reltype() == reltype && rel.target_ref() == target_ref)
        {
            return rel.r_id().to_string();
        }

        let r_id = self.next_r_id();
        self.rels.push(Relationship::new(
            r_id.clone(),
            reltype.to_string(),
            target_ref.to_string(),
        ));
        r_id
    }

    #[inline]
    pub fn get(&self, r_id: &str) -> Option<&Relationship> {
        self.rels.iter().find(|rel| rel.r_id() == r_id)
    }

    /// The single relationship of `reltype`.
    pub fn part_with_reltype(&self, reltype: &str) -> Result<&Relationship> {
        let mut matching = self.rels.iter().filter(|rel| rel.reltype() == reltype);
        match (matching.next(), matching.next()) {
            (Some(rel), None) => Ok(rel),
            (None, _) => Err(OpcError::PartNotFound(format!(
                "no relationship of type '{}'",
                reltype
            ))),
            (Some(_), Some(_)) => Err(OpcError::XmlError(format!(
                "multiple relationships of type '{}'",
                reltype
            ))),
        }
    }

    /// Absolute partname of a relationship's target.
    pub fn target_partname(&self, rel: &Relationship) -> Result<PackURI> {
        PackURI::from_rel_ref(&self.base_uri, rel.target_ref()).map_err(OpcError::InvalidPackUri)
    }

    /// Lowest "rIdN" not yet in use.
    fn next_r_id(&self) -> String {
        let mut used: Vec<u32> = self
            .rels
            .iter()
            .filter_map(|rel| rel.r_id().strip_prefix("rId")?.parse().ok())
            .collect();
        used.sort_unstable();

        let mut next = 1u32;
        for num in used {
            match num.cmp(&next) {
                std::cmp::Ordering::Equal => next += 1,
                std::cmp::Ordering::Greater => break,
                std::cmp::Ordering::Less => {},
            }
        }
        format!("rId{}", next)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.rels.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    /// Serialize to the XML of a .rels part.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.rels.len() * 160);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(r#"<Relationships xmlns=""#);
        xml.push_str(namespace::OPC_RELATIONSHIPS);
        xml.push_str(r#"">"#);

        for rel in &self.rels {
            xml.push_str(&format!(
                r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
                escape_xml(rel.r_id()),
                escape_xml(rel.reltype()),
                escape_xml(rel.target_ref()),
            ));
        }

        xml.push_str("</Relationships>");
        xml
    }
}

impl Default for Relationships {
    fn default() -> Self {
        Self::new("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_add() {
        let mut rels = Relationships::new("/word");

        assert_eq!(rels.get_or_add("type1", "target1"), "rId1");
        // Same type and target reuses the rId
        assert_eq!(rels.get_or_add("type1", "target1"), "rId1");
        assert_eq!(rels.get_or_add("type1", "target2"), "rId2");
        assert_eq!(rels.len(), 2);
    }

    #[test]
    fn test_xml_round_trip() {
        let mut rels = Relationships::new("/ppt/slides");
        rels.get_or_add("urn:layout", "../slideLayouts/slideLayout2.xml");
        rels.get_or_add("urn:a&b", "x.xml");

        let xml = rels.to_xml();
        assert!(xml.contains(r#"Type="urn:a&amp;b""#));

        let parsed = Relationships::from_xml("/ppt/slides", xml.as_bytes()).unwrap();
        assert_eq!(parsed.len(), 2);
        let layout = parsed.part_with_reltype("urn:layout").unwrap();
        assert_eq!(layout.r_id(), "rId1");
        assert_eq!(
            parsed.target_partname(layout).unwrap().as_str(),
            "/ppt/slideLayouts/slideLayout2.xml"
        );
        assert_eq!(parsed.get("rId2").unwrap().reltype(), "urn:a&b");
    }

    #[test]
    fn test_missing_reltype() {
        let rels = Relationships::default();
        assert!(matches!(
            rels.part_with_reltype("urn:none"),
            Err(OpcError::PartNotFound(_))
        ));
    }
}
