//! Relationships between parts of an OPC package.
//!
//! Every part (and the package itself) owns a relationships collection that
//! is serialized to its `_rels/*.rels` companion part.
use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::namespace;
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::PackURI;
use std::fmt::Write as FmtWrite;

/// A single relationship from a source part to a target.
#[derive(Debug, Clone)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1", "rId2")
    r_id: String,

    /// Relationship type URI
    reltype: String,

    /// Target reference, relative to the source directory or an external URL
    target_ref: String,

    /// Base URI for resolving relative references
    base_uri: String,

    is_external: bool,
}

impl Relationship {
    pub fn new(
        r_id: String,
        reltype: String,
        target_ref: String,
        base_uri: String,
        is_external: bool,
    ) -> Self {
        Self {
            r_id,
            reltype,
            target_ref,
            base_uri,
            is_external,
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

    #[inline]
    pub fn is_external(&self) -> bool {
        self.is_external
    }

    /// Get the absolute target partname for internal relationships.
    pub fn target_partname(&self) -> Result<PackURI> {
        if self.is_external {
            return Err(OpcError::InvalidRelationship(format!(
                "{} is external and has no target part",
                self.r_id
            )));
        }
        PackURI::from_rel_ref(&self.base_uri, &self.target_ref).map_err(OpcError::InvalidPackUri)
    }
}

/// Collection of relationships from a single source.
///
/// Relationships keep their insertion order, so a freshly built part lists
/// them as rId1, rId2, ... in the order they were related.
#[derive(Debug, Clone)]
pub struct Relationships {
    /// Base URI for resolving relative references
    base_uri: String,

    rels: Vec<Relationship>,
}

impl Relationships {
    /// Create a new empty relationships collection rooted at `base_uri`.
    pub fn new(base_uri: String) -> Self {
        Self {
            base_uri,
            rels: Vec::new(),
        }
    }

    /// Add a relationship with an explicit rId, as read from a .rels part.
    pub fn add_relationship(
        &mut self,
        reltype: String,
        target_ref: String,
        r_id: String,
        is_external: bool,
    ) -> &Relationship {
        self.rels.retain(|rel| rel.r_id != r_id);
        self.rels.push(Relationship::new(
            r_id,
            reltype,
            target_ref,
            self.base_uri.clone(),
            is_external,
        ));
        &self.rels[self.rels.len() - 1]
    }

    /// Get a relationship by its ID.
    #[inline]
    pub fn get(&self, r_id: &str) -> Option<&Relationship> {
        self.rels.iter().find(|rel| rel.r_id == r_id)
    }

    /// Get or add an internal relationship to `target`.
    ///
    /// The target is stored relative to this collection's base URI. An
    /// existing relationship of the same type to the same target is reused.
    pub fn get_or_add(&mut self, reltype: &str, target: &PackURI) -> &Relationship {
        let target_ref = target.relative_ref(&self.base_uri);
        if let Some(pos) = self.rels.iter().position(|rel| {
            rel.reltype == reltype && rel.target_ref == target_ref && !rel.is_external
        }) {
            return &self.rels[pos];
        }

        let r_id = self.next_r_id();
        self.add_relationship(reltype.to_string(), target_ref, r_id, false)
    }

    /// Next free relationship ID, filling the lowest gap first.
    fn next_r_id(&self) -> String {
        let mut used: Vec<u32> = self
            .rels
            .iter()
            .filter_map(|rel| rel.r_id.strip_prefix("rId")?.parse().ok())
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

    /// Get the single relationship of a type.
    ///
    /// Fails when there is none, or more than one.
    pub fn part_with_reltype(&self, reltype: &str) -> Result<&Relationship> {
        let mut matching = self.rels.iter().filter(|rel| rel.reltype == reltype);
        match (matching.next(), matching.next()) {
            (Some(rel), None) => Ok(rel),
            (None, _) => Err(OpcError::RelationshipNotFound(format!(
                "No relationship of type '{}'",
                reltype
            ))),
            (Some(_), Some(_)) => Err(OpcError::InvalidRelationship(format!(
                "Multiple relationships of type '{}'",
                reltype
            ))),
        }
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
        // Writing into a String cannot fail
        let _ = write!(xml, r#"<Relationships xmlns="{}">"#, namespace::OPC_RELATIONSHIPS);

        for rel in &self.rels {
            let target_mode = if rel.is_external {
                r#" TargetMode="External""#
            } else {
                ""
            };
            let _ = write!(
                xml,
                r#"<Relationship Id="{}" Type="{}" Target="{}"{}/>"#,
                escape_xml(&rel.r_id),
                escape_xml(&rel.reltype),
                escape_xml(&rel.target_ref),
                target_mode
            );
        }

        xml.push_str("</Relationships>");
        xml
    }
}

impl Default for Relationships {
    fn default() -> Self {
        Self::new("/".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::relationship_type as rt;

    #[test]
    fn test_get_or_add_reuses_and_relativizes() {
        let mut rels = Relationships::new("/ppt/slides".to_string());

        let layout = PackURI::slide_layout(1);
        let first = rels.get_or_add(rt::SLIDE_LAYOUT, &layout).r_id().to_string();
        assert_eq!(first, "rId1");
        assert_eq!(rels.get("rId1").unwrap().target_ref(), "../slideLayouts/slideLayout1.xml");

        let again = rels.get_or_add(rt::SLIDE_LAYOUT, &layout).r_id().to_string();
        assert_eq!(again, "rId1");

        let other = rels
            .get_or_add(rt::SLIDE_LAYOUT, &PackURI::slide_layout(2))
            .r_id()
            .to_string();
        assert_eq!(other, "rId2");
    }

    #[test]
    fn test_next_r_id_fills_gaps() {
        let mut rels = Relationships::new("/ppt".to_string());
        rels.add_relationship("t".to_string(), "a.xml".to_string(), "rId2".to_string(), false);
        assert_eq!(rels.next_r_id(), "rId1");
    }

    #[test]
    fn test_part_with_reltype() {
        let mut rels = Relationships::default();
        assert!(rels.part_with_reltype(rt::OFFICE_DOCUMENT).is_err());

        let pres = PackURI::new("/ppt/presentation.xml").unwrap();
        rels.get_or_add(rt::OFFICE_DOCUMENT, &pres);
        let rel = rels.part_with_reltype(rt::OFFICE_DOCUMENT).unwrap();
        assert_eq!(rel.target_partname().unwrap(), pres);
    }

    #[test]
    fn test_to_xml_escapes_targets() {
        let mut rels = Relationships::default();
        rels.add_relationship(
            "http://example.com/link".to_string(),
            "http://example.com/?a=1&b=2".to_string(),
            "rId1".to_string(),
            true,
        );
        let xml = rels.to_xml();
        assert!(xml.contains(r#"Target="http://example.com/?a=1&amp;b=2" TargetMode="External""#));
    }
}
