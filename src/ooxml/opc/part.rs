//! Parts of an OPC package.
//!
//! A part is a named blob with a content type and its own relationships.
//! Presentation parts are all XML, so the blob is kept as raw UTF-8 bytes and
//! parsed on demand by the PresentationML readers.
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::PackURI;
use crate::ooxml::opc::rel::Relationships;

#[derive(Debug, Clone)]
pub struct Part {
    /// The partname (URI) of this part
    partname: PackURI,

    /// The content type of this part
    content_type: String,

    blob: Vec<u8>,

    /// Relationships from this part to other parts
    rels: Relationships,
}

impl Part {
    /// Create a new part with no relationships.
    pub fn new(partname: PackURI, content_type: &str, blob: Vec<u8>) -> Self {
        let rels = Relationships::new(partname.base_uri().to_string());
        Self {
            partname,
            content_type: content_type.to_string(),
            blob,
            rels,
        }
    }

    /// Create a part from generated XML.
    pub fn xml(partname: PackURI, content_type: &str, xml: String) -> Self {
        Self::new(partname, content_type, xml.into_bytes())
    }

    #[inline]
    pub fn partname(&self) -> &PackURI {
        &self.partname
    }

    #[inline]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    #[inline]
    pub fn blob(&self) -> &[u8] {
        &self.blob
    }

    /// Replace the content, keeping the relationships.
    pub fn set_blob(&mut self, blob: Vec<u8>) {
        self.blob = blob;
    }

    /// The blob as XML text.
    pub fn xml_str(&self) -> Result<&str> {
        std::str::from_utf8(&self.blob)
            .map_err(|e| OpcError::XmlError(format!("{} is not UTF-8: {}", self.partname, e)))
    }

    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    #[inline]
    pub fn rels_mut(&mut self) -> &mut Relationships {
        &mut self.rels
    }

    /// Add or reuse a relationship from this part to `target`, returning its rId.
    pub fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        self.rels.get_or_add(reltype, target).r_id().to_string()
    }

    /// Resolve an rId of this part to the target part name.
    pub fn target_partname(&self, r_id: &str) -> Result<PackURI> {
        self.rels
            .get(r_id)
            .ok_or_else(|| {
                OpcError::RelationshipNotFound(format!("{} in {}", r_id, self.partname))
            })?
            .target_partname()
    }

    /// Target of the single relationship of `reltype`.
    pub fn related_partname(&self, reltype: &str) -> Result<PackURI> {
        self.rels.part_with_reltype(reltype)?.target_partname()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};

    #[test]
    fn test_relate_to_resolves_back() {
        let mut slide = Part::xml(PackURI::slide(1), ct::PML_SLIDE, "<p:sld/>".to_string());
        let r_id = slide.relate_to(&PackURI::slide_layout(7), rt::SLIDE_LAYOUT);

        assert_eq!(slide.target_partname(&r_id).unwrap(), PackURI::slide_layout(7));
        assert_eq!(
            slide.related_partname(rt::SLIDE_LAYOUT).unwrap(),
            PackURI::slide_layout(7)
        );
        assert!(slide.target_partname("rId99").is_err());
        assert_eq!(slide.xml_str().unwrap(), "<p:sld/>");
    }
}
