//! Read-only view of a serialized OPC package.
//!
//! Parses `[Content_Types].xml` and the `.rels` parts, then walks the
//! relationship graph from the package root to collect every reachable part.

use crate::ooxml::opc::constants::target_mode;
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::{CONTENT_TYPES_URI, PACKAGE_URI, PackURI};
use crate::ooxml::opc::phys_pkg::PhysPkgReader;
use quick_xml::Reader;
use quick_xml::events::Event;
use std::collections::{HashMap, HashSet};

/// A part as loaded from the physical package.
#[derive(Debug)]
pub struct SerializedPart {
    pub partname: PackURI,
    pub content_type: String,
    pub blob: Vec<u8>,
    pub srels: Vec<SerializedRelationship>,
}

/// A relationship as read from a .rels part.
#[derive(Debug, Clone)]
pub struct SerializedRelationship {
    /// Base URI for resolving relative references
    pub base_uri: String,
    pub r_id: String,
    pub reltype: String,
    pub target_ref: String,
    pub target_mode: String,
}

impl SerializedRelationship {
    #[inline]
    pub fn is_external(&self) -> bool {
        self.target_mode == target_mode::EXTERNAL
    }

    /// Absolute target partname of an internal relationship.
    pub fn target_partname(&self) -> Result<PackURI> {
        if self.is_external() {
            return Err(OpcError::InvalidRelationship(format!(
                "{} is external and has no target part",
                self.r_id
            )));
        }
        PackURI::from_rel_ref(&self.base_uri, &self.target_ref).map_err(OpcError::InvalidPackUri)
    }
}

/// Content type lookup by override partname, then by extension default.
struct ContentTypeMap {
    defaults: HashMap<String, String>,
    overrides: HashMap<String, String>,
}

impl ContentTypeMap {
    fn from_xml(xml: &[u8]) -> Result<Self> {
        let mut map = Self {
            defaults: HashMap::new(),
            overrides: HashMap::new(),
        };
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e)) => {
                    let is_default = match e.local_name().as_ref() {
                        b"Default" => true,
                        b"Override" => false,
                        _ => {
                            buf.clear();
                            continue;
                        },
                    };

                    let mut key = None;
                    let mut content_type = None;
                    for attr in e.attributes() {
                        let attr = attr?;
                        match attr.key.as_ref() {
                            b"Extension" | b"PartName" => {
                                key = Some(attr.unescape_value()?.to_string())
                            },
                            b"ContentType" => {
                                content_type = Some(attr.unescape_value()?.to_string())
                            },
                            _ => {},
                        }
                    }

                    if let (Some(key), Some(ct)) = (key, content_type) {
                        if is_default {
                            map.defaults.insert(key.to_lowercase(), ct);
                        } else {
                            map.overrides.insert(key, ct);
                        }
                    }
                },
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(OpcError::XmlError(format!(
                        "Content types parse error: {}",
                        e
                    )));
                },
                _ => {},
            }
            buf.clear();
        }

        Ok(map)
    }

    fn get(&self, pack_uri: &PackURI) -> Result<String> {
        if let Some(ct) = self.overrides.get(pack_uri.as_str()) {
            return Ok(ct.clone());
        }
        self.defaults
            .get(&pack_uri.ext().to_lowercase())
            .cloned()
            .ok_or_else(|| OpcError::ContentTypeNotFound(pack_uri.to_string()))
    }
}

/// Serialized parts and package relationships of an opened package.
pub struct PackageReader {
    pkg_srels: Vec<SerializedRelationship>,
    sparts: Vec<SerializedPart>,
}

impl PackageReader {
    /// Load every part reachable from the package relationships.
    pub fn from_phys_reader(mut phys_reader: PhysPkgReader) -> Result<Self> {
        let content_types_uri = PackURI::new(CONTENT_TYPES_URI).map_err(OpcError::InvalidPackUri)?;
        let content_types = ContentTypeMap::from_xml(phys_reader.blob_for(&content_types_uri)?)?;

        let package_uri = PackURI::new(PACKAGE_URI).map_err(OpcError::InvalidPackUri)?;
        let pkg_srels = Self::load_rels(&phys_reader, &package_uri)?;

        let sparts = Self::load_parts(&mut phys_reader, &pkg_srels, &content_types)?;
        Ok(Self { pkg_srels, sparts })
    }

    fn load_rels(
        phys_reader: &PhysPkgReader,
        source_uri: &PackURI,
    ) -> Result<Vec<SerializedRelationship>> {
        match phys_reader.rels_xml_for(source_uri)? {
            Some(xml) => Self::parse_rels_xml(xml, source_uri.base_uri()),
            None => Ok(Vec::new()),
        }
    }

    fn parse_rels_xml(rels_xml: &[u8], base_uri: &str) -> Result<Vec<SerializedRelationship>> {
        let mut srels = Vec::new();
        let mut reader = Reader::from_reader(rels_xml);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e))
                    if e.local_name().as_ref() == b"Relationship" =>
                {
                    let mut r_id = None;
                    let mut reltype = None;
                    let mut target_ref = None;
                    let mut target_mode = target_mode::INTERNAL.to_string();

                    for attr in e.attributes() {
                        let attr = attr?;
                        match attr.key.as_ref() {
                            b"Id" => r_id = Some(attr.unescape_value()?.to_string()),
                            b"Type" => reltype = Some(attr.unescape_value()?.to_string()),
                            b"Target" => target_ref = Some(attr.unescape_value()?.to_string()),
                            b"TargetMode" => target_mode = attr.unescape_value()?.to_string(),
                            _ => {},
                        }
                    }

                    if let (Some(r_id), Some(reltype), Some(target_ref)) = (r_id, reltype, target_ref)
                    {
                        srels.push(SerializedRelationship {
                            base_uri: base_uri.to_string(),
                            r_id,
                            reltype,
                            target_ref,
                            target_mode,
                        });
                    }
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(OpcError::XmlError(format!("Rels parse error: {}", e))),
                _ => {},
            }
            buf.clear();
        }

        Ok(srels)
    }

    /// Walk the relationship graph depth first, taking each blob once.
    fn load_parts(
        phys_reader: &mut PhysPkgReader,
        pkg_srels: &[SerializedRelationship],
        content_types: &ContentTypeMap,
    ) -> Result<Vec<SerializedPart>> {
        let mut sparts = Vec::new();
        let mut visited = HashSet::new();
        let mut work_queue: Vec<PackURI> = Vec::new();

        for srel in pkg_srels.iter().filter(|srel| !srel.is_external()) {
            let partname = srel.target_partname()?;
            if visited.insert(partname.clone()) {
                work_queue.push(partname);
            }
        }

        while let Some(partname) = work_queue.pop() {
            let srels = Self::load_rels(phys_reader, &partname)?;
            for srel in srels.iter().filter(|srel| !srel.is_external()) {
                let child = srel.target_partname()?;
                if visited.insert(child.clone()) {
                    work_queue.push(child);
                }
            }

            let blob = phys_reader.take_blob(&partname)?;
            let content_type = content_types.get(&partname)?;
            sparts.push(SerializedPart {
                partname,
                content_type,
                blob,
                srels,
            });
        }

        Ok(sparts)
    }

    pub fn pkg_srels(&self) -> &[SerializedRelationship] {
        &self.pkg_srels
    }

    /// Take ownership of the serialized parts.
    pub fn take_sparts(&mut self) -> Vec<SerializedPart> {
        std::mem::take(&mut self.sparts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_map() {
        let xml = br#"<?xml version="1.0"?>
            <Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
                <Default Extension="xml" ContentType="application/xml"/>
                <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
                <Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>
            </Types>"#;

        let ct_map = ContentTypeMap::from_xml(xml).unwrap();

        let uri = PackURI::new("/docProps/app.xml").unwrap();
        assert_eq!(ct_map.get(&uri).unwrap(), "application/xml");

        let uri = PackURI::new("/ppt/presentation.xml").unwrap();
        assert_eq!(
            ct_map.get(&uri).unwrap(),
            "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"
        );

        let uri = PackURI::new("/ppt/media/image1.png").unwrap();
        assert!(matches!(ct_map.get(&uri), Err(OpcError::ContentTypeNotFound(_))));
    }

    #[test]
    fn test_parse_rels_xml_resolves_targets() {
        let xml = br#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
            <Relationship Id="rId1" Type="t/slideLayout" Target="../slideLayouts/slideLayout2.xml"/>
            <Relationship Id="rId2" Type="t/hyperlink" Target="https://example.com" TargetMode="External"/>
        </Relationships>"#;

        let srels = PackageReader::parse_rels_xml(xml, "/ppt/slides").unwrap();
        assert_eq!(srels.len(), 2);
        assert_eq!(
            srels[0].target_partname().unwrap().as_str(),
            "/ppt/slideLayouts/slideLayout2.xml"
        );
        assert!(srels[1].is_external());
        assert!(srels[1].target_partname().is_err());
    }

    #[test]
    fn test_load_parts_takes_shared_targets_once() {
        use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
        use crate::ooxml::opc::package::OpcPackage;
        use crate::ooxml::opc::part::Part;

        let pres_uri = PackURI::new("/ppt/presentation.xml").unwrap();
        let layout_uri = PackURI::slide_layout(1);
        let master_uri = PackURI::new("/ppt/slideMasters/slideMaster1.xml").unwrap();

        let mut pkg = OpcPackage::new();
        let mut pres = Part::xml(
            pres_uri.clone(),
            ct::PML_PRESENTATION_MAIN,
            "<p:presentation/>".into(),
        );
        pres.relate_to(&PackURI::slide(1), rt::SLIDE);
        pres.relate_to(&PackURI::slide(2), rt::SLIDE);
        pkg.add_part(pres);
        for n in 1..=2 {
            let mut slide = Part::xml(PackURI::slide(n), ct::PML_SLIDE, "<p:sld/>".into());
            slide.relate_to(&layout_uri, rt::SLIDE_LAYOUT);
            pkg.add_part(slide);
        }
        let mut layout =
            Part::xml(layout_uri.clone(), ct::PML_SLIDE_LAYOUT, "<p:sldLayout/>".into());
        layout.relate_to(&master_uri, rt::SLIDE_MASTER);
        pkg.add_part(layout);
        let mut master =
            Part::xml(master_uri.clone(), ct::PML_SLIDE_MASTER, "<p:sldMaster/>".into());
        master.relate_to(&layout_uri, rt::SLIDE_LAYOUT);
        pkg.add_part(master);
        pkg.relate_to(&pres_uri, rt::OFFICE_DOCUMENT);

        let bytes = pkg.to_bytes().unwrap();
        let phys = PhysPkgReader::from_reader(std::io::Cursor::new(bytes)).unwrap();
        let mut reader = PackageReader::from_phys_reader(phys).unwrap();
        assert_eq!(reader.pkg_srels().len(), 1);

        let mut sparts = reader.take_sparts();
        sparts.sort_by(|a, b| a.partname.as_str().cmp(b.partname.as_str()));
        let loaded: Vec<(&str, &str, usize)> = sparts
            .iter()
            .map(|p| (p.partname.as_str(), p.content_type.as_str(), p.srels.len()))
            .collect();
        assert_eq!(
            loaded,
            vec![
                ("/ppt/presentation.xml", ct::PML_PRESENTATION_MAIN, 2),
                ("/ppt/slideLayouts/slideLayout1.xml", ct::PML_SLIDE_LAYOUT, 1),
                ("/ppt/slideMasters/slideMaster1.xml", ct::PML_SLIDE_MASTER, 1),
                ("/ppt/slides/slide1.xml", ct::PML_SLIDE, 1),
                ("/ppt/slides/slide2.xml", ct::PML_SLIDE, 1),
            ]
        );
        assert_eq!(sparts[3].blob, b"<p:sld/>");
    }
}
