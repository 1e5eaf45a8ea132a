//! Serializes an [`OpcPackage`] to Zip bytes.
//!
//! Writes `[Content_Types].xml`, the package relationships, then every part
//! followed by its own relationships part when it has any.

use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::{content_type as ct, namespace};
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::package::OpcPackage;
use crate::ooxml::opc::packuri::{CONTENT_TYPES_URI, PACKAGE_URI, PackURI};
use crate::ooxml::opc::phys_pkg::PhysPkgWriter;
use std::collections::BTreeMap;
use std::fmt::Write as FmtWrite;
use std::path::Path;

pub struct PackageWriter;

impl PackageWriter {
    /// Write a package to a file in a single write.
    pub fn write<P: AsRef<Path>>(path: P, package: &OpcPackage) -> Result<()> {
        let path = path.as_ref();
        let bytes = Self::to_bytes(package)?;
        std::fs::write(path, &bytes)?;
        log::debug!(
            "wrote {} ({} parts, {} bytes)",
            path.display(),
            package.part_count(),
            bytes.len()
        );
        Ok(())
    }

    /// Serialize a package to bytes.
    pub fn to_bytes(package: &OpcPackage) -> Result<Vec<u8>> {
        let mut phys_writer = PhysPkgWriter::new();

        let content_types_uri = PackURI::new(CONTENT_TYPES_URI).map_err(OpcError::InvalidPackUri)?;
        let cti = ContentTypesItem::from_package(package);
        phys_writer.write(&content_types_uri, cti.to_xml().as_bytes())?;

        let package_uri = PackURI::new(PACKAGE_URI).map_err(OpcError::InvalidPackUri)?;
        let rels_uri = package_uri.rels_uri().map_err(OpcError::InvalidPackUri)?;
        phys_writer.write(&rels_uri, package.rels().to_xml().as_bytes())?;

        for part in package.iter_parts() {
            phys_writer.write(part.partname(), part.blob())?;

            if !part.rels().is_empty() {
                let rels_uri = part.partname().rels_uri().map_err(OpcError::InvalidPackUri)?;
                phys_writer.write(&rels_uri, part.rels().to_xml().as_bytes())?;
            }
        }

        phys_writer.finish()
    }
}

/// Default and Override entries of `[Content_Types].xml`, kept sorted.
struct ContentTypesItem {
    defaults: BTreeMap<String, String>,
    overrides: BTreeMap<String, String>,
}

impl ContentTypesItem {
    fn new() -> Self {
        let mut defaults = BTreeMap::new();
        defaults.insert("rels".to_string(), ct::OPC_RELATIONSHIPS.to_string());
        defaults.insert("xml".to_string(), ct::XML.to_string());

        Self {
            defaults,
            overrides: BTreeMap::new(),
        }
    }

    fn from_package(package: &OpcPackage) -> Self {
        let mut cti = Self::new();
        for part in package.iter_parts() {
            cti.add_content_type(part.partname(), part.content_type());
        }
        cti
    }

    /// Use a Default entry for well-known pairs, an Override otherwise.
    fn add_content_type(&mut self, partname: &PackURI, content_type: &str) {
        let ext = partname.ext();
        if matches!((ext, content_type), ("rels", ct::OPC_RELATIONSHIPS) | ("xml", ct::XML)) {
            self.defaults.insert(ext.to_string(), content_type.to_string());
        } else {
            self.overrides
                .insert(partname.to_string(), content_type.to_string());
        }
    }

    fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.overrides.len() * 160);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        let _ = write!(xml, r#"<Types xmlns="{}">"#, namespace::OPC_CONTENT_TYPES);

        for (ext, content_type) in &self.defaults {
            let _ = write!(
                xml,
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                escape_xml(ext),
                escape_xml(content_type)
            );
        }
        for (partname, content_type) in &self.overrides {
            let _ = write!(
                xml,
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                escape_xml(partname),
                escape_xml(content_type)
            );
        }

        xml.push_str("</Types>");
        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_types_xml() {
        let mut cti = ContentTypesItem::new();
        cti.add_content_type(&PackURI::slide(1), ct::PML_SLIDE);
        cti.add_content_type(&PackURI::new("/docProps/custom.xml").unwrap(), ct::XML);

        let xml = cti.to_xml();

        assert!(xml.contains(r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#));
        assert!(xml.contains(r#"<Default Extension="xml" ContentType="application/xml"/>"#));
        assert!(xml.contains(r#"<Override PartName="/ppt/slides/slide1.xml""#));
        assert!(!xml.contains("custom.xml"));
        // Defaults precede overrides
        assert!(xml.find("<Default").unwrap() < xml.find("<Override").unwrap());
    }
}
