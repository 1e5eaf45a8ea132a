//! In-memory OPC package.
//!
//! [`OpcPackage`] owns the package relationships and every part keyed by
//! partname. Parts are kept in a sorted map so a package always serializes
//! to the same member order.

use crate::ooxml::opc::constants::relationship_type;
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::{PACKAGE_URI, PackURI};
use crate::ooxml::opc::part::Part;
use crate::ooxml::opc::phys_pkg::PhysPkgReader;
use crate::ooxml::opc::pkgreader::PackageReader;
use crate::ooxml::opc::pkgwriter::PackageWriter;
use crate::ooxml::opc::rel::Relationships;
use std::collections::BTreeMap;
use std::io::Cursor;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct OpcPackage {
    /// Package-level relationships
    rels: Relationships,

    parts: BTreeMap<PackURI, Part>,
}

impl OpcPackage {
    /// Create a new empty package.
    pub fn new() -> Self {
        Self {
            rels: Relationships::new(PACKAGE_URI.to_string()),
            parts: BTreeMap::new(),
        }
    }

    /// Open a package file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_phys_reader(PhysPkgReader::open(path)?)
    }

    /// Load a package from in-memory Zip bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_phys_reader(PhysPkgReader::from_reader(Cursor::new(bytes))?)
    }

    fn from_phys_reader(phys_reader: PhysPkgReader) -> Result<Self> {
        let mut pkg_reader = PackageReader::from_phys_reader(phys_reader)?;
        let mut package = Self::new();

        for srel in pkg_reader.pkg_srels() {
            package.rels.add_relationship(
                srel.reltype.clone(),
                srel.target_ref.clone(),
                srel.r_id.clone(),
                srel.is_external(),
            );
        }

        for spart in pkg_reader.take_sparts() {
            let mut part = Part::new(spart.partname, &spart.content_type, spart.blob);
            for srel in spart.srels {
                let is_external = srel.is_external();
                part.rels_mut().add_relationship(
                    srel.reltype,
                    srel.target_ref,
                    srel.r_id,
                    is_external,
                );
            }
            package.add_part(part);
        }

        Ok(package)
    }

    /// The part the package's officeDocument relationship points at.
    pub fn main_document_part(&self) -> Result<&Part> {
        self.part_by_reltype(relationship_type::OFFICE_DOCUMENT)
    }

    pub fn get_part(&self, partname: &PackURI) -> Result<&Part> {
        self.parts
            .get(partname)
            .ok_or_else(|| OpcError::PartNotFound(partname.to_string()))
    }

    pub fn get_part_mut(&mut self, partname: &PackURI) -> Result<&mut Part> {
        self.parts
            .get_mut(partname)
            .ok_or_else(|| OpcError::PartNotFound(partname.to_string()))
    }

    /// Part targeted by the single package relationship of `reltype`.
    pub fn part_by_reltype(&self, reltype: &str) -> Result<&Part> {
        let partname = self.rels.part_with_reltype(reltype)?.target_partname()?;
        self.get_part(&partname)
    }

    /// Part related from `source` by `r_id`.
    pub fn related_part(&self, source: &Part, r_id: &str) -> Result<&Part> {
        self.get_part(&source.target_partname(r_id)?)
    }

    /// Add a part, replacing any part with the same partname.
    pub fn add_part(&mut self, part: Part) {
        self.parts.insert(part.partname().clone(), part);
    }

    /// Parts in partname order.
    pub fn iter_parts(&self) -> impl Iterator<Item = &Part> {
        self.parts.values()
    }

    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    pub fn contains_part(&self, partname: &PackURI) -> bool {
        self.parts.contains_key(partname)
    }

    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Relate the package to a part, returning the rId.
    pub fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        self.rels.get_or_add(reltype, target).r_id().to_string()
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        PackageWriter::to_bytes(self)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        PackageWriter::write(path, self)
    }
}

impl Default for OpcPackage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};

    fn minimal_package() -> OpcPackage {
        let mut pkg = OpcPackage::new();
        let pres_uri = PackURI::new("/ppt/presentation.xml").unwrap();
        let mut pres = Part::xml(
            pres_uri.clone(),
            ct::PML_PRESENTATION_MAIN,
            "<p:presentation/>".to_string(),
        );
        pres.relate_to(&PackURI::slide(1), rt::SLIDE);
        pkg.add_part(pres);
        pkg.add_part(Part::xml(PackURI::slide(1), ct::PML_SLIDE, "<p:sld/>".to_string()));
        pkg.relate_to(&pres_uri, rt::OFFICE_DOCUMENT);
        pkg
    }

    #[test]
    fn test_round_trip_through_bytes() {
        let bytes = minimal_package().to_bytes().unwrap();
        let pkg = OpcPackage::from_bytes(&bytes).unwrap();

        assert_eq!(pkg.part_count(), 2);
        let main = pkg.main_document_part().unwrap();
        assert_eq!(main.content_type(), ct::PML_PRESENTATION_MAIN);

        let slide = pkg.related_part(main, "rId1").unwrap();
        assert_eq!(slide.partname(), &PackURI::slide(1));
        assert_eq!(slide.blob(), b"<p:sld/>");
    }

    #[test]
    fn test_missing_part() {
        let pkg = OpcPackage::new();
        assert!(matches!(
            pkg.main_document_part(),
            Err(OpcError::RelationshipNotFound(_))
        ));
        assert!(!pkg.contains_part(&PackURI::slide(1)));
    }
}
