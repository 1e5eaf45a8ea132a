//! Physical (Zip) access to an OPC package.
//!
//! The reader decompresses every member up front, which suits the small
//! packages this crate produces and keeps the relationship walk in memory.
//! The writer deflates each member as it is added.

use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::PackURI;
use std::collections::HashMap;
use std::io::{Cursor, Read, Seek, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// Decompressed members of a Zip-based package, keyed by member name.
pub struct PhysPkgReader {
    members: HashMap<String, Vec<u8>>,
}

impl PhysPkgReader {
    /// Open a package file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(OpcError::PackageNotFound(path.display().to_string()));
        }
        let data = std::fs::read(path)?;
        Self::from_reader(Cursor::new(data))
    }

    /// Read every member of a Zip archive.
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        let mut archive = ZipArchive::new(reader)?;
        let mut members = HashMap::with_capacity(archive.len());

        for i in 0..archive.len() {
            let mut entry = archive.by_index(i)?;
            if entry.is_dir() {
                continue;
            }
            let mut data = Vec::with_capacity(entry.size() as usize);
            entry.read_to_end(&mut data)?;
            members.insert(entry.name().trim_start_matches('/').to_string(), data);
        }

        Ok(Self { members })
    }

    /// Binary content of a part.
    pub fn blob_for(&self, pack_uri: &PackURI) -> Result<&[u8]> {
        self.members
            .get(pack_uri.membername())
            .map(Vec::as_slice)
            .ok_or_else(|| OpcError::PartNotFound(pack_uri.to_string()))
    }

    /// Remove and return a member, avoiding a copy of its bytes.
    pub(crate) fn take_blob(&mut self, pack_uri: &PackURI) -> Result<Vec<u8>> {
        self.members
            .remove(pack_uri.membername())
            .ok_or_else(|| OpcError::PartNotFound(pack_uri.to_string()))
    }

    /// The relationships XML of a source, or `None` when it has none.
    pub fn rels_xml_for(&self, source_uri: &PackURI) -> Result<Option<&[u8]>> {
        let rels_uri = source_uri.rels_uri().map_err(OpcError::InvalidPackUri)?;
        Ok(self.members.get(rels_uri.membername()).map(Vec::as_slice))
    }

    /// Number of members (excluding directories).
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Member names, sorted.
    pub fn member_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.members.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Writes package members into an in-memory Zip archive.
pub struct PhysPkgWriter {
    zip: ZipWriter<Cursor<Vec<u8>>>,
    options: SimpleFileOptions,
}

impl PhysPkgWriter {
    pub fn new() -> Self {
        Self {
            zip: ZipWriter::new(Cursor::new(Vec::new())),
            options: SimpleFileOptions::default().compression_method(CompressionMethod::Deflated),
        }
    }

    /// Add one member for `pack_uri`.
    pub fn write(&mut self, pack_uri: &PackURI, blob: &[u8]) -> Result<()> {
        log::debug!("writing {} ({} bytes)", pack_uri, blob.len());
        self.zip.start_file(pack_uri.membername(), self.options)?;
        self.zip.write_all(blob)?;
        Ok(())
    }

    /// Finish the archive and return its bytes.
    pub fn finish(self) -> Result<Vec<u8>> {
        let cursor = self.zip.finish()?;
        Ok(cursor.into_inner())
    }
}

impl Default for PhysPkgWriter {
    fn default() -> Self {
        Self::new()
    }
}
