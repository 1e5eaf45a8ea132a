/// Error types for OPC package operations
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpcError {
    #[error("Package not found: {0}")]
    PackageNotFound(String),

    #[error("Invalid pack URI: {0}")]
    InvalidPackUri(String),

    #[error("Part not found: {0}")]
    PartNotFound(String),

    #[error("Relationship not found: {0}")]
    RelationshipNotFound(String),

    #[error("Content type not found for partname: {0}")]
    ContentTypeNotFound(String),

    #[error("Invalid relationship: {0}")]
    InvalidRelationship(String),

    #[error("XML parsing error: {0}")]
    XmlError(String),

    #[error("ZIP error: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Attribute error: {0}")]
    AttrError(String),
}

impl From<quick_xml::Error> for OpcError {
    fn from(err: quick_xml::Error) -> Self {
        OpcError::XmlError(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for OpcError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        OpcError::AttrError(err.to_string())
    }
}

impl From<std::str::Utf8Error> for OpcError {
    fn from(err: std::str::Utf8Error) -> Self {
        OpcError::XmlError(format!("Invalid UTF-8: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, OpcError>;
