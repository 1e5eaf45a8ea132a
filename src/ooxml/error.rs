/// Error types for PresentationML operations.
use thiserror::Error;

/// Result type for PresentationML operations.
pub type Result<T> = std::result::Result<T, OoxmlError>;

#[derive(Error, Debug)]
pub enum OoxmlError {
    /// OPC package error
    #[error("OPC error: {0}")]
    Opc(#[from] crate::ooxml::opc::error::OpcError),

    /// XML parsing error
    #[error("XML error: {0}")]
    Xml(String),

    #[error("Part not found: {0}")]
    PartNotFound(String),

    #[error("Invalid content type: expected {expected}, got {got}")]
    InvalidContentType { expected: String, got: String },

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// A slide was requested with a layout index the template does not have
    #[error("Unknown slide layout index {index} (template has {available} layouts)")]
    UnknownLayout { index: usize, available: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<quick_xml::Error> for OoxmlError {
    fn from(err: quick_xml::Error) -> Self {
        OoxmlError::Xml(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for OoxmlError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        OoxmlError::Xml(err.to_string())
    }
}

impl From<std::str::Utf8Error> for OoxmlError {
    fn from(err: std::str::Utf8Error) -> Self {
        OoxmlError::Xml(format!("Invalid UTF-8: {}", err))
    }
}
