//! Unified error types for the crate.
use thiserror::Error;

/// Main error type for presentation building and inspection.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid file format
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Part or relationship not found
    #[error("Component not found: {0}")]
    ComponentNotFound(String),

    /// XML parsing or generation error
    #[error("XML error: {0}")]
    XmlError(String),

    /// Invalid content type
    #[error("Invalid content type: expected {expected}, got {got}")]
    InvalidContentType { expected: String, got: String },

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// Slide layout index outside the template's layout list
    #[error("Unknown slide layout index {index} (template has {available} layouts)")]
    UnknownLayout { index: usize, available: usize },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type for crate operations.
pub type Result<T> = std::result::Result<T, Error>;
