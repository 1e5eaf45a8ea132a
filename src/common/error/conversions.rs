//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from internal
//! error types to the unified Error type.

#[cfg(feature = "pptx")]
use super::types::Error;

#[cfg(feature = "pptx")]
impl From<crate::ooxml::opc::error::OpcError> for Error {
    fn from(err: crate::ooxml::opc::error::OpcError) -> Self {
        Error::from_opc_error(err)
    }
}

#[cfg(feature = "pptx")]
impl From<crate::ooxml::error::OoxmlError> for Error {
    fn from(err: crate::ooxml::error::OoxmlError) -> Self {
        match err {
            crate::ooxml::error::OoxmlError::Io(e) => Error::Io(e),
            crate::ooxml::error::OoxmlError::Xml(s) => Error::XmlError(s),
            crate::ooxml::error::OoxmlError::PartNotFound(s) => Error::ComponentNotFound(s),
            crate::ooxml::error::OoxmlError::InvalidContentType { expected, got } => {
                Error::InvalidContentType { expected, got }
            },
            crate::ooxml::error::OoxmlError::InvalidFormat(s) => Error::InvalidFormat(s),
            crate::ooxml::error::OoxmlError::UnknownLayout { index, available } => {
                Error::UnknownLayout { index, available }
            },
            crate::ooxml::error::OoxmlError::Opc(e) => Error::from_opc_error(e),
            crate::ooxml::error::OoxmlError::Other(s) => Error::Other(s),
        }
    }
}

#[cfg(feature = "pptx")]
impl Error {
    pub(crate) fn from_opc_error(err: crate::ooxml::opc::error::OpcError) -> Self {
        match err {
            crate::ooxml::opc::error::OpcError::IoError(e) => Error::Io(e),
            crate::ooxml::opc::error::OpcError::ZipError(e) => Error::ZipError(e.to_string()),
            crate::ooxml::opc::error::OpcError::XmlError(s) => Error::XmlError(s),
            crate::ooxml::opc::error::OpcError::PartNotFound(s) => Error::ComponentNotFound(s),
            _ => Error::Other(err.to_string()),
        }
    }
}

#[cfg(feature = "pptx")]
impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlError(err.to_string())
    }
}

#[cfg(feature = "pptx")]
impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::ZipError(err.to_string())
    }
}
