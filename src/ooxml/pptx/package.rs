/// Package implementation for PowerPoint presentations.
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::OpcPackage;
use crate::ooxml::opc::constants::content_type as ct;
use crate::ooxml::pptx::presentation::Presentation;
use std::path::Path;

/// A PowerPoint (.pptx) package opened for reading.
///
/// It wraps an OPC package and checks that its main part is a presentation.
///
/// # Examples
///
/// ```rust,no_run
/// use pptx_fixtures::ooxml::pptx::Package;
///
/// let pkg = Package::open("presentation.pptx")?;
/// let pres = pkg.presentation()?;
/// println!("Presentation has {} slides", pres.slide_count()?);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Package {
    /// The underlying OPC package
    opc: OpcPackage,
}

impl Package {
    /// Open a .pptx package from a file path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_opc(OpcPackage::open(path)?)
    }

    /// Open a .pptx package held in memory.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_opc(OpcPackage::from_bytes(bytes)?)
    }

    fn from_opc(opc: OpcPackage) -> Result<Self> {
        let main_part = opc
            .main_document_part()
            .map_err(|e| OoxmlError::PartNotFound(format!("main presentation part: {}", e)))?;

        // Regular and macro-enabled presentations
        let content_type = main_part.content_type();
        if content_type != ct::PML_PRESENTATION_MAIN && content_type != ct::PML_PRES_MACRO_MAIN {
            return Err(OoxmlError::InvalidContentType {
                expected: format!(
                    "{} or {}",
                    ct::PML_PRESENTATION_MAIN,
                    ct::PML_PRES_MACRO_MAIN
                ),
                got: content_type.to_string(),
            });
        }

        Ok(Self { opc })
    }

    /// Get the main presentation.
    pub fn presentation(&self) -> Result<Presentation<'_>> {
        let main_part = self
            .opc
            .main_document_part()
            .map_err(|e| OoxmlError::PartNotFound(format!("main presentation part: {}", e)))?;

        Ok(Presentation::new(main_part, &self.opc))
    }

    /// Get the underlying OPC package.
    #[inline]
    pub fn opc_package(&self) -> &OpcPackage {
        &self.opc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::{PackURI, Part};
    use crate::ooxml::opc::constants::relationship_type as rt;

    #[test]
    fn test_rejects_non_presentation_package() {
        let mut opc = OpcPackage::new();
        let partname = PackURI::new("/word/document.xml").unwrap();
        opc.add_part(Part::xml(
            partname.clone(),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml",
            String::from("<w:document/>"),
        ));
        opc.relate_to(&partname, rt::OFFICE_DOCUMENT);
        let bytes = opc.to_bytes().unwrap();

        let result = Package::from_bytes(&bytes);
        assert!(matches!(result, Err(OoxmlError::InvalidContentType { .. })));
    }

    #[test]
    fn test_missing_file() {
        assert!(Package::open("/nonexistent/deck.pptx").is_err());
    }
}
