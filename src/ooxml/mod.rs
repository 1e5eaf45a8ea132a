//! Office Open XML layer for presentations.
//!
//! Two layers:
//!
//! 1. **OPC** (`opc`): package handling (Zip, parts, relationships)
//! 2. **PresentationML** (`pptx`): the mutable writer model, the default
//!    template it is seeded from, and read-only views of saved files
//!
//! # Example
//!
//! ```rust,no_run
//! use pptx_fixtures::ooxml::pptx::{MutablePresentation, Package};
//!
//! let mut pres = MutablePresentation::new();
//! let slide = pres.add_slide(0)?;
//! slide.set_title("Hello")?;
//! pres.save("hello.pptx")?;
//!
//! let pkg = Package::open("hello.pptx")?;
//! let reopened = pkg.presentation()?;
//! assert_eq!(reopened.slide_count()?, 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
pub mod error;
pub mod opc;
pub mod pptx;

pub use error::{OoxmlError, Result};
pub use opc::{OpcPackage, PackURI};
