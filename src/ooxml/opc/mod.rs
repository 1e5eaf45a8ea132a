//! Open Packaging Conventions (OPC) layer.
//!
//! Part names, relationships, content types and the Zip container that a
//! `.pptx` file is made of. Reading and writing share the same in-memory
//! [`OpcPackage`] model.

pub mod constants;
pub mod error;
pub mod package;
pub mod packuri;
pub mod part;
pub mod phys_pkg;
pub mod pkgreader;
pub mod pkgwriter;
pub mod rel;

pub use error::OpcError;
pub use package::OpcPackage;
pub use packuri::PackURI;
pub use part::Part;
pub use rel::{Relationship, Relationships};
