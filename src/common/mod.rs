//! Common types and utilities shared by the package writer, the reader and
//! the fixture builder.

// Submodule declarations
pub mod error;
pub mod style;
pub mod unit;
pub mod xml;

// Re-exports for convenience
pub use error::{Error, Result};
pub use style::{Length, RGBColor};
