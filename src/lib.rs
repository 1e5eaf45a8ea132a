//! pptx-fixtures - deterministic PowerPoint fixtures for converter test suites
//!
//! This library builds small, fixed `.pptx` decks that presentation
//! converters are tested against, and reads them back to check the result.
//!
//! # Features
//!
//! - **Fixture catalog**: the `conversion-test` and `simple-zh` decks
//! - **PresentationML writer**: slides from the eleven default layouts,
//!   placeholders, text boxes with paragraph formatting, filled rectangles
//! - **Reader**: reopen a generated deck and inspect slides and shapes
//! - **OPC layer**: part names, relationships, content types and Zip
//!
//! # Example - Building a fixture
//!
//! ```no_run
//! use pptx_fixtures::fixtures::{build_and_save, catalog};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let fixture = catalog::conversion_test();
//! let path = build_and_save(&fixture, "tests/fixtures/simple.pptx")?;
//! println!("wrote {}", path.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Inspecting a saved deck
//!
//! ```no_run
//! use pptx_fixtures::ooxml::pptx::Package;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pkg = Package::open("tests/fixtures/simple.pptx")?;
//! let pres = pkg.presentation()?;
//!
//! for slide in pres.slides()? {
//!     println!("{:?}: {}", slide.title(), slide.text());
//! }
//! # Ok(())
//! # }
//! ```

/// Error, unit and color types shared by every layer
pub mod common;

/// Fixture descriptions, the fixed catalog, the builder and its report
pub mod fixtures;

/// OOXML (Office Open XML) package layer and PresentationML writer/reader
///
/// Compiled only with the `pptx` feature.
#[cfg(feature = "pptx")]
pub mod ooxml;

// Re-export commonly used types for convenience
pub use common::{Error, Length, RGBColor, Result};
pub use fixtures::{FixtureError, FixtureSpec, build_and_save};
