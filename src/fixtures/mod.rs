//! Test fixture decks and the builder that writes them.
//!
//! A fixture is a [`FixtureSpec`]: a fixed, declarative description of a
//! small deck. [`build_and_save`] turns one into a `.pptx` file and
//! [`report`] renders the outcome as the status lines the binaries print.
//!
//! # Example
//!
//! ```rust,no_run
//! use pptx_fixtures::fixtures::{build_and_save, catalog, report};
//!
//! let fixture = catalog::conversion_test();
//! let outcome = build_and_save(&fixture, fixture.default_output);
//! report(&fixture, &outcome, &mut std::io::stdout())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod catalog;
pub mod error;
pub mod model;
pub mod report;

#[cfg(feature = "pptx")]
pub use builder::build_presentation;
pub use builder::{build_and_save, save_bytes};
pub use error::FixtureError;
pub use model::{
    FixtureSpec, Geometry, ParagraphSpec, RectangleSpec, ReportStyle, ShapeSpec, SlideSpec,
    TextBoxSpec,
};
pub use report::report;
