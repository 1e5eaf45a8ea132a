//! PowerPoint (.pptx) presentation support.
//!
//! Two halves share the OPC layer:
//!
//! - [`writer`]: `MutablePresentation` and friends, seeded from the default
//!   [`template`] and saved as a `.pptx` package
//! - `Package`, `Presentation`, `Slide` and [`shapes`]: read-only views of a
//!   saved package, used to inspect generated files
//!
//! # Example
//!
//! ```rust,no_run
//! use pptx_fixtures::ooxml::pptx::{MutablePresentation, Package};
//!
//! let mut pres = MutablePresentation::new();
//! pres.add_slide(5)?.set_title("Only a title")?;
//! let bytes = pres.to_bytes()?;
//!
//! let pkg = Package::from_bytes(&bytes)?;
//! for slide in pkg.presentation()?.slides()? {
//!     println!("{:?}: {:?}", slide.layout_name(), slide.title());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod package;
pub mod presentation;
pub mod shapes;
pub mod slide;
pub mod template;
pub mod writer;

pub use package::Package;
pub use presentation::Presentation;
pub use shapes::{Line, Paragraph, Shape, ShapeKind, TextFrame};
pub use slide::Slide;
pub use template::{CoreProperties, LayoutSpec, PlaceholderType, SLIDE_LAYOUTS};
pub use writer::{
    LineFormat, MutablePresentation, MutableShape, MutableSlide, TextFrame as MutableTextFrame,
    TextParagraph,
};
