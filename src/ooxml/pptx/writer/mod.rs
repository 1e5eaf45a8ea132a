//! Mutable presentation writer components for PPTX.

pub mod pres;
pub mod shape;
pub mod slide;
pub mod text;

// Re-export main types
pub use pres::MutablePresentation;
pub use shape::{LineFormat, MutableShape};
pub use slide::MutableSlide;
pub use text::{TextFrame, TextParagraph};
