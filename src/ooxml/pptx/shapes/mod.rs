/// Shapes read back from a saved presentation.
///
/// This module provides read-only views of the shapes on a slide:
/// - Placeholders, text boxes and auto shapes with their geometry
/// - Text frames with paragraph-level formatting
pub mod base;
pub mod textframe;

pub use base::{Line, Shape, ShapeKind};
pub use textframe::{Paragraph, TextFrame};
