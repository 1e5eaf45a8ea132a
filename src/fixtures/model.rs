//! Declarative description of a fixture deck.
//!
//! Every value is a literal baked into the catalog; nothing here is
//! validated; geometry and colors are handed to the writer unchanged.

use crate::common::{Length, RGBColor};

/// Which status lines the report prints after a successful build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStyle {
    /// Path, slide count and a size summary
    Detailed,
    /// A single `<file> created successfully` line
    Brief,
}

/// A complete fixture: page size, slides and where it is written by default.
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureSpec {
    pub name: &'static str,
    pub description: &'static str,
    /// Output path used by the script binaries, relative to the working directory
    pub default_output: &'static str,
    pub report_style: ReportStyle,
    pub slide_width: Length,
    pub slide_height: Length,
    pub slides: Vec<SlideSpec>,
}

impl FixtureSpec {
    #[inline]
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }
}

/// One slide, created from a layout of the default template.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideSpec {
    /// 0-based layout index (0 = Title Slide, 1 = Title and Content, 5 = Title Only)
    pub layout: usize,
    pub title: Option<String>,
    /// Text of placeholder idx 1
    pub subtitle: Option<String>,
    pub shapes: Vec<ShapeSpec>,
}

impl SlideSpec {
    pub fn new(layout: usize) -> Self {
        Self {
            layout,
            title: None,
            subtitle: None,
            shapes: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn shape(mut self, shape: impl Into<ShapeSpec>) -> Self {
        self.shapes.push(shape.into());
        self
    }
}

/// Position and size of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub left: Length,
    pub top: Length,
    pub width: Length,
    pub height: Length,
}

impl Geometry {
    /// Geometry given in inches.
    pub fn inches(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left: Length::inches(left),
            top: Length::inches(top),
            width: Length::inches(width),
            height: Length::inches(height),
        }
    }
}

/// A shape added on top of the layout's placeholders.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeSpec {
    TextBox(TextBoxSpec),
    Rectangle(RectangleSpec),
}

impl From<TextBoxSpec> for ShapeSpec {
    fn from(spec: TextBoxSpec) -> Self {
        ShapeSpec::TextBox(spec)
    }
}

impl From<RectangleSpec> for ShapeSpec {
    fn from(spec: RectangleSpec) -> Self {
        ShapeSpec::Rectangle(spec)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextBoxSpec {
    pub geometry: Geometry,
    /// `None` keeps the writer's default (no wrapping)
    pub word_wrap: Option<bool>,
    pub paragraphs: Vec<ParagraphSpec>,
}

impl TextBoxSpec {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            word_wrap: None,
            paragraphs: Vec::new(),
        }
    }

    pub fn word_wrap(mut self, wrap: bool) -> Self {
        self.word_wrap = Some(wrap);
        self
    }

    pub fn paragraph(mut self, paragraph: ParagraphSpec) -> Self {
        self.paragraphs.push(paragraph);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphSpec {
    pub text: String,
    /// Points
    pub font_size: Option<f64>,
    pub bold: Option<bool>,
    pub level: u8,
}

impl ParagraphSpec {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font_size: None,
            bold: None,
            level: 0,
        }
    }

    pub fn size(mut self, points: f64) -> Self {
        self.font_size = Some(points);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = Some(true);
        self
    }

    pub fn level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectangleSpec {
    pub geometry: Geometry,
    pub fill: RGBColor,
    pub line_color: RGBColor,
    pub line_width: Length,
}
