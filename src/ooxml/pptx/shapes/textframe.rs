/// Text frames of shapes in a saved presentation.
use crate::common::unit::centipoints_to_pt;

/// Text frame of a shape (`p:txBody`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextFrame {
    /// `bodyPr/@wrap`: `square` is true, `none` false, absent `None`
    pub(crate) word_wrap: Option<bool>,
    pub(crate) paragraphs: Vec<Paragraph>,
}

impl TextFrame {
    #[inline]
    pub fn word_wrap(&self) -> Option<bool> {
        self.word_wrap
    }

    #[inline]
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Text of all paragraphs joined with newlines.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A paragraph (`a:p`) with its paragraph-level properties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    pub(crate) text: String,
    pub(crate) level: u8,
    /// `a:pPr/a:defRPr/@sz` in hundredths of a point
    pub(crate) size_centipoints: Option<u32>,
    pub(crate) bold: Option<bool>,
}

impl Paragraph {
    /// Concatenated text of all runs.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Default font size in points.
    pub fn font_size(&self) -> Option<f64> {
        self.size_centipoints.map(centipoints_to_pt)
    }

    #[inline]
    pub fn bold(&self) -> Option<bool> {
        self.bold
    }
}
