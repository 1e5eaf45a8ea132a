//! Text frames and paragraphs of shapes being written.
use crate::common::unit::pt_to_centipoints;
use crate::common::xml::escape_xml;
use crate::ooxml::error::{OoxmlError, Result};
use std::fmt::Write as FmtWrite;

/// Body properties a text frame starts with, which depend on its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BodyKind {
    /// Inherits everything from the layout: `<a:bodyPr/>`
    Placeholder,
    /// Shrink-to-text box: `wrap="none"` with `spAutoFit`
    TextBox,
    /// Centered text of an auto shape
    AutoShape,
}

/// Text frame of a shape being written.
#[derive(Debug, Clone)]
pub struct TextFrame {
    kind: BodyKind,
    word_wrap: Option<bool>,
    paragraphs: Vec<TextParagraph>,
}

impl TextFrame {
    /// A new frame always holds one empty paragraph.
    pub(crate) fn new(kind: BodyKind) -> Self {
        let mut first = TextParagraph::new();
        if kind == BodyKind::AutoShape {
            first.alignment = Some("ctr");
        }
        Self {
            kind,
            word_wrap: match kind {
                BodyKind::TextBox => Some(false),
                _ => None,
            },
            paragraphs: vec![first],
        }
    }

    /// Wrap lines at the shape's width (`wrap="square"`) or not (`wrap="none"`).
    pub fn set_word_wrap(&mut self, wrap: bool) -> &mut Self {
        self.word_wrap = Some(wrap);
        self
    }

    pub fn word_wrap(&self) -> Option<bool> {
        self.word_wrap
    }

    /// Paragraph at `index`, if any.
    pub fn paragraph_mut(&mut self, index: usize) -> Option<&mut TextParagraph> {
        self.paragraphs.get_mut(index)
    }

    /// Append an empty paragraph and return it.
    pub fn add_paragraph(&mut self) -> &mut TextParagraph {
        self.paragraphs.push(TextParagraph::new());
        let last = self.paragraphs.len() - 1;
        &mut self.paragraphs[last]
    }

    pub fn paragraphs(&self) -> &[TextParagraph] {
        &self.paragraphs
    }

    /// Replace all paragraphs with one paragraph per line of `text`.
    pub fn set_text(&mut self, text: &str) -> &mut Self {
        let alignment = self.paragraphs.first().and_then(|p| p.alignment);
        self.paragraphs = text
            .split('\n')
            .map(|line| {
                let mut p = TextParagraph::new();
                p.alignment = alignment;
                p.set_text(line);
                p
            })
            .collect();
        self
    }

    /// Text of all paragraphs joined with newlines.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(TextParagraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Write `<p:txBody>`.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<p:txBody>");
        match self.kind {
            BodyKind::Placeholder => match self.word_wrap {
                Some(wrap) => {
                    write!(xml, r#"<a:bodyPr wrap="{}"/>"#, wrap_value(wrap))
                        .map_err(|e| OoxmlError::Xml(e.to_string()))?;
                },
                None => xml.push_str("<a:bodyPr/>"),
            },
            BodyKind::TextBox => {
                write!(
                    xml,
                    r#"<a:bodyPr wrap="{}" rtlCol="0"><a:spAutoFit/></a:bodyPr>"#,
                    wrap_value(self.word_wrap.unwrap_or(false))
                )
                .map_err(|e| OoxmlError::Xml(e.to_string()))?;
            },
            BodyKind::AutoShape => {
                xml.push_str("<a:bodyPr");
                if let Some(wrap) = self.word_wrap {
                    write!(xml, r#" wrap="{}""#, wrap_value(wrap))
                        .map_err(|e| OoxmlError::Xml(e.to_string()))?;
                }
                xml.push_str(r#" rtlCol="0" anchor="ctr"/>"#);
            },
        }
        xml.push_str("<a:lstStyle/>");
        for paragraph in &self.paragraphs {
            paragraph.to_xml(xml)?;
        }
        xml.push_str("</p:txBody>");
        Ok(())
    }
}

#[inline]
fn wrap_value(wrap: bool) -> &'static str {
    if wrap { "square" } else { "none" }
}

/// A paragraph with paragraph-level run defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextParagraph {
    text: String,
    /// Font size in points
    font_size: Option<f64>,
    bold: Option<bool>,
    level: u8,
    alignment: Option<&'static str>,
}

impl TextParagraph {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Replace the paragraph's text with a single run.
    pub fn set_text(&mut self, text: &str) -> &mut Self {
        self.text = text.to_string();
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Font size in points, written as `a:defRPr/@sz` in hundredths.
    pub fn set_font_size(&mut self, points: f64) -> &mut Self {
        self.font_size = Some(points);
        self
    }

    pub fn font_size(&self) -> Option<f64> {
        self.font_size
    }

    pub fn set_bold(&mut self, bold: bool) -> &mut Self {
        self.bold = Some(bold);
        self
    }

    pub fn bold(&self) -> Option<bool> {
        self.bold
    }

    /// Indent level, 0 to 8.
    pub fn set_level(&mut self, level: u8) -> &mut Self {
        self.level = level.min(8);
        self
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    fn has_properties(&self) -> bool {
        self.level != 0
            || self.alignment.is_some()
            || self.font_size.is_some()
            || self.bold.is_some()
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<a:p>");

        if self.has_properties() {
            xml.push_str("<a:pPr");
            if self.level != 0 {
                write!(xml, r#" lvl="{}""#, self.level)
                    .map_err(|e| OoxmlError::Xml(e.to_string()))?;
            }
            if let Some(algn) = self.alignment {
                write!(xml, r#" algn="{}""#, algn).map_err(|e| OoxmlError::Xml(e.to_string()))?;
            }

            if self.font_size.is_some() || self.bold.is_some() {
                xml.push_str("><a:defRPr");
                if let Some(size) = self.font_size {
                    write!(xml, r#" sz="{}""#, pt_to_centipoints(size))
                        .map_err(|e| OoxmlError::Xml(e.to_string()))?;
                }
                if let Some(bold) = self.bold {
                    xml.push_str(if bold { r#" b="1""# } else { r#" b="0""# });
                }
                xml.push_str("/></a:pPr>");
            } else {
                xml.push_str("/>");
            }
        }

        if !self.text.is_empty() {
            write!(
                xml,
                r#"<a:r><a:rPr lang="en-US" dirty="0"/><a:t>{}</a:t></a:r>"#,
                escape_xml(&self.text)
            )
            .map_err(|e| OoxmlError::Xml(e.to_string()))?;
        }

        xml.push_str("</a:p>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xml_of(frame: &TextFrame) -> String {
        let mut xml = String::new();
        frame.to_xml(&mut xml).unwrap();
        xml
    }

    #[test]
    fn test_text_box_wraps_only_when_enabled() {
        let mut frame = TextFrame::new(BodyKind::TextBox);
        assert!(xml_of(&frame).contains(r#"<a:bodyPr wrap="none" rtlCol="0"><a:spAutoFit/></a:bodyPr>"#));

        frame.set_word_wrap(true);
        assert!(xml_of(&frame).contains(r#"wrap="square""#));
    }

    #[test]
    fn test_paragraph_defaults() {
        let mut frame = TextFrame::new(BodyKind::TextBox);
        frame
            .paragraph_mut(0)
            .unwrap()
            .set_text("Element 2: Another text box")
            .set_font_size(14.0)
            .set_bold(true);
        frame.add_paragraph().set_text("second").set_level(1);

        let xml = xml_of(&frame);
        assert!(xml.contains(r#"<a:pPr><a:defRPr sz="1400" b="1"/></a:pPr>"#));
        assert!(xml.contains(r#"<a:pPr lvl="1"/>"#));
        assert!(xml.contains("<a:t>Element 2: Another text box</a:t>"));
        assert_eq!(frame.text(), "Element 2: Another text box\nsecond");
    }

    #[test]
    fn test_auto_shape_text_is_centered() {
        let mut frame = TextFrame::new(BodyKind::AutoShape);
        frame.set_text("a <b>");
        let xml = xml_of(&frame);
        assert!(xml.contains(r#"<a:bodyPr rtlCol="0" anchor="ctr"/>"#));
        assert!(xml.contains(r#"<a:pPr algn="ctr"/>"#));
        assert!(xml.contains("<a:t>a &lt;b&gt;</a:t>"));
    }

    #[test]
    fn test_level_is_clamped() {
        let mut p = TextParagraph::new();
        p.set_level(12);
        assert_eq!(p.level(), 8);
    }
}
