/// Shapes of slides being written.
use crate::common::{Length, RGBColor};
use crate::common::xml::escape_xml;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::pptx::template::PlaceholderSpec;
use std::fmt::Write as FmtWrite;

use super::text::{BodyKind, TextFrame};

/// Line (outline) of an auto shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineFormat {
    pub color: RGBColor,
    pub width: Length,
}

/// A shape on a slide: a cloned placeholder, a text box or an auto shape.
#[derive(Debug, Clone)]
pub struct MutableShape {
    pub(crate) shape_id: u32,
    pub(crate) name: String,
    pub(crate) shape_type: ShapeType,
    /// Position and size; placeholders inherit theirs from the layout
    pub(crate) xfrm: Option<(Length, Length, Length, Length)>,
    pub(crate) text_frame: Option<TextFrame>,
    pub(crate) fill: Option<RGBColor>,
    pub(crate) line: Option<LineFormat>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ShapeType {
    Placeholder(PlaceholderSpec),
    TextBox,
    /// Preset geometry such as `"rect"`
    AutoShape { preset: &'static str },
}

impl MutableShape {
    /// Clone a layout placeholder onto a slide, inheriting its geometry.
    pub(crate) fn new_placeholder(shape_id: u32, spec: PlaceholderSpec) -> Self {
        Self {
            shape_id,
            name: format!("{} {}", spec.ph_type.basename(spec.vertical), shape_id - 1),
            text_frame: spec
                .ph_type
                .has_text()
                .then(|| TextFrame::new(BodyKind::Placeholder)),
            shape_type: ShapeType::Placeholder(spec),
            xfrm: None,
            fill: None,
            line: None,
        }
    }

    pub(crate) fn new_text_box(
        shape_id: u32,
        left: Length,
        top: Length,
        width: Length,
        height: Length,
    ) -> Self {
        Self {
            shape_id,
            name: format!("TextBox {}", shape_id - 1),
            shape_type: ShapeType::TextBox,
            xfrm: Some((left, top, width, height)),
            text_frame: Some(TextFrame::new(BodyKind::TextBox)),
            fill: None,
            line: None,
        }
    }

    pub(crate) fn new_rectangle(
        shape_id: u32,
        left: Length,
        top: Length,
        width: Length,
        height: Length,
    ) -> Self {
        Self {
            shape_id,
            name: format!("Rectangle {}", shape_id - 1),
            shape_type: ShapeType::AutoShape { preset: "rect" },
            xfrm: Some((left, top, width, height)),
            text_frame: Some(TextFrame::new(BodyKind::AutoShape)),
            fill: None,
            line: None,
        }
    }

    #[inline]
    pub fn shape_id(&self) -> u32 {
        self.shape_id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The layout placeholder this shape was cloned from.
    pub fn placeholder(&self) -> Option<&PlaceholderSpec> {
        match &self.shape_type {
            ShapeType::Placeholder(spec) => Some(spec),
            _ => None,
        }
    }

    pub fn is_text_box(&self) -> bool {
        self.shape_type == ShapeType::TextBox
    }

    /// Preset geometry of an auto shape.
    pub fn preset(&self) -> Option<&'static str> {
        match self.shape_type {
            ShapeType::AutoShape { preset } => Some(preset),
            _ => None,
        }
    }

    /// Left, top, width and height, unless inherited.
    pub fn position(&self) -> Option<(Length, Length, Length, Length)> {
        self.xfrm
    }

    pub fn text_frame(&self) -> Option<&TextFrame> {
        self.text_frame.as_ref()
    }

    /// Text frame; picture placeholders have none.
    pub fn text_frame_mut(&mut self) -> Option<&mut TextFrame> {
        self.text_frame.as_mut()
    }

    /// Solid fill color.
    pub fn set_fill(&mut self, color: RGBColor) -> &mut Self {
        self.fill = Some(color);
        self
    }

    pub fn fill(&self) -> Option<RGBColor> {
        self.fill
    }

    /// Solid line of the given color and width.
    pub fn set_line(&mut self, color: RGBColor, width: Length) -> &mut Self {
        self.line = Some(LineFormat { color, width });
        self
    }

    pub fn line(&self) -> Option<LineFormat> {
        self.line
    }

    /// Write the `<p:sp>` element.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<p:sp><p:nvSpPr>");
        write!(
            xml,
            r#"<p:cNvPr id="{}" name="{}"/>"#,
            self.shape_id,
            escape_xml(&self.name)
        )
        .map_err(|e| OoxmlError::Xml(e.to_string()))?;

        match &self.shape_type {
            ShapeType::Placeholder(spec) => {
                xml.push_str(r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr>"#);
                spec.write_ph(xml);
                xml.push_str("</p:nvPr>");
            },
            ShapeType::TextBox => xml.push_str(r#"<p:cNvSpPr txBox="1"/><p:nvPr/>"#),
            ShapeType::AutoShape { .. } => xml.push_str("<p:cNvSpPr/><p:nvPr/>"),
        }
        xml.push_str("</p:nvSpPr>");

        self.write_sp_pr(xml)?;

        if let ShapeType::AutoShape { .. } = self.shape_type {
            xml.push_str("<p:style>");
            xml.push_str(r#"<a:lnRef idx="1"><a:schemeClr val="accent1"/></a:lnRef>"#);
            xml.push_str(r#"<a:fillRef idx="3"><a:schemeClr val="accent1"/></a:fillRef>"#);
            xml.push_str(r#"<a:effectRef idx="2"><a:schemeClr val="accent1"/></a:effectRef>"#);
            xml.push_str(r#"<a:fontRef idx="minor"><a:schemeClr val="lt1"/></a:fontRef>"#);
            xml.push_str("</p:style>");
        }

        if let Some(ref text_frame) = self.text_frame {
            text_frame.to_xml(xml)?;
        }

        xml.push_str("</p:sp>");
        Ok(())
    }

    fn write_sp_pr(&self, xml: &mut String) -> Result<()> {
        let Some((left, top, width, height)) = self.xfrm else {
            xml.push_str("<p:spPr/>");
            return Ok(());
        };

        xml.push_str("<p:spPr><a:xfrm>");
        write!(
            xml,
            r#"<a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/>"#,
            left.emus(),
            top.emus(),
            width.emus(),
            height.emus()
        )
        .map_err(|e| OoxmlError::Xml(e.to_string()))?;
        xml.push_str("</a:xfrm>");

        let preset = self.preset().unwrap_or("rect");
        write!(xml, r#"<a:prstGeom prst="{}"><a:avLst/></a:prstGeom>"#, preset)
            .map_err(|e| OoxmlError::Xml(e.to_string()))?;

        match self.fill {
            Some(color) => {
                write!(
                    xml,
                    r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                    color.to_hex()
                )
                .map_err(|e| OoxmlError::Xml(e.to_string()))?;
            },
            None if self.is_text_box() => xml.push_str("<a:noFill/>"),
            None => {},
        }

        if let Some(line) = self.line {
            write!(
                xml,
                r#"<a:ln w="{}"><a:solidFill><a:srgbClr val="{}"/></a:solidFill></a:ln>"#,
                line.width.emus(),
                line.color.to_hex()
            )
            .map_err(|e| OoxmlError::Xml(e.to_string()))?;
        }

        xml.push_str("</p:spPr>");
        Ok(())
    }
}
