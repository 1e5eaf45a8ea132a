/// Slides of a presentation being written.
use crate::common::Length;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::namespace;
use crate::ooxml::pptx::template::{self, LayoutSpec};
use std::fmt::Write as FmtWrite;

use super::shape::MutableShape;

/// A mutable slide in a presentation.
///
/// A new slide starts with clones of its layout's content placeholders,
/// numbered from shape id 2 (the shape tree itself is id 1).
#[derive(Debug, Clone)]
pub struct MutableSlide {
    /// Id in the presentation's `sldIdLst`
    pub(crate) slide_id: u32,
    pub(crate) layout_index: usize,
    pub(crate) layout: &'static LayoutSpec,
    pub(crate) shapes: Vec<MutableShape>,
}

impl MutableSlide {
    pub(crate) fn new(slide_id: u32, layout_index: usize, layout: &'static LayoutSpec) -> Self {
        let shapes = layout
            .placeholders
            .iter()
            .filter(|spec| spec.ph_type.is_cloneable())
            .zip(2u32..)
            .map(|(spec, id)| MutableShape::new_placeholder(id, *spec))
            .collect();

        Self {
            slide_id,
            layout_index,
            layout,
            shapes,
        }
    }

    #[inline]
    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    /// The layout this slide was created from.
    #[inline]
    pub fn layout(&self) -> &'static LayoutSpec {
        self.layout
    }

    #[inline]
    pub fn layout_index(&self) -> usize {
        self.layout_index
    }

    fn title_shape_mut(&mut self) -> Option<&mut MutableShape> {
        self.shapes
            .iter_mut()
            .find(|shape| shape.placeholder().is_some_and(|ph| ph.ph_type.is_title()))
    }

    /// Set the text of the title placeholder.
    ///
    /// Fails when the layout has no title placeholder.
    pub fn set_title(&mut self, title: &str) -> Result<()> {
        let layout_name = self.layout.name;
        let frame = self
            .title_shape_mut()
            .and_then(MutableShape::text_frame_mut)
            .ok_or_else(|| {
                OoxmlError::InvalidFormat(format!(
                    "layout '{}' has no title placeholder",
                    layout_name
                ))
            })?;
        frame.set_text(title);
        Ok(())
    }

    /// Text of the title placeholder.
    pub fn title(&self) -> Option<String> {
        self.shapes
            .iter()
            .find(|shape| shape.placeholder().is_some_and(|ph| ph.ph_type.is_title()))
            .and_then(MutableShape::text_frame)
            .map(|frame| frame.text())
    }

    /// Placeholder by its `idx` (0 is the title).
    pub fn placeholder(&self, idx: u32) -> Option<&MutableShape> {
        self.shapes
            .iter()
            .find(|shape| shape.placeholder().is_some_and(|ph| ph.idx == idx))
    }

    pub fn placeholder_mut(&mut self, idx: u32) -> Option<&mut MutableShape> {
        self.shapes
            .iter_mut()
            .find(|shape| shape.placeholder().is_some_and(|ph| ph.idx == idx))
    }

    fn next_shape_id(&self) -> u32 {
        self.shapes
            .iter()
            .map(MutableShape::shape_id)
            .max()
            .unwrap_or(1)
            + 1
    }

    fn push_shape(&mut self, shape: MutableShape) -> &mut MutableShape {
        self.shapes.push(shape);
        let last = self.shapes.len() - 1;
        &mut self.shapes[last]
    }

    /// Add a text box. It does not wrap until word wrap is enabled.
    pub fn add_text_box(
        &mut self,
        left: Length,
        top: Length,
        width: Length,
        height: Length,
    ) -> &mut MutableShape {
        let shape_id = self.next_shape_id();
        self.push_shape(MutableShape::new_text_box(shape_id, left, top, width, height))
    }

    /// Add a rectangle auto shape.
    pub fn add_rectangle(
        &mut self,
        left: Length,
        top: Length,
        width: Length,
        height: Length,
    ) -> &mut MutableShape {
        let shape_id = self.next_shape_id();
        self.push_shape(MutableShape::new_rectangle(shape_id, left, top, width, height))
    }

    #[inline]
    pub fn shapes(&self) -> &[MutableShape] {
        &self.shapes
    }

    #[inline]
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Generate the slide XML. The layout relationship is always rId1.
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(2048 + self.shapes.len() * 1024);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<p:sld xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
            namespace::DML_MAIN,
            namespace::OFC_RELATIONSHIPS,
            namespace::PML_MAIN
        )
        .map_err(|e| OoxmlError::Xml(e.to_string()))?;

        xml.push_str("<p:cSld><p:spTree>");
        template::write_sp_tree_header(&mut xml);
        for shape in &self.shapes {
            shape.to_xml(&mut xml)?;
        }
        xml.push_str("</p:spTree></p:cSld>");

        xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
        xml.push_str("</p:sld>");
        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RGBColor;
    use crate::ooxml::pptx::template::SLIDE_LAYOUTS;

    #[test]
    fn test_title_slide_placeholders() {
        let mut slide = MutableSlide::new(256, 0, &SLIDE_LAYOUTS[0]);
        assert_eq!(slide.shape_count(), 2);
        assert_eq!(slide.shapes()[0].name(), "Title 1");
        assert_eq!(slide.shapes()[1].name(), "Subtitle 2");

        slide.set_title("PPTX to JSON Conversion Test").unwrap();
        slide
            .placeholder_mut(1)
            .and_then(MutableShape::text_frame_mut)
            .unwrap()
            .set_text("End-to-End Integration Test");

        assert_eq!(slide.title().as_deref(), Some("PPTX to JSON Conversion Test"));
        let xml = slide.to_xml().unwrap();
        assert!(xml.contains("<a:t>End-to-End Integration Test</a:t>"));
    }

    #[test]
    fn test_added_shapes_take_next_ids() {
        let mut slide = MutableSlide::new(257, 5, &SLIDE_LAYOUTS[5]);
        let inch = Length::inches;

        let text_box = slide.add_text_box(inch(1.0), inch(2.0), inch(3.0), inch(1.0));
        assert_eq!(text_box.shape_id(), 3);
        slide
            .add_rectangle(inch(5.0), inch(2.0), inch(2.0), inch(1.5))
            .set_fill(RGBColor::new(0x70, 0xC0, 0x00));
        let second = slide.add_text_box(inch(1.0), inch(4.0), inch(6.0), inch(1.0));
        assert_eq!(second.name(), "TextBox 4");
        assert_eq!(slide.shape_count(), 4);
    }

    #[test]
    fn test_blank_layout_has_no_title() {
        let mut slide = MutableSlide::new(256, 6, &SLIDE_LAYOUTS[6]);
        assert_eq!(slide.shape_count(), 0);
        assert!(slide.set_title("nope").is_err());
        assert!(slide.title().is_none());
        assert!(slide.to_xml().unwrap().contains("<p:spTree>"));
    }
}
