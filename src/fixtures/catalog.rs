//! The fixed fixture decks.

use crate::common::{Length, RGBColor};
use crate::fixtures::model::{
    FixtureSpec, Geometry, ParagraphSpec, RectangleSpec, ReportStyle, SlideSpec, TextBoxSpec,
};

/// Name of the end-to-end conversion test deck.
pub const CONVERSION_TEST: &str = "conversion-test";
/// Name of the Chinese-text deck.
pub const SIMPLE_ZH: &str = "simple-zh";

/// Deck exercised by the presentation-to-JSON integration test: a title
/// slide, then a title-only slide with two text boxes and a rectangle.
pub fn conversion_test() -> FixtureSpec {
    FixtureSpec {
        name: CONVERSION_TEST,
        description: "Title slide plus a slide with text boxes and a filled rectangle",
        default_output: "tests/fixtures/simple.pptx",
        report_style: ReportStyle::Detailed,
        slide_width: Length::inches(10.0),
        slide_height: Length::inches(7.5),
        slides: vec![
            SlideSpec::new(0)
                .title("PPTX to JSON Conversion Test")
                .subtitle("End-to-End Integration Test"),
            SlideSpec::new(5)
                .title("Test Elements")
                .shape(
                    TextBoxSpec::new(Geometry::inches(1.0, 2.0, 3.0, 1.0))
                        .word_wrap(true)
                        .paragraph(ParagraphSpec::new("This is a test text box").size(18.0)),
                )
                .shape(RectangleSpec {
                    geometry: Geometry::inches(5.0, 2.0, 2.0, 1.5),
                    fill: RGBColor::new(0x70, 0xC0, 0x00),
                    line_color: RGBColor::BLACK,
                    line_width: Length::pt(1.0),
                })
                .shape(
                    TextBoxSpec::new(Geometry::inches(1.0, 4.0, 6.0, 1.0)).paragraph(
                        ParagraphSpec::new("Element 2: Another text box")
                            .size(14.0)
                            .bold(),
                    ),
                ),
        ],
    }
}

/// Small deck with CJK text in placeholders and a multi-paragraph text box.
pub fn simple_zh() -> FixtureSpec {
    FixtureSpec {
        name: SIMPLE_ZH,
        description: "Chinese title slide plus a content slide with three paragraphs",
        default_output: "simple.pptx",
        report_style: ReportStyle::Brief,
        slide_width: Length::inches(10.0),
        slide_height: Length::inches(7.5),
        slides: vec![
            SlideSpec::new(0)
                .title("测试演示文稿")
                .subtitle("这是一个简单的测试 PPTX"),
            SlideSpec::new(1).title("主要内容").shape(
                TextBoxSpec::new(Geometry::inches(1.0, 2.0, 8.0, 4.0))
                    .word_wrap(true)
                    .paragraph(ParagraphSpec::new("这是第一行文本").size(18.0))
                    .paragraph(ParagraphSpec::new("这是第二行文本").size(18.0).level(1))
                    .paragraph(ParagraphSpec::new("这是第三行文本").size(18.0)),
            ),
        ],
    }
}

/// Every fixture, in listing order.
pub fn all() -> Vec<FixtureSpec> {
    vec![conversion_test(), simple_zh()]
}

/// Look a fixture up by name.
pub fn find(name: &str) -> Option<FixtureSpec> {
    all().into_iter().find(|fixture| fixture.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::model::ShapeSpec;

    #[test]
    fn test_catalog_names() {
        let names: Vec<_> = all().iter().map(|f| f.name).collect();
        assert_eq!(names, vec![CONVERSION_TEST, SIMPLE_ZH]);
        assert!(find("simple-zh").is_some());
        assert!(find("missing").is_none());
    }

    #[test]
    fn test_both_decks_have_two_slides() {
        for fixture in all() {
            assert_eq!(fixture.slide_count(), 2, "{}", fixture.name);
            assert_eq!(fixture.slide_width, Length::from_emus(9_144_000));
            assert_eq!(fixture.slide_height, Length::from_emus(6_858_000));
        }
    }

    #[test]
    fn test_conversion_test_rectangle() {
        let fixture = conversion_test();
        let rect = fixture.slides[1]
            .shapes
            .iter()
            .find_map(|shape| match shape {
                ShapeSpec::Rectangle(rect) => Some(*rect),
                _ => None,
            })
            .unwrap();
        assert_eq!(rect.fill.to_hex(), "70C000");
        assert_eq!(rect.line_width.emus(), 12_700);
        assert_eq!(rect.geometry.left, Length::inches(5.0));
    }

    #[test]
    fn test_second_text_box_keeps_default_wrap() {
        let fixture = conversion_test();
        let boxes: Vec<_> = fixture.slides[1]
            .shapes
            .iter()
            .filter_map(|shape| match shape {
                ShapeSpec::TextBox(text_box) => Some(text_box),
                _ => None,
            })
            .collect();
        assert_eq!(boxes.len(), 2);
        assert_eq!(boxes[0].word_wrap, Some(true));
        assert_eq!(boxes[1].word_wrap, None);
        assert_eq!(boxes[1].paragraphs[0].bold, Some(true));
    }
}
