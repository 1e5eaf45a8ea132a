//! Fixture description in, `.pptx` file out.
use crate::fixtures::error::FixtureError;
use crate::fixtures::model::FixtureSpec;
use std::path::{Path, PathBuf};

#[cfg(feature = "pptx")]
use crate::common::{Error, Result};
#[cfg(feature = "pptx")]
use crate::fixtures::model::{ParagraphSpec, RectangleSpec, ShapeSpec, SlideSpec, TextBoxSpec};
#[cfg(feature = "pptx")]
use crate::ooxml::pptx::writer::{MutablePresentation, MutableSlide, TextParagraph};

/// Build the in-memory deck of a fixture without touching the disk.
#[cfg(feature = "pptx")]
pub fn build_presentation(fixture: &FixtureSpec) -> Result<MutablePresentation> {
    let mut pres = MutablePresentation::new();
    pres.set_slide_width(fixture.slide_width);
    pres.set_slide_height(fixture.slide_height);

    for spec in &fixture.slides {
        let slide = pres.add_slide(spec.layout)?;
        populate_slide(slide, spec)?;
    }

    Ok(pres)
}

#[cfg(feature = "pptx")]
fn populate_slide(slide: &mut MutableSlide, spec: &SlideSpec) -> Result<()> {
    if let Some(title) = &spec.title {
        slide.set_title(title)?;
    }

    if let Some(subtitle) = &spec.subtitle {
        let layout = slide.layout().name;
        slide
            .placeholder_mut(1)
            .and_then(|shape| shape.text_frame_mut())
            .ok_or_else(|| {
                Error::ComponentNotFound(format!("placeholder idx 1 on layout '{}'", layout))
            })?
            .set_text(subtitle);
    }

    for shape in &spec.shapes {
        match shape {
            ShapeSpec::TextBox(text_box) => add_text_box(slide, text_box)?,
            ShapeSpec::Rectangle(rect) => add_rectangle(slide, rect),
        }
    }

    Ok(())
}

#[cfg(feature = "pptx")]
fn add_text_box(slide: &mut MutableSlide, spec: &TextBoxSpec) -> Result<()> {
    let g = spec.geometry;
    let shape = slide.add_text_box(g.left, g.top, g.width, g.height);
    let name = shape.name().to_string();
    let frame = shape
        .text_frame_mut()
        .ok_or_else(|| Error::ComponentNotFound(format!("text frame of '{}'", name)))?;

    if let Some(wrap) = spec.word_wrap {
        frame.set_word_wrap(wrap);
    }

    // The first paragraph exists on creation
    for (i, paragraph) in spec.paragraphs.iter().enumerate() {
        if i >= frame.paragraphs().len() {
            frame.add_paragraph();
        }
        let target = frame
            .paragraph_mut(i)
            .ok_or_else(|| Error::ComponentNotFound(format!("paragraph {} of '{}'", i, name)))?;
        apply_paragraph(target, paragraph);
    }

    Ok(())
}

#[cfg(feature = "pptx")]
fn apply_paragraph(target: &mut TextParagraph, spec: &ParagraphSpec) {
    target.set_text(&spec.text);
    if let Some(size) = spec.font_size {
        target.set_font_size(size);
    }
    if let Some(bold) = spec.bold {
        target.set_bold(bold);
    }
    if spec.level != 0 {
        target.set_level(spec.level);
    }
}

#[cfg(feature = "pptx")]
fn add_rectangle(slide: &mut MutableSlide, spec: &RectangleSpec) {
    let g = spec.geometry;
    slide
        .add_rectangle(g.left, g.top, g.width, g.height)
        .set_fill(spec.fill)
        .set_line(spec.line_color, spec.line_width);
}

/// Serialize a fixture to the bytes of a `.pptx` package.
#[cfg(feature = "pptx")]
pub fn save_bytes(fixture: &FixtureSpec) -> std::result::Result<Vec<u8>, FixtureError> {
    let pres = build_presentation(fixture)?;
    pres.to_bytes()
        .map_err(|e| FixtureError::from(Error::from(e)))
}

/// Serialize a fixture to the bytes of a `.pptx` package.
#[cfg(not(feature = "pptx"))]
pub fn save_bytes(_fixture: &FixtureSpec) -> std::result::Result<Vec<u8>, FixtureError> {
    Err(FixtureError::missing_dependency())
}

/// Build a fixture and write it to `output`, overwriting any existing file.
///
/// The parent directory must already exist.
///
/// # Examples
///
/// ```rust,no_run
/// use pptx_fixtures::fixtures::{build_and_save, catalog};
///
/// let path = build_and_save(&catalog::simple_zh(), "simple.pptx")?;
/// println!("wrote {}", path.display());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[cfg(feature = "pptx")]
pub fn build_and_save<P: AsRef<Path>>(
    fixture: &FixtureSpec,
    output: P,
) -> std::result::Result<PathBuf, FixtureError> {
    let output = output.as_ref();
    let pres = build_presentation(fixture)?;
    pres.save(output).map_err(Error::from)?;
    Ok(output.to_path_buf())
}

/// Build a fixture and write it to `output`, overwriting any existing file.
#[cfg(not(feature = "pptx"))]
pub fn build_and_save<P: AsRef<Path>>(
    fixture: &FixtureSpec,
    output: P,
) -> std::result::Result<PathBuf, FixtureError> {
    log::warn!(
        "cannot build '{}' into {}: pptx feature disabled",
        fixture.name,
        output.as_ref().display()
    );
    Err(FixtureError::missing_dependency())
}

#[cfg(all(test, feature = "pptx"))]
mod tests {
    use super::*;
    use crate::common::{Length, RGBColor};
    use crate::fixtures::catalog;

    #[test]
    fn test_conversion_test_model() {
        let pres = build_presentation(&catalog::conversion_test()).unwrap();
        assert_eq!(pres.slide_count(), 2);

        let first = &pres.slides()[0];
        assert_eq!(first.title().as_deref(), Some("PPTX to JSON Conversion Test"));
        let subtitle = first.placeholder(1).unwrap().text_frame().unwrap().text();
        assert_eq!(subtitle, "End-to-End Integration Test");

        let second = &pres.slides()[1];
        assert_eq!(second.layout_index(), 5);
        // Title placeholder plus three added shapes
        assert_eq!(second.shape_count(), 4);
        let names: Vec<_> = second.shapes().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["Title 1", "TextBox 2", "Rectangle 3", "TextBox 4"]);

        let rect = &second.shapes()[2];
        assert_eq!(rect.fill(), Some(RGBColor::new(0x70, 0xC0, 0x00)));
        let line = rect.line().unwrap();
        assert_eq!(line.color, RGBColor::BLACK);
        assert_eq!(line.width, Length::pt(1.0));
    }

    #[test]
    fn test_text_box_paragraphs() {
        let pres = build_presentation(&catalog::simple_zh()).unwrap();
        let text_box = &pres.slides()[1].shapes()[2];
        assert!(text_box.is_text_box());

        let frame = text_box.text_frame().unwrap();
        assert_eq!(frame.word_wrap(), Some(true));
        let levels: Vec<_> = frame.paragraphs().iter().map(|p| p.level()).collect();
        assert_eq!(levels, vec![0, 1, 0]);
        assert!(frame.paragraphs().iter().all(|p| p.font_size() == Some(18.0)));
    }

    #[test]
    fn test_save_bytes_is_zip() {
        let bytes = save_bytes(&catalog::simple_zh()).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_unknown_layout_is_build_error() {
        let mut fixture = catalog::simple_zh();
        fixture.slides[0].layout = 11;
        let err = save_bytes(&fixture).unwrap_err();
        assert!(matches!(
            err,
            FixtureError::Build {
                source: Error::UnknownLayout {
                    index: 11,
                    available: 11
                },
                ..
            }
        ));
    }

    #[test]
    fn test_subtitle_on_layout_without_one() {
        let mut fixture = catalog::conversion_test();
        // Title Only has no placeholder idx 1
        fixture.slides[0].layout = 5;
        let err = build_presentation(&fixture).unwrap_err();
        assert!(matches!(err, Error::ComponentNotFound(_)));
    }
}

#[cfg(all(test, not(feature = "pptx")))]
mod without_pptx_tests {
    use super::*;
    use crate::fixtures::{catalog, report};

    #[test]
    fn test_build_reports_missing_dependency() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("simple.pptx");
        let fixture = catalog::simple_zh();

        let outcome = build_and_save(&fixture, &path);
        assert!(matches!(outcome, Err(FixtureError::MissingDependency { .. })));
        assert!(!path.exists());
        assert!(matches!(
            save_bytes(&fixture),
            Err(FixtureError::MissingDependency { .. })
        ));

        let mut out = Vec::new();
        report(&fixture, &outcome, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("[ERROR] Need to install the pptx writer"));
        assert!(text.contains("   Run: cargo install pptx-fixtures --features pptx"));
    }
}
