//! Build each catalog deck on disk and read it back.
#![cfg(feature = "pptx")]

use pptx_fixtures::common::{Length, RGBColor};
use pptx_fixtures::fixtures::{FixtureError, build_and_save, catalog};
use pptx_fixtures::ooxml::pptx::{Package, PlaceholderType, ShapeKind, Slide};
use tempfile::tempdir;

fn build_and_open(fixture: &pptx_fixtures::FixtureSpec) -> (tempfile::TempDir, Vec<Slide>) {
    let dir = tempdir().unwrap();
    let path = build_and_save(fixture, dir.path().join("deck.pptx")).unwrap();
    assert!(std::fs::metadata(&path).unwrap().len() > 0);

    let pkg = Package::open(&path).unwrap();
    let pres = pkg.presentation().unwrap();
    assert_eq!(pres.slide_count().unwrap(), 2);
    assert_eq!(
        pres.slide_size().unwrap(),
        Some((Length::inches(10.0), Length::inches(7.5)))
    );
    let slides = pres.slides().unwrap();
    (dir, slides)
}

#[test]
fn test_conversion_test_deck() {
    let (_dir, slides) = build_and_open(&catalog::conversion_test());

    let first = &slides[0];
    assert_eq!(first.layout_name(), Some("Title Slide"));
    assert_eq!(first.title().as_deref(), Some("PPTX to JSON Conversion Test"));
    assert_eq!(
        first.placeholder(1).map(|s| s.text()).as_deref(),
        Some("End-to-End Integration Test")
    );
    assert_eq!(
        first.title_shape().and_then(|s| s.placeholder()),
        Some((PlaceholderType::CenterTitle, 0))
    );

    let second = &slides[1];
    assert_eq!(second.layout_name(), Some("Title Only"));
    assert_eq!(second.title().as_deref(), Some("Test Elements"));
    assert_eq!(second.shapes().len(), 4);

    let first_box = &second.shapes()[1];
    assert_eq!(first_box.kind(), &ShapeKind::TextBox);
    assert_eq!(first_box.name(), "TextBox 2");
    assert_eq!(
        first_box.offset(),
        Some((Length::inches(1.0), Length::inches(2.0)))
    );
    assert_eq!(
        first_box.extent(),
        Some((Length::inches(3.0), Length::inches(1.0)))
    );
    let frame = first_box.text_frame().unwrap();
    assert_eq!(frame.word_wrap(), Some(true));
    assert_eq!(frame.paragraphs()[0].text(), "This is a test text box");
    assert_eq!(frame.paragraphs()[0].font_size(), Some(18.0));

    let rect = &second.shapes()[2];
    assert_eq!(
        rect.kind(),
        &ShapeKind::AutoShape {
            preset: Some("rect".to_string())
        }
    );
    assert_eq!(rect.fill().map(|c| c.to_hex()).as_deref(), Some("70C000"));
    let line = rect.line().unwrap();
    assert_eq!(line.color, Some(RGBColor::BLACK));
    assert_eq!(line.width, Some(Length::pt(1.0)));
    assert_eq!(
        rect.extent(),
        Some((Length::inches(2.0), Length::inches(1.5)))
    );

    let second_box = &second.shapes()[3];
    let frame = second_box.text_frame().unwrap();
    assert_eq!(frame.word_wrap(), Some(false));
    let paragraph = &frame.paragraphs()[0];
    assert_eq!(paragraph.text(), "Element 2: Another text box");
    assert_eq!(paragraph.font_size(), Some(14.0));
    assert_eq!(paragraph.bold(), Some(true));
}

#[test]
fn test_simple_zh_deck() {
    let (_dir, slides) = build_and_open(&catalog::simple_zh());

    assert_eq!(slides[0].title().as_deref(), Some("测试演示文稿"));
    assert_eq!(
        slides[0].placeholder(1).map(|s| s.text()).as_deref(),
        Some("这是一个简单的测试 PPTX")
    );

    let second = &slides[1];
    assert_eq!(second.layout_name(), Some("Title and Content"));
    assert_eq!(second.title().as_deref(), Some("主要内容"));

    let text_box = second
        .shapes()
        .iter()
        .find(|shape| shape.kind() == &ShapeKind::TextBox)
        .unwrap();
    assert_eq!(
        text_box.extent(),
        Some((Length::inches(8.0), Length::inches(4.0)))
    );
    let frame = text_box.text_frame().unwrap();
    let paragraphs: Vec<_> = frame
        .paragraphs()
        .iter()
        .map(|p| (p.text(), p.level(), p.font_size()))
        .collect();
    assert_eq!(
        paragraphs,
        vec![
            ("这是第一行文本", 0, Some(18.0)),
            ("这是第二行文本", 1, Some(18.0)),
            ("这是第三行文本", 0, Some(18.0)),
        ]
    );
}

#[test]
fn test_building_twice_overwrites() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("simple.pptx");
    let fixture = catalog::simple_zh();

    build_and_save(&fixture, &path).unwrap();
    build_and_save(&fixture, &path).unwrap();

    let pkg = Package::open(&path).unwrap();
    assert_eq!(pkg.presentation().unwrap().slide_count().unwrap(), 2);
}

#[test]
fn test_missing_directory_is_build_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("simple.pptx");

    let err = build_and_save(&catalog::conversion_test(), &path).unwrap_err();
    assert!(matches!(err, FixtureError::Build {
            source: pptx_fixtures::Error::Io(_),
            ..
        }));
    assert!(!path.exists());
}

#[test]
fn test_unknown_layout_is_rejected() {
    let dir = tempdir().unwrap();
    let mut fixture = catalog::conversion_test();
    fixture.slides[1].layout = 42;

    let err = build_and_save(&fixture, dir.path().join("bad.pptx")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unknown slide layout index 42 (template has 11 layouts)"
    );
}

#[test]
fn test_every_part_is_well_formed_xml() {
    use pptx_fixtures::fixtures::save_bytes;
    use pptx_fixtures::ooxml::OpcPackage;
    use quick_xml::Reader;
    use quick_xml::events::Event;

    for fixture in catalog::all() {
        let bytes = save_bytes(&fixture).unwrap();
        let package = OpcPackage::from_bytes(&bytes).unwrap();
        // master, 11 layouts, theme, 2 slides and the rest
        assert!(package.part_count() >= 21, "{}", fixture.name);

        let mut errors = Vec::new();
        for part in package.iter_parts() {
            if !part.content_type().ends_with("xml") {
                continue;
            }
            let mut reader = Reader::from_reader(part.blob());
            let mut buf = Vec::new();
            loop {
                match reader.read_event_into(&mut buf) {
                    Ok(Event::Eof) => break,
                    Ok(_) => {},
                    Err(e) => {
                        errors.push(format!("{}: {}", part.partname().as_str(), e));
                        break;
                    },
                }
                buf.clear();
            }
        }
        assert!(errors.is_empty(), "{}: {:?}", fixture.name, errors);
    }
}
