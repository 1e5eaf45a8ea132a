/// Slides of a saved presentation.
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::opc::{OpcPackage, PackURI, Part};
use crate::ooxml::pptx::shapes::base::{Shape, parse_shapes};
use crate::ooxml::pptx::template::PlaceholderType;
use quick_xml::Reader;
use quick_xml::events::Event;

/// A slide read back from a package.
///
/// The shape tree is parsed once when the slide is loaded.
///
/// # Examples
///
/// ```rust,no_run
/// use pptx_fixtures::ooxml::pptx::Package;
///
/// let pkg = Package::open("presentation.pptx")?;
/// let pres = pkg.presentation()?;
///
/// for slide in pres.slides()? {
///     println!("{:?} ({:?})", slide.title(), slide.layout_name());
///     println!("Text content: {}", slide.text());
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Slide {
    partname: PackURI,
    layout_name: Option<String>,
    shapes: Vec<Shape>,
}

impl Slide {
    pub(crate) fn from_part(part: &Part, package: &OpcPackage) -> Result<Self> {
        if part.content_type() != ct::PML_SLIDE {
            return Err(OoxmlError::InvalidContentType {
                expected: ct::PML_SLIDE.to_string(),
                got: part.content_type().to_string(),
            });
        }

        let shapes = parse_shapes(part.blob())?;
        let layout_name = match part.related_partname(rt::SLIDE_LAYOUT) {
            Ok(partname) => csld_name(package.get_part(&partname)?.blob())?,
            Err(_) => None,
        };

        Ok(Self {
            partname: part.partname().clone(),
            layout_name,
            shapes,
        })
    }

    /// Part name of the slide, such as `/ppt/slides/slide1.xml`.
    #[inline]
    pub fn partname(&self) -> &PackURI {
        &self.partname
    }

    /// Name of the slide layout this slide is based on.
    #[inline]
    pub fn layout_name(&self) -> Option<&str> {
        self.layout_name.as_deref()
    }

    #[inline]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Placeholder with the given `idx`.
    pub fn placeholder(&self, idx: u32) -> Option<&Shape> {
        self.shapes
            .iter()
            .find(|shape| shape.placeholder().is_some_and(|(_, i)| i == idx))
    }

    /// Title placeholder (`title` or `ctrTitle`).
    pub fn title_shape(&self) -> Option<&Shape> {
        self.shapes.iter().find(|shape| {
            shape
                .placeholder()
                .is_some_and(|(ph_type, _)| ph_type.is_title())
        })
    }

    /// Text of the title placeholder.
    pub fn title(&self) -> Option<String> {
        self.title_shape().map(Shape::text)
    }

    /// Shapes that are placeholders of `ph_type`.
    pub fn placeholders_of(&self, ph_type: PlaceholderType) -> impl Iterator<Item = &Shape> {
        self.shapes
            .iter()
            .filter(move |shape| shape.placeholder().is_some_and(|(t, _)| t == ph_type))
    }

    /// Text of all shapes with a text frame, one shape per line.
    pub fn text(&self) -> String {
        self.shapes
            .iter()
            .filter(|shape| shape.text_frame().is_some())
            .map(Shape::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// `p:cSld/@name` of a slide, layout or master part.
fn csld_name(xml: &[u8]) -> Result<Option<String>> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"cSld" => {
                for attr in e.attributes() {
                    let attr = attr?;
                    if attr.key.as_ref() == b"name" {
                        return Ok(Some(attr.unescape_value()?.into_owned()));
                    }
                }
                return Ok(None);
            },
            Event::Eof => break,
            _ => {},
        }
        buf.clear();
    }

    Ok(None)
}
