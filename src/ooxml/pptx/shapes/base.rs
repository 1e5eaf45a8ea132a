/// Shapes of a saved slide.
use crate::common::xml::unescape_xml;
use crate::common::{Length, RGBColor};
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::pptx::shapes::textframe::{Paragraph, TextFrame};
use crate::ooxml::pptx::template::PlaceholderType;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// What kind of shape this is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeKind {
    /// A `p:sp` carrying a `p:ph` element
    Placeholder { ph_type: PlaceholderType, idx: u32 },
    /// A `p:sp` with `txBox="1"`
    TextBox,
    /// Any other `p:sp`, with its preset geometry if it has one
    AutoShape { preset: Option<String> },
    /// Pictures, graphic frames and connectors, by element name
    Other(String),
}

/// Line (outline) properties of a shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Line {
    pub color: Option<RGBColor>,
    pub width: Option<Length>,
}

/// A shape on a slide.
///
/// # Examples
///
/// ```rust,ignore
/// for shape in slide.shapes() {
///     println!("{} #{}: {:?}", shape.name(), shape.id(), shape.kind());
///     if let Some((x, y)) = shape.offset() {
///         println!("  at ({}, {})", x, y);
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub(crate) id: u32,
    pub(crate) name: String,
    pub(crate) kind: ShapeKind,
    pub(crate) offset: Option<(Length, Length)>,
    pub(crate) extent: Option<(Length, Length)>,
    pub(crate) fill: Option<RGBColor>,
    pub(crate) line: Option<Line>,
    pub(crate) text_frame: Option<TextFrame>,
}

impl Shape {
    fn new(element: &[u8]) -> Self {
        let kind = match element {
            b"sp" => ShapeKind::AutoShape { preset: None },
            other => ShapeKind::Other(String::from_utf8_lossy(other).into_owned()),
        };
        Self {
            id: 0,
            name: String::new(),
            kind,
            offset: None,
            extent: None,
            fill: None,
            line: None,
            text_frame: None,
        }
    }

    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.kind, ShapeKind::Placeholder { .. })
    }

    /// Placeholder type and index, for placeholders.
    pub fn placeholder(&self) -> Option<(PlaceholderType, u32)> {
        match self.kind {
            ShapeKind::Placeholder { ph_type, idx } => Some((ph_type, idx)),
            _ => None,
        }
    }

    /// Left and top, unless inherited from the layout.
    #[inline]
    pub fn offset(&self) -> Option<(Length, Length)> {
        self.offset
    }

    /// Width and height, unless inherited from the layout.
    #[inline]
    pub fn extent(&self) -> Option<(Length, Length)> {
        self.extent
    }

    /// Solid fill color.
    #[inline]
    pub fn fill(&self) -> Option<RGBColor> {
        self.fill
    }

    #[inline]
    pub fn line(&self) -> Option<Line> {
        self.line
    }

    #[inline]
    pub fn text_frame(&self) -> Option<&TextFrame> {
        self.text_frame.as_ref()
    }

    /// Text of the shape, empty when it has no text frame.
    pub fn text(&self) -> String {
        self.text_frame
            .as_ref()
            .map(TextFrame::text)
            .unwrap_or_default()
    }

    fn paragraph_mut(&mut self) -> Option<&mut Paragraph> {
        self.text_frame.as_mut()?.paragraphs.last_mut()
    }
}

fn attr(e: &BytesStart<'_>, key: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.local_name().as_ref() == key {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

fn parse_num<T: std::str::FromStr>(e: &BytesStart<'_>, key: &[u8]) -> Result<Option<T>> {
    match attr(e, key)? {
        Some(value) => value.parse().map(Some).map_err(|_| {
            OoxmlError::Xml(format!(
                "Invalid {} value '{}'",
                String::from_utf8_lossy(key),
                value
            ))
        }),
        None => Ok(None),
    }
}

fn parse_emu_pair(e: &BytesStart<'_>, x: &[u8], y: &[u8]) -> Result<Option<(Length, Length)>> {
    match (parse_num::<i64>(e, x)?, parse_num::<i64>(e, y)?) {
        (Some(x), Some(y)) => Ok(Some((Length::from_emus(x), Length::from_emus(y)))),
        _ => Ok(None),
    }
}

/// Characters of an entity reference such as `amp` or `#x4E2D`.
fn resolve_entity(name: &str) -> String {
    let code = if let Some(hex) = name.strip_prefix("#x") {
        u32::from_str_radix(hex, 16).ok()
    } else if let Some(dec) = name.strip_prefix('#') {
        dec.parse().ok()
    } else {
        None
    };

    match code.and_then(char::from_u32) {
        Some(ch) => ch.to_string(),
        None => unescape_xml(&format!("&{};", name)),
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(value, "1" | "true")
}

/// Apply one element found inside a shape to the shape being built.
fn apply_element(
    shape: &mut Shape,
    e: &BytesStart<'_>,
    name: &[u8],
    parent: &[u8],
    grandparent: &[u8],
) -> Result<()> {
    match name {
        b"cNvPr" => {
            shape.id = parse_num(e, b"id")?.unwrap_or_default();
            shape.name = attr(e, b"name")?.unwrap_or_default();
        },
        b"cNvSpPr" => {
            let is_text_box = attr(e, b"txBox")?.is_some_and(|v| parse_bool(&v));
            if is_text_box && matches!(shape.kind, ShapeKind::AutoShape { .. }) {
                shape.kind = ShapeKind::TextBox;
            }
        },
        b"ph" => {
            let ph_type = PlaceholderType::from_xml(attr(e, b"type")?.as_deref());
            let idx = parse_num(e, b"idx")?.unwrap_or_default();
            shape.kind = ShapeKind::Placeholder { ph_type, idx };
        },
        b"off" if parent == b"xfrm" && grandparent == b"spPr" => {
            shape.offset = parse_emu_pair(e, b"x", b"y")?;
        },
        b"ext" if parent == b"xfrm" && grandparent == b"spPr" => {
            shape.extent = parse_emu_pair(e, b"cx", b"cy")?;
        },
        b"prstGeom" if parent == b"spPr" => {
            if let ShapeKind::AutoShape { preset } = &mut shape.kind {
                *preset = attr(e, b"prst")?;
            }
        },
        b"ln" if parent == b"spPr" => {
            let width = parse_num::<i64>(e, b"w")?.map(Length::from_emus);
            let line = shape.line.get_or_insert_with(Line::default);
            line.width = width;
        },
        b"srgbClr" if parent == b"solidFill" => {
            let color = attr(e, b"val")?
                .map(|hex| {
                    RGBColor::from_hex(&hex).ok_or_else(|| {
                        OoxmlError::Xml(format!("Invalid color value '{}'", hex))
                    })
                })
                .transpose()?;
            match grandparent {
                b"spPr" => shape.fill = color,
                b"ln" => shape.line.get_or_insert_with(Line::default).color = color,
                _ => {},
            }
        },
        b"txBody" => {
            shape.text_frame = Some(TextFrame::default());
        },
        b"bodyPr" => {
            if let Some(frame) = shape.text_frame.as_mut() {
                frame.word_wrap = attr(e, b"wrap")?.map(|wrap| wrap != "none");
            }
        },
        b"p" if parent == b"txBody" => {
            if let Some(frame) = shape.text_frame.as_mut() {
                frame.paragraphs.push(Paragraph::default());
            }
        },
        b"pPr" if parent == b"p" => {
            let level = parse_num(e, b"lvl")?;
            if let Some(paragraph) = shape.paragraph_mut() {
                paragraph.level = level.unwrap_or_default();
            }
        },
        b"defRPr" if parent == b"pPr" => {
            let size = parse_num(e, b"sz")?;
            let bold = attr(e, b"b")?.map(|b| parse_bool(&b));
            if let Some(paragraph) = shape.paragraph_mut() {
                paragraph.size_centipoints = size;
                paragraph.bold = bold;
            }
        },
        _ => {},
    }
    Ok(())
}

const SHAPE_ELEMENTS: [&[u8]; 4] = [b"sp", b"pic", b"graphicFrame", b"cxnSp"];

/// Parse every shape of a slide's shape tree, in document order.
///
/// Group shapes are flattened: their children are listed like top-level
/// shapes.
pub(crate) fn parse_shapes(xml: &[u8]) -> Result<Vec<Shape>> {
    let mut reader = Reader::from_reader(xml);
    // Text inside a:t is significant, including surrounding whitespace
    reader.config_mut().trim_text(false);

    let mut shapes = Vec::new();
    let mut current: Option<Shape> = None;
    let mut stack: Vec<Vec<u8>> = Vec::new();
    let mut in_text = false;
    let mut buf = Vec::new();

    loop {
        let event = reader.read_event_into(&mut buf)?;
        match event {
            Event::Start(ref e) | Event::Empty(ref e) => {
                let is_start = matches!(event, Event::Start(_));
                let local = e.local_name();
                let name = local.as_ref();

                if current.is_none() && SHAPE_ELEMENTS.contains(&name) {
                    if is_start {
                        current = Some(Shape::new(name));
                    } else {
                        shapes.push(Shape::new(name));
                    }
                } else if let Some(shape) = current.as_mut() {
                    let parent = stack.last().map(Vec::as_slice).unwrap_or_default();
                    let grandparent = stack
                        .len()
                        .checked_sub(2)
                        .map(|i| stack[i].as_slice())
                        .unwrap_or_default();
                    apply_element(shape, e, name, parent, grandparent)?;
                    if name == b"t" && is_start {
                        in_text = true;
                    }
                }

                if is_start {
                    stack.push(name.to_vec());
                }
            },
            Event::Text(ref e) if in_text => {
                let text = std::str::from_utf8(e)?;
                if let Some(paragraph) = current.as_mut().and_then(Shape::paragraph_mut) {
                    paragraph.text.push_str(text);
                }
            },
            Event::GeneralRef(ref e) if in_text => {
                let entity = resolve_entity(std::str::from_utf8(e)?);
                if let Some(paragraph) = current.as_mut().and_then(Shape::paragraph_mut) {
                    paragraph.text.push_str(&entity);
                }
            },
            Event::End(ref e) => {
                stack.pop();
                let local = e.local_name();
                let name = local.as_ref();
                if name == b"t" {
                    in_text = false;
                }
                if SHAPE_ELEMENTS.contains(&name)
                    && current.is_some()
                    && !stack.iter().any(|n| SHAPE_ELEMENTS.contains(&n.as_slice()))
                {
                    shapes.extend(current.take());
                }
            },
            Event::Eof => break,
            _ => {},
        }
        buf.clear();
    }

    Ok(shapes)
}
