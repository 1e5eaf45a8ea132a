/// Main presentation object of a saved package.
use crate::common::Length;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::{OpcPackage, Part};
use crate::ooxml::pptx::slide::Slide;
use quick_xml::Reader;
use quick_xml::events::Event;

/// A presentation read back from a `.pptx` package.
///
/// Not intended to be constructed directly. Use `Package::presentation()` to
/// access a presentation.
///
/// # Examples
///
/// ```rust,no_run
/// use pptx_fixtures::ooxml::pptx::Package;
///
/// let pkg = Package::open("presentation.pptx")?;
/// let pres = pkg.presentation()?;
///
/// if let Some((width, height)) = pres.slide_size()? {
///     println!("Slide size: {:.2}in x {:.2}in", width.as_inches(), height.as_inches());
/// }
///
/// for slide in pres.slides()? {
///     println!("Slide: {}", slide.text());
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Presentation<'a> {
    /// The presentation part (`/ppt/presentation.xml`)
    part: &'a Part,
    /// Package the slides are resolved against
    package: &'a OpcPackage,
}

impl<'a> Presentation<'a> {
    #[inline]
    pub(crate) fn new(part: &'a Part, package: &'a OpcPackage) -> Self {
        Self { part, package }
    }

    /// Number of entries in `p:sldIdLst`.
    pub fn slide_count(&self) -> Result<usize> {
        Ok(self.slide_rids()?.len())
    }

    /// Slide width from `p:sldSz`, `None` when the size is not defined.
    pub fn slide_width(&self) -> Result<Option<Length>> {
        Ok(self.slide_size()?.map(|(cx, _)| cx))
    }

    /// Slide height from `p:sldSz`, `None` when the size is not defined.
    pub fn slide_height(&self) -> Result<Option<Length>> {
        Ok(self.slide_size()?.map(|(_, cy)| cy))
    }

    /// Slide width and height.
    pub fn slide_size(&self) -> Result<Option<(Length, Length)>> {
        let mut reader = Reader::from_reader(self.part.blob());
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"sldSz" => {
                    let mut cx = None;
                    let mut cy = None;
                    for attr in e.attributes() {
                        let attr = attr?;
                        let value = attr.unescape_value()?;
                        let parsed = value.parse::<i64>().map_err(|e| {
                            OoxmlError::Xml(format!("Invalid slide size: {}", e))
                        });
                        match attr.key.as_ref() {
                            b"cx" => cx = Some(parsed?),
                            b"cy" => cy = Some(parsed?),
                            _ => {},
                        }
                    }
                    return Ok(cx
                        .zip(cy)
                        .map(|(cx, cy)| (Length::from_emus(cx), Length::from_emus(cy))));
                },
                Event::Eof => break,
                _ => {},
            }
            buf.clear();
        }

        Ok(None)
    }

    /// Relationship ids of the slides, in presentation order.
    pub fn slide_rids(&self) -> Result<Vec<String>> {
        let mut reader = Reader::from_reader(self.part.blob());
        reader.config_mut().trim_text(true);

        let mut rids = Vec::new();
        let mut buf = Vec::new();
        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"sldId" => {
                    for attr in e.attributes() {
                        let attr = attr?;
                        // r:id, not the numeric slide id
                        if attr.key.as_ref() != b"id" && attr.key.local_name().as_ref() == b"id" {
                            rids.push(attr.unescape_value()?.into_owned());
                        }
                    }
                },
                Event::Eof => break,
                _ => {},
            }
            buf.clear();
        }

        Ok(rids)
    }

    /// All slides in presentation order.
    pub fn slides(&self) -> Result<Vec<Slide>> {
        self.slide_rids()?
            .iter()
            .map(|rid| {
                let part = self.package.related_part(self.part, rid)?;
                Slide::from_part(part, self.package)
            })
            .collect()
    }

    /// Slide at a zero-based position.
    pub fn slide(&self, index: usize) -> Result<Option<Slide>> {
        match self.slide_rids()?.get(index) {
            Some(rid) => {
                let part = self.package.related_part(self.part, rid)?;
                Slide::from_part(part, self.package).map(Some)
            },
            None => Ok(None),
        }
    }

    /// Text of every slide, separated by blank lines.
    pub fn text(&self) -> Result<String> {
        Ok(self
            .slides()?
            .iter()
            .map(Slide::text)
            .collect::<Vec<_>>()
            .join("\n\n"))
    }

    /// Get access to the underlying presentation part.
    #[inline]
    pub fn part(&self) -> &'a Part {
        self.part
    }
}
