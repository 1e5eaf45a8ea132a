//! Default presentation template.
//!
//! A new presentation is seeded with one slide master, the eleven standard
//! slide layouts, the Office theme and the package-level property parts.
//! Layouts are described by [`SLIDE_LAYOUTS`], which drives both the layout
//! XML and the placeholders cloned onto new slides.

use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::namespace;
use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt::Write as FmtWrite;

/// Kind of a placeholder, as written in `p:ph/@type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderType {
    CenterTitle,
    Title,
    SubTitle,
    Body,
    /// Generic content placeholder, written without a type attribute
    Object,
    Picture,
    Date,
    Footer,
    SlideNumber,
}

impl PlaceholderType {
    /// Value of the `type` attribute, `None` for content placeholders.
    pub fn as_xml(self) -> Option<&'static str> {
        match self {
            PlaceholderType::CenterTitle => Some("ctrTitle"),
            PlaceholderType::Title => Some("title"),
            PlaceholderType::SubTitle => Some("subTitle"),
            PlaceholderType::Body => Some("body"),
            PlaceholderType::Object => None,
            PlaceholderType::Picture => Some("pic"),
            PlaceholderType::Date => Some("dt"),
            PlaceholderType::Footer => Some("ftr"),
            PlaceholderType::SlideNumber => Some("sldNum"),
        }
    }

    /// Parse a `type` attribute; a missing attribute means a content placeholder.
    pub fn from_xml(value: Option<&str>) -> Self {
        match value {
            Some("ctrTitle") => PlaceholderType::CenterTitle,
            Some("title") => PlaceholderType::Title,
            Some("subTitle") => PlaceholderType::SubTitle,
            Some("body") => PlaceholderType::Body,
            Some("pic") => PlaceholderType::Picture,
            Some("dt") => PlaceholderType::Date,
            Some("ftr") => PlaceholderType::Footer,
            Some("sldNum") => PlaceholderType::SlideNumber,
            _ => PlaceholderType::Object,
        }
    }

    #[inline]
    pub fn is_title(self) -> bool {
        matches!(self, PlaceholderType::CenterTitle | PlaceholderType::Title)
    }

    /// Date, footer and slide number placeholders stay on the layout.
    #[inline]
    pub fn is_cloneable(self) -> bool {
        !matches!(
            self,
            PlaceholderType::Date | PlaceholderType::Footer | PlaceholderType::SlideNumber
        )
    }

    /// Whether a placeholder of this kind carries a text body.
    #[inline]
    pub fn has_text(self) -> bool {
        !matches!(self, PlaceholderType::Picture)
    }

    /// Base of the shape name, e.g. `"Title"` in `"Title 1"`.
    pub fn basename(self, vertical: bool) -> &'static str {
        match (self, vertical) {
            (PlaceholderType::CenterTitle | PlaceholderType::Title, false) => "Title",
            (PlaceholderType::CenterTitle | PlaceholderType::Title, true) => "Vertical Title",
            (PlaceholderType::SubTitle, _) => "Subtitle",
            (PlaceholderType::Body, false) => "Text Placeholder",
            (PlaceholderType::Body | PlaceholderType::Object, true) => "Vertical Text Placeholder",
            (PlaceholderType::Object, false) => "Content Placeholder",
            (PlaceholderType::Picture, _) => "Picture Placeholder",
            (PlaceholderType::Date, _) => "Date Placeholder",
            (PlaceholderType::Footer, _) => "Footer Placeholder",
            (PlaceholderType::SlideNumber, _) => "Slide Number Placeholder",
        }
    }
}

/// A placeholder defined by a slide layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderSpec {
    pub ph_type: PlaceholderType,
    /// Placeholder index; 0 is written as no `idx` attribute
    pub idx: u32,
    /// `orient="vert"`
    pub vertical: bool,
    /// `sz` attribute (`"half"`, `"quarter"`)
    pub size: Option<&'static str>,
    /// Position and size in EMUs; `None` inherits from the master
    pub xfrm: Option<(i64, i64, i64, i64)>,
}

impl PlaceholderSpec {
    const fn new(ph_type: PlaceholderType, idx: u32) -> Self {
        Self {
            ph_type,
            idx,
            vertical: false,
            size: None,
            xfrm: None,
        }
    }

    const fn at(mut self, x: i64, y: i64, cx: i64, cy: i64) -> Self {
        self.xfrm = Some((x, y, cx, cy));
        self
    }

    const fn vert(mut self) -> Self {
        self.vertical = true;
        self
    }

    const fn sized(mut self, size: &'static str) -> Self {
        self.size = Some(size);
        self
    }

    /// Write the `<p:ph .../>` element.
    pub(crate) fn write_ph(&self, xml: &mut String) {
        xml.push_str("<p:ph");
        if let Some(ph_type) = self.ph_type.as_xml() {
            let _ = write!(xml, r#" type="{}""#, ph_type);
        }
        if self.vertical {
            xml.push_str(r#" orient="vert""#);
        }
        if let Some(size) = self.size {
            let _ = write!(xml, r#" sz="{}""#, size);
        }
        if self.idx != 0 {
            let _ = write!(xml, r#" idx="{}""#, self.idx);
        }
        xml.push_str("/>");
    }
}

/// A slide layout of the default template.
#[derive(Debug, Clone, Copy)]
pub struct LayoutSpec {
    pub name: &'static str,
    /// `p:sldLayout/@type`
    pub layout_type: &'static str,
    /// Content placeholders in document order
    pub placeholders: &'static [PlaceholderSpec],
}

use PlaceholderType::*;

/// The standard layouts, in the order of the master's layout list.
pub static SLIDE_LAYOUTS: [LayoutSpec; 11] = [
    LayoutSpec {
        name: "Title Slide",
        layout_type: "title",
        placeholders: &[
            PlaceholderSpec::new(CenterTitle, 0).at(685800, 2130425, 7772400, 1470025),
            PlaceholderSpec::new(SubTitle, 1).at(1371600, 3886200, 6400800, 1752600),
        ],
    },
    LayoutSpec {
        name: "Title and Content",
        layout_type: "obj",
        placeholders: &[PlaceholderSpec::new(Title, 0), PlaceholderSpec::new(Object, 1)],
    },
    LayoutSpec {
        name: "Section Header",
        layout_type: "secHead",
        placeholders: &[
            PlaceholderSpec::new(Title, 0).at(722313, 4406900, 7772400, 1362075),
            PlaceholderSpec::new(Body, 1).at(722313, 2906713, 7772400, 1500187),
        ],
    },
    LayoutSpec {
        name: "Two Content",
        layout_type: "twoObj",
        placeholders: &[
            PlaceholderSpec::new(Title, 0),
            PlaceholderSpec::new(Object, 1)
                .sized("half")
                .at(457200, 1600200, 4038600, 4525963),
            PlaceholderSpec::new(Object, 2)
                .sized("half")
                .at(4648200, 1600200, 4038600, 4525963),
        ],
    },
    LayoutSpec {
        name: "Comparison",
        layout_type: "twoTxTwoObj",
        placeholders: &[
            PlaceholderSpec::new(Title, 0),
            PlaceholderSpec::new(Body, 1).at(457200, 1535113, 4040188, 639762),
            PlaceholderSpec::new(Object, 2)
                .sized("quarter")
                .at(457200, 2174875, 4040188, 3951288),
            PlaceholderSpec::new(Body, 3)
                .sized("quarter")
                .at(4645025, 1535113, 4041775, 639762),
            PlaceholderSpec::new(Object, 4)
                .sized("quarter")
                .at(4645025, 2174875, 4041775, 3951288),
        ],
    },
    LayoutSpec {
        name: "Title Only",
        layout_type: "titleOnly",
        placeholders: &[PlaceholderSpec::new(Title, 0)],
    },
    LayoutSpec {
        name: "Blank",
        layout_type: "blank",
        placeholders: &[],
    },
    LayoutSpec {
        name: "Content with Caption",
        layout_type: "objTx",
        placeholders: &[
            PlaceholderSpec::new(Title, 0).at(457200, 273050, 3008313, 1162050),
            PlaceholderSpec::new(Object, 1).at(3575050, 273050, 5111750, 5853113),
            PlaceholderSpec::new(Body, 2)
                .sized("half")
                .at(457200, 1435100, 3008313, 4691063),
        ],
    },
    LayoutSpec {
        name: "Picture with Caption",
        layout_type: "picTx",
        placeholders: &[
            PlaceholderSpec::new(Title, 0).at(1792288, 4800600, 5486400, 566738),
            PlaceholderSpec::new(Picture, 1).at(1792288, 612775, 5486400, 4114800),
            PlaceholderSpec::new(Body, 2)
                .sized("half")
                .at(1792288, 5367338, 5486400, 804862),
        ],
    },
    LayoutSpec {
        name: "Title and Vertical Text",
        layout_type: "vertTx",
        placeholders: &[
            PlaceholderSpec::new(Title, 0),
            PlaceholderSpec::new(Body, 1).vert(),
        ],
    },
    LayoutSpec {
        name: "Vertical Title and Text",
        layout_type: "vertTitleAndTx",
        placeholders: &[
            PlaceholderSpec::new(Title, 0)
                .vert()
                .at(6629400, 274638, 2057400, 5851525),
            PlaceholderSpec::new(Body, 1)
                .vert()
                .at(457200, 274638, 6019800, 5851525),
        ],
    },
];

/// Footer placeholders every layout repeats from the master.
const LAYOUT_FOOTERS: [PlaceholderSpec; 3] = [
    PlaceholderSpec::new(Date, 10).sized("half"),
    PlaceholderSpec::new(Footer, 11).sized("quarter"),
    PlaceholderSpec::new(SlideNumber, 12).sized("quarter"),
];

/// Layout at a 0-based index.
#[inline]
pub fn slide_layout(index: usize) -> Option<&'static LayoutSpec> {
    SLIDE_LAYOUTS.get(index)
}

/// Find a layout by its name.
pub fn slide_layout_by_name(name: &str) -> Option<(usize, &'static LayoutSpec)> {
    SLIDE_LAYOUTS
        .iter()
        .enumerate()
        .find(|(_, layout)| layout.name == name)
}

/// First id of the master's `sldLayoutIdLst`.
pub const FIRST_SLIDE_LAYOUT_ID: u64 = 2_147_483_649;

/// Id of the slide master in `sldMasterIdLst`.
pub const SLIDE_MASTER_ID: u64 = 2_147_483_648;

/// Office theme.
pub fn default_theme_xml() -> &'static str {
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/resources/theme/theme1.xml"))
}

pub fn default_pres_props_xml() -> &'static str {
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/resources/presProps.xml"))
}

pub fn default_view_props_xml() -> &'static str {
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/resources/viewProps.xml"))
}

pub fn default_table_styles_xml() -> &'static str {
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/resources/tableStyles.xml"))
}

fn write_root_open(xml: &mut String, tag: &str, extra_attrs: &str) {
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    let _ = write!(
        xml,
        r#"<{} xmlns:a="{}" xmlns:r="{}" xmlns:p="{}"{}>"#,
        tag,
        namespace::DML_MAIN,
        namespace::OFC_RELATIONSHIPS,
        namespace::PML_MAIN,
        extra_attrs
    );
}

/// Empty shape tree header (`p:nvGrpSpPr` + `p:grpSpPr`).
pub(crate) fn write_sp_tree_header(xml: &mut String) {
    xml.push_str(r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#);
    xml.push_str("<p:grpSpPr><a:xfrm>");
    xml.push_str(r#"<a:off x="0" y="0"/><a:ext cx="0" cy="0"/>"#);
    xml.push_str(r#"<a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/>"#);
    xml.push_str("</a:xfrm></p:grpSpPr>");
}

/// A placeholder shape as it appears on a master or layout.
fn write_template_placeholder(xml: &mut String, id: u32, spec: &PlaceholderSpec) {
    let _ = write!(
        xml,
        r#"<p:sp><p:nvSpPr><p:cNvPr id="{}" name="{} {}"/>"#,
        id,
        spec.ph_type.basename(spec.vertical),
        id - 1
    );
    xml.push_str(r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr>"#);
    spec.write_ph(xml);
    xml.push_str("</p:nvPr></p:nvSpPr>");

    match spec.xfrm {
        Some((x, y, cx, cy)) => {
            let _ = write!(
                xml,
                r#"<p:spPr><a:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></a:xfrm></p:spPr>"#,
                x, y, cx, cy
            );
        },
        None => xml.push_str("<p:spPr/>"),
    }

    if spec.ph_type.has_text() {
        xml.push_str("<p:txBody><a:bodyPr/><a:lstStyle/><a:p><a:endParaRPr lang=\"en-US\"/></a:p></p:txBody>");
    }
    xml.push_str("</p:sp>");
}

/// XML of a slide layout. Its only relationship is to the master (rId1).
pub fn slide_layout_xml(layout: &LayoutSpec) -> String {
    let mut xml = String::with_capacity(4096);
    let attrs = format!(r#" type="{}" preserve="1""#, layout.layout_type);
    write_root_open(&mut xml, "p:sldLayout", &attrs);

    let _ = write!(xml, r#"<p:cSld name="{}"><p:spTree>"#, escape_xml(layout.name));
    write_sp_tree_header(&mut xml);

    let mut id = 2;
    for spec in layout.placeholders.iter().chain(LAYOUT_FOOTERS.iter()) {
        write_template_placeholder(&mut xml, id, spec);
        id += 1;
    }

    xml.push_str("</p:spTree></p:cSld>");
    xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
    xml.push_str("</p:sldLayout>");
    xml
}

const MASTER_PLACEHOLDERS: [PlaceholderSpec; 5] = [
    PlaceholderSpec::new(Title, 0).at(457200, 274638, 8229600, 1143000),
    PlaceholderSpec::new(Body, 1).at(457200, 1600200, 8229600, 4525963),
    PlaceholderSpec::new(Date, 2)
        .sized("half")
        .at(457200, 6356350, 2133600, 365125),
    PlaceholderSpec::new(Footer, 3)
        .sized("quarter")
        .at(3124200, 6356350, 2895600, 365125),
    PlaceholderSpec::new(SlideNumber, 4)
        .sized("quarter")
        .at(6553200, 6356350, 2133600, 365125),
];

/// Body text levels: left margin, hanging indent, bullet, size (centipoints).
const BODY_LEVELS: [(i64, i64, &str, u32); 9] = [
    (342900, -342900, "•", 3200),
    (742950, -285750, "–", 2800),
    (1143000, -228600, "•", 2400),
    (1600200, -228600, "–", 2000),
    (2057400, -228600, "»", 2000),
    (2514600, -228600, "•", 2000),
    (2971800, -228600, "•", 2000),
    (3429000, -228600, "•", 2000),
    (3886200, -228600, "•", 2000),
];

fn write_def_rpr(xml: &mut String, sz: u32, font: &str) {
    let _ = write!(
        xml,
        r#"<a:defRPr sz="{}" kern="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill><a:latin typeface="{}"/><a:ea typeface="{}"/><a:cs typeface="{}"/></a:defRPr>"#,
        sz, font, font, font
    );
}

fn write_text_styles(xml: &mut String) {
    xml.push_str("<p:txStyles>");

    xml.push_str("<p:titleStyle>");
    xml.push_str(r#"<a:lvl1pPr algn="ctr" defTabSz="914400" rtl="0" eaLnBrk="1" latinLnBrk="0" hangingPunct="1"><a:spcBef><a:spcPct val="0"/></a:spcBef><a:buNone/>"#);
    write_def_rpr(xml, 4400, "+mj-lt");
    xml.push_str("</a:lvl1pPr></p:titleStyle>");

    xml.push_str("<p:bodyStyle>");
    for (lvl, (mar_l, indent, bullet, sz)) in BODY_LEVELS.iter().enumerate() {
        let _ = write!(
            xml,
            r#"<a:lvl{n}pPr marL="{}" indent="{}" algn="l" defTabSz="914400" rtl="0" eaLnBrk="1" latinLnBrk="0" hangingPunct="1"><a:spcBef><a:spcPct val="20000"/></a:spcBef><a:buFont typeface="Arial"/><a:buChar char="{}"/>"#,
            mar_l,
            indent,
            bullet,
            n = lvl + 1
        );
        write_def_rpr(xml, *sz, "+mn-lt");
        let _ = write!(xml, "</a:lvl{}pPr>", lvl + 1);
    }
    xml.push_str("</p:bodyStyle>");

    xml.push_str(r#"<p:otherStyle><a:defPPr><a:defRPr lang="en-US"/></a:defPPr>"#);
    for lvl in 0..9i64 {
        let _ = write!(
            xml,
            r#"<a:lvl{}pPr marL="{}" algn="l" defTabSz="914400" rtl="0" eaLnBrk="1" latinLnBrk="0" hangingPunct="1">"#,
            lvl + 1,
            lvl * 457200
        );
        write_def_rpr(xml, 1800, "+mn-lt");
        let _ = write!(xml, "</a:lvl{}pPr>", lvl + 1);
    }
    xml.push_str("</p:otherStyle>");

    xml.push_str("</p:txStyles>");
}

/// XML of the slide master.
///
/// Relationships rId1..rId11 must point at the layouts in [`SLIDE_LAYOUTS`]
/// order, and rId12 at the theme.
pub fn slide_master_xml() -> String {
    let mut xml = String::with_capacity(12 * 1024);
    write_root_open(&mut xml, "p:sldMaster", "");

    xml.push_str("<p:cSld><p:bg><p:bgRef idx=\"1001\"><a:schemeClr val=\"bg1\"/></p:bgRef></p:bg><p:spTree>");
    write_sp_tree_header(&mut xml);
    for (i, spec) in MASTER_PLACEHOLDERS.iter().enumerate() {
        write_template_placeholder(&mut xml, i as u32 + 2, spec);
    }
    xml.push_str("</p:spTree></p:cSld>");

    xml.push_str(r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>"#);

    xml.push_str("<p:sldLayoutIdLst>");
    for i in 0..SLIDE_LAYOUTS.len() {
        let _ = write!(
            xml,
            r#"<p:sldLayoutId id="{}" r:id="rId{}"/>"#,
            FIRST_SLIDE_LAYOUT_ID + i as u64,
            i + 1
        );
    }
    xml.push_str("</p:sldLayoutIdLst>");

    write_text_styles(&mut xml);
    xml.push_str("</p:sldMaster>");
    xml
}

/// `p:defaultTextStyle` of `presentation.xml`.
pub(crate) fn write_default_text_style(xml: &mut String) {
    xml.push_str(r#"<p:defaultTextStyle><a:defPPr><a:defRPr lang="en-US"/></a:defPPr>"#);
    for lvl in 0..9i64 {
        let _ = write!(
            xml,
            r#"<a:lvl{}pPr marL="{}" algn="l" defTabSz="914400" rtl="0" eaLnBrk="1" latinLnBrk="0" hangingPunct="1">"#,
            lvl + 1,
            lvl * 457200
        );
        write_def_rpr(xml, 1800, "+mn-lt");
        let _ = write!(xml, "</a:lvl{}pPr>", lvl + 1);
    }
    xml.push_str("</p:defaultTextStyle>");
}

/// Document properties written to `docProps/core.xml`.
#[derive(Debug, Clone, PartialEq)]
pub struct CoreProperties {
    pub title: String,
    pub creator: String,
    pub last_modified_by: String,
    pub revision: u32,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl Default for CoreProperties {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            title: "PowerPoint Presentation".to_string(),
            creator: env!("CARGO_PKG_NAME").to_string(),
            last_modified_by: env!("CARGO_PKG_NAME").to_string(),
            revision: 1,
            created: now,
            modified: now,
        }
    }
}

impl CoreProperties {
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(1024);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#);
        let _ = write!(xml, "<dc:title>{}</dc:title>", escape_xml(&self.title));
        let _ = write!(xml, "<dc:creator>{}</dc:creator>", escape_xml(&self.creator));
        let _ = write!(
            xml,
            "<cp:lastModifiedBy>{}</cp:lastModifiedBy>",
            escape_xml(&self.last_modified_by)
        );
        let _ = write!(xml, "<cp:revision>{}</cp:revision>", self.revision);
        let _ = write!(
            xml,
            r#"<dcterms:created xsi:type="dcterms:W3CDTF">{}</dcterms:created>"#,
            self.created.to_rfc3339_opts(SecondsFormat::Secs, true)
        );
        let _ = write!(
            xml,
            r#"<dcterms:modified xsi:type="dcterms:W3CDTF">{}</dcterms:modified>"#,
            self.modified.to_rfc3339_opts(SecondsFormat::Secs, true)
        );
        xml.push_str("</cp:coreProperties>");
        xml
    }
}

/// XML of `docProps/app.xml`.
pub fn app_props_xml(slide_count: usize) -> String {
    let mut xml = String::with_capacity(1024);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#);
    xml.push_str("<TotalTime>0</TotalTime><Words>0</Words>");
    let _ = write!(
        xml,
        "<Application>{}</Application>",
        escape_xml(env!("CARGO_PKG_NAME"))
    );
    xml.push_str("<PresentationFormat>On-screen Show (4:3)</PresentationFormat>");
    xml.push_str("<Paragraphs>0</Paragraphs>");
    let _ = write!(xml, "<Slides>{}</Slides>", slide_count);
    xml.push_str("<Notes>0</Notes><HiddenSlides>0</HiddenSlides><MMClips>0</MMClips>");
    xml.push_str("<ScaleCrop>false</ScaleCrop><LinksUpToDate>false</LinksUpToDate>");
    xml.push_str("<SharedDoc>false</SharedDoc><HyperlinksChanged>false</HyperlinksChanged>");
    let _ = write!(xml, "<AppVersion>{}</AppVersion>", app_version());
    xml.push_str("</Properties>");
    xml
}

/// `AppVersion` must be `XX.YYYY`.
fn app_version() -> String {
    let major: u32 = env!("CARGO_PKG_VERSION_MAJOR").parse().unwrap_or(0);
    let minor: u32 = env!("CARGO_PKG_VERSION_MINOR").parse().unwrap_or(0);
    format!("{:02}.{:04}", major, minor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_catalogue_order() {
        assert_eq!(SLIDE_LAYOUTS.len(), 11);
        assert_eq!(slide_layout(0).unwrap().name, "Title Slide");
        assert_eq!(slide_layout(1).unwrap().name, "Title and Content");
        assert_eq!(slide_layout(5).unwrap().name, "Title Only");
        assert_eq!(slide_layout(6).unwrap().placeholders.len(), 0);
        assert!(slide_layout(11).is_none());
        assert_eq!(slide_layout_by_name("Comparison").unwrap().0, 4);
    }

    #[test]
    fn test_ph_attributes() {
        let mut xml = String::new();
        SLIDE_LAYOUTS[0].placeholders[1].write_ph(&mut xml);
        assert_eq!(xml, r#"<p:ph type="subTitle" idx="1"/>"#);

        xml.clear();
        SLIDE_LAYOUTS[1].placeholders[1].write_ph(&mut xml);
        assert_eq!(xml, r#"<p:ph idx="1"/>"#);

        xml.clear();
        SLIDE_LAYOUTS[10].placeholders[0].write_ph(&mut xml);
        assert_eq!(xml, r#"<p:ph type="title" orient="vert"/>"#);
    }

    #[test]
    fn test_layout_xml_lists_footers() {
        let xml = slide_layout_xml(&SLIDE_LAYOUTS[6]);
        assert!(xml.contains(r#"<p:cSld name="Blank">"#));
        assert!(xml.contains(r#"type="dt""#));
        assert!(xml.contains(r#"type="sldNum""#));
        assert!(xml.contains(r#"name="Date Placeholder 1""#));
    }

    fn assert_well_formed(name: &str, xml: &str) {
        let mut reader = quick_xml::Reader::from_str(xml);
        loop {
            match reader.read_event() {
                Ok(quick_xml::events::Event::Eof) => break,
                Ok(_) => {},
                Err(e) => panic!("{} is not well-formed: {}", name, e),
            }
        }
    }

    #[test]
    fn test_master_and_layouts_are_well_formed() {
        assert_well_formed("slideMaster1.xml", &slide_master_xml());
        for layout in SLIDE_LAYOUTS.iter() {
            let xml = slide_layout_xml(layout);
            assert_well_formed(layout.name, &xml);
            assert_eq!(
                xml.matches("<p:nvSpPr>").count(),
                xml.matches("</p:nvSpPr>").count()
            );
        }
    }

    #[test]
    fn test_master_lists_every_layout() {
        let xml = slide_master_xml();
        assert_eq!(xml.matches("<p:sldLayoutId ").count(), 11);
        assert!(xml.contains(r#"<p:sldLayoutId id="2147483649" r:id="rId1"/>"#));
        assert!(xml.contains(r#"<p:sldLayoutId id="2147483659" r:id="rId11"/>"#));
        assert!(xml.contains("<a:lvl9pPr"));
    }

    #[test]
    fn test_core_properties_xml() {
        let created = DateTime::parse_from_rfc3339("2024-01-02T03:04:05Z")
            .unwrap()
            .with_timezone(&Utc);
        let props = CoreProperties {
            title: "A & B".to_string(),
            created,
            modified: created,
            ..Default::default()
        };
        let xml = props.to_xml();
        assert!(xml.contains("<dc:title>A &amp; B</dc:title>"));
        assert!(xml.contains(">2024-01-02T03:04:05Z</dcterms:created>"));
    }

    #[test]
    fn test_app_props_counts_slides() {
        assert!(app_props_xml(2).contains("<Slides>2</Slides>"));
        assert_eq!(app_version(), "00.0000");
    }

    #[test]
    fn test_resources_are_embedded() {
        assert!(default_theme_xml().contains(r#"<a:clrScheme name="Office">"#));
        assert!(default_pres_props_xml().contains("p:presentationPr"));
        assert!(default_view_props_xml().contains("p:viewPr"));
        assert!(default_table_styles_xml().contains("a:tblStyleLst"));
    }
}
