/// Presentation writer for PPTX.
use crate::common::Length;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::{content_type as ct, namespace, relationship_type as rt};
use crate::ooxml::opc::{OpcPackage, PackURI, Part};
use crate::ooxml::pptx::template::{self, CoreProperties, SLIDE_LAYOUTS};
use std::fmt::Write as FmtWrite;
use std::path::Path;

use super::slide::MutableSlide;

/// First id of the presentation's `sldIdLst`.
const FIRST_SLIDE_ID: u32 = 256;

/// A mutable PowerPoint presentation for writing.
///
/// Starts empty at the 4:3 default size of 10in × 7.5in with the standard
/// master, layouts and theme. Slides are added by layout index.
#[derive(Debug, Clone)]
pub struct MutablePresentation {
    pub(crate) slides: Vec<MutableSlide>,
    slide_width: Length,
    slide_height: Length,
    core: CoreProperties,
}

impl MutablePresentation {
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_width: Length::inches(10.0),
            slide_height: Length::inches(7.5),
            core: CoreProperties::default(),
        }
    }

    /// Append a slide using the layout at `layout_index` (0 = Title Slide).
    pub fn add_slide(&mut self, layout_index: usize) -> Result<&mut MutableSlide> {
        let layout = template::slide_layout(layout_index).ok_or(OoxmlError::UnknownLayout {
            index: layout_index,
            available: SLIDE_LAYOUTS.len(),
        })?;

        let slide_id = FIRST_SLIDE_ID + self.slides.len() as u32;
        self.slides
            .push(MutableSlide::new(slide_id, layout_index, layout));
        let last = self.slides.len() - 1;
        Ok(&mut self.slides[last])
    }

    #[inline]
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Slide by 0-based index.
    pub fn slide_mut(&mut self, index: usize) -> Option<&mut MutableSlide> {
        self.slides.get_mut(index)
    }

    pub fn slides(&self) -> &[MutableSlide] {
        &self.slides
    }

    pub fn slide_width(&self) -> Length {
        self.slide_width
    }

    pub fn set_slide_width(&mut self, width: Length) {
        self.slide_width = width;
    }

    pub fn slide_height(&self) -> Length {
        self.slide_height
    }

    pub fn set_slide_height(&mut self, height: Length) {
        self.slide_height = height;
    }

    pub fn core_properties(&self) -> &CoreProperties {
        &self.core
    }

    pub fn core_properties_mut(&mut self) -> &mut CoreProperties {
        &mut self.core
    }

    /// Generate presentation.xml with the given relationship ids.
    fn generate_presentation_xml(&self, master_rel_id: &str, slide_rel_ids: &[String]) -> Result<String> {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<p:presentation xmlns:a="{}" xmlns:r="{}" xmlns:p="{}" saveSubsetFonts="1">"#,
            namespace::DML_MAIN,
            namespace::OFC_RELATIONSHIPS,
            namespace::PML_MAIN
        )
        .map_err(|e| OoxmlError::Xml(e.to_string()))?;

        write!(
            xml,
            r#"<p:sldMasterIdLst><p:sldMasterId id="{}" r:id="{}"/></p:sldMasterIdLst>"#,
            template::SLIDE_MASTER_ID,
            master_rel_id
        )
        .map_err(|e| OoxmlError::Xml(e.to_string()))?;

        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (slide, rel_id) in self.slides.iter().zip(slide_rel_ids) {
                write!(xml, r#"<p:sldId id="{}" r:id="{}"/>"#, slide.slide_id(), rel_id)
                    .map_err(|e| OoxmlError::Xml(e.to_string()))?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}" type="screen4x3"/>"#,
            self.slide_width.emus(),
            self.slide_height.emus()
        )
        .map_err(|e| OoxmlError::Xml(e.to_string()))?;
        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
        template::write_default_text_style(&mut xml);
        xml.push_str("</p:presentation>");

        Ok(xml)
    }

    /// Assemble the complete OPC package.
    pub fn to_package(&self) -> Result<OpcPackage> {
        let mut pkg = OpcPackage::new();

        let pres_uri = PackURI::new("/ppt/presentation.xml").map_err(OoxmlError::InvalidFormat)?;
        let master_uri = PackURI::new("/ppt/slideMasters/slideMaster1.xml")
            .map_err(OoxmlError::InvalidFormat)?;
        let theme_uri = PackURI::new("/ppt/theme/theme1.xml").map_err(OoxmlError::InvalidFormat)?;
        let core_uri = PackURI::new("/docProps/core.xml").map_err(OoxmlError::InvalidFormat)?;
        let app_uri = PackURI::new("/docProps/app.xml").map_err(OoxmlError::InvalidFormat)?;

        // Presentation relationships: master first, then properties, theme, slides
        let mut pres_part = Part::new(pres_uri.clone(), ct::PML_PRESENTATION_MAIN, Vec::new());
        let master_rel_id = pres_part.relate_to(&master_uri, rt::SLIDE_MASTER);
        for (partname, content_type, reltype, xml) in [
            ("/ppt/presProps.xml", ct::PML_PRES_PROPS, rt::PRES_PROPS, template::default_pres_props_xml()),
            ("/ppt/viewProps.xml", ct::PML_VIEW_PROPS, rt::VIEW_PROPS, template::default_view_props_xml()),
            ("/ppt/theme/theme1.xml", ct::OFC_THEME, rt::THEME, template::default_theme_xml()),
            ("/ppt/tableStyles.xml", ct::PML_TABLE_STYLES, rt::TABLE_STYLES, template::default_table_styles_xml()),
        ] {
            let uri = PackURI::new(partname).map_err(OoxmlError::InvalidFormat)?;
            pres_part.relate_to(&uri, reltype);
            pkg.add_part(Part::xml(uri, content_type, xml.to_string()));
        }

        let mut slide_rel_ids = Vec::with_capacity(self.slides.len());
        for (i, slide) in self.slides.iter().enumerate() {
            let slide_uri = PackURI::slide(i + 1);
            slide_rel_ids.push(pres_part.relate_to(&slide_uri, rt::SLIDE));

            let mut slide_part = Part::xml(slide_uri, ct::PML_SLIDE, slide.to_xml()?);
            slide_part.relate_to(&PackURI::slide_layout(slide.layout_index() + 1), rt::SLIDE_LAYOUT);
            pkg.add_part(slide_part);
        }

        pres_part.set_blob(
            self.generate_presentation_xml(&master_rel_id, &slide_rel_ids)?
                .into_bytes(),
        );
        pkg.add_part(pres_part);

        // Master: layouts are rId1..rId11 in catalogue order, theme after them
        let mut master_part = Part::xml(master_uri.clone(), ct::PML_SLIDE_MASTER, template::slide_master_xml());
        for (i, layout) in SLIDE_LAYOUTS.iter().enumerate() {
            let layout_uri = PackURI::slide_layout(i + 1);
            master_part.relate_to(&layout_uri, rt::SLIDE_LAYOUT);

            let mut layout_part =
                Part::xml(layout_uri, ct::PML_SLIDE_LAYOUT, template::slide_layout_xml(layout));
            layout_part.relate_to(&master_uri, rt::SLIDE_MASTER);
            pkg.add_part(layout_part);
        }
        master_part.relate_to(&theme_uri, rt::THEME);
        pkg.add_part(master_part);

        pkg.add_part(Part::xml(core_uri.clone(), ct::OPC_CORE_PROPERTIES, self.core.to_xml()));
        pkg.add_part(Part::xml(
            app_uri.clone(),
            ct::OFC_EXTENDED_PROPERTIES,
            template::app_props_xml(self.slides.len()),
        ));

        pkg.relate_to(&pres_uri, rt::OFFICE_DOCUMENT);
        pkg.relate_to(&core_uri, rt::CORE_PROPERTIES);
        pkg.relate_to(&app_uri, rt::EXTENDED_PROPERTIES);

        Ok(pkg)
    }

    /// Serialize to `.pptx` bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(self.to_package()?.to_bytes()?)
    }

    /// Write the presentation to `path` in a single write.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.to_package()?.save(path)?;
        log::info!("saved {} ({} slides)", path.display(), self.slides.len());
        Ok(())
    }
}

impl Default for MutablePresentation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_presentation() {
        let pres = MutablePresentation::new();
        assert_eq!(pres.slide_count(), 0);
        assert_eq!(pres.slide_width().emus(), 9144000);
        assert_eq!(pres.slide_height().emus(), 6858000);
    }

    #[test]
    fn test_add_slide_ids() {
        let mut pres = MutablePresentation::new();
        assert_eq!(pres.add_slide(0).unwrap().slide_id(), 256);
        assert_eq!(pres.add_slide(5).unwrap().slide_id(), 257);
        assert_eq!(pres.slide_count(), 2);
        assert_eq!(pres.slide_mut(1).unwrap().layout().name, "Title Only");
    }

    #[test]
    fn test_unknown_layout_is_an_error() {
        let mut pres = MutablePresentation::new();
        let err = pres.add_slide(11).unwrap_err();
        assert!(matches!(
            err,
            OoxmlError::UnknownLayout {
                index: 11,
                available: 11
            }
        ));
        assert_eq!(pres.slide_count(), 0);
    }

    #[test]
    fn test_save_writes_package_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.pptx");
        let mut pres = MutablePresentation::new();
        pres.add_slide(6).unwrap();

        pres.save(&path).unwrap();

        let expected = pres.to_package().unwrap();
        let reopened = OpcPackage::open(&path).unwrap();
        assert_eq!(reopened.part_count(), expected.part_count());
        for part in expected.iter_parts() {
            let saved = reopened.get_part(part.partname()).unwrap();
            assert_eq!(saved.blob(), part.blob(), "{}", part.partname().as_str());
        }
    }

    #[test]
    fn test_package_parts() {
        let mut pres = MutablePresentation::new();
        pres.add_slide(0).unwrap().set_title("Hello").unwrap();
        let pkg = pres.to_package().unwrap();

        // presentation, 4 pres-level parts, 1 slide, master, 11 layouts, core, app
        assert_eq!(pkg.part_count(), 20);

        let main = pkg.main_document_part().unwrap();
        let xml = main.xml_str().unwrap();
        assert!(xml.contains(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#));
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId6"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="9144000" cy="6858000""#));

        let slide = pkg.related_part(main, "rId6").unwrap();
        let layout_uri = slide.related_partname(rt::SLIDE_LAYOUT).unwrap();
        assert_eq!(layout_uri, PackURI::slide_layout(1));
    }
}

/// Text written through the writer reads back unchanged, XML special
/// characters and CJK included.
#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::ooxml::pptx::Package;
    use proptest::prelude::*;

    /// Single-line text mixing markup characters, quotes and CJK
    fn text_strategy() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 &<>\"'=;#测试文本]{0,40}"
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_text_survives_write_and_read(title in text_strategy(), body in text_strategy()) {
            let mut pres = MutablePresentation::new();
            let slide = pres.add_slide(5).unwrap();
            slide.set_title(&title).unwrap();
            let text_box = slide.add_text_box(
                Length::inches(1.0),
                Length::inches(2.0),
                Length::inches(3.0),
                Length::inches(1.0),
            );
            text_box.text_frame_mut().unwrap().set_text(&body);

            let bytes = pres.to_bytes().unwrap();
            let pkg = Package::from_bytes(&bytes).unwrap();
            let slides = pkg.presentation().unwrap().slides().unwrap();

            prop_assert_eq!(slides.len(), 1);
            prop_assert_eq!(slides[0].title(), Some(title));
            prop_assert_eq!(slides[0].shapes()[1].text(), body);
        }
    }
}
