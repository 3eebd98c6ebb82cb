/// Package implementation for PowerPoint presentations.
use crate::ooxml::common::AppProperties;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::opc::{OpcPackage, PackURI, PackageWriter, Part};
use crate::ooxml::pptx::template;
use crate::ooxml::pptx::writer::relmap::RelationshipMapper;
use crate::ooxml::pptx::writer::{Presentation, SlideLayout};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::io::Write;
use std::path::Path;

/// Application name recorded in `docProps/app.xml`.
const APPLICATION: &str = "pitchdeck";

fn pack_uri(uri: impl Into<String>) -> Result<PackURI> {
    PackURI::new(uri).map_err(OoxmlError::InvalidFormat)
}

/// A PowerPoint (.pptx) package assembled from a [`Presentation`].
///
/// This wraps an OPC package holding every part of the deck: the
/// presentation and its slides, the template master, layouts and theme,
/// the media, and the document properties.
///
/// # Examples
///
/// ```rust,no_run
/// use pitchdeck::ooxml::pptx::{Package, Presentation, SlideLayout};
///
/// let mut pres = Presentation::new();
/// pres.add_slide(SlideLayout::Blank);
///
/// let pkg = Package::from_presentation(&pres)?;
/// println!("{} parts", pkg.opc_package().part_count());
/// pkg.save("blank.pptx")?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Package {
    /// The underlying OPC package
    opc: OpcPackage,
}

impl Package {
    /// Assemble the package for a presentation.
    pub fn from_presentation(pres: &Presentation) -> Result<Self> {
        let mut opc = OpcPackage::new();

        let pres_uri = pack_uri("/ppt/presentation.xml")?;
        let master_uri = pack_uri("/ppt/slideMasters/slideMaster1.xml")?;
        let theme_uri = pack_uri("/ppt/theme/theme1.xml")?;
        let layout_uris = SlideLayout::ALL
            .iter()
            .map(|layout| {
                pack_uri(format!(
                    "/ppt/slideLayouts/slideLayout{}.xml",
                    layout.part_number()
                ))
            })
            .collect::<Result<Vec<_>>>()?;

        // Template parts. The master XML expects its layouts at rId1..rIdN,
        // so they are related before the theme.
        let mut master_part = Part::new(
            master_uri.clone(),
            ct::PML_SLIDE_MASTER,
            template::default_slide_master_xml().as_bytes().to_vec(),
        );
        for (layout, layout_uri) in SlideLayout::ALL.iter().zip(&layout_uris) {
            master_part.relate_to(layout_uri, rt::SLIDE_LAYOUT);

            let mut layout_part = Part::new(
                layout_uri.clone(),
                ct::PML_SLIDE_LAYOUT,
                template::slide_layout_xml(*layout).as_bytes().to_vec(),
            );
            layout_part.relate_to(&master_uri, rt::SLIDE_MASTER);
            opc.add_part(layout_part)?;
        }
        master_part.relate_to(&theme_uri, rt::THEME);
        opc.add_part(master_part)?;
        opc.add_part(Part::new(
            theme_uri.clone(),
            ct::OFC_THEME,
            template::default_theme_xml().as_bytes().to_vec(),
        ))?;

        // Media, stored once per distinct content
        let mut media_by_hash: HashMap<Vec<u8>, PackURI> = HashMap::new();
        let mut rel_mapper = RelationshipMapper::new();
        let mut slide_parts = Vec::with_capacity(pres.slide_count());

        for (slide_index, slide) in pres.slides().iter().enumerate() {
            let slide_uri = pack_uri(format!("/ppt/slides/slide{}.xml", slide_index + 1))?;
            let mut slide_part = Part::new(slide_uri, ct::PML_SLIDE, Vec::new());
            slide_part.relate_to(
                &layout_uris[slide.layout().part_number() - 1],
                rt::SLIDE_LAYOUT,
            );

            for (image_index, (data, format)) in slide.collect_images().into_iter().enumerate() {
                let digest = Sha256::digest(data).as_slice().to_vec();
                let media_uri = match media_by_hash.get(&digest) {
                    Some(uri) => uri.clone(),
                    None => {
                        let uri = pack_uri(format!(
                            "/ppt/media/image{}.{}",
                            media_by_hash.len() + 1,
                            format.extension()
                        ))?;
                        opc.add_part(Part::new(uri.clone(), format.content_type(), data.to_vec()))?;
                        media_by_hash.insert(digest, uri.clone());
                        uri
                    },
                };

                let rel_id = slide_part.relate_to(&media_uri, rt::IMAGE);
                rel_mapper.add_image(slide_index, image_index, rel_id);
            }

            slide_parts.push(slide_part);
        }

        // Presentation part: master first, then slides, then theme
        let mut pres_part = Part::new(pres_uri.clone(), ct::PML_PRESENTATION_MAIN, Vec::new());
        let master_rel_id = pres_part.relate_to(&master_uri, rt::SLIDE_MASTER);
        let mut slide_rel_ids = Vec::with_capacity(slide_parts.len());

        for (slide_index, mut slide_part) in slide_parts.into_iter().enumerate() {
            slide_rel_ids.push(pres_part.relate_to(slide_part.partname(), rt::SLIDE));

            let slide = &pres.slides()[slide_index];
            tracing::trace!(
                slide = slide_index + 1,
                shapes = slide.shape_count(),
                "serializing slide"
            );
            slide_part.set_blob(slide.to_xml(slide_index, &rel_mapper)?.into_bytes());
            opc.add_part(slide_part)?;
        }
        pres_part.relate_to(&theme_uri, rt::THEME);
        pres_part.set_blob(
            pres.generate_presentation_xml(&master_rel_id, &slide_rel_ids)?
                .into_bytes(),
        );
        opc.add_part(pres_part)?;

        // Document properties
        let core_uri = pack_uri("/docProps/core.xml")?;
        let app_uri = pack_uri("/docProps/app.xml")?;
        opc.add_part(Part::new(
            core_uri.clone(),
            ct::OPC_CORE_PROPERTIES,
            pres.properties().to_xml().into_bytes(),
        ))?;
        let app = AppProperties {
            application: APPLICATION.to_string(),
            slides: pres.slide_count(),
        };
        opc.add_part(Part::new(
            app_uri.clone(),
            ct::OFC_EXTENDED_PROPERTIES,
            app.to_xml().into_bytes(),
        ))?;

        opc.relate_to(&pres_uri, rt::OFFICE_DOCUMENT);
        opc.relate_to(&core_uri, rt::CORE_PROPERTIES);
        opc.relate_to(&app_uri, rt::EXTENDED_PROPERTIES);

        Ok(Self { opc })
    }

    /// Get the underlying OPC package.
    ///
    /// This provides access to lower-level package operations.
    #[inline]
    pub fn opc_package(&self) -> &OpcPackage {
        &self.opc
    }

    /// Serialize the package to `.pptx` bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(PackageWriter::to_bytes(&self.opc)?)
    }

    /// Write the package to a stream.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        Ok(PackageWriter::write_to_stream(writer, &self.opc)?)
    }

    /// Save the package to `path`, replacing any existing file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        PackageWriter::write(path, &self.opc)?;
        tracing::info!(
            path = %path.display(),
            parts = self.opc.part_count(),
            "presentation saved"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::pptx::writer::Geometry;

    const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    fn uri(s: &str) -> PackURI {
        PackURI::new(s).unwrap()
    }

    #[test]
    fn test_required_parts() {
        let mut pres = Presentation::new();
        pres.add_slide(SlideLayout::TitleOnly);
        pres.add_slide(SlideLayout::Blank);

        let pkg = Package::from_presentation(&pres).unwrap();
        let opc = pkg.opc_package();
        for name in [
            "/ppt/presentation.xml",
            "/ppt/slides/slide1.xml",
            "/ppt/slides/slide2.xml",
            "/ppt/slideMasters/slideMaster1.xml",
            "/ppt/slideLayouts/slideLayout1.xml",
            "/ppt/slideLayouts/slideLayout2.xml",
            "/ppt/theme/theme1.xml",
            "/docProps/core.xml",
            "/docProps/app.xml",
        ] {
            assert!(opc.contains(&uri(name)), "missing {name}");
        }
    }

    #[test]
    fn test_master_relationship_order_matches_template() {
        let pres = Presentation::new();
        let pkg = Package::from_presentation(&pres).unwrap();
        let master = pkg
            .opc_package()
            .part(&uri("/ppt/slideMasters/slideMaster1.xml"))
            .unwrap();

        let rels = master.rels();
        assert_eq!(
            rels.get("rId1").unwrap().target_ref(),
            "../slideLayouts/slideLayout1.xml"
        );
        assert_eq!(
            rels.get("rId2").unwrap().target_ref(),
            "../slideLayouts/slideLayout2.xml"
        );
        assert_eq!(rels.get("rId3").unwrap().reltype(), rt::THEME);
    }

    #[test]
    fn test_slide_uses_its_layout() {
        let mut pres = Presentation::new();
        pres.add_slide(SlideLayout::Blank);
        let pkg = Package::from_presentation(&pres).unwrap();

        let slide = pkg.opc_package().part(&uri("/ppt/slides/slide1.xml")).unwrap();
        let layout = slide.rels().part_with_reltype(rt::SLIDE_LAYOUT).unwrap();
        assert_eq!(layout.target_ref(), "../slideLayouts/slideLayout2.xml");
    }

    #[test]
    fn test_identical_media_stored_once() {
        let mut pres = Presentation::new();
        for _ in 0..3 {
            pres.add_slide(SlideLayout::Blank)
                .add_picture(PNG_MAGIC.to_vec(), Geometry::default())
                .unwrap();
        }

        let pkg = Package::from_presentation(&pres).unwrap();
        let opc = pkg.opc_package();
        let media: Vec<_> = opc
            .iter_parts()
            .filter(|p| p.partname().as_str().starts_with("/ppt/media/"))
            .collect();
        assert_eq!(media.len(), 1);
        assert_eq!(media[0].partname().as_str(), "/ppt/media/image1.png");

        for n in 1..=3 {
            let slide = opc
                .part(&uri(&format!("/ppt/slides/slide{n}.xml")))
                .unwrap();
            let image = slide.rels().part_with_reltype(rt::IMAGE).unwrap();
            assert_eq!(image.target_ref(), "../media/image1.png");
            let xml = String::from_utf8(slide.blob().to_vec()).unwrap();
            assert!(xml.contains(&format!(r#"r:embed="{}""#, image.r_id())));
        }
    }

    #[test]
    fn test_app_properties_count_slides() {
        let mut pres = Presentation::new();
        pres.add_slide(SlideLayout::TitleOnly);
        let pkg = Package::from_presentation(&pres).unwrap();

        let app = pkg.opc_package().part(&uri("/docProps/app.xml")).unwrap();
        let xml = String::from_utf8(app.blob().to_vec()).unwrap();
        assert!(xml.contains("<Slides>1</Slides>"));
    }
}
