//! End-to-end tests: build the deck, write it, read it back.

use pitchdeck::DeckSummary;
use pitchdeck::deck::helpers::{BULLETS_SHAPE, LOGO_SHAPE, PAGE_NUMBER_SHAPE};
use pitchdeck::deck::{self, Brand, TOTAL_SLIDES};
use pitchdeck::ooxml::pptx::{Alignment, ShapeType, SlideLayout};
use pitchdeck::{Presentation, bullets};
use proptest::prelude::*;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

fn brand_with_logo(path: PathBuf) -> Brand {
    Brand {
        logo_path: path,
        ..Brand::default()
    }
}

fn brand_without_logo() -> Brand {
    brand_with_logo(PathBuf::from("/nonexistent/assets/logo.png"))
}

fn write_logo(dir: &Path) -> PathBuf {
    let path = dir.join("logo.png");
    image::RgbImage::from_pixel(60, 20, image::Rgb([0, 160, 233]))
        .save(&path)
        .unwrap();
    path
}

fn zip_entry_names(bytes: &[u8]) -> Vec<String> {
    let archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    archive.file_names().map(str::to_string).collect()
}

fn zip_entry(bytes: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut file = archive.by_name(name).unwrap();
    let mut text = String::new();
    file.read_to_string(&mut text).unwrap();
    text
}

#[test]
fn deck_without_logo_has_ten_slides() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(deck::OUTPUT_FILE_NAME);

    deck::build_deck(&brand_without_logo()).save(&path).unwrap();
    let summary = DeckSummary::open(&path).unwrap();

    assert_eq!(summary.slide_count(), TOTAL_SLIDES);
    assert_eq!(summary.slide(0).unwrap().title().as_deref(), Some(deck::brand::TITLE));
    assert!(summary.slides().iter().all(|s| s.picture_count() == 0));

    let last = summary.slide(9).unwrap();
    assert_eq!(last.title().as_deref(), Some("下一步与CTA"));
    let list = last.shape_named(BULLETS_SHAPE).unwrap();
    // leading empty paragraph plus four items
    assert_eq!(list.paragraphs.len(), 5);
    assert_eq!(list.paragraphs[0].text(), "");
    assert!(list.paragraphs[0].runs.is_empty());
    assert_eq!(list.paragraphs[1..].iter().filter(|p| !p.runs.is_empty()).count(), 4);
}

#[test]
fn cleared_bullet_paragraph_has_no_empty_run() {
    let bytes = deck::build_deck(&brand_without_logo()).to_bytes().unwrap();
    for n in 2..=TOTAL_SLIDES {
        let xml = zip_entry(&bytes, &format!("ppt/slides/slide{n}.xml"));
        assert!(!xml.contains("<a:t></a:t>"), "slide {n} has an empty run");
        assert!(xml.contains("<a:p><a:endParaRPr"), "slide {n} lacks the empty paragraph");
    }
}

#[test]
fn every_slide_has_a_right_aligned_page_number() {
    let bytes = deck::build_deck(&brand_without_logo()).to_bytes().unwrap();
    let summary = DeckSummary::from_bytes(&bytes).unwrap();

    for (i, slide) in summary.slides().iter().enumerate() {
        let page = slide.shape_named(PAGE_NUMBER_SHAPE).unwrap();
        assert_eq!(page.shape_type, ShapeType::TextBox);
        assert_eq!(page.paragraphs.len(), 1);
        assert_eq!(page.paragraphs[0].text(), format!("{}/10", i + 1));
        assert_eq!(page.paragraphs[0].alignment, Some(Alignment::Right));
        assert_eq!(page.paragraphs[0].runs[0].size, Some(10.0));
    }
}

#[test]
fn bullet_sizes_follow_levels() {
    let bytes = deck::build_deck(&brand_without_logo()).to_bytes().unwrap();
    let summary = DeckSummary::from_bytes(&bytes).unwrap();

    let vision = summary.slide(1).unwrap().shape_named(BULLETS_SHAPE).unwrap();
    let items = &vision.paragraphs[1..];
    assert_eq!(items.len(), 8);
    assert_eq!(items[2].text(), "核心价值：");
    assert_eq!(items[2].level, 0);
    assert_eq!(items[2].runs[0].size, Some(18.0));
    assert_eq!(items[3].level, 1);
    assert_eq!(items[3].runs[0].size, Some(16.0));
}

#[test]
fn titles_are_bold_placeholders() {
    let bytes = deck::build_deck(&brand_without_logo()).to_bytes().unwrap();
    let summary = DeckSummary::from_bytes(&bytes).unwrap();

    let expected: Vec<String> = deck::content_slides().into_iter().map(|s| s.title).collect();
    let titles: Vec<String> = summary.slides()[1..]
        .iter()
        .map(|s| s.title().unwrap())
        .collect();
    assert_eq!(titles, expected);

    let heading = summary.slide(2).unwrap().shapes[0].clone();
    assert_eq!(heading.shape_type, ShapeType::TitlePlaceholder);
    assert_eq!(heading.paragraphs[0].runs[0].size, Some(28.0));
    assert_eq!(heading.paragraphs[0].runs[0].bold, Some(true));
}

#[test]
fn cover_carries_subtitle_and_metadata() {
    let brand = brand_without_logo();
    let bytes = deck::build_deck(&brand).to_bytes().unwrap();
    let summary = DeckSummary::from_bytes(&bytes).unwrap();
    let cover = summary.slide(0).unwrap();

    let title = cover.shapes.iter().find(|s| s.shape_type == ShapeType::TitlePlaceholder).unwrap();
    assert_eq!(title.paragraphs.len(), 2);
    assert_eq!(title.paragraphs[1].text(), brand.subtitle);
    assert_eq!(title.paragraphs[0].runs[0].size, Some(36.0));

    let bar = cover.shape_named(deck::builders::ACCENT_BAR_SHAPE).unwrap();
    assert_eq!(bar.shape_type, ShapeType::AutoShape);
    let metadata = cover.shape_named(deck::builders::METADATA_SHAPE).unwrap();
    assert_eq!(metadata.text(), "日期：2026-01-13    版本：v1.0    作者：yy1 / 深思");
}

#[test]
fn logo_adds_one_picture_per_slide() {
    let dir = tempfile::tempdir().unwrap();
    let with_logo = deck::build_deck(&brand_with_logo(write_logo(dir.path())));
    let without_logo = deck::build_deck(&brand_without_logo());

    for (a, b) in with_logo.slides().iter().zip(without_logo.slides()) {
        assert_eq!(a.picture_count(), b.picture_count() + 1);
        assert_eq!(a.shape_count(), b.shape_count() + 1);
    }

    let bytes = with_logo.to_bytes().unwrap();
    let summary = DeckSummary::from_bytes(&bytes).unwrap();
    for slide in summary.slides() {
        assert_eq!(slide.picture_count(), 1);
        assert_eq!(slide.shape_named(LOGO_SHAPE).unwrap().shape_type, ShapeType::Picture);
    }

    // one media part shared by all ten slides
    let media: Vec<String> = zip_entry_names(&bytes)
        .into_iter()
        .filter(|name| name.starts_with("ppt/media/"))
        .collect();
    assert_eq!(media, vec!["ppt/media/image1.png".to_string()]);
    for n in 1..=TOTAL_SLIDES {
        let rels = zip_entry(&bytes, &format!("ppt/slides/_rels/slide{n}.xml.rels"));
        assert!(rels.contains("../media/image1.png"));
    }
}

#[test]
fn two_builds_are_byte_identical() {
    let brand = brand_without_logo();
    let first = deck::build_deck(&brand).to_bytes().unwrap();
    let second = deck::build_deck(&brand).to_bytes().unwrap();
    assert_eq!(first, second);
}

#[test]
fn package_has_required_parts() {
    let bytes = deck::build_deck(&brand_without_logo()).to_bytes().unwrap();
    let names = zip_entry_names(&bytes);

    for required in [
        "[Content_Types].xml",
        "_rels/.rels",
        "docProps/core.xml",
        "docProps/app.xml",
        "ppt/presentation.xml",
        "ppt/_rels/presentation.xml.rels",
        "ppt/slideMasters/slideMaster1.xml",
        "ppt/slideMasters/_rels/slideMaster1.xml.rels",
        "ppt/slideLayouts/slideLayout1.xml",
        "ppt/slideLayouts/slideLayout2.xml",
        "ppt/theme/theme1.xml",
        "ppt/slides/slide1.xml",
        "ppt/slides/slide10.xml",
    ] {
        assert!(names.iter().any(|n| n == required), "missing {required}");
    }

    let content_types = zip_entry(&bytes, "[Content_Types].xml");
    assert!(content_types.contains("/ppt/slides/slide10.xml"));
    assert!(content_types.contains("presentationml.slideMaster+xml"));
    assert!(content_types.contains("presentationml.slideLayout+xml"));
    assert!(content_types.contains("officedocument.theme+xml"));

    let core = zip_entry(&bytes, "docProps/core.xml");
    assert!(core.contains("2026-01-13T00:00:00Z"));
    assert!(core.contains("yy1 / 深思"));
    let app = zip_entry(&bytes, "docProps/app.xml");
    assert!(app.contains("<Slides>10</Slides>"));
}

#[test]
fn special_characters_survive_a_round_trip() {
    let brand = brand_without_logo();
    let mut pres = Presentation::new();
    deck::add_simple_slide(
        &mut pres,
        1,
        1,
        "R&D <Q1> \"合规\"",
        &bullets!["a < b & c > d", ("'引用' & \"双引号\"", 1)],
        &brand,
    );

    let summary = DeckSummary::from_bytes(&pres.to_bytes().unwrap()).unwrap();
    let slide = summary.slide(0).unwrap();
    assert_eq!(slide.title().as_deref(), Some("R&D <Q1> \"合规\""));
    let list = slide.shape_named(BULLETS_SHAPE).unwrap();
    assert_eq!(list.paragraphs[1].text(), "a < b & c > d");
    assert_eq!(list.paragraphs[2].text(), "'引用' & \"双引号\"");
}

#[test]
fn blank_layout_title_falls_back_to_text_box() {
    let brand = brand_without_logo();
    let mut pres = Presentation::new();
    let slide = pres.add_slide(SlideLayout::Blank);
    deck::add_title(slide, "背景与痛点", &brand);

    let summary = DeckSummary::from_bytes(&pres.to_bytes().unwrap()).unwrap();
    let slide = summary.slide(0).unwrap();
    assert_eq!(slide.title(), None);
    let fallback = slide.shape_named(deck::helpers::TITLE_FALLBACK_SHAPE).unwrap();
    assert_eq!(fallback.shape_type, ShapeType::TextBox);
    assert_eq!(fallback.text(), "背景与痛点");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_bullet_levels_and_sizes(levels in prop::collection::vec(0u8..12, 1..6)) {
        let brand = brand_without_logo();
        let items: Vec<_> = levels
            .iter()
            .enumerate()
            .map(|(i, level)| deck::BulletItem::new(format!("item {i}"), *level))
            .collect();

        let mut pres = Presentation::new();
        deck::add_simple_slide(&mut pres, 1, 1, "t", &items, &brand);
        let summary = DeckSummary::from_bytes(&pres.to_bytes().unwrap()).unwrap();
        let list = summary.slide(0).unwrap().shape_named(BULLETS_SHAPE).unwrap().clone();

        prop_assert_eq!(list.paragraphs.len(), items.len() + 1);
        for (paragraph, level) in list.paragraphs[1..].iter().zip(&levels) {
            prop_assert_eq!(paragraph.level, (*level).min(8));
            let expected = if *level == 0 { 18.0 } else { 16.0 };
            prop_assert_eq!(paragraph.runs[0].size, Some(expected));
        }
    }
}
