//! YAML outline of the deck content.

use crate::common::{Error, Result};
use serde::Serialize;

use super::brand::Brand;
use super::content::{OUTPUT_FILE_NAME, SlideContent, TOTAL_SLIDES, content_slides};

/// Cover fields shown in the outline.
#[derive(Debug, Clone, Serialize)]
struct CoverOutline<'a> {
    title: &'a str,
    subtitle: &'a str,
    date: &'a str,
    version: &'a str,
    author: &'a str,
}

/// Everything the deck would contain, without writing it.
#[derive(Debug, Clone, Serialize)]
pub struct DeckOutline<'a> {
    output: &'a str,
    total_slides: usize,
    cover: CoverOutline<'a>,
    slides: Vec<SlideContent>,
}

impl<'a> DeckOutline<'a> {
    pub fn new(brand: &'a Brand) -> Self {
        Self {
            output: OUTPUT_FILE_NAME,
            total_slides: TOTAL_SLIDES,
            cover: CoverOutline {
                title: &brand.title,
                subtitle: &brand.subtitle,
                date: &brand.date,
                version: &brand.version,
                author: &brand.author,
            },
            slides: content_slides(),
        }
    }

    /// Render the outline as a YAML document.
    pub fn to_yaml(&self) -> Result<String> {
        serde_saphyr::to_string(self)
            .map_err(|e| Error::Yaml(format!("Failed to serialize deck outline: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_yaml() {
        let brand = Brand::default();
        let yaml = DeckOutline::new(&brand).to_yaml().unwrap();

        assert!(yaml.contains("total_slides: 10"));
        assert!(yaml.contains("背景与痛点"));
        assert!(yaml.contains("下一步与CTA"));
        assert!(yaml.contains("v1.0"));
    }

    #[test]
    fn test_outline_lists_content_slides() {
        let brand = Brand::default();
        let outline = DeckOutline::new(&brand);
        assert_eq!(outline.slides.len(), TOTAL_SLIDES - 1);
        assert_eq!(outline.cover.title, brand.title);
    }
}
