//! Brand constants: deck strings, font, colors and logo location.

use crate::common::RGBColor;
use crate::ooxml::DocumentProperties;
use chrono::NaiveDate;
use serde::Serialize;
use std::path::PathBuf;

pub const TITLE: &str = "AI工业营销Agent — 产品定义与方案说明（10页）";
pub const SUBTITLE: &str = "从“想法/素材”到“成片/成稿”的工业级营销内容自动化引擎";
pub const DATE: &str = "2026-01-13";
pub const VERSION: &str = "v1.0";
pub const AUTHOR: &str = "yy1 / 深思";
/// Company logo, relative to the working directory.
pub const LOGO_PATH: &str = "assets/logo.png";
pub const BRAND_FONT: &str = "Microsoft YaHei";
/// Deep blue used for headings
pub const PRIMARY: RGBColor = RGBColor::new(16, 54, 107);
/// Bright blue used for decoration
pub const ACCENT: RGBColor = RGBColor::new(0, 160, 233);
pub const TEXT_COLOR: RGBColor = RGBColor::new(30, 30, 30);

/// Everything brand-specific the slide builders need.
///
/// [`Brand::default`] carries the compile-time constants above.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Brand {
    pub title: String,
    pub subtitle: String,
    /// ISO date (`YYYY-MM-DD`)
    pub date: String,
    pub version: String,
    pub author: String,
    pub logo_path: PathBuf,
    pub font: String,
    pub primary: RGBColor,
    pub accent: RGBColor,
    pub text_color: RGBColor,
}

impl Default for Brand {
    fn default() -> Self {
        Self {
            title: TITLE.to_string(),
            subtitle: SUBTITLE.to_string(),
            date: DATE.to_string(),
            version: VERSION.to_string(),
            author: AUTHOR.to_string(),
            logo_path: PathBuf::from(LOGO_PATH),
            font: BRAND_FONT.to_string(),
            primary: PRIMARY,
            accent: ACCENT,
            text_color: TEXT_COLOR,
        }
    }
}

impl Brand {
    /// The cover's date/version/author line.
    pub fn metadata_line(&self) -> String {
        format!(
            "日期：{}    版本：{}    作者：{}",
            self.date, self.version, self.author
        )
    }

    /// Core properties for the package.
    ///
    /// The deck date becomes both the creation and the modification time;
    /// an unparsable date leaves them unset.
    pub fn document_properties(&self) -> DocumentProperties {
        let props = DocumentProperties::new()
            .title(&self.title)
            .subject(&self.subtitle)
            .creator(&self.author)
            .last_modified_by(&self.author)
            .language("zh-CN")
            .revision(1);

        match NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
        {
            Some(midnight) => props.dated(midnight.and_utc()),
            None => {
                tracing::warn!(date = %self.date, "deck date is not YYYY-MM-DD; leaving timestamps unset");
                props
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_constants() {
        let brand = Brand::default();
        assert_eq!(brand.title, TITLE);
        assert_eq!(brand.logo_path, PathBuf::from("assets/logo.png"));
        assert_eq!(brand.primary.to_hex(), "10366B");
        assert_eq!(brand.accent.to_hex(), "00A0E9");
    }

    #[test]
    fn test_metadata_line() {
        assert_eq!(
            Brand::default().metadata_line(),
            "日期：2026-01-13    版本：v1.0    作者：yy1 / 深思"
        );
    }

    #[test]
    fn test_document_properties() {
        let props = Brand::default().document_properties();
        assert_eq!(props.creator.as_deref(), Some(AUTHOR));
        assert_eq!(props.last_modified_by.as_deref(), Some(AUTHOR));
        assert_eq!(props.revision, Some(1));
        assert_eq!(
            props.created.map(|d| d.to_rfc3339()).as_deref(),
            Some("2026-01-13T00:00:00+00:00")
        );
    }

    #[test]
    fn test_bad_date_leaves_timestamps_unset() {
        let brand = Brand {
            date: "13/01/2026".to_string(),
            ..Brand::default()
        };
        let props = brand.document_properties();
        assert!(props.created.is_none());
        assert!(props.modified.is_none());
    }
}
