use aho_corasick::{AhoCorasick, MatchKind};
use once_cell::sync::Lazy;
use std::borrow::Cow;

/// The five predefined XML entities and the characters they stand for.
const ENTITIES: [(&str, &str); 5] = [
    ("&", "&amp;"),
    ("<", "&lt;"),
    (">", "&gt;"),
    ("\"", "&quot;"),
    ("'", "&apos;"),
];

static ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::new(ENTITIES.map(|(raw, _)| raw)).expect("five literal patterns")
});

// Leftmost-longest so "&amp;lt;" decodes to "&lt;" and not "<"
static UNESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .build(ENTITIES.map(|(_, entity)| entity))
        .expect("five literal patterns")
});

/// Escape XML special characters.
///
/// Text without special characters is returned borrowed.
///
/// # Examples
///
/// ```
/// use pitchdeck::common::xml::escape_xml;
/// assert_eq!(escape_xml("A/B & KPI"), "A/B &amp; KPI");
/// assert_eq!(escape_xml("<tag>\"hello\"</tag>"), "&lt;tag&gt;&quot;hello&quot;&lt;/tag&gt;");
/// assert_eq!(escape_xml("从“想法”到“成片”"), "从“想法”到“成片”");
/// ```
pub fn escape_xml(s: &str) -> Cow<'_, str> {
    if !ESCAPER.is_match(s) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(ESCAPER.replace_all(s, &ENTITIES.map(|(_, entity)| entity)))
}

/// Replace the five predefined entities with their characters.
///
/// Character references and unknown entities are left unchanged.
///
/// ```
/// use pitchdeck::common::xml::unescape_xml;
/// assert_eq!(unescape_xml("&lt;a &amp; b&gt;"), "<a & b>");
/// assert_eq!(unescape_xml("&amp;lt;"), "&lt;");
/// assert_eq!(unescape_xml("&invalid;"), "&invalid;");
/// ```
pub fn unescape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains('&') {
        return Cow::Borrowed(s);
    }
    Cow::Owned(UNESCAPER.replace_all(s, &ENTITIES.map(|(raw, _)| raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_borrowed() {
        assert!(matches!(escape_xml("营销Agent"), Cow::Borrowed(_)));
        assert!(matches!(unescape_xml("营销Agent"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_every_entity_round_trips() {
        let raw = "R&D <Q1> \"KPI\" 'TTV'";
        assert_eq!(unescape_xml(&escape_xml(raw)), raw);
    }
}
