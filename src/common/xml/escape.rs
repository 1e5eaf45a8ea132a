use aho_corasick::{AhoCorasick, MatchKind};
use once_cell::sync::Lazy;

// Static initialization: automaton is built only once, thread-safe
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build XML escaper")
});

static XML_UNESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .build(["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
        .expect("Failed to build XML unescaper")
});

/// Escape XML special characters.
///
/// # Examples
///
/// ```
/// use pptx_fixtures::common::xml::escape_xml;
/// assert_eq!(escape_xml("a & b"), "a &amp; b");
/// assert_eq!(escape_xml("<tag>\"hi\"</tag>"), "&lt;tag&gt;&quot;hi&quot;&lt;/tag&gt;");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    XML_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
}

/// Unescape the five predefined XML entities.
///
/// Unknown or malformed entities are left unchanged.
///
/// ```
/// use pptx_fixtures::common::xml::unescape_xml;
/// assert_eq!(unescape_xml("&lt;a &amp; b&gt;"), "<a & b>");
/// assert_eq!(unescape_xml("&amp;lt;"), "&lt;");
/// assert_eq!(unescape_xml("&invalid;"), "&invalid;");
/// ```
#[inline]
pub fn unescape_xml(s: &str) -> String {
    XML_UNESCAPER.replace_all(s, &["&", "<", ">", "\"", "'"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_ascii_passes_through() {
        assert_eq!(escape_xml("测试演示文稿"), "测试演示文稿");
    }
}
