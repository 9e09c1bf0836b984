use aho_corasick::{AhoCorasick, MatchKind};
use once_cell::sync::Lazy;

// Built once on first use, shared across threads
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build XML escaper")
});

// LeftmostLongest so "&amp;lt;" decodes to "&lt;" rather than "<"
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
/// use ave_docgen::common::xml::escape_xml;
/// assert_eq!(escape_xml("Situatieschets & Aanleiding"), "Situatieschets &amp; Aanleiding");
/// assert_eq!(escape_xml("'Dogfooding'"), "&apos;Dogfooding&apos;");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    XML_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
}

/// First character in `s` that XML 1.0 cannot carry, escaped or not.
///
/// That is a C0 control other than tab, line feed or carriage return, or
/// one of the noncharacters U+FFFE and U+FFFF.
///
/// # Examples
///
/// ```
/// use ave_docgen::common::xml::invalid_xml_char;
/// assert_eq!(invalid_xml_char("Slide 1:\tTitel\n"), None);
/// assert_eq!(invalid_xml_char("bel\u{7}tekst"), Some('\u{7}'));
/// ```
pub fn invalid_xml_char(s: &str) -> Option<char> {
    s.chars().find(|&c| {
        matches!(
            c,
            '\u{0}'..='\u{8}' | '\u{B}' | '\u{C}' | '\u{E}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}'
        )
    })
}

/// Unescape the five predefined XML entities.
///
/// Unknown or malformed entities are left unchanged.
///
/// # Examples
///
/// ```
/// use ave_docgen::common::xml::unescape_xml;
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
    use proptest::prelude::*;

    #[test]
    fn test_escape_all_specials() {
        assert_eq!(
            escape_xml(r#"<w:t a="1">'x' & y</w:t>"#),
            "&lt;w:t a=&quot;1&quot;&gt;&apos;x&apos; &amp; y&lt;/w:t&gt;"
        );
    }

    #[test]
    fn test_plain_text_untouched() {
        let text = "Efficiëntieslag door AI: alléén verbinden met Database A.";
        assert_eq!(escape_xml(text), text);
    }

    #[test]
    fn test_invalid_chars() {
        assert_eq!(invalid_xml_char("a\r\n\tb"), None);
        assert_eq!(invalid_xml_char("\u{0}"), Some('\u{0}'));
        assert_eq!(invalid_xml_char("x\u{1B}[0m"), Some('\u{1B}'));
        assert_eq!(invalid_xml_char("\u{FFFF}"), Some('\u{FFFF}'));
        assert_eq!(invalid_xml_char("Efficiëntie \u{1F600}"), None);
    }

    proptest! {
        #[test]
        fn escaped_text_has_no_raw_markup(s in "\\PC*") {
            let escaped = escape_xml(&s);
            prop_assert!(!escaped.contains('<'));
            prop_assert!(!escaped.contains('>'));
            prop_assert!(!escaped.contains('"'));
        }

        #[test]
        fn unescape_reverses_escape(s in "\\PC*") {
            prop_assert_eq!(unescape_xml(&escape_xml(&s)), s);
        }
    }
}
