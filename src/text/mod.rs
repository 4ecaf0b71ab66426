//! Text-to-markup transforms for chapter bodies.
//!
//! The body pipeline is fixed: XML-escape the raw text, convert ruby notation,
//! then wrap short numerals. Escaping first keeps the output well-formed; the
//! ruby notations use none of `&`, `<`, `>` so annotation is unaffected.

mod patterns;
mod ruby;
mod tcy;

use std::borrow::Cow;

pub use ruby::{RUBY_RULES, RubyRule, annotate};
pub use tcy::{MAX_TCY_DIGITS, wrap_numerals};

pub(crate) use patterns::INDENT_RE;

/// Escape text content (`&`, `<`, `>`), dropping characters XML 1.0 forbids.
pub fn escape_text(s: &str) -> Cow<'_, str> {
    match strip_illegal(s) {
        Cow::Borrowed(s) => quick_xml::escape::partial_escape(s),
        Cow::Owned(s) => Cow::Owned(quick_xml::escape::partial_escape(&s).into_owned()),
    }
}

/// Escape an attribute value (also quotes), dropping characters XML 1.0 forbids.
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    match strip_illegal(s) {
        Cow::Borrowed(s) => quick_xml::escape::escape(s),
        Cow::Owned(s) => Cow::Owned(quick_xml::escape::escape(&s).into_owned()),
    }
}

/// C0 controls other than tab, LF and CR, plus the two noncharacters.
fn is_xml_illegal(c: char) -> bool {
    matches!(
        c,
        '\u{00}'..='\u{08}' | '\u{0B}' | '\u{0C}' | '\u{0E}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}'
    )
}

fn strip_illegal(s: &str) -> Cow<'_, str> {
    if s.chars().any(is_xml_illegal) {
        Cow::Owned(s.chars().filter(|&c| !is_xml_illegal(c)).collect())
    } else {
        Cow::Borrowed(s)
    }
}

/// Run the full body pipeline over raw chapter text.
///
/// ```
/// use txt2epub::text::transform_body;
///
/// assert_eq!(
///     transform_body("彼《かれ》は3つ数えた"),
///     r#"<ruby>彼<rt>かれ</rt></ruby>は<span class="tcy">3</span>つ数えた"#
/// );
/// ```
pub fn transform_body(raw: &str) -> String {
    wrap_numerals(&annotate(&escape_text(raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_before_annotation() {
        assert_eq!(
            transform_body("A&B <猫《ねこ》>"),
            "A&amp;B &lt;<ruby>猫<rt>ねこ</rt></ruby>&gt;"
        );
    }

    #[test]
    fn test_escape_drops_control_characters() {
        assert_eq!(escape_text("前\u{0}\u{7}\u{1B}後\t<"), "前後\t&lt;");
        assert_eq!(escape_attr("a\u{0C}\"b"), "a&quot;b");
        assert!(matches!(escape_text("普通の文"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_digits_in_reading_wrapped_once() {
        assert_eq!(
            transform_body("｜第三《だい3》"),
            r#"<ruby>第三<rt>だい<span class="tcy">3</span></rt></ruby>"#
        );
    }

    #[test]
    fn test_escape_attr_quotes() {
        assert_eq!(escape_attr(r#"a"b"#), "a&quot;b");
    }
}
