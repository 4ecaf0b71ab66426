//! Tate-chu-yoko wrapping for short numerals.
//!
//! In vertical text, one- and two-digit numbers read best set upright as a
//! single horizontal unit. Runs of three or more digits are left alone.

use regex_lite::Captures;

use super::patterns::DIGIT_RUN_RE;

/// Longest digit run that still gets wrapped.
pub const MAX_TCY_DIGITS: usize = 2;

/// Wrap every 1-2 digit ASCII run in `<span class="tcy">`.
///
/// Only text outside markup tags is scanned, so digits inside tag names or
/// attribute values are never touched.
///
/// # Examples
///
/// ```
/// use txt2epub::text::wrap_numerals;
///
/// assert_eq!(wrap_numerals("3つ"), r#"<span class="tcy">3</span>つ"#);
/// assert_eq!(wrap_numerals("2024年"), "2024年");
/// ```
pub fn wrap_numerals(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 32);
    let mut rest = text;

    while let Some(open) = rest.find('<') {
        wrap_text_node(&mut out, &rest[..open]);
        let tag = &rest[open..];
        let close = tag.find('>').map_or(tag.len(), |i| i + 1);
        out.push_str(&tag[..close]);
        rest = &tag[close..];
    }
    wrap_text_node(&mut out, rest);

    out
}

fn wrap_text_node(out: &mut String, text: &str) {
    if text.is_empty() {
        return;
    }
    let wrapped = DIGIT_RUN_RE.replace_all(text, |caps: &Captures| {
        let digits = &caps[0];
        if digits.len() <= MAX_TCY_DIGITS {
            format!(r#"<span class="tcy">{digits}</span>"#)
        } else {
            digits.to_string()
        }
    });
    out.push_str(&wrapped);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_wraps_one_and_two_digits() {
        assert_eq!(
            wrap_numerals("第1話と第12話"),
            r#"第<span class="tcy">1</span>話と第<span class="tcy">12</span>話"#
        );
    }

    #[test]
    fn test_leaves_long_runs() {
        assert_eq!(wrap_numerals("西暦2025年"), "西暦2025年");
        assert_eq!(wrap_numerals("123"), "123");
    }

    #[test]
    fn test_full_width_digits_untouched() {
        assert_eq!(wrap_numerals("３つ"), "３つ");
    }

    #[test]
    fn test_skips_markup() {
        let input = r#"<ruby>彼<rt>かれ</rt></ruby>は3つ数えた"#;
        assert_eq!(
            wrap_numerals(input),
            r#"<ruby>彼<rt>かれ</rt></ruby>は<span class="tcy">3</span>つ数えた"#
        );
        assert_eq!(wrap_numerals(r#"<h2 id="a1">x</h2>"#), r#"<h2 id="a1">x</h2>"#);
    }

    #[test]
    fn test_already_wrapped_is_stable() {
        let once = wrap_numerals("10人");
        assert_eq!(wrap_numerals(&once), once);
    }

    #[test]
    fn test_unclosed_tag_copied_verbatim() {
        assert_eq!(wrap_numerals("a<b 12"), "a<b 12");
    }

    proptest! {
        #[test]
        fn prop_long_runs_never_wrapped(n in 100u32..1_000_000) {
            let s = format!("約{n}円");
            prop_assert_eq!(wrap_numerals(&s), s);
        }

        #[test]
        fn prop_short_runs_always_wrapped(n in 0u32..100) {
            let s = format!("約{n}円");
            let expected = format!(r#"約<span class="tcy">{n}</span>円"#);
            prop_assert_eq!(wrap_numerals(&s), expected);
        }
    }
}
