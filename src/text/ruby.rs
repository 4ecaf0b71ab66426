//! Ruby (furigana) annotation.
//!
//! Three notations are recognized, applied in a fixed order:
//!
//! 1. `｜base《reading》` (or with an ASCII `|`): explicit base, any reading.
//! 2. `漢字《かんじ》`: implicit kanji base, kana reading.
//! 3. `漢字(かんじ)`: same, with ASCII parentheses.
//!
//! Each rule is a global leftmost-first substitution over the output of the
//! previous one, so an explicitly marked ruby is already markup by the time the
//! implicit rules run and can never be captured twice.

use std::sync::LazyLock;

use regex_lite::Regex;

use super::patterns::{BRACKET_RUBY_RE, EXPLICIT_RUBY_RE, PAREN_RUBY_RE, RUBY_MARKERS};

/// One substitution step of the annotator.
pub struct RubyRule {
    /// Short name used in logs and tests.
    pub name: &'static str,
    pattern: &'static LazyLock<Regex>,
    /// Reject matches directly preceded by a ruby marker (`｜` or `|`).
    marker_guard: bool,
}

/// The annotator's rules, in application order.
pub static RUBY_RULES: [RubyRule; 3] = [
    RubyRule {
        name: "explicit",
        pattern: &EXPLICIT_RUBY_RE,
        marker_guard: false,
    },
    RubyRule {
        name: "bracket",
        pattern: &BRACKET_RUBY_RE,
        marker_guard: true,
    },
    RubyRule {
        name: "paren",
        pattern: &PAREN_RUBY_RE,
        marker_guard: true,
    },
];

impl RubyRule {
    /// Replace every match of this rule in `text` with `<ruby>` markup.
    pub fn apply(&self, text: &str) -> String {
        let re: &Regex = self.pattern;
        let mut out = String::with_capacity(text.len());
        let mut copied = 0;
        let mut pos = 0;

        while let Some(caps) = re.captures_at(text, pos) {
            let (Some(whole), Some(base), Some(reading)) = (caps.get(0), caps.get(1), caps.get(2))
            else {
                break;
            };

            // Zero-width lookbehind: a guarded match is retried one character
            // later instead of being consumed.
            if self.marker_guard && preceded_by_marker(text, whole.start()) {
                pos = whole.start() + char_len_at(text, whole.start());
                continue;
            }

            out.push_str(&text[copied..whole.start()]);
            push_ruby(&mut out, base.as_str(), reading.as_str());
            copied = whole.end();
            pos = whole.end();
        }

        out.push_str(&text[copied..]);
        out
    }
}

/// Convert every ruby notation in `text` to `<ruby>` markup.
///
/// Text without any notation is returned unchanged.
///
/// # Examples
///
/// ```
/// use txt2epub::text::annotate;
///
/// assert_eq!(annotate("彼《かれ》"), "<ruby>彼<rt>かれ</rt></ruby>");
/// assert_eq!(annotate("｜銀河《ミルキーウェイ》"), "<ruby>銀河<rt>ミルキーウェイ</rt></ruby>");
/// ```
pub fn annotate(text: &str) -> String {
    RUBY_RULES
        .iter()
        .fold(text.to_string(), |acc, rule| rule.apply(&acc))
}

fn push_ruby(out: &mut String, base: &str, reading: &str) {
    out.push_str("<ruby>");
    out.push_str(base);
    out.push_str("<rt>");
    out.push_str(reading);
    out.push_str("</rt></ruby>");
}

fn preceded_by_marker(text: &str, at: usize) -> bool {
    text[..at]
        .chars()
        .next_back()
        .is_some_and(|c| RUBY_MARKERS.contains(&c))
}

fn char_len_at(text: &str, at: usize) -> usize {
    text[at..].chars().next().map_or(1, char::len_utf8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rule_order() {
        let names: Vec<_> = RUBY_RULES.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["explicit", "bracket", "paren"]);
    }

    #[test]
    fn test_explicit_ruby() {
        assert_eq!(
            annotate("これは｜魔法少女《まほうしょうじょ》です"),
            "これは<ruby>魔法少女<rt>まほうしょうじょ</rt></ruby>です"
        );
        assert_eq!(annotate("|ABC《えーびーしー》"), "<ruby>ABC<rt>えーびーしー</rt></ruby>");
    }

    #[test]
    fn test_explicit_ruby_allows_any_reading() {
        assert_eq!(
            annotate("｜剣《Excalibur》"),
            "<ruby>剣<rt>Excalibur</rt></ruby>"
        );
    }

    #[test]
    fn test_explicit_base_rejects_whitespace() {
        assert_eq!(annotate("｜あ い《あい》"), "｜あ い《あい》");
        assert_eq!(annotate("｜あ\u{3000}い《あい》"), "｜あ\u{3000}い《あい》");
    }

    #[test]
    fn test_explicit_base_length_limit() {
        let base: String = "あ".repeat(50);
        let input = format!("｜{base}《よみ》");
        assert_eq!(annotate(&input), format!("<ruby>{base}<rt>よみ</rt></ruby>"));

        let too_long: String = "あ".repeat(51);
        let input = format!("｜{too_long}《よみ》");
        assert_eq!(annotate(&input), input);
    }

    #[test]
    fn test_implicit_bracket_ruby() {
        assert_eq!(
            annotate("彼《かれ》は3つ数えた"),
            "<ruby>彼<rt>かれ</rt></ruby>は3つ数えた"
        );
    }

    #[test]
    fn test_implicit_bracket_takes_kanji_run_only() {
        assert_eq!(
            annotate("その東京《とうきょう》"),
            "その<ruby>東京<rt>とうきょう</rt></ruby>"
        );
    }

    #[test]
    fn test_implicit_requires_kana_reading() {
        assert_eq!(annotate("漢字《kanji》"), "漢字《kanji》");
    }

    #[test]
    fn test_implicit_paren_ruby() {
        assert_eq!(
            annotate("山田(やまだ)さん"),
            "<ruby>山田<rt>やまだ</rt></ruby>さん"
        );
        // Full-width parentheses are ordinary prose.
        assert_eq!(annotate("山田（やまだ）さん"), "山田（やまだ）さん");
    }

    #[test]
    fn test_iteration_marks_in_base() {
        assert_eq!(
            annotate("時々《ときどき》"),
            "<ruby>時々<rt>ときどき</rt></ruby>"
        );
    }

    #[test]
    fn test_marker_guard_is_zero_width() {
        // The base cannot start right after the marker, but the scan resumes
        // one character later instead of skipping the whole run.
        assert_eq!(
            annotate("｜漢字(かんじ)"),
            "｜漢<ruby>字<rt>かんじ</rt></ruby>"
        );
    }

    #[test]
    fn test_explicit_wins_over_implicit() {
        assert_eq!(
            annotate("｜東京《とうきょう》と大阪《おおさか》"),
            "<ruby>東京<rt>とうきょう</rt></ruby>と<ruby>大阪<rt>おおさか</rt></ruby>"
        );
    }

    #[test]
    fn test_kanji_run_longer_than_limit() {
        let run: String = "漢".repeat(21);
        let input = format!("{run}《かん》");
        let expected = format!("漢<ruby>{}<rt>かん</rt></ruby>", "漢".repeat(20));
        assert_eq!(annotate(&input), expected);
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(annotate("ただの文章です。"), "ただの文章です。");
        assert_eq!(annotate(""), "");
    }

    #[test]
    fn test_multiple_lines() {
        assert_eq!(
            annotate("猫《ねこ》\n犬《いぬ》"),
            "<ruby>猫<rt>ねこ</rt></ruby>\n<ruby>犬<rt>いぬ</rt></ruby>"
        );
    }

    proptest! {
        #[test]
        fn prop_annotate_is_idempotent(
            s in prop::collection::vec(
                prop_oneof![
                    Just("漢字《かんじ》".to_string()),
                    Just("｜魔法《まほう》".to_string()),
                    Just("山(やま)".to_string()),
                    Just("。".to_string()),
                    Just("\n".to_string()),
                    "[あ-ん]{1,3}",
                    "[一-龯]{1,3}",
                ],
                0..12
            )
        ) {
            let s: String = s.concat();
            let once = annotate(&s);
            prop_assert_eq!(annotate(&once), once);
        }
    }
}
