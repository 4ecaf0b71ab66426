//! Cached regex patterns for the text transforms.
//!
//! Uses LazyLock to compile patterns once on first use. `regex-lite` has no
//! Unicode-aware `\s`, so the separator controls, NEL, and the full-width and
//! no-break spaces are spelled out.

use regex_lite::Regex;
use std::sync::LazyLock;

/// Ideographs and iteration marks that may carry an implicit reading.
const KANJI: &str = "一-龯々〆ヵヶ";

/// Hiragana, katakana, voicing marks and the prolonged sound mark.
const KANA: &str = "ぁ-ゖ゛゜ーァ-ヾ";

/// Characters that open an explicitly delimited ruby base.
pub const RUBY_MARKERS: [char; 2] = ['｜', '|'];

/// `｜base《reading》` with a base of 1-50 characters.
pub static EXPLICIT_RUBY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"[｜|]([^\s",
        r"\x1C-\x1F\x{85}",
        "\u{00A0}\u{1680}\u{2000}-\u{200A}\u{2028}\u{2029}\u{202F}\u{205F}\u{3000}",
        r"《｜|()]{1,50})《(.+?)》"
    ))
    .unwrap()
});

/// `漢字《かんじ》` without a marker.
pub static BRACKET_RUBY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("([{KANJI}]{{1,20}})《([{KANA}]{{1,20}})》")).unwrap()
});

/// `漢字(かんじ)` with ASCII parentheses.
pub static PAREN_RUBY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"([{KANJI}]{{1,20}})\(([{KANA}]{{1,20}})\)")).unwrap()
});

/// Maximal runs of ASCII digits.
pub static DIGIT_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());

/// A line that opens a new paragraph: full-width space or two+ whitespace.
pub static INDENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        "^(\u{3000}|[",
        r"\s",
        r"\x1C-\x1F\x{85}",
        "\u{00A0}\u{1680}\u{2000}-\u{200A}\u{2028}\u{2029}\u{202F}\u{205F}\u{3000}",
        r"]{2,})"
    ))
    .unwrap()
});
