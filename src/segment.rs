//! Paragraph segmentation of chapter bodies.
//!
//! A one-pass scan over raw lines. Indented lines open a new paragraph,
//! unindented lines continue the current one (joined with no separator),
//! blank lines become spacers and a run of three blank lines becomes a page
//! break.
//!
//! | Blank lines in a run | Blocks emitted            |
//! |----------------------|---------------------------|
//! | 1                    | `EmptyParagraph`          |
//! | 2                    | `EmptyParagraph` x 2      |
//! | 3 or more            | `PageBreak`               |

use std::fmt::Write;

use crate::text::INDENT_RE;
use crate::util::is_space;

/// Blank lines in a row that turn into a page break.
pub const PAGE_BREAK_BLANKS: usize = 3;

/// A block-level unit of chapter content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A paragraph of already-transformed markup.
    Paragraph(String),
    /// An empty `<p>` used as a one-line spacer.
    EmptyParagraph,
    /// `<hr class="page-break"/>`.
    PageBreak,
}

impl Block {
    /// Append this block's XHTML to `out`.
    pub fn write_xhtml(&self, out: &mut String) {
        match self {
            Block::Paragraph(text) => {
                let _ = write!(out, "<p>{text}</p>");
            }
            Block::EmptyParagraph => out.push_str("<p></p>"),
            Block::PageBreak => out.push_str(r#"<hr class="page-break"/>"#),
        }
    }
}

/// Scanner state. Feed lines in order, then call [`Segmenter::finish`].
///
/// Blank lines are counted, not emitted; the run becomes spacers or a page
/// break once the next non-blank line (or the end of input) closes it.
#[derive(Debug, Default)]
pub struct Segmenter {
    blocks: Vec<Block>,
    buffer: String,
    blank_run: usize,
}

impl Segmenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one raw line (line terminator already stripped).
    pub fn feed(&mut self, line: &str) {
        if line.trim_matches(is_space).is_empty() {
            self.flush();
            self.blank_run += 1;
            return;
        }

        self.close_blank_run();
        if opens_paragraph(line) {
            self.flush();
        }
        self.buffer.push_str(line);
    }

    fn close_blank_run(&mut self) {
        match std::mem::take(&mut self.blank_run) {
            0 => {}
            n if n < PAGE_BREAK_BLANKS => {
                self.blocks
                    .extend(std::iter::repeat_n(Block::EmptyParagraph, n));
            }
            _ => self.blocks.push(Block::PageBreak),
        }
    }

    fn flush(&mut self) {
        if !self.buffer.is_empty() {
            self.blocks
                .push(Block::Paragraph(std::mem::take(&mut self.buffer)));
        }
    }

    /// Flush any pending paragraph or blank run and return the blocks in
    /// input order.
    pub fn finish(mut self) -> Vec<Block> {
        self.flush();
        self.close_blank_run();
        self.blocks
    }
}

/// Segment a sequence of lines into blocks.
///
/// ```
/// use txt2epub::segment::{Block, segment};
///
/// let blocks = segment(["一行目", "", "", "", "二行目"]);
/// assert_eq!(
///     blocks,
///     vec![
///         Block::Paragraph("一行目".into()),
///         Block::PageBreak,
///         Block::Paragraph("二行目".into()),
///     ]
/// );
/// ```
pub fn segment<'a, I>(lines: I) -> Vec<Block>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .fold(Segmenter::new(), |mut seg, line| {
            seg.feed(line);
            seg
        })
        .finish()
}

/// Render blocks as XHTML, one block per line.
pub fn render_blocks(blocks: &[Block]) -> String {
    let mut out = String::new();
    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        block.write_xhtml(&mut out);
    }
    out
}

fn opens_paragraph(line: &str) -> bool {
    INDENT_RE.is_match(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn p(s: &str) -> Block {
        Block::Paragraph(s.to_string())
    }

    #[test]
    fn test_single_line() {
        assert_eq!(segment(["こんにちは"]), vec![p("こんにちは")]);
    }

    #[test]
    fn test_empty_body() {
        assert!(segment(Vec::<&str>::new()).is_empty());
    }

    #[test]
    fn test_unindented_lines_join() {
        assert_eq!(segment(["一つ目", "二つ目"]), vec![p("一つ目二つ目")]);
    }

    #[test]
    fn test_indent_opens_paragraph() {
        assert_eq!(
            segment(["\u{3000}一つ目", "続き", "\u{3000}二つ目"]),
            vec![p("\u{3000}一つ目続き"), p("\u{3000}二つ目")]
        );
        assert_eq!(
            segment(["  a", "  b", " c"]),
            vec![p("  a"), p("  b c")]
        );
    }

    #[test]
    fn test_one_blank_line() {
        assert_eq!(
            segment(["a", "", "b"]),
            vec![p("a"), Block::EmptyParagraph, p("b")]
        );
    }

    #[test]
    fn test_two_blank_lines() {
        assert_eq!(
            segment(["a", "", "", "b"]),
            vec![p("a"), Block::EmptyParagraph, Block::EmptyParagraph, p("b")]
        );
    }

    #[test]
    fn test_three_blank_lines_page_break() {
        assert_eq!(
            segment(["一行目", "", "", "", "二行目"]),
            vec![p("一行目"), Block::PageBreak, p("二行目")]
        );
    }

    #[test]
    fn test_five_blank_lines_same_as_three() {
        assert_eq!(
            segment(["a", "", "", "", "", "", "b"]),
            segment(["a", "", "", "", "b"])
        );
    }

    #[test]
    fn test_whitespace_only_line_is_blank() {
        assert_eq!(
            segment(["a", " \u{3000}\t", "b"]),
            vec![p("a"), Block::EmptyParagraph, p("b")]
        );
    }

    #[test]
    fn test_blank_run_resets_after_text() {
        assert_eq!(
            segment(["a", "", "", "b", "", "c"]),
            vec![
                p("a"),
                Block::EmptyParagraph,
                Block::EmptyParagraph,
                p("b"),
                Block::EmptyParagraph,
                p("c"),
            ]
        );
    }

    #[test]
    fn test_leading_blanks() {
        assert_eq!(
            segment(["", "", "", "a"]),
            vec![Block::PageBreak, p("a")]
        );
    }

    #[test]
    fn test_trailing_blanks() {
        assert_eq!(
            segment(["a", "", ""]),
            vec![p("a"), Block::EmptyParagraph, Block::EmptyParagraph]
        );
        assert_eq!(segment(["a", "", "", "", ""]), vec![p("a"), Block::PageBreak]);
    }

    #[test]
    fn test_blocks_only_grow() {
        let mut seg = Segmenter::new();
        let mut seen = 0;
        for line in ["a", "", "", "", "b", "", "c"] {
            seg.feed(line);
            assert!(seg.blocks.len() >= seen);
            seen = seg.blocks.len();
        }
        assert_eq!(
            seg.finish(),
            vec![p("a"), Block::PageBreak, p("b"), Block::EmptyParagraph, p("c")]
        );
    }

    #[test]
    fn test_separator_only_line_is_blank() {
        assert_eq!(
            segment(["a", "\u{1F}", "b"]),
            vec![p("a"), Block::EmptyParagraph, p("b")]
        );
    }

    #[test]
    fn test_render_blocks() {
        let html = render_blocks(&[p("a"), Block::EmptyParagraph, Block::PageBreak]);
        assert_eq!(html, "<p>a</p>\n<p></p>\n<hr class=\"page-break\"/>");
    }

    proptest! {
        #[test]
        fn prop_blank_run_blocks(n in 1usize..10) {
            let mut lines = vec!["a"];
            lines.extend(std::iter::repeat_n("", n));
            lines.push("b");
            let blocks = segment(lines);
            let middle = &blocks[1..blocks.len() - 1];
            if n < PAGE_BREAK_BLANKS {
                prop_assert_eq!(middle.len(), n);
                prop_assert!(middle.iter().all(|b| *b == Block::EmptyParagraph));
            } else {
                prop_assert_eq!(middle, &[Block::PageBreak][..]);
            }
        }
    }
}
