//! Chapter sources and their rendered XHTML documents.

use std::fmt::Write;

use crate::config::EpubConfig;
use crate::segment::{Block, render_blocks, segment};
use crate::text::{escape_attr, escape_text, transform_body};
use crate::util::{is_space, split_lines};

/// Fixed name of the stylesheet every chapter links to.
pub const STYLESHEET_HREF: &str = "stylesheet.css";

/// Document id for the chapter at a 1-based position: `chapter01`, ..., `chapter100`.
pub fn chapter_id(index: usize) -> String {
    format!("chapter{index:02}")
}

/// One loaded chapter file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterSource {
    /// 1-based position in reading order.
    pub index: usize,
    /// File name stem.
    pub title: String,
    /// First line of the file.
    pub heading: String,
    /// Remaining lines, terminators stripped.
    pub body: Vec<String>,
}

impl ChapterSource {
    /// Split file text into heading and body.
    ///
    /// Lines break on every Unicode line boundary, including a lone `\r`.
    /// Returns `None` for a file with no lines at all; such chapters are skipped.
    pub fn from_text(index: usize, title: impl Into<String>, text: &str) -> Option<Self> {
        let mut lines = split_lines(text);
        let heading = lines.next()?.to_string();
        Some(Self {
            index,
            title: title.into(),
            heading,
            body: lines.map(str::to_string).collect(),
        })
    }

    pub fn id(&self) -> String {
        chapter_id(self.index)
    }
}

/// A chapter ready for packaging.
#[derive(Debug, Clone)]
pub struct RenderedChapter {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub blocks: Vec<Block>,
    /// Id of the following chapter, if any.
    pub next: Option<String>,
    /// The complete XHTML document.
    pub document: String,
}

impl RenderedChapter {
    pub fn href(&self) -> String {
        format!("{}.xhtml", self.id)
    }
}

/// Render a chapter into an XHTML document.
///
/// The body goes through escaping, ruby annotation, numeral wrapping and
/// segmentation in that order. `next_id` adds a link to the following chapter.
pub fn render(chapter: &ChapterSource, next_id: Option<&str>, config: &EpubConfig) -> RenderedChapter {
    let body = transform_body(&chapter.body.join("\n"));
    let blocks = segment(split_lines(&body));
    let subtitle = chapter.heading.trim_matches(is_space).to_string();

    let mut doc = String::new();
    doc.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!DOCTYPE html>\n");
    let lang = escape_attr(&config.language);
    let _ = writeln!(
        doc,
        "<html xmlns=\"http://www.w3.org/1999/xhtml\" xmlns:epub=\"http://www.idpf.org/2007/ops\" xml:lang=\"{lang}\" lang=\"{lang}\">"
    );
    doc.push_str("<head>\n  <meta charset=\"UTF-8\"/>\n");
    let _ = writeln!(doc, "  <title>{}</title>", escape_text(&chapter.title));
    let _ = writeln!(
        doc,
        "  <link rel=\"stylesheet\" type=\"text/css\" href=\"{STYLESHEET_HREF}\"/>"
    );
    doc.push_str("</head>\n<body>\n");
    let _ = writeln!(doc, "<h1>{}</h1>", escape_text(&chapter.title));
    let _ = writeln!(doc, "<h2>{}</h2>", escape_text(&subtitle));

    if !blocks.is_empty() {
        doc.push_str(&render_blocks(&blocks));
        doc.push('\n');
    }

    if let Some(next) = next_id {
        let _ = writeln!(
            doc,
            "<p class=\"next-link\"><a href=\"{}.xhtml\">{}</a></p>",
            escape_attr(next),
            escape_text(&config.next_link_label)
        );
    }

    doc.push_str("</body>\n</html>\n");

    RenderedChapter {
        id: chapter.id(),
        title: chapter.title.clone(),
        subtitle,
        blocks,
        next: next_id.map(str::to_string),
        document: doc,
    }
}

/// Render chapters in order, linking each one to its successor.
pub fn render_all(chapters: &[ChapterSource], config: &EpubConfig) -> Vec<RenderedChapter> {
    chapters
        .iter()
        .enumerate()
        .map(|(i, chapter)| {
            let next = chapters.get(i + 1).map(ChapterSource::id);
            log::debug!("Rendering {} ({})", chapter.id(), chapter.title);
            render(chapter, next.as_deref(), config)
        })
        .collect()
}
