//! The book: rendered chapters plus everything needed to package them.

use std::io::{Seek, Write};
use std::path::Path;

use crate::archive::{ArchiveContents, write_archive, write_archive_file};
use crate::chapter::{ChapterSource, RenderedChapter, render_all};
use crate::config::{EpubConfig, Metadata};
use crate::error::Result;
use crate::package::{CoverImage, Package};

/// Stylesheet used when none is supplied: vertical writing, page breaks,
/// upright short numerals.
pub const DEFAULT_STYLESHEET: &str = include_str!("../assets/stylesheet.css");

/// A fully rendered book, ready to be written out.
///
/// # Example
///
/// ```no_run
/// use txt2epub::{Book, ChapterSource, EpubConfig, Metadata};
///
/// let chapters = vec![
///     ChapterSource::from_text(1, "第1話", "出会い\n　彼《かれ》は3つ数えた").unwrap(),
/// ];
/// let book = Book::new(Metadata::new("作品"), EpubConfig::default(), &chapters);
/// book.write_epub("作品.epub")?;
/// # Ok::<(), txt2epub::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Book {
    pub metadata: Metadata,
    pub config: EpubConfig,
    pub chapters: Vec<RenderedChapter>,
    pub stylesheet: Vec<u8>,
    pub cover: Option<CoverImage>,
}

impl Book {
    /// Render `sources` in order with the default stylesheet and no cover.
    pub fn new(metadata: Metadata, config: EpubConfig, sources: &[ChapterSource]) -> Self {
        let chapters = render_all(sources, &config);
        log::info!("Rendered {} chapter(s)", chapters.len());
        Self {
            metadata,
            config,
            chapters,
            stylesheet: DEFAULT_STYLESHEET.as_bytes().to_vec(),
            cover: None,
        }
    }

    pub fn with_stylesheet(mut self, stylesheet: Vec<u8>) -> Self {
        self.stylesheet = stylesheet;
        self
    }

    pub fn with_cover(mut self, cover: Option<CoverImage>) -> Self {
        self.cover = cover;
        self
    }

    /// Assemble manifest, spine and navigation for the current chapters.
    pub fn package(&self) -> Result<Package> {
        Package::assemble(
            &self.metadata,
            &self.config,
            &self.chapters,
            self.cover.as_ref(),
        )
    }

    /// Write the EPUB to `path` (atomically).
    pub fn write_epub(&self, path: impl AsRef<Path>) -> Result<()> {
        let package = self.package()?;
        write_archive_file(&self.contents(&package), &self.config, path)
    }

    /// Write the EPUB to any [`Write`] + [`Seek`] destination.
    pub fn write_epub_to_writer<W: Write + Seek>(&self, writer: W) -> Result<W> {
        let package = self.package()?;
        write_archive(&self.contents(&package), &self.config, writer)
    }

    fn contents<'a>(&'a self, package: &'a Package) -> ArchiveContents<'a> {
        ArchiveContents {
            package,
            chapters: &self.chapters,
            stylesheet: &self.stylesheet,
            cover: self.cover.as_ref(),
        }
    }
}
