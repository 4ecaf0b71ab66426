//! # txt2epub
//!
//! Turn a folder of Japanese plain-text chapters into a vertical EPUB3 book.
//!
//! ## Features
//!
//! - Ruby (furigana) notation: `｜base《reading》`, `漢字《かな》`, `漢字(かな)`
//! - Tate-chu-yoko for one- and two-digit numbers
//! - Paragraphs from indentation, spacers and page breaks from blank lines
//! - EPUB3 package with navigation document, optional cover and stylesheet
//!
//! ## Quick Start
//!
//! ```no_run
//! use txt2epub::{Book, EpubConfig, Work, find_work_dir};
//!
//! let work = Work::load(find_work_dir("text")?)?;
//! let book = Book::new(work.metadata()?, EpubConfig::default(), &work.chapters);
//! book.write_epub(format!("epub-output/{}.epub", work.name))?;
//! # Ok::<(), txt2epub::Error>(())
//! ```
//!
//! ## Working with text directly
//!
//! ```
//! use txt2epub::segment::{Block, segment};
//! use txt2epub::text::transform_body;
//!
//! let body = transform_body("彼《かれ》は3つ数えた");
//! let blocks = segment(body.lines());
//! assert_eq!(blocks.len(), 1);
//! assert!(matches!(blocks[0], Block::Paragraph(_)));
//! ```

pub mod archive;
pub mod book;
pub mod chapter;
pub mod config;
pub mod error;
pub mod package;
pub mod segment;
pub mod source;
pub mod text;
pub(crate) mod util;

pub use book::Book;
pub use chapter::{ChapterSource, RenderedChapter, chapter_id, render};
pub use config::{EpubConfig, Metadata};
pub use error::{Error, Result};
pub use package::{CoverImage, ImageType, Package};
pub use segment::Block;
pub use source::{Work, find_work_dir};
