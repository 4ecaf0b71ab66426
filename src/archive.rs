//! EPUB container writer.
//!
//! The `mimetype` entry must be the first entry and stored uncompressed so
//! readers can sniff the format from a fixed offset. Everything else is
//! deflated. Output to disk goes through a temporary file in the target
//! directory that is renamed into place only after the archive is complete.

use std::io::{Seek, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::chapter::{RenderedChapter, STYLESHEET_HREF};
use crate::config::EpubConfig;
use crate::error::Result;
use crate::package::{CONTAINER_XML, CoverImage, NAV_HREF, OPF_PATH, Package};

pub const MIMETYPE: &[u8] = b"application/epub+zip";

const CONTENT_DIR: &str = "OEBPS";

/// Everything that goes into one archive.
pub struct ArchiveContents<'a> {
    pub package: &'a Package,
    pub chapters: &'a [RenderedChapter],
    pub stylesheet: &'a [u8],
    pub cover: Option<&'a CoverImage>,
}

/// Write the archive to any [`Write`] + [`Seek`] destination.
pub fn write_archive<W: Write + Seek>(
    contents: &ArchiveContents<'_>,
    config: &EpubConfig,
    writer: W,
) -> Result<W> {
    let mut zip = ZipWriter::new(writer);

    let compression_level = config.compression_level.unwrap_or(6);
    let stored = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    let deflated = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(compression_level as i64));

    // 1. Write mimetype (must be first, uncompressed)
    zip.start_file("mimetype", stored)?;
    zip.write_all(MIMETYPE)?;

    // 2. Write container.xml
    zip.start_file("META-INF/container.xml", deflated)?;
    zip.write_all(CONTAINER_XML.as_bytes())?;

    // 3. Package and navigation documents
    zip.start_file(OPF_PATH, deflated)?;
    zip.write_all(contents.package.opf.as_bytes())?;

    zip.start_file(content_path(NAV_HREF), deflated)?;
    zip.write_all(contents.package.nav_document.as_bytes())?;

    // 4. Stylesheet and cover
    zip.start_file(content_path(STYLESHEET_HREF), deflated)?;
    zip.write_all(contents.stylesheet)?;

    if let Some(cover) = contents.cover {
        zip.start_file(content_path(&cover.href()), deflated)?;
        zip.write_all(&cover.data)?;
    }

    // 5. Chapters
    for chapter in contents.chapters {
        zip.start_file(content_path(&chapter.href()), deflated)?;
        zip.write_all(chapter.document.as_bytes())?;
    }

    Ok(zip.finish()?)
}

/// Write the archive to `path`, replacing any existing file atomically.
///
/// On failure nothing is left at `path`; the temporary file is removed.
pub fn write_archive_file(
    contents: &ArchiveContents<'_>,
    config: &EpubConfig,
    path: impl AsRef<Path>,
) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let tmp = NamedTempFile::new_in(dir)?;
    let file = write_archive(contents, config, tmp.reopen()?)?;
    file.sync_all()?;
    drop(file);

    tmp.persist(path)?;
    log::info!("Wrote {}", path.display());
    Ok(())
}

fn content_path(href: &str) -> String {
    format!("{CONTENT_DIR}/{href}")
}
