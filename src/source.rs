//! Loading a work folder from disk.
//!
//! A text root holds one folder per work; each work folder holds one `.txt`
//! file per chapter, ordered by a natural sort of the file names. A work
//! folder may also contain `cover.jpg`/`cover.png` and a `book.json` with
//! metadata.

use std::path::{Path, PathBuf};

use crate::chapter::ChapterSource;
use crate::config::Metadata;
use crate::error::{Error, Result};
use crate::util::{decode_text, natural_cmp};

/// Name of the optional metadata file inside a work folder.
pub const METADATA_FILE: &str = "book.json";

const COVER_CANDIDATES: [&str; 3] = ["cover.jpg", "cover.jpeg", "cover.png"];

/// Pick the work folder under `text_root`: the first sub-folder in natural order.
pub fn find_work_dir(text_root: impl AsRef<Path>) -> Result<PathBuf> {
    let text_root = text_root.as_ref();
    let mut dirs = Vec::new();
    for entry in std::fs::read_dir(text_root)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            dirs.push(entry.path());
        }
    }
    sort_naturally(&mut dirs);

    if dirs.len() > 1 {
        log::warn!(
            "{} work folders under {}; using only the first",
            dirs.len(),
            text_root.display()
        );
    }

    dirs.into_iter()
        .next()
        .ok_or_else(|| Error::NoWorkFolder(text_root.to_path_buf()))
}

/// A loaded work folder.
#[derive(Debug, Clone)]
pub struct Work {
    pub dir: PathBuf,
    /// Folder name; the default book title and output file name.
    pub name: String,
    pub chapters: Vec<ChapterSource>,
    /// Chapter files with no lines, left out of the book.
    pub skipped: Vec<PathBuf>,
}

impl Work {
    /// Load every `.txt` chapter in `dir`.
    ///
    /// Empty files are skipped and the remaining chapters are numbered
    /// contiguously from 1. A folder without any chapter files is an error.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "book".to_string());

        let files = chapter_files(dir)?;
        if files.is_empty() {
            return Err(Error::NoChapters(dir.to_path_buf()));
        }

        let mut chapters = Vec::with_capacity(files.len());
        let mut skipped = Vec::new();
        for path in files {
            let bytes = std::fs::read(&path)?;
            let (text, fallback) = decode_text(&bytes);
            if fallback {
                log::warn!("{} is not UTF-8; decoded as Shift_JIS", path.display());
            }

            let title = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            match ChapterSource::from_text(chapters.len() + 1, title, &text) {
                Some(chapter) => {
                    log::debug!("Loaded {} as {}", path.display(), chapter.id());
                    chapters.push(chapter);
                }
                None => skipped.push(path),
            }
        }

        if !skipped.is_empty() {
            log::warn!("Skipped {} empty chapter file(s)", skipped.len());
        }
        if chapters.is_empty() {
            return Err(Error::NoChapters(dir.to_path_buf()));
        }

        log::info!("Loaded {} chapter(s) from {}", chapters.len(), dir.display());
        Ok(Self {
            dir: dir.to_path_buf(),
            name,
            chapters,
            skipped,
        })
    }

    /// `cover.jpg`, `cover.jpeg` or `cover.png` inside the work folder.
    pub fn find_cover(&self) -> Option<PathBuf> {
        COVER_CANDIDATES
            .iter()
            .map(|name| self.dir.join(name))
            .find(|p| p.is_file())
    }

    /// Metadata from `book.json` if present; the title defaults to the folder name.
    pub fn metadata(&self) -> Result<Metadata> {
        let path = self.dir.join(METADATA_FILE);
        let mut metadata = if path.is_file() {
            Metadata::from_json_file(&path)?
        } else {
            Metadata::default()
        };
        if metadata.title.is_empty() {
            metadata.title = self.name.clone();
        }
        Ok(metadata)
    }
}

fn chapter_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let is_txt = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("txt"));
        if is_txt && path.is_file() {
            files.push(path);
        }
    }
    sort_naturally(&mut files);
    Ok(files)
}

fn sort_naturally(paths: &mut [PathBuf]) {
    paths.sort_by(|a, b| {
        let a = a.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
        let b = b.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
        natural_cmp(&a, &b)
    });
}
