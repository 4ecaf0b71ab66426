//! Error types for txt2epub operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading chapters or writing the EPUB.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Invalid metadata file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No work folder found under {}", .0.display())]
    NoWorkFolder(PathBuf),

    #[error("No chapter files found in {}", .0.display())]
    NoChapters(PathBuf),

    #[error("Inconsistent package: {0}")]
    InvalidPackage(String),

    #[error("Could not move archive into place: {0}")]
    Persist(#[from] tempfile::PersistError),
}

pub type Result<T> = std::result::Result<T, Error>;
