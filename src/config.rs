//! Output configuration and book metadata.

use std::path::Path;

use serde::Deserialize;
use uuid::Uuid;

use crate::error::Result;

/// Configuration for EPUB output.
#[derive(Debug, Clone)]
pub struct EpubConfig {
    /// `dc:language` and `xml:lang` of every document.
    pub language: String,
    /// Compression level for deflate (0-9, default 6).
    pub compression_level: Option<u32>,
    /// Text of the link at the end of each chapter but the last.
    pub next_link_label: String,
    /// Heading of the navigation document.
    pub toc_title: String,
    /// Emit `page-progression-direction="rtl"` on the spine.
    pub right_to_left: bool,
}

impl Default for EpubConfig {
    fn default() -> Self {
        Self {
            language: "ja".to_string(),
            compression_level: None,
            next_link_label: "次の章へ進む".to_string(),
            toc_title: "目次".to_string(),
            right_to_left: true,
        }
    }
}

impl EpubConfig {
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_compression_level(mut self, level: u32) -> Self {
        self.compression_level = Some(level.min(9));
        self
    }

    pub fn with_next_link_label(mut self, label: impl Into<String>) -> Self {
        self.next_link_label = label.into();
        self
    }

    pub fn with_toc_title(mut self, title: impl Into<String>) -> Self {
        self.toc_title = title.into();
        self
    }

    pub fn with_right_to_left(mut self, rtl: bool) -> Self {
        self.right_to_left = rtl;
        self
    }
}

/// Book metadata (Dublin Core subset).
///
/// Can be loaded from a `book.json` file; every field is optional there.
///
/// ```json
/// { "title": "銀河鉄道の夜", "authors": ["宮沢賢治"] }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Metadata {
    pub title: String,
    pub authors: Vec<String>,
    pub publisher: Option<String>,
    pub description: Option<String>,
    pub identifier: Option<String>,
    /// `dcterms:modified`, `YYYY-MM-DDThh:mm:ssZ`.
    pub modified: Option<String>,
}

impl Metadata {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.authors.push(author.into());
        self
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    pub fn with_modified(mut self, modified: impl Into<String>) -> Self {
        self.modified = Some(modified.into());
        self
    }

    /// Read metadata from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read(path)?;
        Ok(serde_json::from_slice(&data)?)
    }

    /// The package identifier; a name-based UUID of the title when unset.
    pub fn identifier(&self) -> String {
        match &self.identifier {
            Some(id) => id.clone(),
            None => {
                let uuid = Uuid::new_v5(&Uuid::NAMESPACE_URL, self.title.as_bytes());
                format!("urn:uuid:{uuid}")
            }
        }
    }

    /// The modification timestamp; the current UTC time when unset.
    pub fn modified(&self) -> String {
        match &self.modified {
            Some(ts) => ts.clone(),
            None => chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        }
    }
}
