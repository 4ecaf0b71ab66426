//! Cover image handling.

use std::path::Path;

use crate::error::Result;

/// Image formats accepted as a cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageType {
    Jpeg,
    Png,
}

impl ImageType {
    /// Recognize a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(ImageType::Jpeg),
            "png" => Some(ImageType::Png),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    pub fn media_type(self) -> &'static str {
        match self {
            ImageType::Jpeg => "image/jpeg",
            ImageType::Png => "image/png",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ImageType::Jpeg => "jpg",
            ImageType::Png => "png",
        }
    }
}

/// A cover image to embed in the package.
#[derive(Debug, Clone)]
pub struct CoverImage {
    pub image_type: ImageType,
    pub data: Vec<u8>,
}

impl CoverImage {
    pub fn new(image_type: ImageType, data: Vec<u8>) -> Self {
        Self { image_type, data }
    }

    /// Load a cover from disk.
    ///
    /// An unrecognized extension is not an error: the book is built without
    /// a cover and `Ok(None)` is returned.
    pub fn load(path: impl AsRef<Path>) -> Result<Option<Self>> {
        let path = path.as_ref();
        let Some(image_type) = ImageType::from_path(path) else {
            log::warn!(
                "Unsupported cover image {} (expected .jpg, .jpeg or .png); building without a cover",
                path.display()
            );
            return Ok(None);
        };
        let data = std::fs::read(path)?;
        Ok(Some(Self::new(image_type, data)))
    }

    /// Name of the image inside the package: `cover.jpg` or `cover.png`.
    pub fn href(&self) -> String {
        format!("cover.{}", self.image_type.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(ImageType::from_extension("jpg"), Some(ImageType::Jpeg));
        assert_eq!(ImageType::from_extension("JPEG"), Some(ImageType::Jpeg));
        assert_eq!(ImageType::from_extension("png"), Some(ImageType::Png));
        assert_eq!(ImageType::from_extension("gif"), None);
        assert_eq!(ImageType::from_extension("webp"), None);
    }

    #[test]
    fn test_unsupported_cover_degrades() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cover.gif");
        std::fs::write(&path, b"GIF89a").unwrap();
        assert!(CoverImage::load(&path).unwrap().is_none());
    }

    #[test]
    fn test_load_png_cover() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Cover.PNG");
        std::fs::write(&path, b"\x89PNG").unwrap();
        let cover = CoverImage::load(&path).unwrap().unwrap();
        assert_eq!(cover.image_type, ImageType::Png);
        assert_eq!(cover.href(), "cover.png");
        assert_eq!(cover.image_type.media_type(), "image/png");
    }
}
