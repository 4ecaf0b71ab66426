//! Manifest and spine entries.

use std::collections::HashSet;

use crate::error::{Error, Result};

pub const XHTML_MEDIA_TYPE: &str = "application/xhtml+xml";
pub const CSS_MEDIA_TYPE: &str = "text/css";

/// Manifest `properties` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemProperty {
    Nav,
    CoverImage,
}

impl ItemProperty {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemProperty::Nav => "nav",
            ItemProperty::CoverImage => "cover-image",
        }
    }
}

/// One `<item>` of the package manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub id: String,
    /// Path relative to the package document.
    pub href: String,
    pub media_type: String,
    pub property: Option<ItemProperty>,
}

impl ManifestEntry {
    pub fn new(id: impl Into<String>, href: impl Into<String>, media_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            href: href.into(),
            media_type: media_type.into(),
            property: None,
        }
    }

    pub fn with_property(mut self, property: ItemProperty) -> Self {
        self.property = Some(property);
        self
    }
}

/// One `<itemref>` of the spine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpineEntry {
    pub idref: String,
}

/// Check that manifest ids are unique and every spine entry resolves to
/// exactly one manifest item.
pub fn validate(manifest: &[ManifestEntry], spine: &[SpineEntry]) -> Result<()> {
    let mut ids = HashSet::new();
    let mut hrefs = HashSet::new();
    for entry in manifest {
        if !ids.insert(entry.id.as_str()) {
            return Err(Error::InvalidPackage(format!(
                "duplicate manifest id '{}'",
                entry.id
            )));
        }
        if !hrefs.insert(entry.href.as_str()) {
            return Err(Error::InvalidPackage(format!(
                "duplicate manifest href '{}'",
                entry.href
            )));
        }
    }

    for item in spine {
        if !ids.contains(item.idref.as_str()) {
            return Err(Error::InvalidPackage(format!(
                "spine references unknown id '{}'",
                item.idref
            )));
        }
    }

    Ok(())
}
