//! Package assembly: manifest, spine, navigation and container documents.
//!
//! Everything here is derived from the ordered list of rendered chapters, so
//! the ids written into `content.opf` and `nav.xhtml` are the same ids the
//! chapter documents were rendered with.

mod cover;
mod manifest;
mod nav;
mod opf;

pub use cover::{CoverImage, ImageType};
pub use manifest::{
    CSS_MEDIA_TYPE, ItemProperty, ManifestEntry, SpineEntry, XHTML_MEDIA_TYPE, validate,
};
pub use nav::{NAV_HREF, NavEntry, nav_document};
pub use opf::{CONTAINER_XML, OPF_PATH, package_document};

use crate::chapter::{RenderedChapter, STYLESHEET_HREF};
use crate::config::{EpubConfig, Metadata};
use crate::error::Result;

pub const NAV_ID: &str = "nav";
pub const STYLESHEET_ID: &str = "stylesheet";
pub const COVER_ID: &str = "cover-image";

/// The generated package-level documents of a book.
#[derive(Debug, Clone)]
pub struct Package {
    pub manifest: Vec<ManifestEntry>,
    pub spine: Vec<SpineEntry>,
    pub nav: Vec<NavEntry>,
    /// `content.opf`.
    pub opf: String,
    /// `nav.xhtml`.
    pub nav_document: String,
}

impl Package {
    /// Build the manifest, spine and navigation for `chapters`.
    ///
    /// Chapter entries come first, in reading order, followed by the
    /// navigation document, the stylesheet and the cover (if any).
    pub fn assemble(
        metadata: &Metadata,
        config: &EpubConfig,
        chapters: &[RenderedChapter],
        cover: Option<&CoverImage>,
    ) -> Result<Self> {
        let mut manifest: Vec<ManifestEntry> = chapters
            .iter()
            .map(|ch| ManifestEntry::new(&ch.id, ch.href(), XHTML_MEDIA_TYPE))
            .collect();

        manifest.push(
            ManifestEntry::new(NAV_ID, NAV_HREF, XHTML_MEDIA_TYPE).with_property(ItemProperty::Nav),
        );
        manifest.push(ManifestEntry::new(
            STYLESHEET_ID,
            STYLESHEET_HREF,
            CSS_MEDIA_TYPE,
        ));
        if let Some(cover) = cover {
            manifest.push(
                ManifestEntry::new(COVER_ID, cover.href(), cover.image_type.media_type())
                    .with_property(ItemProperty::CoverImage),
            );
        }

        let spine: Vec<SpineEntry> = chapters
            .iter()
            .map(|ch| SpineEntry {
                idref: ch.id.clone(),
            })
            .collect();

        validate(&manifest, &spine)?;

        let nav: Vec<NavEntry> = chapters
            .iter()
            .map(|ch| NavEntry {
                label: ch.title.clone(),
                href: ch.href(),
            })
            .collect();

        let opf = package_document(metadata, config, &manifest, &spine, cover.is_some());
        let nav_document = nav_document(config, &nav);

        Ok(Self {
            manifest,
            spine,
            nav,
            opf,
            nav_document,
        })
    }
}
