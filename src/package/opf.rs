//! `content.opf` and `META-INF/container.xml`.

use std::fmt::Write;

use super::COVER_ID;
use super::manifest::{ManifestEntry, SpineEntry};
use crate::config::{EpubConfig, Metadata};
use crate::text::{escape_attr, escape_text};

/// Location of the package document inside the archive.
pub const OPF_PATH: &str = "OEBPS/content.opf";

/// Container.xml template.
pub const CONTAINER_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<container version="1.0" xmlns="urn:oasis:names:tc:opendocument:xmlns:container">
  <rootfiles>
    <rootfile full-path="OEBPS/content.opf" media-type="application/oebps-package+xml"/>
  </rootfiles>
</container>
"#;

/// Generate the EPUB3 package document.
pub fn package_document(
    metadata: &Metadata,
    config: &EpubConfig,
    manifest: &[ManifestEntry],
    spine: &[SpineEntry],
    has_cover: bool,
) -> String {
    let mut opf = String::new();

    opf.push_str(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<package xmlns="http://www.idpf.org/2007/opf" version="3.0" unique-identifier="bookid">
  <metadata xmlns:dc="http://purl.org/dc/elements/1.1/">
"#,
    );

    let _ = writeln!(
        opf,
        "    <dc:identifier id=\"bookid\">{}</dc:identifier>",
        escape_text(&metadata.identifier())
    );
    let _ = writeln!(opf, "    <dc:title>{}</dc:title>", escape_text(&metadata.title));
    let _ = writeln!(
        opf,
        "    <dc:language>{}</dc:language>",
        escape_text(&config.language)
    );
    for author in &metadata.authors {
        let _ = writeln!(opf, "    <dc:creator>{}</dc:creator>", escape_text(author));
    }
    if let Some(ref publisher) = metadata.publisher {
        let _ = writeln!(opf, "    <dc:publisher>{}</dc:publisher>", escape_text(publisher));
    }
    if let Some(ref description) = metadata.description {
        let _ = writeln!(
            opf,
            "    <dc:description>{}</dc:description>",
            escape_text(description)
        );
    }
    let _ = writeln!(
        opf,
        "    <meta property=\"dcterms:modified\">{}</meta>",
        escape_text(&metadata.modified())
    );
    if has_cover {
        let _ = writeln!(opf, "    <meta name=\"cover\" content=\"{COVER_ID}\"/>");
    }
    opf.push_str("  </metadata>\n");

    opf.push_str("  <manifest>\n");
    for item in manifest {
        let _ = write!(
            opf,
            "    <item id=\"{}\" href=\"{}\" media-type=\"{}\"",
            escape_attr(&item.id),
            escape_attr(&item.href),
            escape_attr(&item.media_type)
        );
        if let Some(property) = item.property {
            let _ = write!(opf, " properties=\"{}\"", property.as_str());
        }
        opf.push_str("/>\n");
    }
    opf.push_str("  </manifest>\n");

    if config.right_to_left {
        opf.push_str("  <spine page-progression-direction=\"rtl\">\n");
    } else {
        opf.push_str("  <spine>\n");
    }
    for item in spine {
        let _ = writeln!(opf, "    <itemref idref=\"{}\"/>", escape_attr(&item.idref));
    }
    opf.push_str("  </spine>\n</package>\n");

    opf
}
