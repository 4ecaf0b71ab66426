//! EPUB3 navigation document.

use std::fmt::Write;

use crate::config::EpubConfig;
use crate::text::{escape_attr, escape_text};

pub const NAV_HREF: &str = "nav.xhtml";

/// One table-of-contents link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub label: String,
    pub href: String,
}

/// Generate `nav.xhtml` with a flat `toc` list.
pub fn nav_document(config: &EpubConfig, entries: &[NavEntry]) -> String {
    let mut nav = String::new();
    let lang = escape_attr(&config.language);
    let title = escape_text(&config.toc_title);

    nav.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!DOCTYPE html>\n");
    let _ = writeln!(
        nav,
        "<html xmlns=\"http://www.w3.org/1999/xhtml\" xmlns:epub=\"http://www.idpf.org/2007/ops\" xml:lang=\"{lang}\" lang=\"{lang}\">"
    );
    let _ = writeln!(nav, "<head>\n  <meta charset=\"UTF-8\"/>\n  <title>{title}</title>\n</head>");
    nav.push_str("<body>\n<nav epub:type=\"toc\" id=\"toc\">\n");
    let _ = writeln!(nav, "  <h1>{title}</h1>");
    nav.push_str("  <ol>\n");

    for entry in entries {
        let _ = writeln!(
            nav,
            "    <li><a href=\"{}\">{}</a></li>",
            escape_attr(&entry.href),
            escape_text(&entry.label)
        );
    }

    nav.push_str("  </ol>\n</nav>\n</body>\n</html>\n");
    nav
}
