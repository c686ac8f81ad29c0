//! Sitemap generation.
//!
//! Turns the configured base URL and page list into a sitemaps.org document.
//! Serialization is pure: the caller supplies the `lastmod` instant, so one
//! timestamp is shared by every entry of a document.
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://ouru.app/</loc>
//!     <lastmod>2026-10-19T08:15:30.123Z</lastmod>
//!     <changefreq>weekly</changefreq>
//!     <priority>1.0</priority>
//!   </url>
//! </urlset>
//! ```

use crate::types::{ChangeFrequency, PageDescriptor, Priority};
use chrono::{DateTime, SecondsFormat, Utc};
use std::borrow::Cow;

pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Content type served with the sitemap document
pub const SITEMAP_CONTENT_TYPE: &str = "application/xml; charset=utf-8";

/// A resolved `<url>` entry
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub loc: String,
    pub change_frequency: ChangeFrequency,
    pub priority: Priority,
}

impl SitemapEntry {
    pub fn new(base_url: &str, page: &PageDescriptor) -> Self {
        SitemapEntry {
            loc: format!("{}{}", normalize_base_url(base_url), page.path),
            change_frequency: page.change_frequency,
            priority: page.priority,
        }
    }

    fn write_xml(&self, xml: &mut String, lastmod: &str) {
        xml.push_str("  <url>\n    <loc>");
        xml.push_str(&escape_xml(&self.loc));
        xml.push_str("</loc>\n    <lastmod>");
        xml.push_str(lastmod);
        xml.push_str("</lastmod>\n    <changefreq>");
        xml.push_str(self.change_frequency.as_str());
        xml.push_str("</changefreq>\n    <priority>");
        xml.push_str(&self.priority.to_string());
        xml.push_str("</priority>\n  </url>\n");
    }
}

/// Strip exactly one trailing `/` from the base URL.
pub fn normalize_base_url(url: &str) -> &str {
    url.strip_suffix('/').unwrap_or(url)
}

/// Resolve every page against the base URL, preserving order.
pub fn entries(base_url: &str, pages: &[PageDescriptor]) -> Vec<SitemapEntry> {
    pages
        .iter()
        .map(|page| SitemapEntry::new(base_url, page))
        .collect()
}

/// ISO-8601 UTC timestamp with millisecond precision, e.g. `2026-10-19T08:15:30.123Z`
pub fn format_lastmod(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Render the sitemap document. Never fails; a malformed base URL only
/// yields wrong `<loc>` values.
///
/// Unlike the Nuxt route this replaces, `<loc>` text is XML-escaped, so a
/// base URL carrying `&` still produces a well-formed document.
pub fn render_sitemap(base_url: &str, pages: &[PageDescriptor], lastmod: DateTime<Utc>) -> String {
    let lastmod = format_lastmod(lastmod);
    let mut xml = String::with_capacity(256 + pages.len() * 160);

    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"");
    xml.push_str(SITEMAP_NS);
    xml.push_str("\">\n");

    for entry in entries(base_url, pages) {
        entry.write_xml(&mut xml, &lastmod);
    }

    xml.push_str("</urlset>\n");
    xml
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}
