//! Sitemap protocol XML serialization.
//!
//! Pure string builders: no I/O. Every text node goes through [`escape_xml`].

use std::fmt::Write;

use crate::model::{SitemapIndexEntry, UrlEntry};

/// Namespace of `urlset` and `sitemapindex` documents.
pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Renders a `<urlset>` document with one `<url>` per entry.
///
/// `lastmod`, `changefreq` and `priority` are emitted only when set. Priority
/// is clamped to `[0.0, 1.0]` with one decimal place, and a NaN or infinite
/// priority is left out.
pub fn render_sitemap(entries: &[UrlEntry]) -> String {
    let mut xml = String::with_capacity(128 + entries.len() * 160);
    xml.push_str(XML_DECLARATION);
    xml.push('\n');
    let _ = writeln!(xml, r#"<urlset xmlns="{SITEMAP_NS}">"#);

    for entry in entries {
        xml.push_str("  <url>\n");
        let _ = writeln!(xml, "    <loc>{}</loc>", escape_xml(&entry.location));
        if let Some(date) = entry.last_modified {
            let _ = writeln!(xml, "    <lastmod>{}</lastmod>", escape_xml(&date.to_string()));
        }
        if let Some(freq) = entry.change_frequency {
            let _ = writeln!(xml, "    <changefreq>{}</changefreq>", escape_xml(freq.as_str()));
        }
        if let Some(priority) = entry.priority.filter(|p| p.is_finite()) {
            let _ = writeln!(xml, "    <priority>{:.1}</priority>", priority.clamp(0.0, 1.0));
        }
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

/// Renders a `<sitemapindex>` document with one `<sitemap>` per reference.
pub fn render_sitemap_index(sitemaps: &[SitemapIndexEntry]) -> String {
    let mut xml = String::with_capacity(128 + sitemaps.len() * 120);
    xml.push_str(XML_DECLARATION);
    xml.push('\n');
    let _ = writeln!(xml, r#"<sitemapindex xmlns="{SITEMAP_NS}">"#);

    for sitemap in sitemaps {
        xml.push_str("  <sitemap>\n");
        let _ = writeln!(xml, "    <loc>{}</loc>", escape_xml(&sitemap.location));
        if let Some(date) = sitemap.last_modified {
            let _ = writeln!(xml, "    <lastmod>{}</lastmod>", escape_xml(&date.to_string()));
        }
        xml.push_str("  </sitemap>\n");
    }

    xml.push_str("</sitemapindex>\n");
    xml
}

/// Escapes the five XML reserved characters.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
