//! Sitemap generator for https://moazhaider.com/.
//!
//! Discovers page routes in the site's `app/` tree, classifies them into
//! buckets, paginates each bucket and renders sitemap protocol XML plus a
//! sitemap index.
//!
//! # Entry Point
//!
//! ```no_run
//! use std::path::PathBuf;
//! use moaz_sitemap::{generate, SiteConfig};
//!
//! let config = SiteConfig::load(None).expect("invalid sitemap configuration");
//! generate(&config, &PathBuf::from("public")).expect("Sitemap generation failed");
//! ```
//!
//! # Output Structure
//!
//! ```text
//! public/
//!   sitemap.xml               (index of every file below)
//!   robots.txt
//!   sitemaps/
//!     pages-1.xml
//!     services-1.xml
//!     <bucket>-<n>.xml        (at most `page_size` URLs each)
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod collect;
pub mod config;
pub mod discover;
pub mod error;
pub mod model;
pub mod paginate;
pub mod renderer;
pub mod set;
pub mod writer;

use std::path::Path;

use anyhow::Result;
use chrono::Local;

pub use collect::{collect_urls, collect_urls_on};
pub use config::SiteConfig;
pub use error::SitemapError;
pub use model::{Bucket, ChangeFrequency, SitemapIndexEntry, UrlCollection, UrlEntry};
pub use paginate::paginate;
pub use renderer::{render_sitemap, render_sitemap_index};
pub use set::SitemapSet;

/// Canonical URL of the sitemap index, referenced from `robots.txt`.
pub fn index_location(config: &SiteConfig) -> String {
    format!("{}/{}", config.domain, set::INDEX_PATH)
}

/// Canonical URL of `robots.txt`.
pub fn robots_location(config: &SiteConfig) -> String {
    format!("{}/robots.txt", config.domain)
}

/// Renders a `robots.txt` body that allows everything and points at the index.
pub fn render_robots(config: &SiteConfig) -> String {
    format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}\n",
        index_location(config)
    )
}

/// Counts from one [`generate`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    /// URLs across all buckets.
    pub url_count: usize,
    /// Sitemap page files written (excluding the index).
    pub file_count: usize,
}

/// Collects, renders and writes every sitemap file plus `robots.txt` into `out_dir`.
///
/// # Errors
///
/// Returns an error if the page size is invalid or any file cannot be written.
pub fn generate(config: &SiteConfig, out_dir: &Path) -> Result<GenerationSummary> {
    let today = Local::now().date_naive();
    let collection = collect_urls_on(config, today);
    let set = SitemapSet::build(config, &collection, today)?;

    set.write_to(out_dir)?;
    writer::write_under(out_dir, "robots.txt", &render_robots(config))?;

    Ok(GenerationSummary {
        url_count: collection.total(),
        file_count: set.files.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn robots_points_at_index() {
        let config = SiteConfig::default();
        let robots = render_robots(&config);
        assert!(robots.starts_with("User-agent: *\n"));
        assert!(robots.contains("Sitemap: https://moazhaider.com/sitemap.xml\n"));
    }

    #[test]
    fn entry_point_locations_use_domain() {
        let config = SiteConfig::default();
        assert_eq!(index_location(&config), "https://moazhaider.com/sitemap.xml");
        assert_eq!(robots_location(&config), "https://moazhaider.com/robots.txt");
    }
}
