//! The complete set of sitemap documents for one generation run.

use std::path::Path;

use anyhow::Result as AnyResult;
use chrono::NaiveDate;
use tracing::info;

use crate::config::SiteConfig;
use crate::error::Result;
use crate::model::{Bucket, SitemapIndexEntry, UrlCollection};
use crate::paginate::paginate;
use crate::renderer::{render_sitemap, render_sitemap_index};
use crate::writer;

/// Site-relative path of the sitemap index.
pub const INDEX_PATH: &str = "sitemap.xml";

/// One rendered sitemap page.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapFile {
    /// Owning bucket.
    pub bucket: Bucket,
    /// 1-based page number within the bucket.
    pub number: usize,
    /// Number of `<url>` entries in the page.
    pub url_count: usize,
    /// Site-relative path, e.g. `sitemaps/services-1.xml`.
    pub path: String,
    /// Index entry pointing at this file.
    pub index_entry: SitemapIndexEntry,
    /// Rendered XML.
    pub xml: String,
}

/// Every sitemap page plus the index that lists them.
#[derive(Debug, Clone)]
pub struct SitemapSet {
    /// Pages in bucket order, then page order.
    pub files: Vec<SitemapFile>,
    /// Rendered `sitemap.xml`.
    pub index_xml: String,
}

impl SitemapSet {
    /// Paginates and renders every bucket of `collection`.
    ///
    /// Each index entry's `lastmod` is the newest `lastmod` in its page, or
    /// `generated_on` when the page is empty.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SitemapError::InvalidConfiguration`] if the page size is zero.
    pub fn build(config: &SiteConfig, collection: &UrlCollection, generated_on: NaiveDate) -> Result<Self> {
        let mut files = Vec::new();

        for (bucket, entries) in collection.iter() {
            for (i, page) in paginate(entries, config.page_size)?.into_iter().enumerate() {
                let number = i + 1;
                let path = page_path(bucket, number);
                let last_modified = page
                    .iter()
                    .filter_map(|e| e.last_modified)
                    .max()
                    .unwrap_or(generated_on);
                files.push(SitemapFile {
                    bucket,
                    number,
                    url_count: page.len(),
                    index_entry: SitemapIndexEntry {
                        location: format!("{}/{}", config.domain, path),
                        last_modified: Some(last_modified),
                    },
                    path,
                    xml: render_sitemap(page),
                });
            }
        }

        let refs: Vec<SitemapIndexEntry> = files.iter().map(|f| f.index_entry.clone()).collect();
        let index_xml = render_sitemap_index(&refs);

        info!(
            files = files.len(),
            urls = collection.total(),
            "built sitemap set"
        );
        Ok(Self { files, index_xml })
    }

    /// Returns the page for `bucket` and 1-based `number`.
    pub fn page(&self, bucket: Bucket, number: usize) -> Option<&SitemapFile> {
        self.files
            .iter()
            .find(|f| f.bucket == bucket && f.number == number)
    }

    /// Returns the body served for an HTTP request path.
    ///
    /// Recognizes `/sitemap.xml` and `/sitemaps/{bucket}-{n}.xml`.
    pub fn resolve(&self, request_path: &str) -> Option<&str> {
        let path = request_path.split(['?', '#']).next().unwrap_or_default();
        if path.trim_start_matches('/') == INDEX_PATH {
            return Some(&self.index_xml);
        }
        let (bucket, number) = parse_page_path(path)?;
        self.page(bucket, number).map(|f| f.xml.as_str())
    }

    /// Writes the index and every page under `out_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if any file cannot be written.
    pub fn write_to(&self, out_dir: &Path) -> AnyResult<()> {
        writer::write_under(out_dir, INDEX_PATH, &self.index_xml)?;
        for file in &self.files {
            writer::write_under(out_dir, &file.path, &file.xml)?;
        }
        info!(out = %out_dir.display(), files = self.files.len() + 1, "wrote sitemap files");
        Ok(())
    }
}

/// Site-relative path of one sitemap page.
pub fn page_path(bucket: Bucket, number: usize) -> String {
    format!("sitemaps/{}-{}.xml", bucket, number)
}

/// Inverse of [`page_path`], with or without a leading `/`.
///
/// The page number must be written the way [`page_path`] writes it: ASCII
/// digits with no sign and no leading zero.
fn parse_page_path(path: &str) -> Option<(Bucket, usize)> {
    let stem = path
        .strip_prefix('/')
        .unwrap_or(path)
        .strip_prefix("sitemaps/")?
        .strip_suffix(".xml")?;
    let (bucket, number) = stem.rsplit_once('-')?;
    if number.starts_with('0') || !number.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((bucket.parse().ok()?, number.parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UrlEntry;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn sample() -> (SiteConfig, UrlCollection) {
        let config = SiteConfig {
            page_size: 2,
            ..SiteConfig::default()
        };
        let mut collection = UrlCollection::new();
        let services = ["a", "b", "c"]
            .iter()
            .enumerate()
            .map(|(i, s)| UrlEntry {
                last_modified: Some(day(i as u32 + 1)),
                ..UrlEntry::new(format!("https://moazhaider.com/services/{s}"))
            })
            .collect();
        collection.insert(Bucket::Services, services);
        (config, collection)
    }

    #[test]
    fn every_bucket_gets_at_least_one_file() {
        let (config, collection) = sample();
        let set = SitemapSet::build(&config, &collection, day(20)).unwrap();
        // six empty buckets with one page each, services split 2 + 1
        assert_eq!(set.files.len(), 8);
        assert_eq!(set.page(Bucket::Services, 2).map(|f| f.url_count), Some(1));
        assert_eq!(set.page(Bucket::Cities, 1).map(|f| f.url_count), Some(0));
        assert_eq!(set.index_xml.matches("<sitemap>").count(), 8);
    }

    #[test]
    fn index_lastmod_is_newest_entry_or_generation_day() {
        let (config, collection) = sample();
        let set = SitemapSet::build(&config, &collection, day(20)).unwrap();
        let first = set.page(Bucket::Services, 1).unwrap();
        assert_eq!(first.index_entry.last_modified, Some(day(2)));
        let empty = set.page(Bucket::Blogs, 1).unwrap();
        assert_eq!(empty.index_entry.last_modified, Some(day(20)));
        assert_eq!(
            empty.index_entry.location,
            "https://moazhaider.com/sitemaps/blogs-1.xml"
        );
    }

    #[test]
    fn resolves_request_paths() {
        let (config, collection) = sample();
        let set = SitemapSet::build(&config, &collection, day(20)).unwrap();
        assert_eq!(set.resolve("/sitemap.xml"), Some(set.index_xml.as_str()));
        let page = set.resolve("/sitemaps/services-2.xml").unwrap();
        assert!(page.contains("https://moazhaider.com/services/c"));
        assert!(set.resolve("/sitemaps/services-3.xml").is_none());
        assert!(set.resolve("/sitemaps/services-0.xml").is_none());
        assert!(set.resolve("/sitemaps/services-01.xml").is_none());
        assert!(set.resolve("/sitemaps/services-+1.xml").is_none());
        assert!(set.resolve("/sitemaps/services-.xml").is_none());
        assert!(set.resolve("sitemaps/services-1.xml").is_some());
        assert!(set.resolve("//sitemaps/services-1.xml").is_none());
        assert!(set.resolve("/sitemaps/unknown-1.xml").is_none());
        assert!(set.resolve("/robots.txt").is_none());
        assert!(set.resolve("/sitemap.xml?v=2").is_some());
    }
}
