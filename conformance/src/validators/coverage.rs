//! Bucket coverage validator: an empty bucket is a warning, never an error.
//!
//! Empty buckets still get one empty sitemap file, so crawlers see a
//! `<urlset>` with no `<url>` children for them.

use moaz_sitemap::UrlCollection;

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "coverage";

/// Warns about every bucket without URLs.
pub fn validate(collection: &UrlCollection) -> ConformanceReport {
    let mut report = ConformanceReport::new();

    for (bucket, entries) in collection.iter() {
        if entries.is_empty() {
            report.push(TestResult::warn(
                VALIDATOR,
                Some(bucket),
                format!("Bucket `{bucket}` has no URLs; its sitemap file will be empty"),
            ));
        }
    }

    report
}
