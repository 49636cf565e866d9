//! Pagination validator.
//!
//! Re-paginates each bucket and checks the page count is
//! `max(1, ceil(n / page_size))`, no page is oversized, and the pages
//! concatenate back to the bucket.

use anyhow::Result;
use moaz_sitemap::paginate::{expected_page_count, paginate};
use moaz_sitemap::{SiteConfig, UrlCollection};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "pagination";

/// Validates pagination arithmetic for every bucket.
///
/// # Errors
///
/// Returns an error if the configured page size is zero. That is a
/// configuration fault, not a data problem, so it is not folded into the report.
pub fn validate(config: &SiteConfig, collection: &UrlCollection) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();
    let size = config.page_size;

    for (bucket, entries) in collection.iter() {
        let pages = paginate(entries, size)?;
        let expected = expected_page_count(entries.len(), size)?;
        let mut problems: Vec<String> = Vec::new();

        if pages.len() != expected {
            problems.push(format!(
                "{} URLs at {} per page gave {} page(s), expected {}",
                entries.len(),
                size,
                pages.len(),
                expected
            ));
        }
        for (i, page) in pages.iter().enumerate() {
            if page.len() > size {
                problems.push(format!("page {} holds {} URLs (limit {})", i + 1, page.len(), size));
            }
        }
        if pages.concat() != entries {
            problems.push("pages do not reassemble into the bucket in order".to_string());
        }

        if problems.is_empty() {
            report.push(TestResult::pass(
                VALIDATOR,
                Some(bucket),
                format!("{} page(s) for {} URLs", pages.len(), entries.len()),
            ));
        } else {
            report.push(TestResult::fail_with_details(
                VALIDATOR,
                Some(bucket),
                "Pagination mismatch",
                problems,
            ));
        }
    }

    Ok(report)
}
