//! Offline sitemap validator for moazhaider.com.
//!
//! Re-collects every bucket from the page tree (no state is shared with a
//! previous generation run), re-paginates it, and checks the structural
//! invariants the published sitemaps depend on.
//!
//! # Checks
//!
//! | Validator | Severity | Rule |
//! |-----------|----------|------|
//! | `url/shape` | error | absolute, under the domain, no trailing slash, no `//` in the path |
//! | `duplicates` | error | no repeated location within a bucket |
//! | `partition` | error | buckets are exclusive and cover every discovered route |
//! | `pagination` | error | `max(1, ceil(n / page_size))` pages that reassemble the bucket |
//! | `coverage` | warning | bucket has at least one URL |
//!
//! # Entry Point
//!
//! ```no_run
//! use moaz_conformance::run_all;
//! use moaz_sitemap::SiteConfig;
//!
//! let config = SiteConfig::load(None).expect("invalid sitemap configuration");
//! let report = run_all(&config).expect("Failed to run validation");
//! println!("{}", moaz_conformance::render::render_text(&config, &report));
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod render;
pub mod report;
pub mod validators;

use anyhow::Result;
use moaz_sitemap::discover::{discover_routes, RouteMap};
use moaz_sitemap::paginate::expected_page_count;
use moaz_sitemap::{collect_urls, SiteConfig, UrlCollection};
use tracing::info;

pub use report::{BucketSummary, ConformanceReport, Severity, TestResult};

/// Number of example URLs kept per bucket for the report.
pub const SAMPLE_SIZE: usize = 3;

/// Collects the site from disk and runs every validator.
///
/// # Errors
///
/// Returns an error only for a configuration fault such as a zero page size.
pub fn run_all(config: &SiteConfig) -> Result<ConformanceReport> {
    info!(app_root = %config.app_root.display(), "collecting URLs for validation");
    let collection = collect_urls(config);
    let discovered = discover_routes(&config.app_root, &config.page_markers);
    run(config, &collection, &discovered)
}

/// Runs every validator over an already collected site.
///
/// Validators are run in this order:
/// 1. URL shape
/// 2. Duplicates within a bucket
/// 3. Partition exclusivity and completeness
/// 4. Pagination arithmetic
/// 5. Bucket coverage (warnings only)
///
/// # Errors
///
/// Returns an error only for a configuration fault such as a zero page size.
pub fn run(config: &SiteConfig, collection: &UrlCollection, discovered: &RouteMap) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();
    report.buckets = summarize(config, collection)?;

    report.extend(validators::url_shape::validate(config, collection));
    report.extend(validators::duplicates::validate(collection));
    report.extend(validators::partition::validate(config, collection, discovered));
    report.extend(validators::pagination::validate(config, collection)?);
    report.extend(validators::coverage::validate(collection));

    info!(
        errors = report.failure_count(),
        warnings = report.warnings().count(),
        "validation finished"
    );
    Ok(report)
}

fn summarize(config: &SiteConfig, collection: &UrlCollection) -> Result<Vec<BucketSummary>> {
    collection
        .iter()
        .map(|(bucket, entries)| -> Result<BucketSummary> {
            let spec = bucket.spec();
            Ok(BucketSummary {
                bucket,
                url_count: entries.len(),
                page_count: expected_page_count(entries.len(), config.page_size)?,
                default_priority: spec.default_priority,
                default_change_frequency: spec.default_change_frequency,
                samples: entries
                    .iter()
                    .take(SAMPLE_SIZE)
                    .map(|e| e.location.clone())
                    .collect(),
            })
        })
        .collect()
}
