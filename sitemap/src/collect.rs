//! URL classification: discovered routes into buckets of absolute URL entries.
//!
//! The app root is walked once. Each route is owned by the bucket whose source
//! directory matches its first segment (after route groups are dropped), or by
//! `pages` when no bucket claims it, so every route has exactly one owner.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Local, NaiveDate};
use tracing::{info, warn};

use crate::config::{LastModifiedSource, SiteConfig};
use crate::discover::discover_routes;
use crate::model::{Bucket, UrlCollection, UrlEntry};

/// Builds the full collection, stamping entries with today's local date.
pub fn collect_urls(config: &SiteConfig) -> UrlCollection {
    collect_urls_on(config, Local::now().date_naive())
}

/// Builds the full collection using `today` as the generation date.
///
/// Never fails: a bucket without routes on disk is empty.
pub fn collect_urls_on(config: &SiteConfig, today: NaiveDate) -> UrlCollection {
    let mut buckets: BTreeMap<Bucket, Vec<UrlEntry>> = BTreeMap::new();

    for (route, marker) in discover_routes(&config.app_root, &config.page_markers) {
        let (bucket, relative) = classify_route(&route);
        let spec = bucket.spec();
        buckets.entry(bucket).or_default().push(UrlEntry {
            location: absolute_url(&config.domain, spec.url_prefix, &relative),
            last_modified: Some(last_modified(config.last_modified, &marker, today)),
            change_frequency: Some(spec.default_change_frequency),
            priority: Some(spec.priority_for(&relative)),
        });
    }

    let mut collection = UrlCollection::new();
    for bucket in Bucket::ALL {
        let mut entries = buckets.remove(&bucket).unwrap_or_default();
        entries.sort_by(|a, b| a.location.cmp(&b.location));

        info!(bucket = %bucket, urls = entries.len(), "collected bucket");
        collection.insert(bucket, entries);
    }

    collection
}

/// Returns the bucket owning an app-root route and the route relative to
/// that bucket's source directory (`/` for the bucket's own index).
pub fn classify_route(route: &str) -> (Bucket, String) {
    let trimmed = route.trim_start_matches('/');
    let (first, rest) = trimmed.split_once('/').unwrap_or((trimmed, ""));
    Bucket::ALL
        .into_iter()
        .find(|b| b.spec().source_dir == Some(first))
        .map(|b| (b, format!("/{rest}")))
        .unwrap_or_else(|| (Bucket::Pages, route.to_string()))
}

/// Joins `domain`, a bucket prefix and a route into an absolute URL with no
/// empty segments and no trailing slash (the bare domain stays as is).
pub fn absolute_url(domain: &str, prefix: &str, route: &str) -> String {
    let domain = domain.trim_end_matches('/');
    let path: Vec<&str> = prefix
        .split('/')
        .chain(route.split('/'))
        .filter(|s| !s.is_empty())
        .collect();
    if path.is_empty() {
        domain.to_string()
    } else {
        format!("{}/{}", domain, path.join("/"))
    }
}

fn last_modified(source: LastModifiedSource, marker: &Path, today: NaiveDate) -> NaiveDate {
    match source {
        LastModifiedSource::GenerationDate => today,
        LastModifiedSource::ContentMtime => match std::fs::metadata(marker).and_then(|m| m.modified()) {
            Ok(modified) => DateTime::<Local>::from(modified).date_naive(),
            Err(err) => {
                warn!(
                    marker = %marker.display(),
                    error = %err,
                    "cannot read page modification time, using generation date"
                );
                today
            }
        },
    }
}
