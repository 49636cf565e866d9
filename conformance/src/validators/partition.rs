//! Partition validator.
//!
//! Buckets must be mutually exclusive and, together, cover every route found
//! under the app root.

use std::collections::{BTreeMap, BTreeSet};

use moaz_sitemap::collect::absolute_url;
use moaz_sitemap::discover::RouteMap;
use moaz_sitemap::{Bucket, SiteConfig, UrlCollection};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "partition";

/// Checks exclusivity across buckets and completeness against `discovered`,
/// the routes of a single walk over the whole app root.
pub fn validate(config: &SiteConfig, collection: &UrlCollection, discovered: &RouteMap) -> ConformanceReport {
    let mut report = ConformanceReport::new();

    let mut owners: BTreeMap<&str, Vec<Bucket>> = BTreeMap::new();
    for (bucket, entries) in collection.iter() {
        for entry in entries {
            owners.entry(entry.location.as_str()).or_default().push(bucket);
        }
    }

    let shared: Vec<String> = owners
        .iter()
        .filter(|(_, buckets)| buckets.len() > 1)
        .map(|(location, buckets)| {
            let names: Vec<&str> = buckets.iter().map(|b| b.as_str()).collect();
            format!("{location} in {}", names.join(", "))
        })
        .collect();
    if shared.is_empty() {
        report.push(TestResult::pass(VALIDATOR, None, "Every URL belongs to exactly one bucket"));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            None,
            format!("{} URL(s) claimed by more than one bucket", shared.len()),
            shared,
        ));
    }

    let expected: BTreeSet<String> = discovered
        .keys()
        .map(|route| absolute_url(&config.domain, "", route))
        .collect();
    let unclaimed: Vec<String> = expected
        .iter()
        .filter(|url| !owners.contains_key(url.as_str()))
        .cloned()
        .collect();
    let orphaned: Vec<String> = owners
        .keys()
        .filter(|url| !expected.contains(**url))
        .map(|url| url.to_string())
        .collect();

    if unclaimed.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            None,
            format!("All {} discovered routes are in a bucket", expected.len()),
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            None,
            format!("{} discovered route(s) missing from every bucket", unclaimed.len()),
            unclaimed,
        ));
    }
    if !orphaned.is_empty() {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            None,
            format!("{} bucket URL(s) do not match any discovered route", orphaned.len()),
            orphaned,
        ));
    }

    report
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use moaz_sitemap::UrlEntry;

    use super::*;

    fn discovered(routes: &[&str]) -> RouteMap {
        routes
            .iter()
            .map(|r| (r.to_string(), PathBuf::from("page.tsx")))
            .collect()
    }

    #[test]
    fn exclusive_and_complete_partition_passes() {
        let config = SiteConfig::default();
        let mut collection = UrlCollection::new();
        collection.insert(Bucket::Pages, vec![UrlEntry::new("https://moazhaider.com")]);
        collection.insert(Bucket::Services, vec![UrlEntry::new("https://moazhaider.com/services")]);

        let report = validate(&config, &collection, &discovered(&["/", "/services"]));
        assert!(report.all_passed(), "{:#?}", report.results);
    }

    #[test]
    fn shared_and_unclaimed_urls_fail() {
        let config = SiteConfig::default();
        let mut collection = UrlCollection::new();
        collection.insert(Bucket::Pages, vec![UrlEntry::new("https://moazhaider.com/services")]);
        collection.insert(Bucket::Services, vec![UrlEntry::new("https://moazhaider.com/services")]);

        let report = validate(&config, &collection, &discovered(&["/services", "/about"]));
        let messages: Vec<&str> = report.errors().map(|r| r.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "1 URL(s) claimed by more than one bucket",
                "1 discovered route(s) missing from every bucket",
            ]
        );
    }
}
