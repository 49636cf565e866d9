//! Duplicate URL validator: no `location` may repeat within a bucket.

use std::collections::HashSet;

use moaz_sitemap::UrlCollection;

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "duplicates";

/// Reports every location that appears more than once in its bucket.
pub fn validate(collection: &UrlCollection) -> ConformanceReport {
    let mut report = ConformanceReport::new();

    for (bucket, entries) in collection.iter() {
        let mut seen: HashSet<&str> = HashSet::with_capacity(entries.len());
        let mut repeated: Vec<String> = Vec::new();
        for entry in entries {
            if !seen.insert(entry.location.as_str()) && !repeated.contains(&entry.location) {
                repeated.push(entry.location.clone());
            }
        }

        if repeated.is_empty() {
            report.push(TestResult::pass(VALIDATOR, Some(bucket), "No duplicate URLs"));
        } else {
            report.push(TestResult::fail_with_details(
                VALIDATOR,
                Some(bucket),
                format!("{} URL(s) listed more than once", repeated.len()),
                repeated,
            ));
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use moaz_sitemap::{Bucket, UrlEntry};

    use super::*;

    #[test]
    fn repeated_location_is_reported_once() {
        let mut collection = UrlCollection::new();
        collection.insert(
            Bucket::Pages,
            ["https://moazhaider.com/a", "https://moazhaider.com/a", "https://moazhaider.com/a"]
                .into_iter()
                .map(UrlEntry::new)
                .collect(),
        );

        let report = validate(&collection);
        let failures: Vec<_> = report.errors().collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].details, vec!["https://moazhaider.com/a"]);
    }

    #[test]
    fn same_url_in_different_buckets_is_not_a_duplicate_here() {
        let mut collection = UrlCollection::new();
        collection.insert(Bucket::Pages, vec![UrlEntry::new("https://moazhaider.com/x")]);
        collection.insert(Bucket::Cities, vec![UrlEntry::new("https://moazhaider.com/x")]);
        assert!(validate(&collection).all_passed());
    }
}
