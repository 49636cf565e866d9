//! URL shape validator.
//!
//! Every entry must:
//! - be absolute (`http://` or `https://`) and parse as a URL
//! - live under the configured domain
//! - have no trailing slash unless it is the bare domain
//! - have no `//` after the scheme

use moaz_sitemap::{SiteConfig, UrlCollection};
use url::Url;

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "url/shape";

/// Checks the shape of every URL in every bucket.
pub fn validate(config: &SiteConfig, collection: &UrlCollection) -> ConformanceReport {
    let mut report = ConformanceReport::new();

    for (bucket, entries) in collection.iter() {
        let mut problems: Vec<String> = Vec::new();
        for entry in entries {
            problems.extend(
                shape_problems(&config.domain, &entry.location)
                    .into_iter()
                    .map(|p| format!("{}: {}", entry.location, p)),
            );
        }

        if problems.is_empty() {
            report.push(TestResult::pass(
                VALIDATOR,
                Some(bucket),
                format!("{} URLs well-formed", entries.len()),
            ));
        } else {
            report.push(TestResult::fail_with_details(
                VALIDATOR,
                Some(bucket),
                format!("{} malformed URL(s)", problems.len()),
                problems,
            ));
        }
    }

    report
}

/// Returns every rule `location` breaks. Empty means well-formed.
pub fn shape_problems(domain: &str, location: &str) -> Vec<&'static str> {
    let mut problems = Vec::new();

    let Some(after_scheme) = location
        .strip_prefix("https://")
        .or_else(|| location.strip_prefix("http://"))
    else {
        problems.push("not an absolute http(s) URL");
        return problems;
    };

    if Url::parse(location).is_err() {
        problems.push("does not parse as a URL");
    }

    let under_domain = location
        .strip_prefix(domain)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'));
    if !under_domain {
        problems.push("not under the configured domain");
    }

    if location.ends_with('/') && location != domain {
        problems.push("has a trailing slash");
    }

    if after_scheme.contains("//") {
        problems.push("contains a double slash in the path");
    }

    problems
}

#[cfg(test)]
mod tests {
    use moaz_sitemap::{Bucket, UrlEntry};

    use super::*;

    const DOMAIN: &str = "https://moazhaider.com";

    #[test]
    fn well_formed_urls_have_no_problems() {
        assert!(shape_problems(DOMAIN, DOMAIN).is_empty());
        assert!(shape_problems(DOMAIN, "https://moazhaider.com/services/audit").is_empty());
    }

    #[test]
    fn each_rule_is_reported() {
        assert_eq!(shape_problems(DOMAIN, "/about"), vec!["not an absolute http(s) URL"]);
        assert_eq!(
            shape_problems(DOMAIN, "https://moazhaider.com/about/"),
            vec!["has a trailing slash"]
        );
        assert_eq!(
            shape_problems(DOMAIN, "https://moazhaider.com//about"),
            vec!["contains a double slash in the path"]
        );
        assert_eq!(
            shape_problems(DOMAIN, "https://example.com/about"),
            vec!["not under the configured domain"]
        );
        assert_eq!(
            shape_problems(DOMAIN, "https://moazhaider.com.evil.io/x"),
            vec!["not under the configured domain"]
        );
    }

    #[test]
    fn failures_are_grouped_per_bucket() {
        let config = SiteConfig::default();
        let mut collection = UrlCollection::new();
        collection.insert(
            Bucket::Services,
            vec![
                UrlEntry::new("https://moazhaider.com/services"),
                UrlEntry::new("https://moazhaider.com/services/"),
                UrlEntry::new("services/audit"),
            ],
        );

        let report = validate(&config, &collection);
        let failures: Vec<_> = report.errors().collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].bucket, Some(Bucket::Services));
        assert_eq!(failures[0].details.len(), 2);
    }
}
